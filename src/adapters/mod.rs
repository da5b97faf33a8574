/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the catalog API, the filesystem
/// and the container runtime.
pub mod outbound;
