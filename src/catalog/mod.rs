/// Catalog domain - declaration model and the pure services built on it
///
/// Nothing in this module performs I/O. Remote access goes through the
/// `CatalogApi` port and file access through the filesystem adapters.
pub mod domain;
pub mod services;
