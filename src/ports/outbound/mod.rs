/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog API, file system, container runtime).
pub mod catalog_api;
pub mod cert_tool_runner;
pub mod declaration_reader;
pub mod output_presenter;

pub use catalog_api::{CatalogApi, Envelope, Page};
pub use cert_tool_runner::{CertToolRunner, RunnerConfig};
pub use declaration_reader::{DeclarationReader, STDIN_PATH};
pub use output_presenter::OutputPresenter;
