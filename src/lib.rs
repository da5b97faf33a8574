//! productctl - manage partner product listings against the catalog API
//!
//! This library reconciles a declarative product listing (a YAML document
//! naming the listing and its certification components) with the catalog
//! GraphQL backend, and turns a declaration plus a certification mapping
//! into an ansible inventory for the certification images.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`catalog`): entities, declarations, inventory
//!   generation and pagination
//! - **Application Layer** (`application`): Use cases and request DTOs
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): GraphQL client, filesystem and podman
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use productctl::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<()> {
//! let reader = FileSystemReader::new();
//! let declaration = reader.read_declaration(Path::new("product.yaml"))?;
//!
//! let client = PyxisGraphQlClient::new(ENDPOINT_STAGE, "my-api-token")?;
//! let applied = ApplyProductUseCase::new(&client).execute(declaration)?;
//!
//! println!("{}", applied.to_yaml_string()?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ports;
pub mod shared;
pub mod version;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::container::PodmanRunner;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, LazyOverwriter, NewFileWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::network::PyxisGraphQlClient;
    pub use crate::application::dto::{CertificationTool, CertifyRequest, CertifyResponse};
    pub use crate::application::use_cases::{
        ApplyProductUseCase, ArchiveComponentUseCase, CertifyComponentsUseCase,
        CleanupProductUseCase, DeleteProductListingUseCase, PopulateProductUseCase,
    };
    pub use crate::catalog::domain::{
        Component, Inventory, MappingDeclaration, ProductListing, ProductListingDeclaration,
    };
    pub use crate::catalog::services::InventoryGenerator;
    pub use crate::config::{
        UserConfig, ENDPOINT_PROD, ENDPOINT_QA, ENDPOINT_STAGE, ENDPOINT_UAT,
    };
    pub use crate::ports::outbound::{
        CatalogApi, CertToolRunner, DeclarationReader, Envelope, OutputPresenter, Page,
        RunnerConfig,
    };
    pub use crate::shared::error::{ProductctlError, ResponseError};
    pub use crate::shared::Result;
}
