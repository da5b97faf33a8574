use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::application::dto::CertificationTool;

/// Manage partner product listings and their certification components
#[derive(Parser, Debug)]
#[command(name = "productctl")]
#[command(about = "Manage partner product listings and their certification components", long_about = None)]
pub struct Cli {
    /// Log verbosity: error, warn, info, debug or trace
    #[arg(long, global = true, env = "PRODUCTCTL_LOG_LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print version information
    Version {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage product listings and their attached components
    Product {
        #[command(flatten)]
        target: CatalogTarget,

        #[command(subcommand)]
        command: ProductCommand,
    },

    /// One-off operations against single catalog entities
    Util {
        #[command(flatten)]
        target: CatalogTarget,

        #[command(subcommand)]
        command: UtilCommand,
    },

    /// Experimental certification tooling
    Alpha {
        #[command(subcommand)]
        command: AlphaCommand,
    },
}

/// Which catalog deployment to talk to.
#[derive(Args, Debug, Clone, Default)]
pub struct CatalogTarget {
    /// Catalog environment: prod, stage, qa or uat
    #[arg(long, global = true)]
    pub env: Option<String>,

    /// GraphQL endpoint URL; takes precedence over --env
    #[arg(long, global = true, value_name = "URL")]
    pub custom_endpoint: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum ProductCommand {
    /// Write a new product listing declaration scaffold
    Create {
        /// Destination file; must not exist
        file: PathBuf,
    },

    /// Create or update the declared listing and components, then refresh
    /// the declaration from the catalog
    Apply {
        /// Declaration file, or - for stdin (result goes to stdout)
        file: PathBuf,

        /// Copy the declaration aside before rewriting it
        #[arg(long)]
        backup_declaration_on_overwrite: bool,
    },

    /// Print the declaration for an existing listing
    Fetch {
        listing_id: String,
    },

    /// Print a declaration with all catalog identifiers removed
    Sanitize {
        file: PathBuf,
    },

    /// Detach and archive every component, delete the listing, and rewrite
    /// the declaration without catalog identifiers
    Cleanup {
        /// Declaration file, or - for stdin (result goes to stdout)
        file: PathBuf,

        /// Copy the declaration aside before rewriting it
        #[arg(long)]
        backup_declaration_on_overwrite: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum UtilCommand {
    /// Archive a single component
    ArchiveComponent {
        component_id: String,
    },

    /// Delete a single product listing, leaving its components untouched
    #[command(name = "delete-productlisting")]
    DeleteProductListing {
        listing_id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum AlphaCommand {
    /// Print the ansible inventory for a declaration and mapping
    GenerateInventory {
        product: PathBuf,
        mapping: PathBuf,
    },

    /// Run a certification image over the declared components
    Certify {
        #[command(subcommand)]
        tool: CertifyCommand,
    },
}

#[derive(Subcommand, Debug)]
pub enum CertifyCommand {
    /// Certify container images
    Containers(CertifyArgs),
    /// Certify operator bundles
    Operators(CertifyArgs),
    /// Certify Helm charts
    HelmCharts(CertifyArgs),
}

impl CertifyCommand {
    pub fn into_parts(self) -> (CertificationTool, CertifyArgs) {
        match self {
            CertifyCommand::Containers(args) => (CertificationTool::Containers, args),
            CertifyCommand::Operators(args) => (CertificationTool::Operators, args),
            CertifyCommand::HelmCharts(args) => (CertificationTool::HelmCharts, args),
        }
    }
}

#[derive(Args, Debug)]
pub struct CertifyArgs {
    /// Product listing declaration
    pub product: PathBuf,

    /// Component certification mapping
    pub mapping: PathBuf,

    /// Directory of extra files made available to the tool
    #[arg(long)]
    pub userfiles_dir: Option<PathBuf>,

    /// Directory the tool writes its logs to
    #[arg(long)]
    pub logs_dir: Option<PathBuf>,

    /// Catalog API token passed to the tool for result submission
    #[arg(long)]
    pub catalog_api_token: Option<String>,

    /// Certification image to run instead of the default
    #[arg(long)]
    pub runtime_image: Option<String>,

    /// Keep the temporary directory holding generated assets
    #[arg(long)]
    pub keep_temp_dir: bool,
}
