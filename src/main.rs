use owo_colors::OwoColorize;
use productctl::adapters::outbound::container::PodmanRunner;
use productctl::adapters::outbound::filesystem::{
    FileSystemReader, LazyOverwriter, NewFileWriter, StdoutPresenter,
};
use productctl::adapters::outbound::network::PyxisGraphQlClient;
use productctl::application::dto::CertifyRequest;
use productctl::application::use_cases::{
    ApplyProductUseCase, ArchiveComponentUseCase, CertifyComponentsUseCase,
    CleanupProductUseCase, DeleteProductListingUseCase, PopulateProductUseCase,
};
use productctl::catalog::domain::ProductListingDeclaration;
use productctl::catalog::services::InventoryGenerator;
use productctl::cli::{
    AlphaCommand, CatalogTarget, Cli, Command, ProductCommand, UtilCommand,
};
use productctl::config::UserConfig;
use productctl::logging;
use productctl::ports::outbound::{DeclarationReader, OutputPresenter, STDIN_PATH};
use productctl::shared::error::ExitCode;
use productctl::shared::Result;
use productctl::version::VersionInfo;
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    // Argument errors exit with ExitCode::InvalidArguments (2) inside clap.
    let cli = Cli::parse_args();

    if let Err(e) = run(cli) {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\n{} {}", "Caused by:".yellow(), err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

fn run(cli: Cli) -> Result<()> {
    if let Command::Version { json } = cli.command {
        return print_version(json);
    }

    let target = match &cli.command {
        Command::Product { target, .. } | Command::Util { target, .. } => target.clone(),
        _ => CatalogTarget::default(),
    };

    let config = UserConfig::load()?.with_overrides(cli.log_level, target.env.clone());
    logging::init(&config.log_level);
    if let Some(source) = &config.source {
        tracing::debug!(path = %source.display(), "loaded config file");
    }
    if let Some(org_id) = config.org_id {
        tracing::debug!(org_id, "organization configured");
    }

    match cli.command {
        Command::Version { .. } => Ok(()),
        Command::Product { command, .. } => run_product(command, &config, &target),
        Command::Util { command, .. } => run_util(command, &config, &target),
        Command::Alpha { command } => run_alpha(command),
    }
}

fn print_version(json: bool) -> Result<()> {
    let info = VersionInfo::current();
    if json {
        println!("{}", serde_json::to_string(&info)?);
    } else {
        println!("{}", info);
    }
    Ok(())
}

fn run_product(command: ProductCommand, config: &UserConfig, target: &CatalogTarget) -> Result<()> {
    let reader = FileSystemReader::new();

    match command {
        ProductCommand::Create { file } => {
            let declaration = ProductListingDeclaration::template();
            NewFileWriter::new(file).present(&declaration.to_yaml_string()?)
        }
        ProductCommand::Apply {
            file,
            backup_declaration_on_overwrite,
        } => {
            let declaration = reader.read_declaration(&file)?;
            let client = catalog_client(config, target)?;

            let applied = ApplyProductUseCase::new(&client).execute(declaration)?;
            tracing::info!(listing_id = %applied.spec.id, "product listing applied");

            declaration_presenter(file, backup_declaration_on_overwrite)
                .present(&applied.to_yaml_string()?)
        }
        ProductCommand::Fetch { listing_id } => {
            let client = catalog_client(config, target)?;
            let declaration = PopulateProductUseCase::new(&client).execute(&listing_id)?;
            StdoutPresenter::new().present(&declaration.to_yaml_string()?)
        }
        ProductCommand::Sanitize { file } => {
            let mut declaration = reader.read_declaration(&file)?;
            declaration.sanitize();
            StdoutPresenter::new().present(&declaration.to_yaml_string()?)
        }
        ProductCommand::Cleanup {
            file,
            backup_declaration_on_overwrite,
        } => {
            let declaration = reader.read_declaration(&file)?;
            let client = catalog_client(config, target)?;

            let cleaned = CleanupProductUseCase::new(&client).execute(declaration)?;
            tracing::info!("product listing cleaned up");

            declaration_presenter(file, backup_declaration_on_overwrite)
                .present(&cleaned.to_yaml_string()?)
        }
    }
}

fn run_util(command: UtilCommand, config: &UserConfig, target: &CatalogTarget) -> Result<()> {
    let client = catalog_client(config, target)?;

    match command {
        UtilCommand::ArchiveComponent { component_id } => {
            let component = ArchiveComponentUseCase::new(&client).execute(&component_id)?;
            StdoutPresenter::new().present(&serde_yaml_ng::to_string(&component)?)
        }
        UtilCommand::DeleteProductListing { listing_id } => {
            let listing = DeleteProductListingUseCase::new(&client).execute(&listing_id)?;
            StdoutPresenter::new().present(&serde_yaml_ng::to_string(&listing)?)
        }
    }
}

fn run_alpha(command: AlphaCommand) -> Result<()> {
    let reader = FileSystemReader::new();

    match command {
        AlphaCommand::GenerateInventory { product, mapping } => {
            let declaration = reader.read_declaration(&product)?;
            let mapping = reader.read_mapping(&mapping)?;

            let inventory = InventoryGenerator::generate(&declaration, &mapping)?;
            StdoutPresenter::new().present(&serde_yaml_ng::to_string(&inventory)?)
        }
        AlphaCommand::Certify { tool } => {
            let (tool, args) = tool.into_parts();
            let declaration = reader.read_declaration(&args.product)?;
            let mapping = reader.read_mapping(&args.mapping)?;

            let mut request = CertifyRequest::new(tool, declaration, mapping);
            request.userfiles_dir = args.userfiles_dir;
            request.logs_dir = args.logs_dir;
            request.catalog_api_token = args.catalog_api_token;
            request.runtime_image = args.runtime_image;
            request.keep_temp_dir = args.keep_temp_dir;

            let response = CertifyComponentsUseCase::new(PodmanRunner::new()).execute(request)?;
            tracing::info!(hosts = response.host_count, "certification run finished");
            if let Some(kept) = response.kept_temp_dir {
                eprintln!("Generated assets kept in {}", kept.display());
            }
            Ok(())
        }
    }
}

fn catalog_client(config: &UserConfig, target: &CatalogTarget) -> Result<PyxisGraphQlClient> {
    let token = config.token()?;
    let endpoint = config.endpoint(target.custom_endpoint.as_deref())?;
    tracing::debug!(endpoint = %endpoint, "using catalog endpoint");
    PyxisGraphQlClient::new(endpoint, token)
}

/// Declarations read from stdin are written back to stdout; files are
/// rewritten in place once the command has succeeded.
fn declaration_presenter(file: PathBuf, backup: bool) -> Box<dyn OutputPresenter> {
    if file == Path::new(STDIN_PATH) {
        Box::new(StdoutPresenter::new())
    } else {
        Box::new(LazyOverwriter::new(file, backup))
    }
}
