use crate::application::dto::{CertifyRequest, CertifyResponse};
use crate::catalog::services::InventoryGenerator;
use crate::ports::outbound::{CertToolRunner, RunnerConfig};
use crate::shared::error::ProductctlError;
use crate::shared::Result;
use std::fs;
use std::io::Write;
use std::path::Path;

/// File name the certification images look for inside the inventory mount.
pub const INVENTORY_FILE_NAME: &str = "generated.product.inventory.yaml";

const TEMP_DIR_PREFIX: &str = "cert-automation-";
const ENV_FILE_NAME: &str = "envvars";

/// CertifyComponentsUseCase - runs a certification image over a product
///
/// Generates the inventory for the declaration and mapping, stages it (and
/// the optional token env file) in a temporary directory, then hands the
/// directory to the runner. The directory is removed afterwards unless the
/// request asks to keep it.
pub struct CertifyComponentsUseCase<R> {
    runner: R,
}

impl<R: CertToolRunner> CertifyComponentsUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    pub fn execute(&self, request: CertifyRequest) -> Result<CertifyResponse> {
        tracing::debug!("generating inventory from product and mappings");
        let inventory = InventoryGenerator::generate(&request.declaration, &request.mapping)?;
        let host_count = inventory.host_count();

        let run_dir = tempfile::Builder::new()
            .prefix(TEMP_DIR_PREFIX)
            .tempdir()?;

        let inventory_dir = run_dir.path().join("inventory");
        fs::create_dir(&inventory_dir)?;
        tracing::debug!(tmpdir = %run_dir.path().display(), "writing generated inventory");
        write_private(
            &inventory_dir.join(INVENTORY_FILE_NAME),
            &serde_yaml_ng::to_string(&inventory)?,
        )?;

        let mut config = RunnerConfig::new(
            request
                .runtime_image
                .unwrap_or_else(|| request.tool.default_image().to_string()),
            inventory_dir,
        );
        if let Some(userfiles_dir) = request.userfiles_dir {
            config.userfiles_dir = Some(userfiles_dir);
        }
        if let Some(logs_dir) = request.logs_dir {
            config.logs_dir = logs_dir;
        }
        if let Some(token) = request.catalog_api_token.filter(|t| !t.is_empty()) {
            tracing::debug!(tmpdir = %run_dir.path().display(), "writing generated envvar file");
            let env_file = run_dir.path().join(ENV_FILE_NAME);
            write_private(&env_file, &format!("---\nPFLT_PYXIS_API_TOKEN: {token}"))?;
            config.env_file = Some(env_file);
        }

        let outcome = self.runner.run(&config);

        let kept_temp_dir = if request.keep_temp_dir {
            let kept = run_dir.keep();
            tracing::debug!(path = %kept.display(), "tempdir kept per flag");
            Some(kept)
        } else {
            if let Err(e) = run_dir.close() {
                tracing::error!(error = %e, "unable to clean up temporary directory");
            }
            None
        };

        outcome?;
        Ok(CertifyResponse {
            host_count,
            kept_temp_dir,
        })
    }
}

/// Writes a file readable only by the current user.
fn write_private(path: &Path, content: &str) -> Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let write_file = || -> std::io::Result<()> {
        let mut file = options.open(path)?;
        file.write_all(content.as_bytes())?;
        file.flush()
    };
    write_file().map_err(|e| {
        ProductctlError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}
