use crate::shared::error::ProductctlError;
use crate::shared::Result;
use std::path::PathBuf;

pub const DEFAULT_IMAGE_CERTIFY_CONTAINERS: &str = "quay.io/opdev/certify-containers:latest";
pub const DEFAULT_IMAGE_CERTIFY_OPERATORS: &str = "quay.io/opdev/certify-operators:latest";
pub const DEFAULT_IMAGE_CERTIFY_HELM_CHARTS: &str = "quay.io/opdev/certify-helmcharts:latest";

pub const DEFAULT_USERFILES_DIR: &str = "./userfiles";
pub const DEFAULT_LOGS_DIR: &str = "./cert-logs";

/// Host-side inputs for one certification run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub image: String,
    /// Directory holding the generated inventory. Required.
    pub inventory_dir: PathBuf,
    /// Directory the tool writes its logs to. Required.
    pub logs_dir: PathBuf,
    pub userfiles_dir: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

impl RunnerConfig {
    pub fn new(image: impl Into<String>, inventory_dir: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            inventory_dir: inventory_dir.into(),
            logs_dir: PathBuf::from(DEFAULT_LOGS_DIR),
            userfiles_dir: Some(PathBuf::from(DEFAULT_USERFILES_DIR)),
            env_file: None,
        }
    }

    /// Checks that the values needed to start a run are present. Does not
    /// check that the image or directories exist.
    pub fn validate(&self) -> Result<()> {
        if self.image.is_empty() {
            return Err(invalid("a runtime image was not provided and is required"));
        }
        if self.inventory_dir.as_os_str().is_empty() {
            return Err(invalid("an inventory directory was not provided and is required"));
        }
        if self.logs_dir.as_os_str().is_empty() {
            return Err(invalid("a logs directory was not provided and is required"));
        }
        Ok(())
    }
}

fn invalid(reason: &str) -> anyhow::Error {
    ProductctlError::InvalidRunnerConfig {
        reason: reason.to_string(),
    }
    .into()
}

/// CertToolRunner port for executing a certification image
///
/// Implementations block until the tool exits and stream its output to the
/// terminal.
pub trait CertToolRunner {
    fn run(&self, config: &RunnerConfig) -> Result<()>;
}

impl<T: CertToolRunner + ?Sized> CertToolRunner for &T {
    fn run(&self, config: &RunnerConfig) -> Result<()> {
        (**self).run(config)
    }
}
