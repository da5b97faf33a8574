use crate::ports::outbound::{CertToolRunner, RunnerConfig};
use crate::shared::Result;
use anyhow::Context;
use std::path::{self, Path};
use std::process::{Command, Stdio};

const CONTAINER_INVENTORY_DIR: &str = "/runner/inventory";
const CONTAINER_USERFILES_DIR: &str = "/runner/userfiles";
const CONTAINER_CERT_LOGS_DIR: &str = "/runner/cert-logs";
const CONTAINER_ENV_VARS_FILE: &str = "/runner/env/envvars";

/// PodmanRunner adapter for executing certification images with podman
///
/// The container shares the host network and inherits the terminal so the
/// tool's progress streams straight to the user.
pub struct PodmanRunner {
    program: String,
}

impl PodmanRunner {
    pub fn new() -> Self {
        Self {
            program: "podman".to_string(),
        }
    }

    /// Builds the `podman` argument list for `config`.
    ///
    /// Host paths are made absolute; podman reads a bare name such as `logs`
    /// as a named volume rather than a directory.
    pub fn build_args(config: &RunnerConfig) -> Result<Vec<String>> {
        config.validate()?;

        let mut args: Vec<String> = ["run", "--rm", "--interactive", "--tty", "--net=host"]
            .iter()
            .map(|arg| arg.to_string())
            .collect();

        let mut mount = |host: &Path, container: &str, options: &str| -> Result<()> {
            let host = path::absolute(host)
                .with_context(|| format!("unable to resolve {}", host.display()))?;
            args.push("--volume".to_string());
            args.push(format!("{}:{}:{}", host.display(), container, options));
            Ok(())
        };

        mount(&config.inventory_dir, CONTAINER_INVENTORY_DIR, "Z,ro")?;
        if let Some(userfiles_dir) = &config.userfiles_dir {
            tracing::debug!("user provided userfiles directory, passing that through to runtime workload");
            mount(userfiles_dir, CONTAINER_USERFILES_DIR, "Z,ro")?;
        }
        mount(&config.logs_dir, CONTAINER_CERT_LOGS_DIR, "Z")?;
        if let Some(env_file) = &config.env_file {
            tracing::debug!("user provided environment variables, passing that through to runtime workload");
            mount(env_file, CONTAINER_ENV_VARS_FILE, "Z,ro")?;
        }

        args.push(config.image.clone());
        Ok(args)
    }
}

impl Default for PodmanRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CertToolRunner for PodmanRunner {
    fn run(&self, config: &RunnerConfig) -> Result<()> {
        let args = Self::build_args(config).context("configuration invalid")?;
        tracing::debug!(program = %self.program, args = ?args, "starting certification workload");

        let status = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .with_context(|| format!("unable to start {}", self.program))?;

        if !status.success() {
            tracing::error!(status = %status, "error running certification workload");
            anyhow::bail!("{} exited with {}", self.program, status);
        }
        Ok(())
    }
}
