//! User configuration for productctl.
//!
//! Settings are layered from built-in defaults, the first YAML config file
//! found, `PRODUCTCTL_*` environment variables and finally CLI flags. The
//! result is a plain [`UserConfig`] value handed to each command.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::shared::error::ProductctlError;
use crate::shared::security::read_checked;
use crate::shared::Result;

const CONFIG_DIR_NAME: &str = "productctl";
const DOT_CONFIG_DIR_NAME: &str = ".productctl";
const CONFIG_FILENAME: &str = "config.yaml";

pub const ENV_VAR_PREFIX: &str = "PRODUCTCTL_";

pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_ENV: &str = "prod";

pub const ENDPOINT_PROD: &str = "https://catalog.redhat.com/api/containers/graphql/";
pub const ENDPOINT_STAGE: &str = "https://catalog.stage.redhat.com/api/containers/graphql/";
pub const ENDPOINT_QA: &str = "https://catalog.qa.redhat.com/api/containers/graphql/";
pub const ENDPOINT_UAT: &str = "https://catalog.uat.redhat.com/api/containers/graphql/";

/// On-disk config file schema. Keys are kebab-case.
#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ConfigFile {
    pub api_token: Option<String>,
    pub api_token_file: Option<PathBuf>,
    /// Accepted as either a YAML number or a string.
    pub org_id: Option<serde_yaml_ng::Value>,
    pub log_level: Option<String>,
    pub env: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Effective settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserConfig {
    pub api_token: Option<String>,
    pub api_token_file: Option<PathBuf>,
    pub org_id: Option<u64>,
    pub log_level: String,
    pub env: String,
    /// The config file the values were read from, if any.
    pub source: Option<PathBuf>,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            api_token_file: None,
            org_id: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            env: DEFAULT_ENV.to_string(),
            source: None,
        }
    }
}

impl UserConfig {
    /// Loads the config from the standard locations and the process
    /// environment.
    pub fn load() -> Result<Self> {
        let file = discover_config(&candidate_paths())?;
        let vars: HashMap<String, String> = std::env::vars()
            .filter(|(key, _)| key.starts_with(ENV_VAR_PREFIX))
            .collect();
        Self::from_parts(file, &vars)
    }

    /// Builds a config from an already-loaded file and a set of
    /// `PRODUCTCTL_*` variables, without touching the filesystem or the
    /// process environment.
    pub fn from_parts(
        file: Option<(PathBuf, ConfigFile)>,
        vars: &HashMap<String, String>,
    ) -> Result<Self> {
        let mut config = Self::default();

        if let Some((path, file)) = file {
            config.api_token = non_empty(file.api_token);
            config.api_token_file = file.api_token_file;
            if let Some(value) = file.org_id {
                config.org_id = Some(parse_org_id(&yaml_scalar(&value))?);
            }
            if let Some(level) = non_empty(file.log_level) {
                config.log_level = level;
            }
            if let Some(env) = non_empty(file.env) {
                config.env = env;
            }
            config.source = Some(path);
        }

        let var = |name: &str| non_empty(vars.get(&format!("{ENV_VAR_PREFIX}{name}")).cloned());
        if let Some(token) = var("API_TOKEN") {
            config.api_token = Some(token);
        }
        if let Some(token_file) = var("API_TOKEN_FILE") {
            config.api_token_file = Some(PathBuf::from(token_file));
        }
        if let Some(org_id) = var("ORG_ID") {
            config.org_id = Some(parse_org_id(&org_id)?);
        }
        if let Some(level) = var("LOG_LEVEL") {
            config.log_level = level;
        }
        if let Some(env) = var("ENV") {
            config.env = env;
        }

        Ok(config)
    }

    /// Applies CLI flag values, which take precedence over everything else.
    pub fn with_overrides(mut self, log_level: Option<String>, env: Option<String>) -> Self {
        if let Some(level) = non_empty(log_level) {
            self.log_level = level;
        }
        if let Some(env) = non_empty(env) {
            self.env = env;
        }
        self
    }

    /// The API token: `api-token` if set, else the trimmed contents of
    /// `api-token-file`.
    pub fn token(&self) -> Result<String> {
        if let Some(token) = &self.api_token {
            return Ok(token.clone());
        }

        if let Some(path) = &self.api_token_file {
            let token = read_checked(path, "API token file")?.trim().to_string();
            if !token.is_empty() {
                return Ok(token);
            }
        }

        Err(ProductctlError::MissingApiToken.into())
    }

    /// The GraphQL endpoint for this config's environment, unless `custom`
    /// overrides it.
    pub fn endpoint(&self, custom: Option<&str>) -> Result<String> {
        resolve_endpoint(&self.env, custom)
    }
}

/// Maps an environment name to its catalog endpoint. A non-empty `custom`
/// endpoint always wins.
pub fn resolve_endpoint(env: &str, custom: Option<&str>) -> Result<String> {
    if let Some(custom) = custom.filter(|c| !c.is_empty()) {
        return Ok(custom.to_string());
    }

    let endpoint = match env {
        "prod" => ENDPOINT_PROD,
        "stage" => ENDPOINT_STAGE,
        "qa" => ENDPOINT_QA,
        "uat" => ENDPOINT_UAT,
        other => {
            return Err(ProductctlError::UnknownEndpoint {
                name: other.to_string(),
            }
            .into())
        }
    };
    Ok(endpoint.to_string())
}

/// Config file locations in lookup order.
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(DOT_CONFIG_DIR_NAME).join(CONFIG_FILENAME)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILENAME));
    }
    if let Some(home_dir) = dirs::home_dir() {
        paths.push(home_dir.join(DOT_CONFIG_DIR_NAME).join(CONFIG_FILENAME));
    }
    paths
}

/// Loads the first config file that exists among `paths`.
pub fn discover_config(paths: &[PathBuf]) -> Result<Option<(PathBuf, ConfigFile)>> {
    for path in paths {
        if path.exists() {
            let config = load_config_from_path(path)?;
            return Ok(Some((path.clone(), config)));
        }
    }
    Ok(None)
}

/// Load config from an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = read_checked(path, "config file").map_err(|e| ProductctlError::ConfigRead {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    // An empty file parses as YAML null.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ProductctlError::ConfigParse {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    warn_unknown_fields(&config);
    Ok(config)
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

fn parse_org_id(value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ProductctlError::InvalidOrgId {
            value: value.to_string(),
        }
        .into()),
    }
}

fn yaml_scalar(value: &serde_yaml_ng::Value) -> String {
    match value {
        serde_yaml_ng::Value::String(s) => s.clone(),
        serde_yaml_ng::Value::Number(n) => n.to_string(),
        other => serde_yaml_ng::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
