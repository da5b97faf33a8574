use serde::Serialize;
use std::fmt;

const BASE_NAME: &str = "productctl";
const PROJECT_NAME: &str = "github.com/opdev/productctl";

/// Build identification printed by `productctl version` and sent in the
/// User-Agent header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    #[serde(skip)]
    pub base_name: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    pub commit: &'static str,
}

impl VersionInfo {
    /// Version info for this build. The commit comes from the
    /// `PRODUCTCTL_COMMIT` environment variable at compile time.
    pub fn current() -> Self {
        Self {
            base_name: BASE_NAME,
            name: PROJECT_NAME,
            version: env!("CARGO_PKG_VERSION"),
            commit: option_env!("PRODUCTCTL_COMMIT").unwrap_or("unknown"),
        }
    }

    /// `productctl/<version> (<project>)`
    pub fn user_agent(&self) -> String {
        format!("{}/{} ({})", self.base_name, self.version, self.name)
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <commit: {}>", self.version, self.commit)
    }
}
