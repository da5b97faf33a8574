use crate::catalog::domain::{MappingDeclaration, ProductListingDeclaration};
use crate::ports::outbound::cert_tool_runner::{
    DEFAULT_IMAGE_CERTIFY_CONTAINERS, DEFAULT_IMAGE_CERTIFY_HELM_CHARTS,
    DEFAULT_IMAGE_CERTIFY_OPERATORS,
};
use std::path::PathBuf;

/// Which certification image family a run targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificationTool {
    Containers,
    Operators,
    HelmCharts,
}

impl CertificationTool {
    pub fn default_image(self) -> &'static str {
        match self {
            CertificationTool::Containers => DEFAULT_IMAGE_CERTIFY_CONTAINERS,
            CertificationTool::Operators => DEFAULT_IMAGE_CERTIFY_OPERATORS,
            CertificationTool::HelmCharts => DEFAULT_IMAGE_CERTIFY_HELM_CHARTS,
        }
    }
}

/// CertifyRequest - inputs for a certification run
///
/// `None` fields fall back to the runner defaults.
#[derive(Debug, Clone)]
pub struct CertifyRequest {
    pub tool: CertificationTool,
    pub declaration: ProductListingDeclaration,
    pub mapping: MappingDeclaration,
    pub userfiles_dir: Option<PathBuf>,
    pub logs_dir: Option<PathBuf>,
    /// Token handed to the tool so it can submit results.
    pub catalog_api_token: Option<String>,
    pub runtime_image: Option<String>,
    pub keep_temp_dir: bool,
}

impl CertifyRequest {
    pub fn new(
        tool: CertificationTool,
        declaration: ProductListingDeclaration,
        mapping: MappingDeclaration,
    ) -> Self {
        Self {
            tool,
            declaration,
            mapping,
            userfiles_dir: None,
            logs_dir: None,
            catalog_api_token: None,
            runtime_image: None,
            keep_temp_dir: false,
        }
    }
}

/// CertifyResponse - what a finished run leaves behind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertifyResponse {
    /// Number of inventory hosts handed to the tool.
    pub host_count: usize,
    /// Set when the generated assets were kept on request.
    pub kept_temp_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_images() {
        assert_eq!(
            CertificationTool::Containers.default_image(),
            "quay.io/opdev/certify-containers:latest"
        );
        assert_eq!(
            CertificationTool::Operators.default_image(),
            "quay.io/opdev/certify-operators:latest"
        );
        assert_eq!(
            CertificationTool::HelmCharts.default_image(),
            "quay.io/opdev/certify-helmcharts:latest"
        );
    }
}
