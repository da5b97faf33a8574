use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Discriminant for the kind of certification project a component represents.
///
/// The backend knows more types than the ones named here; those are kept
/// verbatim in `Other` so declarations and responses still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComponentType {
    Containers,
    HelmChart,
    OpenShiftCnf,
    Other(String),
}

impl ComponentType {
    pub fn as_str(&self) -> &str {
        match self {
            ComponentType::Containers => "Containers",
            ComponentType::HelmChart => "Helm Chart",
            ComponentType::OpenShiftCnf => "OpenShift-cnf",
            ComponentType::Other(value) => value,
        }
    }
}

impl From<String> for ComponentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Containers" => ComponentType::Containers,
            "Helm Chart" => ComponentType::HelmChart,
            "OpenShift-cnf" => ComponentType::OpenShiftCnf,
            _ => ComponentType::Other(value),
        }
    }
}

impl From<ComponentType> for String {
    fn from(value: ComponentType) -> Self {
        match value {
            ComponentType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Lifecycle status of a component in the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Archived,
}

/// Operating-system content type of a container image. Operator bundles are
/// certified differently from application containers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ContentType {
    Rhel,
    Ubi,
    OperatorBundle,
    Scratch,
    Other(String),
}

impl ContentType {
    pub fn as_str(&self) -> &str {
        match self {
            ContentType::Rhel => "Red Hat Enterprise Linux",
            ContentType::Ubi => "Red Hat Universal Base Image (UBI)",
            ContentType::OperatorBundle => "Operator Bundle Image",
            ContentType::Scratch => "Scratch Image",
            ContentType::Other(value) => value,
        }
    }
}

impl From<String> for ContentType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Red Hat Enterprise Linux" => ContentType::Rhel,
            "Red Hat Universal Base Image (UBI)" => ContentType::Ubi,
            "Operator Bundle Image" => ContentType::OperatorBundle,
            "Scratch Image" => ContentType::Scratch,
            _ => ContentType::Other(value),
        }
    }
}

impl From<ContentType> for String {
    fn from(value: ContentType) -> Self {
        match value {
            ContentType::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

/// Values accepted for `container.type`.
pub mod container_type {
    pub const CONTAINER: &str = "container";
    pub const OPERATOR_BUNDLE: &str = "operator bundle image";
}

/// Values accepted for `container.distribution_method`.
pub mod container_distribution {
    pub const RHCC: &str = "rhcc";
    pub const EXTERNAL: &str = "external";
    pub const NON_REGISTRY: &str = "non_registry";
    pub const MARKETPLACE_ONLY: &str = "marketplace_only";
}

/// Values accepted for `helm_chart.distribution_method`.
pub mod helm_chart_distribution {
    pub const REDHAT: &str = "redhat";
    pub const EXTERNAL: &str = "external";
    pub const UNDISTRIBUTED: &str = "undistributed";
}

/// A certifiable unit attached to a product listing.
///
/// An empty `id` means the component has not been created remotely yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    #[serde(rename = "_id", default, skip_serializing_if = "String::is_empty")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certification_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certification_level: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub certification_status: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub contacts: Vec<ComponentContact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container: Option<ContainerComponent>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub operator_distribution: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub org_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_status: Option<ProjectStatus>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub published_by: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub badges: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<ComponentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub helm_chart: Option<HelmChartComponent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update_date: Option<DateTime<Utc>>,
}

impl Component {
    pub fn has_id(&self) -> bool {
        !self.id.is_empty()
    }

    /// Strips every field that ties this component to a backend entity.
    pub fn sanitize(&mut self) {
        self.id.clear();
        self.org_id = 0;
        if let Some(container) = self.container.as_mut() {
            container.pid.clear();
        }
        self.creation_date = None;
        self.last_update_date = None;
        self.certification_date = None;
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentContact {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub email_address: String,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub contact_type: String,
}

/// Container-specific metadata for a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerComponent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_categories: Vec<String>,
    // Plural on the wire, but only ever carries a single value.
    #[serde(rename = "build_categories", default, skip_serializing_if = "String::is_empty")]
    pub build_category: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distribution_method: String,
    #[serde(rename = "isv_pid", default, skip_serializing_if = "String::is_empty")]
    pub pid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os_content_type: Option<ContentType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privileged: Option<bool>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub registry: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository_description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository_name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub release_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub support_platforms: Vec<String>,
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub container_type: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub github_usernames: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosted_registry: Option<bool>,
}

impl ContainerComponent {
    pub fn is_operator_bundle(&self) -> bool {
        self.os_content_type == Some(ContentType::OperatorBundle)
    }
}

/// Helm-chart-specific metadata for a component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelmChartComponent {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub application_categories: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub chart_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repository: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_description: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub long_description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub github_usernames: Vec<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub distribution_method: String,
}

pub(crate) fn is_zero(value: &u64) -> bool {
    *value == 0
}
