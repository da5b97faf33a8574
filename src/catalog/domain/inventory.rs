use super::component::Component;
use super::mapping::ToolFlags;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Connection mode for every generated host; the tools run on the controller.
pub const ANSIBLE_CONNECTION_LOCAL: &str = "local";

pub const GROUP_CONTAINER: &str = "container_components";
pub const GROUP_OPERATOR: &str = "operator_components";
pub const GROUP_HELM_CHART: &str = "helm_chart_components";

/// Ansible inventory with one host group per certification tool.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    pub container_components: HostGroup<ContainerHostVars>,
    pub operator_components: HostGroup<OperatorHostVars>,
    pub helm_chart_components: HostGroup<HelmChartHostVars>,
}

impl Inventory {
    pub fn host_count(&self) -> usize {
        self.container_components.hosts.len()
            + self.operator_components.hosts.len()
            + self.helm_chart_components.hosts.len()
    }
}

/// Hostname to host variables. Always serialized, even when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostGroup<T> {
    pub hosts: BTreeMap<String, T>,
}

impl<T> Default for HostGroup<T> {
    fn default() -> Self {
        Self {
            hosts: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductMeta {
    pub product_name: String,
    pub product_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerHostVars {
    pub ansible_connection: String,
    pub image: String,
    pub component: Component,
    pub product: ProductMeta,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_flags: ToolFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperatorHostVars {
    pub ansible_connection: String,
    pub image: String,
    pub index_image: String,
    pub component: Component,
    pub product: ProductMeta,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_flags: ToolFlags,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelmChartHostVars {
    pub ansible_connection: String,
    pub chart_uri: String,
    pub component: Component,
    pub product: ProductMeta,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub tool_flags: ToolFlags,
}
