use crate::catalog::domain::inventory::{
    ANSIBLE_CONNECTION_LOCAL, GROUP_CONTAINER, GROUP_HELM_CHART, GROUP_OPERATOR,
};
use crate::catalog::domain::{
    Component, ComponentType, ContainerHostVars, HelmChartHostVars, Inventory, MappingDeclaration,
    OperatorHostVars, ProductListingDeclaration, ProductMeta, ToolFlags,
};
use crate::shared::error::ProductctlError;
use crate::shared::Result;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Which certification tool, if any, a component is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Container,
    Operator,
    HelmChart,
    Excluded,
}

impl Classification {
    /// Classifies a component from its type and metadata blocks.
    ///
    /// A container block decides unless the component is explicitly typed as
    /// a Helm chart and also carries a helm block.
    pub fn of(component: &Component) -> Self {
        let typed_as_helm = component.component_type == Some(ComponentType::HelmChart);
        match (&component.container, &component.helm_chart) {
            (Some(_), Some(_)) if typed_as_helm => Classification::HelmChart,
            (Some(container), _) if container.is_operator_bundle() => Classification::Operator,
            (Some(_), _) => Classification::Container,
            (None, Some(_)) => Classification::HelmChart,
            (None, None) => Classification::Excluded,
        }
    }
}

/// InventoryGenerator - merges a declaration with a certification mapping
///
/// Produces the Ansible inventory consumed by the certification images. The
/// mapping is allowed to be incomplete: components without an entry are
/// skipped, never reported as errors.
pub struct InventoryGenerator;

impl InventoryGenerator {
    /// Builds the inventory for every mapped component of `declaration`.
    ///
    /// # Errors
    /// - `NoComponentsDeclared` if the declaration lists no components
    /// - `HostnameCollision` if two targets normalize to the same hostname
    pub fn generate(
        declaration: &ProductListingDeclaration,
        mapping: &MappingDeclaration,
    ) -> Result<Inventory> {
        if !declaration.has_components() {
            return Err(ProductctlError::NoComponentsDeclared.into());
        }

        let product = ProductMeta {
            product_name: declaration.spec.name.clone(),
            product_id: declaration.spec.id.clone(),
        };
        let mut inventory = Inventory::default();

        for component in &declaration.with.components {
            if !component.has_id() {
                tracing::debug!(
                    component_name = %component.name,
                    "component has not been created yet, skipping"
                );
                continue;
            }

            let classification = Classification::of(component);
            tracing::debug!(
                component_id = %component.id,
                component_name = %component.name,
                ?classification,
                "classified component"
            );

            match classification {
                Classification::Container => Self::add_container_hosts(
                    &mut inventory.container_components.hosts,
                    component,
                    &product,
                    mapping,
                )?,
                Classification::Operator => Self::add_operator_hosts(
                    &mut inventory.operator_components.hosts,
                    component,
                    &product,
                    mapping,
                )?,
                Classification::HelmChart => Self::add_helm_chart_host(
                    &mut inventory.helm_chart_components.hosts,
                    component,
                    &product,
                    mapping,
                )?,
                Classification::Excluded => {}
            }
        }

        Ok(inventory)
    }

    fn add_container_hosts(
        hosts: &mut BTreeMap<String, ContainerHostVars>,
        component: &Component,
        product: &ProductMeta,
        mapping: &MappingDeclaration,
    ) -> Result<()> {
        let Some(target) = mapping.container_components.get(&component.id) else {
            log_unmapped(component);
            return Ok(());
        };

        for tag in &target.tags {
            let image = format!("{}:{}", target.image_ref, tag.tag);
            let hostname = normalize_container_hostname(&format!("{}-{}", component.id, image));
            let vars = ContainerHostVars {
                ansible_connection: ANSIBLE_CONNECTION_LOCAL.to_string(),
                image,
                component: component.clone(),
                product: product.clone(),
                tool_flags: resolve_tool_flags(&target.tool_flags, &tag.tool_flags),
            };
            insert_unique(hosts, GROUP_CONTAINER, hostname, vars)?;
        }
        Ok(())
    }

    fn add_operator_hosts(
        hosts: &mut BTreeMap<String, OperatorHostVars>,
        component: &Component,
        product: &ProductMeta,
        mapping: &MappingDeclaration,
    ) -> Result<()> {
        let Some(target) = mapping.operator_components.get(&component.id) else {
            log_unmapped(component);
            return Ok(());
        };

        for tag in &target.tags {
            let image = format!("{}:{}", target.image_ref, tag.tag);
            let hostname = normalize_container_hostname(&format!("{}-{}", component.id, image));
            let index_image = if tag.index_image.is_empty() {
                target.index_image.clone()
            } else {
                tag.index_image.clone()
            };
            let vars = OperatorHostVars {
                ansible_connection: ANSIBLE_CONNECTION_LOCAL.to_string(),
                image,
                index_image,
                component: component.clone(),
                product: product.clone(),
                tool_flags: resolve_tool_flags(&target.tool_flags, &tag.tool_flags),
            };
            insert_unique(hosts, GROUP_OPERATOR, hostname, vars)?;
        }
        Ok(())
    }

    fn add_helm_chart_host(
        hosts: &mut BTreeMap<String, HelmChartHostVars>,
        component: &Component,
        product: &ProductMeta,
        mapping: &MappingDeclaration,
    ) -> Result<()> {
        let Some(target) = mapping.helm_chart_components.get(&component.id) else {
            log_unmapped(component);
            return Ok(());
        };

        let hostname = normalize_chart_hostname(&format!("{}-{}", component.id, target.chart_uri));
        let vars = HelmChartHostVars {
            ansible_connection: ANSIBLE_CONNECTION_LOCAL.to_string(),
            chart_uri: target.chart_uri.clone(),
            component: component.clone(),
            product: product.clone(),
            tool_flags: target.tool_flags.clone(),
        };
        insert_unique(hosts, GROUP_HELM_CHART, hostname, vars)
    }
}

fn log_unmapped(component: &Component) {
    tracing::debug!(
        component_id = %component.id,
        component_name = %component.name,
        "component has no mapping entry, skipping"
    );
}

/// Tag-level flags replace the target-level flags outright when present.
fn resolve_tool_flags(target_flags: &ToolFlags, tag_flags: &ToolFlags) -> ToolFlags {
    if tag_flags.is_empty() {
        target_flags.clone()
    } else {
        tag_flags.clone()
    }
}

fn insert_unique<T>(
    hosts: &mut BTreeMap<String, T>,
    group: &str,
    hostname: String,
    vars: T,
) -> Result<()> {
    match hosts.entry(hostname) {
        Entry::Occupied(entry) => Err(ProductctlError::HostnameCollision {
            group: group.to_string(),
            hostname: entry.key().clone(),
        }
        .into()),
        Entry::Vacant(entry) => {
            entry.insert(vars);
            Ok(())
        }
    }
}

/// Makes `<id>-<image>:<tag>` safe to use as an inventory host key.
pub fn normalize_container_hostname(name: &str) -> String {
    name.replace(':', "_").replace('/', "_")
}

/// Makes `<id>-<chart uri>` safe to use as an inventory host key.
pub fn normalize_chart_hostname(name: &str) -> String {
    name.replace("https://", "remotechart-")
        .replace("http://", "remotechart-")
        .replace('/', "_")
}
