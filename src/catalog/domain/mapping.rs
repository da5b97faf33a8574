use crate::shared::error::ProductctlError;
use crate::shared::Result;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Free-form inputs handed to a certification tool for a single target.
pub type ToolFlags = BTreeMap<String, serde_yaml_ng::Value>;

/// An empty `tool_flags:` line is YAML null.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<ToolFlags, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<ToolFlags>::deserialize(deserializer)?.unwrap_or_default())
}

/// User-authored side table merged with a declaration to build an inventory.
///
/// Each sub-map is keyed by component ID. Entries for IDs that are not in
/// the declaration are ignored, and components without an entry are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MappingDeclaration {
    #[serde(default)]
    pub container_components: BTreeMap<String, ContainerCertTarget>,
    #[serde(default)]
    pub helm_chart_components: BTreeMap<String, HelmCertTarget>,
    #[serde(default)]
    pub operator_components: BTreeMap<String, OperatorCertTarget>,
}

impl MappingDeclaration {
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| {
            ProductctlError::MappingParse {
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// An application container image and the tags to certify.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerCertTarget {
    /// Image reference without a tag.
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<ContainerTag>,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub tool_flags: ToolFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContainerTag {
    pub tag: String,
    /// Replaces the target-level flags for this tag when non-empty.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub tool_flags: ToolFlags,
}

/// An operator bundle image, the tags to certify and the catalog index used
/// to install it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorCertTarget {
    #[serde(default)]
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<OperatorTag>,
    #[serde(default)]
    pub index_image: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub tool_flags: ToolFlags,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperatorTag {
    pub tag: String,
    /// Replaces the target-level index image for this tag when non-empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub index_image: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub tool_flags: ToolFlags,
}

/// A single Helm chart to certify.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HelmCertTarget {
    #[serde(default)]
    pub chart_uri: String,
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "BTreeMap::is_empty"
    )]
    pub tool_flags: ToolFlags,
}
