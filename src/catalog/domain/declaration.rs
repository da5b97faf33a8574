use super::component::Component;
use super::product_listing::{Descriptions, ProductListing};
use crate::shared::error::ProductctlError;
use crate::shared::Result;
use serde::{Deserialize, Serialize};

/// The only `kind` this tool reads or writes.
pub const KIND_PRODUCT_LISTING: &str = "ProductListing";

/// Listing type used when scaffolding a new declaration.
pub const LISTING_TYPE_CONTAINER_STACK: &str = "container stack";

/// On-disk root document: a product listing plus the components it owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductListingDeclaration {
    #[serde(default = "default_kind")]
    pub kind: String,
    #[serde(default)]
    pub spec: ProductListing,
    #[serde(default, skip_serializing_if = "Inclusions::is_empty")]
    pub with: Inclusions,
}

/// Resources that belong to the listing but are managed as separate entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inclusions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub components: Vec<Component>,
}

impl Inclusions {
    fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}

fn default_kind() -> String {
    KIND_PRODUCT_LISTING.to_string()
}

impl Default for ProductListingDeclaration {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductListingDeclaration {
    /// An empty declaration with the `kind` tag set.
    pub fn new() -> Self {
        Self {
            kind: default_kind(),
            spec: ProductListing::default(),
            with: Inclusions::default(),
        }
    }

    /// Starter document written by `product create`.
    pub fn template() -> Self {
        let mut declaration = Self::new();
        declaration.spec.name = "My New Product".to_string();
        declaration.spec.listing_type = LISTING_TYPE_CONTAINER_STACK.to_string();
        declaration.spec.descriptions = Some(Descriptions {
            long: "This can contain long form content about your product.".to_string(),
            short: "A brief synopsis".to_string(),
        });
        declaration
    }

    /// Parses a YAML declaration, tolerating unknown fields.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml_ng::from_str(content).map_err(|e| {
            ProductctlError::DeclarationParse {
                details: e.to_string(),
            }
            .into()
        })
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    pub fn has_components(&self) -> bool {
        !self.with.components.is_empty()
    }

    /// Removes identifiers tying this declaration to catalog entities so it
    /// can be reused as a template. Idempotent.
    pub fn sanitize(&mut self) {
        self.spec.sanitize();
        for component in &mut self.with.components {
            component.sanitize();
        }
    }
}
