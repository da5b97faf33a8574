use super::attached_components::fetch_attached_components;
use crate::catalog::domain::ProductListingDeclaration;
use crate::ports::outbound::CatalogApi;
use crate::shared::Result;

/// PopulateProductUseCase - builds a declaration from an existing listing
///
/// Only components that are attached and active are included. The listing's
/// own `cert_projects` may still reference archived components, so it is
/// replaced by the IDs actually returned whenever the two disagree.
pub struct PopulateProductUseCase<C> {
    catalog_api: C,
}

impl<C: CatalogApi> PopulateProductUseCase<C> {
    pub fn new(catalog_api: C) -> Self {
        Self { catalog_api }
    }

    pub fn execute(&self, listing_id: &str) -> Result<ProductListingDeclaration> {
        tracing::debug!(listing_id, "querying product by id");
        let listing = self
            .catalog_api
            .listing_by_id(listing_id)?
            .into_data("get product listing")?;

        let mut declaration = ProductListingDeclaration::new();
        declaration.spec = listing;

        if declaration.spec.cert_projects.is_empty() {
            return Ok(declaration);
        }

        tracing::debug!(
            count = declaration.spec.cert_projects.len(),
            "populating components attached to product"
        );
        let mut components = fetch_attached_components(&self.catalog_api, &declaration.spec.id)?;
        components.sort_by(|a, b| a.id.cmp(&b.id));

        let attached_ids: Vec<String> = components.iter().map(|c| c.id.clone()).collect();
        declaration.spec.cert_projects.sort();
        if attached_ids != declaration.spec.cert_projects {
            tracing::debug!(
                original = ?declaration.spec.cert_projects,
                replacement = ?attached_ids,
                "product listing references components that are not active, keeping only attached IDs"
            );
            declaration.spec.cert_projects = attached_ids;
        }
        declaration.with.components = components;

        Ok(declaration)
    }
}
