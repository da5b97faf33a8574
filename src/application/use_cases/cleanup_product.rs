use crate::catalog::domain::ProductListingDeclaration;
use crate::ports::outbound::CatalogApi;
use crate::shared::error::ProductctlError;
use crate::shared::Result;
use anyhow::Context;

/// CleanupProductUseCase - tears down a listing and its components
///
/// Order matters: components are detached before they are archived, and the
/// listing is deleted last. The first failure aborts the teardown without
/// undoing earlier steps. On success the declaration is sanitized so it can
/// be applied again as a fresh product.
pub struct CleanupProductUseCase<C> {
    catalog_api: C,
}

impl<C: CatalogApi> CleanupProductUseCase<C> {
    pub fn new(catalog_api: C) -> Self {
        Self { catalog_api }
    }

    pub fn execute(
        &self,
        mut declaration: ProductListingDeclaration,
    ) -> Result<ProductListingDeclaration> {
        let listing_exists = declaration.spec.has_id();
        let listing_id = declaration.spec.id.clone();

        if listing_exists {
            tracing::info!(
                listing_id = %listing_id,
                listing_name = %declaration.spec.name,
                "detaching all components from product listing"
            );
            self.catalog_api
                .set_components_for_listing(&listing_id, &[])
                .and_then(|envelope| envelope.check())
                .map_err(|source| ProductctlError::DetachingComponents { source })?;
        }

        for component in declaration.with.components.iter().filter(|c| c.has_id()) {
            tracing::info!(
                component_id = %component.id,
                name = %component.name,
                component_type = ?component.component_type,
                "archiving component"
            );
            self.catalog_api
                .archive_component(&component.id)?
                .check()
                .with_context(|| format!("unable to archive component {}", component.id))?;
        }

        if listing_exists {
            tracing::info!(listing_id = %listing_id, "deleting product listing");
            self.catalog_api
                .delete_listing(&listing_id)?
                .check()
                .with_context(|| format!("unable to delete product listing {listing_id}"))?;
        }

        tracing::info!("cleanup API calls completed");
        declaration.sanitize();
        Ok(declaration)
    }
}
