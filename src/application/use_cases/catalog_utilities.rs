use crate::catalog::domain::{Component, ProductListing};
use crate::ports::outbound::CatalogApi;
use crate::shared::Result;

/// ArchiveComponentUseCase - archives a single component by ID
pub struct ArchiveComponentUseCase<C> {
    catalog_api: C,
}

impl<C: CatalogApi> ArchiveComponentUseCase<C> {
    pub fn new(catalog_api: C) -> Self {
        Self { catalog_api }
    }

    pub fn execute(&self, component_id: &str) -> Result<Component> {
        tracing::info!(component_id, "archiving component");
        self.catalog_api
            .archive_component(component_id)?
            .into_data("archive certification project")
    }
}

/// DeleteProductListingUseCase - marks a single listing as deleted
///
/// Attached components are left untouched; use cleanup to tear down a
/// whole product.
pub struct DeleteProductListingUseCase<C> {
    catalog_api: C,
}

impl<C: CatalogApi> DeleteProductListingUseCase<C> {
    pub fn new(catalog_api: C) -> Self {
        Self { catalog_api }
    }

    pub fn execute(&self, listing_id: &str) -> Result<ProductListing> {
        tracing::info!(listing_id, "deleting product listing");
        self.catalog_api
            .delete_listing(listing_id)?
            .into_data("delete product listing")
    }
}
