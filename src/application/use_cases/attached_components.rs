use crate::catalog::domain::Component;
use crate::catalog::services::{query_all, DEFAULT_PAGE_SIZE};
use crate::ports::outbound::CatalogApi;
use crate::shared::Result;

/// Pages through every active component attached to `listing_id`.
///
/// Catalog pages are zero-based.
pub(crate) fn fetch_attached_components<C>(catalog_api: &C, listing_id: &str) -> Result<Vec<Component>>
where
    C: CatalogApi + ?Sized,
{
    query_all(0, DEFAULT_PAGE_SIZE, |page, page_size| {
        let page = catalog_api
            .components_for_listing(listing_id, page, page_size)?
            .into_data("find product listing certification projects")?;
        Ok((page.items, page.total))
    })
}
