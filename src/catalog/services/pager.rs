use crate::shared::error::ProductctlError;
use crate::shared::Result;

/// Page size used for every paginated catalog query.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Upper bound on pages fetched by a single `query_all` call.
pub const MAX_PAGES: usize = 10_000;

/// Collects every item of a paginated query.
///
/// `fetch_page(page, page_size)` returns the items of one page and the total
/// item count reported by the source. Pages are requested sequentially from
/// `starting_page` until the accumulated count reaches the latest reported
/// total.
///
/// # Errors
/// - `QueryPageFailed` wrapping the fetch error; no partial result is returned
/// - `PaginationStalled` if a page comes back empty while items remain
/// - `PaginationLimitExceeded` after `MAX_PAGES` pages
pub fn query_all<T, F>(starting_page: usize, page_size: usize, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(usize, usize) -> Result<(Vec<T>, usize)>,
{
    tracing::debug!(starting_page, page_size, "querying all pages");

    let mut all_items = Vec::new();
    let mut page = starting_page;

    for _ in 0..MAX_PAGES {
        let (returned, total) = fetch_page(page, page_size)
            .map_err(|source| ProductctlError::QueryPageFailed { page, source })?;

        let returned_count = returned.len();
        all_items.extend(returned);
        let remaining = total.saturating_sub(all_items.len());
        tracing::debug!(
            page,
            returned_items = returned_count,
            total_items = total,
            remaining_items = remaining,
            "completed page query"
        );

        if remaining == 0 {
            return Ok(all_items);
        }
        if returned_count == 0 {
            return Err(ProductctlError::PaginationStalled { page, remaining }.into());
        }
        page += 1;
    }

    Err(ProductctlError::PaginationLimitExceeded {
        max_pages: MAX_PAGES,
    }
    .into())
}
