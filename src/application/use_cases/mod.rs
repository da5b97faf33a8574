/// Use cases module containing application business logic orchestration
mod apply_product;
mod attached_components;
mod catalog_utilities;
mod certify_components;
mod cleanup_product;
mod populate_product;

#[cfg(test)]
mod test_support;

pub use apply_product::ApplyProductUseCase;
pub use catalog_utilities::{ArchiveComponentUseCase, DeleteProductListingUseCase};
pub use certify_components::{CertifyComponentsUseCase, INVENTORY_FILE_NAME};
pub use cleanup_product::CleanupProductUseCase;
pub use populate_product::PopulateProductUseCase;
