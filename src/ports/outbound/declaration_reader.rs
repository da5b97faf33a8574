use crate::catalog::domain::{MappingDeclaration, ProductListingDeclaration};
use crate::shared::Result;
use std::path::Path;

/// Path argument that selects standard input instead of a file.
pub const STDIN_PATH: &str = "-";

/// DeclarationReader port for loading user-authored documents
///
/// This port abstracts where product declarations and certification
/// mappings come from (a file on disk, or stdin for `-`).
pub trait DeclarationReader {
    /// # Errors
    /// Returns an error if the source cannot be read or is not a valid
    /// declaration.
    fn read_declaration(&self, path: &Path) -> Result<ProductListingDeclaration>;

    /// # Errors
    /// Returns an error if the file cannot be read or is not a valid mapping.
    fn read_mapping(&self, path: &Path) -> Result<MappingDeclaration>;
}
