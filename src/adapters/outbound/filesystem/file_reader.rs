use crate::catalog::domain::{MappingDeclaration, ProductListingDeclaration};
use crate::ports::outbound::{DeclarationReader, STDIN_PATH};
use crate::shared::error::ProductctlError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading declarations from disk or stdin
///
/// Files go through the same symlink, regular-file and size checks as every
/// other user-supplied path. A path of `-` reads standard input instead.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_source(&self, path: &Path, file_description: &str) -> Result<String> {
        if path == Path::new(STDIN_PATH) {
            tracing::debug!("reading {} from stdin", file_description);
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .map_err(|e| ProductctlError::FileReadError {
                    path: path.to_path_buf(),
                    details: e.to_string(),
                })?;
            return Ok(content);
        }

        tracing::debug!(path = %path.display(), "reading {}", file_description);
        read_checked(path, file_description)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationReader for FileSystemReader {
    fn read_declaration(&self, path: &Path) -> Result<ProductListingDeclaration> {
        let content = self.read_source(path, "product listing declaration")?;
        ProductListingDeclaration::from_yaml_str(&content)
    }

    fn read_mapping(&self, path: &Path) -> Result<MappingDeclaration> {
        let content = self.read_source(path, "certification mapping")?;
        MappingDeclaration::from_yaml_str(&content)
    }
}
