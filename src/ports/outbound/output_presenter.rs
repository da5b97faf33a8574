use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// Commands render their result in full before calling `present`, so an
/// implementation that overwrites a file only ever sees complete content.
pub trait OutputPresenter {
    /// Presents the rendered document to the output destination
    ///
    /// # Errors
    /// Returns an error if:
    /// - Backing up the previous content fails
    /// - Writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
