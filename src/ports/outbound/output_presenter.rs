use crate::shared::Result;

/// OutputPresenter port for presenting rendered output
///
/// This port abstracts the destination (stdout in the CLI, a buffer in tests)
/// where the parameter block and dependency list are written.
pub trait OutputPresenter {
    /// Presents already rendered content
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
