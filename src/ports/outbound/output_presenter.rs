use crate::shared::Result;

/// OutputPresenter port for delivering the rendered report
///
/// Implementations write to stdout or to the `--output` file.
pub trait OutputPresenter {
    /// Writes the whole report
    ///
    /// # Errors
    /// Returns an error if the destination cannot be written, including a
    /// missing parent directory or a symlinked target file.
    fn present(&self, content: &str) -> Result<()>;
}
