/// ProgressReporter port for reporting progress during operations
///
/// This port abstracts progress reporting (e.g., to stderr)
/// so user feedback never mixes with the report on stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress against a total that may still grow
    ///
    /// # Arguments
    /// * `current` - Current progress value
    /// * `total` - Total expected value known so far
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
