/// ProgressReporter port for diagnostics
///
/// Diagnostics are kept apart from the lookup result so that the result
/// output stays deterministic. Implementations must be `Send + Sync` because
/// dependency sources hold one across an await point.
pub trait ProgressReporter: Send + Sync {
    /// Reports an informational diagnostic
    fn report(&self, message: &str);

    /// Reports that a potentially slow operation has started
    ///
    /// The indication lasts until the next call to [`report_error`] or
    /// [`report_completion`].
    ///
    /// [`report_error`]: ProgressReporter::report_error
    /// [`report_completion`]: ProgressReporter::report_completion
    fn report_waiting(&self, message: &str);

    /// Reports an error or warning diagnostic
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
