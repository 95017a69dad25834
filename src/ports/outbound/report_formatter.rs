use crate::application::dto::AnalysisResponse;
use crate::shared::Result;

/// ReportFormatter port for rendering an analysis result as text
pub trait ReportFormatter {
    /// Formats the analysis response
    ///
    /// # Errors
    /// Returns an error if the response does not carry the outcome this
    /// formatter renders.
    fn format(&self, response: &AnalysisResponse) -> Result<String>;
}
