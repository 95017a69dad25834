/// Formatter adapters for the different report styles
mod comparison_formatter;
mod flat_formatter;
mod order_formatter;
mod tree_formatter;

pub use comparison_formatter::ComparisonFormatter;
pub use flat_formatter::FlatFormatter;
pub use order_formatter::OrderFormatter;
pub use tree_formatter::TreeFormatter;

use crate::application::dto::AnalysisResponse;

/// Report body for a live analysis whose start package could not be resolved
fn nothing_to_show(response: &AnalysisResponse) -> String {
    format!(
        "Nothing to show: '{}' could not be resolved from the registry\n",
        response.start
    )
}

/// Error for a response whose outcome belongs to another formatter
fn mismatched_outcome(formatter: &str, response: &AnalysisResponse) -> anyhow::Error {
    anyhow::anyhow!(
        "{} formatter cannot render a '{}' analysis",
        formatter,
        response.style
    )
}
