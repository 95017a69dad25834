use crate::adapters::outbound::formatters::{FlatFormatter, OrderFormatter, TreeFormatter};
use crate::application::dto::OutputStyle;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
///
/// This factory encapsulates the selection of the formatter adapter for an
/// output style. It belongs in the application layer as it orchestrates the
/// selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output style
    ///
    /// # Examples
    /// ```
    /// use dep_visualizer::application::dto::OutputStyle;
    /// use dep_visualizer::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputStyle::Tree);
    /// ```
    pub fn create(style: OutputStyle) -> Box<dyn ReportFormatter> {
        match style {
            OutputStyle::Tree => Box::new(TreeFormatter::new()),
            OutputStyle::Flat => Box::new(FlatFormatter::new()),
            OutputStyle::Order => Box::new(OrderFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output style
    ///
    /// # Examples
    /// ```
    /// use dep_visualizer::application::dto::OutputStyle;
    /// use dep_visualizer::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputStyle::Order);
    /// assert_eq!(message, "📝 Generating load order report...");
    /// ```
    pub fn progress_message(style: OutputStyle) -> &'static str {
        match style {
            OutputStyle::Tree => "📝 Generating dependency tree...",
            OutputStyle::Flat => "📝 Generating dependency edge list...",
            OutputStyle::Order => "📝 Generating load order report...",
        }
    }
}
