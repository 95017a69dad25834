/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (registry, file system, console, npm).
pub mod child_source;
pub mod graph_file_reader;
pub mod metadata_provider;
pub mod output_presenter;
pub mod package_manager_inspector;
pub mod progress_reporter;
pub mod report_formatter;

pub use child_source::{ChildLookup, ChildSource};
pub use graph_file_reader::GraphFileReader;
pub use metadata_provider::MetadataProvider;
pub use output_presenter::OutputPresenter;
pub use package_manager_inspector::PackageManagerInspector;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
