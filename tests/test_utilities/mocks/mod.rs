/// Mock implementations for testing
mod mock_graph_reader;
mod mock_metadata_provider;
mod mock_package_manager;
mod mock_progress_reporter;

pub use mock_graph_reader::MockGraphReader;
pub use mock_metadata_provider::MockMetadataProvider;
pub use mock_package_manager::MockPackageManager;
pub use mock_progress_reporter::MockProgressReporter;
