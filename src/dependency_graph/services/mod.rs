pub mod graph_builder;
pub mod graph_file_parser;
pub mod order_analyzer;
pub mod registry_child_source;
pub mod tree_prefix;
pub mod tree_traverser;

pub use graph_builder::GraphBuilder;
pub use graph_file_parser::GraphFileParser;
pub use order_analyzer::OrderAnalyzer;
pub use registry_child_source::RegistryChildSource;
pub use tree_prefix::TreePrefix;
pub use tree_traverser::TreeTraverser;
