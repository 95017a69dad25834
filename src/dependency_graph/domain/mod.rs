pub mod dependency_graph;
pub mod load_order;
pub mod options;
pub mod package;
pub mod traversal;

pub use dependency_graph::DependencyGraph;
pub use load_order::LoadOrder;
pub use options::{AnalysisOptions, DEFAULT_MAX_DEPTH};
pub use package::{validate_version, PackageMetadata, PackageName};
pub use traversal::{EntryKind, FlatEdge, TraversalEntry};
