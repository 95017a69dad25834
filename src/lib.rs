//! dep-visualizer - dependency graph analysis for npm-style packages
//!
//! This library computes a cycle-aware load order for a package's
//! transitive dependencies and renders dependency trees that stay finite on
//! cyclic graphs. Graphs come from a local graph file or are fetched from an
//! npm registry while the analysis runs.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): graph model, ordering and traversal
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_visualizer::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! let use_case = AnalyzeDependenciesUseCase::new(
//!     FileSystemGraphReader::new(),
//!     CachingMetadataProvider::new(NpmRegistryClient::new(RegistrySettings::default())?),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::builder()
//!     .mode(SourceMode::File)
//!     .package("A")
//!     .repo_path(Some(PathBuf::from("graph.txt")))
//!     .style(OutputStyle::Order)
//!     .build()?;
//! let response = use_case.execute(request).await?;
//!
//! println!("{}", OrderFormatter::new().format(&response)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemGraphReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        ComparisonFormatter, FlatFormatter, OrderFormatter, TreeFormatter,
    };
    pub use crate::adapters::outbound::network::{
        CachingMetadataProvider, NpmRegistryClient, RegistrySettings,
    };
    pub use crate::adapters::outbound::process::NpmCli;
    pub use crate::application::dto::{
        AnalysisOutcome, AnalysisRequest, AnalysisResponse, NpmComparison, OutputStyle,
        SourceMode,
    };
    pub use crate::application::use_cases::{AnalyzeDependenciesUseCase, CompareWithNpmUseCase};
    pub use crate::dependency_graph::domain::{
        AnalysisOptions, DependencyGraph, EntryKind, FlatEdge, LoadOrder, PackageMetadata,
        PackageName, TraversalEntry,
    };
    pub use crate::dependency_graph::services::{
        GraphBuilder, GraphFileParser, OrderAnalyzer, TreeTraverser,
    };
    pub use crate::ports::outbound::{
        ChildLookup, ChildSource, GraphFileReader, MetadataProvider, OutputPresenter,
        PackageManagerInspector, ProgressReporter, ReportFormatter,
    };
    pub use crate::shared::error::{DepVizError, ResolutionError};
    pub use crate::shared::Result;
}
