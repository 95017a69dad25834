use crate::application::dto::{
    AnalysisOutcome, AnalysisRequest, AnalysisResponse, OutputStyle, SourceMode,
};
use crate::dependency_graph::domain::{
    AnalysisOptions, DependencyGraph, EntryKind, FlatEdge, PackageName, TraversalEntry,
};
use crate::dependency_graph::services::{
    GraphBuilder, OrderAnalyzer, RegistryChildSource, TreeTraverser,
};
use crate::ports::outbound::{ChildSource, GraphFileReader, MetadataProvider, ProgressReporter};
use crate::shared::error::DepVizError;
use crate::shared::Result;
use std::path::Path;

#[cfg(test)]
mod tests;

/// AnalyzeDependenciesUseCase - Core use case for dependency analysis
///
/// This use case orchestrates loading or fetching the dependency graph and
/// running the requested analysis, using generic dependency injection for
/// all infrastructure dependencies.
///
/// # Type Parameters
/// * `GR` - GraphFileReader implementation
/// * `MP` - MetadataProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeDependenciesUseCase<GR, MP, PR> {
    graph_reader: GR,
    metadata_provider: MP,
    progress_reporter: PR,
}

impl<GR, MP, PR> AnalyzeDependenciesUseCase<GR, MP, PR>
where
    GR: GraphFileReader,
    MP: MetadataProvider,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeDependenciesUseCase with injected dependencies
    pub fn new(graph_reader: GR, metadata_provider: MP, progress_reporter: PR) -> Self {
        Self {
            graph_reader,
            metadata_provider,
            progress_reporter,
        }
    }

    /// Executes the analysis
    ///
    /// # Arguments
    /// * `request` - Validated analysis request
    ///
    /// # Returns
    /// AnalysisResponse carrying the outcome for the requested style
    ///
    /// # Errors
    /// Only configuration errors of file mode escape (unreadable graph file,
    /// undeclared start package). Registry failures are reported inside the
    /// outcome.
    pub async fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        let outcome = match request.mode {
            SourceMode::File => self.analyze_file(&request).await?,
            SourceMode::Live => self.analyze_live(&request).await,
        };

        if matches!(outcome, AnalysisOutcome::NothingToShow) {
            self.progress_reporter.report_error(&format!(
                "⚠️  Could not resolve '{}'; nothing to show",
                request.package
            ));
        } else {
            self.progress_reporter.report_completion("✅ Analysis complete");
        }

        Ok(AnalysisResponse::new(
            request.package,
            request.mode,
            request.style,
            outcome,
        ))
    }

    /// Loads the graph file and checks that the start package is declared
    fn load_graph(&self, request: &AnalysisRequest) -> Result<DependencyGraph> {
        let path = request.repo_path.as_deref().ok_or_else(|| {
            DepVizError::InvalidArgument {
                name: "--repo-path".to_string(),
                reason: "file mode needs the path of a graph file".to_string(),
            }
        })?;

        self.progress_reporter
            .report(&format!("📖 Loading graph file from: {}", path.display()));

        let graph = self.graph_reader.read_and_parse_graph(path)?;
        Self::ensure_declared(&graph, &request.package, path)?;

        self.progress_reporter.report(&format!(
            "✅ Loaded {} package(s) with {} edge(s)",
            graph.package_count(),
            graph.edge_count()
        ));

        Ok(graph)
    }

    fn ensure_declared(graph: &DependencyGraph, package: &PackageName, path: &Path) -> Result<()> {
        if graph.contains(package.as_str()) {
            return Ok(());
        }
        Err(DepVizError::StartPackageNotFound {
            package: package.to_string(),
            path: path.to_path_buf(),
        }
        .into())
    }

    /// File mode: every style runs over the materialized graph
    async fn analyze_file(&self, request: &AnalysisRequest) -> Result<AnalysisOutcome> {
        let graph = self.load_graph(request)?;

        let outcome = match request.style {
            OutputStyle::Order => AnalysisOutcome::Order(OrderAnalyzer::load_order(
                &graph,
                &request.package,
                &request.options,
            )),
            OutputStyle::Tree | OutputStyle::Flat => {
                let entries = Self::traverse(&graph, &request.package, &request.options).await;
                Self::traversal_outcome(request.style, entries)
            }
        };
        Ok(outcome)
    }

    /// Live mode: the order needs the whole graph up front, the tree and the
    /// edge list expand lazily
    async fn analyze_live(&self, request: &AnalysisRequest) -> AnalysisOutcome {
        match request.style {
            OutputStyle::Order => {
                let graph = self
                    .build_graph(
                        &request.package,
                        request.version.as_deref(),
                        request.options.max_depth,
                    )
                    .await;
                if graph.is_empty() {
                    return AnalysisOutcome::NothingToShow;
                }
                AnalysisOutcome::Order(OrderAnalyzer::load_order(
                    &graph,
                    &request.package,
                    &request.options,
                ))
            }
            OutputStyle::Tree | OutputStyle::Flat => {
                self.progress_reporter.report(&format!(
                    "🔍 Expanding dependencies of '{}' from the registry...",
                    request.package
                ));
                let source = RegistryChildSource::new(&self.metadata_provider)
                    .with_pinned_root(request.package.clone(), request.version.clone());
                let entries = Self::traverse(&source, &request.package, &request.options).await;

                if Self::root_unavailable(&entries) {
                    return AnalysisOutcome::NothingToShow;
                }
                Self::traversal_outcome(request.style, entries)
            }
        }
    }

    /// Builds the materialized graph from the registry, reporting progress
    pub async fn build_graph(
        &self,
        package: &PackageName,
        version: Option<&str>,
        max_depth: usize,
    ) -> DependencyGraph {
        self.progress_reporter.report(&format!(
            "🔍 Building dependency graph for {}@{}...",
            package,
            version.unwrap_or("latest")
        ));

        let graph = GraphBuilder::new(&self.metadata_provider)
            .with_progress(&self.progress_reporter)
            .build(package, version, max_depth)
            .await;

        tracing::info!(
            packages = graph.package_count(),
            edges = graph.edge_count(),
            "dependency graph built"
        );
        graph
    }

    async fn traverse<S: ChildSource + ?Sized>(
        source: &S,
        start: &PackageName,
        options: &AnalysisOptions,
    ) -> Vec<TraversalEntry> {
        TreeTraverser::new(source, options).traverse(start).await
    }

    fn root_unavailable(entries: &[TraversalEntry]) -> bool {
        matches!(
            entries,
            [root] if matches!(root.kind, EntryKind::Unresolved | EntryKind::Unknown)
        )
    }

    fn traversal_outcome(style: OutputStyle, entries: Vec<TraversalEntry>) -> AnalysisOutcome {
        match style {
            OutputStyle::Flat => {
                AnalysisOutcome::Flat(entries.iter().filter_map(FlatEdge::from_entry).collect())
            }
            _ => AnalysisOutcome::Tree(entries),
        }
    }
}
