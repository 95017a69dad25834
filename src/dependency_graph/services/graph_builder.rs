use crate::dependency_graph::domain::{DependencyGraph, PackageName};
use crate::ports::outbound::{MetadataProvider, ProgressReporter};
use std::collections::{HashSet, VecDeque};

/// Version label used in visited keys when no version is pinned
const LATEST: &str = "latest";

struct WorkItem {
    name: PackageName,
    version: Option<String>,
    depth: usize,
}

/// GraphBuilder expands a registry package breadth-first into a DependencyGraph
///
/// Each (name, version-or-"latest") pair is fetched at most once. Only the
/// root may carry a pinned version; every child resolves to its latest.
pub struct GraphBuilder<'a, P: MetadataProvider + ?Sized> {
    provider: &'a P,
    progress_reporter: Option<&'a dyn ProgressReporter>,
}

impl<'a, P: MetadataProvider + ?Sized> GraphBuilder<'a, P> {
    pub fn new(provider: &'a P) -> Self {
        Self {
            provider,
            progress_reporter: None,
        }
    }

    /// Reports a growing fetched/discovered count while building
    pub fn with_progress(mut self, progress_reporter: &'a dyn ProgressReporter) -> Self {
        self.progress_reporter = Some(progress_reporter);
        self
    }

    /// Builds the graph reachable from `root` within `max_depth` levels.
    ///
    /// Packages that fail to resolve are recorded as leaves. Returns an empty
    /// graph when the root itself cannot be resolved.
    pub async fn build(
        &self,
        root: &PackageName,
        root_version: Option<&str>,
        max_depth: usize,
    ) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        let mut visited: HashSet<(PackageName, String)> = HashSet::new();
        let mut worklist = VecDeque::from([WorkItem {
            name: root.clone(),
            version: root_version.map(str::to_string),
            depth: 0,
        }]);
        let mut fetched = 0usize;

        while let Some(item) = worklist.pop_front() {
            let key = (
                item.name.clone(),
                item.version.clone().unwrap_or_else(|| LATEST.to_string()),
            );
            if !visited.insert(key) {
                continue;
            }
            if item.depth > max_depth {
                continue;
            }

            fetched += 1;
            if let Some(reporter) = self.progress_reporter {
                reporter.report_progress(
                    fetched,
                    fetched + worklist.len(),
                    Some(item.name.as_str()),
                );
            }

            match self.provider.resolve(&item.name, item.version.as_deref()).await {
                Ok(_) if graph.contains(item.name.as_str()) => {
                    // First resolved version wins, so a pinned root keeps its edges
                    tracing::debug!(
                        package = %item.name,
                        "package already resolved at another version; keeping first entry"
                    );
                }
                Ok(metadata) => {
                    tracing::debug!(
                        package = %item.name,
                        version = %metadata.resolved_version,
                        depth = item.depth,
                        dependencies = metadata.dependencies.len(),
                        "resolved package"
                    );
                    for dependency in &metadata.dependencies {
                        worklist.push_back(WorkItem {
                            name: dependency.clone(),
                            version: None,
                            depth: item.depth + 1,
                        });
                    }
                    graph.insert(item.name, metadata.dependencies);
                }
                Err(e) if item.depth == 0 => {
                    tracing::warn!(package = %item.name, error = %e, "root package could not be resolved");
                    return DependencyGraph::new();
                }
                Err(e) => {
                    tracing::warn!(package = %item.name, error = %e, "recording unresolved package as leaf");
                    graph.insert_leaf_if_absent(item.name);
                }
            }
        }

        graph
    }
}
