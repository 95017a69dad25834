use crate::application::dto::{AnalysisRequest, NpmComparison};
use crate::dependency_graph::domain::{LoadOrder, PackageName};
use crate::dependency_graph::services::{GraphBuilder, OrderAnalyzer};
use crate::ports::outbound::{MetadataProvider, PackageManagerInspector, ProgressReporter};
use crate::shared::Result;
use serde_json::Value;
use std::collections::HashSet;

/// CompareWithNpmUseCase - puts our load order next to what npm installs
///
/// # Type Parameters
/// * `PMI` - PackageManagerInspector implementation
/// * `MP` - MetadataProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct CompareWithNpmUseCase<PMI, MP, PR> {
    inspector: PMI,
    metadata_provider: MP,
    progress_reporter: PR,
}

impl<PMI, MP, PR> CompareWithNpmUseCase<PMI, MP, PR>
where
    PMI: PackageManagerInspector,
    MP: MetadataProvider,
    PR: ProgressReporter,
{
    pub fn new(inspector: PMI, metadata_provider: MP, progress_reporter: PR) -> Self {
        Self {
            inspector,
            metadata_provider,
            progress_reporter,
        }
    }

    /// Runs npm, builds our graph and compares the two orders
    ///
    /// # Errors
    /// Returns an error if npm's dependency tree cannot be obtained.
    pub async fn execute(&self, request: &AnalysisRequest) -> Result<NpmComparison> {
        let version = request.version.clone().unwrap_or_else(|| "latest".to_string());

        self.progress_reporter.report(&format!(
            "📦 Running npm install for {}@{} (this may take a while)...",
            request.package, version
        ));
        let tree = self
            .inspector
            .installed_tree(&request.package, &version)
            .await?;
        let npm_order = extract_npm_order(&tree);

        self.progress_reporter.report(&format!(
            "🔍 Building our dependency graph for {}@{}...",
            request.package, version
        ));
        let graph = GraphBuilder::new(&self.metadata_provider)
            .with_progress(&self.progress_reporter)
            .build(
                &request.package,
                request.version.as_deref(),
                request.options.max_depth,
            )
            .await;
        let our_order = OrderAnalyzer::load_order(&graph, &request.package, &request.options);

        let ours = reachable_names(&our_order);
        let npm_set: HashSet<&PackageName> = npm_order.iter().collect();
        let ours_set: HashSet<&PackageName> = ours.iter().copied().collect();

        let only_in_npm = npm_order
            .iter()
            .filter(|name| !ours_set.contains(name))
            .cloned()
            .collect();
        let only_in_ours = ours
            .iter()
            .filter(|name| !npm_set.contains(*name))
            .map(|name| (*name).clone())
            .collect();

        self.progress_reporter
            .report_completion("✅ Comparison complete");

        Ok(NpmComparison {
            package: request.package.clone(),
            version,
            npm_order,
            our_order,
            only_in_npm,
            only_in_ours,
        })
    }
}

/// Every name our analysis reached: ordered, cyclic, then blocked
fn reachable_names(order: &LoadOrder) -> Vec<&PackageName> {
    let mut seen = HashSet::new();
    order
        .order
        .iter()
        .chain(order.cycles.iter().flatten())
        .chain(order.blocked.iter())
        .filter(|name| seen.insert(*name))
        .collect()
}

/// Package names in the order npm's tree first mentions them.
///
/// Walks `dependencies` objects depth-first in key order; a name seen
/// before is skipped together with its subtree.
fn extract_npm_order(tree: &Value) -> Vec<PackageName> {
    let mut result = Vec::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut stack: Vec<serde_json::map::Iter<'_>> = Vec::new();

    if let Some(dependencies) = tree.get("dependencies").and_then(Value::as_object) {
        stack.push(dependencies.iter());
    }

    while let Some(iter) = stack.last_mut() {
        let Some((name, info)) = iter.next() else {
            stack.pop();
            continue;
        };
        if !seen.insert(name.as_str()) {
            continue;
        }
        result.push(PackageName::new(name.as_str()));
        if let Some(children) = info.get("dependencies").and_then(Value::as_object) {
            stack.push(children.iter());
        }
    }

    result
}
