use super::*;
use crate::application::dto::AnalysisRequestBuilder;
use crate::dependency_graph::domain::PackageMetadata;
use crate::dependency_graph::services::GraphFileParser;
use async_trait::async_trait;
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

const COMPLEX_GRAPH: &str = "A: B C\nB: D E\nC: D F\nD:\nE: A\nF: G\nG: H\nH: F\n";

// Mock implementations for testing
struct MockGraphReader {
    content: String,
}

impl GraphFileReader for MockGraphReader {
    fn read_graph_file(&self, _path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}

/// Registry double backed by a graph file text; names absent from it fail
struct MockRegistry {
    graph: DependencyGraph,
    calls: AtomicUsize,
}

impl MockRegistry {
    fn new(content: &str) -> Self {
        Self {
            graph: GraphFileParser::parse(content),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl MetadataProvider for MockRegistry {
    async fn resolve(&self, name: &PackageName, version: Option<&str>) -> Result<PackageMetadata> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.graph.dependencies_of(name.as_str()) {
            Some(deps) => Ok(PackageMetadata::new(deps.to_vec(), version.unwrap_or("1.0.0"))),
            None => anyhow::bail!("registry returned status 404"),
        }
    }
}

#[derive(Default)]
struct MockProgressReporter {
    messages: RefCell<Vec<String>>,
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_progress(&self, _current: usize, _total: usize, _message: Option<&str>) {}

    fn report_error(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn report_completion(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

type TestUseCase = AnalyzeDependenciesUseCase<MockGraphReader, MockRegistry, MockProgressReporter>;

fn use_case(file_content: &str, registry_content: &str) -> TestUseCase {
    AnalyzeDependenciesUseCase::new(
        MockGraphReader {
            content: file_content.to_string(),
        },
        MockRegistry::new(registry_content),
        MockProgressReporter::default(),
    )
}

fn file_request(package: &str, style: OutputStyle) -> AnalysisRequestBuilder {
    AnalysisRequest::builder()
        .mode(SourceMode::File)
        .package(package)
        .repo_path(Some(PathBuf::from("graph.txt")))
        .style(style)
}

fn live_request(package: &str, style: OutputStyle) -> AnalysisRequestBuilder {
    AnalysisRequest::builder()
        .mode(SourceMode::Live)
        .package(package)
        .style(style)
}

#[tokio::test]
async fn test_file_mode_tree() {
    let use_case = use_case(COMPLEX_GRAPH, "");
    let request = file_request("A", OutputStyle::Tree).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Tree(entries) => {
            assert_eq!(entries[0].name.as_str(), "A");
            assert!(entries.iter().any(|e| e.kind == EntryKind::Cyclic));
            assert!(entries.iter().any(|e| e.kind == EntryKind::AlreadyProcessed));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert!(response.has_cycles());
    // file mode never touches the registry
    assert_eq!(use_case.metadata_provider.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_file_mode_order() {
    let use_case = use_case(COMPLEX_GRAPH, "");
    let request = file_request("A", OutputStyle::Order).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Order(order) => {
            assert_eq!(order.cycles.len(), 2);
            assert_eq!(order.reachable_count, 8);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_file_mode_flat() {
    let use_case = use_case("A: B\nB:\n", "");
    let request = file_request("A", OutputStyle::Flat).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Flat(edges) => {
            assert_eq!(edges.len(), 1);
            assert_eq!(edges[0].parent.as_str(), "A");
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_file_mode_undeclared_start_package() {
    let use_case = use_case("A: B\n", "");
    let request = file_request("B", OutputStyle::Tree).build().unwrap();

    let err = use_case.execute(request).await.unwrap_err();

    assert!(matches!(
        err.downcast_ref::<DepVizError>(),
        Some(DepVizError::StartPackageNotFound { .. })
    ));
}

#[tokio::test]
async fn test_file_mode_reports_loading() {
    let use_case = use_case("A: B\nB:\n", "");
    let request = file_request("A", OutputStyle::Tree).build().unwrap();

    use_case.execute(request).await.unwrap();

    let messages = use_case.progress_reporter.messages.borrow();
    assert!(messages[0].contains("Loading graph file from: graph.txt"));
    assert!(messages
        .iter()
        .any(|m| m.contains("2 package(s) with 1 edge(s)")));
}

#[tokio::test]
async fn test_live_mode_tree_expands_lazily() {
    let use_case = use_case("", "express: debug\ndebug: ms\nms:\nunused: ms\n");
    let request = live_request("express", OutputStyle::Tree).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Tree(entries) => {
            let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
            assert_eq!(names, vec!["express", "debug", "ms"]);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    assert_eq!(use_case.metadata_provider.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_live_mode_unresolved_child_is_marked() {
    let use_case = use_case("", "app: missing\n");
    let request = live_request("app", OutputStyle::Tree).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Tree(entries) => {
            assert_eq!(entries[1].kind, EntryKind::Unresolved);
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_live_mode_unresolvable_root_has_nothing_to_show() {
    for style in [OutputStyle::Tree, OutputStyle::Flat, OutputStyle::Order] {
        let use_case = use_case("", "");
        let request = live_request("ghost", style).build().unwrap();

        let response = use_case.execute(request).await.unwrap();

        assert_eq!(response.outcome, AnalysisOutcome::NothingToShow);
        let messages = use_case.progress_reporter.messages.borrow();
        assert!(messages.iter().any(|m| m.contains("nothing to show")));
    }
}

#[tokio::test]
async fn test_live_mode_order_builds_graph() {
    let use_case = use_case("", COMPLEX_GRAPH);
    let request = live_request("A", OutputStyle::Order).build().unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Order(order) => {
            assert_eq!(order.reachable_count, 8);
            assert!(order.has_cycles());
        }
        other => panic!("unexpected outcome {:?}", other),
    }
}

#[tokio::test]
async fn test_live_mode_respects_ignore_filter() {
    let use_case = use_case("", "app: eslint lodash\neslint: x\nlodash:\nx:\n");
    let request = live_request("app", OutputStyle::Flat)
        .ignore(Some("eslint".to_string()))
        .build()
        .unwrap();

    let response = use_case.execute(request).await.unwrap();

    match &response.outcome {
        AnalysisOutcome::Flat(edges) => {
            assert_eq!(edges[0].kind, EntryKind::Ignored);
            assert!(edges.iter().all(|e| e.parent.as_str() != "eslint"));
        }
        other => panic!("unexpected outcome {:?}", other),
    }
    // the ignored package is never fetched
    assert_eq!(use_case.metadata_provider.calls.load(Ordering::SeqCst), 2);
}
