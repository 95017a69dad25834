use super::{mismatched_outcome, nothing_to_show};
use crate::application::dto::{AnalysisOutcome, AnalysisResponse};
use crate::dependency_graph::domain::FlatEdge;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// FlatFormatter adapter rendering `parent -> child` edges
///
/// This adapter implements the ReportFormatter port for the `flat` style.
/// Each edge is indented two spaces per level below the start package.
pub struct FlatFormatter;

impl FlatFormatter {
    pub fn new() -> Self {
        Self
    }

    fn edge_line(edge: &FlatEdge) -> String {
        let indent = "  ".repeat(edge.depth.saturating_sub(1));
        let target = match &edge.child {
            Some(child) => child.to_string(),
            None => "...".to_string(),
        };
        match edge.kind.marker() {
            Some(marker) => format!("{}{} -> {} {}", indent, edge.parent, target, marker),
            None => format!("{}{} -> {}", indent, edge.parent, target),
        }
    }
}

impl Default for FlatFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for FlatFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let edges = match &response.outcome {
            AnalysisOutcome::Flat(edges) => edges,
            AnalysisOutcome::NothingToShow => return Ok(nothing_to_show(response)),
            _ => return Err(mismatched_outcome("Flat", response)),
        };

        let mut output = String::new();
        writeln!(
            output,
            "Dependency edges for '{}' ({} mode):",
            response.start, response.mode
        )?;

        if edges.is_empty() {
            writeln!(output, "{} has no dependencies", response.start)?;
        }
        for edge in edges {
            writeln!(output, "{}", Self::edge_line(edge))?;
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::{OutputStyle, SourceMode};
    use crate::dependency_graph::domain::{AnalysisOptions, PackageName};
    use crate::dependency_graph::services::{GraphFileParser, TreeTraverser};

    async fn format(content: &str, start: &str, options: AnalysisOptions) -> String {
        let graph = GraphFileParser::parse(content);
        let edges = TreeTraverser::new(&graph, &options)
            .flat_edges(&PackageName::new(start))
            .await;
        let response = AnalysisResponse::new(
            PackageName::new(start),
            SourceMode::File,
            OutputStyle::Flat,
            AnalysisOutcome::Flat(edges),
        );
        FlatFormatter::new().format(&response).unwrap()
    }

    #[tokio::test]
    async fn test_format_flat_edges() {
        let output = format("A: B C\nB: A\nC:\n", "A", AnalysisOptions::default()).await;

        assert_eq!(
            output,
            "Dependency edges for 'A' (file mode):\n\
             A -> B\n  \
             B -> A (cyclic dependency)\n\
             A -> C\n"
        );
    }

    #[tokio::test]
    async fn test_format_flat_truncation() {
        let output = format("A: B\nB: C\nC:\n", "A", AnalysisOptions::new(1, None)).await;

        assert!(output.contains("A -> B\n"));
        assert!(output.contains("  B -> ... (max depth reached)\n"));
        assert!(!output.contains("-> C"));
    }

    #[tokio::test]
    async fn test_format_flat_leaf_start() {
        let output = format("A:\n", "A", AnalysisOptions::default()).await;
        assert!(output.contains("A has no dependencies"));
    }
}
