use super::{mismatched_outcome, nothing_to_show};
use crate::application::dto::{AnalysisOutcome, AnalysisResponse};
use crate::dependency_graph::domain::{EntryKind, TraversalEntry};
use crate::dependency_graph::services::TreePrefix;
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// Legend text per marker, in the order the legend lists them
const LEGEND: &[(EntryKind, &str)] = &[
    (EntryKind::Cyclic, "ancestor on the current path"),
    (EntryKind::AlreadyProcessed, "subtree shown earlier"),
    (EntryKind::Truncated, "children cut off by --max-depth"),
    (EntryKind::Ignored, "matched --ignore"),
    (EntryKind::Unknown, "not declared in the graph file"),
    (EntryKind::Unresolved, "registry lookup failed"),
];

/// TreeFormatter adapter rendering a traversal as a box-drawing tree
///
/// This adapter implements the ReportFormatter port for the `tree` style.
pub struct TreeFormatter;

impl TreeFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Legend line for the markers that occur in `entries`, if any
    fn legend(entries: &[TraversalEntry]) -> Option<String> {
        let parts: Vec<String> = LEGEND
            .iter()
            .filter(|(kind, _)| entries.iter().any(|e| e.kind == *kind))
            .filter_map(|(kind, text)| kind.marker().map(|m| format!("{} {}", m, text)))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(format!("Legend: {}", parts.join("; ")))
        }
    }
}

impl Default for TreeFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TreeFormatter {
    fn format(&self, response: &AnalysisResponse) -> Result<String> {
        let entries = match &response.outcome {
            AnalysisOutcome::Tree(entries) => entries,
            AnalysisOutcome::NothingToShow => return Ok(nothing_to_show(response)),
            _ => return Err(mismatched_outcome("Tree", response)),
        };

        let mut output = String::new();
        writeln!(
            output,
            "Dependency tree for '{}' ({} mode):",
            response.start, response.mode
        )?;

        let mut prefix = TreePrefix::new();
        for entry in entries {
            writeln!(output, "{}", prefix.line(entry))?;
        }

        if let Some(legend) = Self::legend(entries) {
            writeln!(output)?;
            writeln!(output, "{}", legend)?;
        }

        Ok(output)
    }
}
