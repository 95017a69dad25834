use super::{OutputStyle, SourceMode};
use crate::dependency_graph::domain::{EntryKind, FlatEdge, LoadOrder, PackageName, TraversalEntry};

/// What an analysis produced, per output style
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisOutcome {
    Tree(Vec<TraversalEntry>),
    Flat(Vec<FlatEdge>),
    Order(LoadOrder),
    /// The live graph came back empty because the start package could not
    /// be resolved
    NothingToShow,
}

/// AnalysisResponse - result DTO of the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisResponse {
    pub start: PackageName,
    pub mode: SourceMode,
    pub style: OutputStyle,
    pub outcome: AnalysisOutcome,
}

impl AnalysisResponse {
    pub fn new(
        start: PackageName,
        mode: SourceMode,
        style: OutputStyle,
        outcome: AnalysisOutcome,
    ) -> Self {
        Self {
            start,
            mode,
            style,
            outcome,
        }
    }

    /// Cycles count as a finding, not a failure
    pub fn has_cycles(&self) -> bool {
        match &self.outcome {
            AnalysisOutcome::Order(order) => order.has_cycles(),
            AnalysisOutcome::Tree(entries) => entries.iter().any(|e| e.kind == EntryKind::Cyclic),
            AnalysisOutcome::Flat(edges) => edges.iter().any(|e| e.kind == EntryKind::Cyclic),
            AnalysisOutcome::NothingToShow => false,
        }
    }
}
