use super::PackageName;
use std::collections::HashSet;

/// Result of a cycle-aware topological sort over the reachable subgraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadOrder {
    /// Nodes that could be ordered, dependents before their dependencies
    pub order: Vec<PackageName>,
    /// Each cycle as a path that repeats its first node at the end
    pub cycles: Vec<Vec<PackageName>>,
    /// Unordered nodes that sit on no reported cycle (reachable only through one)
    pub blocked: Vec<PackageName>,
    /// Size of the reachable node universe the order was computed over
    pub reachable_count: usize,
}

impl LoadOrder {
    pub fn has_cycles(&self) -> bool {
        !self.cycles.is_empty()
    }

    /// Distinct nodes that appear on at least one cycle
    pub fn cyclic_nodes(&self) -> HashSet<&PackageName> {
        self.cycles.iter().flatten().collect()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.order.iter().position(|n| n.as_str() == name)
    }
}
