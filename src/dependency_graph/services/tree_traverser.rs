use crate::dependency_graph::domain::{
    AnalysisOptions, EntryKind, FlatEdge, PackageName, TraversalEntry,
};
use crate::dependency_graph::services::TreePrefix;
use crate::ports::outbound::{ChildLookup, ChildSource};
use std::collections::HashSet;

/// A node whose children are being walked
struct Frame {
    name: PackageName,
    children: Vec<PackageName>,
    cursor: usize,
    depth: usize,
}

/// TreeTraverser walks dependencies depth-first and classifies every edge
///
/// Uses an explicit stack, so arbitrarily deep graphs cannot overflow the
/// call stack. Two sets drive the classification:
/// - the current path (ancestors of the node being expanded) marks back-edges
///   as cyclic
/// - the set of fully processed nodes suppresses re-expansion of shared
///   subtrees
///
/// Children come from a [`ChildSource`], so the same walk serves both the
/// materialized graph and the lazy registry-backed source.
pub struct TreeTraverser<'a, S: ChildSource + ?Sized> {
    source: &'a S,
    options: &'a AnalysisOptions,
}

impl<'a, S: ChildSource + ?Sized> TreeTraverser<'a, S> {
    pub fn new(source: &'a S, options: &'a AnalysisOptions) -> Self {
        Self { source, options }
    }

    /// Produces the pre-order entry sequence starting at `start`
    pub async fn traverse(&self, start: &PackageName) -> Vec<TraversalEntry> {
        let mut entries = Vec::new();

        let root_children = match self.source.children_of(start).await {
            ChildLookup::Found(children) => children,
            lookup => {
                let kind = match lookup {
                    ChildLookup::Unresolved => EntryKind::Unresolved,
                    _ => EntryKind::Unknown,
                };
                entries.push(TraversalEntry {
                    parent: None,
                    name: start.clone(),
                    depth: 0,
                    is_last: true,
                    kind,
                });
                return entries;
            }
        };

        entries.push(TraversalEntry {
            parent: None,
            name: start.clone(),
            depth: 0,
            is_last: true,
            kind: EntryKind::Expanded,
        });

        let mut path: HashSet<PackageName> = HashSet::from([start.clone()]);
        let mut done: HashSet<PackageName> = HashSet::new();
        let mut stack = vec![Frame {
            name: start.clone(),
            children: root_children,
            cursor: 0,
            depth: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let at_bound = frame.depth >= self.options.max_depth;
            if at_bound || frame.cursor >= frame.children.len() {
                let truncated = at_bound && !frame.children.is_empty();
                if truncated {
                    entries.push(TraversalEntry {
                        parent: Some(frame.name.clone()),
                        name: frame.name.clone(),
                        depth: frame.depth + 1,
                        is_last: true,
                        kind: EntryKind::Truncated,
                    });
                }
                // A truncated node has not shown its subtree; a shallower
                // path may still expand it.
                if let Some(finished) = stack.pop() {
                    path.remove(&finished.name);
                    if !truncated {
                        done.insert(finished.name);
                    }
                }
                continue;
            }

            let child = frame.children[frame.cursor].clone();
            frame.cursor += 1;
            let is_last = frame.cursor == frame.children.len();
            let parent = frame.name.clone();
            let depth = frame.depth + 1;

            let mut entry = TraversalEntry {
                parent: Some(parent),
                name: child.clone(),
                depth,
                is_last,
                kind: EntryKind::Expanded,
            };

            if self.options.is_ignored(&child) {
                entry.kind = EntryKind::Ignored;
                entries.push(entry);
                continue;
            }

            match self.source.children_of(&child).await {
                ChildLookup::Unknown => entry.kind = EntryKind::Unknown,
                ChildLookup::Unresolved => entry.kind = EntryKind::Unresolved,
                ChildLookup::Found(_) if path.contains(&child) => entry.kind = EntryKind::Cyclic,
                ChildLookup::Found(_) if done.contains(&child) => {
                    entry.kind = EntryKind::AlreadyProcessed
                }
                ChildLookup::Found(children) => {
                    path.insert(child.clone());
                    stack.push(Frame {
                        name: child,
                        children,
                        cursor: 0,
                        depth,
                    });
                }
            }
            entries.push(entry);
        }

        entries
    }

    /// Renders the traversal as box-drawing tree lines
    pub async fn render_tree(&self, start: &PackageName) -> Vec<String> {
        let entries = self.traverse(start).await;
        let mut prefix = TreePrefix::new();
        entries.iter().map(|entry| prefix.line(entry)).collect()
    }

    /// Produces parent → child edges instead of tree lines
    pub async fn flat_edges(&self, start: &PackageName) -> Vec<FlatEdge> {
        self.traverse(start)
            .await
            .iter()
            .filter_map(FlatEdge::from_entry)
            .collect()
    }
}
