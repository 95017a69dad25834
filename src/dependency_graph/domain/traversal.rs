use super::PackageName;

/// How a node was classified when the traversal reached it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// First full visit; its children follow in pre-order
    Expanded,
    /// Edge target matched the ignore filter
    Ignored,
    /// Name has no entry in the materialized graph
    Unknown,
    /// Child lookup failed (e.g. registry unreachable)
    Unresolved,
    /// Name is an ancestor on the current path (back-edge)
    Cyclic,
    /// Subtree was already rendered earlier in this traversal
    AlreadyProcessed,
    /// Children of a node at the depth bound were cut off
    Truncated,
}

impl EntryKind {
    /// Text appended to the node name in rendered output
    pub fn marker(self) -> Option<&'static str> {
        match self {
            EntryKind::Expanded => None,
            EntryKind::Ignored => Some("[ignored]"),
            EntryKind::Unknown => Some("(not found in graph)"),
            EntryKind::Unresolved => Some("(unresolved)"),
            EntryKind::Cyclic => Some("(cyclic dependency)"),
            EntryKind::AlreadyProcessed => Some("(already processed)"),
            EntryKind::Truncated => Some("(max depth reached)"),
        }
    }
}

/// One emitted line of a traversal, in pre-order.
///
/// For a [`EntryKind::Truncated`] entry, `name` is the node whose children
/// were cut off and `depth` is the depth those children would have had.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraversalEntry {
    pub parent: Option<PackageName>,
    pub name: PackageName,
    pub depth: usize,
    /// Whether this is the last sibling under its parent
    pub is_last: bool,
    pub kind: EntryKind,
}

impl TraversalEntry {
    /// Name plus marker, without any tree prefix
    pub fn label(&self) -> String {
        match (self.kind, self.kind.marker()) {
            (EntryKind::Truncated, Some(marker)) => format!("... {}", marker),
            (_, Some(marker)) => format!("{} {}", self.name, marker),
            (_, None) => self.name.to_string(),
        }
    }
}

/// Parent → child edge produced by the flat traversal variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatEdge {
    pub parent: PackageName,
    /// `None` for a truncation marker
    pub child: Option<PackageName>,
    pub depth: usize,
    pub kind: EntryKind,
}

impl FlatEdge {
    /// Converts a non-root traversal entry into an edge
    pub fn from_entry(entry: &TraversalEntry) -> Option<Self> {
        let parent = entry.parent.clone()?;
        let child = match entry.kind {
            EntryKind::Truncated => None,
            _ => Some(entry.name.clone()),
        };
        Some(Self {
            parent,
            child,
            depth: entry.depth,
            kind: entry.kind,
        })
    }
}
