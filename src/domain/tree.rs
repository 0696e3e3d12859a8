//! Arena-backed section/leaf tree.
//!
//! Nodes live in a flat `Vec` and refer to each other by [`NodeId`]. The
//! implicit root is not a node: top-level sections (and leaves built from
//! an empty path) are listed in [`Tree::roots`].

use std::fmt;

use serde::Serialize;

use crate::error::{PickerError, PickerResult};
use crate::models::SelectOption;

/// Stable handle to a node within one [`Tree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct NodeId(usize);

impl NodeId {
    /// Build a handle from a raw arena index
    ///
    /// The handle is only meaningful for the tree that produced that index;
    /// tree operations reject indices they do not own.
    pub fn from_index(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What a node holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Grouping node produced by one path segment
    Section { title: String },
    /// Selectable option with its checked flag
    Leaf { option: SelectOption, checked: bool },
}

/// A node in the arena
#[derive(Debug, Clone)]
pub struct Node {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    /// Child nodes in insertion order (always empty for leaves)
    pub children: Vec<NodeId>,
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf { .. })
    }

    pub fn is_section(&self) -> bool {
        matches!(self.kind, NodeKind::Section { .. })
    }

    /// Section title or leaf label
    pub fn label(&self) -> &str {
        match &self.kind {
            NodeKind::Section { title } => title,
            NodeKind::Leaf { option, .. } => option.label(),
        }
    }

    /// The option held by a leaf
    pub fn option(&self) -> Option<&SelectOption> {
        match &self.kind {
            NodeKind::Leaf { option, .. } => Some(option),
            NodeKind::Section { .. } => None,
        }
    }

    /// Checked flag of a leaf; sections carry no flag of their own
    pub fn checked(&self) -> Option<bool> {
        match &self.kind {
            NodeKind::Leaf { checked, .. } => Some(*checked),
            NodeKind::Section { .. } => None,
        }
    }
}

/// Node visited by [`Tree::walk`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkEntry {
    pub id: NodeId,
    /// Depth level (0 = top level)
    pub depth: usize,
}

/// The section/leaf hierarchy
#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    roots: Vec<NodeId>,
}

impl Tree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section under `parent` (or at top level)
    pub fn add_section(
        &mut self,
        parent: Option<NodeId>,
        title: impl Into<String>,
    ) -> PickerResult<NodeId> {
        self.push(
            parent,
            NodeKind::Section {
                title: title.into(),
            },
        )
    }

    /// Append an unchecked leaf under `parent` (or at top level)
    pub fn add_leaf(&mut self, parent: Option<NodeId>, option: SelectOption) -> PickerResult<NodeId> {
        self.push(
            parent,
            NodeKind::Leaf {
                option,
                checked: false,
            },
        )
    }

    fn push(&mut self, parent: Option<NodeId>, kind: NodeKind) -> PickerResult<NodeId> {
        if let Some(parent) = parent {
            self.section(parent)?;
        }
        Ok(self.attach(parent, kind))
    }

    /// Append without validating `parent`; callers must pass a section id
    /// obtained from this tree.
    pub(crate) fn attach(&mut self, parent: Option<NodeId>, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent,
            children: Vec::new(),
        });
        match parent {
            Some(parent) => self.nodes[parent.0].children.push(id),
            None => self.roots.push(id),
        }
        id
    }

    /// Look up a node
    pub fn node(&self, id: NodeId) -> PickerResult<&Node> {
        self.nodes.get(id.0).ok_or(PickerError::UnknownNode { id })
    }

    /// Look up a node that must be a section
    pub fn section(&self, id: NodeId) -> PickerResult<&Node> {
        let node = self.node(id)?;
        if node.is_section() {
            Ok(node)
        } else {
            Err(PickerError::NotASection { id })
        }
    }

    /// Look up a node that must be a leaf
    pub fn leaf(&self, id: NodeId) -> PickerResult<&Node> {
        let node = self.node(id)?;
        if node.is_leaf() {
            Ok(node)
        } else {
            Err(PickerError::NotALeaf { id })
        }
    }

    /// Set a leaf's checked flag, returning the previous value
    pub(crate) fn set_checked(&mut self, id: NodeId, value: bool) -> PickerResult<bool> {
        let node = self
            .nodes
            .get_mut(id.0)
            .ok_or(PickerError::UnknownNode { id })?;
        match &mut node.kind {
            NodeKind::Leaf { checked, .. } => Ok(std::mem::replace(checked, value)),
            NodeKind::Section { .. } => Err(PickerError::NotALeaf { id }),
        }
    }

    /// Top-level nodes in insertion order
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Children of `parent`, or the top level when `None`
    pub fn children_of(&self, parent: Option<NodeId>) -> PickerResult<&[NodeId]> {
        match parent {
            Some(id) => Ok(&self.node(id)?.children),
            None => Ok(&self.roots),
        }
    }

    /// Find a section child by title, ignoring leaves with the same label
    pub fn find_child_section(&self, parent: Option<NodeId>, title: &str) -> Option<NodeId> {
        self.children_of(parent).ok()?.iter().copied().find(|id| {
            matches!(&self.nodes[id.0].kind, NodeKind::Section { title: t } if t == title)
        })
    }

    /// Resolve a path of section titles, optionally ending in a leaf label
    ///
    /// The final segment matches a section first, then the first leaf with
    /// that label.
    pub fn find_by_path<S: AsRef<str>>(&self, path: &[S]) -> Option<NodeId> {
        let (last, prefix) = path.split_last()?;
        let parent = self.find_section_path(prefix)?;
        self.find_child_section(parent, last.as_ref())
            .or_else(|| self.find_leaf_by_path(path, 1))
    }

    /// Resolve the `occurrence`-th (1-based) leaf labelled like the final
    /// segment, skipping sections. Tells apart leaves sharing a full path.
    pub fn find_leaf_by_path<S: AsRef<str>>(
        &self,
        path: &[S],
        occurrence: usize,
    ) -> Option<NodeId> {
        let (last, prefix) = path.split_last()?;
        let parent = self.find_section_path(prefix)?;
        let last = last.as_ref();
        self.children_of(parent)
            .ok()?
            .iter()
            .copied()
            .filter(|id| self.nodes[id.0].is_leaf() && self.nodes[id.0].label() == last)
            .nth(occurrence.checked_sub(1)?)
    }

    /// Walk section titles from the top level; `Some(None)` is the top level
    fn find_section_path<S: AsRef<str>>(&self, titles: &[S]) -> Option<Option<NodeId>> {
        let mut parent = None;
        for title in titles {
            parent = Some(self.find_child_section(parent, title.as_ref())?);
        }
        Some(parent)
    }

    /// Ancestor sections from the parent up to the top level
    pub fn ancestors(&self, id: NodeId) -> PickerResult<Vec<NodeId>> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id)?.parent;
        while let Some(parent) = current {
            ancestors.push(parent);
            current = self.nodes[parent.0].parent;
        }
        Ok(ancestors)
    }

    /// Depth-first, pre-order walk over every node
    pub fn walk(&self) -> Vec<WalkEntry> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack: Vec<WalkEntry> = self
            .roots
            .iter()
            .rev()
            .map(|&id| WalkEntry { id, depth: 0 })
            .collect();
        while let Some(entry) = stack.pop() {
            out.push(entry);
            for &child in self.nodes[entry.id.0].children.iter().rev() {
                stack.push(WalkEntry {
                    id: child,
                    depth: entry.depth + 1,
                });
            }
        }
        out
    }

    /// Leaves under `id` in depth-first order (a leaf yields itself)
    pub fn leaves_under(&self, id: NodeId) -> PickerResult<Vec<NodeId>> {
        self.node(id)?;
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            let node = &self.nodes[current.0];
            if node.is_leaf() {
                out.push(current);
            }
            stack.extend(node.children.iter().rev());
        }
        Ok(out)
    }

    /// All leaves in depth-first order
    pub fn leaves(&self) -> Vec<NodeId> {
        self.walk()
            .into_iter()
            .map(|e| e.id)
            .filter(|id| self.nodes[id.0].is_leaf())
            .collect()
    }

    /// Checked leaves in depth-first order
    pub fn checked_leaves(&self) -> Vec<NodeId> {
        self.leaves()
            .into_iter()
            .filter(|id| self.nodes[id.0].checked() == Some(true))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    pub fn section_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_section()).count()
    }
}
