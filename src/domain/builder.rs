//! Tree construction from section paths.
//!
//! Each entry descends from the top level one path segment at a time,
//! reusing a sibling section with the same title or appending a new one,
//! and finally appends its option as a leaf of the deepest section.
//! Sections keep first-seen order; nothing is sorted.

use crate::models::{RawOption, SelectOption};

use super::tree::{NodeId, NodeKind, Tree};

/// Incremental hierarchy builder
#[derive(Debug, Default)]
pub struct HierarchyBuilder {
    tree: Tree,
}

impl HierarchyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert one option under `path`, returning the new leaf
    ///
    /// An empty path places the leaf at the top level. A leaf whose label
    /// equals a segment is never reused as a section.
    pub fn insert<P>(&mut self, path: P, option: SelectOption) -> NodeId
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let mut parent = None;
        for segment in path {
            let segment = segment.as_ref();
            let section = match self.tree.find_child_section(parent, segment) {
                Some(existing) => existing,
                None => self.tree.attach(
                    parent,
                    NodeKind::Section {
                        title: segment.to_string(),
                    },
                ),
            };
            parent = Some(section);
        }
        self.tree.attach(
            parent,
            NodeKind::Leaf {
                option,
                checked: false,
            },
        )
    }

    /// Finish building
    pub fn finish(self) -> Tree {
        self.tree
    }
}

/// Build a tree from `(path, option)` entries in input order
pub fn build_tree<P>(entries: impl IntoIterator<Item = (P, SelectOption)>) -> Tree
where
    P: IntoIterator,
    P::Item: AsRef<str>,
{
    let mut builder = HierarchyBuilder::new();
    for (path, option) in entries {
        builder.insert(path, option);
    }
    builder.finish()
}

/// Build a tree from host records, splitting each section on `delimiter`
pub fn build_tree_from_records<'a>(
    records: impl IntoIterator<Item = &'a RawOption>,
    delimiter: &str,
) -> Tree {
    build_tree(
        records
            .into_iter()
            .map(|record| (record.path(delimiter), record.to_option())),
    )
}
