//! Picker dispatcher.
//!
//! `TreeMultiselect` owns one tree, its selected list and canonical value,
//! and processes triggers one at a time. Every trigger runs to completion
//! through the same pipeline before the call returns:
//!
//! ```text
//! cascade (selection) -> reconcile (selected list) -> sync (canonical value)
//! ```
//!
//! A reorder trigger skips the cascade and replaces the list order
//! directly. A trigger that fails validation changes nothing.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::PickerConfig;
use crate::domain::builder::build_tree_from_records;
use crate::domain::canonical::{self, CanonicalValue};
use crate::domain::ports::{NoopEventSink, PickerEvent, PickerEventSink};
use crate::domain::reconcile::{
    current_selections, ReconcileOutcome, SelectedEntry, SelectedList,
};
use crate::domain::selection::{self, CascadeOutcome, SelectionState};
use crate::domain::tree::{NodeId, Tree, WalkEntry};
use crate::error::{PickerError, PickerResult};
use crate::models::{split_section_path, OptionSet};

/// An external event the picker reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// A leaf's checkbox was set
    LeafToggled { leaf: NodeId, checked: bool },
    /// A section's checkbox was set
    SectionToggled { section: NodeId, checked: bool },
    /// The selected list was reordered from outside (drag and drop)
    ReorderCompleted { order: Vec<String> },
}

impl Trigger {
    fn describe(&self) -> String {
        match self {
            Trigger::LeafToggled { leaf, checked } => format!("leaf {leaf} -> {checked}"),
            Trigger::SectionToggled { section, checked } => {
                format!("section {section} -> {checked}")
            }
            Trigger::ReorderCompleted { order } => format!("reorder {order:?}"),
        }
    }
}

/// What one trigger did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// Cascade result (`None` for reorders)
    pub cascade: Option<CascadeOutcome>,
    /// Keys added to and removed from the selected list
    pub reconcile: ReconcileOutcome,
}

/// Hierarchical multi-select picker
pub struct TreeMultiselect {
    config: PickerConfig,
    tree: Tree,
    selected: SelectedList,
    canonical: CanonicalValue,
    collapsed: BTreeSet<NodeId>,
    sink: Arc<dyn PickerEventSink>,
}

impl TreeMultiselect {
    /// Build a picker from host records
    pub fn new(options: &OptionSet, config: PickerConfig) -> Self {
        Self::with_event_sink(options, config, Arc::new(NoopEventSink))
    }

    /// Build a picker from host records, reporting to `sink`
    pub fn with_event_sink(
        options: &OptionSet,
        config: PickerConfig,
        sink: Arc<dyn PickerEventSink>,
    ) -> Self {
        let tree = build_tree_from_records(&options.options, &config.section_delimiter);
        Self::from_tree(tree, &options.preselected_values(), config, sink)
    }

    /// Wrap an already built tree
    ///
    /// Every leaf whose value is in `preselected` starts checked; the
    /// initial selected list is those leaves in tree order.
    pub fn from_tree(
        mut tree: Tree,
        preselected: &[String],
        config: PickerConfig,
        sink: Arc<dyn PickerEventSink>,
    ) -> Self {
        let mut preselected_count = 0;
        for leaf in tree.leaves() {
            let wanted = tree
                .node(leaf)
                .ok()
                .and_then(|node| node.option())
                .is_some_and(|option| preselected.iter().any(|v| v == option.value()));
            if wanted && matches!(tree.set_checked(leaf, true), Ok(false)) {
                preselected_count += 1;
            }
        }

        let collapsed = if config.starts_collapsed() {
            tree.walk()
                .into_iter()
                .map(|entry| entry.id)
                .filter(|id| tree.section(*id).is_ok())
                .collect()
        } else {
            BTreeSet::new()
        };

        sink.on_event(PickerEvent::Built {
            sections: tree.section_count(),
            leaves: tree.leaf_count(),
            preselected: preselected_count,
        });

        let mut picker = Self {
            config,
            tree,
            selected: SelectedList::new(),
            canonical: CanonicalValue::default(),
            collapsed,
            sink,
        };
        // Leaves are all valid here, so the initial pass cannot fail
        let current = current_selections(&picker.tree, picker.config.identity).unwrap_or_default();
        picker.reconcile(&current, &[]);
        picker.sync_canonical();
        picker
    }

    /// Run one trigger through the pipeline
    pub fn dispatch(&mut self, trigger: Trigger) -> PickerResult<DispatchOutcome> {
        match self.run(&trigger) {
            Ok(outcome) => Ok(outcome),
            Err(e) => {
                self.sink.on_event(PickerEvent::TriggerRejected {
                    trigger: trigger.describe(),
                    reason: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Set a leaf's checkbox
    pub fn set_leaf(&mut self, leaf: NodeId, checked: bool) -> PickerResult<DispatchOutcome> {
        self.dispatch(Trigger::LeafToggled { leaf, checked })
    }

    /// Set a section's checkbox, cascading to every leaf below it
    pub fn set_section(
        &mut self,
        section: NodeId,
        checked: bool,
    ) -> PickerResult<DispatchOutcome> {
        self.dispatch(Trigger::SectionToggled { section, checked })
    }

    /// Replace the selected list order (requires `sortable`)
    pub fn reorder<S: AsRef<str>>(&mut self, order: &[S]) -> PickerResult<DispatchOutcome> {
        self.dispatch(Trigger::ReorderCompleted {
            order: order.iter().map(|k| k.as_ref().to_string()).collect(),
        })
    }

    fn run(&mut self, trigger: &Trigger) -> PickerResult<DispatchOutcome> {
        match trigger {
            Trigger::LeafToggled { leaf, checked } => {
                let outcome = selection::set_leaf(&mut self.tree, *leaf, *checked)?;
                self.report_leaf_changes(&outcome);
                self.after_cascade(outcome)
            }
            Trigger::SectionToggled { section, checked } => {
                let outcome = selection::set_section(&mut self.tree, *section, *checked)?;
                self.sink.on_event(PickerEvent::SectionCascaded {
                    node: *section,
                    title: self.tree.node(*section)?.label().to_string(),
                    checked: *checked,
                    affected: outcome.changed.len(),
                });
                self.report_leaf_changes(&outcome);
                self.after_cascade(outcome)
            }
            Trigger::ReorderCompleted { order } => {
                if !self.config.sortable {
                    return Err(PickerError::ReorderDisabled);
                }
                self.selected.reorder(order)?;
                self.sink.on_event(PickerEvent::Reordered {
                    order: order.clone(),
                });
                self.sync_canonical();
                Ok(DispatchOutcome::default())
            }
        }
    }

    fn report_leaf_changes(&self, outcome: &CascadeOutcome) {
        if !self.sink.wants_detailed_events() {
            return;
        }
        for leaf in &outcome.changed {
            if let Ok(node) = self.tree.node(*leaf) {
                self.sink.on_event(PickerEvent::LeafChanged {
                    node: *leaf,
                    label: node.label().to_string(),
                    checked: outcome.checked,
                });
            }
        }
    }

    fn after_cascade(&mut self, cascade: CascadeOutcome) -> PickerResult<DispatchOutcome> {
        let identity = self.config.identity;
        let released: Vec<String> = if cascade.checked {
            Vec::new()
        } else {
            cascade
                .changed
                .iter()
                .map(|leaf| SelectedEntry::for_leaf(&self.tree, *leaf, identity).map(|e| e.key))
                .collect::<PickerResult<_>>()?
        };

        let current = current_selections(&self.tree, identity)?;
        let reconcile = self.reconcile(&current, &released);
        self.sync_canonical();

        Ok(DispatchOutcome {
            cascade: Some(cascade),
            reconcile,
        })
    }

    fn reconcile(&mut self, current: &[SelectedEntry], released: &[String]) -> ReconcileOutcome {
        let outcome = self.selected.reconcile(current, released);
        self.sink.on_event(PickerEvent::Reconciled {
            added: outcome.added.clone(),
            removed: outcome.removed.clone(),
            selected: self.selected.len(),
        });
        outcome
    }

    fn sync_canonical(&mut self) {
        self.canonical = canonical::sync(&self.selected);
        self.sink.on_event(PickerEvent::CanonicalSynced {
            values: self
                .canonical
                .selected_values()
                .into_iter()
                .map(str::to_string)
                .collect(),
        });
    }

    /// Collapse or expand a section
    ///
    /// Returns `false` without changing anything when collapsing is
    /// disabled. Never touches selection state.
    pub fn toggle_collapsed(&mut self, section: NodeId) -> PickerResult<bool> {
        self.tree.section(section)?;
        if !self.config.collapsible {
            return Ok(false);
        }
        let collapsed = if self.collapsed.remove(&section) {
            false
        } else {
            self.collapsed.insert(section);
            true
        };
        self.sink.on_event(PickerEvent::CollapseToggled {
            node: section,
            collapsed,
        });
        Ok(true)
    }

    pub fn is_collapsed(&self, section: NodeId) -> bool {
        self.collapsed.contains(&section)
    }

    /// Nodes not hidden inside a collapsed section, depth-first
    pub fn visible_nodes(&self) -> Vec<WalkEntry> {
        let mut visible = Vec::new();
        let mut hidden_below: Option<usize> = None;
        for entry in self.tree.walk() {
            if let Some(depth) = hidden_below {
                if entry.depth > depth {
                    continue;
                }
                hidden_below = None;
            }
            if self.collapsed.contains(&entry.id) {
                hidden_below = Some(entry.depth);
            }
            visible.push(entry);
        }
        visible
    }

    /// Resolve a delimiter-joined path to a node
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let segments = split_section_path(path, &self.config.section_delimiter);
        self.tree.find_by_path(&segments)
    }

    /// Resolve the `occurrence`-th (1-based) option at a delimiter-joined path
    pub fn find_occurrence(&self, path: &str, occurrence: usize) -> Option<NodeId> {
        let segments = split_section_path(path, &self.config.section_delimiter);
        self.tree.find_leaf_by_path(&segments, occurrence)
    }

    /// Display state of a node's checkbox
    pub fn state_of(&self, id: NodeId) -> PickerResult<SelectionState> {
        selection::state_of(&self.tree, id)
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn selected(&self) -> &SelectedList {
        &self.selected
    }

    pub fn canonical(&self) -> &CanonicalValue {
        &self.canonical
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }
}
