//! Plain-text rendering of a picker.
//!
//! Renders the visible tree and the selected list to strings for terminal
//! output. Hosts with their own widgets use the picker accessors instead.

use unicode_width::UnicodeWidthStr;

use crate::domain::selection::SelectionState;
use crate::picker::TreeMultiselect;

pub mod icons {
    pub const CHECKED: &str = "●";
    pub const UNCHECKED: &str = "○";
    pub const PARTIAL: &str = "◐";
}

pub mod icons_ascii {
    pub const CHECKED: &str = "[x]";
    pub const UNCHECKED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";
}

const EXPANDED: &str = "- ";
const COLLAPSED: &str = "+ ";
const NO_MARKER: &str = "  ";

fn state_icon(state: SelectionState, supports_unicode: bool) -> &'static str {
    match (state, supports_unicode) {
        (SelectionState::Checked, true) => icons::CHECKED,
        (SelectionState::Unchecked, true) => icons::UNCHECKED,
        (SelectionState::Partial, true) => icons::PARTIAL,
        (SelectionState::Checked, false) => icons_ascii::CHECKED,
        (SelectionState::Unchecked, false) => icons_ascii::UNCHECKED,
        (SelectionState::Partial, false) => icons_ascii::PARTIAL,
    }
}

/// Render every visible node, one per line
///
/// Sections get a collapse marker when collapsing is enabled. Leaf
/// descriptions are aligned in a column after the longest line.
pub fn render_tree(picker: &TreeMultiselect, supports_unicode: bool) -> String {
    let tree = picker.tree();
    let collapsible = picker.config().collapsible;

    let mut rows: Vec<(String, Option<&str>)> = Vec::new();
    for entry in picker.visible_nodes() {
        let Ok(node) = tree.node(entry.id) else {
            continue;
        };
        let Ok(state) = picker.state_of(entry.id) else {
            continue;
        };

        let marker = if !collapsible {
            ""
        } else if !node.is_section() {
            NO_MARKER
        } else if picker.is_collapsed(entry.id) {
            COLLAPSED
        } else {
            EXPANDED
        };

        let head = format!(
            "{}{}{} {}",
            "  ".repeat(entry.depth),
            marker,
            state_icon(state, supports_unicode),
            node.label()
        );
        let description = node.option().and_then(|o| o.description());
        rows.push((head, description));
    }

    if rows.is_empty() {
        return String::from("(no options)");
    }

    let width = rows.iter().map(|(head, _)| head.width()).max().unwrap_or(0);
    rows.into_iter()
        .map(|(head, description)| match description {
            Some(text) => {
                let pad = " ".repeat(width - head.width());
                format!("{head}{pad}  {text}")
            }
            None => head,
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the selected list as a numbered list
pub fn render_selected(picker: &TreeMultiselect) -> String {
    let selected = picker.selected();
    if selected.is_empty() {
        return String::from("(nothing selected)");
    }

    selected
        .labels()
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("\n")
}
