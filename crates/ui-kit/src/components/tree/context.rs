use dioxus::prelude::*;
use ui_core::tree::{check_state, CheckCascade, CheckState, KeySet};
use ui_core::{ContextError, Family, Marker};

use crate::primitives::use_required_context;

pub(crate) const TREE: Family = Family {
    root: "Tree",
    markers: &[Marker::Exact("TreeNode"), Marker::Prefix("TreeNode")],
    replacement: "TreeNode components",
    parts: "TreeNode",
};

/// Payload of `on_expand`, `on_select` and `on_check`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeChange {
    /// Full key list after the change.
    pub keys: Vec<String>,
    /// The node that was toggled.
    pub key: String,
    /// Its new expanded, selected or checked state.
    pub value: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckRequest {
    pub key: String,
    pub descendants: Vec<String>,
    pub cascade: CheckCascade,
}

#[derive(Clone, Copy, PartialEq)]
pub struct TreeContext {
    pub expanded: Memo<KeySet>,
    pub selected: Memo<KeySet>,
    pub checked: Memo<KeySet>,
    pub checkable: ReadSignal<bool>,
    pub selectable: ReadSignal<bool>,
    pub disabled: ReadSignal<bool>,
    pub show_line: ReadSignal<bool>,
    pub block_node: ReadSignal<bool>,
    pub(crate) on_toggle_expanded: Callback<String>,
    pub(crate) on_toggle_selected: Callback<String>,
    pub(crate) on_toggle_checked: Callback<CheckRequest>,
}

impl TreeContext {
    pub fn is_expanded(&self, key: &str) -> bool {
        self.expanded.read().contains(key)
    }

    pub fn is_selected(&self, key: &str) -> bool {
        self.selected.read().contains(key)
    }

    pub fn check_state(&self, key: &str, descendants: &[String]) -> CheckState {
        check_state(&self.checked.read(), key, descendants)
    }

    pub fn toggle_expanded(&self, key: impl Into<String>) {
        self.on_toggle_expanded.call(key.into());
    }

    pub fn toggle_selected(&self, key: impl Into<String>) {
        self.on_toggle_selected.call(key.into());
    }

    pub fn toggle_checked(&self, key: impl Into<String>, descendants: Vec<String>, cascade: CheckCascade) {
        self.on_toggle_checked.call(CheckRequest {
            key: key.into(),
            descendants,
            cascade,
        });
    }
}

pub fn use_tree_context(part: &'static str) -> Result<TreeContext, ContextError> {
    use_required_context(part, TREE.root)
}

/// Nesting depth, provided by each node to the nodes inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TreeLevel(pub usize);

pub(crate) fn use_tree_level() -> usize {
    try_use_context::<TreeLevel>().map(|l| l.0).unwrap_or(0)
}
