//! Tree data and the three key sets (expanded, selected, checked) that
//! make up a tree's state.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

pub type KeySet = BTreeSet<String>;

/// One node of declarative tree data. Carries no UI state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNodeData {
    pub key: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNodeData>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checkable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_leaf: Option<bool>,
}

impl TreeNodeData {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            children: Vec::new(),
            disabled: false,
            selectable: None,
            checkable: None,
            is_leaf: None,
        }
    }

    pub fn with_children(mut self, children: Vec<TreeNodeData>) -> Self {
        self.children = children;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Explicit `is_leaf` wins; otherwise a node without children is a leaf.
    pub fn leaf(&self) -> bool {
        self.is_leaf.unwrap_or(self.children.is_empty())
    }

    /// Keys of every node below this one, depth first.
    pub fn descendant_keys(&self) -> Vec<String> {
        all_keys(&self.children)
    }
}

/// Every key in the forest, depth first.
pub fn all_keys(nodes: &[TreeNodeData]) -> Vec<String> {
    let mut keys = Vec::new();
    collect_keys(nodes, &mut keys);
    keys
}

fn collect_keys(nodes: &[TreeNodeData], keys: &mut Vec<String>) {
    for node in nodes {
        keys.push(node.key.clone());
        collect_keys(&node.children, keys);
    }
}

pub fn find_node<'a>(nodes: &'a [TreeNodeData], key: &str) -> Option<&'a TreeNodeData> {
    nodes.iter().find_map(|node| {
        if node.key == key {
            Some(node)
        } else {
            find_node(&node.children, key)
        }
    })
}

/// Result of toggling one key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggled {
    pub keys: KeySet,
    /// The key's new state (expanded, selected or checked).
    pub on: bool,
}

impl Toggled {
    /// Key list handed to change callbacks.
    pub fn key_list(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

pub fn toggle_expanded(expanded: &KeySet, key: &str) -> Toggled {
    let mut keys = expanded.clone();
    let on = !keys.remove(key);
    if on {
        keys.insert(key.to_string());
    }
    Toggled { keys, on }
}

/// Single mode swaps between `{key}` and nothing; multiple mode toggles
/// membership.
pub fn toggle_selected(selected: &KeySet, key: &str, multiple: bool) -> Toggled {
    let was = selected.contains(key);
    let keys = if multiple {
        let mut keys = selected.clone();
        if was {
            keys.remove(key);
        } else {
            keys.insert(key.to_string());
        }
        keys
    } else if was {
        KeySet::new()
    } else {
        KeySet::from([key.to_string()])
    };
    Toggled { keys, on: !was }
}

/// How far a check toggle reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckCascade {
    /// The key and all its descendants follow the new state.
    Descendants,
    #[default]
    SelfOnly,
}

pub fn toggle_checked(
    checked: &KeySet,
    key: &str,
    descendants: &[String],
    cascade: CheckCascade,
) -> Toggled {
    let mut keys = checked.clone();
    let on = !keys.contains(key);
    let mut apply = |k: &str| {
        if on {
            keys.insert(k.to_string());
        } else {
            keys.remove(k);
        }
    };
    apply(key);
    if cascade == CheckCascade::Descendants {
        for k in descendants {
            apply(k);
        }
    }
    Toggled { keys, on }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckState {
    Checked,
    Unchecked,
    Indeterminate,
}

impl CheckState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckState::Checked => "checked",
            CheckState::Unchecked => "unchecked",
            CheckState::Indeterminate => "indeterminate",
        }
    }

    /// Value for `aria-checked`.
    pub fn aria(&self) -> &'static str {
        match self {
            CheckState::Checked => "true",
            CheckState::Unchecked => "false",
            CheckState::Indeterminate => "mixed",
        }
    }
}

/// Indeterminate when some but not all descendants are checked.
pub fn check_state(checked: &KeySet, key: &str, descendants: &[String]) -> CheckState {
    let hits = descendants.iter().filter(|k| checked.contains(*k)).count();
    if hits > 0 && hits < descendants.len() {
        CheckState::Indeterminate
    } else if checked.contains(key) {
        CheckState::Checked
    } else {
        CheckState::Unchecked
    }
}

/// Drop keys that no longer name a node after `tree_data` was replaced.
pub fn retain_known(keys: &KeySet, nodes: &[TreeNodeData]) -> KeySet {
    let known: BTreeSet<String> = all_keys(nodes).into_iter().collect();
    keys.intersection(&known).cloned().collect()
}
