use std::cell::RefCell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_core::tree::{CheckCascade, TreeNodeData};
use ui_kit::components::*;

use crate::common::*;

thread_local! {
    static TREE: RefCell<Option<TreeContext>> = const { RefCell::new(None) };
    static CHECKS: RefCell<Vec<TreeChange>> = const { RefCell::new(Vec::new()) };
}

#[component]
fn Capture() -> Element {
    let ctx = use_tree_context("Capture")?;
    TREE.with(|t| *t.borrow_mut() = Some(ctx));
    rsx! {}
}

fn tree() -> Option<TreeContext> {
    TREE.with(|t| *t.borrow())
}

fn checks() -> Vec<TreeChange> {
    CHECKS.with(|c| c.borrow().clone())
}

fn sample() -> Vec<TreeNodeData> {
    vec![TreeNodeData::new("A", "Root").with_children(vec![
        TreeNodeData::new("B", "First"),
        TreeNodeData::new("C", "Second"),
    ])]
}

// ── Declarative cascade ─────────────────────────────────────────────

#[test]
fn partially_checked_parent_is_indeterminate() {
    fn app() -> Element {
        rsx! {
            Tree {
                tree_data: sample(),
                checkable: true,
                default_expand_all: true,
                checked_keys: Some(vec!["B".to_string()]),
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches(r#"aria-checked="mixed""#).count(), 1);
    assert_eq!(html.matches(r#"data-state="checked""#).count(), 1);
    assert_eq!(html.matches(r#"data-state="unchecked""#).count(), 1);
}

#[test]
fn fully_checked_children_leave_parent_as_stored() {
    fn app() -> Element {
        rsx! {
            Tree {
                tree_data: sample(),
                checkable: true,
                default_expand_all: true,
                checked_keys: Some(vec!["A".to_string(), "B".to_string(), "C".to_string()]),
            }
        }
    }

    let html = render(app);
    assert!(!html.contains(r#"aria-checked="mixed""#));
    assert_eq!(html.matches(r#"data-state="checked""#).count(), 3);
}

// ── Composable checks ───────────────────────────────────────────────

#[test]
fn composable_node_checks_only_itself() {
    fn app() -> Element {
        rsx! {
            Tree {
                checkable: true,
                default_expanded_keys: vec!["A".to_string()],
                on_check: move |change: TreeChange| CHECKS.with(|c| c.borrow_mut().push(change)),
                TreeNode { node_key: "A", title: "Root",
                    TreeNode { node_key: "B", title: "First" }
                    TreeNode { node_key: "C", title: "Second" }
                }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let Some(ctx) = tree() else {
        panic!("tree context was not captured");
    };

    harness.act(|| ctx.toggle_checked("A", Vec::new(), CheckCascade::SelfOnly));

    assert_eq!(
        checks(),
        vec![TreeChange {
            keys: vec!["A".to_string()],
            key: "A".to_string(),
            value: true,
        }]
    );
    let html = harness.html();
    assert_eq!(html.matches(r#"data-state="checked""#).count(), 1);
    assert_eq!(html.matches(r#"data-state="unchecked""#).count(), 2);
}

#[test]
fn explicit_cascade_carries_descendants() {
    fn app() -> Element {
        rsx! {
            Tree {
                checkable: true,
                default_expanded_keys: vec!["A".to_string()],
                on_check: move |change: TreeChange| CHECKS.with(|c| c.borrow_mut().push(change)),
                TreeNode { node_key: "A", title: "Root",
                    TreeNode { node_key: "B", title: "First" }
                    TreeNode { node_key: "C", title: "Second" }
                }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let Some(ctx) = tree() else {
        panic!("tree context was not captured");
    };
    let subtree = vec!["B".to_string(), "C".to_string()];

    harness.act(|| ctx.toggle_checked("A", subtree.clone(), CheckCascade::Descendants));
    assert_eq!(checks()[0].keys, vec!["A", "B", "C"]);

    harness.act(|| ctx.toggle_checked("A", subtree, CheckCascade::Descendants));
    let last = checks().pop().map(|c| (c.keys, c.value));
    assert_eq!(last, Some((Vec::new(), false)));
}

#[test]
fn expanding_reveals_children() {
    fn app() -> Element {
        rsx! {
            Tree {
                TreeNode { node_key: "A", title: "Root",
                    TreeNode { node_key: "B", title: "First" }
                }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    assert!(!harness.html().contains("First"));

    let Some(ctx) = tree() else {
        panic!("tree context was not captured");
    };
    harness.act(|| ctx.toggle_expanded("A"));

    let html = harness.html();
    assert!(html.contains("First"));
    assert!(html.contains(r#"aria-expanded="true""#));
}
