use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_core::radio::RadioOption;
use ui_core::tree::TreeNodeData;
use ui_kit::components::*;
use ui_kit::{ApiMode, KitConfig, KitProvider, WarningPolicy};

use crate::common::*;

fn loud() -> KitConfig {
    KitConfig::default().with_warnings(WarningPolicy::Always)
}

// ── Mixed usage ─────────────────────────────────────────────────────

#[test]
fn mixed_tooltip_warns_once_with_ignored_props() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: loud(),
                Tooltip {
                    heading: "Save".to_string(),
                    primary_action_text: "OK".to_string(),
                    TooltipTrigger { "?" }
                    TooltipContent { TooltipTitle { "Composable title" } }
                }
            }
        }
    }

    let (html, spy) = with_spy(|| {
        let mut harness = Harness::new(app);
        harness.rerender();
        harness.rerender();
        harness.html()
    });

    let events = spy.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].component, "Tooltip");
    assert_eq!(
        events[0].message,
        "Tooltip: Using deprecated props (heading, primary_action_text) with composable API. \
         Please use TooltipTitle, TooltipDescription, and Button components inside TooltipContent instead. \
         See migration guide: docs/migrations/composable-migration.md"
    );
    // Composable children win: the legacy heading never renders.
    assert!(!html.contains("Save"));
}

#[test]
fn explicit_composable_mode_ignores_legacy_options() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: loud(),
                RadioGroup {
                    api: ApiMode::Composable,
                    name: "plan".to_string(),
                    options: vec![RadioOption::new("a", "Legacy A")],
                    p { "custom body" }
                }
            }
        }
    }

    let (html, spy) = with_spy(|| render(app));

    assert_eq!(
        spy.messages(),
        vec![
            "RadioGroup: Using deprecated props (options) with composable API. \
             Please use RadioItem components instead. \
             See migration guide: docs/migrations/composable-migration.md"
                .to_string()
        ]
    );
    assert!(html.contains("custom body"));
    assert!(!html.contains("Legacy A"));
}

// ── Declarative usage ───────────────────────────────────────────────

#[test]
fn declarative_tree_reports_data_prop() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: loud(),
                Tree { tree_data: vec![TreeNodeData::new("a", "Alpha")] }
            }
        }
    }

    let (html, spy) = with_spy(|| render(app));

    assert_eq!(
        spy.messages(),
        vec![
            "Tree: Declarative API (tree_data prop) is deprecated. \
             Please migrate to composable API using TreeNode components. \
             See migration guide: docs/migrations/composable-migration.md"
                .to_string()
        ]
    );
    assert!(html.contains("Alpha"));
}

#[test]
fn each_instance_warns_for_itself() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: loud(),
                Card { title: "One".to_string() }
                Card { title: "Two".to_string() }
            }
        }
    }

    let (_, spy) = with_spy(|| render(app));

    let components: Vec<String> = spy.events().into_iter().map(|e| e.component).collect();
    assert_eq!(components, vec!["Card", "Card"]);
}

// ── Quiet paths ─────────────────────────────────────────────────────

#[test]
fn composable_usage_is_silent() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: loud(),
                RadioGroup { name: "plan".to_string(),
                    RadioItem { value: "a".to_string(), RadioItemLabel { "A" } }
                }
                Tree {
                    TreeNode { node_key: "a", title: "Alpha" }
                }
            }
        }
    }

    let (_, spy) = with_spy(|| render(app));
    assert!(spy.events().is_empty());
}

#[test]
fn silent_policy_suppresses_notices() {
    fn app() -> Element {
        rsx! {
            KitProvider { config: KitConfig::default().with_warnings(WarningPolicy::Silent),
                Tooltip { heading: "Save".to_string(), TooltipTrigger { "?" } }
                Tree { tree_data: vec![TreeNodeData::new("a", "Alpha")] }
            }
        }
    }

    let (html, spy) = with_spy(|| render(app));
    assert!(spy.events().is_empty());
    // Rendering is unaffected by the policy.
    assert!(html.contains("Alpha"));
}

#[test]
fn config_loaded_from_json_drives_policy() {
    fn app() -> Element {
        let config: KitConfig =
            serde_json::from_str(r#"{"warnings":"always","size":"lg"}"#).unwrap_or_default();
        rsx! {
            KitProvider { config,
                RadioGroup {
                    name: "plan".to_string(),
                    options: vec![RadioOption::new("a", "A")],
                }
            }
        }
    }

    let (html, spy) = with_spy(|| render(app));
    assert_eq!(spy.events().len(), 1);
    assert!(html.contains(r#"data-size="lg""#));
}
