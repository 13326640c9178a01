use std::cell::RefCell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_core::radio::RadioOption;
use ui_core::ApiMode;
use ui_kit::components::*;

use crate::common::*;

thread_local! {
    static GROUP: RefCell<Option<RadioGroupContext>> = const { RefCell::new(None) };
    static ITEM: RefCell<Option<RadioItemContext>> = const { RefCell::new(None) };
    static PLAN: RefCell<Option<Signal<String>>> = const { RefCell::new(None) };
    static CHANGES: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Hands the surrounding group context to the test body.
#[component]
fn Capture() -> Element {
    let ctx = use_radio_group_context();
    GROUP.with(|g| *g.borrow_mut() = Some(ctx));
    rsx! {}
}

/// Hands the enclosing item context to the test body.
#[component]
fn CaptureItem() -> Element {
    let item = use_radio_item_context();
    ITEM.with(|i| *i.borrow_mut() = item);
    rsx! {}
}

fn item() -> RadioItemContext {
    match ITEM.with(|i| *i.borrow()) {
        Some(item) => item,
        None => panic!("radio item context was not captured"),
    }
}

fn group() -> RadioGroupContext {
    GROUP.with(|g| g.borrow().unwrap_or_default())
}

fn changes() -> Vec<String> {
    CHANGES.with(|c| c.borrow().clone())
}

fn record(value: String) {
    CHANGES.with(|c| c.borrow_mut().push(value));
}

fn checked_label(html: &str) -> Option<String> {
    let at = html.find(r#"aria-checked="true""#)?;
    let rest = &html[at..];
    let start = rest.find(r#"class="radio-item-label""#)?;
    let text = &rest[start..];
    let open = text.find('>')? + 1;
    let close = text.find("</span>")?;
    Some(text[open..close].to_string())
}

// ── Uncontrolled ────────────────────────────────────────────────────

#[test]
fn uncontrolled_selection_updates_and_reports_once() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                default_value: "a".to_string(),
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(), RadioItemLabel { "Pro" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));

    let ctx = group();
    harness.act(|| ctx.select("b".to_string()));

    assert_eq!(changes(), vec!["b".to_string()]);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Pro"));
}

#[test]
fn declarative_options_share_the_same_state() {
    fn app() -> Element {
        let options: Vec<RadioOption> = serde_json::from_str(
            r#"[{"value":"a","label":"Basic"},{"value":"b","label":"Pro"},{"value":"c","label":"Team","disabled":true}]"#,
        )
        .unwrap_or_default();
        rsx! {
            RadioGroup { name: "plan".to_string(), on_change: move |v: String| record(v), options }
        }
    }

    let html = render(app);
    assert_eq!(html.matches(r#"role="radio""#).count(), 3);
    assert_eq!(checked_label(&html), None);
    assert_eq!(html.matches(r#"name="plan""#).count(), 3);
    assert_eq!(html.matches(r#"data-disabled="true""#).count(), 2);
}

#[test]
fn empty_string_is_a_selectable_value() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                on_change: move |v: String| record(v),
                RadioItem { value: String::new(), RadioItemLabel { "None" } }
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    assert_eq!(checked_label(&harness.html()), None);

    let ctx = group();
    harness.act(|| ctx.select(String::new()));

    assert_eq!(changes(), vec![String::new()]);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("None"));
}

#[test]
fn disabled_item_ignores_its_own_activation() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                default_value: "a".to_string(),
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(), disabled: Some(true),
                    RadioItemLabel { "Pro" }
                    CaptureItem {}
                }
            }
        }
    }

    let mut harness = Harness::new(app);
    let pro = item();
    harness.act(|| pro.select());

    assert!(changes().is_empty());
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));
}

#[test]
fn enabled_item_activation_selects_it() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                default_value: "a".to_string(),
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(),
                    RadioItemLabel { "Pro" }
                    CaptureItem {}
                }
            }
        }
    }

    let mut harness = Harness::new(app);
    let pro = item();
    harness.act(|| pro.select());

    assert_eq!(changes(), vec!["b".to_string()]);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Pro"));
}

// ── Declarative ─────────────────────────────────────────────────────

#[test]
fn declarative_options_follow_parent_state() {
    fn app() -> Element {
        let mut plan = use_signal(|| "a".to_string());
        PLAN.with(|p| *p.borrow_mut() = Some(plan));
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                value: Some(plan()),
                on_change: move |v: String| plan.set(v),
                options: vec![RadioOption::new("a", "Basic"), RadioOption::new("b", "Pro")],
            }
        }
    }

    let mut harness = Harness::new(app);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));

    let Some(mut plan) = PLAN.with(|p| *p.borrow()) else {
        panic!("plan signal was not captured");
    };
    harness.act(|| plan.set("b".to_string()));

    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Pro"));
    assert_eq!(harness.html().matches(r#"role="radio""#).count(), 2);
}

#[test]
fn declarative_group_without_options_keeps_children_selectable() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                api: ApiMode::Declarative,
                name: "plan".to_string(),
                default_value: "a".to_string(),
                options: Vec::new(),
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(), RadioItemLabel { "Pro" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let html = harness.html();
    assert!(html.contains(r#"role="radiogroup""#));
    assert!(!html.contains("radio-group"));

    let ctx = group();
    harness.act(|| ctx.select("b".to_string()));

    assert_eq!(changes(), vec!["b".to_string()]);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Pro"));
}

// ── Controlled ──────────────────────────────────────────────────────

#[test]
fn controlled_group_reports_without_moving() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                value: Some("a".to_string()),
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(), RadioItemLabel { "Pro" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = group();
    harness.act(|| ctx.select("b".to_string()));

    assert_eq!(changes(), vec!["b".to_string()]);
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));
}

#[test]
fn controlled_group_without_handler_stays_inert() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                value: Some("a".to_string()),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(),
                    RadioItemLabel { "Pro" }
                    CaptureItem {}
                }
            }
        }
    }

    let mut harness = Harness::new(app);
    let pro = item();
    harness.act(|| pro.select());
    harness.rerender();

    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));
}

#[test]
fn disabled_group_ignores_selection() {
    fn app() -> Element {
        rsx! {
            RadioGroup {
                name: "plan".to_string(),
                default_value: "a".to_string(),
                disabled: true,
                on_change: move |v: String| record(v),
                RadioItem { value: "a".to_string(), RadioItemLabel { "Basic" } }
                RadioItem { value: "b".to_string(), RadioItemLabel { "Pro" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = group();
    harness.act(|| ctx.select("b".to_string()));

    assert!(changes().is_empty());
    assert_eq!(checked_label(&harness.html()).as_deref(), Some("Basic"));
}

// ── Detached parts ──────────────────────────────────────────────────

#[test]
fn items_outside_a_group_render_unchecked() {
    fn app() -> Element {
        rsx! {
            RadioItem { value: "a".to_string(), RadioItemInput {} RadioItemLabel { "Loose" } }
            Capture {}
        }
    }

    let mut harness = Harness::new(app);
    let html = harness.html();
    assert!(html.contains(r#"aria-checked="false""#));
    assert!(html.contains("Loose"));

    let ctx = group();
    assert!(!ctx.is_attached());
    harness.act(|| ctx.select("a".to_string()));
    assert!(changes().is_empty());
}
