use dioxus::prelude::*;
use ui_core::SlotTag;
use ui_kit::components::*;
use ui_kit::primitives::{AsChild, SlotElement};

use crate::common::*;

#[test]
fn radio_item_renders_as_caller_label() {
    fn app() -> Element {
        rsx! {
            RadioGroup { name: "plan".to_string(), default_value: "pro".to_string(),
                RadioItem {
                    value: "pro".to_string(),
                    as_child: AsChild::new(
                        SlotElement::new(SlotTag::Label, rsx! { "Pro plan" }).class("choice"),
                    ),
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains("<label"));
    assert!(html.contains(r#"class="choice radio-item""#));
    assert!(html.contains(r#"role="radio""#));
    assert!(html.contains(r#"aria-checked="true""#));
    assert!(!html.contains(r#"class="radio-item""#));
}

#[test]
fn modal_trigger_keeps_caller_tag_and_overrides() {
    fn app() -> Element {
        rsx! {
            Modal {
                ModalTrigger {
                    as_child: AsChild::new(
                        SlotElement::new(SlotTag::Anchor, rsx! { "Edit profile" })
                            .class("link")
                            .attr("aria-haspopup", "menu"),
                    ),
                }
                ModalContent { ModalTitle { "Profile" } }
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(r#"class="link modal-trigger""#));
    assert!(html.contains(r#"aria-haspopup="menu""#));
    assert!(html.contains(r#"aria-expanded="false""#));
    assert!(!html.contains("<button"));
    assert!(!html.contains("Profile<"));
}

#[test]
fn tree_node_hosts_row_parts_before_own_content() {
    fn app() -> Element {
        rsx! {
            Tree {
                TreeNode {
                    node_key: "docs",
                    title: "Documents",
                    as_child: AsChild::new(
                        SlotElement::new(SlotTag::Anchor, rsx! { span { class: "badge", "3" } })
                            .attr("href", "/docs"),
                    ),
                }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"href="/docs""#));
    assert!(html.contains(r#"class="tree-node-row""#));
    let title = html.find("Documents").unwrap_or(usize::MAX);
    let badge = html.find(r#"class="badge""#).unwrap_or(0);
    assert!(title < badge);
}

#[test]
fn hover_card_trigger_child_attribute_wins() {
    fn app() -> Element {
        rsx! {
            HoverCard {
                HoverCardTrigger {
                    as_child: AsChild::new(
                        SlotElement::new(SlotTag::Span, rsx! { "@ferris" }).attr("data-state", "pinned"),
                    ),
                }
                HoverCardContent { "Crab" }
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"class="hover-card-trigger""#));
    assert!(html.contains(r#"data-state="pinned""#));
    assert!(html.contains("@ferris"));
    assert!(!html.contains("Crab"));
}
