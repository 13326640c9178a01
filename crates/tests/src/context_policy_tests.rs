use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;

use crate::common::*;

// ── Parts that require their root ───────────────────────────────────

#[test]
fn required_parts_name_their_root() {
    #[component]
    fn Orphans() -> Element {
        let modal = use_modal_context("ModalTitle").err();
        let slider = use_slider_context("SliderThumb").err();
        let tooltip = use_tooltip_context("TooltipContent").err();
        let number = use_input_number_context("InputNumberField").err();
        let card = use_hover_card_context("HoverCardContent").err();
        let tree = use_tree_context("TreeNode").err();
        rsx! {
            for err in [modal, slider, tooltip, number, card, tree].into_iter().flatten() {
                p { "{err}" }
            }
        }
    }

    fn app() -> Element {
        rsx! { Orphans {} }
    }

    let html = render(app);
    // Text is escaped on render, so match up to the root's tag.
    for part in [
        "ModalTitle",
        "SliderThumb",
        "TooltipContent",
        "InputNumberField",
        "HoverCardContent",
        "TreeNode",
    ] {
        let expected = format!("{part} must be used within a");
        assert!(html.contains(&expected), "missing {expected:?} in {html}");
    }
    assert_eq!(html.matches("<p>").count(), 6);
}

#[test]
fn required_parts_resolve_inside_their_root() {
    #[component]
    fn Inside() -> Element {
        let found = use_modal_context("ModalBody").is_ok();
        rsx! { "inside={found}" }
    }

    fn app() -> Element {
        rsx! {
            Modal { default_open: true,
                ModalContent { Inside {} }
            }
        }
    }

    assert!(render(app).contains("inside=true"));
}

// ── Parts with a detached fallback ──────────────────────────────────

#[test]
fn detached_menu_item_renders_unselected() {
    fn app() -> Element {
        rsx! {
            DropdownMenuItem { value: "copy", "Copy" }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"role="menuitem""#));
    assert!(html.contains(r#"data-selected="false""#));
    assert!(html.contains("Copy"));
}

#[test]
fn detached_avatar_fallback_shows_its_children() {
    fn app() -> Element {
        rsx! {
            AvatarFallback { "FB" }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"class="avatar-fallback""#));
    assert!(html.contains("FB"));
}

#[test]
fn card_parts_need_no_root() {
    fn app() -> Element {
        rsx! {
            CardHeader { CardTitle { "Loose title" } }
        }
    }

    let html = render(app);
    assert!(html.contains("<h3"));
    assert!(html.contains("Loose title"));
}
