use std::cell::RefCell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;

use crate::common::*;

thread_local! {
    static MODAL: RefCell<Option<ModalContext>> = const { RefCell::new(None) };
    static OPEN_CHANGES: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
}

#[component]
fn Capture() -> Element {
    let ctx = use_modal_context("Capture")?;
    MODAL.with(|m| *m.borrow_mut() = Some(ctx));
    rsx! {}
}

fn modal() -> ModalContext {
    match MODAL.with(|m| *m.borrow()) {
        Some(ctx) => ctx,
        None => panic!("modal context was not captured"),
    }
}

fn open_changes() -> Vec<bool> {
    OPEN_CHANGES.with(|o| o.borrow().clone())
}

// ── Keyboard dismissal ──────────────────────────────────────────────

#[test]
fn escape_closes_and_reports_false() {
    fn app() -> Element {
        rsx! {
            Modal {
                default_open: true,
                on_open_change: move |open: bool| OPEN_CHANGES.with(|o| o.borrow_mut().push(open)),
                ModalContent { ModalBody { "Are you sure?" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    assert!(harness.html().contains("Are you sure?"));

    let ctx = modal();
    harness.act(|| ctx.key_down(&Key::Enter));
    assert!(open_changes().is_empty());

    harness.act(|| ctx.key_down(&Key::Escape));
    assert_eq!(open_changes(), vec![false]);
    assert!(!harness.html().contains("Are you sure?"));
}

#[test]
fn escape_is_ignored_when_not_closable() {
    fn app() -> Element {
        rsx! {
            Modal {
                default_open: true,
                closable: false,
                on_open_change: move |open: bool| OPEN_CHANGES.with(|o| o.borrow_mut().push(open)),
                ModalContent { ModalBody { "Pinned" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = modal();
    harness.act(|| ctx.key_down(&Key::Escape));

    assert!(open_changes().is_empty());
    assert!(harness.html().contains("Pinned"));
}

// ── Controlled without a handler ────────────────────────────────────

#[test]
fn controlled_modal_without_handler_stays_open() {
    fn app() -> Element {
        rsx! {
            Modal { open: Some(true),
                ModalContent { ModalBody { "Held open" } }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = modal();
    harness.act(|| {
        ctx.key_down(&Key::Escape);
        ctx.set_open(false);
    });
    harness.rerender();

    assert!(harness.html().contains("Held open"));
}
