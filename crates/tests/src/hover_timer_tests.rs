use std::cell::RefCell;
use std::time::Duration;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_kit::components::*;

use crate::common::*;

thread_local! {
    static CARD: RefCell<Option<HoverCardContext>> = const { RefCell::new(None) };
    static OPENED: RefCell<Vec<bool>> = const { RefCell::new(Vec::new()) };
}

#[component]
fn Capture() -> Element {
    let ctx = use_hover_card_context("Capture")?;
    CARD.with(|c| *c.borrow_mut() = Some(ctx));
    rsx! {}
}

fn card() -> HoverCardContext {
    match CARD.with(|c| *c.borrow()) {
        Some(ctx) => ctx,
        None => panic!("hover card context was not captured"),
    }
}

fn opened() -> Vec<bool> {
    OPENED.with(|o| o.borrow().clone())
}

fn app() -> Element {
    rsx! {
        HoverCard {
            open_delay: 10,
            close_delay: 10,
            on_open_change: move |open: bool| OPENED.with(|o| o.borrow_mut().push(open)),
            HoverCardTrigger { "@ferris" }
            HoverCardContent { "Crab in residence" }
            Capture {}
        }
    }
}

const LIMIT: Duration = Duration::from_millis(500);

#[tokio::test]
async fn open_delay_elapses_before_showing() {
    let mut harness = Harness::new(app);
    let ctx = card();

    harness.act(|| ctx.enter());
    assert!(!harness.html().contains("Crab in residence"));

    assert!(harness.settle(LIMIT).await);
    assert!(harness.html().contains("Crab in residence"));
    assert_eq!(opened(), vec![true]);
}

#[tokio::test]
async fn leaving_before_open_cancels_the_timer() {
    let mut harness = Harness::new(app);
    let ctx = card();

    harness.act(|| {
        ctx.enter();
        ctx.leave();
    });

    harness.settle(Duration::from_millis(50)).await;
    assert!(!harness.html().contains("Crab in residence"));
    assert!(opened().is_empty());
}

#[tokio::test]
async fn reentering_keeps_the_card_open() {
    let mut harness = Harness::new(app);
    let ctx = card();

    harness.act(|| ctx.enter());
    assert!(harness.settle(LIMIT).await);

    harness.act(|| {
        ctx.leave();
        ctx.enter();
    });
    harness.settle(Duration::from_millis(50)).await;

    assert!(harness.html().contains("Crab in residence"));
    assert_eq!(opened(), vec![true]);
}
