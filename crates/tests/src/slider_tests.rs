use std::cell::RefCell;

use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use ui_core::slider::{SliderValue, Thumb};
use ui_kit::components::*;

use crate::common::*;

thread_local! {
    static SLIDER: RefCell<Option<SliderContext>> = const { RefCell::new(None) };
    static CHANGES: RefCell<Vec<SliderValue>> = const { RefCell::new(Vec::new()) };
    static COMPLETED: RefCell<Vec<SliderValue>> = const { RefCell::new(Vec::new()) };
}

#[component]
fn Capture() -> Element {
    let ctx = use_slider_context("Capture")?;
    SLIDER.with(|s| *s.borrow_mut() = Some(ctx));
    rsx! {}
}

fn slider() -> SliderContext {
    match SLIDER.with(|s| *s.borrow()) {
        Some(ctx) => ctx,
        None => panic!("slider context was not captured"),
    }
}

fn changes() -> Vec<SliderValue> {
    CHANGES.with(|c| c.borrow().clone())
}

fn completed() -> Vec<SliderValue> {
    COMPLETED.with(|c| c.borrow().clone())
}

// ── Value shape ─────────────────────────────────────────────────────

#[test]
fn single_slider_reports_single_values() {
    fn app() -> Element {
        rsx! {
            Slider {
                default_value: SliderValue::Single(40.0),
                on_change: move |v: SliderValue| CHANGES.with(|c| c.borrow_mut().push(v)),
                SliderTrack { SliderRange {} }
                SliderThumb {}
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    assert!(harness.html().contains(r#"aria-valuenow="40""#));

    let ctx = slider();
    harness.act(|| ctx.set((0.0, 65.0)));

    assert_eq!(changes(), vec![SliderValue::Single(65.0)]);
    assert!(harness.html().contains(r#"aria-valuenow="65""#));
}

#[test]
fn range_flag_shapes_reported_value() {
    fn app() -> Element {
        rsx! {
            Slider {
                range: true,
                default_value: SliderValue::Range(20.0, 80.0),
                on_change: move |v: SliderValue| CHANGES.with(|c| c.borrow_mut().push(v)),
                SliderTrack { SliderRange {} }
                SliderThumb { thumb: Thumb::Start }
                SliderThumb { thumb: Thumb::End }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = slider();
    harness.act(|| ctx.set((30.0, 70.0)));

    assert_eq!(changes(), vec![SliderValue::Range(30.0, 70.0)]);
    let html = harness.html();
    assert!(html.contains(r#"aria-valuenow="30""#));
    assert!(html.contains(r#"aria-valuenow="70""#));
}

#[test]
fn controlled_value_outside_bounds_renders_clamped() {
    fn app() -> Element {
        rsx! {
            Slider {
                value: SliderValue::Single(250.0),
                min: 10.0,
                max: 90.0,
                SliderTrack { SliderRange {} }
                SliderThumb {}
            }
        }
    }

    let html = render(app);
    assert!(html.contains(r#"aria-valuenow="90""#));
    assert!(html.contains(r#"aria-valuemin="10""#));
    assert!(html.contains(r#"aria-valuemax="90""#));
}

// ── Drag lifecycle ──────────────────────────────────────────────────

#[test]
fn drag_release_reports_completion_once() {
    fn app() -> Element {
        rsx! {
            Slider {
                default_value: SliderValue::Single(40.0),
                on_change: move |v: SliderValue| CHANGES.with(|c| c.borrow_mut().push(v)),
                on_change_complete: move |v: SliderValue| COMPLETED.with(|c| c.borrow_mut().push(v)),
                SliderTrack { SliderRange {} }
                SliderThumb {}
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = slider();

    harness.act(|| ctx.begin_drag(Thumb::End));
    assert!(harness.act(|| ctx.is_dragging()));
    assert!(harness.html().contains("slider-drag-surface"));

    // No track measurement in a headless render: moves are ignored.
    harness.act(|| ctx.drag_to(120.0, 4.0));
    assert!(changes().is_empty());

    harness.act(|| ctx.end_drag());
    harness.act(|| ctx.end_drag());
    assert_eq!(completed(), vec![SliderValue::Single(40.0)]);
    assert!(!harness.html().contains("slider-drag-surface"));
}

#[test]
fn disabled_slider_ignores_requests() {
    fn app() -> Element {
        rsx! {
            Slider {
                disabled: true,
                default_value: SliderValue::Single(40.0),
                on_change: move |v: SliderValue| CHANGES.with(|c| c.borrow_mut().push(v)),
                SliderTrack { SliderRange {} }
                SliderThumb {}
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = slider();
    harness.act(|| {
        ctx.set((0.0, 10.0));
        ctx.begin_drag(Thumb::End);
    });

    assert!(changes().is_empty());
    assert!(!harness.act(|| ctx.is_dragging()));
}

#[test]
fn requests_past_max_are_clamped_before_reporting() {
    fn app() -> Element {
        rsx! {
            Slider {
                range: true,
                default_value: SliderValue::Range(20.0, 80.0),
                on_change: move |v: SliderValue| CHANGES.with(|c| c.borrow_mut().push(v)),
                SliderTrack { SliderRange {} }
                SliderThumb { thumb: Thumb::Start }
                SliderThumb { thumb: Thumb::End }
                Capture {}
            }
        }
    }

    let mut harness = Harness::new(app);
    let ctx = slider();
    harness.act(|| ctx.set((130.0, 150.0)));
    harness.act(|| ctx.set((130.0, 150.0)));

    assert_eq!(
        changes(),
        vec![SliderValue::Range(100.0, 100.0), SliderValue::Range(100.0, 100.0)]
    );
    assert_eq!(harness.act(|| ctx.thumb_value(Thumb::Start)), 100.0);
}
