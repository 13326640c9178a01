use dioxus::prelude::*;
use ui_core::slider::{MarksSetting, SliderBounds, SliderMark, SliderValue, Thumb};
use ui_core::{ApiMode, HandlerOrder, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    render_slot, slot_attributes, use_api_mode, use_controllable, AsChild, SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct SliderProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub value: ReadSignal<Option<SliderValue>>,
    #[props(default)]
    pub default_value: Option<SliderValue>,
    #[props(default = ReadSignal::new(Signal::new(0.0)))]
    pub min: ReadSignal<f64>,
    #[props(default = ReadSignal::new(Signal::new(100.0)))]
    pub max: ReadSignal<f64>,
    #[props(default = ReadSignal::new(Signal::new(1.0)))]
    pub step: ReadSignal<f64>,
    /// Two thumbs. Never inferred from the shape of `value`.
    #[props(default)]
    pub range: ReadSignal<bool>,
    #[props(default)]
    pub vertical: ReadSignal<bool>,
    #[props(default)]
    pub disabled: ReadSignal<bool>,
    #[props(default)]
    pub on_change: Callback<SliderValue>,
    /// Fired when a drag ends, with the value of its last move.
    #[props(default)]
    pub on_change_complete: Callback<SliderValue>,
    /// Deprecated: render `SliderMarks` instead.
    #[props(default)]
    pub marks: Option<MarksSetting>,
    /// Deprecated: show the value on each thumb.
    #[props(default)]
    pub tooltip: Option<bool>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Slider(props: SliderProps) -> Element {
    let mode = use_api_mode(
        &SLIDER,
        props.api,
        &props.children,
        &[
            ("marks", props.marks.is_some()),
            ("tooltip", props.tooltip.is_some()),
        ],
    );

    let (min, max, step, range) = (props.min, props.max, props.step, props.range);
    let bounds = use_memo(move || SliderBounds {
        min: min(),
        max: max(),
        step: step(),
    });
    let default_value = props.default_value;
    let value = use_controllable(props.value, move || {
        default_value.unwrap_or(SliderValue::Single(*min.peek()))
    });
    let pair = use_memo(move || {
        let b = bounds();
        b.clamp_pair(value.current().normalize(b.min))
    });

    let on_change = props.on_change;
    let on_change_complete = props.on_change_complete;
    let disabled = props.disabled;
    let on_value = use_callback(move |next: (f64, f64)| {
        if disabled() {
            return;
        }
        let next = bounds.peek().clamp_pair(next);
        on_change.call(value.request(SliderValue::from_pair(next, range())));
    });
    let on_complete = use_callback(move |last: (f64, f64)| {
        on_change_complete.call(SliderValue::from_pair(last, range()));
    });

    let drag = use_signal(|| None);
    let track = use_signal(|| None);
    let rect = use_signal(|| None);
    let ctx = use_context_provider(|| SliderContext {
        value: pair,
        bounds,
        range,
        vertical: props.vertical,
        disabled,
        drag,
        track,
        rect,
        on_value,
        on_complete,
    });

    let vertical = (props.vertical)();
    let base = vec![
        Attribute::new("class", "slider", None, false),
        Attribute::new(
            "data-orientation",
            if vertical { "vertical" } else { "horizontal" },
            None,
            false,
        ),
        Attribute::new("data-disabled", disabled(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    let body = match mode {
        ApiMode::Composable => props.children.clone(),
        ApiMode::Declarative => {
            let show_value = props.tooltip.unwrap_or(false);
            let marks = props.marks.clone().map(|m| m.resolve(&bounds()));
            rsx! {
                SliderTrack {
                    SliderRange {}
                }
                if range() {
                    SliderThumb { thumb: Thumb::Start, show_value }
                }
                SliderThumb { thumb: Thumb::End, show_value }
                if let Some(marks) = marks {
                    SliderMarks { marks }
                }
            }
        }
    };

    rsx! {
        div { ..merged, {body} }
        if ctx.is_dragging() {
            // Owns pointer tracking for the whole surface until release.
            div {
                class: "slider-drag-surface",
                style: "position: fixed; inset: 0;",
                onmousemove: move |evt: MouseEvent| {
                    let point = evt.client_coordinates();
                    ctx.drag_to(point.x, point.y);
                },
                onmouseup: move |_| ctx.end_drag(),
                onmouseleave: move |_| ctx.end_drag(),
            }
        }
    }
}

/// The rail. Clicking it moves the nearer thumb to the pointer.
#[component]
pub fn SliderTrack(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_slider_context("SliderTrack")?;
    let base = vec![Attribute::new("class", "slider-track", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            onmounted: move |evt: MountedEvent| {
                let mut track = ctx.track;
                track.set(Some(evt.data()));
            },
            onclick: move |evt: MouseEvent| async move {
                if (ctx.disabled)() {
                    return;
                }
                let Some(rect) = measure(ctx.track).await else {
                    return;
                };
                let point = evt.client_coordinates();
                let bounds = ctx.bounds.cloned();
                let target = bounds.value_at(rect.ratio(point.x, point.y, (ctx.vertical)()));
                ctx.set(bounds.rail_click((ctx.value)(), target, (ctx.range)()));
            },
            ..merged,
            {children}
        }
    }
}

/// The filled part of the track.
#[component]
pub fn SliderRange(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let ctx = use_slider_context("SliderRange")?;
    let bounds = ctx.bounds.cloned();
    let (start, end) = (ctx.value)();
    let from = if (ctx.range)() { bounds.percent(start) } else { 0.0 };
    let to = bounds.percent(end);
    let style = if (ctx.vertical)() {
        format!("bottom: {from}%; height: {}%;", to - from)
    } else {
        format!("left: {from}%; width: {}%;", to - from)
    };

    let base = vec![Attribute::new("class", "slider-range", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { style, ..merged }
    }
}

/// One draggable handle. `show_value` renders the current value inside it.
#[component]
pub fn SliderThumb(
    #[props(default = Thumb::End)] thumb: Thumb,
    #[props(default)] show_value: bool,
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_slider_context("SliderThumb")?;
    let bounds = ctx.bounds.cloned();
    let value = ctx.thumb_value(thumb);
    let percent = bounds.percent(value);
    let disabled = (ctx.disabled)();
    let position = if (ctx.vertical)() {
        format!("bottom: {percent}%;")
    } else {
        format!("left: {percent}%;")
    };

    let on_key = move |evt: KeyboardEvent| {
        let bounds = ctx.bounds.cloned();
        if let Some(next) = bounds.key((ctx.value)(), thumb, &evt.key().to_string()) {
            evt.prevent_default();
            ctx.set(next);
        }
    };

    let slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("slider-thumb")
        .attr("role", "slider")
        .attr("tabindex", if disabled { -1 } else { 0 })
        .attr("aria-valuemin", bounds.min)
        .attr("aria-valuemax", bounds.max)
        .attr("aria-valuenow", value)
        .attr("aria-disabled", disabled)
        .attr("data-thumb", thumb.as_str())
        .attr("data-dragging", ctx.is_dragging())
        .attr("style", position)
        .on(SlotEvent::MouseDown, SlotHandler::mouse(move |_| ctx.begin_drag(thumb)))
        .on(SlotEvent::KeyDown, SlotHandler::keyboard(on_key));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        span {
            onmousedown: move |_| ctx.begin_drag(thumb),
            onkeydown: on_key,
            ..merged,
            if show_value {
                span { class: "slider-thumb-value", "{value}" }
            }
        }
    }
}

/// Labels along the track. Without `marks`, one mark sits at each bound.
#[component]
pub fn SliderMarks(
    #[props(default)] marks: Option<Vec<SliderMark>>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_slider_context("SliderMarks")?;
    let bounds = ctx.bounds.cloned();
    let marks = marks.unwrap_or_else(|| MarksSetting::Auto(true).resolve(&bounds));
    let vertical = (ctx.vertical)();

    let base = vec![Attribute::new("class", "slider-marks", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged,
            for mark in marks {
                span {
                    key: "{mark.value}",
                    class: "slider-mark",
                    style: if vertical { format!("bottom: {}%;", bounds.percent(mark.value)) } else { format!("left: {}%;", bounds.percent(mark.value)) },
                    {mark.text()}
                }
            }
        }
    }
}
