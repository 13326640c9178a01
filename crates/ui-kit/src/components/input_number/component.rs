use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdChevronDown, LdChevronUp};
use dioxus_free_icons::Icon;
use ui_core::number::{NumberBounds, StepDirection};
use ui_core::{ApiMode, HandlerOrder, Size, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    render_slot, slot_attributes, use_api_mode, use_controllable, use_kit_config, AsChild,
    SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct InputNumberProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    /// Outer `None` leaves the field uncontrolled; `Some(None)` holds it empty.
    #[props(default)]
    pub value: ReadSignal<Option<Option<f64>>>,
    #[props(default = Some(0.0))]
    pub default_value: Option<f64>,
    #[props(default = ReadSignal::new(Signal::new(f64::NEG_INFINITY)))]
    pub min: ReadSignal<f64>,
    #[props(default = ReadSignal::new(Signal::new(f64::INFINITY)))]
    pub max: ReadSignal<f64>,
    #[props(default = ReadSignal::new(Signal::new(1.0)))]
    pub step: ReadSignal<f64>,
    /// Decimal places kept on commit and shown when not editing.
    #[props(default)]
    pub precision: ReadSignal<Option<u32>>,
    #[props(default)]
    pub size: Option<Size>,
    #[props(default)]
    pub disabled: ReadSignal<bool>,
    #[props(default)]
    pub error: bool,
    #[props(default)]
    pub on_change: Callback<Option<f64>>,
    /// Deprecated: render `InputNumberButton` children instead.
    #[props(default)]
    pub controls: Option<bool>,
    /// Deprecated: place content next to `InputNumberField`.
    #[props(default)]
    pub prefix: Option<Element>,
    /// Deprecated: place content next to `InputNumberField`.
    #[props(default)]
    pub suffix: Option<Element>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn InputNumber(props: InputNumberProps) -> Element {
    let config = use_kit_config();
    let mode = use_api_mode(
        &INPUT_NUMBER,
        props.api,
        &props.children,
        &[
            ("controls", props.controls.is_some()),
            ("prefix", props.prefix.is_some()),
            ("suffix", props.suffix.is_some()),
        ],
    );

    let (min, max, precision) = (props.min, props.max, props.precision);
    let bounds = use_memo(move || NumberBounds {
        min: min(),
        max: max(),
        precision: precision(),
    });
    let default_value = props.default_value;
    let value = use_controllable(props.value, move || default_value);
    let current = use_memo(move || value.current());

    let on_change = props.on_change;
    let disabled = props.disabled;
    let commit = use_callback(move |next: Option<f64>| {
        if disabled() {
            return;
        }
        let clamped = next.map(|v| bounds.peek().clamp(v));
        on_change.call(value.request(clamped));
    });

    let draft = use_signal(|| None);
    use_context_provider(|| InputNumberContext {
        value: current,
        bounds,
        step: props.step,
        disabled,
        draft,
        commit,
    });

    let size = props.size.unwrap_or(config.size);
    let base = vec![
        Attribute::new("class", "input-number", None, false),
        Attribute::new("data-size", size.as_str(), None, false),
        Attribute::new("data-disabled", disabled(), None, false),
        Attribute::new("aria-invalid", props.error, None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div { ..merged, {props.children} }
        },
        ApiMode::Declarative => {
            let controls = props.controls.unwrap_or(true);
            rsx! {
                div { ..merged,
                    if let Some(prefix) = props.prefix.clone() {
                        span { class: "input-number-prefix", {prefix} }
                    }
                    InputNumberField {}
                    if let Some(suffix) = props.suffix.clone() {
                        span { class: "input-number-suffix", {suffix} }
                    }
                    if controls {
                        div { class: "input-number-controls",
                            InputNumberButton { direction: StepDirection::Up }
                            InputNumberButton { direction: StepDirection::Down }
                        }
                    }
                }
            }
        }
    }
}

/// The text field. ArrowUp and ArrowDown step the value.
#[component]
pub fn InputNumberField(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let ctx = use_input_number_context("InputNumberField")?;
    let bounds = ctx.bounds.cloned();
    let value = (ctx.value)();

    let base = vec![Attribute::new("class", "input-number-field", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        input {
            r#type: "text",
            inputmode: "decimal",
            role: "spinbutton",
            value: ctx.display(),
            disabled: (ctx.disabled)(),
            "aria-valuenow": value,
            "aria-valuemin": bounds.min.is_finite().then_some(bounds.min),
            "aria-valuemax": bounds.max.is_finite().then_some(bounds.max),
            oninput: move |evt: FormEvent| ctx.input(evt.value()),
            onfocus: move |_| ctx.focus(),
            onblur: move |_| ctx.blur(),
            onkeydown: move |evt: KeyboardEvent| {
                if let Some(direction) = StepDirection::from_key(&evt.key().to_string()) {
                    evt.prevent_default();
                    ctx.step(direction);
                }
            },
            ..merged,
        }
    }
}

/// Increment or decrement button, disabled at the matching bound.
#[component]
pub fn InputNumberButton(
    direction: StepDirection,
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_input_number_context("InputNumberButton")?;
    let enabled = ctx.can_step(direction);
    let (class, label) = match direction {
        StepDirection::Up => ("input-number-up", "Increase"),
        StepDirection::Down => ("input-number-down", "Decrease"),
    };

    let slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("input-number-button")
        .class(class)
        .attr("tabindex", -1)
        .attr("aria-label", label)
        .attr("data-disabled", !enabled)
        .on(SlotEvent::Click, SlotHandler::mouse(move |_| ctx.step(direction)));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    let custom = crate::primitives::has_children(&children);
    rsx! {
        button {
            r#type: "button",
            disabled: !enabled,
            onclick: move |_| ctx.step(direction),
            ..merged,
            if custom {
                {children}
            } else if direction == StepDirection::Up {
                Icon::<LdChevronUp> { icon: LdChevronUp, width: 12, height: 12 }
            } else {
                Icon::<LdChevronDown> { icon: LdChevronDown, width: 12, height: 12 }
            }
        }
    }
}
