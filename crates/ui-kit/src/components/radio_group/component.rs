use dioxus::prelude::*;
use ui_core::radio::{item_disabled, RadioOption};
use ui_core::{ApiMode, HandlerOrder, Orientation, Size, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    has_children, render_slot, slot_attributes, use_api_mode, use_kit_config,
    use_optional_controllable, AsChild, SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct RadioGroupProps {
    /// Skip child inspection and force a call convention.
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub name: ReadSignal<String>,
    #[props(default)]
    pub value: ReadSignal<Option<String>>,
    #[props(default)]
    pub default_value: Option<String>,
    #[props(default)]
    pub on_change: Callback<String>,
    /// Falls back to the configured kit size.
    #[props(default)]
    pub size: Option<Size>,
    #[props(default)]
    pub orientation: Orientation,
    #[props(default)]
    pub disabled: ReadSignal<bool>,
    #[props(default)]
    pub error: bool,
    /// Deprecated: render `RadioItem` children instead.
    #[props(default)]
    pub options: Option<Vec<RadioOption>>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn RadioGroup(props: RadioGroupProps) -> Element {
    let config = use_kit_config();
    let mode = use_api_mode(
        &RADIO_GROUP,
        props.api,
        &props.children,
        &[("options", props.options.is_some())],
    );

    let value = use_optional_controllable(props.value, props.default_value.clone());
    let current = use_memo(move || value.current());
    let on_change = props.on_change;
    let disabled = props.disabled;
    let select = use_callback(move |candidate: String| {
        if disabled() {
            return;
        }
        if let Some(next) = value.request(Some(candidate)) {
            on_change.call(next);
        }
    });

    use_context_provider(|| {
        RadioGroupContext::attached(RadioGroupShared {
            name: props.name,
            value: current,
            disabled: props.disabled,
            select,
        })
    });

    let options = props.options.clone().unwrap_or_default();
    let size = props.size.unwrap_or(config.size);

    if mode == ApiMode::Declarative && options.is_empty() && has_children(&props.children) {
        return rsx! {
            div { role: "radiogroup", ..props.attributes, {props.children} }
        };
    }

    let base = vec![
        Attribute::new("class", "radio-group", None, false),
        Attribute::new("data-size", size.as_str(), None, false),
        Attribute::new("data-orientation", props.orientation.as_str(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div {
                role: "radiogroup",
                "aria-invalid": props.error,
                "aria-disabled": disabled(),
                ..merged,
                {props.children}
            }
        },
        ApiMode::Declarative => rsx! {
            div {
                role: "radiogroup",
                "aria-invalid": props.error,
                "aria-disabled": disabled(),
                ..merged,
                for option in options {
                    RadioItem {
                        key: "{option.value}",
                        value: option.value.clone(),
                        disabled: option.disabled.then_some(true),
                        RadioItemInput {}
                        RadioItemLabel { "{option.label}" }
                    }
                }
            }
        },
    }
}

/// One choice. Clicking anywhere inside selects it; `disabled` overrides
/// the group setting when given.
#[component]
pub fn RadioItem(
    value: ReadSignal<String>,
    #[props(default)] disabled: ReadSignal<Option<bool>>,
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let group = use_radio_group_context();
    let is_disabled = use_memo(move || item_disabled(disabled(), group.disabled()));
    let item = use_context_provider(|| RadioItemContext {
        value,
        disabled: is_disabled,
        group,
    });

    let checked = group.is_checked(&value.read());
    let select = move || item.select();

    let slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("radio-item")
        .attr("role", "radio")
        .attr("aria-checked", checked)
        .attr("data-state", if checked { "checked" } else { "unchecked" })
        .attr("data-disabled", is_disabled())
        .on(SlotEvent::Click, SlotHandler::mouse(move |_| select()));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        div {
            tabindex: if is_disabled() { "-1" } else { "0" },
            onclick: move |_| select(),
            onkeydown: move |evt: KeyboardEvent| {
                if matches!(evt.key(), Key::Enter) || evt.key() == Key::Character(" ".into()) {
                    select();
                }
            },
            ..merged,
            {children}
        }
    }
}

/// The native radio input of an item.
#[component]
pub fn RadioItemInput(#[props(extends = GlobalAttributes)] attributes: Vec<Attribute>) -> Element {
    let group = use_radio_group_context();
    let item = use_radio_item_context();
    let value = item.map(|i| i.value.cloned()).unwrap_or_default();
    let disabled = item.map(|i| (i.disabled)()).unwrap_or(true);
    let checked = group.is_checked(&value);

    let base = vec![Attribute::new("class", "radio-item-input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        input {
            r#type: "radio",
            name: group.name(),
            value,
            checked,
            disabled,
            tabindex: "-1",
            "data-state": if checked { "checked" } else { "unchecked" },
            ..merged,
        }
    }
}

#[component]
pub fn RadioItemLabel(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let disabled = use_radio_item_context().map(|i| (i.disabled)()).unwrap_or(false);
    let base = vec![Attribute::new("class", "radio-item-label", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        span { "data-disabled": disabled, ..merged, {children} }
    }
}
