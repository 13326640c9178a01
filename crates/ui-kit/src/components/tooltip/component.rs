use std::time::Duration;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use ui_core::{open_state, ApiMode, HandlerOrder, SlotEvent, SlotProps};

pub use dioxus_primitives::{ContentAlign, ContentSide};

use super::context::*;
use crate::primitives::{
    align_attr, render_slot, side_attr, slot_attributes, use_api_mode, use_controllable,
    use_delayed_visibility, use_instance_id, AsChild, SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct TooltipProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,
    #[props(default)]
    pub default_open: bool,
    #[props(default)]
    pub on_open_change: Callback<bool>,
    #[props(default = ContentSide::Top)]
    pub placement: ContentSide,
    #[props(default = ContentAlign::Center)]
    pub align: ContentAlign,
    /// Hover time before the tooltip opens.
    #[props(default)]
    pub delay_ms: u64,
    #[props(default)]
    pub close_delay_ms: u64,
    /// Deprecated: use `TooltipTitle`.
    #[props(default)]
    pub heading: Option<String>,
    /// Deprecated: put a button inside `TooltipContent`.
    #[props(default)]
    pub primary_action_text: Option<String>,
    #[props(default)]
    pub on_primary_action: Callback<()>,
    /// Deprecated: put a button inside `TooltipContent`.
    #[props(default)]
    pub secondary_action_text: Option<String>,
    #[props(default)]
    pub on_secondary_action: Callback<()>,
    #[props(default)]
    pub show_close: bool,
    #[props(default)]
    pub on_close: Callback<()>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Tooltip(props: TooltipProps) -> Element {
    let mode = use_api_mode(
        &TOOLTIP,
        props.api,
        &props.children,
        &[
            ("heading", props.heading.is_some()),
            ("primary_action_text", props.primary_action_text.is_some()),
            ("secondary_action_text", props.secondary_action_text.is_some()),
        ],
    );

    let default_open = props.default_open;
    let open = use_controllable(props.open, move || default_open);
    let is_open = use_memo(move || open.current());
    let on_open_change = props.on_open_change;
    let set_open = use_callback(move |next: bool| {
        if next != *is_open.peek() {
            on_open_change.call(open.request(next));
        }
    });
    let hover = use_delayed_visibility(
        move || *is_open.peek(),
        set_open,
        Duration::from_millis(props.delay_ms),
        Duration::from_millis(props.close_delay_ms),
    );
    let placement = use_memo(use_reactive((&props.placement,), |(placement,)| placement));
    let align = use_memo(use_reactive((&props.align,), |(align,)| align));
    let instance = use_instance_id();

    use_context_provider(|| TooltipContext {
        open: is_open,
        placement,
        align,
        hover,
        set_open,
        instance,
    });

    let base = vec![Attribute::new("class", "tooltip", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div { ..merged, {props.children} }
        },
        ApiMode::Declarative => {
            let heading = props.heading.clone();
            let primary = props.primary_action_text.clone();
            let secondary = props.secondary_action_text.clone();
            let has_actions = primary.is_some() || secondary.is_some();
            let on_primary = props.on_primary_action;
            let on_secondary = props.on_secondary_action;
            rsx! {
                div { ..merged,
                    TooltipContent { show_close: props.show_close, on_close: props.on_close,
                        if let Some(heading) = heading {
                            TooltipTitle { "{heading}" }
                        }
                        TooltipDescription { {props.children} }
                        if has_actions {
                            div { class: "tooltip-actions",
                                if let Some(text) = secondary {
                                    button {
                                        r#type: "button",
                                        class: "tooltip-action-secondary",
                                        onclick: move |_| on_secondary.call(()),
                                        "{text}"
                                    }
                                }
                                if let Some(text) = primary {
                                    button {
                                        r#type: "button",
                                        class: "tooltip-action-primary",
                                        onclick: move |_| on_primary.call(()),
                                        "{text}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Hover or focus opens the tooltip after the configured delay.
#[component]
pub fn TooltipTrigger(
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_tooltip_context("TooltipTrigger")?;
    let open = (ctx.open)();

    let mut slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("tooltip-trigger")
        .attr("data-state", open_state(open))
        .on(SlotEvent::MouseEnter, SlotHandler::mouse(move |_| ctx.enter()))
        .on(SlotEvent::MouseLeave, SlotHandler::mouse(move |_| ctx.leave()))
        .on(SlotEvent::Focus, SlotHandler::focus(move |_| ctx.enter()))
        .on(SlotEvent::Blur, SlotHandler::focus(move |_| ctx.leave()));
    if open {
        slot = slot.attr("aria-describedby", ctx.content_id());
    }

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        span {
            onmouseenter: move |_| ctx.enter(),
            onmouseleave: move |_| ctx.leave(),
            onfocus: move |_| ctx.enter(),
            onblur: move |_| ctx.leave(),
            ..merged,
            {children}
        }
    }
}

/// The floating bubble. Renders nothing while closed.
#[component]
pub fn TooltipContent(
    #[props(default)] show_close: bool,
    #[props(default)] on_close: Callback<()>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_tooltip_context("TooltipContent")?;
    if !(ctx.open)() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "tooltip-content", None, false),
        Attribute::new("data-side", side_attr((ctx.placement)()), None, false),
        Attribute::new("data-align", align_attr((ctx.align)()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div {
            role: "tooltip",
            id: ctx.content_id(),
            onmouseenter: move |_| ctx.enter(),
            onmouseleave: move |_| ctx.leave(),
            ..merged,
            {children}
            if show_close {
                button {
                    r#type: "button",
                    class: "tooltip-close",
                    aria_label: "Close tooltip",
                    onclick: move |_| {
                        ctx.set_open(false);
                        on_close.call(());
                    },
                    Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                }
            }
            div { class: "tooltip-arrow" }
        }
    }
}

#[component]
pub fn TooltipTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_tooltip_context("TooltipTitle")?;
    let base = vec![Attribute::new("class", "tooltip-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn TooltipDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_tooltip_context("TooltipDescription")?;
    let base = vec![Attribute::new("class", "tooltip-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}
