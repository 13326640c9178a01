use std::time::Duration;

use dioxus::prelude::*;
use ui_core::modal::Width;
use dioxus_primitives::ContentSide;
use ui_core::{open_state, ApiMode, HandlerOrder, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    render_slot, side_attr, slot_attributes, use_api_mode, use_delayed_visibility, AsChild,
    SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct HoverCardProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub default_open: bool,
    #[props(default)]
    pub on_open_change: Callback<bool>,
    /// Milliseconds the pointer has to rest before the card opens.
    #[props(default = 200)]
    pub open_delay: u64,
    #[props(default = 300)]
    pub close_delay: u64,
    #[props(default = ContentSide::Bottom)]
    pub placement: ContentSide,
    #[props(default = Width::Px(320))]
    pub width: Width,
    /// Deprecated: use `HoverCardContent`.
    #[props(default)]
    pub content: Option<Element>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn HoverCard(props: HoverCardProps) -> Element {
    let mode = use_api_mode(
        &HOVER_CARD,
        props.api,
        &props.children,
        &[("content", props.content.is_some())],
    );

    let mut open = use_signal(|| props.default_open);
    let is_open = use_memo(move || open());
    let on_open_change = props.on_open_change;
    let set_open = use_callback(move |next: bool| {
        if next != *open.peek() {
            open.set(next);
            on_open_change.call(next);
        }
    });
    let hover = use_delayed_visibility(
        move || *open.peek(),
        set_open,
        Duration::from_millis(props.open_delay),
        Duration::from_millis(props.close_delay),
    );
    let placement = use_memo(use_reactive((&props.placement,), |(placement,)| placement));
    let width = use_memo(use_reactive((&props.width,), |(width,)| width.to_css()));

    let ctx = use_context_provider(|| HoverCardContext {
        open: is_open,
        placement,
        width,
        hover,
    });

    let base = vec![
        Attribute::new("class", "hover-card", None, false),
        Attribute::new("data-state", open_state(is_open()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            div { ..merged, {props.children} }
        },
        ApiMode::Declarative => rsx! {
            div {
                onmouseenter: move |_| ctx.enter(),
                onmouseleave: move |_| ctx.leave(),
                ..merged,
                div { class: "hover-card-trigger", {props.children} }
                if let Some(content) = props.content.clone() {
                    HoverCardContent { {content} }
                }
            }
        },
    }
}

#[component]
pub fn HoverCardTrigger(
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_hover_card_context("HoverCardTrigger")?;

    let slot = SlotProps::new(HandlerOrder::InternalFirst)
        .class("hover-card-trigger")
        .attr("data-state", open_state((ctx.open)()))
        .on(SlotEvent::MouseEnter, SlotHandler::mouse(move |_| ctx.enter()))
        .on(SlotEvent::MouseLeave, SlotHandler::mouse(move |_| ctx.leave()));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        div {
            onmouseenter: move |_| ctx.enter(),
            onmouseleave: move |_| ctx.leave(),
            ..merged,
            {children}
        }
    }
}

/// The card. Hovering it keeps it open.
#[component]
pub fn HoverCardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_hover_card_context("HoverCardContent")?;
    if !(ctx.open)() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "hover-card-content", None, false),
        Attribute::new("data-side", side_attr((ctx.placement)()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let style = format!("width: {};", (ctx.width)());

    rsx! {
        div {
            style,
            onmouseenter: move |_| ctx.enter(),
            onmouseleave: move |_| ctx.leave(),
            ..merged,
            {children}
        }
    }
}
