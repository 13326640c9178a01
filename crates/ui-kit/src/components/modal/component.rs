use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdX;
use dioxus_free_icons::Icon;
use ui_core::modal::{resolve_width, ModalSize, Width};
use ui_core::{open_state, ApiMode, HandlerOrder, SlotEvent, SlotProps};

use super::context::*;
use crate::primitives::{
    render_slot, slot_attributes, use_api_mode, use_controllable, use_instance_id, AsChild,
    SlotHandler,
};

#[derive(Props, Clone, PartialEq)]
pub struct ModalProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub open: ReadSignal<Option<bool>>,
    #[props(default)]
    pub default_open: bool,
    #[props(default)]
    pub on_open_change: Callback<bool>,
    /// Escape and the close button dismiss the modal.
    #[props(default = ReadSignal::new(Signal::new(true)))]
    pub closable: ReadSignal<bool>,
    #[props(default = ReadSignal::new(Signal::new(true)))]
    pub mask_closable: ReadSignal<bool>,
    #[props(default)]
    pub size: ModalSize,
    /// Overrides the preset width of `size`.
    #[props(default)]
    pub width: Option<Width>,
    /// Deprecated: use `ModalTitle`.
    #[props(default)]
    pub title: Option<String>,
    /// Deprecated: use `ModalFooter`.
    #[props(default)]
    pub footer: Option<Element>,
    pub children: Element,
}

#[component]
pub fn Modal(props: ModalProps) -> Element {
    let mode = use_api_mode(
        &MODAL,
        props.api,
        &props.children,
        &[
            ("title", props.title.is_some()),
            ("footer", props.footer.is_some()),
        ],
    );

    let default_open = props.default_open;
    let open = use_controllable(props.open, move || default_open);
    let is_open = use_memo(move || open.current());
    let on_open_change = props.on_open_change;
    let set_open = use_callback(move |next: bool| {
        on_open_change.call(open.request(next));
    });
    let width = use_memo(use_reactive(
        (&props.size, &props.width),
        |(size, width)| resolve_width(size, width.as_ref()),
    ));
    let instance = use_instance_id();

    use_context_provider(|| ModalContext {
        open: is_open,
        closable: props.closable,
        mask_closable: props.mask_closable,
        width,
        instance,
        set_open,
    });

    match mode {
        ApiMode::Composable => rsx! {
            {props.children}
        },
        ApiMode::Declarative => {
            let title = props.title.clone();
            let footer = props.footer.clone();
            rsx! {
                ModalContent {
                    if let Some(title) = title {
                        ModalHeader {
                            ModalTitle { "{title}" }
                        }
                    }
                    ModalBody { {props.children} }
                    if let Some(footer) = footer {
                        ModalFooter { {footer} }
                    }
                }
            }
        }
    }
}

/// Opens the modal. Caller handlers run before the internal one.
#[component]
pub fn ModalTrigger(
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_modal_context("ModalTrigger")?;
    let open = (ctx.open)();

    let slot = SlotProps::new(HandlerOrder::ChildFirst)
        .class("modal-trigger")
        .attr("aria-haspopup", "dialog")
        .attr("aria-expanded", open)
        .attr("data-state", open_state(open))
        .on(SlotEvent::Click, SlotHandler::mouse(move |_| ctx.set_open(true)));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        button {
            r#type: "button",
            onclick: move |_| ctx.set_open(true),
            ..merged,
            {children}
        }
    }
}

/// The dialog box and its mask. Renders nothing while closed.
///
/// `show_close` adds a corner close button when the modal is closable.
#[component]
pub fn ModalContent(
    #[props(default = true)] show_close: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_modal_context("ModalContent")?;
    if !(ctx.open)() {
        return rsx! {};
    }

    let base = vec![
        Attribute::new("class", "modal-content", None, false),
        Attribute::new("data-state", "open", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let style = format!("width: {};", (ctx.width)());

    rsx! {
        div {
            class: "modal-overlay",
            "data-state": "open",
            onclick: move |_| {
                if (ctx.mask_closable)() {
                    ctx.set_open(false);
                }
            },
            onkeydown: move |evt: KeyboardEvent| ctx.key_down(&evt.key()),
            div {
                role: "dialog",
                "aria-modal": "true",
                "aria-labelledby": ctx.title_id(),
                "aria-describedby": ctx.description_id(),
                tabindex: "-1",
                style,
                // Keyboard focus moves into the dialog so Escape reaches the overlay.
                onmounted: move |evt: MountedEvent| async move {
                    _ = evt.data().set_focus(true).await;
                },
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                ..merged,
                if show_close && (ctx.closable)() {
                    ModalClose { class: "modal-close-icon", aria_label: "Close",
                        Icon::<LdX> { icon: LdX, width: 16, height: 16 }
                    }
                }
                {children}
            }
        }
    }
}

#[component]
pub fn ModalHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_modal_context("ModalHeader")?;
    let base = vec![Attribute::new("class", "modal-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn ModalTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_modal_context("ModalTitle")?;
    let base = vec![Attribute::new("class", "modal-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h2 { id: ctx.title_id(), ..merged, {children} }
    }
}

#[component]
pub fn ModalDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_modal_context("ModalDescription")?;
    let base = vec![Attribute::new("class", "modal-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p { id: ctx.description_id(), ..merged, {children} }
    }
}

#[component]
pub fn ModalBody(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_modal_context("ModalBody")?;
    let base = vec![Attribute::new("class", "modal-body", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn ModalFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    use_modal_context("ModalFooter")?;
    let base = vec![Attribute::new("class", "modal-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Closes the modal. Caller handlers run before the internal one.
#[component]
pub fn ModalClose(
    #[props(default)] as_child: Option<AsChild>,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_modal_context("ModalClose")?;

    let slot = SlotProps::new(HandlerOrder::ChildFirst)
        .class("modal-close")
        .on(SlotEvent::Click, SlotHandler::mouse(move |_| ctx.set_open(false)));

    if let Some(as_child) = as_child {
        return render_slot(slot, as_child);
    }

    let merged = dioxus_primitives::merge_attributes(vec![slot_attributes(&slot), attributes]);
    rsx! {
        button {
            r#type: "button",
            onclick: move |_| ctx.set_open(false),
            ..merged,
            {children}
        }
    }
}
