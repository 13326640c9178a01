//! Rendering for `as_child`: a part hands its computed props to one
//! caller-described element instead of rendering its own.

use dioxus::prelude::*;
use ui_core::{merge, SlotChild, SlotEvent, SlotProps, SlotTag};

/// An event handler carried across a slot merge.
#[derive(Clone)]
pub enum SlotHandler {
    Mouse(EventHandler<MouseEvent>),
    Keyboard(EventHandler<KeyboardEvent>),
    Focus(EventHandler<FocusEvent>),
}

impl SlotHandler {
    pub fn mouse(f: impl FnMut(MouseEvent) + 'static) -> Self {
        SlotHandler::Mouse(EventHandler::new(f))
    }

    pub fn keyboard(f: impl FnMut(KeyboardEvent) + 'static) -> Self {
        SlotHandler::Keyboard(EventHandler::new(f))
    }

    pub fn focus(f: impl FnMut(FocusEvent) + 'static) -> Self {
        SlotHandler::Focus(EventHandler::new(f))
    }
}

/// Caller-described element for `as_child`.
pub type SlotElement = SlotChild<SlotHandler, Element>;

/// The elements passed to a part's `as_child` prop.
///
/// Exactly one is expected. Anything else fails the part's render with a
/// [`ui_core::SlotError`].
#[derive(Clone)]
pub struct AsChild(pub Vec<SlotElement>);

impl AsChild {
    pub fn new(element: SlotElement) -> Self {
        Self(vec![element])
    }
}

impl From<SlotElement> for AsChild {
    fn from(element: SlotElement) -> Self {
        Self::new(element)
    }
}

impl From<Vec<SlotElement>> for AsChild {
    fn from(elements: Vec<SlotElement>) -> Self {
        Self(elements)
    }
}

// Descriptors hold closures and rendered children; treat every new value
// as changed.
impl PartialEq for AsChild {
    fn eq(&self, _other: &Self) -> bool {
        false
    }
}

/// Attribute list for a part's own element (no slot involved).
pub fn slot_attributes(props: &SlotProps<SlotHandler>) -> Vec<Attribute> {
    let mut attributes = Vec::with_capacity(props.attributes.len() + 1);
    if !props.class.is_empty() {
        attributes.push(Attribute::new("class", props.class.join(" "), None, false));
    }
    for (name, value) in &props.attributes {
        attributes.push(Attribute::new(*name, value.clone(), None, false));
    }
    attributes
}

fn mouse_chain(handlers: &[SlotHandler]) -> Vec<EventHandler<MouseEvent>> {
    handlers
        .iter()
        .filter_map(|h| match h {
            SlotHandler::Mouse(h) => Some(*h),
            _ => None,
        })
        .collect()
}

fn keyboard_chain(handlers: &[SlotHandler]) -> Vec<EventHandler<KeyboardEvent>> {
    handlers
        .iter()
        .filter_map(|h| match h {
            SlotHandler::Keyboard(h) => Some(*h),
            _ => None,
        })
        .collect()
}

fn focus_chain(handlers: &[SlotHandler]) -> Vec<EventHandler<FocusEvent>> {
    handlers
        .iter()
        .filter_map(|h| match h {
            SlotHandler::Focus(h) => Some(*h),
            _ => None,
        })
        .collect()
}

macro_rules! slot_element {
    ($tag:ident, $attrs:ident, $children:ident, $click:ident, $down:ident, $enter:ident, $leave:ident, $key:ident, $focus:ident, $blur:ident) => {
        rsx! {
            $tag {
                onclick: move |evt: MouseEvent| $click.iter().for_each(|h| h.call(evt.clone())),
                onmousedown: move |evt: MouseEvent| $down.iter().for_each(|h| h.call(evt.clone())),
                onmouseenter: move |evt: MouseEvent| $enter.iter().for_each(|h| h.call(evt.clone())),
                onmouseleave: move |evt: MouseEvent| $leave.iter().for_each(|h| h.call(evt.clone())),
                onkeydown: move |evt: KeyboardEvent| $key.iter().for_each(|h| h.call(evt.clone())),
                onfocus: move |evt: FocusEvent| $focus.iter().for_each(|h| h.call(evt.clone())),
                onblur: move |evt: FocusEvent| $blur.iter().for_each(|h| h.call(evt.clone())),
                ..$attrs,
                {$children}
            }
        }
    };
}

/// Merge a part's computed props onto the single `as_child` element.
pub fn render_slot(props: SlotProps<SlotHandler>, as_child: AsChild) -> Element {
    let merged = merge(props, as_child.0)?;

    let mut attrs = Vec::with_capacity(merged.attributes.len() + 1);
    if !merged.class.is_empty() {
        attrs.push(Attribute::new("class", merged.class.clone(), None, false));
    }
    for (name, value) in &merged.attributes {
        attrs.push(Attribute::new(*name, value.clone(), None, false));
    }

    let click = mouse_chain(merged.chain(SlotEvent::Click));
    let down = mouse_chain(merged.chain(SlotEvent::MouseDown));
    let enter = mouse_chain(merged.chain(SlotEvent::MouseEnter));
    let leave = mouse_chain(merged.chain(SlotEvent::MouseLeave));
    let key = keyboard_chain(merged.chain(SlotEvent::KeyDown));
    let focus = focus_chain(merged.chain(SlotEvent::Focus));
    let blur = focus_chain(merged.chain(SlotEvent::Blur));
    let children = merged.children;

    match merged.tag {
        SlotTag::Button => slot_element!(button, attrs, children, click, down, enter, leave, key, focus, blur),
        SlotTag::Anchor => slot_element!(a, attrs, children, click, down, enter, leave, key, focus, blur),
        SlotTag::Div => slot_element!(div, attrs, children, click, down, enter, leave, key, focus, blur),
        SlotTag::Span => slot_element!(span, attrs, children, click, down, enter, leave, key, focus, blur),
        SlotTag::Label => slot_element!(label, attrs, children, click, down, enter, leave, key, focus, blur),
        SlotTag::ListItem => slot_element!(li, attrs, children, click, down, enter, leave, key, focus, blur),
    }
}
