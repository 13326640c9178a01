//! The `as_child` merge: a sub-component's computed props folded onto a
//! single caller-supplied element.
//!
//! The model is generic over the handler type `H` and the child content
//! type `C` so it can be exercised without a renderer.

use crate::error::SlotError;

/// Elements a slot can render as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotTag {
    Button,
    Anchor,
    Div,
    Span,
    Label,
    ListItem,
}

impl SlotTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotTag::Button => "button",
            SlotTag::Anchor => "a",
            SlotTag::Div => "div",
            SlotTag::Span => "span",
            SlotTag::Label => "label",
            SlotTag::ListItem => "li",
        }
    }
}

/// Events a slot can carry handlers for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotEvent {
    Click,
    MouseDown,
    MouseEnter,
    MouseLeave,
    KeyDown,
    Focus,
    Blur,
}

/// Which handler runs first when both sides handle the same event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HandlerOrder {
    #[default]
    InternalFirst,
    ChildFirst,
}

/// Props a sub-component computes for its slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotProps<H> {
    pub class: Vec<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub handlers: Vec<(SlotEvent, H)>,
    pub order: HandlerOrder,
}

impl<H> SlotProps<H> {
    pub fn new(order: HandlerOrder) -> Self {
        Self {
            class: Vec::new(),
            attributes: Vec::new(),
            handlers: Vec::new(),
            order,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        if name == "class" {
            self.class.push(value.to_string());
        } else {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    pub fn on(mut self, event: SlotEvent, handler: H) -> Self {
        self.handlers.push((event, handler));
        self
    }
}

/// An element supplied by the caller to take over rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SlotChild<H, C> {
    pub tag: SlotTag,
    pub class: Vec<String>,
    pub attributes: Vec<(&'static str, String)>,
    pub handlers: Vec<(SlotEvent, H)>,
    pub children: C,
}

impl<H, C> SlotChild<H, C> {
    pub fn new(tag: SlotTag, children: C) -> Self {
        Self {
            tag,
            class: Vec::new(),
            attributes: Vec::new(),
            handlers: Vec::new(),
            children,
        }
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class.push(class.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        if name == "class" {
            self.class.push(value.to_string());
        } else {
            self.attributes.push((name, value.to_string()));
        }
        self
    }

    pub fn on(mut self, event: SlotEvent, handler: H) -> Self {
        self.handlers.push((event, handler));
        self
    }
}

/// The single element produced by a merge.
#[derive(Debug, Clone, PartialEq)]
pub struct Merged<H, C> {
    pub tag: SlotTag,
    pub class: String,
    pub attributes: Vec<(&'static str, String)>,
    pub handlers: Vec<(SlotEvent, Vec<H>)>,
    pub children: C,
}

impl<H, C> Merged<H, C> {
    /// Handlers for an event, in call order.
    pub fn chain(&self, event: SlotEvent) -> &[H] {
        self.handlers
            .iter()
            .find(|(e, _)| *e == event)
            .map(|(_, chain)| chain.as_slice())
            .unwrap_or(&[])
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Merge computed props onto exactly one child.
pub fn merge<H, C>(
    base: SlotProps<H>,
    mut children: Vec<SlotChild<H, C>>,
) -> Result<Merged<H, C>, SlotError> {
    let child = match children.len() {
        0 => return Err(SlotError::Empty),
        1 => children.remove(0),
        n => return Err(SlotError::Multiple(n)),
    };

    let class = child
        .class
        .iter()
        .chain(base.class.iter())
        .filter(|c| !c.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let mut attributes = base.attributes;
    for (name, value) in child.attributes {
        match attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => attributes.push((name, value)),
        }
    }

    let (first, second) = match base.order {
        HandlerOrder::InternalFirst => (base.handlers, child.handlers),
        HandlerOrder::ChildFirst => (child.handlers, base.handlers),
    };
    let mut handlers: Vec<(SlotEvent, Vec<H>)> = Vec::new();
    for (event, handler) in first.into_iter().chain(second) {
        match handlers.iter_mut().find(|(e, _)| *e == event) {
            Some((_, chain)) => chain.push(handler),
            None => handlers.push((event, vec![handler])),
        }
    }

    Ok(Merged {
        tag: child.tag,
        class,
        attributes,
        handlers,
        children: child.children,
    })
}
