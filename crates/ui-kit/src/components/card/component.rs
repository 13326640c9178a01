use dioxus::prelude::*;
use ui_core::{ApiMode, Family, Marker};

use crate::primitives::use_api_mode;

const CARD: Family = Family {
    root: "Card",
    markers: &[Marker::Prefix("Card")],
    replacement: "CardHeader, CardTitle, CardDescription, CardFooter, CardActions components",
    parts: "CardHeader, CardTitle, CardDescription, CardContent, CardFooter, CardActions",
};

#[derive(Props, Clone, PartialEq)]
pub struct CardProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    /// Deprecated: use `CardTitle` inside `CardHeader`.
    #[props(default)]
    pub title: Option<String>,
    /// Deprecated: use `CardDescription` inside `CardHeader`.
    #[props(default)]
    pub description: Option<String>,
    /// Deprecated: use `CardFooter`.
    #[props(default)]
    pub footer: Option<Element>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

/// A bordered content container. Parts share no state.
#[component]
pub fn Card(props: CardProps) -> Element {
    let mode = use_api_mode(
        &CARD,
        props.api,
        &props.children,
        &[
            ("title", props.title.is_some()),
            ("description", props.description.is_some()),
            ("footer", props.footer.is_some()),
        ],
    );

    let base = vec![Attribute::new("class", "card", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    if mode.is_composable() || (props.title.is_none() && props.description.is_none() && props.footer.is_none()) {
        return rsx! {
            div { ..merged, {props.children} }
        };
    }

    let title = props.title.clone();
    let description = props.description.clone();
    let footer = props.footer.clone();
    rsx! {
        div { ..merged,
            if title.is_some() || description.is_some() {
                CardHeader {
                    if let Some(title) = title {
                        CardTitle { "{title}" }
                    }
                    if let Some(description) = description {
                        CardDescription { "{description}" }
                    }
                }
            }
            CardContent { {props.children} }
            if let Some(footer) = footer {
                CardFooter { {footer} }
            }
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-header", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardTitle(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-title", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        h3 { ..merged, {children} }
    }
}

#[component]
pub fn CardDescription(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-description", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        p { ..merged, {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-content", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

#[component]
pub fn CardFooter(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-footer", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}

/// Button row, usually inside the header or footer.
#[component]
pub fn CardActions(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![Attribute::new("class", "card-actions", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        div { ..merged, {children} }
    }
}
