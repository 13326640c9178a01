use dioxus::prelude::*;
use ui_core::{ApiMode, Size};

use super::context::*;
use crate::primitives::{has_children, use_api_mode, use_kit_config};

#[derive(Props, Clone, PartialEq)]
pub struct AvatarProps {
    #[props(default)]
    pub api: Option<ApiMode>,
    #[props(default)]
    pub size: Option<Size>,
    /// Deprecated: use `AvatarImage`.
    #[props(default)]
    pub src: Option<String>,
    /// Deprecated: use `AvatarImage`.
    #[props(default)]
    pub alt: Option<String>,
    /// Deprecated: use `AvatarFallback`.
    #[props(default)]
    pub fallback: Option<String>,
    #[props(extends = GlobalAttributes)]
    pub attributes: Vec<Attribute>,
    pub children: Element,
}

#[component]
pub fn Avatar(props: AvatarProps) -> Element {
    let config = use_kit_config();
    let mode = use_api_mode(
        &AVATAR,
        props.api,
        &props.children,
        &[
            ("src", props.src.is_some()),
            ("alt", props.alt.is_some()),
            ("fallback", props.fallback.is_some()),
        ],
    );

    let status = use_signal(|| AvatarState::Loading);
    let initial_alt = props.alt.clone().unwrap_or_default();
    let alt = use_signal(move || initial_alt);
    use_context_provider(|| AvatarContext::attached(AvatarShared { status, alt }));

    let size = props.size.unwrap_or(config.size);
    let base = vec![
        Attribute::new("class", "avatar", None, false),
        Attribute::new("data-size", size.as_str(), None, false),
        Attribute::new("data-status", status_attr(status()), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, props.attributes.clone()]);

    match mode {
        ApiMode::Composable => rsx! {
            span { ..merged, {props.children} }
        },
        ApiMode::Declarative => {
            let alt = props.alt.clone().unwrap_or_default();
            rsx! {
                span { ..merged,
                    if let Some(src) = props.src.clone() {
                        AvatarImage { src, alt }
                    }
                    AvatarFallback {
                        if let Some(text) = props.fallback.clone() {
                            "{text}"
                        }
                    }
                }
            }
        }
    }
}

/// The picture. Hidden until the browser reports it loaded.
#[component]
pub fn AvatarImage(
    #[props(into)] src: String,
    #[props(default, into)] alt: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let ctx = use_avatar_context();
    let status = ctx.status();

    // A new source starts loading from scratch.
    use_effect(use_reactive((&src, &alt), move |(_, alt)| {
        ctx.set_status(AvatarState::Loading);
        ctx.set_alt(alt);
    }));

    let base = vec![Attribute::new("class", "avatar-image", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        img {
            src,
            alt,
            "data-status": status_attr(status),
            hidden: status != AvatarState::Loaded,
            onload: move |_| ctx.set_status(AvatarState::Loaded),
            onerror: move |_| ctx.set_status(AvatarState::Error),
            ..merged,
        }
    }
}

/// Shown until the image loads. Without children, shows initials of the
/// image's alt text.
#[component]
pub fn AvatarFallback(
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let ctx = use_avatar_context();
    if !ctx.show_fallback() {
        return rsx! {};
    }

    let base = vec![Attribute::new("class", "avatar-fallback", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let custom = has_children(&children);
    let initials = ctx.initials();

    rsx! {
        span { ..merged,
            if custom {
                {children}
            } else {
                "{initials}"
            }
        }
    }
}
