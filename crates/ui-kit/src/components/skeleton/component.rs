use dioxus::prelude::*;

/// Placeholder shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SkeletonVariant {
    #[default]
    Text,
    Circle,
    Rect,
}

impl SkeletonVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkeletonVariant::Text => "text",
            SkeletonVariant::Circle => "circle",
            SkeletonVariant::Rect => "rect",
        }
    }
}

/// A loading placeholder with animated pulse.
///
/// While `loading` the placeholder shows; afterwards the children render
/// in its place. `lines` only applies to the text variant, whose last line
/// is drawn shorter.
#[component]
pub fn Skeleton(
    #[props(default)] variant: SkeletonVariant,
    #[props(default = 1)] lines: usize,
    #[props(default = true)] loading: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    if !loading {
        return children;
    }

    let base = vec![
        Attribute::new("class", "skeleton", None, false),
        Attribute::new("data-variant", variant.as_str(), None, false),
        Attribute::new("aria-busy", "true", None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    if variant != SkeletonVariant::Text || lines <= 1 {
        return rsx! {
            div { ..merged }
        };
    }

    rsx! {
        div { ..merged,
            for line in 0..lines {
                div {
                    key: "{line}",
                    class: "skeleton-line",
                    style: if line + 1 == lines { "width: 60%;" } else { "width: 100%;" },
                }
            }
        }
    }
}
