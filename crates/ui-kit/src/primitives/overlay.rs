//! Side and alignment of floating panels, as `data-side` / `data-align` values.

pub use dioxus_primitives::{ContentAlign, ContentSide};

pub fn side_attr(side: ContentSide) -> &'static str {
    match side {
        ContentSide::Top => "top",
        ContentSide::Right => "right",
        ContentSide::Bottom => "bottom",
        ContentSide::Left => "left",
    }
}

pub fn align_attr(align: ContentAlign) -> &'static str {
    match align {
        ContentAlign::Start => "start",
        ContentAlign::Center => "center",
        ContentAlign::End => "end",
    }
}
