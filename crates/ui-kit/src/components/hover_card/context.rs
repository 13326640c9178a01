use dioxus::prelude::*;
use dioxus_primitives::ContentSide;
use ui_core::{ContextError, Family, Marker};

use crate::primitives::{use_required_context, DelayedVisibility};

pub(crate) const HOVER_CARD: Family = Family {
    root: "HoverCard",
    markers: &[Marker::Prefix("HoverCard")],
    replacement: "HoverCardContent component",
    parts: "HoverCardTrigger and HoverCardContent",
};

#[derive(Clone, Copy, PartialEq)]
pub struct HoverCardContext {
    pub open: Memo<bool>,
    pub placement: Memo<ContentSide>,
    /// CSS width of the card.
    pub width: Memo<String>,
    pub(crate) hover: DelayedVisibility,
}

impl HoverCardContext {
    pub fn enter(&self) {
        self.hover.enter.call(());
    }

    pub fn leave(&self) {
        self.hover.leave.call(());
    }
}

pub fn use_hover_card_context(part: &'static str) -> Result<HoverCardContext, ContextError> {
    use_required_context(part, HOVER_CARD.root)
}
