use dioxus::prelude::*;
use dioxus_primitives::{ContentAlign, ContentSide};
use ui_core::{ContextError, Family, Marker};

use crate::primitives::{use_required_context, DelayedVisibility};

pub(crate) const TOOLTIP: Family = Family {
    root: "Tooltip",
    markers: &[Marker::Prefix("Tooltip")],
    replacement: "TooltipTitle, TooltipDescription, and Button components inside TooltipContent",
    parts: "TooltipTrigger, TooltipContent, TooltipTitle, TooltipDescription",
};

#[derive(Clone, Copy, PartialEq)]
pub struct TooltipContext {
    pub open: Memo<bool>,
    pub placement: Memo<ContentSide>,
    pub align: Memo<ContentAlign>,
    pub(crate) hover: DelayedVisibility,
    pub(crate) set_open: Callback<bool>,
    pub(crate) instance: usize,
}

impl TooltipContext {
    pub fn set_open(&self, open: bool) {
        self.set_open.call(open);
    }

    /// Pointer or focus reached the trigger or the content.
    pub fn enter(&self) {
        self.hover.enter.call(());
    }

    pub fn leave(&self) {
        self.hover.leave.call(());
    }

    pub fn content_id(&self) -> String {
        format!("tooltip-{}", self.instance)
    }
}

pub fn use_tooltip_context(part: &'static str) -> Result<TooltipContext, ContextError> {
    use_required_context(part, TOOLTIP.root)
}
