use dioxus::prelude::*;
use ui_core::{Family, Marker};

pub(crate) const RADIO_GROUP: Family = Family {
    root: "RadioGroup",
    markers: &[Marker::Prefix("RadioItem")],
    replacement: "RadioItem components",
    parts: "RadioItem, RadioItemInput, RadioItemLabel",
};

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct RadioGroupShared {
    pub name: ReadSignal<String>,
    pub value: Memo<Option<String>>,
    pub disabled: ReadSignal<bool>,
    pub select: Callback<String>,
}

/// What a radio part sees of its group.
///
/// Parts rendered outside a [`super::RadioGroup`] get a detached context:
/// nothing is checked and selecting does nothing.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct RadioGroupContext {
    shared: Option<RadioGroupShared>,
}

impl RadioGroupContext {
    pub(crate) fn attached(shared: RadioGroupShared) -> Self {
        Self {
            shared: Some(shared),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.shared.is_some()
    }

    pub fn name(&self) -> String {
        self.shared.map(|s| s.name.cloned()).unwrap_or_default()
    }

    /// Selected value. An empty string is a value like any other.
    pub fn value(&self) -> Option<String> {
        self.shared.and_then(|s| s.value.cloned())
    }

    pub fn disabled(&self) -> bool {
        self.shared.map(|s| s.disabled.cloned()).unwrap_or(false)
    }

    pub fn is_checked(&self, value: &str) -> bool {
        self.value().as_deref() == Some(value)
    }

    /// Request selection of `value`.
    pub fn select(&self, value: String) {
        if let Some(shared) = self.shared {
            shared.select.call(value);
        }
    }
}

pub fn use_radio_group_context() -> RadioGroupContext {
    try_use_context::<RadioGroupContext>().unwrap_or_default()
}

/// Per-item state shared with the item's input and label.
#[derive(Clone, Copy, PartialEq)]
pub struct RadioItemContext {
    pub value: ReadSignal<String>,
    pub disabled: Memo<bool>,
    pub(crate) group: RadioGroupContext,
}

impl RadioItemContext {
    /// Select this item in its group. Disabled items ignore it.
    pub fn select(&self) {
        if !(self.disabled)() {
            self.group.select(self.value.cloned());
        }
    }
}

pub fn use_radio_item_context() -> Option<RadioItemContext> {
    try_use_context::<RadioItemContext>()
}
