use dioxus::prelude::*;
use ui_core::menu::{next_focus, FocusMove};
use ui_core::{Family, Marker};

pub(crate) const DROPDOWN_MENU: Family = Family {
    root: "DropdownMenu",
    markers: &[Marker::Prefix("DropdownMenu")],
    replacement: "DropdownMenuItem components inside DropdownMenuContent",
    parts: "DropdownMenuTrigger, DropdownMenuContent, DropdownMenuItem, DropdownMenuSeparator, DropdownMenuLabel",
};

/// An item as the open menu knows it, in render order.
#[derive(Clone, PartialEq)]
pub(crate) struct RegisteredItem {
    pub value: String,
    pub disabled: bool,
}

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct DropdownMenuShared {
    pub open: Memo<bool>,
    pub value: Memo<String>,
    pub focused: Signal<Option<usize>>,
    /// Slots vacate when their item unmounts.
    pub items: CopyValue<Vec<Option<RegisteredItem>>>,
    pub instance: usize,
    pub set_open: Callback<bool>,
    pub select: Callback<String>,
}

/// What a menu part sees of its root.
///
/// Parts outside a [`super::DropdownMenu`] get a detached context: the
/// menu is closed and nothing can be selected.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct DropdownMenuContext {
    shared: Option<DropdownMenuShared>,
}

impl DropdownMenuContext {
    pub(crate) fn attached(shared: DropdownMenuShared) -> Self {
        Self {
            shared: Some(shared),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.shared.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.shared.map(|s| (s.open)()).unwrap_or(false)
    }

    pub fn set_open(&self, open: bool) {
        if let Some(shared) = self.shared {
            shared.set_open.call(open);
        }
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.shared
            .map(|s| !value.is_empty() && *s.value.read() == value)
            .unwrap_or(false)
    }

    /// Select `value` and close the menu.
    pub fn select(&self, value: String) {
        if let Some(shared) = self.shared {
            shared.select.call(value);
        }
    }

    pub fn focused(&self) -> Option<usize> {
        self.shared.and_then(|s| (s.focused)())
    }

    pub fn set_focused(&self, index: Option<usize>) {
        if let Some(shared) = self.shared {
            let mut focused = shared.focused;
            focused.set(index);
        }
    }

    pub fn item_id(&self, index: usize) -> String {
        let instance = self.shared.map(|s| s.instance).unwrap_or_default();
        format!("dropdown-menu-{instance}-item-{index}")
    }

    /// Forget every registered item. Called when the content mounts.
    pub(crate) fn reset_items(&self) {
        if let Some(shared) = self.shared {
            let mut items = shared.items;
            items.write().clear();
            let mut focused = shared.focused;
            focused.set(None);
        }
    }

    /// Add an item in render order and return its index.
    pub(crate) fn register(&self, value: String, disabled: bool) -> Option<usize> {
        let shared = self.shared?;
        let mut items = shared.items;
        let mut items = items.write();
        items.push(Some(RegisteredItem { value, disabled }));
        Some(items.len() - 1)
    }

    /// Vacate the slot of an unmounted item, dropping trailing vacancies.
    pub(crate) fn deregister(&self, index: usize) {
        let Some(shared) = self.shared else {
            return;
        };
        let mut items = shared.items;
        let mut items = items.write();
        if let Some(slot) = items.get_mut(index) {
            *slot = None;
        }
        while matches!(items.last(), Some(None)) {
            items.pop();
        }
    }

    pub(crate) fn registered_len(&self) -> usize {
        self.shared.map(|s| s.items.peek().len()).unwrap_or(0)
    }

    /// Apply a navigation key over `len` items. Returns whether it was used.
    pub fn navigate(&self, key: &str, len: usize) -> bool {
        match FocusMove::from_key(key) {
            Some(movement) => {
                self.set_focused(next_focus(self.focused(), len, movement));
                true
            }
            None => false,
        }
    }

    /// Keyboard handling for the open menu over the registered items.
    pub(crate) fn handle_key(&self, key: &str) -> bool {
        let Some(shared) = self.shared else {
            return false;
        };
        let len = shared.items.peek().len();
        if self.navigate(key, len) {
            return true;
        }
        match key {
            "Enter" | " " => {
                let target = self
                    .focused()
                    .and_then(|i| shared.items.peek().get(i).cloned().flatten());
                if let Some(item) = target.filter(|item| !item.disabled) {
                    self.select(item.value);
                }
                true
            }
            "Escape" => {
                self.set_open(false);
                true
            }
            _ => false,
        }
    }
}

pub fn use_dropdown_menu_context() -> DropdownMenuContext {
    try_use_context::<DropdownMenuContext>().unwrap_or_default()
}
