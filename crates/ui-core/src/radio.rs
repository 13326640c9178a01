use serde::{Deserialize, Serialize};

/// One choice of a declarative radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub disabled: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Effective disabled state of one item.
///
/// An explicit item setting wins; otherwise the group setting applies.
pub fn item_disabled(item: Option<bool>, group: bool) -> bool {
    item.unwrap_or(group)
}
