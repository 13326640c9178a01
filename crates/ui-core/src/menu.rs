use serde::{Deserialize, Serialize};

/// Group label used for options without one.
pub const UNGROUPED: &str = "Ungrouped";

/// One entry of a declarative dropdown menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuOption {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl MenuOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            search_value: None,
            group: None,
            disabled: false,
        }
    }

    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn searchable_as(mut self, text: impl Into<String>) -> Self {
        self.search_value = Some(text.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    fn search_target(&self) -> &str {
        self.search_value.as_deref().unwrap_or(&self.label)
    }
}

/// Case-insensitive substring filter. An empty query keeps everything.
pub fn filter<'a>(options: &'a [MenuOption], query: &str) -> Vec<&'a MenuOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.search_target().to_lowercase().contains(&needle))
        .collect()
}

/// Group options by their `group`, keeping first-seen group order.
pub fn group<'a>(options: &[&'a MenuOption]) -> Vec<(String, Vec<&'a MenuOption>)> {
    let mut groups: Vec<(String, Vec<&'a MenuOption>)> = Vec::new();
    for option in options {
        let name = option.group.as_deref().unwrap_or(UNGROUPED);
        match groups.iter_mut().find(|(g, _)| g == name) {
            Some((_, members)) => members.push(option),
            None => groups.push((name.to_string(), vec![option])),
        }
    }
    groups
}

/// Keys that move the roving focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusMove {
    Next,
    Previous,
    First,
    Last,
}

impl FocusMove {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowDown" => Some(FocusMove::Next),
            "ArrowUp" => Some(FocusMove::Previous),
            "Home" => Some(FocusMove::First),
            "End" => Some(FocusMove::Last),
            _ => None,
        }
    }
}

/// Next focused index. Moves clamp at the ends rather than wrapping.
pub fn next_focus(current: Option<usize>, len: usize, movement: FocusMove) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    Some(match (movement, current) {
        (FocusMove::Next, None) => 0,
        (FocusMove::Next, Some(i)) => (i + 1).min(last),
        (FocusMove::Previous, None) => last,
        (FocusMove::Previous, Some(i)) => i.saturating_sub(1),
        (FocusMove::First, _) => 0,
        (FocusMove::Last, _) => last,
    })
}
