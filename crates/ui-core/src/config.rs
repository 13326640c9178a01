use serde::{Deserialize, Serialize};

/// When deprecation notices reach the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WarningPolicy {
    /// Emit only in builds with `debug_assertions` (the default).
    #[default]
    DebugOnly,
    Always,
    Silent,
}

impl WarningPolicy {
    pub fn enabled(&self) -> bool {
        match self {
            WarningPolicy::DebugOnly => cfg!(debug_assertions),
            WarningPolicy::Always => true,
            WarningPolicy::Silent => false,
        }
    }
}

/// Component size shared by the form-like families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Size {
    Sm,
    #[default]
    Md,
    Lg,
}

impl Size {
    /// Value used for `data-size` attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Sm => "sm",
            Size::Md => "md",
            Size::Lg => "lg",
        }
    }

    /// Parse a size key, falling back to `Md`.
    pub fn from_key(s: &str) -> Self {
        match s {
            "sm" => Size::Sm,
            "lg" => Size::Lg,
            _ => Size::Md,
        }
    }
}

/// Layout direction for groups of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Horizontal,
    #[default]
    Vertical,
}

impl Orientation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// Library-wide settings, provided once near the application root.
///
/// Deserializable so hosts can load it alongside their own settings.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KitConfig {
    pub warnings: WarningPolicy,
    pub size: Size,
}

impl KitConfig {
    pub fn with_warnings(mut self, warnings: WarningPolicy) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }
}
