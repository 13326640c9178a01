use serde::{Deserialize, Serialize};

/// Preset modal widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModalSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl ModalSize {
    pub fn width(&self) -> &'static str {
        match self {
            ModalSize::Sm => "400px",
            ModalSize::Md => "520px",
            ModalSize::Lg => "720px",
            ModalSize::Xl => "960px",
            ModalSize::Full => "90vw",
        }
    }
}

/// An explicit width override.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Width {
    Px(u32),
    Css(String),
}

impl Width {
    pub fn to_css(&self) -> String {
        match self {
            Width::Px(px) => format!("{px}px"),
            Width::Css(value) => value.clone(),
        }
    }
}

impl From<u32> for Width {
    fn from(px: u32) -> Self {
        Width::Px(px)
    }
}

impl From<&str> for Width {
    fn from(value: &str) -> Self {
        Width::Css(value.to_string())
    }
}

/// Final CSS width: the override wins over the preset.
pub fn resolve_width(size: ModalSize, width: Option<&Width>) -> String {
    width
        .map(Width::to_css)
        .unwrap_or_else(|| size.width().to_string())
}
