use std::fmt;

/// A sub-component was rendered outside the root that provides its context.
///
/// Raised only by families whose sub-components have no meaningful
/// detached behaviour (Slider, Modal, Tooltip, InputNumber, HoverCard,
/// Tree). Other families fall back to an inert default instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextError {
    pub part: &'static str,
    pub root: &'static str,
}

impl ContextError {
    pub fn new(part: &'static str, root: &'static str) -> Self {
        Self { part, root }
    }
}

impl fmt::Display for ContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} must be used within a <{}> component", self.part, self.root)
    }
}

impl std::error::Error for ContextError {}

/// Resolve an optional context lookup into a hard error.
pub fn require_context<T>(
    found: Option<T>,
    part: &'static str,
    root: &'static str,
) -> Result<T, ContextError> {
    found.ok_or(ContextError::new(part, root))
}

/// `as_child` was given something other than exactly one element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotError {
    Empty,
    Multiple(usize),
}

impl fmt::Display for SlotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SlotError::Empty => {
                write!(f, "as_child requires exactly one child element, got none")
            }
            SlotError::Multiple(count) => {
                write!(f, "as_child requires exactly one child element, got {count}")
            }
        }
    }
}

impl std::error::Error for SlotError {}
