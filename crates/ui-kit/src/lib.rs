//! Dioxus components that serve both a composable (root plus parts) and a
//! deprecated declarative (props bag) call convention from the same root.

pub mod components;
pub mod primitives;

pub use primitives::{KitProvider, use_kit_config};
pub use ui_core::{ApiMode, KitConfig, Size, WarningPolicy};
