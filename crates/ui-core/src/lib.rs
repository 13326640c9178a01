pub mod error;
pub mod config;

// Composition machinery shared by every compound component
pub mod api_mode;
pub mod controllable;
pub mod deprecation;
pub mod overlay;
pub mod slot;
pub mod timers;

// Family models (renderer independent)
pub mod avatar;
pub mod menu;
pub mod modal;
pub mod number;
pub mod radio;
pub mod slider;
pub mod tree;

pub use api_mode::*;
pub use config::*;
pub use controllable::*;
pub use deprecation::*;
pub use error::*;
pub use overlay::*;
pub use slot::*;
pub use timers::*;

// Family models stay behind their module path: `ui_core::tree::TreeNodeData`.
