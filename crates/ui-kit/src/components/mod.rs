// Phase 1: Standalone components (no shared state)
pub mod card;
pub mod skeleton;

// Phase 2A: Form controls with controllable values
pub mod input_number;
pub mod radio_group;
pub mod slider;

// Phase 2B: Overlays
pub mod dropdown_menu;
pub mod hover_card;
pub mod modal;
pub mod tooltip;

// Phase 2C: Data display
pub mod avatar;
pub mod tree;

// Re-exports for convenience
pub use avatar::*;
pub use card::*;
pub use dropdown_menu::*;
pub use hover_card::*;
pub use input_number::*;
pub use modal::*;
pub use radio_group::*;
pub use skeleton::*;
pub use slider::*;
pub use tooltip::*;
pub use tree::*;
