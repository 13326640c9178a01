pub mod api_mode;
pub mod config;
pub mod context;
pub mod controllable;
pub mod overlay;
pub mod slot;
pub mod timers;

pub use api_mode::{child_identities, has_children, use_api_mode};
pub use config::{use_kit_config, KitProvider};
pub use context::{use_instance_id, use_required_context};
pub use controllable::{use_controllable, use_optional_controllable, UseControllable};
pub use overlay::{align_attr, side_attr, ContentAlign, ContentSide};
pub use slot::{render_slot, slot_attributes, AsChild, SlotElement, SlotHandler};
pub use timers::{use_delayed_visibility, DelayedVisibility};
