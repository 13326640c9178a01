mod component;
mod context;

pub use component::*;
pub use context::*;
