use dioxus::prelude::*;
use ui_core::avatar::initials;
use ui_core::{Family, Marker};

pub use dioxus_primitives::avatar::AvatarState;

pub(crate) const AVATAR: Family = Family {
    root: "Avatar",
    markers: &[Marker::Prefix("Avatar")],
    replacement: "AvatarImage and AvatarFallback components",
    parts: "AvatarImage, AvatarFallback",
};

#[derive(Clone, Copy, PartialEq)]
pub(crate) struct AvatarShared {
    pub status: Signal<AvatarState>,
    /// Alt text of the image, used for fallback initials.
    pub alt: Signal<String>,
}

/// What avatar parts see of their root.
///
/// Detached parts behave as if the image never loads: the fallback shows.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct AvatarContext {
    shared: Option<AvatarShared>,
}

impl AvatarContext {
    pub(crate) fn attached(shared: AvatarShared) -> Self {
        Self {
            shared: Some(shared),
        }
    }

    pub fn status(&self) -> AvatarState {
        self.shared
            .map(|s| (s.status)())
            .unwrap_or(AvatarState::Loading)
    }

    /// The fallback shows until an image has actually loaded.
    pub fn show_fallback(&self) -> bool {
        self.status() != AvatarState::Loaded
    }

    pub(crate) fn set_status(&self, status: AvatarState) {
        if let Some(shared) = self.shared {
            let mut current = shared.status;
            if *current.peek() != status {
                current.set(status);
            }
        }
    }

    pub(crate) fn set_alt(&self, alt: String) {
        if let Some(shared) = self.shared {
            let mut current = shared.alt;
            if *current.peek() != alt {
                current.set(alt);
            }
        }
    }

    pub fn initials(&self) -> String {
        self.shared
            .map(|s| initials(&s.alt.read()))
            .unwrap_or_default()
    }
}

/// `data-status` value of an image state.
pub fn status_attr(status: AvatarState) -> &'static str {
    match status {
        AvatarState::Loaded => "loaded",
        AvatarState::Error => "error",
        _ => "loading",
    }
}

pub fn use_avatar_context() -> AvatarContext {
    try_use_context::<AvatarContext>().unwrap_or_default()
}
