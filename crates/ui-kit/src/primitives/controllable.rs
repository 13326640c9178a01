use dioxus::prelude::*;
use ui_core::ValueMode;

/// A root's value handle. Copy, so it can move into any number of closures.
pub struct UseControllable<T: 'static> {
    mode: ValueMode,
    internal: Signal<T>,
    external: Memo<Option<T>>,
}

impl<T: 'static> Clone for UseControllable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for UseControllable<T> {}

impl<T: Clone + PartialEq + 'static> UseControllable<T> {
    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    /// Authoritative value for this render. Subscribes the caller.
    pub fn current(&self) -> T {
        let external = self.external.read();
        let internal = self.internal.read();
        self.mode.resolve(external.as_ref(), &*internal).clone()
    }

    /// Apply a change request and return the value to report.
    ///
    /// Controlled roots never store; the caller has to pass the new value
    /// back in for anything to change on screen.
    pub fn request(&self, candidate: T) -> T {
        let transition = self.mode.transition(&*self.internal.peek(), candidate);
        if let Some(next) = transition.store {
            let mut internal = self.internal;
            internal.set(next);
        }
        transition.notify
    }
}

/// Reconcile `value` / `default_value`. The mode is fixed on first render.
pub fn use_controllable<T: Clone + PartialEq + 'static>(
    external: ReadSignal<Option<T>>,
    default_value: impl FnOnce() -> T,
) -> UseControllable<T> {
    let mode = use_hook(|| ValueMode::detect(external.peek().as_ref()));
    let internal = use_signal(|| external.peek().clone().unwrap_or_else(default_value));
    let external = use_memo(move || external.cloned());
    UseControllable {
        mode,
        internal,
        external,
    }
}

/// Like [`use_controllable`] for values that may be unset. A controlled
/// `Some("")` is a real value here, distinct from nothing selected.
pub fn use_optional_controllable<T: Clone + PartialEq + 'static>(
    external: ReadSignal<Option<T>>,
    default_value: Option<T>,
) -> UseControllable<Option<T>> {
    let mode = use_hook(|| ValueMode::detect(external.peek().as_ref()));
    let internal = use_signal(|| external.peek().clone().or(default_value));
    let external = use_memo(move || external.cloned().map(Some));
    UseControllable {
        mode,
        internal,
        external,
    }
}
