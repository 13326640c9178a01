//! Controlled / uncontrolled value reconciliation.
//!
//! A root is controlled when the caller supplied a value on the first
//! render. The mode is fixed from then on: a controlled root only ever
//! reports candidate values to the caller, an uncontrolled root stores
//! them and then reports them.

/// Who owns the authoritative value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueMode {
    Controlled,
    Uncontrolled,
}

impl ValueMode {
    /// Decide the mode from the first external value seen.
    pub fn detect<T>(initial_external: Option<&T>) -> Self {
        if initial_external.is_some() {
            ValueMode::Controlled
        } else {
            ValueMode::Uncontrolled
        }
    }

    /// The value to render.
    ///
    /// A controlled root whose caller later drops the value keeps showing
    /// its internal copy, which never moved from the first render.
    pub fn resolve<'a, T>(&self, external: Option<&'a T>, internal: &'a T) -> &'a T {
        match (self, external) {
            (ValueMode::Controlled, Some(value)) => value,
            _ => internal,
        }
    }

    /// Apply a change request.
    pub fn transition<T: Clone + PartialEq>(&self, internal: &T, candidate: T) -> Transition<T> {
        let store = match self {
            ValueMode::Controlled => None,
            ValueMode::Uncontrolled if *internal == candidate => None,
            ValueMode::Uncontrolled => Some(candidate.clone()),
        };
        Transition {
            store,
            notify: candidate,
        }
    }
}

/// What a change request does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<T> {
    /// New internal value, if the root stores it.
    pub store: Option<T>,
    /// Value handed to the caller's change callback.
    pub notify: T,
}

/// Self-contained reconciler used by models and tests.
#[derive(Debug, Clone, PartialEq)]
pub struct Controllable<T> {
    mode: ValueMode,
    internal: T,
}

impl<T: Clone + PartialEq> Controllable<T> {
    pub fn new(external: Option<&T>, default_value: T) -> Self {
        let mode = ValueMode::detect(external);
        let internal = external.cloned().unwrap_or(default_value);
        Self { mode, internal }
    }

    pub fn mode(&self) -> ValueMode {
        self.mode
    }

    pub fn current<'a>(&'a self, external: Option<&'a T>) -> &'a T {
        self.mode.resolve(external, &self.internal)
    }

    /// Request a change. Returns the value to report to the caller.
    pub fn request(&mut self, candidate: T) -> T {
        let transition = self.mode.transition(&self.internal, candidate);
        if let Some(next) = transition.store {
            self.internal = next;
        }
        transition.notify
    }
}
