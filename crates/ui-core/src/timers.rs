//! Debounced open/close bookkeeping for hover-driven overlays.
//!
//! At most one open timer and one close timer may be pending. Arming one
//! kind cancels the other, and a firing whose token is no longer pending
//! is ignored, so a cancelled timer can never flip visibility.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Open,
    Close,
}

/// Identifies one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerToken {
    pub kind: TimerKind,
    id: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DelayTimers {
    next_id: u64,
    open: Option<u64>,
    close: Option<u64>,
}

impl DelayTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm an open timer, cancelling any pending close.
    ///
    /// Returns `None` when the overlay is already open and nothing is
    /// pending to undo.
    pub fn arm_open(&mut self, currently_open: bool) -> Option<TimerToken> {
        self.close = None;
        if currently_open {
            self.open = None;
            return None;
        }
        Some(self.arm(TimerKind::Open))
    }

    /// Arm a close timer, cancelling any pending open.
    pub fn arm_close(&mut self, currently_open: bool) -> Option<TimerToken> {
        self.open = None;
        if !currently_open {
            self.close = None;
            return None;
        }
        Some(self.arm(TimerKind::Close))
    }

    fn arm(&mut self, kind: TimerKind) -> TimerToken {
        self.next_id += 1;
        let id = self.next_id;
        match kind {
            TimerKind::Open => self.open = Some(id),
            TimerKind::Close => self.close = Some(id),
        }
        TimerToken { kind, id }
    }

    /// A timer elapsed. Returns the visibility to apply, if still pending.
    pub fn fire(&mut self, token: TimerToken) -> Option<bool> {
        let slot = match token.kind {
            TimerKind::Open => &mut self.open,
            TimerKind::Close => &mut self.close,
        };
        if *slot == Some(token.id) {
            *slot = None;
            Some(token.kind == TimerKind::Open)
        } else {
            None
        }
    }

    /// Drop every pending timer (teardown).
    pub fn cancel_all(&mut self) {
        self.open = None;
        self.close = None;
    }

    pub fn pending(&self, kind: TimerKind) -> bool {
        match kind {
            TimerKind::Open => self.open.is_some(),
            TimerKind::Close => self.close.is_some(),
        }
    }
}
