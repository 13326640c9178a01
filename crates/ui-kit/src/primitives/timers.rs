use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use ui_core::{DelayTimers, TimerToken};

/// Browser timeouts take `u32` milliseconds; longer delays saturate.
#[cfg(any(target_arch = "wasm32", test))]
fn timeout_millis(delay: Duration) -> u32 {
    u32::try_from(delay.as_millis()).unwrap_or(u32::MAX)
}

pub(crate) async fn sleep(delay: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::TimeoutFuture::new(timeout_millis(delay)).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(delay).await;
}

#[derive(Default)]
struct TimerState {
    timers: DelayTimers,
    task: Option<Task>,
}

impl TimerState {
    fn cancel_task(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}

/// Hover intent handlers for a trigger and its floating content.
#[derive(Clone, Copy, PartialEq)]
pub struct DelayedVisibility {
    /// Pointer or focus arrived: open after the open delay.
    pub enter: Callback<()>,
    /// Pointer or focus left: close after the close delay.
    pub leave: Callback<()>,
}

/// Debounced open/close for hover-driven overlays.
///
/// `is_open` reports current visibility, `set_open` applies a change once a
/// timer elapses. Both timers are cancelled when the component unmounts.
pub fn use_delayed_visibility(
    is_open: impl Fn() -> bool + 'static,
    set_open: Callback<bool>,
    open_delay: Duration,
    close_delay: Duration,
) -> DelayedVisibility {
    let state = use_hook(|| Rc::new(RefCell::new(TimerState::default())));
    let is_open = Rc::new(is_open);

    let arm = {
        let state = state.clone();
        move |token: TimerToken, delay: Duration| {
            let fired = state.clone();
            let task = spawn(async move {
                sleep(delay).await;
                let visible = {
                    let mut fired = fired.borrow_mut();
                    fired.task = None;
                    fired.timers.fire(token)
                };
                if let Some(visible) = visible {
                    set_open.call(visible);
                }
            });
            let mut state = state.borrow_mut();
            state.cancel_task();
            state.task = Some(task);
        }
    };

    let enter = {
        let state = state.clone();
        let is_open = is_open.clone();
        let arm = arm.clone();
        use_callback(move |_: ()| {
            let token = state.borrow_mut().timers.arm_open(is_open());
            match token {
                Some(token) => arm(token, open_delay),
                None => state.borrow_mut().cancel_task(),
            }
        })
    };

    let leave = {
        let state = state.clone();
        use_callback(move |_: ()| {
            let token = state.borrow_mut().timers.arm_close(is_open());
            match token {
                Some(token) => arm(token, close_delay),
                None => state.borrow_mut().cancel_task(),
            }
        })
    };

    use_drop(move || {
        let mut state = state.borrow_mut();
        state.timers.cancel_all();
        state.cancel_task();
    });

    DelayedVisibility { enter, leave }
}
