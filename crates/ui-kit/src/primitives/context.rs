use std::sync::atomic::{AtomicUsize, Ordering};

use dioxus::prelude::*;
use ui_core::{require_context, ContextError};

static NEXT_INSTANCE: AtomicUsize = AtomicUsize::new(0);

/// Context lookup for families whose parts are meaningless outside their
/// root. The error is meant to be returned from the part with `?`.
pub fn use_required_context<T: Clone + 'static>(
    part: &'static str,
    root: &'static str,
) -> Result<T, ContextError> {
    require_context(try_use_context::<T>(), part, root)
}

/// A number unique to this component instance, for `id` / `aria-*` links.
pub fn use_instance_id() -> usize {
    use_hook(|| NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed))
}
