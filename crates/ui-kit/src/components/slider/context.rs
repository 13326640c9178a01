use std::rc::Rc;

use dioxus::prelude::*;
use ui_core::slider::{DragSession, SliderBounds, Thumb, TrackRect};
use ui_core::{ContextError, Family, Marker};

use crate::primitives::use_required_context;

pub(crate) const SLIDER: Family = Family {
    root: "Slider",
    markers: &[Marker::Prefix("Slider")],
    replacement: "SliderTrack, SliderRange, SliderThumb and SliderMarks components",
    parts: "SliderTrack, SliderRange, SliderThumb, SliderMarks",
};

#[derive(Clone, Copy, PartialEq)]
pub struct SliderContext {
    /// Current `(start, end)`, clamped. A single slider pins start at `min`.
    pub value: Memo<(f64, f64)>,
    pub bounds: Memo<SliderBounds>,
    pub range: ReadSignal<bool>,
    pub vertical: ReadSignal<bool>,
    pub disabled: ReadSignal<bool>,
    pub(crate) drag: Signal<Option<DragSession>>,
    pub(crate) track: Signal<Option<Rc<MountedData>>>,
    pub(crate) rect: Signal<Option<TrackRect>>,
    pub(crate) on_value: Callback<(f64, f64)>,
    pub(crate) on_complete: Callback<(f64, f64)>,
}

impl SliderContext {
    /// Request a new `(start, end)`.
    pub fn set(&self, pair: (f64, f64)) {
        self.on_value.call(pair);
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.read().is_some()
    }

    pub fn thumb_value(&self, thumb: Thumb) -> f64 {
        let (start, end) = (self.value)();
        match thumb {
            Thumb::Start => start,
            Thumb::End => end,
        }
    }

    /// Begin a pointer drag of `thumb`. The track is measured once here.
    pub fn begin_drag(&self, thumb: Thumb) {
        if (self.disabled)() {
            return;
        }
        let mut drag = self.drag;
        drag.set(Some(DragSession::begin(thumb, (self.value)())));
        let track = self.track;
        let mut rect = self.rect;
        spawn(async move {
            if let Some(measured) = measure(track).await {
                rect.set(Some(measured));
            }
        });
    }

    /// A pointer move anywhere on the surface while dragging.
    pub fn drag_to(&self, x: f64, y: f64) {
        let Some(rect) = *self.rect.peek() else {
            return;
        };
        let ratio = rect.ratio(x, y, *self.vertical.peek());
        let bounds = *self.bounds.peek();
        let mut drag = self.drag;
        let next = match drag.write().as_mut() {
            Some(session) => session.update(&bounds, ratio),
            None => return,
        };
        self.set(next);
    }

    /// Pointer released: report the value from the last move. The track is
    /// measured again on the next drag.
    pub fn end_drag(&self) {
        let mut rect = self.rect;
        rect.set(None);
        let mut drag = self.drag;
        let session = drag.write().take();
        if let Some(session) = session {
            self.on_complete.call(session.finish());
        }
    }
}

pub(crate) async fn measure(track: Signal<Option<Rc<MountedData>>>) -> Option<TrackRect> {
    let mounted = track.peek().clone()?;
    let rect = mounted.get_client_rect().await.ok()?;
    Some(TrackRect {
        left: rect.origin.x,
        top: rect.origin.y,
        width: rect.size.width,
        height: rect.size.height,
    })
}

pub fn use_slider_context(part: &'static str) -> Result<SliderContext, ContextError> {
    use_required_context(part, SLIDER.root)
}
