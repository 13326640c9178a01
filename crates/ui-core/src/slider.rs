//! Slider geometry and value rules.
//!
//! A single slider is modelled as a range whose start is pinned at `min`,
//! so every operation below works on `(start, end)` pairs.

use serde::{Deserialize, Serialize};

/// Slider value. Whether the slider is a range comes from its `range` flag,
/// never from which variant the caller happened to pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SliderValue {
    Single(f64),
    Range(f64, f64),
}

impl SliderValue {
    /// Pair form: a single value `v` becomes `(min, v)`.
    pub fn normalize(&self, min: f64) -> (f64, f64) {
        match *self {
            SliderValue::Single(v) => (min, v),
            SliderValue::Range(start, end) => (start, end),
        }
    }

    /// Back from pair form, shaped by the `range` flag.
    pub fn from_pair(pair: (f64, f64), range: bool) -> Self {
        if range {
            SliderValue::Range(pair.0, pair.1)
        } else {
            SliderValue::Single(pair.1)
        }
    }
}

/// Which handle is being moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thumb {
    Start,
    End,
}

impl Thumb {
    pub fn as_str(&self) -> &'static str {
        match self {
            Thumb::Start => "start",
            Thumb::End => "end",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl Default for SliderBounds {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 100.0,
            step: 1.0,
        }
    }
}

impl SliderBounds {
    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    /// Round to the nearest step, then clamp.
    pub fn snap(&self, value: f64) -> f64 {
        let snapped = if self.step > 0.0 {
            (value / self.step).round() * self.step
        } else {
            value
        };
        self.clamp(snapped)
    }

    /// Position of a value along the track, 0 to 100.
    pub fn percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        (self.clamp(value) - self.min) / span * 100.0
    }

    /// Value under a pointer at `ratio` (0 to 1) along the track.
    pub fn value_at(&self, ratio: f64) -> f64 {
        let ratio = ratio.clamp(0.0, 1.0);
        self.snap(self.min + ratio * (self.max - self.min))
    }

    /// Clamp both ends and keep `start <= end`.
    pub fn clamp_pair(&self, (start, end): (f64, f64)) -> (f64, f64) {
        let end = self.clamp(end);
        let start = self.clamp(start).min(end);
        (start, end)
    }

    /// Move one thumb. Neither thumb may cross the other.
    pub fn move_thumb(&self, current: (f64, f64), thumb: Thumb, target: f64) -> (f64, f64) {
        let (start, end) = current;
        let target = self.snap(target);
        match thumb {
            Thumb::Start => (target.min(end), end),
            Thumb::End => (start, target.max(start)),
        }
    }

    /// Thumb a click on the rail moves: start when left of the midpoint.
    pub fn nearer_thumb(&self, current: (f64, f64), target: f64, range: bool) -> Thumb {
        if !range {
            return Thumb::End;
        }
        let midpoint = (current.0 + current.1) / 2.0;
        if target < midpoint {
            Thumb::Start
        } else {
            Thumb::End
        }
    }

    pub fn rail_click(&self, current: (f64, f64), target: f64, range: bool) -> (f64, f64) {
        let thumb = self.nearer_thumb(current, target, range);
        self.move_thumb(current, thumb, target)
    }

    /// Keyboard handling on a thumb. `None` for keys the slider ignores.
    pub fn key(&self, current: (f64, f64), thumb: Thumb, key: &str) -> Option<(f64, f64)> {
        let value = match thumb {
            Thumb::Start => current.0,
            Thumb::End => current.1,
        };
        let target = match key {
            "ArrowRight" | "ArrowUp" => value + self.step,
            "ArrowLeft" | "ArrowDown" => value - self.step,
            "Home" => self.min,
            "End" => self.max,
            _ => return None,
        };
        Some(self.move_thumb(current, thumb, target))
    }
}

/// A labelled point on the track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderMark {
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl SliderMark {
    pub fn new(value: f64) -> Self {
        Self { value, label: None }
    }

    pub fn labelled(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: Some(label.into()),
        }
    }

    /// Label text, defaulting to the value itself.
    pub fn text(&self) -> String {
        self.label.clone().unwrap_or_else(|| self.value.to_string())
    }
}

/// Marks generated when the caller asks for marks without listing any.
pub fn auto_marks(bounds: &SliderBounds) -> Vec<SliderMark> {
    vec![SliderMark::new(bounds.min), SliderMark::new(bounds.max)]
}

/// Legacy `marks` prop: `true` asks for marks at the bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MarksSetting {
    Auto(bool),
    Custom(Vec<SliderMark>),
}

impl MarksSetting {
    pub fn resolve(&self, bounds: &SliderBounds) -> Vec<SliderMark> {
        match self {
            MarksSetting::Auto(true) => auto_marks(bounds),
            MarksSetting::Auto(false) => Vec::new(),
            MarksSetting::Custom(marks) => marks.clone(),
        }
    }
}

/// Client-space box of the track, measured when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackRect {
    /// Pointer position as a 0 to 1 ratio along the track. Vertical tracks
    /// grow upwards.
    pub fn ratio(&self, x: f64, y: f64, vertical: bool) -> f64 {
        let ratio = if vertical {
            if self.height <= 0.0 {
                return 0.0;
            }
            1.0 - (y - self.top) / self.height
        } else {
            if self.width <= 0.0 {
                return 0.0;
            }
            (x - self.left) / self.width
        };
        ratio.clamp(0.0, 1.0)
    }
}

/// State of one pointer drag.
///
/// Moves update `last`; finishing hands back the value the last move
/// produced, which is what completion callbacks report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub thumb: Thumb,
    last: (f64, f64),
}

impl DragSession {
    pub fn begin(thumb: Thumb, current: (f64, f64)) -> Self {
        Self {
            thumb,
            last: current,
        }
    }

    /// A pointer move at `ratio` along the track.
    pub fn update(&mut self, bounds: &SliderBounds, ratio: f64) -> (f64, f64) {
        self.last = bounds.move_thumb(self.last, self.thumb, bounds.value_at(ratio));
        self.last
    }

    pub fn last(&self) -> (f64, f64) {
        self.last
    }

    pub fn finish(self) -> (f64, f64) {
        self.last
    }
}
