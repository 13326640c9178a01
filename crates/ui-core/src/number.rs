//! Numeric input maths: clamping, precision, parsing and stepping.

/// Domain constraints of a numeric input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberBounds {
    pub min: f64,
    pub max: f64,
    pub precision: Option<u32>,
}

impl Default for NumberBounds {
    fn default() -> Self {
        Self {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            precision: None,
        }
    }
}

impl NumberBounds {
    /// Clamp into `[min, max]` and round to the configured precision.
    ///
    /// Idempotent: clamping a clamped value returns it unchanged.
    pub fn clamp(&self, value: f64) -> f64 {
        let clamped = value.max(self.min).min(self.max);
        match self.precision {
            Some(digits) => round_to(clamped, digits),
            None => clamped,
        }
    }

    pub fn can_increment(&self, value: Option<f64>) -> bool {
        value.map_or(true, |v| v < self.max)
    }

    pub fn can_decrement(&self, value: Option<f64>) -> bool {
        value.map_or(true, |v| v > self.min)
    }

    /// Step from the current value (empty counts as zero).
    pub fn step(&self, current: Option<f64>, step: f64, direction: StepDirection) -> f64 {
        let base = current.unwrap_or(0.0);
        let next = match direction {
            StepDirection::Up => base + step,
            StepDirection::Down => base - step,
        };
        self.clamp(next)
    }

    /// Display text for a committed value.
    pub fn format(&self, value: Option<f64>) -> String {
        match (value, self.precision) {
            (None, _) => String::new(),
            (Some(v), Some(digits)) => format!("{v:.prec$}", prec = digits as usize),
            (Some(v), None) => v.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

impl StepDirection {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" => Some(StepDirection::Up),
            "ArrowDown" => Some(StepDirection::Down),
            _ => None,
        }
    }
}

pub fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10f64.powi(digits as i32);
    (value * factor).round() / factor
}

/// What the user typed, interpreted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParsedInput {
    /// Nothing typed.
    Empty,
    /// A lone minus sign: keep editing, commit nothing.
    Incomplete,
    Value(f64),
    Invalid,
}

/// Parse raw input text.
///
/// Characters other than digits, `.` and `-` are dropped first, then the
/// longest numeric prefix is used, so `"12 kg"` reads as 12 and `"1.2.3"`
/// as 1.2.
pub fn parse_input(raw: &str) -> ParsedInput {
    if raw.is_empty() {
        return ParsedInput::Empty;
    }
    if raw == "-" {
        return ParsedInput::Incomplete;
    }
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    (1..=cleaned.len())
        .rev()
        .find_map(|end| cleaned[..end].parse::<f64>().ok())
        .map_or(ParsedInput::Invalid, ParsedInput::Value)
}
