//! Bounded numeric input: one committed value shared by a slider, a text buffer and
//! step buttons.
//!
//! `committed` is the single owner of the value. The text buffer only reaches it
//! through an explicit [`NumericField::on_commit`]; every other writer resets the
//! buffer from the committed value.

/// Decimal places kept after a step, to stop floating-point drift.
pub const STEP_DECIMALS: i32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// The buffer mirrors the committed value.
    Idle,
    /// The user has typed; the buffer may diverge or be unparsable.
    Editing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NumericField {
    display_text: String,
    committed: f64,
    min: f64,
    max: f64,
    step: f64,
    integer: bool,
    state: FieldState,
}

impl NumericField {
    /// Create a field; `value` is clamped into `[min, max]`.
    pub fn new(value: f64, min: f64, max: f64, step: f64) -> Self {
        let committed = clamp(value, min, max);
        Self {
            display_text: format_value(committed),
            committed,
            min,
            max,
            step,
            integer: false,
            state: FieldState::Idle,
        }
    }

    /// Restrict committed values to whole numbers.
    pub fn integer(mut self) -> Self {
        self.integer = true;
        let v = self.normalize(self.committed);
        self.set_committed(v);
        self
    }

    pub fn value(&self) -> f64 {
        self.committed
    }

    pub fn display_text(&self) -> &str {
        &self.display_text
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn is_integer(&self) -> bool {
        self.integer
    }

    pub fn at_min(&self) -> bool {
        self.committed <= self.min
    }

    pub fn at_max(&self) -> bool {
        self.committed >= self.max
    }

    /// Store typed text verbatim. The committed value is not touched.
    pub fn on_text_change(&mut self, text: impl Into<String>) {
        self.display_text = text.into();
        self.state = FieldState::Editing;
    }

    /// Commit the buffer (blur or Enter).
    ///
    /// Unparsable text reverts to the committed value; parsable text is clamped
    /// and becomes the new committed value. Returns `true` if the value changed.
    pub fn on_commit(&mut self) -> bool {
        let before = self.committed;
        if let Some(parsed) = parse_value(&self.display_text) {
            let v = self.normalize(parsed);
            self.set_committed(v);
        } else {
            self.display_text = format_value(self.committed);
            self.state = FieldState::Idle;
        }
        self.committed != before
    }

    /// Slider movement. The slider already keeps `value` within range.
    pub fn on_slider_change(&mut self, value: f64) {
        let v = self.normalize(value);
        self.set_committed(v);
    }

    /// Step up. No-op when already at `max`.
    pub fn increment(&mut self) -> bool {
        if self.at_max() {
            return false;
        }
        let v = round_decimals(clamp(self.committed + self.step, self.min, self.max));
        self.set_committed(v);
        true
    }

    /// Step down. No-op when already at `min`.
    pub fn decrement(&mut self) -> bool {
        if self.at_min() {
            return false;
        }
        let v = round_decimals(clamp(self.committed - self.step, self.min, self.max));
        self.set_committed(v);
        true
    }

    /// Programmatic update (e.g. server defaults). Overwrites pending edits.
    pub fn set_external(&mut self, value: f64) {
        let v = self.normalize(value);
        self.set_committed(v);
    }

    fn normalize(&self, value: f64) -> f64 {
        let v = clamp(value, self.min, self.max);
        if self.integer {
            clamp(v.round(), self.min, self.max)
        } else {
            v
        }
    }

    fn set_committed(&mut self, value: f64) {
        self.committed = value;
        self.display_text = format_value(value);
        self.state = FieldState::Idle;
    }
}

/// Clamp `value` into `[min, max]`. NaN maps to `min`.
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    if value.is_nan() {
        return min;
    }
    value.max(min).min(max)
}

/// Shortest decimal text that round-trips (`42`, `0.05`, `-1`).
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{value}")
}

/// Parse user text as a finite real number.
pub fn parse_value(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

fn round_decimals(value: f64) -> f64 {
    let scale = 10f64.powi(STEP_DECIMALS);
    (value * scale).round() / scale
}
