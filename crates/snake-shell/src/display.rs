use serde::{Deserialize, Serialize};

pub const DEFAULT_DIGITS: usize = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStyle {
    Outline,
    #[default]
    Filled,
    Flat,
}

/// Seven-segment style counter fed by the game timer.
#[derive(Debug, Clone)]
pub struct ClockDisplay {
    digits: usize,
    style: SegmentStyle,
    value: i64,
}

impl ClockDisplay {
    pub fn new(digits: usize, style: SegmentStyle) -> Self {
        Self {
            digits: digits.max(1),
            style,
            value: 0,
        }
    }

    pub fn display(&mut self, value: i64) {
        self.value = value;
    }

    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn style(&self) -> SegmentStyle {
        self.style
    }

    /// True when the value needs more digits than the display has.
    pub fn overflowed(&self) -> bool {
        self.value.to_string().len() > self.digits
    }

    /// Right-aligned text as the display shows it; dashes on overflow.
    pub fn text(&self) -> String {
        if self.overflowed() {
            return "-".repeat(self.digits);
        }
        format!("{:>width$}", self.value, width = self.digits)
    }
}

impl Default for ClockDisplay {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS, SegmentStyle::default())
    }
}
