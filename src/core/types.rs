use serde::{Deserialize, Serialize};

pub const MINUTE: u64 = 60;
pub const HOUR: u64 = 60 * MINUTE;
pub const DAY: u64 = 24 * HOUR;

/// One of the two slider handles.
///
/// `From` is the older bound (larger seconds-ago), `Until` the newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Handle {
    From,
    Until,
}

impl Handle {
    #[must_use]
    pub fn other(self) -> Self {
        match self {
            Self::From => Self::Until,
            Self::Until => Self::From,
        }
    }
}

/// Selected interval, both bounds in seconds-ago.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SliderValue {
    pub from: f64,
    pub until: f64,
}

impl SliderValue {
    #[must_use]
    pub fn new(from: f64, until: f64) -> Self {
        Self { from, until }
    }

    #[must_use]
    pub fn get(self, handle: Handle) -> f64 {
        match handle {
            Handle::From => self.from,
            Handle::Until => self.until,
        }
    }

    /// Returns a copy with `handle` replaced and the other bound kept.
    #[must_use]
    pub fn with(mut self, handle: Handle, value: f64) -> Self {
        match handle {
            Handle::From => self.from = value,
            Handle::Until => self.until = value,
        }
        self
    }

    #[must_use]
    pub fn interval(self) -> f64 {
        self.from - self.until
    }

    /// `true` when both bounds are non-negative and at least `min_interval` apart.
    #[must_use]
    pub fn satisfies_min_interval(self, min_interval: f64) -> bool {
        self.from.is_finite()
            && self.until.is_finite()
            && self.until >= 0.0
            && self.interval() >= min_interval
    }
}
