use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::types::{DAY, HOUR, MINUTE};
use crate::error::{SliderError, SliderResult};

/// Stops of the default track: now, 10m, 30m, 1h, 4h, 12h, 1d, 4d, 7d, 30d.
pub const DEFAULT_STEPS: [u64; 10] = [
    0,
    10 * MINUTE,
    30 * MINUTE,
    HOUR,
    4 * HOUR,
    12 * HOUR,
    DAY,
    4 * DAY,
    7 * DAY,
    30 * DAY,
];

/// Largest accepted step; every step up to `2^53` converts to a distinct `f64`.
pub const MAX_STEP_SECONDS: u64 = 1 << 53;

/// Sorted, strictly increasing seconds-ago stops that always start at `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u64>", into = "Vec<u64>")]
pub struct Breakpoints {
    steps: SmallVec<[u64; 16]>,
}

impl Breakpoints {
    /// Builds a breakpoint set from steps in any order.
    ///
    /// Fails when fewer than two steps are given, when `0` is missing, when a
    /// step is repeated, or when a step exceeds [`MAX_STEP_SECONDS`].
    pub fn new(steps: impl IntoIterator<Item = u64>) -> SliderResult<Self> {
        let mut steps: SmallVec<[u64; 16]> = steps.into_iter().collect();
        steps.sort_unstable();

        if steps.len() < 2 {
            return Err(SliderError::InvalidBreakpoints(format!(
                "at least two steps are required, got {}",
                steps.len()
            )));
        }
        if steps[0] != 0 {
            return Err(SliderError::InvalidBreakpoints(
                "steps must include 0 (now)".to_owned(),
            ));
        }
        let oldest = steps[steps.len() - 1];
        if oldest > MAX_STEP_SECONDS {
            return Err(SliderError::InvalidBreakpoints(format!(
                "step {oldest} exceeds the maximum of {MAX_STEP_SECONDS} seconds"
            )));
        }
        if let Some(pair) = steps.windows(2).find(|pair| pair[0] == pair[1]) {
            return Err(SliderError::InvalidBreakpoints(format!(
                "duplicate step {}",
                pair[0]
            )));
        }

        Ok(Self { steps })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.steps
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn oldest(&self) -> u64 {
        self.steps[self.steps.len() - 1]
    }

    /// Initial `from` bound: the fourth stop, or the oldest stop on short tracks.
    #[must_use]
    pub fn default_from(&self) -> u64 {
        self.steps.get(3).copied().unwrap_or_else(|| self.oldest())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            steps: SmallVec::from_slice(&DEFAULT_STEPS),
        }
    }
}

impl TryFrom<Vec<u64>> for Breakpoints {
    type Error = SliderError;

    fn try_from(steps: Vec<u64>) -> SliderResult<Self> {
        Self::new(steps)
    }
}

impl From<Breakpoints> for Vec<u64> {
    fn from(breakpoints: Breakpoints) -> Self {
        breakpoints.steps.into_vec()
    }
}
