use tracing::{debug, trace};

use crate::core::{Handle, SliderValue};
use crate::error::{SliderError, SliderResult};

/// Smallest accepted `from - until` distance, in seconds.
pub const DEFAULT_MIN_INTERVAL_SECONDS: f64 = 60.0;

/// Owner of the selected interval.
///
/// Mutation goes through [`ValueModel::propose_move`], which keeps
/// `from - until >= min_interval`, or through the unchecked [`ValueModel::set`]
/// used for externally supplied state. The model never notifies anyone; that
/// is decided by the interaction layer at commit points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueModel {
    value: SliderValue,
    min_interval: f64,
}

impl ValueModel {
    #[must_use]
    pub fn new(initial: SliderValue, min_interval: f64) -> Self {
        Self {
            value: initial,
            min_interval,
        }
    }

    #[must_use]
    pub fn get(&self) -> SliderValue {
        self.value
    }

    #[must_use]
    pub fn min_interval(&self) -> f64 {
        self.min_interval
    }

    /// Replaces both bounds without checking the minimum interval.
    pub fn set(&mut self, value: SliderValue) {
        debug!(from = value.from, until = value.until, "value overwritten");
        self.value = value;
    }

    /// Replaces both bounds only when the pair satisfies the minimum interval.
    pub fn try_set(&mut self, value: SliderValue) -> SliderResult<()> {
        if !value.satisfies_min_interval(self.min_interval) {
            return Err(SliderError::IntervalTooSmall {
                from: value.from,
                until: value.until,
                min_interval: self.min_interval,
            });
        }
        self.set(value);
        Ok(())
    }

    /// Moves one handle to `candidate`, keeping the other bound fixed.
    ///
    /// Returns `false` and leaves the value untouched when `candidate` equals
    /// the current bound or when the resulting pair would be closer than the
    /// minimum interval.
    pub fn propose_move(&mut self, handle: Handle, candidate: f64) -> bool {
        let current = self.value.get(handle);
        if candidate == current {
            trace!(?handle, candidate, "move is a no-op");
            return false;
        }

        let proposed = self.value.with(handle, candidate);
        if !proposed.satisfies_min_interval(self.min_interval) {
            debug!(
                ?handle,
                candidate,
                from = proposed.from,
                until = proposed.until,
                min_interval = self.min_interval,
                "move rejected: interval too small"
            );
            return false;
        }

        trace!(?handle, from = proposed.from, until = proposed.until, "move accepted");
        self.value = proposed;
        true
    }
}
