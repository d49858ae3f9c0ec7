use smallvec::SmallVec;

use crate::core::Breakpoints;

/// Polylinear scale from normalized track position to seconds-ago.
///
/// Breakpoint `i` of `n` sits at position `i / (n - 1)`, so every segment
/// between two consecutive stops takes the same share of the track regardless
/// of how many seconds it spans. Position `0` is "now"; position `1` is the
/// oldest stop. Inputs outside the domain or range are clamped.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewiseScale {
    domain: SmallVec<[f64; 16]>,
    range: SmallVec<[f64; 16]>,
}

impl PiecewiseScale {
    #[must_use]
    pub fn new(breakpoints: &Breakpoints) -> Self {
        let last = (breakpoints.len() - 1) as f64;
        let domain = (0..breakpoints.len())
            .map(|index| index as f64 / last)
            .collect();
        let range = breakpoints.as_slice().iter().map(|&step| step as f64).collect();
        Self { domain, range }
    }

    #[must_use]
    pub fn domain(&self) -> &[f64] {
        &self.domain
    }

    #[must_use]
    pub fn range(&self) -> &[f64] {
        &self.range
    }

    #[must_use]
    pub fn min_value(&self) -> f64 {
        self.range[0]
    }

    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.range[self.range.len() - 1]
    }

    /// Maps seconds-ago to a normalized position in `[0, 1]`.
    #[must_use]
    pub fn value_to_position(&self, value: f64) -> f64 {
        let value = if value.is_nan() {
            self.min_value()
        } else {
            value.clamp(self.min_value(), self.max_value())
        };
        interpolate(&self.range, &self.domain, value)
    }

    /// Maps a normalized position to seconds-ago.
    #[must_use]
    pub fn position_to_value(&self, position: f64) -> f64 {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        interpolate(&self.domain, &self.range, position)
    }

    /// Pixel offset of every domain stop on a track of `width`, oldest first.
    ///
    /// Time runs right to left: "now" is drawn at the right edge.
    #[must_use]
    pub fn axis_range(&self, width: f64) -> Vec<f64> {
        self.domain.iter().rev().map(|stop| stop * width).collect()
    }

    /// Left offset in pixels at which `value` is drawn on a track of `width`.
    #[must_use]
    pub fn value_to_offset(&self, value: f64, width: f64) -> f64 {
        (1.0 - self.value_to_position(value)) * width
    }

    /// Seconds-ago under the pixel offset `offset` of a track of `width`.
    #[must_use]
    pub fn offset_to_value(&self, offset: f64, width: f64) -> f64 {
        self.position_to_value((width - offset) / width)
    }
}

/// Piecewise-linear lookup of `x` (already clamped to `xs`) into `ys`.
fn interpolate(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    let upper = xs.partition_point(|stop| *stop <= x);
    let segment = upper.saturating_sub(1).min(xs.len() - 2);

    let (x0, x1) = (xs[segment], xs[segment + 1]);
    let (y0, y1) = (ys[segment], ys[segment + 1]);
    let t = (x - x0) / (x1 - x0);
    y0 + t * (y1 - y0)
}
