use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error)]
pub enum SliderError {
    #[error("invalid track width: {width}")]
    InvalidTrackWidth { width: f64 },

    #[error("invalid breakpoints: {0}")]
    InvalidBreakpoints(String),

    #[error("interval too small: from={from}, until={until}, minimum={min_interval}")]
    IntervalTooSmall {
        from: f64,
        until: f64,
        min_interval: f64,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
