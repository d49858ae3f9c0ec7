pub mod breakpoints;
pub mod scale;
pub mod types;
pub mod value_model;

pub use breakpoints::{Breakpoints, DEFAULT_STEPS, MAX_STEP_SECONDS};
pub use scale::PiecewiseScale;
pub use types::{DAY, HOUR, Handle, MINUTE, SliderValue};
pub use value_model::{DEFAULT_MIN_INTERVAL_SECONDS, ValueModel};
