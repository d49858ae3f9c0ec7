//! time-slider: headless dual-handle range selector over seconds-ago.
//!
//! The crate covers the piecewise track scale, the interval value model and
//! the pointer state machine. Drawing is delegated to a [`render::Renderer`]
//! that receives a fully resolved [`render::SliderFrame`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{TimeSlider, TimeSliderConfig};
pub use error::{SliderError, SliderResult};
