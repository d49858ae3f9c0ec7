//! Telemetry helpers for applications embedding `time-slider`.
//!
//! The slider only emits `tracing` events; installing a subscriber is left to
//! the host. `init_default_tracing` is a convenience for demos and tests.

/// Default directive when `RUST_LOG` is unset: slider events at `info`,
/// everything else at `warn`.
pub const DEFAULT_FILTER: &str = "warn,time_slider=info";

/// Initializes a compact `tracing` subscriber filtered by `RUST_LOG`, falling
/// back to [`DEFAULT_FILTER`].
///
/// Returns `true` when initialization succeeds.
/// Returns `false` when the feature is disabled or the host application
/// already installed a global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .with_target(true)
            .with_level(true)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_FILTER, init_default_tracing};

    #[test]
    fn default_filter_targets_this_crate() {
        assert!(DEFAULT_FILTER.contains("time_slider=info"));
    }

    #[cfg(not(feature = "telemetry"))]
    #[test]
    fn init_is_a_no_op_without_the_feature() {
        assert!(!init_default_tracing());
    }

    #[cfg(feature = "telemetry")]
    #[test]
    fn default_filter_parses() {
        assert!(tracing_subscriber::EnvFilter::try_new(DEFAULT_FILTER).is_ok());
        let _ = init_default_tracing();
    }
}
