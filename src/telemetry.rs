//! Opt-in tracing setup for hosts embedding the picker engines.
//!
//! Engines only emit `tracing` events (`picker_rs::api::*` targets). Hosts that
//! already run a subscriber need nothing from here.

/// Filter applied when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "picker_rs=info";

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`, or
/// [`DEFAULT_FILTER`] when the variable is absent or unparsable.
///
/// Returns `false` without the `telemetry` feature or when a global subscriber
/// is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    init_tracing_with_fallback(DEFAULT_FILTER)
}

/// Same as [`init_default_tracing`] with a caller-chosen fallback directive,
/// e.g. `"picker_rs::api::time_picker=trace"` to follow drag updates.
#[must_use]
pub fn init_tracing_with_fallback(fallback_directive: &str) -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback_directive));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        let _ = fallback_directive;
        false
    }
}
