//! Opt-in tracing setup for hosts embedding the dashboard renderer.
//!
//! The library only emits `tracing` events; wiring a subscriber stays the
//! host's call. Hosts that want something quick can enable the `telemetry`
//! feature and call [`init_default_tracing`], everyone else installs their
//! own subscriber and filters.

/// Initializes a default `tracing` subscriber when the `telemetry` feature
/// is enabled.
///
/// Returns `true` when initialization succeeds. Returns `false` when nothing
/// was done (feature disabled) or a global subscriber was already installed
/// by the host.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .with_target(false)
            .compact();

        return builder.try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
