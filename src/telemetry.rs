//! Tracing setup for shells embedding `sun-viewer`.
//!
//! Nothing is installed implicitly. Hosts either call `init_default_tracing`
//! or bring their own `tracing` subscriber.

/// Directives used when `RUST_LOG` is unset: viewer events at info, everything
/// else from dependencies at warn.
pub const DEFAULT_TRACE_FILTER: &str = "warn,sun_viewer=info,viewer_trace=info";

/// Installs a compact stderr subscriber when the `telemetry` feature is enabled.
///
/// `RUST_LOG` overrides [`DEFAULT_TRACE_FILTER`]. Returns `false` when the
/// feature is off or the host already owns the global subscriber.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        use tracing_subscriber::EnvFilter;

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_FILTER));
        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}

#[cfg(all(test, feature = "telemetry"))]
mod tests {
    use super::DEFAULT_TRACE_FILTER;

    #[test]
    fn default_filter_directives_parse() {
        tracing_subscriber::EnvFilter::try_new(DEFAULT_TRACE_FILTER).expect("valid directives");
    }
}
