use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Filter directive for a verbosity level. `RUST_LOG` is consulted only when
/// no `-v` flag was given.
#[must_use]
pub fn filter_for(verbose: u8) -> EnvFilter {
    match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("sloc_audit=debug,warn"),
        _ => EnvFilter::new("sloc_audit=trace,debug"),
    }
}

/// Install the global subscriber. Logs go to stderr so reports on stdout stay
/// machine-readable. Calling this twice is harmless.
pub fn init(verbose: u8) {
    let _ = tracing_subscriber::registry()
        .with(filter_for(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init();
}
