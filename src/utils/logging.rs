use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "debug";

/// Resolve the filter directive: `RUST_LOG` wins, then `--verbose`, then the default.
pub fn log_directive(verbose: bool, rust_log: Option<&str>) -> String {
    match rust_log {
        Some(directive) if !directive.trim().is_empty() => directive.to_string(),
        _ if verbose => VERBOSE_LEVEL.to_string(),
        _ => DEFAULT_LEVEL.to_string(),
    }
}

/// Initialise the global `tracing` subscriber, writing to stderr so stdout carries
/// only the report.
///
/// Falls back to `warn` if the directive does not parse.
pub fn setup_logging(verbose: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let directive = log_directive(verbose, rust_log.as_deref());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

    let layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    // Ignore a second initialisation (tests may call this more than once)
    let _ = tracing_subscriber::registry().with(filter).with(layer).try_init();
}
