//! Logging configuration for the command line tool.
//!
//! Logs go to stderr so rendered markup on stdout stays clean. Set
//! `DEBUG_LOGGING=1` to enable debug output for dossier crates.

use tracing_subscriber::{
    EnvFilter,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

pub fn init() {
    let debug_logging = std::env::var("DEBUG_LOGGING").is_ok();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let filter_directive = if debug_logging {
        // debug for dossier crates, info for dependencies
        "info,dossier_core=debug,dossier_cli=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::new(filter_directive);

    if tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter)
        .try_init()
        .is_ok()
    {
        tracing::debug!(debug_logging, "dossier logging initialized");
    }
}
