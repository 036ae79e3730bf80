use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with optional quiet mode.
///
/// When `quiet` is true, only error-level events are emitted.
/// When `quiet` is false, info-level and above events are emitted (default).
///
/// Logs go to stderr as JSON so stdout stays free for command output.
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(quiet: bool) {
    let filter = EnvFilter::from_default_env().add_directive(log_directive(quiet));

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(filter)
        .try_init();
}

/// Directive scoped to the dashtick crates (`dashtick` and `dashtick_core`).
fn log_directive(quiet: bool) -> Directive {
    let (directive, level) = if quiet {
        ("dashtick=error", LevelFilter::ERROR)
    } else {
        ("dashtick=info", LevelFilter::INFO)
    };
    directive.parse().unwrap_or_else(|_| Directive::from(level))
}
