use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize JSON logging on stderr.
///
/// When `quiet` is true, only error-level events are emitted. Otherwise
/// info-level and above. `RUST_LOG` directives are applied on top.
pub fn init_logging(quiet: bool) {
    let directive = if quiet { "cfgtree=error" } else { "cfgtree=info" };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive(directive.parse().expect("Invalid log directive")),
        )
        .init();
}
