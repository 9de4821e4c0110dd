use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,dice_odds=info";

/// JSON logs for the server binary. `RUST_LOG` overrides [`DEFAULT_FILTER`];
/// `RUST_LOG=dice_odds::domain=debug` shows every move and claim.
///
/// Events carry the enclosing `request` span, so tracker and registry logs
/// share the request's `trace_id`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_ansi(false)
                .with_current_span(true)
                .with_span_list(false)
                .with_target(true),
        )
        .init();
}
