use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the tracing subscriber with structured logging.
///
/// `json_format` switches the fmt layer to JSON output for log
/// shippers; both flags come from `Settings`.
pub fn init_tracing(environment: &str, json_format: bool, port: u16) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,habla=debug,tower_http=debug"));

    let registry = tracing_subscriber::registry().with(env_filter);

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if json_format {
        registry.with(fmt_layer.json()).init();
    } else {
        registry.with(fmt_layer).init();
    }

    tracing::info!(
        port,
        environment,
        json_format,
        "Server initialized"
    );
}
