//! Process-wide `tracing` setup for the `toaster` binary.

use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

use crate::Result;
use crate::error::Error;

const FALLBACK_FILTER: &str = "info";

/// Installs the global subscriber, logging to stderr.
///
/// The filter is the first candidate that parses among `explicit_filter`,
/// `RUST_LOG` and `info`. Each toast runs in a `toast` span whose close is
/// logged with its busy/idle time. JSON output needs the `json-logs` feature.
///
/// # Errors
///
/// Returns an error when JSON output is requested from a build without
/// `json-logs`, or when a global subscriber is already installed.
pub fn init_tracing(explicit_filter: Option<&str>, use_json: bool) -> Result<()> {
    let candidates = explicit_filter
        .map(str::to_string)
        .into_iter()
        .chain(std::env::var("RUST_LOG").ok());
    let filter = first_valid_filter(candidates)
        .unwrap_or_else(|| EnvFilter::new(FALLBACK_FILTER));

    let layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(std::io::stderr);

    if use_json {
        #[cfg(feature = "json-logs")]
        return install(
            Registry::default()
                .with(filter)
                .with(layer.json().flatten_event(true)),
        );
        #[cfg(not(feature = "json-logs"))]
        return Err(Error::Telemetry(
            "binary was built without the `json-logs` feature".to_string(),
        ));
    }

    install(Registry::default().with(filter).with(layer))
}

fn first_valid_filter(candidates: impl IntoIterator<Item = String>) -> Option<EnvFilter> {
    candidates
        .into_iter()
        .find_map(|candidate| EnvFilter::try_new(candidate).ok())
}

fn install<S>(subscriber: S) -> Result<()>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|err| Error::Telemetry(err.to_string()))
}
