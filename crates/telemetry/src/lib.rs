use axum::extract::Request;
use std::sync::OnceLock;
use tower_http::trace::MakeSpan;
use tracing::{Span, Subscriber, subscriber::set_global_default};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter = EnvFilter::try_from_default_env().unwrap_or(env_filter.into());
    let formatting_layer = BunyanFormattingLayer::new(name, sink);

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

static TRACING: OnceLock<Result<(), String>> = OnceLock::new();

/// Installs the global subscriber. Safe to call more than once, which the
/// integration tests do.
pub fn init_tracing() -> Result<(), String> {
    TRACING
        .get_or_init(|| {
            let subscriber = get_subscriber("cvneat".into(), "info".into(), std::io::stdout);
            tracing_log::LogTracer::init().map_err(|e| format!("Failed to set logger: {e}"))?;
            set_global_default(subscriber)
                .map_err(|e| format!("Failed to set tracing-subscriber: {e}"))
        })
        .clone()
}

#[derive(Clone, Debug)]
pub struct RequestIdMakeSpan;

impl<B> MakeSpan<B> for RequestIdMakeSpan {
    fn make_span(&mut self, request: &Request<B>) -> Span {
        let request_id = request
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("unknown");

        tracing::info_span!(
            "request",
            method = %request.method(),
            uri = %request.uri(),
            version = ?request.version(),
            "x-request-id" = %request_id,
        )
    }
}
