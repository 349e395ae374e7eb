use anyhow::{Context, Result, anyhow};
use api::{Application, OrderingSwitch};
use settings::get_configuration;

#[tokio::main]
async fn main() -> Result<()> {
    telemetry::init_tracing()
        .map_err(|e| anyhow!(e))
        .context("Failed to initialize tracing.")?;
    let config = get_configuration().context("Failed to read Configuration.")?;

    let app = Application::build(&config).await?;
    tracing::info!(
        address = %app.address().context("Listener has no local address")?,
        ordering_closed = config.ordering.closed,
        "cvneat api started"
    );

    tokio::spawn(reload_ordering_on_hangup(app.ordering()));

    app.run().await
}

/// `kill -HUP` re-reads the configuration and swaps the ordering switch,
/// no rebuild or restart needed.
#[cfg(unix)]
async fn reload_ordering_on_hangup(ordering: OrderingSwitch) {
    use tokio::signal::unix::{SignalKind, signal};

    let mut hangups = match signal(SignalKind::hangup()) {
        Ok(stream) => stream,
        Err(error) => {
            tracing::error!(%error, "Cannot listen for SIGHUP, the ordering switch will not reload.");
            return;
        }
    };

    while hangups.recv().await.is_some() {
        ordering.reload(get_configuration().map(|config| config.ordering));
    }
}

#[cfg(not(unix))]
async fn reload_ordering_on_hangup(_: OrderingSwitch) {
    tracing::warn!("Ordering switch reload is only available on unix.");
}
