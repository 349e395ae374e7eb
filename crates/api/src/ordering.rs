use settings::OrderingConfiguration;
use std::fmt::Display;
use std::sync::Arc;
use tokio::sync::watch;

/// Process-wide ordering switch. Readers always see exactly one value; the
/// server replaces it when the configuration is reloaded.
#[derive(Debug, Clone)]
pub struct OrderingSwitch(Arc<watch::Sender<OrderingConfiguration>>);

impl OrderingSwitch {
    pub fn new(initial: OrderingConfiguration) -> Self {
        Self(Arc::new(watch::Sender::new(initial)))
    }

    pub fn current(&self) -> OrderingConfiguration {
        self.0.borrow().clone()
    }

    /// Returns the value it replaced.
    pub fn replace(&self, next: OrderingConfiguration) -> OrderingConfiguration {
        self.0.send_replace(next)
    }

    pub fn subscribe(&self) -> watch::Receiver<OrderingConfiguration> {
        self.0.subscribe()
    }

    /// Applies a freshly loaded configuration. A failed load keeps the
    /// current value.
    pub fn reload<E: Display>(&self, loaded: Result<OrderingConfiguration, E>) -> bool {
        match loaded {
            Ok(next) => {
                let previous = self.replace(next.clone());
                tracing::info!(
                    closed = next.closed,
                    was_closed = previous.closed,
                    "Ordering switch reloaded."
                );
                true
            }
            Err(error) => {
                tracing::error!(
                    %error,
                    "Failed to reload the configuration, keeping the current ordering switch."
                );
                false
            }
        }
    }
}
