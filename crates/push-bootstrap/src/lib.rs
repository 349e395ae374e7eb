//! Registers the native shell for push notifications when it mounts.

mod registrar;

use domain::DevicePlatform;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::task::JoinHandle;

pub use registrar::{DeviceRegistrar, RegistrationError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushPermission {
    Granted,
    Denied,
    /// The user has not answered yet.
    Prompt,
}

/// What the native shell exposes to the bootstrap.
pub trait Platform: Send + Sync + 'static {
    fn is_native_platform(&self) -> bool;

    fn check_permissions(&self) -> impl Future<Output = PushPermission> + Send {
        std::future::ready(PushPermission::Granted)
    }

    /// Prompts the user. Only called when the check did not grant.
    fn request_permissions(&self) -> impl Future<Output = PushPermission> + Send {
        std::future::ready(PushPermission::Granted)
    }
}

/// Platforms without a permission prompt grant right away.
impl Platform for DevicePlatform {
    fn is_native_platform(&self) -> bool {
        self.is_native()
    }
}

pub trait PushRegistrar: Send + Sync + 'static {
    fn register(&self) -> impl Future<Output = Result<(), RegistrationError>> + Send;
}

/// One instance per mount of the shell. Registration is attempted at most
/// once per instance and never retried.
pub struct PushBootstrap<P, R> {
    platform: Arc<P>,
    registrar: Arc<R>,
    mounted: AtomicBool,
}

impl<P: Platform, R: PushRegistrar> PushBootstrap<P, R> {
    pub fn new(platform: P, registrar: R) -> Self {
        Self {
            platform: Arc::new(platform),
            registrar: Arc::new(registrar),
            mounted: AtomicBool::new(false),
        }
    }

    /// Spawns the registration when running natively. The returned handle
    /// is only useful to tests, callers are not expected to await it.
    pub fn mount(&self) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            tracing::debug!("Push bootstrap already mounted.");
            return None;
        }

        if !self.platform.is_native_platform() {
            tracing::debug!("Native push notifications unavailable outside the native shell.");
            return None;
        }

        let platform = Arc::clone(&self.platform);
        let registrar = Arc::clone(&self.registrar);
        Some(tokio::spawn(async move {
            match register_with_permission(platform.as_ref(), registrar.as_ref()).await {
                Ok(()) => tracing::info!("Push notifications registered."),
                Err(RegistrationError::PermissionDenied) => {
                    tracing::info!("Push permission not granted, skipping registration.")
                }
                Err(error) => tracing::error!(
                    error.message = %error,
                    error.details = ?error,
                    "Push registration failed."
                ),
            }
        }))
    }
}

async fn register_with_permission<P: Platform, R: PushRegistrar>(
    platform: &P,
    registrar: &R,
) -> Result<(), RegistrationError> {
    let mut permission = platform.check_permissions().await;
    if permission != PushPermission::Granted {
        permission = platform.request_permissions().await;
        tracing::debug!(?permission, "Push permission requested.");
    }

    if permission != PushPermission::Granted {
        return Err(RegistrationError::PermissionDenied);
    }

    registrar.register().await
}
