//! Backend client wiring for the web app.
//!
//! Picks the session backend for the platform and builds the [`Services`] shared
//! through context:
//! - **Web** (WASM + `web` feature): `window.localStorage` via [`store::LocalStore`]
//! - **Native**: in-memory [`store::MemoryStore`], so every launch starts logged out

use api::{ApiConfig, ClientFactory, Services};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedSender;
use store::SessionStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type Backend = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type Backend = store::MemoryStore;

/// Emitted when a request came back 401 and the session was dropped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionExpired;

/// Unauthorized hook forwarding every 401 to the shell's coroutine.
pub fn session_expired_hook(
    tx: UnboundedSender<SessionExpired>,
) -> impl Fn() + Send + Sync + 'static {
    move || {
        if tx.unbounded_send(SessionExpired).is_err() {
            tracing::debug!("Session expiry receiver is gone");
        }
    }
}

/// Build the services from the loaded configuration, reporting 401s through
/// `on_unauthorized`.
pub fn connect(on_unauthorized: impl Fn() + Send + Sync + 'static) -> Services<Backend> {
    let config = ApiConfig::load().unwrap_or_else(|e| {
        tracing::warn!("Invalid client configuration, using defaults: {e}");
        ApiConfig::default()
    });
    connect_with(config, on_unauthorized)
}

pub fn connect_with(
    config: ApiConfig,
    on_unauthorized: impl Fn() + Send + Sync + 'static,
) -> Services<Backend> {
    tracing::info!(url = %config.url, "Connecting to backend");

    let sessions = SessionStore::new(Backend::new());
    let factory = match ClientFactory::new(config.clone(), sessions.clone()) {
        Ok(factory) => factory,
        Err(e) => {
            tracing::error!("Failed to build HTTP client, falling back to defaults: {e}");
            ClientFactory::with_client(config, api::reqwest::Client::new(), sessions)
        }
    };

    Services::new(&factory.on_unauthorized(on_unauthorized))
}

/// Services provided by [`crate::views::Shell`].
pub fn use_services() -> Services<Backend> {
    use_context::<Services<Backend>>()
}
