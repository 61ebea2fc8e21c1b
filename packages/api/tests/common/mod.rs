#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use api::{ApiConfig, ClientFactory, Services};
use store::{MemoryStore, Session, SessionStore};
use wiremock::MockServer;

/// A mock backend plus a client wired against it.
pub struct Harness {
    pub server: MockServer,
    pub sessions: SessionStore<MemoryStore>,
    pub services: Services<MemoryStore>,
    pub unauthorized_calls: Arc<AtomicUsize>,
}

impl Harness {
    pub async fn start() -> Self {
        Self::start_with(|config| config).await
    }

    pub async fn start_with(tweak: impl FnOnce(ApiConfig) -> ApiConfig) -> Self {
        let server = MockServer::start().await;
        let sessions = SessionStore::new(MemoryStore::new());
        let unauthorized_calls = Arc::new(AtomicUsize::new(0));

        let calls = unauthorized_calls.clone();
        let config = tweak(ApiConfig::new(format!("{}/api/v1", server.uri())));
        let factory = ClientFactory::new(config, sessions.clone())
            .unwrap()
            .on_unauthorized(move || {
                calls.fetch_add(1, Ordering::SeqCst);
            });

        Self {
            server,
            sessions,
            services: Services::new(&factory),
            unauthorized_calls,
        }
    }

    pub async fn sign_in(&self, token: &str) {
        self.sessions.write(&Session::new(token)).await.unwrap();
    }

    pub fn unauthorized_calls(&self) -> usize {
        self.unauthorized_calls.load(Ordering::SeqCst)
    }

    pub async fn requests(&self) -> Vec<wiremock::Request> {
        self.server.received_requests().await.unwrap_or_default()
    }
}
