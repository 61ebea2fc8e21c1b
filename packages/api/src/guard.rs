//! # Navigation guard
//!
//! [`NavigationGuard::before_access`] runs before every route transition and answers
//! with a [`Navigation`]. Routes opt in through [`RouteMeta::requires_auth`]:
//!
//! | Target | Stored token | Verification | Outcome |
//! |--------|--------------|--------------|---------|
//! | open | any | not called | [`Navigation::Proceed`] |
//! | gated | none | not called | [`Navigation::RedirectToLogin`] |
//! | gated | present | returns a user id | id stored, [`Navigation::Proceed`] |
//! | gated | present | error or no id | session cleared, [`Navigation::RedirectToLogin`] |
//!
//! Expired tokens, invalid tokens and an unreachable server all produce the same
//! redirect. Guard runs are independent: a second navigation while one verification
//! is in flight starts its own verification, and nothing is cancelled.

use std::future::Future;

use store::{KeyValueStore, SessionStore};
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Route-level metadata consulted by the guard.
pub trait RouteMeta {
    fn requires_auth(&self) -> bool;
}

/// What the router should do with a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Proceed,
    RedirectToLogin,
}

/// Server-side token verification.
pub trait Verifier {
    /// The user id the current token belongs to, `None` when the server returned no id.
    fn verify_session(&self) -> impl Future<Output = Result<Option<String>, ApiError>>;
}

/// Gate for routes that require a verified session.
#[derive(Clone)]
pub struct NavigationGuard<S: KeyValueStore, V> {
    sessions: SessionStore<S>,
    verifier: V,
}

impl<S: KeyValueStore, V: Verifier> NavigationGuard<S, V> {
    pub fn new(sessions: SessionStore<S>, verifier: V) -> Self {
        Self { sessions, verifier }
    }

    pub async fn before_access<R: RouteMeta + ?Sized>(&self, target: &R) -> Navigation {
        if !target.requires_auth() {
            return Navigation::Proceed;
        }

        if self.sessions.token().await.is_none() {
            debug!("No session token, redirecting to login");
            return Navigation::RedirectToLogin;
        }

        match self.verifier.verify_session().await {
            Ok(Some(id)) if !id.is_empty() => match self.sessions.set_id(&id).await {
                Ok(Some(_)) => {
                    debug!(user_id = %id, "Session verified");
                    Navigation::Proceed
                }
                Ok(None) => {
                    // Cleared while the verification was in flight.
                    info!("Session disappeared during verification");
                    Navigation::RedirectToLogin
                }
                Err(e) => {
                    warn!("Failed to store verified session: {e}");
                    self.reject().await
                }
            },
            Ok(_) => {
                warn!("Verification returned no user id");
                self.reject().await
            }
            Err(e) => {
                warn!("Verification failed: {e}");
                self.reject().await
            }
        }
    }

    async fn reject(&self) -> Navigation {
        if let Err(e) = self.sessions.clear().await {
            warn!("Failed to clear session: {e}");
        }
        info!("Session cleared, redirecting to login");
        Navigation::RedirectToLogin
    }
}

impl<V: Verifier> Verifier for &V {
    async fn verify_session(&self) -> Result<Option<String>, ApiError> {
        (**self).verify_session().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use store::{MemoryStore, Session, StoreError};

    struct Gated(bool);

    impl RouteMeta for Gated {
        fn requires_auth(&self) -> bool {
            self.0
        }
    }

    /// Verifier answering with a fixed result and counting calls.
    #[derive(Clone)]
    struct FakeVerifier {
        answer: Result<Option<&'static str>, u16>,
        calls: Arc<AtomicUsize>,
    }

    impl FakeVerifier {
        fn new(answer: Result<Option<&'static str>, u16>) -> Self {
            Self {
                answer,
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Verifier for FakeVerifier {
        async fn verify_session(&self) -> Result<Option<String>, ApiError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.answer {
                Ok(id) => Ok(id.map(str::to_string)),
                Err(status) => Err(ApiError::Status {
                    status,
                    message: "nope".into(),
                    error: None,
                }),
            }
        }
    }

    /// Backend that reads and removes normally but rejects every write.
    #[derive(Clone)]
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        async fn get_item(&self, key: &str) -> Option<String> {
            self.0.get_item(key).await
        }

        async fn set_item(&self, _key: &str, _value: String) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("quota exceeded".into()))
        }

        async fn remove_item(&self, key: &str) -> Result<(), StoreError> {
            self.0.remove_item(key).await
        }
    }

    /// Verifier that logs the user out before answering with an id.
    struct LogoutRace {
        sessions: SessionStore<MemoryStore>,
    }

    impl Verifier for LogoutRace {
        async fn verify_session(&self) -> Result<Option<String>, ApiError> {
            self.sessions.clear().await.unwrap();
            Ok(Some("user-123".to_string()))
        }
    }

    async fn sessions_with(session: Option<Session>) -> SessionStore<MemoryStore> {
        let sessions = SessionStore::new(MemoryStore::new());
        if let Some(session) = session {
            sessions.write(&session).await.unwrap();
        }
        sessions
    }

    #[tokio::test]
    async fn test_open_route_skips_verification() {
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions_with(None).await, &verifier);

        assert_eq!(guard.before_access(&Gated(false)).await, Navigation::Proceed);
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_gated_route_without_token_redirects() {
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions_with(None).await, &verifier);

        assert_eq!(
            guard.before_access(&Gated(true)).await,
            Navigation::RedirectToLogin
        );
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_empty_token_counts_as_missing() {
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions_with(Some(Session::new(""))).await, &verifier);

        assert_eq!(
            guard.before_access(&Gated(true)).await,
            Navigation::RedirectToLogin
        );
        assert_eq!(verifier.calls(), 0);
    }

    #[tokio::test]
    async fn test_verified_token_stores_id_and_proceeds() {
        let sessions = sessions_with(Some(Session::new("token-1"))).await;
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions.clone(), &verifier);

        assert_eq!(guard.before_access(&Gated(true)).await, Navigation::Proceed);
        assert_eq!(verifier.calls(), 1);
        assert_eq!(
            sessions.read().await,
            Some(Session::new("token-1").with_id("user-123"))
        );
    }

    #[tokio::test]
    async fn test_failed_verification_clears_session() {
        let sessions = sessions_with(Some(Session::new("token-1"))).await;
        let verifier = FakeVerifier::new(Err(500));
        let guard = NavigationGuard::new(sessions.clone(), &verifier);

        assert_eq!(
            guard.before_access(&Gated(true)).await,
            Navigation::RedirectToLogin
        );
        assert!(sessions.read().await.is_none());
    }

    #[tokio::test]
    async fn test_missing_id_clears_session() {
        for answer in [Ok(None), Ok(Some(""))] {
            let sessions = sessions_with(Some(Session::new("token-1"))).await;
            let verifier = FakeVerifier::new(answer);
            let guard = NavigationGuard::new(sessions.clone(), &verifier);

            assert_eq!(
                guard.before_access(&Gated(true)).await,
                Navigation::RedirectToLogin
            );
            assert!(sessions.read().await.is_none());
        }
    }

    #[tokio::test]
    async fn test_every_transition_verifies_again() {
        let sessions = sessions_with(Some(Session::new("token-1"))).await;
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions, &verifier);

        guard.before_access(&Gated(true)).await;
        guard.before_access(&Gated(true)).await;
        assert_eq!(verifier.calls(), 2);
    }

    #[tokio::test]
    async fn test_failed_id_write_clears_session() {
        let memory = MemoryStore::new();
        SessionStore::new(memory.clone())
            .write(&Session::new("token-1"))
            .await
            .unwrap();
        let sessions = SessionStore::new(ReadOnlyStore(memory.clone()));
        let verifier = FakeVerifier::new(Ok(Some("user-123")));
        let guard = NavigationGuard::new(sessions.clone(), &verifier);

        assert_eq!(
            guard.before_access(&Gated(true)).await,
            Navigation::RedirectToLogin
        );
        assert_eq!(verifier.calls(), 1);
        assert!(sessions.read().await.is_none());
        assert!(SessionStore::new(memory).read().await.is_none());
    }

    #[tokio::test]
    async fn test_logout_during_verification_is_not_undone() {
        let sessions = sessions_with(Some(Session::new("token-1"))).await;
        let verifier = LogoutRace {
            sessions: sessions.clone(),
        };
        let guard = NavigationGuard::new(sessions.clone(), verifier);

        assert_eq!(
            guard.before_access(&Gated(true)).await,
            Navigation::RedirectToLogin
        );
        assert!(sessions.read().await.is_none());
        assert!(sessions.backend().get_item(store::SESSION_STORAGE_KEY).await.is_none());
    }
}
