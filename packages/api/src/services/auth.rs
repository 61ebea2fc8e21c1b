use store::KeyValueStore;

use crate::client::{ClientFactory, HttpClient};
use crate::envelope::{Envelope, FetchResponse};
use crate::error::ApiError;
use crate::guard::Verifier;
use crate::models::{LoginBody, RegisterBody};

/// `/auth` endpoints.
#[derive(Clone)]
pub struct AuthService<S: KeyValueStore> {
    api: HttpClient<S>,
}

impl<S: KeyValueStore + Clone> AuthService<S> {
    pub fn new(factory: &ClientFactory<S>) -> Self {
        Self {
            api: factory.create_client("auth"),
        }
    }
}

impl<S: KeyValueStore> AuthService<S> {
    /// `POST /login`; `data` holds the bearer token.
    pub async fn login(&self, body: &LoginBody) -> Result<Envelope<String>, ApiError> {
        self.api.post("/login", body).await
    }

    /// `POST /register`.
    pub async fn register(&self, body: &RegisterBody) -> Result<FetchResponse, ApiError> {
        self.api.post("/register", body).await
    }

    /// `GET /verify`, authorized by the stored token; `data` holds the user id.
    pub async fn verify(&self) -> Result<Envelope<String>, ApiError> {
        self.api.get("/verify").await
    }

    /// `POST /logout`.
    pub async fn logout(&self) -> Result<FetchResponse, ApiError> {
        self.api.post_empty("/logout").await
    }
}

impl<S: KeyValueStore> Verifier for AuthService<S> {
    async fn verify_session(&self) -> Result<Option<String>, ApiError> {
        self.verify().await.map(Envelope::into_data)
    }
}
