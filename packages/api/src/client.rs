//! # HTTP client factory
//!
//! [`ClientFactory`] owns everything the per-resource clients share: the
//! [`ApiConfig`], one `reqwest::Client`, the [`SessionStore`] handle and the optional
//! unauthorized hook. [`ClientFactory::create_client`] hands out an [`HttpClient`]
//! rooted at `{url}/{segment}`.
//!
//! ## Request pipeline
//!
//! Every helper on [`HttpClient`] funnels into [`HttpClient::send`]:
//!
//! 1. The stored session is read. If it has a non-empty token the request gets
//!    `Authorization: Bearer <token>`, otherwise no `Authorization` header at all.
//! 2. The request is executed. Transport failures, including the fixed timeout,
//!    come back as [`ApiError::Transport`] and are never retried.
//! 3. A 401 clears the stored session, fires the unauthorized hook, and is still
//!    returned to the caller as [`ApiError::Unauthorized`].
//! 4. Other non-2xx statuses become [`ApiError::Status`], carrying the envelope's
//!    `message` and `error` when the body parses.
//! 5. Success bodies are decoded as JSON into the requested type.
//!
//! The hook replaces any knowledge of routing in this crate: the composing layer
//! decides what "go back to login" means.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use store::{KeyValueStore, SessionStore};
use tracing::{debug, info, warn};

use crate::config::ApiConfig;
use crate::error::ApiError;

/// Callback fired after a 401 response has cleared the session.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Builds per-resource [`HttpClient`]s sharing one connection pool and session.
#[derive(Clone)]
pub struct ClientFactory<S: KeyValueStore> {
    config: ApiConfig,
    http: reqwest::Client,
    sessions: SessionStore<S>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<S: KeyValueStore + Clone> ClientFactory<S> {
    pub fn new(config: ApiConfig, sessions: SessionStore<S>) -> Result<Self, ApiError> {
        let http = build_http(&config)?;
        Ok(Self::with_client(config, http, sessions))
    }

    /// Factory around an existing `reqwest::Client`. The client's own timeout and
    /// default headers are used as-is.
    pub fn with_client(config: ApiConfig, http: reqwest::Client, sessions: SessionStore<S>) -> Self {
        Self {
            config,
            http,
            sessions,
            on_unauthorized: None,
        }
    }

    /// Register the callback fired when any request comes back 401.
    pub fn on_unauthorized(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn sessions(&self) -> &SessionStore<S> {
        &self.sessions
    }

    /// Client for the resource at `{url}/{segment}`.
    pub fn create_client(&self, segment: &str) -> HttpClient<S> {
        HttpClient {
            base_url: self.config.resource_url(segment),
            http: self.http.clone(),
            sessions: self.sessions.clone(),
            on_unauthorized: self.on_unauthorized.clone(),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", allow(unused_variables))]
fn build_http(config: &ApiConfig) -> Result<reqwest::Client, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    let builder = reqwest::Client::builder().default_headers(headers);
    // Browser fetch has no client-wide timeout.
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.timeout(config.timeout());

    Ok(builder.build()?)
}

/// Error body shape, used to pull a message out of non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<Value>,
}

/// Client for one backend resource.
#[derive(Clone)]
pub struct HttpClient<S: KeyValueStore> {
    base_url: String,
    http: reqwest::Client,
    sessions: SessionStore<S>,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl<S: KeyValueStore> HttpClient<S> {
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Request builder for `path` relative to the resource, e.g. `"/login"`.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, format!("{}{}", self.base_url, path))
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::GET, path)).await
    }

    pub async fn get_with_query<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::GET, path).query(query)).await
    }

    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::POST, path).json(body)).await
    }

    /// POST without a body.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::POST, path)).await
    }

    pub async fn put<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::PUT, path).json(body)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send(self.request(Method::DELETE, path)).await
    }

    /// DELETE carrying a JSON body, as the batch endpoints expect.
    pub async fn delete_with_body<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(self.request(Method::DELETE, path).json(body)).await
    }

    /// Authorize, execute and decode a request.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let request = match self.sessions.token().await {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let request = request.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(%method, %url, "Sending request");

        let response = self.http.execute(request).await.map_err(|e| {
            warn!(%method, %url, "Request failed: {e}");
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            warn!(%method, %url, "Failed to read response body: {e}");
            ApiError::Transport(e)
        })?;

        if status == StatusCode::UNAUTHORIZED {
            let message = error_body(&body)
                .message
                .unwrap_or_else(|| "Unauthorized".to_string());
            warn!(%method, %url, "Unauthorized: {message}");
            self.expire_session().await;
            return Err(ApiError::Unauthorized { message });
        }

        if !status.is_success() {
            let ErrorBody { message, error } = error_body(&body);
            let message = message.unwrap_or_else(|| status.to_string());
            warn!(%method, %url, status = status.as_u16(), "Request rejected: {message}");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
                error,
            });
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%method, %url, "Failed to decode response: {e}");
            ApiError::Decode(e)
        })
    }

    async fn expire_session(&self) {
        if let Err(e) = self.sessions.clear().await {
            warn!("Failed to clear session after 401: {e}");
        } else {
            info!("Session cleared after 401");
        }
        if let Some(hook) = &self.on_unauthorized {
            hook();
        }
    }
}

fn error_body(body: &[u8]) -> ErrorBody {
    serde_json::from_slice(body).unwrap_or_default()
}
