//! # API crate: typed client for the job-application tracker backend
//!
//! Everything the web client needs to talk to the REST backend lives here, kept free
//! of any UI code so it can be exercised from plain async tests.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | Base URL and request timeout, from defaults, `jobtracker.toml` and `JOBTRACKER_*` env vars |
//! | [`client`] | Client factory: per-resource [`HttpClient`]s that attach the bearer token and react to 401s |
//! | [`envelope`] | The uniform `{ message, status, data }` response wrapper |
//! | [`models`] | Request and response payloads for auth and applications |
//! | [`services`] | [`AuthService`] and [`ApplicationService`], one method per backend endpoint |
//! | [`guard`] | The pre-navigation check that gates routes on a verified session |
//! | [`error`] | [`ApiError`], the single error type returned by every call |
//!
//! ## Wiring
//!
//! ```no_run
//! use api::{ApiConfig, ClientFactory, Services};
//! use store::{MemoryStore, SessionStore};
//!
//! # fn wire() -> Result<(), api::ApiError> {
//! let sessions = SessionStore::new(MemoryStore::new());
//! let factory = ClientFactory::new(ApiConfig::load()?, sessions)?
//!     .on_unauthorized(|| tracing::info!("session expired"));
//! let services = Services::new(&factory);
//! let guard = services.guard();
//! # let _ = guard;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod guard;
pub mod models;
pub mod services;

pub use reqwest;

pub use client::{ClientFactory, HttpClient, UnauthorizedHook};
pub use config::ApiConfig;
pub use envelope::{Envelope, FetchResponse, ListPage};
pub use error::ApiError;
pub use guard::{Navigation, NavigationGuard, RouteMeta, Verifier};
pub use models::{
    Application, ApplicationOptions, CreateApplication, ListQuery, LoginBody, RegisterBody,
    UpdateApplication,
};
pub use services::{ApplicationService, AuthService, Services};
