//! # Service modules
//!
//! One struct per backend resource, each a thin layer over an [`HttpClient`]
//! created by the [`ClientFactory`]. Methods only marshal parameters and build paths;
//! the client takes care of auth headers and 401 handling.
//!
//! [`HttpClient`]: crate::HttpClient

mod application;
mod auth;

pub use application::ApplicationService;
pub use auth::AuthService;

use store::KeyValueStore;

use crate::client::ClientFactory;
use crate::guard::NavigationGuard;

/// Both services, built from one factory.
#[derive(Clone)]
pub struct Services<S: KeyValueStore> {
    pub auth: AuthService<S>,
    pub applications: ApplicationService<S>,
    factory: ClientFactory<S>,
}

impl<S: KeyValueStore + Clone> Services<S> {
    pub fn new(factory: &ClientFactory<S>) -> Self {
        Self {
            auth: AuthService::new(factory),
            applications: ApplicationService::new(factory),
            factory: factory.clone(),
        }
    }

    pub fn factory(&self) -> &ClientFactory<S> {
        &self.factory
    }

    /// Navigation guard verifying tokens through [`AuthService`].
    pub fn guard(&self) -> NavigationGuard<S, AuthService<S>> {
        NavigationGuard::new(self.factory.sessions().clone(), self.auth.clone())
    }
}
