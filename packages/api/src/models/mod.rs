//! # Request and response payloads
//!
//! Wire types for the two backend resources. All of them use camelCase field names
//! on the wire; optional fields that are `None` are left out of request bodies.
//!
//! - [`auth`]: login and registration credentials.
//! - [`application`]: application records, their create/update payloads, list
//!   filters and batch operations.

pub mod application;
pub mod auth;

pub use application::{
    Application, ApplicationOptions, BatchDelete, BatchStatus, CreateApplication, ListQuery,
    UpdateApplication,
};
pub use auth::{LoginBody, RegisterBody};
