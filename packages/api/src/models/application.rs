//! # Application records
//!
//! An [`Application`] is one job application owned by exactly one user. The backend
//! assigns `id`, `user_id` and the timestamps; deleting an application only sets
//! `deleted_at`.
//!
//! | Type | Used by |
//! |------|---------|
//! | [`CreateApplication`] | `POST /applications/` |
//! | [`UpdateApplication`] | `PUT /applications/{id}` (partial update) |
//! | [`ListQuery`] | `GET /applications/` query string |
//! | [`ApplicationOptions`] | `GET /applications/options` |
//! | [`BatchDelete`] / [`BatchStatus`] | the two batch endpoints |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job application as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: String,
    pub user_id: String,
    pub company_name: String,
    pub position_title: String,
    #[serde(default)]
    pub job_url: Option<String>,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub applied_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Application {
    /// Soft-deleted records keep their row with `deleted_at` set.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Payload for creating an application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplication {
    pub company_name: String,
    pub position_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The backend defaults this to `"Wishlist"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<DateTime<Utc>>,
}

impl CreateApplication {
    pub fn new(company_name: impl Into<String>, position_title: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            position_title: position_title.into(),
            ..Self::default()
        }
    }
}

/// Partial update; only the fields that are `Some` are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date: Option<DateTime<Utc>>,
}

impl UpdateApplication {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

/// Query string of the list endpoint. Only defined values are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl ListQuery {
    /// An empty status counts as no status filter.
    pub fn new(status: Option<&str>, limit: Option<u32>, offset: Option<u32>) -> Self {
        Self {
            status: status.filter(|s| !s.is_empty()).map(str::to_string),
            limit,
            offset,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.limit.is_none() && self.offset.is_none()
    }
}

/// Allowed values for application fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationOptions {
    #[serde(default)]
    pub status_option: Vec<String>,
}

/// Body of `DELETE /applications/batch/delete`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDelete<'a> {
    pub application_ids: &'a [String],
}

/// Body of `PUT /applications/batch/status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchStatus<'a> {
    pub application_ids: &'a [String],
    pub status: &'a str,
}
