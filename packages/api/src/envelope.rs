//! Response envelope shared by every backend endpoint.
//!
//! ```json
//! { "message": "success", "status": 200, "data": ... }
//! ```
//!
//! List endpoints nest a [`ListPage`] under `data`. Endpoints with nothing to return
//! omit `data`; decode those into [`FetchResponse`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// `{ message, status, data }` wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: u16,
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl<T> Envelope<T> {
    pub fn into_data(self) -> Option<T> {
        self.data
    }
}

/// Envelope without a payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchResponse {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: u16,
}

/// One page of a list endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPage<T> {
    pub data: Vec<T>,
    pub data_count: usize,
}

impl<T> Default for ListPage<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            data_count: 0,
        }
    }
}
