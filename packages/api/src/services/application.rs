use serde_json::Value;
use store::KeyValueStore;

use crate::client::{ClientFactory, HttpClient};
use crate::envelope::{Envelope, ListPage};
use crate::error::ApiError;
use crate::models::{
    Application, ApplicationOptions, BatchDelete, BatchStatus, CreateApplication, ListQuery,
    UpdateApplication,
};

/// `/applications` endpoints.
///
/// Mutations return the raw envelope payload; the backend doesn't promise a shape
/// for it.
#[derive(Clone)]
pub struct ApplicationService<S: KeyValueStore> {
    api: HttpClient<S>,
}

impl<S: KeyValueStore + Clone> ApplicationService<S> {
    pub fn new(factory: &ClientFactory<S>) -> Self {
        Self {
            api: factory.create_client("applications"),
        }
    }
}

impl<S: KeyValueStore> ApplicationService<S> {
    /// `GET /`, filtered by whichever of `status`, `limit`, `offset` are given.
    pub async fn list(
        &self,
        status: Option<&str>,
        limit: Option<u32>,
        offset: Option<u32>,
    ) -> Result<Envelope<ListPage<Application>>, ApiError> {
        self.list_with(&ListQuery::new(status, limit, offset)).await
    }

    pub async fn list_with(
        &self,
        query: &ListQuery,
    ) -> Result<Envelope<ListPage<Application>>, ApiError> {
        if query.is_empty() {
            self.api.get("/").await
        } else {
            self.api.get_with_query("/", query).await
        }
    }

    /// `POST /`.
    pub async fn create(&self, body: &CreateApplication) -> Result<Envelope<Value>, ApiError> {
        self.api.post("/", body).await
    }

    /// `PUT /{id}`.
    pub async fn update(
        &self,
        id: &str,
        body: &UpdateApplication,
    ) -> Result<Envelope<Value>, ApiError> {
        self.api.put(&format!("/{id}"), body).await
    }

    /// `DELETE /{id}`. The backend only marks the record deleted.
    pub async fn delete(&self, id: &str) -> Result<Envelope<Value>, ApiError> {
        self.api.delete(&format!("/{id}")).await
    }

    /// `GET /options?statusOption=true`.
    pub async fn get_options(&self) -> Result<Envelope<ApplicationOptions>, ApiError> {
        self.api
            .get_with_query("/options", &[("statusOption", true)])
            .await
    }

    /// `DELETE /batch/delete` with `{ applicationIds }`.
    pub async fn batch_delete(&self, ids: &[String]) -> Result<Envelope<Value>, ApiError> {
        self.api
            .delete_with_body("/batch/delete", &BatchDelete {
                application_ids: ids,
            })
            .await
    }

    /// `PUT /batch/status` with `{ applicationIds, status }`.
    pub async fn batch_update_status(
        &self,
        ids: &[String],
        status: &str,
    ) -> Result<Envelope<Value>, ApiError> {
        self.api
            .put("/batch/status", &BatchStatus {
                application_ids: ids,
                status,
            })
            .await
    }
}
