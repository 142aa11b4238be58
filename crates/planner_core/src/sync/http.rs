//! Blocking HTTP implementation of the remote store contract.
//!
//! # Responsibility
//! - Map `RemoteStore` operations onto the REST list endpoints.
//! - Keep HTTP details (URLs, status handling) out of the service layer.
//!
//! # Invariants
//! - Requests are issued one at a time in call order; no retries.
//! - A non-success status maps to `SyncError::Status`, never a panic.

use crate::sync::remote::{ItemPatch, Meal, RemoteItem, RemoteStore};
use crate::sync::{SyncError, SyncResult};
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct CreateRequest<'a> {
    name: &'a str,
    category: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: i64,
}

#[derive(Debug, Deserialize)]
struct MealsResponse {
    #[serde(default)]
    meals: Vec<Meal>,
}

/// Remote store client over the REST list API.
pub struct HttpRemoteStore {
    client: Client,
    base_url: String,
}

impl HttpRemoteStore {
    /// Creates a client for the given API base URL, e.g.
    /// `http://127.0.0.1:5000/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    fn checked(response: Response) -> SyncResult<Response> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(SyncError::Status {
                status: status.as_u16(),
                url: response.url().to_string(),
            })
        }
    }
}

impl RemoteStore for HttpRemoteStore {
    fn fetch_items(&self) -> SyncResult<Vec<RemoteItem>> {
        let response = Self::checked(self.client.get(self.url("/list")).send()?)?;
        Ok(response.json()?)
    }

    fn create_item(&self, name: &str, category: &str) -> SyncResult<i64> {
        let response = Self::checked(
            self.client
                .post(self.url("/list"))
                .json(&CreateRequest { name, category })
                .send()?,
        )?;
        let created: CreateResponse = response.json()?;
        Ok(created.id)
    }

    fn patch_item(&self, id: i64, patch: &ItemPatch) -> SyncResult<()> {
        Self::checked(
            self.client
                .patch(self.url(&format!("/list/{id}")))
                .json(patch)
                .send()?,
        )?;
        Ok(())
    }

    fn delete_item(&self, id: i64) -> SyncResult<()> {
        Self::checked(
            self.client
                .delete(self.url(&format!("/list/{id}")))
                .send()?,
        )?;
        Ok(())
    }

    fn clear_items(&self) -> SyncResult<()> {
        Self::checked(self.client.post(self.url("/list/clear")).send()?)?;
        Ok(())
    }

    fn replace_items(&self, items: &[RemoteItem]) -> SyncResult<()> {
        Self::checked(self.client.post(self.url("/list")).json(&items).send()?)?;
        Ok(())
    }

    fn fetch_selected_meals(&self, ids: &[i64]) -> SyncResult<Vec<Meal>> {
        let joined = ids
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(",");
        let response = Self::checked(
            self.client
                .get(self.url("/selected"))
                .query(&[("ids", joined.as_str())])
                .send()?,
        )?;
        let payload: MealsResponse = response.json()?;
        Ok(payload.meals)
    }
}
