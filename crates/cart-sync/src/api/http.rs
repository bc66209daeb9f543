//! HTTP Cart API
//!
//! reqwest-backed client for the remote collection. On wasm32 reqwest goes
//! through the browser's fetch.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use url::Url;

use super::CartApi;
use crate::error::ApiError;
use crate::models::{NewEntry, RemoteEntry};

#[derive(Debug, Clone)]
pub struct HttpCartApi {
    client: Client,
    base: Url,
}

impl HttpCartApi {
    pub fn new(base: Url) -> Self {
        Self::with_client(Client::new(), base)
    }

    pub fn with_client(client: Client, base: Url) -> Self {
        Self { client, base }
    }

    /// `<base>/<id>`, with a single slash whether or not the base ends in one.
    /// The id is percent-encoded as one path segment.
    pub fn entry_url(&self, remote_id: &str) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(remote_id.to_string()))?
            .pop_if_empty()
            .push(remote_id);
        Ok(url)
    }
}

/// Turn a non-2xx response into `ApiError::Status`
async fn check_status(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let bytes = check_status(response).await?.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl CartApi for HttpCartApi {
    async fn list_entries(&self) -> Result<Vec<RemoteEntry>, ApiError> {
        tracing::debug!(url = %self.base, "GET cart entries");
        let response = self.client.get(self.base.clone()).send().await?;
        read_json(response).await
    }

    async fn create_entry(&self, entry: &NewEntry<'_>) -> Result<RemoteEntry, ApiError> {
        tracing::debug!(url = %self.base, name = entry.name, "POST cart entry");
        let response = self.client.post(self.base.clone()).json(entry).send().await?;
        read_json(response).await
    }

    async fn delete_entry(&self, remote_id: &str) -> Result<(), ApiError> {
        let url = self.entry_url(remote_id)?;
        tracing::debug!(%url, "DELETE cart entry");
        let response = self.client.delete(url).send().await?;
        check_status(response).await?;
        Ok(())
    }
}
