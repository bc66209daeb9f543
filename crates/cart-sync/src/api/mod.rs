//! Remote Collection API
//!
//! Abstract interface to the collection resource that stores cart entries.
//! `HttpCartApi` talks to it over HTTP; tests use an in-memory fake.

mod http;

#[cfg(test)]
pub(crate) mod fake;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::models::{NewEntry, RemoteEntry};

pub use http::HttpCartApi;

/// `Send + Sync` on native targets, nothing on wasm32 where fetch futures are
/// tied to the JS event loop.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSendSync: Send + Sync {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send + Sync> MaybeSendSync for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSendSync {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSendSync for T {}

/// The three operations the cart needs from the remote collection
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait CartApi: MaybeSendSync {
    /// `GET <base>`
    async fn list_entries(&self) -> Result<Vec<RemoteEntry>, ApiError>;

    /// `POST <base>` with `{ name, price }`
    async fn create_entry(&self, entry: &NewEntry<'_>) -> Result<RemoteEntry, ApiError>;

    /// `DELETE <base>/<id>`
    async fn delete_entry(&self, remote_id: &str) -> Result<(), ApiError>;
}
