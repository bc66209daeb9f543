//! In-memory collection with scripted failures and delays

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::CartApi;
use crate::error::ApiError;
use crate::models::{NewEntry, RemoteEntry};

/// Assigns ids `a1`, `a2`, ... in creation order
#[derive(Default)]
pub(crate) struct FakeCartApi {
    stored: Mutex<Vec<RemoteEntry>>,
    next_id: AtomicU32,
    pub fail_list: AtomicBool,
    pub fail_create: AtomicBool,
    pub fail_delete: AtomicBool,
    create_delays: Mutex<HashMap<String, Duration>>,
    delete_calls: Mutex<Vec<String>>,
}

impl FakeCartApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put an entry straight into the remote collection
    pub fn seed(&self, id: &str, name: &str, price: f64) {
        self.stored.lock().unwrap().push(RemoteEntry {
            id: id.to_string(),
            name: name.to_string(),
            price,
        });
    }

    /// Delay the create response for entries named `name`
    pub fn delay_create(&self, name: &str, delay: Duration) {
        self.create_delays.lock().unwrap().insert(name.to_string(), delay);
    }

    pub fn set_failing(&self, flag: &AtomicBool, failing: bool) {
        flag.store(failing, Ordering::SeqCst);
    }

    pub fn stored_ids(&self) -> Vec<String> {
        self.stored.lock().unwrap().iter().map(|e| e.id.clone()).collect()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.delete_calls.lock().unwrap().clone()
    }

    fn unavailable() -> ApiError {
        ApiError::Status {
            status: 503,
            body: "service unavailable".to_string(),
        }
    }
}

#[async_trait]
impl CartApi for FakeCartApi {
    async fn list_entries(&self) -> Result<Vec<RemoteEntry>, ApiError> {
        if self.fail_list.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        Ok(self.stored.lock().unwrap().clone())
    }

    async fn create_entry(&self, entry: &NewEntry<'_>) -> Result<RemoteEntry, ApiError> {
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let id = format!("a{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let delay = self.create_delays.lock().unwrap().get(entry.name).copied();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        let created = RemoteEntry {
            id,
            name: entry.name.to_string(),
            price: entry.price,
        };
        self.stored.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_entry(&self, remote_id: &str) -> Result<(), ApiError> {
        self.delete_calls.lock().unwrap().push(remote_id.to_string());
        if self.fail_delete.load(Ordering::SeqCst) {
            return Err(Self::unavailable());
        }
        let mut stored = self.stored.lock().unwrap();
        match stored.iter().position(|e| e.id == remote_id) {
            Some(index) => {
                stored.remove(index);
                Ok(())
            }
            None => Err(ApiError::Status {
                status: 404,
                body: "not found".to_string(),
            }),
        }
    }
}
