//! Cart Synchronizer
//!
//! Owns the local `CartState` and mirrors additions and removals to the
//! remote collection. State changes only at settlement, under a short lock
//! that is never held across an `.await`. Observers are called afterwards,
//! one delivery at a time, and the last snapshot they receive is always the
//! current state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::api::{CartApi, HttpCartApi};
use crate::config::{CartConfig, ErrorPolicy};
use crate::error::CartError;
use crate::models::{CartEntry, CartState, Item, NewEntry};

/// Handle returned by [`CartSynchronizer::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Arc<dyn Fn(&CartState) + Send + Sync>;

#[derive(Default)]
struct Observers {
    next_id: u64,
    entries: Vec<(SubscriptionId, Observer)>,
}

/// Who is delivering snapshots, and whether a settlement landed meanwhile
#[derive(Default)]
struct Delivery {
    active: bool,
    pending: bool,
}

pub struct CartSynchronizer<A> {
    api: A,
    error_policy: ErrorPolicy,
    state: Mutex<CartState>,
    observers: Mutex<Observers>,
    delivery: Mutex<Delivery>,
    initialized: AtomicBool,
}

/// The synchronizer the UI runs against
pub type HttpCartSynchronizer = CartSynchronizer<HttpCartApi>;

impl HttpCartSynchronizer {
    pub fn from_config(config: &CartConfig) -> Self {
        Self::new(HttpCartApi::new(config.api_base.clone()), config.error_policy)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<A: CartApi> CartSynchronizer<A> {
    pub fn new(api: A, error_policy: ErrorPolicy) -> Self {
        Self {
            api,
            error_policy,
            state: Mutex::new(CartState::default()),
            observers: Mutex::new(Observers::default()),
            delivery: Mutex::new(Delivery::default()),
            initialized: AtomicBool::new(false),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Seed local state from the remote collection.
    ///
    /// Only the first call per synchronizer reaches the network; later calls
    /// return `Ok(())` without touching state.
    pub async fn initialize(&self) -> Result<(), CartError> {
        if self.initialized.swap(true, Ordering::SeqCst) {
            tracing::debug!("cart already initialized, skipping fetch");
            return Ok(());
        }

        match self.api.list_entries().await {
            Ok(remote) => {
                let entries: Vec<CartEntry> = remote.into_iter().map(CartEntry::from).collect();
                tracing::info!(count = entries.len(), "cart loaded");
                self.settle(|state| {
                    state.entries = entries;
                    self.clear_error(state);
                });
                Ok(())
            }
            Err(e) => Err(self.fail(CartError::FetchFailure(e))),
        }
    }

    /// Create the entry remotely, then append what the remote returned.
    ///
    /// Overlapping calls are appended in the order their responses arrive.
    pub async fn add_item(&self, item: &Item) -> Result<CartEntry, CartError> {
        match self.api.create_entry(&NewEntry::from(item)).await {
            Ok(remote) => {
                let entry = CartEntry::from(remote);
                tracing::info!(remote_id = %entry.remote_id, name = %entry.name, "added to cart");
                self.settle(|state| {
                    state.entries.push(entry.clone());
                    self.clear_error(state);
                });
                Ok(entry)
            }
            Err(e) => Err(self.fail(CartError::AddFailure(e))),
        }
    }

    /// Delete the entry remotely, then drop the first local entry with that id.
    ///
    /// The remote call is made even when no local entry matches. Returns
    /// whether a local entry was removed.
    pub async fn remove_item(&self, remote_id: &str) -> Result<bool, CartError> {
        match self.api.delete_entry(remote_id).await {
            Ok(()) => {
                let removed = self.settle(|state| {
                    let removed = state.remove_first(remote_id);
                    self.clear_error(state);
                    removed
                });
                if removed {
                    tracing::info!(remote_id, "removed from cart");
                } else {
                    tracing::debug!(remote_id, "remote delete succeeded, no local entry");
                }
                Ok(removed)
            }
            Err(e) => Err(self.fail(CartError::RemoveFailure(e))),
        }
    }

    pub fn compute_total(&self) -> f64 {
        lock(&self.state).total()
    }

    pub fn snapshot(&self) -> CartState {
        lock(&self.state).clone()
    }

    pub fn last_error(&self) -> Option<String> {
        lock(&self.state).last_error.clone()
    }

    /// Clear the error slot (user closed the banner)
    pub fn dismiss_error(&self) {
        self.settle(|state| state.last_error = None);
    }

    /// Register `observer` to receive new snapshots.
    ///
    /// Observers run after the state lock is released and are never called
    /// concurrently. Snapshots superseded while a delivery is in progress are
    /// skipped in favour of the newer state. An observer may call back into
    /// the synchronizer; the resulting state is delivered after it returns.
    pub fn subscribe<F>(&self, observer: F) -> SubscriptionId
    where
        F: Fn(&CartState) + Send + Sync + 'static,
    {
        let mut observers = lock(&self.observers);
        observers.next_id += 1;
        let id = SubscriptionId(observers.next_id);
        observers.entries.push((id, Arc::new(observer)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut observers = lock(&self.observers);
        let before = observers.entries.len();
        observers.entries.retain(|(existing, _)| *existing != id);
        observers.entries.len() != before
    }

    fn clear_error(&self, state: &mut CartState) {
        if self.error_policy == ErrorPolicy::ClearOnSuccess {
            state.last_error = None;
        }
    }

    /// Record `err` in the error slot and hand it back
    fn fail(&self, err: CartError) -> CartError {
        tracing::warn!(error = %err, cause = %err.cause(), "cart operation failed");
        let message = err.to_string();
        self.settle(|state| state.last_error = Some(message));
        err
    }

    /// Apply one mutation, bump the version and notify observers
    fn settle<T>(&self, apply: impl FnOnce(&mut CartState) -> T) -> T {
        let out = {
            let mut state = lock(&self.state);
            let out = apply(&mut state);
            state.version += 1;
            out
        };
        self.deliver();
        out
    }

    /// Hand the current state to observers.
    ///
    /// Only one caller delivers at a time. A settlement that lands during a
    /// delivery (from another task, or from an observer) marks it pending and
    /// returns; the active deliverer then re-reads the state before finishing.
    fn deliver(&self) {
        {
            let mut delivery = lock(&self.delivery);
            if delivery.active {
                delivery.pending = true;
                return;
            }
            delivery.active = true;
        }
        loop {
            let snapshot = self.snapshot();
            let observers: Vec<Observer> = lock(&self.observers)
                .entries
                .iter()
                .map(|(_, observer)| Arc::clone(observer))
                .collect();
            for observer in observers {
                observer(&snapshot);
            }

            let mut delivery = lock(&self.delivery);
            if !delivery.pending {
                delivery.active = false;
                break;
            }
            delivery.pending = false;
        }
    }
}
