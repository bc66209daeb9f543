//! Marketplace Cart Core
//!
//! - catalog: fixed list of purchasable items
//! - synchronizer: local cart state mirrored to a remote collection
//! - api: the remote collection interface and its HTTP client

mod api;
mod catalog;
mod config;
mod error;
mod models;
mod synchronizer;

pub use api::{CartApi, HttpCartApi, MaybeSendSync};
pub use catalog::Catalog;
pub use config::{CartConfig, ErrorPolicy, DEFAULT_API_BASE};
pub use error::{ApiError, CartError, ConfigError};
pub use models::{total, CartEntry, CartState, Item, NewEntry, RemoteEntry};
pub use synchronizer::{CartSynchronizer, HttpCartSynchronizer, SubscriptionId};
