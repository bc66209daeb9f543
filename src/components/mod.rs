//! UI Components
//!
//! Marketplace and Cart views.

mod cart;
mod error_banner;
mod marketplace;

pub use cart::Cart;
pub use error_banner::ErrorBanner;
pub use marketplace::Marketplace;
