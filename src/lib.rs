//! Library entrypoint for the order store.
//!
//! The binary only bootstraps the database; tests under `tests/` import the
//! record, the stores and the settings from here.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use error::StoreError;
pub use models::Order;
