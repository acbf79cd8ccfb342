//! Product catalog

pub mod client;
mod errors;
mod models;
mod service;
#[cfg(test)]
pub(crate) mod testing;

pub use client::{CatalogConfig, DEFAULT_CATALOG_URL, HttpCatalogClient};
pub use errors::*;
pub use models::*;
pub use service::*;
