//! Storefront collaborators, views and process setup around the `wavecart`
//! state core.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod context;
pub mod notices;
pub mod observability;
pub mod shared;
pub mod views;
