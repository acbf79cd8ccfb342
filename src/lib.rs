//! Wavecart
//!
//! Wavecart is the state core of a storefront client: cart, favorites, order
//! history, session and category stores, plus the paging, sorting and search
//! bookkeeping the catalog views rely on. It performs no I/O; fetching is left
//! to the caller.

pub mod cart;
pub mod categories;
pub mod checkout;
pub mod favorites;
pub mod highlights;
pub mod listeners;
pub mod orders;
pub mod pagination;
pub mod prelude;
pub mod pricing;
pub mod products;
pub mod receipt;
pub mod search;
pub mod session;
pub mod sorting;
