//! Catalog views

pub mod listing;
pub mod product;
pub mod search;

pub use listing::{ListingSource, ProductListing};
pub use product::{DetailState, ProductDetail};
pub use search::SearchBox;
