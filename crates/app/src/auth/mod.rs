//! Authentication

mod errors;
pub mod firebase;
mod models;
mod service;

pub use errors::*;
pub use firebase::{DEFAULT_IDENTITY_URL, FirebaseAuthClient, FirebaseConfig};
pub use models::*;
pub use service::*;
