//! Application state module
//!
//! Defines shared state accessible across all request handlers.

use std::sync::Arc;

use crate::config::BasicAuthCredentials;
use crate::db::{ProductRepository, UserRepository};

/// Application state containing shared resources.
///
/// Repositories are `None` when the database was not reachable at startup;
/// data routes then answer 503 instead of crashing the process.
#[derive(Clone)]
pub struct AppState {
    /// Product repository for catalog data
    pub products: Option<Arc<ProductRepository>>,
    /// User repository for login checks
    pub users: Option<Arc<UserRepository>>,
    /// Basic-auth pair; `None` disables the auth gate
    pub basic_auth: Option<BasicAuthCredentials>,
}

impl AppState {
    /// State without a database or auth gate (for tests).
    pub fn detached() -> Self {
        Self {
            products: None,
            users: None,
            basic_auth: None,
        }
    }
}
