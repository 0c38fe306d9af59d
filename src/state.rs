//! Shared application state for request handlers.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::credentials::CredentialRecord;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the credential record built
/// from it at startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub record: Arc<CredentialRecord>,
}

impl AppState {
    /// Creates a new application state from the given configuration and record.
    pub fn new(config: AppConfig, record: CredentialRecord) -> Self {
        Self {
            config: Arc::new(config),
            record: Arc::new(record),
        }
    }
}
