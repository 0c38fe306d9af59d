//! The database connection credential record served by the broker.

use std::fmt;

use serde::Serialize;

use crate::config::CredentialConfig;

/// The set of database connection fields returned on the root path.
///
/// Constructed once at startup from configuration and never mutated.
/// Serialization follows declaration order, so the JSON body is
/// byte-identical across requests.
#[derive(Clone, Serialize)]
pub struct CredentialRecord {
    pub server: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl CredentialRecord {
    /// Build the record from the `[credentials]` config section.
    pub fn from_config(config: &CredentialConfig) -> Self {
        Self {
            server: config.server.clone(),
            database: config.database.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }
}

// The record gets logged at startup; the password must never reach the logs.
impl fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("server", &self.server)
            .field("database", &self.database)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let record = CredentialRecord::from_config(&CredentialConfig::default());
        let debug = format!("{:?}", record);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("password_goes_here"));
    }

    #[test]
    fn serializes_in_declaration_order() {
        let record = CredentialRecord {
            server: "s".to_string(),
            database: "d".to_string(),
            username: "u".to_string(),
            password: "p".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"server":"s","database":"d","username":"u","password":"p"}"#
        );
    }
}
