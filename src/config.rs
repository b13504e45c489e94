//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::id::DEFAULT_ID_LENGTH;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Admin username for the management API
    pub admin_username: String,
    /// Admin password for the management API
    pub admin_password: String,
    /// Base URL used to construct displayed short links
    pub base_url: String,
    /// HTTP server port
    pub server_port: u16,
    /// Length of generated short identifiers
    pub short_id_length: usize,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `ADMIN_USERNAME` - Admin account name (default: "admin")
    /// - `ADMIN_PASSWORD` - Admin account password (default: "admin")
    /// - `BASE_URL` - Origin for displayed short links (default: "http://localhost:3000")
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `SHORT_ID_LENGTH` - Generated identifier length (default: 6)
    pub fn from_env() -> Self {
        Self {
            admin_username: env::var("ADMIN_USERNAME").unwrap_or_else(|_| "admin".to_string()),
            admin_password: env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin".to_string()),
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
            short_id_length: env::var("SHORT_ID_LENGTH")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_ID_LENGTH),
        }
    }

    /// Returns true if the admin account still uses the default credentials.
    pub fn uses_default_credentials(&self) -> bool {
        self.admin_username == "admin" && self.admin_password == "admin"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
            base_url: "http://localhost:3000".to_string(),
            server_port: 3000,
            short_id_length: DEFAULT_ID_LENGTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.short_id_length, 6);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("ADMIN_USERNAME");
        env::remove_var("ADMIN_PASSWORD");
        env::remove_var("BASE_URL");
        env::remove_var("SERVER_PORT");
        env::remove_var("SHORT_ID_LENGTH");

        let config = Config::from_env();
        assert_eq!(config.admin_username, "admin");
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.short_id_length, 6);
    }

    #[test]
    fn test_default_credentials_probe() {
        let mut config = Config::default();
        assert!(config.uses_default_credentials());

        config.admin_password = "s3cret".to_string();
        assert!(!config.uses_default_credentials());
    }
}
