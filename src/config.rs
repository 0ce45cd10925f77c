use std::env;

use crate::models::{ConfigSnapshot, RouteEntry};
use crate::privileges::{PrivilegeEntry, USER_PRIVILEGES};
use crate::routes::{BASE_API_PATH, Route};

/// Environment variable holding the API URL override
pub const API_URL_ENV_VAR: &str = "NEXT_PUBLIC_FIDESOPS_API";

/// Key under which session credentials are persisted
pub const STORED_CREDENTIALS_KEY: &str = "auth.fidesops-admin-ui";

/// Admin UI configuration, built once at startup and passed to consumers
/// by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminUiConfig {
    api_url: Option<String>,
    base_url: String,
}

impl AdminUiConfig {
    /// Read the API URL override from `NEXT_PUBLIC_FIDESOPS_API`.
    ///
    /// A missing, empty or non-UTF-8 value means no override and the base URL
    /// stays relative.
    pub fn from_env() -> Self {
        let api_url = env::var(API_URL_ENV_VAR).ok();
        Self::with_api_url(api_url.as_deref())
    }

    pub fn with_api_url(api_url: Option<&str>) -> Self {
        let api_url = api_url.filter(|url| !url.is_empty()).map(str::to_string);

        if let Some(url) = &api_url {
            tracing::debug!("Using API URL override: {}", url);
        }

        let base_url = format!("{}{}", api_url.as_deref().unwrap_or(""), BASE_API_PATH);

        AdminUiConfig { api_url, base_url }
    }

    /// The override this config was built with, if any
    pub fn api_url(&self) -> Option<&str> {
        self.api_url.as_deref()
    }

    pub fn base_api_path(&self) -> &'static str {
        BASE_API_PATH
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn credentials_storage_key(&self) -> &'static str {
        STORED_CREDENTIALS_KEY
    }

    pub fn privilege_catalog(&self) -> &'static [PrivilegeEntry] {
        USER_PRIVILEGES
    }

    pub fn route(&self, route: Route) -> &'static str {
        route.path()
    }

    pub fn snapshot(&self) -> ConfigSnapshot {
        ConfigSnapshot {
            base_api_path: BASE_API_PATH,
            base_url: self.base_url.clone(),
            credentials_storage_key: STORED_CREDENTIALS_KEY,
            routes: Route::ALL.into_iter().map(RouteEntry::from).collect(),
            privileges: USER_PRIVILEGES,
        }
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!(
            "  API URL override: {}",
            self.api_url.as_deref().unwrap_or("none (relative base URL)")
        );
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Credentials storage key: {}", STORED_CREDENTIALS_KEY);
        tracing::info!("  Privileges: {}", USER_PRIVILEGES.len());
        tracing::info!("  Routes: {}", Route::ALL.len());
    }
}

impl Default for AdminUiConfig {
    fn default() -> Self {
        Self::with_api_url(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_without_override() {
        let config = AdminUiConfig::with_api_url(None);

        assert_eq!(config.base_url(), "/api/v1");
        assert_eq!(config.api_url(), None);
        assert_eq!(config, AdminUiConfig::default());
    }

    #[test]
    fn test_base_url_with_override() {
        let config = AdminUiConfig::with_api_url(Some("https://example.com"));

        assert_eq!(config.base_url(), "https://example.com/api/v1");
        assert_eq!(config.api_url(), Some("https://example.com"));
        assert_eq!(config.base_api_path(), "/api/v1");
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let config = AdminUiConfig::with_api_url(Some(""));

        assert_eq!(config.base_url(), "/api/v1");
        assert_eq!(config.api_url(), None);
    }

    #[test]
    fn test_override_used_verbatim() {
        // No slash normalisation
        let config = AdminUiConfig::with_api_url(Some("http://localhost:8080/"));
        assert_eq!(config.base_url(), "http://localhost:8080//api/v1");
    }

    #[test]
    fn test_from_env() {
        unsafe {
            env::set_var(API_URL_ENV_VAR, "https://ops.example.org");
        }
        let config = AdminUiConfig::from_env();
        assert_eq!(config.base_url(), "https://ops.example.org/api/v1");

        unsafe {
            env::remove_var(API_URL_ENV_VAR);
        }
        let config = AdminUiConfig::from_env();
        assert_eq!(config.base_url(), "/api/v1");
    }

    #[test]
    fn test_credentials_storage_key_stable() {
        let config = AdminUiConfig::default();

        assert_eq!(config.credentials_storage_key(), "auth.fidesops-admin-ui");
        assert_eq!(
            config.credentials_storage_key(),
            config.credentials_storage_key()
        );
    }

    #[test]
    fn test_catalog_same_on_every_read() {
        let config = AdminUiConfig::default();
        let first = config.privilege_catalog();
        let second = config.privilege_catalog();

        assert_eq!(first, second);
        assert_eq!(first[0].scope, "privacy-request:read");
        assert_eq!(first[22].scope, "webhook:delete");
    }

    #[test]
    fn test_route_lookup() {
        let config = AdminUiConfig::default();

        assert_eq!(config.route(Route::Login), "/login");
        assert_eq!(config.route(Route::DatastoreConnection), "/datastore-connection");
    }

    #[test]
    fn test_snapshot_json() {
        let config = AdminUiConfig::with_api_url(Some("https://example.com"));
        let json = serde_json::to_value(config.snapshot()).unwrap();

        assert_eq!(json["base_api_path"], "/api/v1");
        assert_eq!(json["base_url"], "https://example.com/api/v1");
        assert_eq!(json["credentials_storage_key"], "auth.fidesops-admin-ui");
        assert_eq!(json["privileges"].as_array().unwrap().len(), 23);

        let routes = json["routes"].as_array().unwrap();
        assert_eq!(routes.len(), 6);
        assert_eq!(
            routes[4],
            serde_json::json!({
                "name": "connection-type",
                "path": "/connection_type",
                "group": "api",
            })
        );
        assert_eq!(routes[5]["group"], "ui");
    }
}
