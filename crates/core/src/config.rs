//! Site configuration

use crate::routes::{normalize_path, resolve};
use crate::{Error, Result};
use ::config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Default `localStorage` key for the admin token
pub const DEFAULT_TOKEN_KEY: &str = "adminToken";

/// Default `localStorage` key for the token expiry (epoch milliseconds)
pub const DEFAULT_EXPIRY_KEY: &str = "adminTokenExpiry";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub storage: StorageKeys,
    pub routes: RouteConfig,
    pub session: SessionConfig,
}

/// Where the admin session lives in client storage
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub token_key: String,
    pub expiry_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            token_key: DEFAULT_TOKEN_KEY.to_string(),
            expiry_key: DEFAULT_EXPIRY_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RouteConfig {
    /// Where the guard sends unauthenticated visitors
    pub login_path: String,
    /// Where the guard sends authenticated visitors away from login
    pub dashboard_path: String,
}

impl Default for RouteConfig {
    fn default() -> Self {
        Self {
            login_path: "/admin-login".to_string(),
            dashboard_path: "/admin".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Lifetime of a token stored by the login page
    pub ttl_secs: u64,
    /// How often the dashboard re-checks the stored expiry
    pub revalidate_interval_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            ttl_secs: 3600,
            revalidate_interval_ms: 60_000, // 1 minute
        }
    }
}

impl SessionConfig {
    pub fn ttl_millis(&self) -> i64 {
        i64::try_from(self.ttl_secs)
            .unwrap_or(i64::MAX)
            .saturating_mul(1000)
    }
}

impl SiteConfig {
    /// Parse a TOML document layered over the defaults
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config = Config::builder()
            .add_source(Config::try_from(&Self::default())?)
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()?;

        let site: Self = config.try_deserialize()?;
        site.validate()?;
        Ok(site)
    }

    /// Check the configured paths against the route table
    pub fn validate(&self) -> Result<()> {
        if self.storage.token_key.is_empty() || self.storage.expiry_key.is_empty() {
            return Err(Error::invalid_config("storage keys must not be empty"));
        }
        if self.storage.token_key == self.storage.expiry_key {
            return Err(Error::invalid_config(
                "token_key and expiry_key must be different",
            ));
        }

        let login = resolve(&self.routes.login_path).ok_or_else(|| {
            Error::invalid_config(format!(
                "login_path {} is not a known route",
                self.routes.login_path
            ))
        })?;
        if login.requires_auth {
            return Err(Error::invalid_config(format!(
                "login_path {} must not require authentication",
                login.path
            )));
        }

        let dashboard = resolve(&self.routes.dashboard_path).ok_or_else(|| {
            Error::invalid_config(format!(
                "dashboard_path {} is not a known route",
                self.routes.dashboard_path
            ))
        })?;
        if !dashboard.requires_auth {
            return Err(Error::invalid_config(format!(
                "dashboard_path {} must require authentication",
                dashboard.path
            )));
        }

        if self.session.ttl_secs == 0 {
            return Err(Error::invalid_config("ttl_secs must be positive"));
        }
        if self.session.revalidate_interval_ms == 0 {
            return Err(Error::invalid_config(
                "revalidate_interval_ms must be positive",
            ));
        }
        Ok(())
    }

    pub fn login_path(&self) -> &str {
        normalize_path(&self.routes.login_path)
    }

    pub fn dashboard_path(&self) -> &str {
        normalize_path(&self.routes.dashboard_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        config.validate().unwrap();
        assert_eq!(config.storage.token_key, "adminToken");
        assert_eq!(config.storage.expiry_key, "adminTokenExpiry");
        assert_eq!(config.login_path(), "/admin-login");
        assert_eq!(config.dashboard_path(), "/admin");
        assert_eq!(config.session.ttl_millis(), 3_600_000);
    }

    #[test]
    fn test_empty_document_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_override() {
        let config = SiteConfig::from_toml_str(
            r#"
            [storage]
            token_key = "folioToken"

            [session]
            ttl_secs = 900
            "#,
        )
        .unwrap();

        assert_eq!(config.storage.token_key, "folioToken");
        assert_eq!(config.storage.expiry_key, DEFAULT_EXPIRY_KEY);
        assert_eq!(config.session.ttl_secs, 900);
        assert_eq!(config.session.revalidate_interval_ms, 60_000);
        assert_eq!(config.routes, RouteConfig::default());
    }

    #[test]
    fn test_trailing_slash_paths_accepted() {
        let config = SiteConfig::from_toml_str(
            r#"
            [routes]
            login_path = "/admin-login/"
            "#,
        )
        .unwrap();
        assert_eq!(config.login_path(), "/admin-login");
    }

    #[test]
    fn test_unknown_login_path_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
            [routes]
            login_path = "/login"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }), "{err}");
    }

    #[test]
    fn test_public_dashboard_rejected() {
        let err = SiteConfig::from_toml_str(
            r#"
            [routes]
            dashboard_path = "/projects"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must require authentication"));
    }

    #[test]
    fn test_protected_login_rejected() {
        let mut config = SiteConfig::default();
        config.routes.login_path = "/admin".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_same_storage_keys_rejected() {
        let mut config = SiteConfig::default();
        config.storage.expiry_key = config.storage.token_key.clone();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_ttl_rejected() {
        let err = SiteConfig::from_toml_str("[session]\nttl_secs = 0\n").unwrap_err();
        assert!(err.to_string().contains("ttl_secs"));
    }

    #[test]
    fn test_malformed_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("[storage\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
