//! # Store Connection Configuration
//!
//! The four connection values the facade needs before it will touch the
//! store: endpoint URL, access key, database name, container name. Read
//! once from the process environment at startup; validated per request
//! with a deterministic first-missing-field report.

use serde::Serialize;

/// Environment variable holding the store endpoint URL.
pub const ENV_ENDPOINT: &str = "COSMOS_URL";
/// Environment variable holding the store access key.
pub const ENV_KEY: &str = "COSMOS_KEY";
/// Environment variable holding the database name.
pub const ENV_DATABASE: &str = "COSMOS_DATABASE";
/// Environment variable holding the container name.
pub const ENV_CONTAINER: &str = "COSMOS_CONTAINER";

/// Store connection configuration, possibly incomplete.
///
/// Values are `None` when the variable is unset or empty; validation
/// decides whether the facade is usable.
#[derive(Debug, Clone, Default)]
pub struct StoreConfig {
    pub endpoint: Option<String>,
    pub key: Option<String>,
    pub database: Option<String>,
    pub container: Option<String>,
}

/// Borrowed view of a configuration that passed validation.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedConfig<'a> {
    pub endpoint: &'a str,
    pub key: &'a str,
    pub database: &'a str,
    pub container: &'a str,
}

/// The caller-visible echo of a failing configuration.
///
/// The access key is deliberately excluded; absent values serialize as
/// `null` so the caller can see exactly which fields were missing.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigEcho {
    pub endpoint: Option<String>,
    pub database: Option<String>,
    pub container: Option<String>,
}

impl StoreConfig {
    /// Read the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build the configuration from any name-to-value lookup.
    ///
    /// Empty values count as missing. Tests inject a closure here
    /// instead of mutating the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let value = |name: &str| lookup(name).filter(|v| !v.is_empty());
        Self {
            endpoint: value(ENV_ENDPOINT),
            key: value(ENV_KEY),
            database: value(ENV_DATABASE),
            container: value(ENV_CONTAINER),
        }
    }

    /// Validate the configuration.
    ///
    /// Checks in fixed order (endpoint, key, database, container) and
    /// reports the first missing field only — never an aggregate.
    pub fn validate(&self) -> Result<ResolvedConfig<'_>, &'static str> {
        let endpoint = self.endpoint.as_deref().ok_or("endpoint")?;
        let key = self.key.as_deref().ok_or("key")?;
        let database = self.database.as_deref().ok_or("database")?;
        let container = self.container.as_deref().ok_or("container")?;
        Ok(ResolvedConfig {
            endpoint,
            key,
            database,
            container,
        })
    }

    /// Build the caller-visible echo (key excluded).
    pub fn echo(&self) -> ConfigEcho {
        ConfigEcho {
            endpoint: self.endpoint.clone(),
            database: self.database.clone(),
            container: self.container.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_config() -> StoreConfig {
        StoreConfig {
            endpoint: Some("https://store.example.com:443/".to_string()),
            key: Some("secret".to_string()),
            database: Some("doktool".to_string()),
            container: Some("prompts".to_string()),
        }
    }

    #[test]
    fn test_complete_config_validates() {
        let config = full_config();
        let resolved = config.validate().unwrap();
        assert_eq!(resolved.database, "doktool");
        assert_eq!(resolved.container, "prompts");
    }

    #[test]
    fn test_first_missing_field_wins() {
        // endpoint and key present, database and container missing:
        // the reported field must be database, not container.
        let config = StoreConfig {
            database: None,
            container: None,
            ..full_config()
        };
        assert_eq!(config.validate().unwrap_err(), "database");

        let config = StoreConfig::default();
        assert_eq!(config.validate().unwrap_err(), "endpoint");

        let config = StoreConfig {
            endpoint: Some("https://store.example.com/".to_string()),
            ..StoreConfig::default()
        };
        assert_eq!(config.validate().unwrap_err(), "key");
    }

    #[test]
    fn test_echo_excludes_key() {
        let config = full_config();
        let echo = serde_json::to_value(config.echo()).unwrap();
        assert!(echo.get("key").is_none());
        assert_eq!(echo["endpoint"], "https://store.example.com:443/");
        assert_eq!(echo["container"], "prompts");
    }

    #[test]
    fn test_echo_serializes_missing_as_null() {
        let config = StoreConfig {
            endpoint: None,
            ..full_config()
        };
        let echo = serde_json::to_value(config.echo()).unwrap();
        assert!(echo["endpoint"].is_null());
        assert_eq!(echo["database"], "doktool");
    }

    #[test]
    fn test_lookup_treats_empty_as_missing() {
        let vars = [
            (ENV_ENDPOINT, "https://store.example.com/"),
            (ENV_KEY, ""),
            (ENV_CONTAINER, "prompts"),
        ];
        let config = StoreConfig::from_lookup(|name| {
            vars.iter()
                .find(|(var, _)| *var == name)
                .map(|(_, value)| value.to_string())
        });

        assert_eq!(config.endpoint.as_deref(), Some("https://store.example.com/"));
        assert_eq!(config.key, None);
        assert_eq!(config.database, None);
        assert_eq!(config.container.as_deref(), Some("prompts"));
    }
}
