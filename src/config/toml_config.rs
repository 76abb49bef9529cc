use crate::core::cart::DEFAULT_CART_KEY;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::Validate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:3333";
pub const DEFAULT_STORAGE_PATH: &str = "./.rocket-cart/storage.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CartConfig {
    pub inventory: InventoryConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryConfig {
    pub endpoint: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default = "default_key")]
    pub key: String,
}

fn default_storage_path() -> String {
    DEFAULT_STORAGE_PATH.to_string()
}

fn default_key() -> String {
    DEFAULT_CART_KEY.to_string()
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_seconds: Some(10),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            key: default_key(),
        }
    }
}

impl CartConfig {
    /// Loads the configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| CartError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses the configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CartError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static PATTERN: OnceLock<Regex> = OnceLock::new();
        let re = PATTERN.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("environment variable pattern is valid")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for CartConfig {
    fn validate(&self) -> Result<()> {
        use crate::utils::validation::*;

        validate_url("inventory.endpoint", &self.inventory.endpoint)?;
        if let Some(timeout) = self.inventory.timeout_seconds {
            validate_range("inventory.timeout_seconds", timeout, 1, 300)?;
        }
        validate_path("storage.path", &self.storage.path)?;
        validate_non_empty_string("storage.key", &self.storage.key)?;

        tracing::debug!("Cart configuration validation passed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[inventory]
endpoint = "http://inventory.local:3333"
timeout_seconds = 5

[storage]
path = "/tmp/cart.json"
key = "@Shop:cart"
"#;

        let config = CartConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.inventory.endpoint, "http://inventory.local:3333");
        assert_eq!(config.inventory.timeout_seconds, Some(5));
        assert_eq!(config.storage.path, "/tmp/cart.json");
        assert_eq!(config.storage.key, "@Shop:cart");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_storage_section_defaults() {
        let config = CartConfig::from_toml_str(
            r#"
[inventory]
endpoint = "http://localhost:3333"
"#,
        )
        .unwrap();

        assert_eq!(config.storage, StorageConfig::default());
        assert_eq!(config.storage.key, "@RocketShoes:cart");
        assert_eq!(config.inventory.timeout_seconds, None);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ROCKET_CART_TEST_ENDPOINT", "https://stock.example.com");

        let config = CartConfig::from_toml_str(
            r#"
[inventory]
endpoint = "${ROCKET_CART_TEST_ENDPOINT}"
"#,
        )
        .unwrap();
        assert_eq!(config.inventory.endpoint, "https://stock.example.com");

        std::env::remove_var("ROCKET_CART_TEST_ENDPOINT");
    }

    #[test]
    fn test_config_validation() {
        let mut config = CartConfig::default();
        assert!(config.validate().is_ok());

        config.inventory.endpoint = "invalid-url".to_string();
        assert!(config.validate().is_err());

        let mut config = CartConfig::default();
        config.inventory.timeout_seconds = Some(0);
        assert!(config.validate().is_err());

        let mut config = CartConfig::default();
        config.storage.key = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CartConfig::from_toml_str("[inventory").unwrap_err();
        assert!(matches!(err, CartError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[inventory]\nendpoint = \"https://api.example.com\"\n")
            .unwrap();

        let config = CartConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.inventory.endpoint, "https://api.example.com");
    }
}
