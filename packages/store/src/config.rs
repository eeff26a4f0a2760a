//! # Client configuration — `cropshare.toml`
//!
//! Defines the TOML configuration file the client reads at startup
//! (filename: [`CropshareConfig::filename`] = `"cropshare.toml"`). On native
//! targets [`CropshareConfig::load_or_default`] looks for the file in the
//! working directory; in the browser the compiled-in defaults apply.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8080"   # the CropShare API server
//!
//! [display]
//! currency_symbol = "$"
//! ```
//!
//! All structs derive or implement `Default` with production defaults, so a
//! missing or partial config file is equivalent to the default configuration.

use serde::{Deserialize, Serialize};

/// Top-level configuration stored in `cropshare.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CropshareConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

/// API-server section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the CropShare API, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// Presentation section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Symbol prefixed to every money figure.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

impl CropshareConfig {
    /// Create a config pointing at the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
            display: DisplayConfig::default(),
        }
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "cropshare.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Read `cropshare.toml` from the working directory, falling back to
    /// defaults when the file is missing or malformed. Browser builds always
    /// get the defaults.
    pub fn load_or_default() -> Self {
        #[cfg(not(target_arch = "wasm32"))]
        {
            std::fs::read_to_string(Self::filename())
                .ok()
                .and_then(|s| Self::from_toml(&s).ok())
                .unwrap_or_default()
        }
        #[cfg(target_arch = "wasm32")]
        {
            Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CropshareConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
            [api]
            base_url = "https://api.cropshare.example"

            [display]
            currency_symbol = "Rs "
        "#;
        let config = CropshareConfig::from_toml(toml).unwrap();
        assert_eq!(config.api.base_url, "https://api.cropshare.example");
        assert_eq!(config.display.currency_symbol, "Rs ");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let toml = r#"
            [api]
            base_url = "http://10.0.0.5:8080"
        "#;
        let config = CropshareConfig::from_toml(toml).unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.5:8080");
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = CropshareConfig::from_toml("").unwrap();
        assert_eq!(config, CropshareConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = CropshareConfig::new("https://farm.example:8443".to_string());
        let toml = config.to_toml().unwrap();
        let back = CropshareConfig::from_toml(&toml).unwrap();
        assert_eq!(back, config);
    }
}
