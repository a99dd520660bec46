//! Configuration module for the export service

use serde::Deserialize;
use config::{Config, ConfigError, Environment, File};
use std::fmt;
use std::path::PathBuf;

/// Main application settings
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub marketplaces: MarketplaceSettings,
    pub enrichment: EnrichmentSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Credentials and endpoints for every marketplace
#[derive(Debug, Clone, Deserialize)]
pub struct MarketplaceSettings {
    pub mercado_livre: MercadoLivreSettings,
    pub shopee: ShopeeSettings,
}

/// Mercado Livre configuration
#[derive(Clone, Deserialize)]
pub struct MercadoLivreSettings {
    /// OAuth access token (`MERCADO_LIVRE_ACCESS_TOKEN`)
    #[serde(default)]
    pub access_token: Option<String>,
    pub endpoint: String,
}

/// Shopee configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ShopeeSettings {
    /// Partner identifier (`SHOPEE_PARTNER_ID`)
    #[serde(default)]
    pub partner_id: Option<String>,
    pub endpoint: String,
}

/// Generative AI configuration for product enrichment
#[derive(Clone, Deserialize)]
pub struct EnrichmentSettings {
    /// Gemini API key (`GEMINI_API_KEY`)
    #[serde(default)]
    pub api_key: Option<String>,
    pub endpoint: String,
    pub model: String,
}

impl fmt::Debug for MercadoLivreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MercadoLivreSettings")
            .field("access_token", &self.access_token.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl fmt::Debug for EnrichmentSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnrichmentSettings")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish()
    }
}

/// Unprefixed variables kept for compatibility with existing deployments
const CREDENTIAL_VARS: [(&str, &str); 3] = [
    ("marketplaces.mercado_livre.access_token", "MERCADO_LIVRE_ACCESS_TOKEN"),
    ("marketplaces.shopee.partner_id", "SHOPEE_PARTNER_ID"),
    ("enrichment.api_key", "GEMINI_API_KEY"),
];

impl Settings {
    /// Load configuration from files and environment variables
    ///
    /// Configuration priority (highest to lowest):
    /// 1. `MERCADO_LIVRE_ACCESS_TOKEN`, `SHOPEE_PARTNER_ID`, `GEMINI_API_KEY`
    /// 2. Environment variables (prefixed with FYNTRA_)
    /// 3. config/local.toml (gitignored)
    /// 4. config/default.toml
    /// 5. Built-in defaults
    pub fn load() -> Result<Self, ConfigError> {
        let config_dir = std::env::var("CONFIG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("config"));

        let mut builder = Self::with_defaults(Config::builder())?
            .add_source(File::from(config_dir.join("default.toml")).required(false))
            .add_source(File::from(config_dir.join("local.toml")).required(false))
            // FYNTRA__SERVER__PORT, FYNTRA__MARKETPLACES__SHOPEE__ENDPOINT, etc.
            .add_source(
                Environment::with_prefix("FYNTRA")
                    .separator("__")
                    .try_parsing(true)
            );

        for (key, var) in CREDENTIAL_VARS {
            let value = std::env::var(var).ok().filter(|v| !v.trim().is_empty());
            builder = builder.set_override_option(key, value)?;
        }

        builder.build()?.try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        builder
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("marketplaces.mercado_livre.endpoint", defaults.marketplaces.mercado_livre.endpoint)?
            .set_default("marketplaces.shopee.endpoint", defaults.marketplaces.shopee.endpoint)?
            .set_default("enrichment.endpoint", defaults.enrichment.endpoint)?
            .set_default("enrichment.model", defaults.enrichment.model)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            server: ServerSettings {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: None,
            },
            marketplaces: MarketplaceSettings {
                mercado_livre: MercadoLivreSettings {
                    access_token: None,
                    endpoint: "https://api.mercadolibre.com/items".to_string(),
                },
                shopee: ShopeeSettings {
                    partner_id: None,
                    endpoint: "https://partner.shopeemobile.com/api/v2/product/add_item".to_string(),
                },
            },
            enrichment: EnrichmentSettings {
                api_key: None,
                endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
                model: "gemini-3-flash-preview".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_deserialize_without_files() {
        let settings: Settings = Settings::with_defaults(Config::builder())
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.marketplaces.mercado_livre.endpoint, "https://api.mercadolibre.com/items");
        assert!(settings.marketplaces.mercado_livre.access_token.is_none());
        assert!(settings.marketplaces.shopee.partner_id.is_none());
        assert_eq!(settings.enrichment.model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_override_sets_credential() {
        let settings: Settings = Settings::with_defaults(Config::builder())
            .unwrap()
            .set_override_option("marketplaces.shopee.partner_id", Some("200123"))
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.marketplaces.shopee.partner_id.as_deref(), Some("200123"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let mut settings = Settings::default();
        settings.marketplaces.mercado_livre.access_token = Some("APP_USR-secret".to_string());
        settings.enrichment.api_key = Some("AIza-secret".to_string());

        let printed = format!("{:?}", settings);
        assert!(!printed.contains("APP_USR-secret"));
        assert!(!printed.contains("AIza-secret"));
    }
}
