//! Storefront configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use kallpa_commerce::cart::PricingPolicy;
use kallpa_commerce::search::PriceRange;
use kallpa_commerce::Currency;
use serde::{Deserialize, Serialize};

/// Storefront configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    /// Currency code for catalog prices (default: USD).
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Shipping and tax.
    #[serde(default)]
    pub pricing: PricingConfig,

    /// Catalog page defaults.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Checkout behavior.
    #[serde(default)]
    pub checkout: CheckoutConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            pricing: PricingConfig::default(),
            catalog: CatalogConfig::default(),
            checkout: CheckoutConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl StorefrontConfig {
    /// Load config from a file; `.json` files are parsed as JSON, anything
    /// else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse config from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.currency()?;
        anyhow::ensure!(
            self.pricing.shipping_flat >= 0.0,
            "pricing.shipping_flat must not be negative"
        );
        anyhow::ensure!(
            (0.0..=100.0).contains(&self.pricing.tax_percent),
            "pricing.tax_percent must be between 0 and 100"
        );
        anyhow::ensure!(
            self.catalog.price_min <= self.catalog.price_max,
            "catalog.price_min must not exceed catalog.price_max"
        );
        Ok(())
    }

    /// The configured currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .with_context(|| format!("Unsupported currency: {}", self.currency))
    }

    pub fn pricing_policy(&self) -> PricingPolicy {
        PricingPolicy {
            shipping_flat: self.pricing.shipping_flat,
            tax_percent: self.pricing.tax_percent,
        }
    }

    /// Initial price slider bounds.
    pub fn price_range(&self) -> PriceRange {
        PriceRange::from_major(self.catalog.price_min, self.catalog.price_max)
    }
}

/// Shipping and tax configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingConfig {
    /// Flat shipping per order, in major units (default: 25.00).
    #[serde(default = "default_shipping_flat")]
    pub shipping_flat: f64,

    /// Tax percentage applied to the subtotal (default: 18).
    #[serde(default = "default_tax_percent")]
    pub tax_percent: f64,
}

fn default_shipping_flat() -> f64 {
    PricingPolicy::default().shipping_flat
}

fn default_tax_percent() -> f64 {
    PricingPolicy::default().tax_percent
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            shipping_flat: default_shipping_flat(),
            tax_percent: default_tax_percent(),
        }
    }
}

/// Catalog page configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// Lower price slider bound, in major units (default: 0).
    #[serde(default)]
    pub price_min: f64,

    /// Upper price slider bound, in major units (default: 500).
    #[serde(default = "default_price_max")]
    pub price_max: f64,
}

fn default_price_max() -> f64 {
    500.0
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            price_min: 0.0,
            price_max: default_price_max(),
        }
    }
}

/// Checkout configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CheckoutConfig {
    /// Simulated order processing time in milliseconds (default: 2000).
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    2000
}

impl CheckoutConfig {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for CheckoutConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, e.g. "info" or "kallpa_commerce=debug" (default: info).
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = StorefrontConfig::from_toml("").unwrap();
        assert_eq!(config.currency().unwrap(), Currency::USD);
        assert_eq!(config.pricing_policy(), PricingPolicy::default());
        assert_eq!(config.price_range(), PriceRange::from_major(0.0, 500.0));
        assert_eq!(config.checkout.processing_delay(), Duration::from_secs(2));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_sections() {
        let config = StorefrontConfig::from_toml(
            r#"
            currency = "PEN"

            [pricing]
            tax_percent = 10.0

            [checkout]
            processing_delay_ms = 50
            "#,
        )
        .unwrap();

        assert_eq!(config.currency().unwrap(), Currency::PEN);
        assert_eq!(config.pricing.shipping_flat, 25.0);
        assert_eq!(config.pricing.tax_percent, 10.0);
        assert_eq!(config.checkout.processing_delay_ms, 50);
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(StorefrontConfig::from_toml("currency = \"XYZ\"").is_err());
        assert!(StorefrontConfig::from_toml("[pricing]\ntax_percent = 150.0").is_err());
        assert!(StorefrontConfig::from_toml("[catalog]\nprice_min = 600.0").is_err());
    }

    #[test]
    fn test_load_from_files() {
        let dir = tempfile::tempdir().unwrap();

        let toml_path = dir.path().join("storefront.toml");
        std::fs::write(&toml_path, "[logging]\njson = true\n").unwrap();
        assert!(StorefrontConfig::load(&toml_path).unwrap().logging.json);

        let json_path = dir.path().join("storefront.json");
        std::fs::write(&json_path, r#"{"catalog": {"price_max": 300.0}}"#).unwrap();
        let config = StorefrontConfig::load(&json_path).unwrap();
        assert_eq!(config.catalog.price_max, 300.0);

        assert!(StorefrontConfig::load(dir.path().join("missing.toml")).is_err());
    }
}
