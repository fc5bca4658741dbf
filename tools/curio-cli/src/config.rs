//! CLI configuration.

use anyhow::{Context, Result};
use curio_commerce::cart::PricingConfig;
use curio_commerce::money::Money;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration file (`curio.toml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurioConfig {
    /// Where the backing store file lives.
    #[serde(default = "default_store_path")]
    pub store: String,

    /// Pricing knobs.
    #[serde(default)]
    pub pricing: PricingSection,
}

impl Default for CurioConfig {
    fn default() -> Self {
        Self {
            store: default_store_path(),
            pricing: PricingSection::default(),
        }
    }
}

impl CurioConfig {
    /// Load config from an explicit path, or from `curio.toml` in the
    /// working directory if present, or fall back to defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::read(path),
            None => {
                if Path::new("curio.toml").exists() {
                    Self::read("curio.toml")
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    fn read(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
    }
}

/// Pricing knobs, in decimal dollars for config ergonomics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingSection {
    /// Tax rate applied to the subtotal.
    pub tax_rate: f64,
    /// Shipping is free above this subtotal.
    pub free_shipping_threshold: f64,
    /// Flat shipping fee below the threshold.
    pub flat_shipping_fee: f64,
}

impl Default for PricingSection {
    fn default() -> Self {
        let defaults = PricingConfig::default();
        Self {
            tax_rate: defaults.tax_rate,
            free_shipping_threshold: defaults.free_shipping_threshold.to_decimal(),
            flat_shipping_fee: defaults.flat_shipping_fee.to_decimal(),
        }
    }
}

impl PricingSection {
    /// Convert into the engine's pricing configuration.
    pub fn to_pricing(&self) -> PricingConfig {
        PricingConfig::new()
            .with_tax_rate(self.tax_rate)
            .with_free_shipping_threshold(Money::from_decimal(self.free_shipping_threshold))
            .with_flat_shipping_fee(Money::from_decimal(self.flat_shipping_fee))
    }
}

fn default_store_path() -> String {
    ".curio/store.json".to_string()
}
