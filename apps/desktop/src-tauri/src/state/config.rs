//! # Configuration State
//!
//! Stores application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FLORA_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shop name (displayed in the dashboard header)
    pub shop_name: String,

    /// Dashboard subtitle
    pub tagline: String,

    /// Currency code (ISO 4217)
    pub currency_code: String,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for currency
    pub currency_decimals: u8,

    /// Seed the session with the three demo orders on startup
    pub demo_data: bool,
}

impl Default for ConfigState {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Shop: "Floricultura Rosa"
    /// - Currency: BRL (R$)
    /// - Demo data: enabled (the dashboard has always started seeded)
    fn default() -> Self {
        ConfigState {
            shop_name: "Floricultura Rosa".to_string(),
            tagline: "Sistema de gerenciamento de pedidos".to_string(),
            currency_code: "BRL".to_string(),
            currency_symbol: "R$".to_string(),
            currency_decimals: 2,
            demo_data: true,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `FLORA_SHOP_NAME`: Override shop name
    /// - `FLORA_DEMO_DATA`: "0"/"false" starts with an empty book
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(shop_name) = std::env::var("FLORA_SHOP_NAME") {
            config.shop_name = shop_name;
        }

        if let Ok(demo) = std::env::var("FLORA_DEMO_DATA") {
            config.demo_data = !matches!(demo.as_str(), "0" | "false" | "no");
        }

        config
    }

    /// Formats a centavo amount as a currency string.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = ConfigState::default();
    /// assert_eq!(config.format_currency(15000), "R$ 150.00");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        let divisor = 10_i64.pow(self.currency_decimals as u32);
        let whole = cents / divisor;
        let frac = (cents % divisor).abs();

        format!(
            "{}{} {}",
            if cents < 0 { "-" } else { "" },
            self.currency_symbol,
            if self.currency_decimals > 0 {
                format!(
                    "{}.{:0width$}",
                    whole.abs(),
                    frac,
                    width = self.currency_decimals as usize
                )
            } else {
                whole.abs().to_string()
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(15000), "R$ 150.00");
        assert_eq!(config.format_currency(9990), "R$ 99.90");
        assert_eq!(config.format_currency(1), "R$ 0.01");
        assert_eq!(config.format_currency(0), "R$ 0.00");
    }

    #[test]
    fn test_format_currency_negative() {
        let config = ConfigState::default();
        assert_eq!(config.format_currency(-550), "-R$ 5.50");
    }

    #[test]
    fn test_defaults() {
        let config = ConfigState::default();
        assert_eq!(config.shop_name, "Floricultura Rosa");
        assert_eq!(config.currency_code, "BRL");
        assert!(config.demo_data);
    }
}
