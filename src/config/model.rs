use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::currency::LocaleConfig;
use crate::errors::CourseError;
use crate::pricing::{PriceEngine, PriceTable};
use crate::wizard::CourseVariant;

/// Stores user-configurable CLI preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub locale: String,
    /// ISO code choosing the symbol prices are shown with.
    pub currency: String,
    #[serde(default)]
    pub variant: CourseVariant,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional JSON price table replacing the variant's built-in prices.
    pub price_table_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-IN".into(),
            currency: "INR".into(),
            variant: CourseVariant::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            price_table_path: None,
        }
    }
}

impl Config {
    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn locale_config(&self) -> LocaleConfig {
        LocaleConfig::for_tag(&self.locale).with_currency(&self.currency)
    }

    /// The configured override when present, the variant's table otherwise.
    pub fn price_table(&self) -> Result<PriceTable, CourseError> {
        match &self.price_table_path {
            Some(path) => PriceTable::from_json_file(path),
            None => Ok(self.variant.price_table()),
        }
    }

    pub fn price_engine(&self) -> Result<PriceEngine, CourseError> {
        Ok(PriceEngine::new(self.price_table()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::currency::GroupingStyle;

    #[test]
    fn defaults_target_indian_rupees() {
        let config = Config::default();
        assert_eq!(config.locale, "en-IN");
        assert_eq!(config.variant, CourseVariant::Extended);
        assert_eq!(config.locale_config().grouping, GroupingStyle::Indian);
    }

    #[test]
    fn missing_optional_fields_fall_back() {
        let config: Config =
            serde_json::from_str(r#"{ "locale": "en-US", "currency": "INR" }"#).unwrap();
        assert!(config.ui_color_enabled);
        assert_eq!(config.variant, CourseVariant::Extended);
        assert!(config.price_table_path.is_none());
        assert_eq!(config.locale_config().grouping, GroupingStyle::Thousands);
    }

    #[test]
    fn currency_code_sets_the_display_symbol() {
        let config = Config::default();
        assert_eq!(config.locale_config().currency_symbol, "₹");

        let config = Config {
            currency: "EUR".into(),
            ..Config::default()
        };
        assert_eq!(config.locale_config().currency_symbol, "€");
        assert_eq!(config.locale_config().grouping, GroupingStyle::Indian);
    }

    #[test]
    fn variant_selects_the_price_table() {
        let config = Config {
            variant: CourseVariant::Standard,
            ..Config::default()
        };
        assert_eq!(config.price_table().unwrap(), PriceTable::standard());
    }
}
