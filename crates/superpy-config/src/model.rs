use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// User preferences and the file layout of the ledger.
///
/// File entries may be relative (resolved against the data directory),
/// absolute, or start with `~/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_purchases_file")]
    pub purchases_file: PathBuf,
    #[serde(default = "Config::default_sales_file")]
    pub sales_file: PathBuf,
    #[serde(default = "Config::default_clock_file")]
    pub clock_file: PathBuf,
    #[serde(default = "Config::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            purchases_file: Self::default_purchases_file(),
            sales_file: Self::default_sales_file(),
            clock_file: Self::default_clock_file(),
            currency_symbol: Self::default_currency_symbol(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 5] = [
        "purchases_file",
        "sales_file",
        "clock_file",
        "currency_symbol",
        "color",
    ];

    pub fn default_purchases_file() -> PathBuf {
        PathBuf::from("bought.csv")
    }

    pub fn default_sales_file() -> PathBuf {
        PathBuf::from("sold.csv")
    }

    pub fn default_clock_file() -> PathBuf {
        PathBuf::from("current_date.txt")
    }

    pub fn default_currency_symbol() -> String {
        "$".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Resolves a configured file against `base`.
    pub fn resolve(&self, base: &Path, file: &Path) -> PathBuf {
        if let Ok(rest) = file.strip_prefix("~") {
            if let Some(home) = dirs::home_dir() {
                return home.join(rest);
            }
        }
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            base.join(file)
        }
    }

    /// Key/value pairs in display order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .map(|key| (*key, self.get(key).unwrap_or_default()))
            .collect()
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let value = match key {
            "purchases_file" => self.purchases_file.display().to_string(),
            "sales_file" => self.sales_file.display().to_string(),
            "clock_file" => self.clock_file.display().to_string(),
            "currency_symbol" => self.currency_symbol.clone(),
            "color" => self.ui_color_enabled.to_string(),
            _ => return None,
        };
        Some(value)
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let trimmed = value.trim();
        match key {
            "purchases_file" | "sales_file" | "clock_file" if trimmed.is_empty() => {
                return Err(invalid())
            }
            "purchases_file" => self.purchases_file = PathBuf::from(trimmed),
            "sales_file" => self.sales_file = PathBuf::from(trimmed),
            "clock_file" => self.clock_file = PathBuf::from(trimmed),
            "currency_symbol" => self.currency_symbol = trimmed.to_string(),
            "color" => {
                self.ui_color_enabled = match trimmed.to_ascii_lowercase().as_str() {
                    "on" | "true" | "yes" => true,
                    "off" | "false" | "no" => false,
                    _ => return Err(invalid()),
                }
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}
