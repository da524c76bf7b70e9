//! # Settings
//!
//! Read-only user configuration in TOML. Every key is optional; missing keys
//! take the built-in defaults.
//!
//! ```toml
//! history_capacity = 10
//! default_wall_thickness_m = 0.4
//! calorie_adjustment_kcal = 500
//! protein_g_per_kg = 2.0
//! fat_g_per_kg = 1.0
//!
//! [currency_rates]
//! EUR = 0.93
//! RUB = 90.0
//! ```
//!
//! ## Lookup order
//!
//! [`Settings::discover`] checks, in order:
//! 1. The file named by `$MULTICALC_CONFIG`
//! 2. `settings.toml` in the platform config directory
//!    (e.g. `~/.config/multicalc/settings.toml` on Linux)
//! 3. Built-in defaults
//!
//! Settings are never written back.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::calculations::basic::DEFAULT_HISTORY_CAPACITY;
use crate::calculations::calories::NutritionParams;
use crate::calculations::construction::DEFAULT_WALL_THICKNESS_M;
use crate::errors::{CalcError, CalcResult};
use crate::tables::{Currency, CurrencyRates};

/// Environment variable naming an explicit settings file
pub const CONFIG_ENV_VAR: &str = "MULTICALC_CONFIG";

/// File name inside the platform config directory
pub const CONFIG_FILE_NAME: &str = "settings.toml";

/// User-adjustable defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Entries kept in the keypad history
    pub history_capacity: usize,

    /// Wall thickness pre-filled in the construction form (m)
    pub default_wall_thickness_m: f64,

    /// Deficit/surplus for the calorie loss and gain targets (kcal)
    pub calorie_adjustment_kcal: f64,

    pub protein_g_per_kg: f64,

    pub fat_g_per_kg: f64,

    /// Replacement rates per 1 USD
    pub currency_rates: BTreeMap<Currency, f64>,
}

impl Default for Settings {
    fn default() -> Self {
        let nutrition = NutritionParams::default();
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            default_wall_thickness_m: DEFAULT_WALL_THICKNESS_M,
            calorie_adjustment_kcal: nutrition.adjustment_kcal,
            protein_g_per_kg: nutrition.protein_g_per_kg,
            fat_g_per_kg: nutrition.fat_g_per_kg,
            currency_rates: BTreeMap::new(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text
    pub fn from_toml_str(text: &str) -> CalcResult<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| CalcError::config_error("<string>", e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a file
    pub fn load(path: &Path) -> CalcResult<Self> {
        let path_text = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|e| CalcError::config_error(&path_text, e.to_string()))?;
        let settings: Settings =
            toml::from_str(&text).map_err(|e| CalcError::config_error(&path_text, e.to_string()))?;
        settings
            .validate()
            .map_err(|e| CalcError::config_error(&path_text, e.to_string()))?;
        tracing::info!(path = %path_text, "loaded settings");
        Ok(settings)
    }

    /// Locate and load settings, falling back to defaults.
    ///
    /// A file named by `$MULTICALC_CONFIG` must exist; the platform file is
    /// optional.
    pub fn discover() -> CalcResult<Self> {
        let explicit = std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from);
        Self::discover_from(explicit.as_deref(), default_config_path().as_deref())
    }

    /// [`Settings::discover`] with the candidate paths supplied
    pub fn discover_from(explicit: Option<&Path>, platform: Option<&Path>) -> CalcResult<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match platform {
            Some(path) if path.is_file() => Self::load(path),
            _ => {
                tracing::debug!("no settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Check every value, naming the first bad key
    pub fn validate(&self) -> CalcResult<()> {
        if self.history_capacity == 0 {
            return Err(CalcError::invalid_input("history_capacity", "0", "Must keep at least one entry"));
        }
        if !self.default_wall_thickness_m.is_finite() || self.default_wall_thickness_m < 0.0 {
            return Err(CalcError::invalid_input(
                "default_wall_thickness_m",
                self.default_wall_thickness_m.to_string(),
                "Must be a non-negative number",
            ));
        }
        let nutrition = [
            ("calorie_adjustment_kcal", self.calorie_adjustment_kcal),
            ("protein_g_per_kg", self.protein_g_per_kg),
            ("fat_g_per_kg", self.fat_g_per_kg),
        ];
        for (field, value) in nutrition {
            if !value.is_finite() || value < 0.0 {
                return Err(CalcError::invalid_input(field, value.to_string(), "Must be a non-negative number"));
            }
        }
        CurrencyRates::with_overrides(&self.currency_rates).map(|_| ())
    }

    /// Rate table with the configured overrides applied
    pub fn currency_rates(&self) -> CalcResult<CurrencyRates> {
        CurrencyRates::with_overrides(&self.currency_rates)
    }

    pub fn nutrition_params(&self) -> NutritionParams {
        NutritionParams {
            adjustment_kcal: self.calorie_adjustment_kcal,
            protein_g_per_kg: self.protein_g_per_kg,
            fat_g_per_kg: self.fat_g_per_kg,
        }
    }
}

/// `settings.toml` in the platform config directory
#[cfg(not(target_arch = "wasm32"))]
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "multicalc").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// No config directory in the browser
#[cfg(target_arch = "wasm32")]
pub fn default_config_path() -> Option<PathBuf> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Settings::from_toml_str("").unwrap(), Settings::default());
    }

    #[test]
    fn test_partial_file() {
        let settings = Settings::from_toml_str(
            r#"
            history_capacity = 25
            protein_g_per_kg = 1.6

            [currency_rates]
            EUR = 0.95
            "#,
        )
        .unwrap();
        assert_eq!(settings.history_capacity, 25);
        assert_eq!(settings.fat_g_per_kg, 1.0);
        assert_eq!(settings.nutrition_params().protein_g_per_kg, 1.6);
        assert_eq!(settings.currency_rates().unwrap().rate(Currency::Eur), 0.95);
        assert_eq!(settings.currency_rates().unwrap().rate(Currency::Rub), 92.5);
    }

    #[test]
    fn test_bad_values_rejected() {
        assert!(Settings::from_toml_str("history_capacity = 0").is_err());
        assert!(Settings::from_toml_str("fat_g_per_kg = -1.0").is_err());
        assert!(Settings::from_toml_str("[currency_rates]\nUSD = 0.0").is_err());
        assert!(Settings::from_toml_str("[currency_rates]\nXYZ = 1.0").is_err());
        assert!(Settings::from_toml_str("history_capacity = \"ten\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_wall_thickness_m = 0.25").unwrap();
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(settings.default_wall_thickness_m, 0.25);
    }

    #[test]
    fn test_load_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "calorie_adjustment_kcal = -100").unwrap();
        let err = Settings::load(file.path()).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
        assert!(err.to_string().contains(&file.path().display().to_string()));

        let missing = file.path().with_extension("missing");
        assert!(matches!(Settings::load(&missing), Err(CalcError::ConfigError { .. })));
    }

    #[test]
    fn test_discover_prefers_explicit_file() {
        let mut explicit = tempfile::NamedTempFile::new().unwrap();
        writeln!(explicit, "history_capacity = 4").unwrap();
        let mut platform = tempfile::NamedTempFile::new().unwrap();
        writeln!(platform, "history_capacity = 7").unwrap();

        let settings = Settings::discover_from(Some(explicit.path()), Some(platform.path())).unwrap();
        assert_eq!(settings.history_capacity, 4);

        let settings = Settings::discover_from(None, Some(platform.path())).unwrap();
        assert_eq!(settings.history_capacity, 7);
    }

    #[test]
    fn test_discover_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let absent = dir.path().join(CONFIG_FILE_NAME);
        assert_eq!(Settings::discover_from(None, Some(&absent)).unwrap(), Settings::default());
        assert_eq!(Settings::discover_from(None, None).unwrap(), Settings::default());

        // An explicitly named file must exist
        let err = Settings::discover_from(Some(&absent), None).unwrap_err();
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_discover_reads_env_var() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "protein_g_per_kg = 1.8").unwrap();
        std::env::set_var(CONFIG_ENV_VAR, file.path());
        let settings = Settings::discover();
        std::env::remove_var(CONFIG_ENV_VAR);
        assert_eq!(settings.unwrap().protein_g_per_kg, 1.8);
    }
}
