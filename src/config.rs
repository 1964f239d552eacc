use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::target::RiskLevel;

/// Top-level application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub data: DataConfig,
    pub reports: ReportsConfig,
}

/// Store seeding and defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Populate the stores with demo data on startup.
    pub seed_demo_data: bool,
    /// Risk level assigned to newly added targets.
    pub default_risk_level: RiskLevel,
}

/// Reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportsConfig {
    /// Months per side when comparing recent against earlier outcomes.
    pub trend_window_months: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            reports: ReportsConfig::default(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: true,
            default_risk_level: RiskLevel::Low,
        }
    }
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            trend_window_months: 3,
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/phishsim/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("phishsim").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert!(config.data.seed_demo_data);
        assert_eq!(config.data.default_risk_level, RiskLevel::Low);
        assert_eq!(config.reports.trend_window_months, 3);
    }

    #[test]
    fn test_parse_partial_config() {
        let config: AppConfig = toml::from_str(
            r#"
            [data]
            seed_demo_data = false
            default_risk_level = "medium"
            "#,
        )
        .unwrap();
        assert!(!config.data.seed_demo_data);
        assert_eq!(config.data.default_risk_level, RiskLevel::Medium);
        // untouched section keeps its default
        assert_eq!(config.reports.trend_window_months, 3);
    }

    #[test]
    fn test_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(
            parsed.reports.trend_window_months,
            config.reports.trend_window_months
        );
    }
}
