//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use wh_core::BalanceConfig;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Nominal working hours per day.
    pub working_hours: f64,

    /// Break hours expected on top of the working hours.
    pub daily_break_hours: f64,
}

impl Default for Config {
    fn default() -> Self {
        let balance = BalanceConfig::default();
        Self {
            working_hours: balance.working_hours,
            daily_break_hours: balance.daily_break_hours,
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (WH_*)
        figment = figment.merge(Env::prefixed("WH_"));

        figment.extract()
    }

    /// Applies command-line overrides on top of the loaded values.
    #[must_use]
    pub fn with_overrides(mut self, working_hours: Option<f64>, daily_break_hours: Option<f64>) -> Self {
        if let Some(hours) = working_hours {
            self.working_hours = hours;
        }
        if let Some(hours) = daily_break_hours {
            self.daily_break_hours = hours;
        }
        self
    }

    pub const fn balance(&self) -> BalanceConfig {
        BalanceConfig {
            working_hours: self.working_hours,
            daily_break_hours: self.daily_break_hours,
        }
    }
}

/// Returns the platform-specific config directory for wh.
///
/// On Linux: `~/.config/wh`
pub fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("wh"))
}
