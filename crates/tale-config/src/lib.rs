//! # tale-config
//!
//! Layered configuration loading for Tale using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TALE_*` prefix, `__` as separator)
//! 2. Project-level `.tale/config.toml`
//! 3. User-level `~/.config/tale/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `TALE_GENERAL__DEFAULT_TASK` -> `general.default_task`,
//! `TALE_SUBMISSION__OUTBOX_DIR` -> `submission.outbox_dir`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use tale_config::TaleConfig;
//!
//! let config = TaleConfig::load_with_dotenv().expect("config");
//! println!("outbox: {}", config.submission.outbox_dir);
//! ```

mod error;
mod general;
mod submission;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use submission::SubmissionConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TaleConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub submission: SubmissionConfig,
}

impl TaleConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` when a source cannot be parsed, or
    /// `ConfigError::InvalidValue` when the merged values are unusable.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and check a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".tale/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("TALE_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.submission.outbox_dir.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "submission.outbox_dir".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tale").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tale_core::enums::TaskKind;

    #[test]
    fn default_config_loads() {
        let config = TaleConfig::default();
        assert_eq!(config.general.default_task, TaskKind::Interaction);
        assert!(config.submission.verify_payload_schema);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config =
                TaleConfig::from_figment(TaleConfig::figment()).expect("defaults should load");
            assert_eq!(config.submission.outbox_dir, ".tale/outbox");
            Ok(())
        });
    }

    #[test]
    fn blank_outbox_is_rejected() {
        let figment = Figment::from(Serialized::defaults(TaleConfig::default()))
            .merge(("submission.outbox_dir", "  "));
        let err = TaleConfig::from_figment(figment).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
