// src/config/algos_config.rs

use serde::{Deserialize, Serialize};
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use config::builder::DefaultState;
use std::path::Path;

/// Runtime configuration for the `algos` binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlgosConfig {
    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Log colouring (auto, always, never)
    pub log_style: String,
}

impl Default for AlgosConfig {
    fn default() -> Self {
        AlgosConfig {
            log_level: "info".to_string(),
            log_style: "auto".to_string(),
        }
    }
}

impl AlgosConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("algos.toml").exists() {
            builder = builder.add_source(File::with_name("algos.toml"));
        } else if Path::new("algos.yaml").exists() {
            builder = builder.add_source(File::with_name("algos.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = AlgosConfig::default();
        Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("log_style", defaults.log_style)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Environment overrides (prefix: ALGOS_)
        let config = builder
            .add_source(
                Environment::with_prefix("ALGOS")
                    .try_parsing(true)
            )
            .build()?;
        config.try_deserialize()
    }
}
