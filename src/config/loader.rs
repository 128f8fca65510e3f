//! Configuration loading from disk and the process environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::KioskConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", format_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file, then apply process
/// environment overrides.
pub fn load_config(path: &Path) -> Result<KioskConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let mut config: KioskConfig = toml::from_str(&content)?;

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Overrides carried by the process environment.
///
/// `APP_URL` replaces the default environment's primary (the original
/// deployment mechanism for pointing a single kiosk elsewhere);
/// `KIOSK_HOST_ID` and `KIOSK_DEV_MODE` override identity and dev mode.
pub fn apply_env_overrides(config: &mut KioskConfig) {
    if let Ok(app_url) = std::env::var("APP_URL") {
        if let Some(env) = config
            .environments
            .iter_mut()
            .find(|e| e.name == config.default_environment)
        {
            env.primary_url = app_url;
        }
    }
    if let Ok(host_id) = std::env::var("KIOSK_HOST_ID") {
        config.host_id = host_id;
    }
    if let Ok(dev) = std::env::var("KIOSK_DEV_MODE") {
        config.dev_mode = matches!(dev.as_str(), "1" | "true" | "yes");
    }
}
