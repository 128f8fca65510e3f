//! Configuration validation.
//!
//! Semantic checks on top of what serde already guarantees syntactically.
//! Validation is a pure function and reports all errors, not just the first;
//! a config that fails here is a deployment defect and startup must abort.

use thiserror::Error;
use url::Url;

use crate::config::schema::KioskConfig;

/// A single semantic configuration error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no environments configured")]
    NoEnvironments,

    #[error("duplicate environment name '{0}'")]
    DuplicateEnvironment(String),

    #[error("default environment '{0}' is not configured")]
    UnknownDefaultEnvironment(String),

    #[error("environment '{env}': invalid {role} URL '{url}': {reason}")]
    InvalidEndpointUrl {
        env: String,
        role: &'static str,
        url: String,
        reason: String,
    },

    #[error("invalid offline page URL '{url}': {reason}")]
    InvalidOfflineUrl { url: String, reason: String },

    #[error("failover.fail_threshold must be at least 1")]
    ZeroFailThreshold,

    #[error("failover.{0} must be greater than zero")]
    ZeroPeriod(&'static str),
}

fn check_url(
    errors: &mut Vec<ValidationError>,
    env: &str,
    role: &'static str,
    raw: &str,
) {
    if let Err(e) = raw.parse::<Url>() {
        errors.push(ValidationError::InvalidEndpointUrl {
            env: env.to_string(),
            role,
            url: raw.to_string(),
            reason: e.to_string(),
        });
    }
}

/// Validate a configuration, collecting every error found.
pub fn validate_config(config: &KioskConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.environments.is_empty() {
        errors.push(ValidationError::NoEnvironments);
    }

    let mut seen = Vec::new();
    for env in &config.environments {
        if seen.contains(&env.name.as_str()) {
            errors.push(ValidationError::DuplicateEnvironment(env.name.clone()));
        } else {
            seen.push(env.name.as_str());
        }

        check_url(&mut errors, &env.name, "primary", &env.primary_url);
        if let Some(backup) = &env.backup_url {
            check_url(&mut errors, &env.name, "backup", backup);
        }
    }

    if !config.environments.is_empty() && !seen.contains(&config.default_environment.as_str()) {
        errors.push(ValidationError::UnknownDefaultEnvironment(
            config.default_environment.clone(),
        ));
    }

    if let Err(e) = config.offline.page_url.parse::<Url>() {
        errors.push(ValidationError::InvalidOfflineUrl {
            url: config.offline.page_url.clone(),
            reason: e.to_string(),
        });
    }

    if config.failover.fail_threshold == 0 {
        errors.push(ValidationError::ZeroFailThreshold);
    }
    if config.failover.retry_delay_secs == 0 {
        errors.push(ValidationError::ZeroPeriod("retry_delay_secs"));
    }
    if config.failover.recovery_interval_secs == 0 {
        errors.push(ValidationError::ZeroPeriod("recovery_interval_secs"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
