//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the kiosk
//! shell. All types derive Serde traits for deserialization from config
//! files, and every field has a default so a minimal config is valid.

use serde::{Deserialize, Serialize};

/// Root configuration for the kiosk shell.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Environment selected at startup.
    pub default_environment: String,

    /// Identity tag appended to every outgoing URL (e.g. the station name).
    pub host_id: String,

    /// Development mode. Widens the certificate-bypass scope to all origins;
    /// production deployments keep this off.
    pub dev_mode: bool,

    /// Candidate content endpoints, one entry per environment.
    /// Declaration order defines the environment rotation order.
    pub environments: Vec<EnvironmentConfig>,

    /// Failover thresholds and retry periods.
    pub failover: FailoverConfig,

    /// Local fallback document shown while offline.
    pub offline: OfflineConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            default_environment: "prod".to_string(),
            host_id: "kiosk".to_string(),
            dev_mode: false,
            environments: vec![EnvironmentConfig::default()],
            failover: FailoverConfig::default(),
            offline: OfflineConfig::default(),
            observability: ObservabilityConfig::default(),
        }
    }
}

/// One environment's primary/backup endpoint pair.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvironmentConfig {
    /// Environment name (e.g. "prod", "test").
    pub name: String,

    /// Primary content URL.
    pub primary_url: String,

    /// Optional backup content URL used for failover below the offline
    /// threshold.
    #[serde(default)]
    pub backup_url: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            name: "prod".to_string(),
            primary_url: "https://10.0.0.10/app/vocs/".to_string(),
            backup_url: None,
        }
    }
}

/// Failover behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct FailoverConfig {
    /// Consecutive real failures before degrading to the offline page.
    pub fail_threshold: u32,

    /// Delay before retrying the primary after the backup also failed,
    /// in seconds.
    pub retry_delay_secs: u64,

    /// Period of the offline recovery timer, in seconds.
    pub recovery_interval_secs: u64,
}

impl Default for FailoverConfig {
    fn default() -> Self {
        Self {
            fail_threshold: 3,
            retry_delay_secs: 5,
            recovery_interval_secs: 30,
        }
    }
}

/// Offline fallback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OfflineConfig {
    /// URL of the local fallback document. Loads of URLs under this prefix
    /// never count as endpoint successes.
    pub page_url: String,
}

impl Default for OfflineConfig {
    fn default() -> Self {
        Self {
            page_url: "file:///opt/kiosk/offline/index.html".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` overrides.
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
