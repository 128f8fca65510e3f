//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → loader.rs (process environment overrides: APP_URL, KIOSK_HOST_ID)
//!     → validation.rs (semantic checks, all errors reported)
//!     → KioskConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; environment switching is a runtime
//!   command, not a config change
//! - All fields have defaults to allow minimal configs
//! - An invalid config is a deployment defect: startup aborts, nothing is
//!   recovered at runtime

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    EnvironmentConfig, FailoverConfig, KioskConfig, ObservabilityConfig, OfflineConfig,
};
pub use validation::{validate_config, ValidationError};
