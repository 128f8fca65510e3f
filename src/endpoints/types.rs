//! Endpoint value types.

use serde::Serialize;
use std::fmt;
use url::Url;

/// Named deployment target (e.g. "prod", "test").
///
/// Kept as an opaque tag rather than a closed enum so that toggling can
/// rotate through however many environments the configuration declares.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EnvironmentId(String);

impl EnvironmentId {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EnvironmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EnvironmentId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

/// Role of an endpoint within its environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    Primary,
    Backup,
}

/// A resolvable content endpoint. Immutable: looked up, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub url: Url,
    pub role: Role,
    pub environment: EnvironmentId,
}
