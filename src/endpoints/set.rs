//! Endpoint resolution and URL decoration.

use std::borrow::Cow;
use url::Url;

use crate::config::KioskConfig;
use crate::endpoints::types::{Endpoint, EnvironmentId, Role};

/// Query parameter carrying the kiosk identity on every outgoing URL.
const HOST_PARAM: &str = "host";

/// Primary/backup URL pair for one environment.
#[derive(Debug, Clone)]
struct EnvironmentEndpoints {
    id: EnvironmentId,
    primary: Url,
    backup: Option<Url>,
}

/// The configured set of candidate content endpoints.
///
/// Resolution is total: an environment that was never configured resolves to
/// the default environment's primary, and a missing backup resolves to the
/// environment's own primary. Declaration order is preserved because it
/// defines the rotation order for environment toggling.
#[derive(Debug, Clone)]
pub struct EndpointSet {
    environments: Vec<EnvironmentEndpoints>,
    default_environment: EnvironmentId,
    host_id: String,
}

impl EndpointSet {
    /// Build the set from validated configuration.
    ///
    /// Assumes `validate_config` already ran; URLs that fail to parse here
    /// would have been rejected as configuration defects.
    pub fn from_config(config: &KioskConfig) -> Result<Self, url::ParseError> {
        let mut environments = Vec::with_capacity(config.environments.len());
        for env in &config.environments {
            let backup = match &env.backup_url {
                Some(raw) => Some(raw.parse()?),
                None => None,
            };
            environments.push(EnvironmentEndpoints {
                id: EnvironmentId::new(&env.name),
                primary: env.primary_url.parse()?,
                backup,
            });
        }
        Ok(Self {
            environments,
            default_environment: EnvironmentId::new(&config.default_environment),
            host_id: config.host_id.clone(),
        })
    }

    pub fn default_environment(&self) -> &EnvironmentId {
        &self.default_environment
    }

    fn lookup(&self, environment: &EnvironmentId) -> Option<&EnvironmentEndpoints> {
        self.environments.iter().find(|e| &e.id == environment)
    }

    /// Resolve the endpoint to load for `(environment, using_backup)`.
    pub fn resolve(&self, environment: &EnvironmentId, using_backup: bool) -> Endpoint {
        let env = match self.lookup(environment) {
            Some(env) => env,
            None => {
                // Unconfigured environment: fall back to the default's primary.
                let fallback = self
                    .lookup(&self.default_environment)
                    .unwrap_or(&self.environments[0]);
                return Endpoint {
                    url: fallback.primary.clone(),
                    role: Role::Primary,
                    environment: fallback.id.clone(),
                };
            }
        };

        match (&env.backup, using_backup) {
            (Some(backup), true) => Endpoint {
                url: backup.clone(),
                role: Role::Backup,
                environment: env.id.clone(),
            },
            _ => Endpoint {
                url: env.primary.clone(),
                role: Role::Primary,
                environment: env.id.clone(),
            },
        }
    }

    /// Append the kiosk identity parameter to an outgoing URL.
    ///
    /// Idempotent: a URL already carrying `host=<host_id>` is returned as-is.
    pub fn decorate(&self, url: &Url) -> Url {
        let already_tagged = url
            .query_pairs()
            .any(|(k, v)| k == HOST_PARAM && v == Cow::Borrowed(self.host_id.as_str()));
        if already_tagged {
            return url.clone();
        }
        let mut decorated = url.clone();
        decorated
            .query_pairs_mut()
            .append_pair(HOST_PARAM, &self.host_id);
        decorated
    }

    /// Next environment in declaration order, wrapping around.
    ///
    /// Generalizes the two-environment flip so more than two configured
    /// environments rotate cyclically. An unknown current environment
    /// rotates back to the default.
    pub fn next_environment(&self, current: &EnvironmentId) -> EnvironmentId {
        match self.environments.iter().position(|e| &e.id == current) {
            Some(idx) => {
                let next = (idx + 1) % self.environments.len();
                self.environments[next].id.clone()
            }
            None => self.default_environment.clone(),
        }
    }

    /// Every configured endpoint URL, primaries first within each environment.
    ///
    /// Consumed by the TLS trust policy to scope certificate-error bypass.
    pub fn trusted_urls(&self) -> impl Iterator<Item = &Url> {
        self.environments
            .iter()
            .flat_map(|e| std::iter::once(&e.primary).chain(e.backup.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EnvironmentConfig;

    fn two_env_config() -> KioskConfig {
        KioskConfig {
            default_environment: "prod".into(),
            host_id: "kiosk-01".into(),
            environments: vec![
                EnvironmentConfig {
                    name: "prod".into(),
                    primary_url: "https://10.0.0.10/app/vocs/".into(),
                    backup_url: Some("https://10.0.0.11/app/vocs/".into()),
                },
                EnvironmentConfig {
                    name: "test".into(),
                    primary_url: "https://10.0.1.10/app/vocs/".into(),
                    backup_url: None,
                },
            ],
            ..KioskConfig::default()
        }
    }

    #[test]
    fn resolve_primary_and_backup() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();
        let prod = EnvironmentId::from("prod");

        let primary = set.resolve(&prod, false);
        assert_eq!(primary.role, Role::Primary);
        assert_eq!(primary.url.as_str(), "https://10.0.0.10/app/vocs/");

        let backup = set.resolve(&prod, true);
        assert_eq!(backup.role, Role::Backup);
        assert_eq!(backup.url.as_str(), "https://10.0.0.11/app/vocs/");
    }

    #[test]
    fn missing_backup_falls_back_to_own_primary() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();
        let test = EnvironmentId::from("test");

        let resolved = set.resolve(&test, true);
        assert_eq!(resolved.role, Role::Primary);
        assert_eq!(resolved.url.as_str(), "https://10.0.1.10/app/vocs/");
    }

    #[test]
    fn unconfigured_environment_falls_back_to_default_primary() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();
        let resolved = set.resolve(&EnvironmentId::from("staging"), true);
        assert_eq!(resolved.environment, EnvironmentId::from("prod"));
        assert_eq!(resolved.url.as_str(), "https://10.0.0.10/app/vocs/");
    }

    #[test]
    fn decorate_appends_with_correct_separator() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();

        let bare: Url = "https://10.0.0.10/app/vocs/".parse().unwrap();
        assert_eq!(
            set.decorate(&bare).as_str(),
            "https://10.0.0.10/app/vocs/?host=kiosk-01"
        );

        let with_query: Url = "https://10.0.0.10/app/vocs/?lang=en".parse().unwrap();
        assert_eq!(
            set.decorate(&with_query).as_str(),
            "https://10.0.0.10/app/vocs/?lang=en&host=kiosk-01"
        );
    }

    #[test]
    fn decorate_is_idempotent() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();
        let bare: Url = "https://10.0.0.10/app/vocs/".parse().unwrap();
        let once = set.decorate(&bare);
        let twice = set.decorate(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn rotation_cycles_declaration_order() {
        let set = EndpointSet::from_config(&two_env_config()).unwrap();
        let prod = EnvironmentId::from("prod");
        let test = EnvironmentId::from("test");

        assert_eq!(set.next_environment(&prod), test);
        assert_eq!(set.next_environment(&test), prod);
        assert_eq!(set.next_environment(&EnvironmentId::from("bogus")), prod);
    }
}
