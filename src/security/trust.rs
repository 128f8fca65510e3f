//! Certificate trust scope.
//!
//! Kiosk deployments serve content from appliances with self-signed
//! certificates, so certificate errors must be suppressible, but only for
//! the endpoints this kiosk is configured to render. Every other origin
//! keeps normal trust validation. Development mode restores the old
//! blanket-bypass behavior for local work against ad-hoc targets.

use url::Url;

use crate::endpoints::EndpointSet;

/// Decides whether a certificate error may be suppressed for a URL.
#[derive(Debug, Clone)]
pub struct TrustPolicy {
    trusted_prefixes: Vec<Url>,
    dev_mode: bool,
}

impl TrustPolicy {
    /// Scope the bypass to the configured endpoint set.
    pub fn from_endpoints(endpoints: &EndpointSet, dev_mode: bool) -> Self {
        Self {
            trusted_prefixes: endpoints.trusted_urls().cloned().collect(),
            dev_mode,
        }
    }

    /// True if a certificate error for `url` may be ignored.
    pub fn allow_certificate_error(&self, url: &Url) -> bool {
        if self.dev_mode {
            return true;
        }
        self.trusted_prefixes
            .iter()
            .any(|prefix| url.as_str().starts_with(prefix.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::KioskConfig;

    fn policy(dev_mode: bool) -> TrustPolicy {
        let endpoints = EndpointSet::from_config(&KioskConfig::default()).unwrap();
        TrustPolicy::from_endpoints(&endpoints, dev_mode)
    }

    #[test]
    fn configured_endpoint_prefix_is_trusted() {
        let policy = policy(false);
        let url: Url = "https://10.0.0.10/app/vocs/index.html".parse().unwrap();
        assert!(policy.allow_certificate_error(&url));
    }

    #[test]
    fn foreign_origin_is_not_trusted() {
        let policy = policy(false);
        let url: Url = "https://example.com/app/vocs/".parse().unwrap();
        assert!(!policy.allow_certificate_error(&url));
    }

    #[test]
    fn dev_mode_widens_scope_to_all_origins() {
        let policy = policy(true);
        let url: Url = "https://example.com/".parse().unwrap();
        assert!(policy.allow_certificate_error(&url));
    }
}
