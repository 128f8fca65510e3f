//! Permission brokering for the rendered origin.
//!
//! The kiosk application uses the microphone; nothing else. Media permission
//! is granted to configured endpoint origins and every other request is
//! denied, including media requests from foreign origins.

use url::Url;

use crate::endpoints::EndpointSet;

/// Permission kinds a host engine may request on behalf of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionKind {
    /// Microphone / camera access.
    Media,
    Geolocation,
    Notifications,
    Clipboard,
    Other,
}

/// Verdict returned to the host engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Grant,
    Deny,
}

/// Answers permission requests from the render surface.
#[derive(Debug, Clone)]
pub struct PermissionBroker {
    trusted_origins: Vec<Url>,
}

impl PermissionBroker {
    pub fn from_endpoints(endpoints: &EndpointSet) -> Self {
        let trusted_origins = endpoints
            .trusted_urls()
            .filter_map(|url| url.join("/").ok())
            .collect();
        Self { trusted_origins }
    }

    pub fn decide(&self, origin: &Url, kind: PermissionKind) -> Decision {
        let trusted = self
            .trusted_origins
            .iter()
            .any(|t| t.origin() == origin.origin());
        match (kind, trusted) {
            (PermissionKind::Media, true) => Decision::Grant,
            _ => Decision::Deny,
        }
    }
}
