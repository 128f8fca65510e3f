//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use url::Url;

use kiosk_shell::config::{EnvironmentConfig, FailoverConfig, KioskConfig};
use kiosk_shell::endpoints::EndpointSet;
use kiosk_shell::resilience::{FailureClassifier, ResilienceController};
use kiosk_shell::surface::RenderSurface;

pub const OFFLINE_URL: &str = "file:///opt/kiosk/offline/index.html";

/// A side effect requested of the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    Load(Url),
    OfflinePage,
    DiagnosticMode,
}

/// Render surface that records every requested side effect.
#[derive(Debug)]
pub struct RecordingSurface {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl RecordingSurface {
    pub fn new() -> (Self, SurfaceLog) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        (
            Self {
                calls: calls.clone(),
            },
            SurfaceLog { calls },
        )
    }
}

impl RenderSurface for RecordingSurface {
    fn load(&mut self, url: &Url) {
        self.calls.lock().unwrap().push(SurfaceCall::Load(url.clone()));
    }

    fn load_offline_page(&mut self) {
        self.calls.lock().unwrap().push(SurfaceCall::OfflinePage);
    }

    fn enter_diagnostic_mode(&mut self) {
        self.calls.lock().unwrap().push(SurfaceCall::DiagnosticMode);
    }
}

/// Reader half of a [`RecordingSurface`].
#[derive(Debug, Clone)]
pub struct SurfaceLog {
    calls: Arc<Mutex<Vec<SurfaceCall>>>,
}

impl SurfaceLog {
    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<SurfaceCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.calls.lock().unwrap().clear();
    }
}

/// Two environments; prod has a backup, test does not.
pub fn two_env_config() -> KioskConfig {
    KioskConfig {
        default_environment: "prod".into(),
        host_id: "kiosk-01".into(),
        environments: vec![
            EnvironmentConfig {
                name: "prod".into(),
                primary_url: "https://a.example/app/".into(),
                backup_url: Some("https://b.example/app/".into()),
            },
            EnvironmentConfig {
                name: "test".into(),
                primary_url: "https://t.example/app/".into(),
                backup_url: None,
            },
        ],
        failover: FailoverConfig {
            fail_threshold: 3,
            retry_delay_secs: 5,
            recovery_interval_secs: 30,
        },
        ..KioskConfig::default()
    }
}

pub fn make_controller(
    config: &KioskConfig,
) -> (ResilienceController<RecordingSurface>, SurfaceLog) {
    let endpoints = EndpointSet::from_config(config).unwrap();
    let (surface, log) = RecordingSurface::new();
    let controller = ResilienceController::new(
        endpoints,
        FailureClassifier::default(),
        config.failover.clone(),
        OFFLINE_URL.parse().unwrap(),
        surface,
    );
    (controller, log)
}

/// The decorated URL the controller is expected to load.
pub fn decorated(config: &KioskConfig, raw: &str) -> Url {
    let endpoints = EndpointSet::from_config(config).unwrap();
    endpoints.decorate(&raw.parse().unwrap())
}
