//! The endpoint resilience state machine.
//!
//! # States
//! - Loading: a navigation is in flight
//! - Loaded: the last top-level load succeeded
//! - Retrying: below the offline threshold, alternating primary/backup
//! - Offline: local fallback shown, periodic recovery attempts running
//!
//! # State Transitions
//! ```text
//! Loading/Loaded → Retrying: real main-frame failure below threshold
//! Retrying → Offline: consecutive real failures >= fail_threshold
//! any → Loaded: successful top-level load of a non-offline URL
//! Offline → Loading: environment toggle (recovery timer cancelled)
//! ```
//!
//! # Design Decisions
//! - One owned SessionState per controller, mutated only on this event loop;
//!   multiple instances (e.g. under test) cannot interfere
//! - Exactly one pending timer slot; scheduling replaces and aborts the
//!   previous timer, so concurrent stale retries cannot fire
//! - Exhausting retries degrades to the offline page; nothing is fatal, and
//!   offline recovery keeps trying until a load succeeds

use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, mpsc};
use url::Url;

use crate::config::FailoverConfig;
use crate::endpoints::{EndpointSet, EnvironmentId};
use crate::resilience::classifier::{Classification, FailureClassifier};
use crate::resilience::timer::{RetryTimer, TimerKind};
use crate::surface::{Command, RenderSurface, SurfaceEvent};

/// Controller mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Mode {
    Loading,
    Loaded,
    Retrying,
    Offline,
}

/// The mutable core record. One per controller instance.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub active_environment: EnvironmentId,
    pub using_backup: bool,
    pub consecutive_failures: u32,
    pub mode: Mode,
}

impl SessionState {
    fn new(active_environment: EnvironmentId) -> Self {
        Self {
            active_environment,
            using_backup: false,
            consecutive_failures: 0,
            mode: Mode::Loading,
        }
    }
}

/// A discrete mode change, emitted for host-side logging.
#[derive(Debug, Clone, Serialize)]
pub struct Transition {
    pub from: Mode,
    pub to: Mode,
    pub environment: EnvironmentId,
    pub using_backup: bool,
    pub consecutive_failures: u32,
}

/// Everything the controller reacts to, serialized into one queue.
#[derive(Debug)]
pub enum ControllerEvent {
    Surface(SurfaceEvent),
    Command(Command),
    /// One-shot backup-recovery delay elapsed.
    RetryTick,
    /// Offline-recovery interval elapsed.
    OfflineTick,
}

/// Cloneable sender half used by the host to feed the controller.
#[derive(Debug, Clone)]
pub struct ControllerHandle {
    tx: mpsc::UnboundedSender<ControllerEvent>,
}

impl ControllerHandle {
    pub fn surface_event(&self, event: SurfaceEvent) {
        let _ = self.tx.send(ControllerEvent::Surface(event));
    }

    pub fn command(&self, command: Command) {
        let _ = self.tx.send(ControllerEvent::Command(command));
    }
}

/// The endpoint resilience controller.
pub struct ResilienceController<S: RenderSurface> {
    endpoints: EndpointSet,
    classifier: FailureClassifier,
    failover: FailoverConfig,
    offline_prefix: Url,
    surface: S,
    state: SessionState,
    pending_timer: Option<RetryTimer>,
    tx: mpsc::UnboundedSender<ControllerEvent>,
    rx: mpsc::UnboundedReceiver<ControllerEvent>,
    transitions: broadcast::Sender<Transition>,
}

impl<S: RenderSurface> ResilienceController<S> {
    pub fn new(
        endpoints: EndpointSet,
        classifier: FailureClassifier,
        failover: FailoverConfig,
        offline_prefix: Url,
        surface: S,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (transitions, _) = broadcast::channel(32);
        let state = SessionState::new(endpoints.default_environment().clone());
        Self {
            endpoints,
            classifier,
            failover,
            offline_prefix,
            surface,
            state,
            pending_timer: None,
            tx,
            rx,
            transitions,
        }
    }

    /// Sender half for surface events and operator commands.
    pub fn handle(&self) -> ControllerHandle {
        ControllerHandle {
            tx: self.tx.clone(),
        }
    }

    /// Subscribe to mode-change events.
    pub fn subscribe_transitions(&self) -> broadcast::Receiver<Transition> {
        self.transitions.subscribe()
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn pending_timer_kind(&self) -> Option<TimerKind> {
        self.pending_timer.as_ref().map(RetryTimer::kind)
    }

    /// Initial load of the active environment's endpoint.
    pub fn start(&mut self) {
        tracing::info!(
            environment = %self.state.active_environment,
            "resilience controller starting"
        );
        self.load_current();
    }

    /// Run until shutdown, processing one event at a time in arrival order.
    pub async fn run(mut self, mut shutdown: broadcast::Receiver<()>) {
        self.start();
        loop {
            tokio::select! {
                event = self.rx.recv() => match event {
                    Some(event) => self.handle_event(event),
                    None => break,
                },
                _ = shutdown.recv() => {
                    tracing::info!("resilience controller received shutdown signal, exiting loop");
                    break;
                }
            }
        }
        // Dropping self aborts any pending timer before the session goes away.
    }

    /// Drain events that are already queued, without waiting.
    ///
    /// For hosts (and tests) that drive the controller manually instead of
    /// spawning [`run`](Self::run).
    pub fn pump(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Process a single event.
    pub fn handle_event(&mut self, event: ControllerEvent) {
        match event {
            ControllerEvent::Surface(SurfaceEvent::LoadFinished { url }) => {
                self.on_load_finished(&url)
            }
            ControllerEvent::Surface(SurfaceEvent::LoadFailed {
                error_code,
                is_main_frame,
                url,
            }) => self.on_load_failed(error_code, is_main_frame, &url),
            ControllerEvent::Command(Command::ToggleEnvironment) => self.on_toggle_environment(),
            ControllerEvent::Command(Command::EnterDiagnosticMode) => {
                tracing::info!("entering diagnostic mode");
                self.surface.enter_diagnostic_mode();
            }
            ControllerEvent::RetryTick => self.on_retry_tick(),
            ControllerEvent::OfflineTick => self.on_offline_tick(),
        }
    }

    fn on_load_finished(&mut self, url: &Url) {
        if self.is_offline_url(url) {
            // The fallback document rendering is not endpoint connectivity.
            tracing::debug!(url = %url, "offline page rendered");
            return;
        }
        tracing::info!(url = %url, "load finished");
        self.state.consecutive_failures = 0;
        self.pending_timer = None;
        self.set_mode(Mode::Loaded);
    }

    fn on_load_failed(&mut self, error_code: i32, is_main_frame: bool, url: &Url) {
        if self.classifier.classify(error_code, is_main_frame) == Classification::Ignorable {
            tracing::debug!(error_code, is_main_frame, url = %url, "ignorable load failure");
            return;
        }

        self.state.consecutive_failures += 1;
        tracing::warn!(
            error_code,
            url = %url,
            consecutive_failures = self.state.consecutive_failures,
            "main document load failed"
        );

        if self.state.consecutive_failures >= self.failover.fail_threshold {
            self.state.using_backup = false;
            self.surface.load_offline_page();
            self.set_mode(Mode::Offline);
            let interval_running = self.pending_timer_kind() == Some(TimerKind::OfflineRecovery);
            if !interval_running {
                self.pending_timer = Some(RetryTimer::interval(
                    Duration::from_secs(self.failover.recovery_interval_secs),
                    self.tx.clone(),
                ));
            }
        } else if !self.state.using_backup {
            self.state.using_backup = true;
            self.pending_timer = None;
            self.set_mode(Mode::Retrying);
            self.load_current();
        } else {
            self.state.using_backup = false;
            self.set_mode(Mode::Retrying);
            self.pending_timer = Some(RetryTimer::one_shot(
                Duration::from_secs(self.failover.retry_delay_secs),
                self.tx.clone(),
            ));
        }
    }

    fn on_retry_tick(&mut self) {
        self.pending_timer = None;
        tracing::info!("delayed retry firing");
        self.load_current();
    }

    fn on_offline_tick(&mut self) {
        if self.state.mode != Mode::Offline {
            // Stale tick raced with a transition out of offline mode.
            return;
        }
        // Resolve freshly each tick so an environment switch made while
        // offline is honored.
        tracing::info!("offline recovery attempt");
        self.load_current();
    }

    fn on_toggle_environment(&mut self) {
        let next = self
            .endpoints
            .next_environment(&self.state.active_environment);
        tracing::info!(
            from = %self.state.active_environment,
            to = %next,
            "toggling environment"
        );
        self.state.active_environment = next;
        self.state.using_backup = false;
        self.pending_timer = None;
        self.set_mode(Mode::Loading);
        self.load_current();
    }

    fn load_current(&mut self) {
        let endpoint = self
            .endpoints
            .resolve(&self.state.active_environment, self.state.using_backup);
        let url = self.endpoints.decorate(&endpoint.url);
        tracing::info!(
            url = %url,
            role = ?endpoint.role,
            environment = %endpoint.environment,
            "loading endpoint"
        );
        self.surface.load(&url);
    }

    fn is_offline_url(&self, url: &Url) -> bool {
        url.as_str().starts_with(self.offline_prefix.as_str())
    }

    fn set_mode(&mut self, to: Mode) {
        if self.state.mode == to {
            return;
        }
        let transition = Transition {
            from: self.state.mode,
            to,
            environment: self.state.active_environment.clone(),
            using_backup: self.state.using_backup,
            consecutive_failures: self.state.consecutive_failures,
        };
        tracing::info!(from = ?transition.from, to = ?transition.to, "mode transition");
        self.state.mode = to;
        let _ = self.transitions.send(transition);
    }
}
