//! OS signal handling.
//!
//! # Responsibilities
//! - Translate operator signals into controller commands
//! - Trigger graceful shutdown on SIGINT/SIGTERM
//!
//! The OS-global hotkeys of a full deployment are registered by the host
//! application shell; at the process level the same commands arrive as
//! signals: SIGUSR1 toggles the environment, SIGUSR2 enters diagnostic mode.

use crate::lifecycle::Shutdown;
use crate::resilience::ControllerHandle;
use crate::surface::Command;

/// Forward operator signals to the controller until shutdown.
#[cfg(unix)]
pub async fn forward_signals(handle: ControllerHandle, shutdown: Shutdown) {
    use tokio::signal::unix::{signal, SignalKind};

    let mut toggle = match signal(SignalKind::user_defined1()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGUSR1 handler");
            return;
        }
    };
    let mut diagnostic = match signal(SignalKind::user_defined2()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGUSR2 handler");
            return;
        }
    };
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "failed to register SIGTERM handler");
            return;
        }
    };

    loop {
        tokio::select! {
            _ = toggle.recv() => {
                tracing::info!("SIGUSR1 received, toggling environment");
                handle.command(Command::ToggleEnvironment);
            }
            _ = diagnostic.recv() => {
                tracing::info!("SIGUSR2 received, entering diagnostic mode");
                handle.command(Command::EnterDiagnosticMode);
            }
            _ = terminate.recv() => {
                tracing::info!("SIGTERM received, shutting down");
                shutdown.trigger();
                return;
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("SIGINT received, shutting down");
                shutdown.trigger();
                return;
            }
        }
    }
}

/// Forward operator signals to the controller until shutdown.
#[cfg(not(unix))]
pub async fn forward_signals(_handle: ControllerHandle, shutdown: Shutdown) {
    if tokio::signal::ctrl_c().await.is_ok() {
        tracing::info!("interrupt received, shutting down");
    }
    shutdown.trigger();
}
