//! Cancellable retry timers.
//!
//! # Responsibilities
//! - Schedule the one-shot backup-recovery delay
//! - Schedule the periodic offline-recovery interval
//! - Guarantee cancellation when replaced or when the session ends
//!
//! # Design Decisions
//! - Timers never touch session state; they only send ticks into the
//!   controller's event queue, preserving single-consumer ordering
//! - Abort-on-drop: holding at most one `RetryTimer` in an `Option` slot
//!   makes the single-pending-timer rule structural, and teardown cannot
//!   leak a callback into a destroyed session

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::resilience::controller::ControllerEvent;

/// Which scheduled recovery action is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    /// One-shot delayed reload of the primary after the backup also failed.
    BackupRecovery,
    /// Periodic reload attempt while showing the offline page.
    OfflineRecovery,
}

/// A single pending timer, aborted on drop.
#[derive(Debug)]
pub struct RetryTimer {
    kind: TimerKind,
    handle: JoinHandle<()>,
}

impl RetryTimer {
    /// Schedule a one-shot [`ControllerEvent::RetryTick`] after `delay`.
    pub fn one_shot(delay: Duration, tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        let handle = tokio::spawn(async move {
            time::sleep(delay).await;
            let _ = tx.send(ControllerEvent::RetryTick);
        });
        Self {
            kind: TimerKind::BackupRecovery,
            handle,
        }
    }

    /// Schedule a [`ControllerEvent::OfflineTick`] every `period`, first tick
    /// one full period from now. Runs until dropped.
    pub fn interval(period: Duration, tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + period, period);
            loop {
                ticker.tick().await;
                if tx.send(ControllerEvent::OfflineTick).is_err() {
                    break;
                }
            }
        });
        Self {
            kind: TimerKind::OfflineRecovery,
            handle,
        }
    }

    pub fn kind(&self) -> TimerKind {
        self.kind
    }
}

impl Drop for RetryTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
