//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGUSR1 → ToggleEnvironment command
//!     SIGUSR2 → EnterDiagnosticMode command
//!     SIGTERM/SIGINT → graceful shutdown
//!
//! Shutdown (shutdown.rs):
//!     Signal received → controller loop exits → pending timers aborted
//! ```
//!
//! # Design Decisions
//! - Shutdown is broadcast so every long-running task observes it
//! - Timer cancellation on teardown is structural (abort-on-drop), not
//!   reliant on process death

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
