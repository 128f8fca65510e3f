//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! RenderSurface event:
//!     → classifier.rs (ignorable vs. real failure)
//!     → controller.rs (SessionState transition, next action)
//!     → timer.rs (delayed retry / offline recovery tick)
//!     → back into the controller's event queue
//! ```
//!
//! # Design Decisions
//! - Single-consumer event queue; no two events mutate session state
//!   concurrently
//! - At most one pending timer; replacement aborts the predecessor
//! - Ignorable failures (sub-frames, superseded navigations) never reach
//!   the state machine

pub mod classifier;
pub mod controller;
pub mod timer;

pub use classifier::{Classification, FailureClassifier};
pub use controller::{
    ControllerEvent, ControllerHandle, Mode, ResilienceController, SessionState, Transition,
};
pub use timer::{RetryTimer, TimerKind};
