//! Security policy subsystem.
//!
//! # Data Flow
//! ```text
//! Host engine certificate error ──▶ trust.rs (bypass only for configured endpoints)
//! Host engine permission prompt ──▶ permissions.rs (media for rendered origin, else deny)
//! ```
//!
//! # Design Decisions
//! - Policy objects are pure decision functions the host consults; they hold
//!   no mutable state and never touch the controller
//! - Trust scope derives from the endpoint set, so a config change narrows
//!   or widens it automatically
//! - Development mode alone restores blanket certificate bypass

pub mod permissions;
pub mod trust;

pub use permissions::{Decision, PermissionBroker, PermissionKind};
pub use trust::TrustPolicy;
