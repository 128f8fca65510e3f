//! Endpoint configuration subsystem.
//!
//! # Data Flow
//! ```text
//! KioskConfig (validated)
//!     → EndpointSet (immutable lookup table)
//!     → resolve(environment, using_backup) → Endpoint
//!     → decorate(url) → url with kiosk identity parameter
//! ```
//!
//! # Design Decisions
//! - Resolution is total: unknown environments fall back to the default
//!   environment's primary rather than erroring at runtime
//! - Environment toggling rotates through declaration order, so more than
//!   two configured environments work without code changes
//! - Decoration is idempotent; reloading an already-decorated URL does not
//!   grow the query string

pub mod set;
pub mod types;

pub use set::EndpointSet;
pub use types::{Endpoint, EnvironmentId, Role};
