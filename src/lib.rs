//! Kiosk Display Shell endpoint resilience core.

pub mod config;
pub mod endpoints;
pub mod lifecycle;
pub mod observability;
pub mod resilience;
pub mod security;
pub mod surface;

pub use config::KioskConfig;
pub use endpoints::EndpointSet;
pub use lifecycle::Shutdown;
pub use resilience::ResilienceController;
