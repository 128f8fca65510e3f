//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems ──structured tracing events──▶ stdout (fmt layer)
//! ResilienceController ──Transition broadcast──▶ host log sink (JSON lines)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; level from config, `RUST_LOG` overrides
//! - Mode transitions are discrete, serializable events so a host can ship
//!   them wherever it logs; no metrics endpoint in this core

pub mod logging;
