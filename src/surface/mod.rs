//! Render surface collaborator contracts.
//!
//! # Data Flow
//! ```text
//! ResilienceController ──load(url)/load_offline_page()──▶ RenderSurface (host webview)
//! RenderSurface ──LoadFinished / LoadFailed──▶ controller event queue
//! OS hotkeys / signals ──ToggleEnvironment / EnterDiagnosticMode──▶ controller event queue
//! ```
//!
//! # Design Decisions
//! - `load` is fire-and-forget: completion arrives later as a SurfaceEvent,
//!   never as a return value
//! - The trait is the seam for testing; integration tests drive the
//!   controller against a recording implementation
//! - Window creation, devtools, and hotkey registration stay on the host
//!   side of this trait

pub mod headless;

pub use headless::HeadlessSurface;

use url::Url;

/// The host-provided rendering collaborator.
pub trait RenderSurface: Send {
    /// Begin loading `url`. Asynchronous; the host reports the outcome via
    /// [`SurfaceEvent`].
    fn load(&mut self, url: &Url);

    /// Show the local offline fallback document.
    fn load_offline_page(&mut self);

    /// Expose the developer inspection surface and release any exclusive
    /// full-screen lock. No effect on session state.
    fn enter_diagnostic_mode(&mut self);
}

/// Load outcome reported by the render surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// A top-level navigation completed.
    LoadFinished { url: Url },

    /// A load failed. `error_code` follows the host engine's numbering
    /// (negative Chromium-style net error codes); `is_main_frame` tells
    /// whether the document itself or only a sub-resource failed.
    LoadFailed {
        error_code: i32,
        is_main_frame: bool,
        url: Url,
    },
}

/// Operator command delivered from outside the controller (OS-level hotkeys
/// or, in this binary, Unix signals).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Rotate to the next configured environment.
    ToggleEnvironment,

    /// Expose devtools and drop the kiosk lock.
    EnterDiagnosticMode,
}
