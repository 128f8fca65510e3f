//! Tracing-only render surface.
//!
//! Used by the standalone binary, where no webview is attached: every
//! requested side effect is logged and nothing is rendered. Real deployments
//! implement [`RenderSurface`](super::RenderSurface) over the host
//! application framework's browser window.

use url::Url;

use crate::surface::RenderSurface;

/// A render surface that only logs the actions it is asked to perform.
#[derive(Debug, Default)]
pub struct HeadlessSurface;

impl RenderSurface for HeadlessSurface {
    fn load(&mut self, url: &Url) {
        tracing::info!(url = %url, "surface: load requested");
    }

    fn load_offline_page(&mut self) {
        tracing::info!("surface: offline page requested");
    }

    fn enter_diagnostic_mode(&mut self) {
        tracing::info!("surface: diagnostic mode requested");
    }
}
