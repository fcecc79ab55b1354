//! Tauri implementation of the launcher's host seam

use async_trait::async_trait;
use pdfdesk_core::{Error, HostRuntime, HostWindow, ResolvedWindow, Result};
use std::path::Path;
use tauri::image::Image;
use tauri::ipc::CapabilityBuilder;
use tauri::{AppHandle, Manager, WebviewUrl, WebviewWindow, WebviewWindowBuilder};
use tracing::{debug, warn};
use url::Url;

/// Windows start blank; the launcher performs the one real navigation.
const BLANK_PAGE: &str = "about:blank";

/// Read the window icon, falling back to the platform default when it is
/// missing or unreadable.
fn load_icon(path: &Path) -> Option<Image<'static>> {
    match Image::from_path(path) {
        Ok(icon) => Some(icon),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Window icon unavailable, using default");
            None
        }
    }
}

/// Host runtime backed by a running Tauri application
pub struct TauriHost {
    app: AppHandle,
}

impl TauriHost {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }

    /// Let the window's remote origin call the core IPC commands.
    ///
    /// Without this, content loaded from a remote URL has no IPC access.
    fn grant_host_integration(&self, window: &ResolvedWindow) -> Result<()> {
        let origin = window.config.target_url.origin().ascii_serialization();
        warn!(origin = %origin, label = %window.label, "Granting host integration to remote content");

        let capability = CapabilityBuilder::new("remote-host-integration")
            .remote(format!("{origin}/*"))
            .window(window.label.clone())
            .permission("core:default");
        self.app.add_capability(capability).map_err(Error::window)
    }
}

#[async_trait]
impl HostRuntime for TauriHost {
    type Window = TauriWindow;

    async fn open_window(&self, window: &ResolvedWindow) -> Result<Self::Window> {
        let icon = load_icon(&window.icon_path);

        if window.config.allow_host_integration {
            self.grant_host_integration(window)?;
        }

        let blank = Url::parse(BLANK_PAGE).map_err(Error::window)?;
        let mut builder = WebviewWindowBuilder::new(&self.app, &window.label, WebviewUrl::External(blank))
            .title(&window.config.title)
            .inner_size(f64::from(window.config.width), f64::from(window.config.height));
        if let Some(icon) = icon {
            builder = builder.icon(icon).map_err(Error::window)?;
        }
        let webview = builder.build().map_err(Error::window)?;

        debug!(label = %window.label, "Webview window created");
        Ok(TauriWindow { webview })
    }
}

/// A Tauri webview window opened by the launcher
pub struct TauriWindow {
    webview: WebviewWindow,
}

impl HostWindow for TauriWindow {
    fn label(&self) -> &str {
        self.webview.label()
    }

    fn navigate(&self, url: &Url) -> Result<()> {
        self.webview.navigate(url.clone()).map_err(|e| Error::Navigation {
            url: url.to_string(),
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_icon_falls_back_to_default() {
        let missing = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("missing.png");
        assert!(load_icon(&missing).is_none());
    }

    #[test]
    fn test_bundled_icon_loads() {
        let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets").join("icon.png");
        let icon = load_icon(&bundled).expect("bundled icon decodes");
        assert_eq!(icon.width(), 128);
        assert_eq!(icon.height(), 128);
    }
}
