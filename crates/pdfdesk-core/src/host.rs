//! Host runtime seam
//!
//! A host is whatever owns native windows and the application lifecycle. The
//! launcher only needs two things from it: open a window, then navigate it.

use crate::{assets::AssetDir, config::WindowConfig, Result};
use async_trait::async_trait;
use std::path::PathBuf;
use url::Url;

/// A window description with every path already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedWindow {
    /// Label the host registers the window under
    pub label: String,
    /// The static configuration the window was built from
    pub config: WindowConfig,
    /// Absolute icon path inside the asset directory
    pub icon_path: PathBuf,
}

impl ResolvedWindow {
    /// Resolve a configuration against an asset directory
    pub fn resolve(label: impl Into<String>, config: &WindowConfig, assets: &AssetDir) -> Result<Self> {
        Ok(Self {
            label: label.into(),
            icon_path: assets.resolve(&config.icon)?,
            config: config.clone(),
        })
    }
}

/// Native window host
#[async_trait]
pub trait HostRuntime: Send + Sync {
    /// Window handle produced by this host
    type Window: HostWindow;

    /// Create a visible top-level window without loading any content
    async fn open_window(&self, window: &ResolvedWindow) -> Result<Self::Window>;
}

/// Handle to a window created by a [`HostRuntime`]
pub trait HostWindow: Send {
    /// Label the window was registered under
    fn label(&self) -> &str;

    /// Point the window's webview at a URL
    fn navigate(&self, url: &Url) -> Result<()>;
}
