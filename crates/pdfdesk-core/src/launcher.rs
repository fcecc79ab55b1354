//! Launcher - opens the single application window
//!
//! Waits for host readiness, builds the window from [`WindowConfig`], and
//! sends it to the target URL exactly once. Remote load failures are left to
//! the webview; there is no retry or fallback page.

use crate::{
    assets::AssetDir,
    config::{WindowConfig, WINDOW_LABEL},
    host::{HostRuntime, HostWindow, ResolvedWindow},
    readiness::ReadySignal,
    Error, Result,
};
use tracing::{debug, info, instrument};

/// Launcher lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LauncherState {
    /// Waiting for the host to become ready
    NotStarted,
    /// The window exists; no further windows may be opened
    WindowOpen,
}

impl LauncherState {
    /// Check if transition to target state is valid
    pub fn can_transition_to(&self, target: LauncherState) -> bool {
        use LauncherState::*;
        matches!((self, target), (NotStarted, WindowOpen))
    }
}

impl std::fmt::Display for LauncherState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LauncherState::NotStarted => write!(f, "not_started"),
            LauncherState::WindowOpen => write!(f, "window_open"),
        }
    }
}

/// Opens one window and points it at the configured URL
#[derive(Debug)]
pub struct Launcher {
    config: WindowConfig,
    assets: AssetDir,
    state: LauncherState,
}

impl Launcher {
    /// Create a launcher for the given configuration
    pub fn new(config: WindowConfig, assets: AssetDir) -> Self {
        Self {
            config,
            assets,
            state: LauncherState::NotStarted,
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> LauncherState {
        self.state
    }

    /// Window configuration
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Wait for the host to become ready, then launch
    #[instrument(skip_all)]
    pub async fn run<H: HostRuntime>(&mut self, ready: ReadySignal, host: &H) -> Result<H::Window> {
        debug!("Waiting for host readiness");
        ready.await?;
        self.launch(host).await
    }

    /// Open the window and navigate it to the target URL.
    ///
    /// Only valid once. Once the host has opened the window, later calls fail
    /// without touching the host, even if navigation failed.
    #[instrument(skip_all, fields(url = %self.config.target_url))]
    pub async fn launch<H: HostRuntime>(&mut self, host: &H) -> Result<H::Window> {
        self.check_transition(LauncherState::WindowOpen)?;
        self.config.validate()?;

        let resolved = ResolvedWindow::resolve(WINDOW_LABEL, &self.config, &self.assets)?;
        debug!(config = %self.config.to_json(), icon = %resolved.icon_path.display(), "Opening window");

        let window = host.open_window(&resolved).await?;
        // The window exists from here on, so a retry must never reach the host.
        self.set_state(LauncherState::WindowOpen)?;
        window.navigate(&self.config.target_url)?;

        info!(
            label = window.label(),
            width = self.config.width,
            height = self.config.height,
            "Window opened"
        );

        Ok(window)
    }

    fn check_transition(&self, target: LauncherState) -> Result<()> {
        if !self.state.can_transition_to(target) {
            return Err(Error::InvalidStateTransition {
                from: self.state.to_string(),
                to: target.to_string(),
            });
        }
        Ok(())
    }

    fn set_state(&mut self, new_state: LauncherState) -> Result<()> {
        self.check_transition(new_state)?;
        info!(from = %self.state, to = %new_state, "State transition");
        self.state = new_state;
        Ok(())
    }
}
