//! Window configuration
//!
//! The launcher opens exactly one window, and everything about it is fixed at
//! compile time. [`WindowConfig::default`] is the only configuration the
//! shipped binary ever uses; the fields stay public so hosts and tests can
//! inspect them.

use crate::{Error, Result};
use serde::Serialize;
use std::path::{Component, PathBuf};
use url::Url;

/// Window width in logical pixels
pub const DEFAULT_WIDTH: u32 = 1200;

/// Window height in logical pixels
pub const DEFAULT_HEIGHT: u32 = 800;

/// Window title shown by the OS
pub const DEFAULT_TITLE: &str = "Drawboard PDF";

/// The remote application loaded into the window
pub const TARGET_URL: &str = "https://pdf.drawboard.com/";

/// Icon location, relative to the application's asset directory
pub const ICON_RELATIVE_PATH: &str = "assets/icon.png";

/// Label of the single window
pub const WINDOW_LABEL: &str = "main";

/// Static parameters for the launcher's single window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowConfig {
    /// Inner width in logical pixels
    pub width: u32,
    /// Inner height in logical pixels
    pub height: u32,
    /// Window title
    pub title: String,
    /// Icon path relative to the asset directory
    pub icon: PathBuf,
    /// Whether loaded content may call into native host APIs
    pub allow_host_integration: bool,
    /// Absolute https URL the window navigates to
    pub target_url: Url,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            icon: PathBuf::from(ICON_RELATIVE_PATH),
            allow_host_integration: false,
            target_url: Url::parse(TARGET_URL).expect("TARGET_URL is a valid absolute URL"),
        }
    }
}

impl WindowConfig {
    /// Check the configuration before a window is built from it
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidConfig(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }

        if self.target_url.scheme() != "https" {
            return Err(Error::InvalidConfig(format!(
                "target URL must use https, got {}",
                self.target_url
            )));
        }

        if self.target_url.cannot_be_a_base() || self.target_url.host().is_none() {
            return Err(Error::InvalidConfig(format!(
                "target URL must be absolute, got {}",
                self.target_url
            )));
        }

        let escapes = self
            .icon
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if self.icon.as_os_str().is_empty() || escapes {
            return Err(Error::InvalidConfig(format!(
                "icon path must be relative to the asset directory, got {}",
                self.icon.display()
            )));
        }

        Ok(())
    }

    /// Export as JSON for structured logging
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 1200);
        assert_eq!(config.height, 800);
        assert!(!config.allow_host_integration);
        assert_eq!(config.target_url.as_str(), "https://pdf.drawboard.com/");
        assert_eq!(config.icon, PathBuf::from("assets/icon.png"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_zero_size() {
        let config = WindowConfig {
            height: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_plain_http() {
        let config = WindowConfig {
            target_url: Url::parse("http://pdf.drawboard.com/").unwrap(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_escaping_icon_path() {
        for icon in ["../icon.png", "/usr/share/icons/icon.png", ""] {
            let config = WindowConfig {
                icon: PathBuf::from(icon),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "accepted {icon:?}");
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = WindowConfig::default().to_json();
        assert!(json.contains("\"allowHostIntegration\":false"));
        assert!(json.contains("\"targetUrl\":\"https://pdf.drawboard.com/\""));
    }
}
