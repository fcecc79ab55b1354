//! pdfdesk Core - Host-independent desktop launcher
//!
//! This crate provides everything the pdfdesk shell does that does not need a
//! display:
//! - Fixed window configuration (size, icon, security posture, target URL)
//! - Asset resolution against the application directory
//! - A one-shot host readiness signal
//! - The launcher state machine gating window creation on readiness
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  fire()   ┌──────────────┐
//! │ Host runtime │──────────▶│ ReadySignal  │
//! │ (e.g. Tauri) │           └──────┬───────┘
//! └──────▲───────┘                  │ await
//!        │ open_window + navigate   │
//!        │                   ┌──────┴───────┐     ┌──────────────┐
//!        └───────────────────│   Launcher   │◀────│ WindowConfig │
//!                            └──────────────┘     │   AssetDir   │
//!                                                 └──────────────┘
//! ```

pub mod assets;
pub mod config;
pub mod error;
pub mod host;
pub mod launcher;
pub mod readiness;

pub use assets::AssetDir;
pub use config::{WindowConfig, TARGET_URL, WINDOW_LABEL};
pub use error::{Error, Result};
pub use host::{HostRuntime, HostWindow, ResolvedWindow};
pub use launcher::{Launcher, LauncherState};
pub use readiness::{ReadySignal, ReadyTrigger};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
