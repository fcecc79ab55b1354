//! pdfdesk - Drawboard PDF desktop shell
//!
//! Opens one sandboxed webview window on the hosted app once Tauri is ready.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use host::TauriHost;
use pdfdesk_core::{readiness, AssetDir, Launcher, WindowConfig};
use tauri::{Manager, RunEvent};
use tracing::{error, info, warn};

mod host;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,pdfdesk=debug".to_string())
        )
        .init();

    info!(version = pdfdesk_core::VERSION, "Starting pdfdesk");

    let app = tauri::Builder::default()
        .build(tauri::generate_context!())
        .context("failed to build Tauri application")?;

    let assets = match app.path().resource_dir() {
        Ok(dir) => AssetDir::new(dir),
        Err(e) => {
            warn!(error = %e, "No resource directory, using executable directory");
            AssetDir::beside_executable()?
        }
    };

    let host = TauriHost::new(app.handle().clone());
    let exit_handle = app.handle().clone();
    let (trigger, ready) = readiness::channel();
    let mut launcher = Launcher::new(WindowConfig::default(), assets);

    tauri::async_runtime::spawn(async move {
        if let Err(e) = launcher.run(ready, &host).await {
            error!(error = %e, code = e.error_code(), "Launch failed");
            exit_handle.exit(1);
        }
    });

    let mut trigger = Some(trigger);
    app.run(move |_app, event| {
        if let RunEvent::Ready = event {
            if let Some(trigger) = trigger.take() {
                trigger.fire();
            }
        }
    });

    Ok(())
}
