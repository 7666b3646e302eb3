// src/output/browser.rs
//! Opens URLs in the user's default browser.

use crate::error::AppError;
use std::process::{Command, Stdio};

/// Opens a URL in the default browser, without waiting for it.
pub fn open_in_browser(url: &str) -> Result<(), AppError> {
    log::debug!("Opening browser at {}", url);

    let result = open_with_platform_command(url);

    match &result {
        Ok(()) => log::info!("Opened browser tab for {}", url),
        Err(e) => log::error!("Failed to open browser: {}", e),
    }

    result
}

#[cfg(target_os = "linux")]
fn open_with_platform_command(url: &str) -> Result<(), AppError> {
    spawn_detached("xdg-open", &[url])
}

#[cfg(target_os = "macos")]
fn open_with_platform_command(url: &str) -> Result<(), AppError> {
    spawn_detached("open", &[url])
}

#[cfg(target_os = "windows")]
fn open_with_platform_command(url: &str) -> Result<(), AppError> {
    spawn_detached("cmd", &["/C", "start", url])
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn open_with_platform_command(_url: &str) -> Result<(), AppError> {
    Err(AppError::Browser(
        "Browser launch not supported on this platform".to_string(),
    ))
}

/// Spawns the opener without waiting for it to exit. Browsers can
/// outlive this process by hours.
#[allow(dead_code)] // Unused on platforms without a browser command
fn spawn_detached(program: &str, args: &[&str]) -> Result<(), AppError> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
        .map_err(|e| AppError::Browser(format!("Failed to spawn {}: {}", program, e)))
}
