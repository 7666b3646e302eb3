// src/output/clipboard.rs
//! Platform-specific clipboard operations.

use crate::error::AppError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Copies content to the system clipboard.
///
/// Tries arboard first, then falls back to the platform's clipboard
/// command. Some desktop sessions expose only one of the two paths.
pub fn copy_to_clipboard(content: &str) -> Result<(), AppError> {
    log::debug!("Copying {} characters to clipboard", content.len());

    match try_arboard_clipboard(content) {
        Ok(()) => {
            log::info!("Content copied to clipboard using arboard");
            return Ok(());
        }
        Err(e) => {
            log::debug!("Arboard failed: {}, trying platform-specific methods", e);
        }
    }

    let result = copy_with_platform_command(content);

    match &result {
        Ok(()) => log::info!("Content copied to clipboard using platform command"),
        Err(e) => log::error!("Failed to copy to clipboard: {}", e),
    }

    result
}

/// Tries to copy using the arboard crate.
fn try_arboard_clipboard(content: &str) -> Result<(), AppError> {
    use arboard::Clipboard;

    let mut clipboard = Clipboard::new()
        .map_err(|e| AppError::Clipboard(format!("Failed to access clipboard: {}", e)))?;

    clipboard
        .set_text(content)
        .map_err(|e| AppError::Clipboard(format!("Failed to set clipboard text: {}", e)))?;

    Ok(())
}

/// Platform-specific clipboard command execution.
#[cfg(target_os = "linux")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    // Detect Wayland vs X11
    let is_wayland = std::env::var("WAYLAND_DISPLAY").is_ok()
        || std::env::var("XDG_SESSION_TYPE").is_ok_and(|s| s == "wayland");

    if is_wayland {
        pipe_through_command("wl-copy", &[], content)
    } else {
        pipe_through_command("xclip", &["-selection", "clipboard"], content)
    }
}

#[cfg(target_os = "macos")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    pipe_through_command("pbcopy", &[], content)
}

#[cfg(target_os = "windows")]
fn copy_with_platform_command(content: &str) -> Result<(), AppError> {
    pipe_through_command("clip", &[], content)
}

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
fn copy_with_platform_command(_content: &str) -> Result<(), AppError> {
    Err(AppError::Clipboard(
        "Clipboard not supported on this platform".to_string(),
    ))
}

/// Spawns a clipboard command and feeds it the content on stdin.
#[allow(dead_code)] // Unused on platforms without a clipboard command
fn pipe_through_command(program: &str, args: &[&str], content: &str) -> Result<(), AppError> {
    log::debug!("Attempting to copy with {}", program);

    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| AppError::Clipboard(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(content.as_bytes())
            .map_err(|e| AppError::Clipboard(format!("Failed to write to {}: {}", program, e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| AppError::Clipboard(format!("Failed to wait for {}: {}", program, e)))?;

    if output.status.success() {
        Ok(())
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(AppError::Clipboard(format!(
            "{} failed: {}",
            program, stderr
        )))
    }
}
