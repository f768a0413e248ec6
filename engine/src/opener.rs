//! Handing an address to the desktop (browser) launcher.
//!
//! The session never spawns processes itself; it calls whatever
//! [`ExternalOpener`] it was given. [`SystemOpener`] is the real one.

use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use thiserror::Error;

/// Something that can show an address to the user outside the terminal.
pub trait ExternalOpener {
    fn open(&self, address: &str) -> Result<(), OpenError>;
}

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("no launcher found (tried {tried})")]
    LauncherNotFound { tried: &'static str },
    #[error("failed to start {launcher}: {source}")]
    Spawn {
        launcher: String,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone)]
struct DetectedLauncher {
    binary: PathBuf,
    args: Vec<&'static str>,
}

#[cfg(target_os = "macos")]
const LAUNCHERS: &str = "open";
#[cfg(windows)]
const LAUNCHERS: &str = "cmd";
#[cfg(not(any(target_os = "macos", windows)))]
const LAUNCHERS: &str = "xdg-open";

#[cfg(target_os = "macos")]
fn detect_launcher() -> Option<DetectedLauncher> {
    which::which("open").ok().map(|binary| DetectedLauncher {
        binary,
        args: Vec::new(),
    })
}

#[cfg(windows)]
fn detect_launcher() -> Option<DetectedLauncher> {
    // `start` treats the first quoted argument as a window title.
    which::which("cmd").ok().map(|binary| DetectedLauncher {
        binary,
        args: vec!["/C", "start", ""],
    })
}

#[cfg(not(any(target_os = "macos", windows)))]
fn detect_launcher() -> Option<DetectedLauncher> {
    which::which("xdg-open").ok().map(|binary| DetectedLauncher {
        binary,
        args: Vec::new(),
    })
}

/// Opens addresses with the platform launcher: `xdg-open`, `open` or
/// `cmd /C start`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, address: &str) -> Result<(), OpenError> {
        let launcher = detect_launcher().ok_or(OpenError::LauncherNotFound { tried: LAUNCHERS })?;

        tracing::debug!(launcher = %launcher.binary.display(), address, "Spawning launcher");

        // Launcher output would land on top of the TUI.
        Command::new(&launcher.binary)
            .args(&launcher.args)
            .arg(address)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map(drop)
            .map_err(|source| OpenError::Spawn {
                launcher: launcher.binary.display().to_string(),
                source,
            })
    }
}
