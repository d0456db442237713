//! Platform and package manager detection
//!
//! Identifies the operating system from the compile-time target OS and, on
//! Linux, searches `PATH` for the first available package manager.
//!
//! # Design
//!
//! - **Never fails**: an unrecognised OS or a Linux system without a known
//!   manager yields `Unknown`, which is a valid outcome
//! - **Lookup order**: apt, then dnf, then pacman
//! - **Testable core**: `detect_platform_with` takes the OS identifier and a
//!   lookup function so precedence can be checked without touching `PATH`

use std::fmt;
use tracing::{debug, info};

use crate::types::{Manager, Os};

/// Detected operating system and package manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PlatformInfo {
    pub os: Os,
    pub manager: Manager,
}

impl PlatformInfo {
    pub fn new(os: Os, manager: Manager) -> Self {
        Self { os, manager }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (manager: {})", self.os, self.manager)
    }
}

/// Detect the running platform.
///
/// Uses `std::env::consts::OS` and resolves Linux managers through `which`.
pub fn detect_platform() -> PlatformInfo {
    let info = detect_platform_with(std::env::consts::OS, is_on_path);
    info!("Platform detection: {}", info);
    info
}

/// Detection for an explicit OS identifier and executable lookup.
///
/// `os_id` uses the `std::env::consts::OS` vocabulary (`"windows"`,
/// `"macos"`, `"linux"`, ...). `is_available` answers whether an executable is
/// resolvable; it is only consulted on Linux.
pub fn detect_platform_with<F>(os_id: &str, is_available: F) -> PlatformInfo
where
    F: Fn(&str) -> bool,
{
    match os_id {
        "windows" => PlatformInfo::new(Os::Windows, Manager::Winget),
        "macos" => PlatformInfo::new(Os::Macos, Manager::Brew),
        "linux" => {
            let manager = Manager::LINUX_PREFERENCE
                .into_iter()
                .find(|m| is_available(m.as_str()))
                .unwrap_or(Manager::Unknown);
            PlatformInfo::new(Os::Linux, manager)
        }
        _ => PlatformInfo::default(),
    }
}

/// Whether `program` resolves to an executable on the command search path
pub fn is_on_path(program: &str) -> bool {
    match which::which(program) {
        Ok(path) => {
            debug!("Found {} at {:?}", program, path);
            true
        }
        Err(e) => {
            debug!("{} not found on PATH: {}", program, e);
            false
        }
    }
}
