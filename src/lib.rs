//! toolbox Library
//!
//! Core functionality for the toolbox package installer: catalog loading,
//! platform detection, install command resolution, selection files, the
//! interactive checklist and command execution.

pub mod catalog;
pub mod cli;
pub mod command_runner;
pub mod config;
pub mod error;
pub mod installer;
pub mod logic;
pub mod platform;
pub mod prompt;
pub mod selection;
pub mod types;

// Re-export main types for convenience
pub use catalog::{AvailabilityStats, Catalog, Category, Package, load_catalog};
pub use command_runner::{
    CommandOutcome, InstallReport, ShellRunner, SystemShell, run_install_commands,
};
pub use config::{RunConfig, RunMode, SelectionSource};
pub use error::ToolboxError;
pub use installer::{AvailabilityReport, Installer, RunOutcome};
pub use logic::resolver::{InstallCommand, build_install_commands};
pub use platform::{PlatformInfo, detect_platform};
pub use prompt::{Choice, DialoguerPrompt, MultiSelectPrompt, collect_selection};
pub use selection::{export_selection, import_selection};
pub use types::{Manager, Os};
