//! Run configuration.
//!
//! The CLI is parsed once into a [`RunConfig`], which is what the installer
//! pipeline consumes. Keeping the two apart lets tests drive the pipeline
//! without going through argument parsing.

use std::path::PathBuf;

use crate::cli::Cli;

/// Where the package selection comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionSource {
    /// Ask the user, one checklist per category
    Interactive,
    /// Read a previously exported selection file
    Import(PathBuf),
}

/// What a run should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// Select, build and (optionally) execute install commands
    Install,
    /// Print the catalog availability report
    List,
}

/// Everything the installer pipeline needs to know about one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub mode: RunMode,
    /// Catalog override; `None` means the bundled catalog
    pub catalog_path: Option<PathBuf>,
    pub selection: SelectionSource,
    pub export_path: Option<PathBuf>,
    /// Run the generated commands instead of only printing them
    pub execute: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            mode: RunMode::Install,
            catalog_path: None,
            selection: SelectionSource::Interactive,
            export_path: None,
            execute: true,
        }
    }
}

impl From<&Cli> for RunConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            mode: if cli.list {
                RunMode::List
            } else {
                RunMode::Install
            },
            catalog_path: cli.pkg_file.clone(),
            selection: match &cli.import_file {
                Some(path) => SelectionSource::Import(path.clone()),
                None => SelectionSource::Interactive,
            },
            export_path: cli.export_file.clone(),
            execute: !cli.no_execute,
        }
    }
}
