//! Install Command Resolver
//!
//! Translates a selection of package names into the literal install commands
//! the catalog defines for the detected package manager.
//!
//! # Resolution Rules
//!
//! | Situation                               | Result             |
//! |-----------------------------------------|--------------------|
//! | Name not in the catalog                 | Skipped silently   |
//! | Package has no command for the manager  | Skipped silently   |
//! | Name defined in several categories      | Last definition wins |
//! | Name selected twice                     | Command emitted twice |
//!
//! Output order follows the selection order. Nothing is deduplicated.
//!
//! # What This Explicitly Refuses To Do
//!
//! - Resolve dependencies between packages
//! - Build commands from package names: only catalog strings are emitted

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use crate::catalog::{Catalog, Package};
use crate::types::Manager;

/// A shell command taken verbatim from the catalog.
///
/// Only the resolver constructs these, so nothing derived from user input
/// reaches the shell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstallCommand(String);

impl InstallCommand {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InstallCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name -> package lookup over every category, later entries overwriting earlier ones.
fn package_lookup(catalog: &Catalog) -> HashMap<&str, &Package> {
    catalog
        .packages()
        .map(|package| (package.name.as_str(), package))
        .collect()
}

/// Resolve `selection` into install commands for `manager`.
///
/// Returns an empty vector (not an error) when nothing resolves; the caller
/// decides whether that is fatal.
pub fn build_install_commands<S: AsRef<str>>(
    selection: &[S],
    catalog: &Catalog,
    manager: Manager,
) -> Vec<InstallCommand> {
    let lookup = package_lookup(catalog);

    selection
        .iter()
        .filter_map(|name| {
            let name: &str = name.as_ref();
            let Some(package) = lookup.get(name) else {
                debug!("Skipping {:?}: not in catalog", name);
                return None;
            };
            let command = package.command_for(manager);
            if command.is_none() {
                debug!("Skipping {:?}: no install command for {}", name, manager);
            }
            command.map(|cmd| InstallCommand(cmd.to_string()))
        })
        .collect()
}
