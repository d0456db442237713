//! Installer pipeline
//!
//! Catalog -> platform -> selection (prompt or import) -> optional export ->
//! install commands -> optional execution. Each stage finishes before the
//! next one starts.

use anyhow::{Context, Result};
use std::fmt;
use tracing::info;

use crate::catalog::{Catalog, load_catalog};
use crate::command_runner::{InstallReport, ShellRunner, run_install_commands};
use crate::config::{RunConfig, RunMode, SelectionSource};
use crate::logic::resolver::{InstallCommand, build_install_commands};
use crate::platform::{PlatformInfo, detect_platform};
use crate::prompt::{MultiSelectPrompt, collect_selection};
use crate::selection::{export_selection, import_selection};
use crate::types::Manager;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The availability report was printed
    Listed,
    /// The selection produced no command for this platform
    NoCommands { selected: usize },
    /// Commands were generated; `report` is `None` when execution was skipped
    Completed {
        commands: Vec<InstallCommand>,
        report: Option<InstallReport>,
    },
}

/// Installer instance
#[derive(Debug, Clone)]
pub struct Installer {
    config: RunConfig,
    platform: Option<PlatformInfo>,
}

impl Installer {
    /// Create a new installer that detects the platform when run
    pub fn new(config: RunConfig) -> Self {
        Self {
            config,
            platform: None,
        }
    }

    /// Use `platform` instead of detecting it
    pub fn with_platform(mut self, platform: PlatformInfo) -> Self {
        self.platform = Some(platform);
        self
    }

    /// Run the pipeline.
    ///
    /// `prompt` is only consulted for interactive selection and `shell` only
    /// when execution is enabled.
    pub fn run(
        &self,
        prompt: &mut dyn MultiSelectPrompt,
        shell: &mut dyn ShellRunner,
    ) -> Result<RunOutcome> {
        let catalog = load_catalog(self.config.catalog_path.as_deref())
            .context("Failed to load package catalog")?;

        let platform = self.platform.unwrap_or_else(detect_platform);
        println!("🚀 Detected platform: {}", platform);

        if self.config.mode == RunMode::List {
            print!("{}", AvailabilityReport::new(&catalog, platform.manager));
            return Ok(RunOutcome::Listed);
        }

        let selection = match &self.config.selection {
            SelectionSource::Import(path) => {
                let selection = import_selection(path).context("Failed to import selection")?;
                println!("✅ Imported package selection from {}", path.display());
                selection
            }
            SelectionSource::Interactive => collect_selection(&catalog, prompt),
        };
        info!("Selection: {:?}", selection);

        if let Some(path) = &self.config.export_path {
            export_selection(&selection, path).context("Failed to export selection")?;
            println!("✅ Exported selection to {}", path.display());
        }

        let commands = build_install_commands(&selection, &catalog, platform.manager);
        if commands.is_empty() {
            println!("⚠️ No install commands generated for your platform.");
            return Ok(RunOutcome::NoCommands {
                selected: selection.len(),
            });
        }

        println!("🚀 Generated install commands:");
        for command in &commands {
            println!("  📦 {}", command);
        }

        let report = if self.config.execute {
            println!("🚀 Executing install commands...");
            Some(run_install_commands(&commands, shell))
        } else {
            info!("Execution disabled, {} command(s) not run", commands.len());
            None
        };

        Ok(RunOutcome::Completed { commands, report })
    }
}

/// Catalog availability table for one manager, followed by per-manager totals
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityReport<'a> {
    catalog: &'a Catalog,
    current: Manager,
}

impl<'a> AvailabilityReport<'a> {
    pub fn new(catalog: &'a Catalog, current: Manager) -> Self {
        Self { catalog, current }
    }
}

impl fmt::Display for AvailabilityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let catalog = self.catalog;
        let current = self.current;
        let width = catalog
            .packages()
            .map(|p| p.name.chars().count())
            .max()
            .unwrap_or(0);

        for category in catalog.categories() {
            writeln!(f, "{}:", category.name)?;
            for package in &category.packages {
                let marker = if package.command_for(current).is_some() {
                    "✅"
                } else {
                    "❌"
                };
                let managers: Vec<&str> = package
                    .managers()
                    .into_iter()
                    .map(Manager::as_str)
                    .collect();
                let managers = if managers.is_empty() {
                    "-".to_string()
                } else {
                    managers.join(", ")
                };
                writeln!(f, "  {} {:<width$}  {}", marker, package.name, managers)?;
            }
        }

        let stats = catalog.availability();
        let counts: Vec<String> = stats
            .per_manager
            .iter()
            .map(|(m, count)| format!("{}: {}", m, count))
            .collect();
        writeln!(f, "📦 {} packages ({})", stats.total, counts.join(", "))?;
        if current.is_known() {
            writeln!(
                f,
                "📦 {} of {} installable with {}",
                stats.count_for(current),
                stats.total,
                current
            )?;
        }
        Ok(())
    }
}
