//! Install command execution.
//!
//! Every install command goes through a [`ShellRunner`]. Commands run one at
//! a time, in order, and each one runs to completion before the next starts.
//! A failing command is reported and the batch continues.

use std::io;
use std::process::{Command, Stdio};
use tracing::{info, warn};

use crate::logic::resolver::InstallCommand;

/// Executes a literal command string through a shell.
pub trait ShellRunner {
    /// Run `command` to completion and return its exit code.
    ///
    /// `Err` means the shell itself could not be started.
    fn run_shell(&mut self, command: &str) -> io::Result<i32>;
}

/// The platform shell: `sh -c` on Unix, `cmd /C` on Windows.
///
/// Stdio is inherited so the package manager can prompt for passwords and
/// show its own progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemShell;

impl SystemShell {
    /// `cmd.exe` parses its own command line, so the command is appended
    /// as-is rather than quoted as a single argument.
    #[cfg(windows)]
    fn command(command: &str) -> Command {
        use std::os::windows::process::CommandExt;

        let mut cmd = Command::new("cmd");
        cmd.arg("/C").raw_arg(command);
        cmd
    }

    #[cfg(not(windows))]
    fn command(command: &str) -> Command {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", command]);
        cmd
    }
}

impl ShellRunner for SystemShell {
    fn run_shell(&mut self, command: &str) -> io::Result<i32> {
        info!("run_shell: {}", command);
        let status = Self::command(command)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()?;
        // Terminated by a signal
        Ok(status.code().unwrap_or(-1))
    }
}

/// Result of one install command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub command: InstallCommand,
    /// Exit code, or `None` if the shell could not be spawned
    pub exit_code: Option<i32>,
}

impl CommandOutcome {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Per-command results of an install run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub outcomes: Vec<CommandOutcome>,
}

impl InstallReport {
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.success()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}

/// Run each command in order, reporting success or failure per command.
///
/// All commands are attempted regardless of earlier failures.
pub fn run_install_commands(
    commands: &[InstallCommand],
    runner: &mut dyn ShellRunner,
) -> InstallReport {
    let mut report = InstallReport::default();

    for command in commands {
        let exit_code = match runner.run_shell(command.as_str()) {
            Ok(code) => Some(code),
            Err(e) => {
                warn!("Failed to start shell for {:?}: {}", command.as_str(), e);
                None
            }
        };

        let outcome = CommandOutcome {
            command: command.clone(),
            exit_code,
        };
        if outcome.success() {
            println!("✅ Installed: {}", command);
        } else {
            match exit_code {
                Some(code) => warn!("{:?} exited with code {}", command.as_str(), code),
                None => warn!("{:?} did not run", command.as_str()),
            }
            println!("⚠️ Failed: {}", command);
        }
        report.outcomes.push(outcome);
    }

    if !report.all_succeeded() {
        warn!(
            "{} of {} install command(s) failed",
            report.failed(),
            report.outcomes.len()
        );
    }
    report
}
