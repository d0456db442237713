use clap::Parser;
use std::path::PathBuf;

/// toolbox - Multi-platform package installer
#[derive(Parser, Debug)]
#[command(name = "toolbox")]
#[command(about = "Install curated packages with the native package manager")]
#[command(version)]
pub struct Cli {
    /// Import the package selection from a JSON file (skips the interactive prompts)
    #[arg(long = "import", value_name = "FILE")]
    pub import_file: Option<PathBuf>,

    /// Export the package selection to a JSON file
    #[arg(long = "export", value_name = "FILE")]
    pub export_file: Option<PathBuf>,

    /// Only show the install commands, do not execute them
    #[arg(long)]
    pub no_execute: bool,

    /// Path to a packages-info.json catalog to use instead of the bundled one
    #[arg(long = "file", value_name = "FILE")]
    pub pkg_file: Option<PathBuf>,

    /// List every catalog package with the managers it supports, then exit
    #[arg(long, conflicts_with_all = ["import_file", "export_file"])]
    pub list: bool,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["toolbox"]).unwrap();
        assert!(cli.import_file.is_none());
        assert!(cli.export_file.is_none());
        assert!(cli.pkg_file.is_none());
        assert!(!cli.no_execute);
        assert!(!cli.list);
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "toolbox",
            "--import",
            "in.json",
            "--export",
            "out.json",
            "--no-execute",
            "--file",
            "pkgs.json",
        ])
        .unwrap();
        assert_eq!(cli.import_file, Some(PathBuf::from("in.json")));
        assert_eq!(cli.export_file, Some(PathBuf::from("out.json")));
        assert_eq!(cli.pkg_file, Some(PathBuf::from("pkgs.json")));
        assert!(cli.no_execute);
    }

    #[test]
    fn test_list_conflicts_with_import() {
        assert!(Cli::try_parse_from(["toolbox", "--list", "--import", "x.json"]).is_err());
        assert!(Cli::try_parse_from(["toolbox", "--list", "--file", "pkgs.json"]).is_ok());
    }
}
