mod check;
mod completions;
mod generate;

use std::path::Path;

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use jwrap_manifest::Manifest;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for jwrap_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open and validate a manifest, exiting with a diagnostic on failure.
pub(crate) fn open_manifest(path: &Path) -> Manifest {
    tracing::debug!(path = %path.display(), "reading manifest");
    Manifest::from_file(path).unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "jwrap")]
#[command(version)]
#[command(about = "Generate Java wrapper classes from TOML definitions")]
pub(crate) struct Cli {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from jwrap.toml
    Generate(GenerateCommand),

    /// Validate jwrap.toml without generating code
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["jwrap", "generate"]).unwrap();
        assert_eq!(cli.verbose, 0);
        match cli.command {
            Commands::Generate(cmd) => {
                assert_eq!(cmd.config, PathBuf::from("jwrap.toml"));
                assert_eq!(cmd.output, PathBuf::from("out"));
                assert!(!cmd.dry_run);
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::try_parse_from(["jwrap", "check", "-vv", "-c", "api.toml"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Check(cmd) => assert_eq!(cmd.config, PathBuf::from("api.toml")),
            _ => panic!("expected check"),
        }
    }
}
