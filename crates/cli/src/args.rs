//! CLI argument parsing using clap.
//!
//! Every path flag overrides the matching `fwgen.toml` entry. Relative paths
//! are resolved against `--root`.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Build-time generators for firmware secrets and version stamping.
///
/// Intended to run as a pre-compile hook of the firmware build. Run
/// `fwgen <command> --help` for command-specific options.
#[derive(Parser, Debug)]
#[command(name = "fwgen")]
#[command(about = "Build-time secrets and version source generators")]
#[command(version)]
pub struct Cli {
    /// Configuration file (default: <root>/fwgen.toml, optional).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root all relative paths are resolved against.
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Increase diagnostic output (repeat for more).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only report errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Build targets requested from the host; `idedata` skips generation.
    #[arg(long = "target", value_name = "NAME", global = true)]
    pub targets: Vec<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate the secrets implementation and header from the secrets document.
    Secrets(SecretsArgs),

    /// Write a secrets document of schema defaults if none exists.
    Template(TemplateArgs),

    /// Generate the build version source.
    Version(VersionArgs),
}

/// Arguments for the `secrets` command.
#[derive(Parser, Debug, Default)]
pub struct SecretsArgs {
    /// Only validate the secrets document; write nothing.
    #[arg(long)]
    pub check: bool,

    /// Secrets document.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,

    /// Generated implementation file.
    #[arg(long, value_name = "PATH")]
    pub implementation: Option<PathBuf>,

    /// Generated header file.
    #[arg(long, value_name = "PATH")]
    pub header: Option<PathBuf>,

    /// Directory scanned for sources including the header.
    #[arg(long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Directory the host writes object files to.
    #[arg(long, value_name = "DIR")]
    pub object_dir: Option<PathBuf>,

    /// Make-style dependency file to write.
    #[arg(long, value_name = "PATH")]
    pub depfile: Option<PathBuf>,

    /// Leave the ignore file alone.
    #[arg(long)]
    pub no_ignore: bool,
}

/// Arguments for the `template` command.
#[derive(Parser, Debug, Default)]
pub struct TemplateArgs {
    /// Secrets document to create.
    #[arg(long, value_name = "PATH")]
    pub source: Option<PathBuf>,
}

/// Arguments for the `version` command.
#[derive(Parser, Debug, Default)]
pub struct VersionArgs {
    /// Version manifest with `major` and `minor`.
    #[arg(long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Generated C source.
    #[arg(long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Print the resolved version instead of writing the source.
    #[arg(long)]
    pub print: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_subcommands() {
        let cli = Cli::parse_from(["fwgen", "version", "-vv", "--target", "idedata"]);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.targets, ["idedata"]);
        assert!(matches!(cli.command, Command::Version(_)));
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["fwgen", "-q", "-v", "secrets"]).is_err());
    }
}
