#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `fwgen` command-line front end. It parses arguments
//! with clap, loads the optional `fwgen.toml`, installs logging, and hands the
//! work to the `secrets` and `version` generators using the local filesystem
//! and the system `git` as host capabilities.
//!
//! # Design
//!
//! [`run`] takes the argument iterator together with handles for standard
//! output and error, so tests drive the whole front end in-process. Results go
//! to standard output; diagnostics and errors go to standard error.
//!
//! # Errors
//!
//! Usage errors reported by clap exit with status `2`. Every other failure is
//! rendered as `fwgen: <message>` on standard error with status `1`.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let status = cli::run(["fwgen", "--help"], &mut stdout, &mut stderr);
//!
//! assert_eq!(status, 0);
//! assert!(String::from_utf8_lossy(&stdout).contains("secrets"));
//! ```

pub mod args;
mod commands;
pub mod config;
mod error;

pub use args::Cli;
pub use error::{TaskError, TaskResult};

use args::Command;
use clap::Parser;
use config::load_config;
use host::{LocalFileStore, SystemCommandRunner};
use logging::VerbosityConfig;
use std::env;
use std::ffi::OsString;
use std::io::Write;

/// Build target the host requests while collecting IDE metadata; no sources
/// are compiled, so generation is skipped.
pub const IDE_METADATA_TARGET: &str = "idedata";

const MAX_EXIT_CODE: i32 = 255;

/// Parses command-line arguments without running anything.
pub fn parse_args<I, S>(arguments: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
{
    Cli::try_parse_from(arguments)
}

/// Runs the CLI and returns the process exit status.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString> + Clone,
    Out: Write,
    Err: Write,
{
    let cli = match parse_args(arguments) {
        Ok(cli) => cli,
        Err(error) => {
            let rendered = error.render();
            let _ = if error.use_stderr() {
                write!(stderr, "{rendered}")
            } else {
                write!(stdout, "{rendered}")
            };
            return error.exit_code();
        }
    };

    let verbosity = if cli.quiet {
        VerbosityConfig::quiet()
    } else {
        VerbosityConfig::from_verbose_level(cli.verbose)
    };
    logging::init_tracing(verbosity);

    match execute(cli, stdout) {
        Ok(()) => 0,
        Err(error) => {
            tracing::debug!(?error, "command failed");
            let _ = writeln!(stderr, "fwgen: {error}");
            1
        }
    }
}

/// Converts a status returned by [`run`] into an [`std::process::ExitCode`].
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(u8::try_from(clamped).unwrap_or(u8::MAX))
}

fn execute<Out: Write>(cli: Cli, stdout: &mut Out) -> TaskResult<()> {
    if cli.targets.iter().any(|target| target == IDE_METADATA_TARGET) {
        tracing::debug!("{IDE_METADATA_TARGET} target requested; skipping generation");
        return Ok(());
    }

    let root = match cli.root {
        Some(root) => root,
        None => env::current_dir()?,
    };
    if !root.is_dir() {
        return Err(TaskError::Usage(format!(
            "project root {} is not a directory",
            root.display()
        )));
    }

    let config = load_config(&root, cli.config.as_deref())?;
    let store = LocalFileStore::new(root.clone());

    match cli.command {
        Command::Secrets(args) => commands::secrets::execute(&store, config.secrets, args, stdout),
        Command::Template(args) => commands::template::execute(&store, config.secrets, args, stdout),
        Command::Version(args) => {
            let runner = SystemCommandRunner::new(root);
            commands::version::execute(&store, &runner, config.version, args, stdout)
        }
    }
}
