use std::io;
use std::path::PathBuf;
use std::process::Command;

/// Failure to obtain output from an external tool.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// The program could not be started (not installed, not executable).
    #[error("failed to run {program}: {source}")]
    Spawn {
        /// Command line that was attempted.
        program: String,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The program ran but exited unsuccessfully.
    #[error("{program} exited with {}", describe_status(.code))]
    Failed {
        /// Command line that was attempted.
        program: String,
        /// Exit code, or `None` when terminated by a signal.
        code: Option<i32>,
        /// Captured standard error, trimmed.
        stderr: String,
    },
    /// The program printed output that is not valid UTF-8.
    #[error("{program} produced non-UTF-8 output")]
    NonUtf8 {
        /// Command line that was attempted.
        program: String,
    },
}

fn describe_status(code: &Option<i32>) -> String {
    match *code {
        Some(code) => format!("status code {code}"),
        None => String::from("a signal"),
    }
}

/// Runs external programs synchronously and returns their standard output.
pub trait CommandRunner {
    /// Runs `program` with `args` and returns its standard output.
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

/// [`CommandRunner`] that spawns real processes via [`std::process::Command`].
///
/// Invocations block until the child exits; no timeout is applied.
#[derive(Clone, Debug)]
pub struct SystemCommandRunner {
    current_dir: PathBuf,
}

impl SystemCommandRunner {
    /// Creates a runner whose children start in `current_dir`.
    pub fn new(current_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_dir: current_dir.into(),
        }
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let command = command_line(program, args);
        tracing::trace!(%command, "spawning");

        let output = Command::new(program)
            .current_dir(&self.current_dir)
            .args(args)
            .output()
            .map_err(|source| CommandError::Spawn {
                program: command.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CommandError::Failed {
                program: command,
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_owned(),
            });
        }

        String::from_utf8(output.stdout).map_err(|_| CommandError::NonUtf8 { program: command })
    }
}

/// Joins a program and its arguments into a single display string.
pub(crate) fn command_line(program: &str, args: &[&str]) -> String {
    let mut line = String::from(program);
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
