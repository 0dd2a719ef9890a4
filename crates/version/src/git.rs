use host::CommandRunner;

/// Runs git and returns trimmed, non-empty output. Every failure maps to
/// `None`: version stamping must never fail the build.
fn git(runner: &dyn CommandRunner, args: &[&str]) -> Option<String> {
    match runner.run("git", args) {
        Ok(output) => {
            let trimmed = output.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(error) => {
            tracing::debug!(%error, "git unavailable");
            None
        }
    }
}

/// Short hash of `HEAD` (`git rev-parse --short HEAD`).
pub fn short_commit(runner: &dyn CommandRunner) -> Option<String> {
    git(runner, &["rev-parse", "--short", "HEAD"])
}

/// Nearest tag description (`git describe --tags`).
pub fn describe_tags(runner: &dyn CommandRunner) -> Option<String> {
    git(runner, &["describe", "--tags"])
}
