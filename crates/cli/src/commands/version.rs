use super::override_path;
use crate::args::VersionArgs;
use crate::config::VersionSection;
use crate::error::TaskResult;
use host::{CommandRunner, FileStore};
use std::io::Write;
use version::{generate_version, resolve_version};

/// Writes the version source, or prints the bare version with `--print`.
pub fn execute(
    store: &dyn FileStore,
    runner: &dyn CommandRunner,
    mut section: VersionSection,
    args: VersionArgs,
    out: &mut dyn Write,
) -> TaskResult<()> {
    override_path(&mut section.manifest, args.manifest);
    override_path(&mut section.output, args.output);

    if args.print {
        let resolved = resolve_version(store, runner, &section.manifest)?;
        writeln!(out, "{}", resolved.text)?;
        return Ok(());
    }

    let resolved = generate_version(
        store,
        runner,
        &section.manifest,
        &section.output,
        &section.options(),
    )?;
    writeln!(out, "Build Version: {}", resolved.text)?;
    Ok(())
}
