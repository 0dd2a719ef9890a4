use crate::args::TemplateArgs;
use crate::config::SecretsSection;
use crate::error::TaskResult;
use host::FileStore;
use std::io::Write;

/// Writes the defaults document unless one already exists, then makes sure
/// the ignore file lists it.
pub fn execute(
    store: &dyn FileStore,
    mut section: SecretsSection,
    args: TemplateArgs,
    out: &mut dyn Write,
) -> TaskResult<()> {
    super::override_path(&mut section.source, args.source);
    let schema = section.schema()?;

    if secrets::ensure_template(store, &section.source, &schema)? {
        writeln!(out, "Created {}", section.source.display())?;
    } else {
        writeln!(out, "{} already exists", section.source.display())?;
    }
    super::ignore_source(store, &section)
}
