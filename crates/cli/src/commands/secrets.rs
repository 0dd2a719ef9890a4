use super::{ignore_source, override_path};
use crate::args::SecretsArgs;
use crate::config::SecretsSection;
use crate::error::TaskResult;
use host::{DepFile, FileStore};
use secrets::{ensure_template, generate, load_and_validate, register_dependents};
use std::io::Write;

/// Runs the secrets pipeline, or only validation with `--check`.
pub fn execute(
    store: &dyn FileStore,
    mut section: SecretsSection,
    args: SecretsArgs,
    out: &mut dyn Write,
) -> TaskResult<()> {
    let SecretsArgs {
        check,
        source,
        implementation,
        header,
        source_dir,
        object_dir,
        depfile,
        no_ignore,
    } = args;
    override_path(&mut section.source, source);
    override_path(&mut section.implementation, implementation);
    override_path(&mut section.header, header);
    override_path(&mut section.source_dir, source_dir);
    override_path(&mut section.object_dir, object_dir);
    override_path(&mut section.depfile, depfile);

    let schema = section.schema()?;
    let paths = section.paths();

    if check {
        let document = load_and_validate(store, &paths.source, &schema)?;
        writeln!(out, "{} is valid", document.source_name())?;
        return Ok(());
    }

    if ensure_template(store, &paths.source, &schema)? {
        tracing::warn!(
            source = %paths.source.display(),
            "created secrets document from defaults; fill in the values"
        );
    }
    if !no_ignore {
        ignore_source(store, &section)?;
    }

    generate(store, &schema, &paths, &section.render_options())?;
    writeln!(
        out,
        "Generated {} and {}",
        paths.implementation.display(),
        paths.header.display()
    )?;

    let mut graph = DepFile::new();
    let dependents = register_dependents(store, &mut graph, &section.registrar_options())?;
    store.write(&section.depfile, &graph.render())?;
    tracing::info!(
        depfile = %section.depfile.display(),
        dependents = dependents.len(),
        "wrote dependency file"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use host::memory::MemoryFileStore;
    use secrets::SecretsError;
    use test_support::SAMPLE_CERTIFICATE;

    const DOCUMENT: &str = r#"{
    "device_name": "mate-01",
    "friendly_name": "MATE Gateway",
    "mqtt_server": "broker.local",
    "mqtt_port": 8883,
    "mqtt_username": "gateway",
    "mqtt_password": "p\"w",
    "wifi_ssid": "lab",
    "wifi_pw": "hunter2",
    "ca_root_cert": "certs/ca.pem"
}
"#;

    fn project() -> MemoryFileStore {
        MemoryFileStore::new()
            .with_file("secrets.json", DOCUMENT)
            .with_file("certs/ca.pem", SAMPLE_CERTIFICATE)
            .with_file("src/main.cpp", "#include \"secrets.h\"\nvoid setup() {}\n")
            .with_file("src/util.cpp", "#include <Arduino.h>\n")
    }

    fn run(store: &MemoryFileStore, args: SecretsArgs) -> TaskResult<String> {
        let mut out = Vec::new();
        execute(store, SecretsSection::default(), args, &mut out)?;
        Ok(String::from_utf8(out).expect("utf-8"))
    }

    #[test]
    fn full_run_writes_pair_depfile_and_ignore_entry() {
        let store = project();
        let output = run(&store, SecretsArgs::default()).expect("generation succeeds");

        assert_eq!(output, "Generated build/secrets.cpp and src/secrets.h\n");
        let implementation = store.contents("build/secrets.cpp").expect("implementation");
        assert!(implementation.contains("    uint16_t mqtt_port = 8883;\r\n"));
        assert!(implementation.contains(r#"const char* mqtt_password = "p\"w";"#));
        let header = store.contents("src/secrets.h").expect("header");
        assert!(header.contains("extern const char* wifi_pw;"));
        assert_eq!(
            store.contents("build/secrets.d").expect("depfile"),
            "build/src/main.cpp.o: src/secrets.h\n"
        );
        assert_eq!(store.contents(".gitignore").expect("ignore file"), "secrets.json\n");
    }

    #[test]
    fn repeated_runs_do_not_duplicate_ignore_entry() {
        let store = project();
        run(&store, SecretsArgs::default()).expect("first run");
        run(&store, SecretsArgs::default()).expect("second run");
        assert_eq!(store.contents(".gitignore").expect("ignore file"), "secrets.json\n");
    }

    #[test]
    fn check_validates_without_writing() {
        let store = project();
        let before = store.paths();
        let args = SecretsArgs {
            check: true,
            ..SecretsArgs::default()
        };
        assert_eq!(run(&store, args).expect("valid"), "secrets.json is valid\n");
        assert_eq!(store.paths(), before);
    }

    #[test]
    fn check_reports_missing_keys() {
        let store = MemoryFileStore::new().with_file("secrets.json", r#"{"device_name": "x"}"#);
        let args = SecretsArgs {
            check: true,
            ..SecretsArgs::default()
        };
        let error = run(&store, args).expect_err("incomplete document");
        assert!(matches!(
            error,
            TaskError::Secrets(SecretsError::MissingKey { ref key, .. }) if key == "friendly_name"
        ));
    }

    #[test]
    fn first_run_creates_template_then_stops_on_empty_certificate() {
        let store = MemoryFileStore::new();
        let error = run(&store, SecretsArgs::default()).expect_err("no certificate configured");
        assert!(matches!(error, TaskError::Secrets(SecretsError::InvalidValue { .. })));
        assert!(store.contents("secrets.json").is_some());
        assert!(store.contents("build/secrets.cpp").is_none());
        assert_eq!(store.contents(".gitignore").expect("ignore file"), "secrets.json\n");
    }

    #[test]
    fn no_ignore_leaves_ignore_file_alone() {
        let store = project();
        let args = SecretsArgs {
            no_ignore: true,
            ..SecretsArgs::default()
        };
        run(&store, args).expect("generation succeeds");
        assert!(store.contents(".gitignore").is_none());
    }

    #[test]
    fn path_flags_override_config() {
        let store = project();
        let args = SecretsArgs {
            implementation: Some("out/creds.cpp".into()),
            depfile: Some("out/creds.d".into()),
            object_dir: Some(".pio/build".into()),
            ..SecretsArgs::default()
        };
        run(&store, args).expect("generation succeeds");
        assert!(store.contents("out/creds.cpp").is_some());
        assert_eq!(
            store.contents("out/creds.d").expect("depfile"),
            ".pio/build/src/main.cpp.o: src/secrets.h\n"
        );
    }
}
