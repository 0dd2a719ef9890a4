//! Argument default and conflict tests.
//!
//! Path flags default to `None` so `fwgen.toml` values apply unless the
//! command line overrides them.

use cli::args::Command;
use cli::parse_args;

#[test]
fn test_secrets_path_flags_default_to_none() {
    let cli = parse_args(["fwgen", "secrets"]).unwrap();
    let Command::Secrets(args) = cli.command else {
        panic!("expected secrets command");
    };
    assert!(!args.check);
    assert!(!args.no_ignore);
    assert_eq!(args.source, None);
    assert_eq!(args.implementation, None);
    assert_eq!(args.header, None);
    assert_eq!(args.source_dir, None);
    assert_eq!(args.object_dir, None);
    assert_eq!(args.depfile, None);
}

#[test]
fn test_version_flags_default_to_none() {
    let cli = parse_args(["fwgen", "version"]).unwrap();
    let Command::Version(args) = cli.command else {
        panic!("expected version command");
    };
    assert!(!args.print);
    assert_eq!(args.manifest, None);
    assert_eq!(args.output, None);
}

#[test]
fn test_global_options_default() {
    let cli = parse_args(["fwgen", "template"]).unwrap();
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
    assert!(cli.targets.is_empty());
    assert_eq!(cli.root, None);
    assert_eq!(cli.config, None);
}

#[test]
fn test_target_is_repeatable() {
    let cli = parse_args(["fwgen", "--target", "upload", "--target", "idedata", "version"]).unwrap();
    assert_eq!(cli.targets, ["upload", "idedata"]);
}

#[test]
fn test_quiet_and_verbose_conflict() {
    let err = parse_args(["fwgen", "-q", "-vv", "version"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
}

#[test]
fn test_subcommand_is_required() {
    let err = parse_args(["fwgen", "-v"]).unwrap_err();
    assert_eq!(err.kind(), clap::error::ErrorKind::MissingSubcommand);
}

#[test]
fn test_bare_invocation_shows_help() {
    let err = parse_args(["fwgen"]).unwrap_err();
    assert_eq!(
        err.kind(),
        clap::error::ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
    );
}
