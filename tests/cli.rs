use std::path::Path;

use apply_scale_profile::cli::Cli;
use clap::Parser;

#[test]
fn parses_defaults() {
    let cli = Cli::try_parse_from(["apply-scale-profile"]).expect("cli parse should work");
    assert!(cli.fn_config.is_none());
    assert!(cli.input.is_none());
    assert!(cli.output.is_none());
    assert!(!cli.json);
    assert_eq!(cli.verbose, 0);
}

#[test]
fn parses_fn_config_positional() {
    let cli = Cli::try_parse_from(["apply-scale-profile", "fn-config.yaml"])
        .expect("cli parse should work");
    assert_eq!(cli.fn_config.as_deref(), Some(Path::new("fn-config.yaml")));
}

#[test]
fn parses_io_flags() {
    let cli = Cli::try_parse_from([
        "apply-scale-profile",
        "--input",
        "in.yaml",
        "-o",
        "out.json",
        "--json",
        "-vv",
    ])
    .expect("cli parse should work");
    assert_eq!(cli.input.as_deref(), Some(Path::new("in.yaml")));
    assert_eq!(cli.output.as_deref(), Some(Path::new("out.json")));
    assert!(cli.json);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn rejects_unknown_flag() {
    assert!(Cli::try_parse_from(["apply-scale-profile", "--profile", "p1"]).is_err());
}
