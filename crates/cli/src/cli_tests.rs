#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
use super::*;

#[test]
fn test_parse_working_dir_only() {
    let cli = Cli::try_parse_from(["twinshell", "/tmp/student"]).unwrap();
    assert_eq!(cli.working_dir, PathBuf::from("/tmp/student"));
    assert_eq!(cli.config, None);
    assert_eq!(cli.grace_ms, None);
    assert!(!cli.no_build);
    assert_eq!(cli.output_format, OutputFormat::Text);
    assert!(!cli.verbose);
}

#[test]
fn test_working_dir_is_required() {
    assert!(Cli::try_parse_from(["twinshell"]).is_err());
}

#[test]
fn test_parse_all_flags() {
    let cli = Cli::try_parse_from([
        "twinshell",
        "--config",
        "grader.toml",
        "--grace-ms",
        "250",
        "--no-build",
        "--output-format",
        "json",
        "-v",
        "work",
    ])
    .unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("grader.toml")));
    assert_eq!(cli.grace_ms, Some(250));
    assert!(cli.no_build);
    assert_eq!(cli.output_format, OutputFormat::Json);
    assert!(cli.verbose);
    assert_eq!(cli.working_dir, PathBuf::from("work"));
}

#[test]
fn test_short_config_flag() {
    let cli = Cli::try_parse_from(["twinshell", "-c", "x.toml", "dir"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
}

#[test]
fn test_rejects_non_numeric_grace() {
    assert!(Cli::try_parse_from(["twinshell", "--grace-ms", "soon", "dir"]).is_err());
}

#[test]
fn test_rejects_unknown_output_format() {
    assert!(Cli::try_parse_from(["twinshell", "--output-format", "yaml", "dir"]).is_err());
}
