use super::*;
use serial_test::serial;

#[test]
#[serial]
fn config_path_returns_none_when_unset() {
    std::env::remove_var(TWINSHELL_CONFIG);
    assert_eq!(config_path(), None);
}

#[test]
#[serial]
fn config_path_returns_path_when_set() {
    std::env::set_var(TWINSHELL_CONFIG, "/tmp/twinshell.toml");
    let result = config_path();
    std::env::remove_var(TWINSHELL_CONFIG);
    assert_eq!(result, Some(PathBuf::from("/tmp/twinshell.toml")));
}

#[test]
#[serial]
fn config_path_ignores_empty_value() {
    std::env::set_var(TWINSHELL_CONFIG, "");
    let result = config_path();
    std::env::remove_var(TWINSHELL_CONFIG);
    assert_eq!(result, None);
}

#[test]
#[serial]
fn grace_ms_parses_valid_u64() {
    std::env::set_var(TWINSHELL_GRACE_MS, "250");
    let result = grace_ms();
    std::env::remove_var(TWINSHELL_GRACE_MS);
    assert_eq!(result, Some(250));
}

#[test]
#[serial]
fn grace_ms_returns_none_for_non_numeric() {
    std::env::set_var(TWINSHELL_GRACE_MS, "soon");
    let result = grace_ms();
    std::env::remove_var(TWINSHELL_GRACE_MS);
    assert_eq!(result, None);
}
