//! Logging setup tests
//!
//! Kept in its own test binary: the global subscriber can only be set once
//! per process.

#[test]
fn test_init_twice_returns_error_instead_of_panicking() {
    let config_home = tempfile::tempdir().unwrap();
    std::env::set_var("XDG_CONFIG_HOME", config_home.path());
    std::env::set_var("APPDATA", config_home.path());

    assert!(visim_gutter::tracing::init().is_ok());

    let second = visim_gutter::tracing::init();
    assert!(second.is_err());
    assert!(second
        .unwrap_err()
        .contains("Failed to install tracing subscriber"));

    // File layer was placed under the overridden config dir
    assert!(config_home.path().join("risc-visim").join("logs").is_dir());
}
