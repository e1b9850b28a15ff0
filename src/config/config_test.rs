use std::path::Path;

use crate::{
    config::{Config, DEFAULT_CONFIG_TOML, Style, load_config_file},
    error::Error,
    util::testing::{must, root_dir},
};

#[test]
fn test_default_config_file_matches_default() {
    assert_eq!(must(Config::parse(DEFAULT_CONFIG_TOML)), Config::default());
}

#[test]
fn test_missing_options_keep_defaults() {
    let config = must(Config::parse("[options]\nstyle = \"infix\"\n"));
    assert_eq!(config.style, Style::Infix);
    assert!(config.validate);
    assert!(!config.debug_mode);

    assert_eq!(must(Config::parse("")), Config::default());
}

#[test]
fn test_kebab_case_options() {
    let config = must(Config::parse(
        r#"
        [options]
        debug-mode = true
        validate = false
        "#,
    ));
    assert!(config.debug_mode);
    assert!(!config.validate);
}

#[test]
fn test_invalid_config() {
    assert!(matches!(
        Config::parse("[options]\nstyle = \"prefix\"\n"),
        Err(Error::Config(_))
    ));
    assert!(matches!(
        Config::parse("[options]\ncolor = true\n"),
        Err(Error::Config(_))
    ));
}

#[test]
fn test_missing_config_file() {
    let config = must(load_config_file(Path::new("does/not/exist/astwalk.toml")));
    assert_eq!(config, Config::default());
}

#[test]
fn test_test_preset() {
    assert!(!Config::test().validate);
    assert_eq!(Config::test().style, Style::Postfix);
}

#[test]
fn test_unreadable_config_keeps_io_error() {
    // A directory exists but cannot be read as a file.
    let err = load_config_file(&root_dir().join("src")).unwrap_err();
    match err {
        Error::Io(msg) => {
            assert!(msg.starts_with("failed to read file "));
            assert!(msg.contains(": "));
        }
        err => panic!("expected io error, got {:?}", err),
    }
}
