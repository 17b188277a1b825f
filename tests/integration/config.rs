//! Configuration-driven compilation

use cmplx_glsl::util::config::{load_config, ConfigError};
use cmplx_glsl::{Compiler, PrecedenceMode};
use std::fs;
use tempfile::tempdir;

#[test]
fn test_config_file_selects_precedence() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[compiler]\nprecedence = \"conventional\"\n").unwrap();

    let config = load_config(Some(&path)).unwrap();
    assert_eq!(config.compiler.precedence, PrecedenceMode::Conventional);

    let compiler = Compiler::with_precedence(config.compiler.precedence);
    assert_eq!(compiler.compile("8/2/2").unwrap(), "cmplxDiv(cmplxDiv(8, 2), 2)");
}

#[test]
fn test_malformed_config_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[compiler\n").unwrap();
    assert!(matches!(
        load_config(Some(&path)).unwrap_err(),
        ConfigError::Parse(_)
    ));
}
