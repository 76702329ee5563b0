//! Tests for configuration loading.

use diffgauge_core::config::EvalConfig;
use diffgauge_core::errors::ConfigError;

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = EvalConfig::load(dir.path()).unwrap();
    assert_eq!(config.metrics.effective_alpha(), 5.0);
    assert_eq!(config.pipeline.effective_baseline_approach(), "gumtree");
}

#[test]
fn test_load_from_project_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("diffgauge.toml"),
        r#"
        [metrics]
        alpha = 10.0

        [pipeline]
        baseline_approach = "treediff"
        hybrid_approach = "best-of-two"
        "#,
    )
    .unwrap();

    let config = EvalConfig::load(dir.path()).unwrap();
    assert_eq!(config.metrics.effective_alpha(), 10.0);
    assert_eq!(config.pipeline.effective_baseline_approach(), "treediff");
    assert_eq!(config.pipeline.effective_hybrid_approach(), "best-of-two");
}

#[test]
fn test_load_invalid_toml_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("diffgauge.toml"), "[metrics\nalpha = ").unwrap();

    let err = EvalConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_load_invalid_alpha_fails_validation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("diffgauge.toml"), "[metrics]\nalpha = -2.0\n").unwrap();

    let err = EvalConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}
