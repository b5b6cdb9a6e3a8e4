//! Unit tests for the logging subsystem.

use std::path::PathBuf;

use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

use super::{
    manager::{LoggingError, build_filter},
    types::*,
    Rotation,
};

#[test]
fn test_logger_config_defaults() {
    let config = LoggerConfig::default();
    assert_eq!(config.service_name, "(strata-oracle)");
    assert_eq!(config.default_level, Level::INFO);
    assert!(config.directives.is_empty());
    assert!(!config.stdout_config.json_format);
    assert!(config.file_logging_config.is_none());
}

#[test]
fn test_logger_config_builder_pattern() {
    let tmp = tempfile::tempdir().unwrap();
    let file_config = FileLoggingConfig::new(tmp.path().to_path_buf(), "oracle".to_string())
        .with_rotation(Rotation::HOURLY)
        .with_json_format(true);

    let config = LoggerConfig::new("oracle-tool".to_string())
        .with_default_level(Level::DEBUG)
        .with_directive("strata_checkpoint_oracle=trace")
        .with_json_logging(true)
        .with_fmt_span(FmtSpan::CLOSE)
        .with_file_logging(file_config);

    assert_eq!(config.service_name, "oracle-tool");
    assert_eq!(config.default_level, Level::DEBUG);
    assert_eq!(config.directives, vec!["strata_checkpoint_oracle=trace"]);
    assert!(config.stdout_config.json_format);

    let file = config.file_logging_config.expect("file logging set");
    assert_eq!(file.directory, tmp.path());
    assert_eq!(file.file_name_prefix, "oracle");
    assert_eq!(file.rotation, Rotation::HOURLY);
    assert!(file.json_format);
}

#[test]
fn test_file_logging_config_defaults() {
    let config = FileLoggingConfig::new(PathBuf::from("/var/log/oracle"), "oracle".to_string());
    assert_eq!(config.rotation, Rotation::DAILY);
    assert!(!config.json_format);
}

#[test]
fn test_build_filter_accepts_directives() {
    let config = LoggerConfig::default()
        .with_directive("strata_checkpoint_oracle=debug")
        .with_directive("warn");
    assert!(build_filter(&config).is_ok());
}

#[test]
fn test_build_filter_rejects_bad_directive() {
    let config = LoggerConfig::default().with_directive("oracle=notalevel");
    match build_filter(&config) {
        Err(LoggingError::Directive(raw, _)) => assert_eq!(raw, "oracle=notalevel"),
        other => panic!("expected directive error, got {other:?}"),
    }
}
