//! Configuration loading tests.

use std::io::Write;

use credserver::config::{AppConfig, ConfigError};

#[test]
fn defaults_match_shipped_placeholders() {
    let config = AppConfig::default();

    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.http.port, 3000);
    assert_eq!(
        config.credentials.server,
        "sql_server_goes_here.database.windows.net"
    );
    assert_eq!(config.credentials.database, "database_goes_here");
    assert_eq!(
        config.credentials.username,
        "username_goes_here@sql_server_goes_here"
    );
    assert_eq!(config.credentials.password, "password_goes_here");
    assert_eq!(config.logging.format, "text");
}

#[test]
fn loads_overrides_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"
        [http]
        host = "127.0.0.1"
        port = 8080

        [credentials]
        server = "db.internal.example.com"
        database = "orders"
        username = "app@db"
        password = "s3cret"

        [logging]
        format = "json"
    "#
    )
    .expect("failed to write temp config");

    let config = AppConfig::load(file.path()).expect("load should succeed");

    assert_eq!(config.http.host, "127.0.0.1");
    assert_eq!(config.http.port, 8080);
    assert_eq!(config.credentials.database, "orders");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn partial_file_falls_back_to_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"
        [http]
        port = 9000
    "#
    )
    .expect("failed to write temp config");

    let config = AppConfig::load(file.path()).expect("load should succeed");

    assert_eq!(config.http.host, "0.0.0.0");
    assert_eq!(config.http.port, 9000);
    assert_eq!(config.credentials.password, "password_goes_here");
}

#[test]
fn empty_credential_field_fails_validation() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(
        file,
        r#"
        [credentials]
        password = ""
    "#
    )
    .expect("failed to write temp config");

    let err = AppConfig::load(file.path()).expect_err("load should fail");
    assert!(matches!(err, ConfigError::Validation(_)));
    assert!(err.to_string().contains("credentials.password"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = AppConfig::load("/nonexistent/credserver.toml").expect_err("load should fail");
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let mut file = tempfile::NamedTempFile::new().expect("failed to create temp file");
    write!(file, "this is not toml [").expect("failed to write temp config");

    let err = AppConfig::load(file.path()).expect_err("load should fail");
    assert!(matches!(err, ConfigError::Parse(_)));
}
