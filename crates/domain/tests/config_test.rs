use ferrous_backend_domain::{CliOverrides, Config, ConfigError, SuffixSource};
use std::io::Write;

#[test]
fn test_config_default_values() {
    let config = Config::default();

    assert_eq!(
        config.server.socket_path,
        "/var/run/ferrous-backend/backend.sock"
    );
    assert_eq!(config.server.read_buffer_size, 64 * 1024);
    assert_eq!(config.backend.hostmaster, "hostmaster.localhost");
    assert_eq!(config.suffix.source, SuffixSource::List);
    assert_eq!(
        config.suffix.list_url,
        "https://publicsuffix.org/list/public_suffix_list.dat"
    );
    assert_eq!(config.suffix.cache_ttl_secs, 604_800);
    assert_eq!(config.suffix.refresh_interval_secs, 86_400);
    assert!(config.database.log_queries);
    assert_eq!(config.database.max_connections, 5);
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.is_json());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_partial_toml_uses_defaults() {
    let config = Config::from_toml(
        r#"
        [server]
        socket_path = "/tmp/backend.sock"

        [suffix]
        source = "database"
        "#,
    )
    .unwrap();

    assert_eq!(config.server.socket_path, "/tmp/backend.sock");
    assert_eq!(config.suffix.source, SuffixSource::Database);
    assert_eq!(config.suffix.cache_ttl_secs, 604_800);
    assert_eq!(config.backend.hostmaster, "hostmaster.localhost");
}

#[test]
fn test_config_rejects_unknown_suffix_source() {
    let result = Config::from_toml(
        r#"
        [suffix]
        source = "dns"
        "#,
    );

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
fn test_config_load_applies_cli_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[server]\nsocket_path = \"/tmp/from-file.sock\"\n\n[logging]\nlevel = \"warn\""
    )
    .unwrap();

    let overrides = CliOverrides {
        socket_path: Some("/tmp/from-cli.sock".to_string()),
        database_path: Some("/tmp/backend.db".to_string()),
        log_level: None,
    };

    let config = Config::load(file.path().to_str(), overrides).unwrap();

    assert_eq!(config.server.socket_path, "/tmp/from-cli.sock");
    assert_eq!(config.database.path, "/tmp/backend.db");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn test_config_load_missing_file_fails() {
    let result = Config::load(Some("/nonexistent/ferrous-backend.toml"), CliOverrides::default());
    assert!(matches!(result, Err(ConfigError::FileRead { .. })));
}

#[test]
fn test_validate_rejects_empty_socket_path() {
    let mut config = Config::default();
    config.server.socket_path = "  ".to_string();
    assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
}

#[test]
fn test_validate_rejects_dot_only_hostmaster() {
    let mut config = Config::default();
    config.backend.hostmaster = "..".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_validate_rejects_zero_refresh_interval() {
    let mut config = Config::default();
    config.suffix.refresh_interval_secs = 0;
    assert!(config.validate().is_err());
}
