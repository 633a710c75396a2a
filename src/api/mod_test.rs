use super::{Config, DB_PATH_ENV, DEFAULT_DB_PATH};
use serial_test::serial;
use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.host, IpAddr::V4(Ipv4Addr::UNSPECIFIED));
    assert_eq!(config.port, 8000);
    assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));
    assert_eq!(config.addr().to_string(), "0.0.0.0:8000");
}

#[test]
#[serial]
fn test_config_new_respects_env_var() {
    let custom_path = "/tmp/glossary-env-test1.db";
    unsafe {
        env::set_var(DB_PATH_ENV, custom_path);
    }

    let config = Config::new();
    assert_eq!(config.db_path, PathBuf::from(custom_path));

    // Cleanup
    unsafe {
        env::remove_var(DB_PATH_ENV);
    }
}

#[test]
#[serial]
fn test_config_new_ignores_empty_env_var() {
    unsafe {
        env::set_var(DB_PATH_ENV, "");
    }

    let config = Config::new();
    assert_eq!(config.db_path, PathBuf::from(DEFAULT_DB_PATH));

    // Cleanup
    unsafe {
        env::remove_var(DB_PATH_ENV);
    }
}

#[test]
#[serial]
fn test_config_precedence_cli_over_env() {
    // Precedence: CLI flag > env var > default
    unsafe {
        env::set_var(DB_PATH_ENV, "/tmp/glossary-env-precedence.db");
    }

    let cli_path = PathBuf::from("/tmp/glossary-cli-precedence.db");
    let config = Config::new().with_db_path(cli_path.clone());

    assert_eq!(
        config.db_path, cli_path,
        "CLI flag should override env var"
    );

    // Cleanup
    unsafe {
        env::remove_var(DB_PATH_ENV);
    }
}

#[test]
fn test_config_builder_overrides_host_and_port() {
    let config = Config::default()
        .with_host(IpAddr::V4(Ipv4Addr::LOCALHOST))
        .with_port(3000);

    assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
}
