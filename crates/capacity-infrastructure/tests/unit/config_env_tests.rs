//! Environment variable configuration tests
//!
//! These tests modify environment variables and must run sequentially:
//!
//! ```bash
//! cargo test -p capacity-infrastructure --test unit config_env -- --test-threads=1 --ignored
//! ```
//!
//! # Safety
//!
//! Tests use `unsafe` blocks for `env::set_var`/`env::remove_var` because
//! Rust 2024 edition requires this for environment variable mutations.

use capacity_infrastructure::config::{ConfigLoader, RepositoryProvider};
use std::env;

/// Helper to set env var safely
fn set_env(key: &str, value: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::set_var(key, value);
    }
}

/// Helper to remove env var safely
fn remove_env(key: &str) {
    // SAFETY: Tests must run with --test-threads=1
    unsafe {
        env::remove_var(key);
    }
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_prefixed_env_vars_override() {
    set_env("CAPACITY__TECHNOLOGY_SERVICE__BASE_URL", "http://from-env:8081");
    set_env("CAPACITY__TECHNOLOGY_SERVICE__TIMEOUT_SECS", "7");

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.technology_service.base_url, "http://from-env:8081");
    assert_eq!(config.technology_service.timeout_secs, 7);

    remove_env("CAPACITY__TECHNOLOGY_SERVICE__BASE_URL");
    remove_env("CAPACITY__TECHNOLOGY_SERVICE__TIMEOUT_SECS");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_nested_repository_settings_from_env() {
    set_env("CAPACITY__REPOSITORY__PROVIDER", "postgres");
    set_env(
        "CAPACITY__REPOSITORY__DATABASE__URL",
        "postgres://env@localhost/capacity",
    );

    let config = ConfigLoader::new().load().expect("Should load config");

    assert_eq!(config.repository.provider, RepositoryProvider::Postgres);
    assert_eq!(
        config.repository.database.url,
        "postgres://env@localhost/capacity"
    );

    remove_env("CAPACITY__REPOSITORY__PROVIDER");
    remove_env("CAPACITY__REPOSITORY__DATABASE__URL");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_single_underscore_prefix_is_ignored() {
    set_env("CAPACITY_REPOSITORY_PROVIDER", "postgres");

    let config = ConfigLoader::new().load().expect("Should load config");
    assert_eq!(config.repository.provider, RepositoryProvider::Memory);

    remove_env("CAPACITY_REPOSITORY_PROVIDER");
}

#[test]
#[ignore = "requires --test-threads=1 due to env var mutations"]
fn test_custom_prefix() {
    set_env("CAPTEST__LOGGING__LEVEL", "trace");

    let config = ConfigLoader::new()
        .with_env_prefix("CAPTEST")
        .load()
        .expect("Should load config");
    assert_eq!(config.logging.level, "trace");

    remove_env("CAPTEST__LOGGING__LEVEL");
}
