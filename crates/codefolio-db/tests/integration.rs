//! Offline unit tests for codefolio-db pool configuration and row types.
//! These tests do not require a live database connection.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use codefolio_core::{AppConfig, Environment, Platform};
use codefolio_db::{CommitSummary, PoolConfig, StatsRecordRow};

#[test]
fn pool_config_from_app_config_uses_core_values() {
    let app_config = AppConfig {
        database_url: "postgres://example".to_string(),
        env: Environment::Test,
        bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000),
        log_level: "info".to_string(),
        db_max_connections: 42,
        db_min_connections: 7,
        db_acquire_timeout_secs: 9,
        fetch_timeout_secs: 15,
        fetch_user_agent: "ua".to_string(),
        fetch_max_concurrent_platforms: 10,
        github_token: None,
        twitter_bearer_token: None,
    };

    let pool_config = PoolConfig::from_app_config(&app_config);
    assert_eq!(pool_config.max_connections, 42);
    assert_eq!(pool_config.min_connections, 7);
    assert_eq!(pool_config.acquire_timeout_secs, 9);
}

#[test]
fn pool_config_defaults_are_sane() {
    let config = PoolConfig::default();
    assert!(config.max_connections >= config.min_connections);
    assert!(config.acquire_timeout_secs > 0);
}

/// Compile-time smoke test: confirm that [`StatsRecordRow`] has all expected
/// fields with the correct types. No database required.
#[test]
fn stats_record_row_has_expected_fields() {
    use chrono::Utc;

    let row = StatsRecordRow {
        id: 1_i64,
        user_id: 2_i64,
        platform: Platform::Github,
        summary: serde_json::json!({"followers": 3}),
        raw_payload: None,
        source_url: "https://github.com/alice".to_string(),
        last_refreshed_at: Utc::now(),
    };

    assert_eq!(row.platform, Platform::Github);
    assert_eq!(row.summary["followers"], 3);
    assert!(row.raw_payload.is_none());
}

#[test]
fn commit_summary_starts_empty() {
    let summary = CommitSummary::default();
    assert!(summary.committed.is_empty());
    assert!(summary.skipped.is_empty());
}
