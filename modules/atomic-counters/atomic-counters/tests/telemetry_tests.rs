#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Global subscriber installation. Kept in its own test binary since it
//! mutates process-wide state. `Jail` serializes the tests and restores the
//! environment they change.

use atomic_counters::telemetry::{LogFormat, LoggingConfig, init_logging};
use figment::Jail;

#[test]
fn test_malformed_rust_log_is_reported() {
    Jail::expect_with(|jail| {
        jail.set_env("RUST_LOG", "atomic_counters=loudest");

        let err = init_logging(&LoggingConfig::default()).unwrap_err();

        assert!(err.to_string().contains("invalid RUST_LOG"), "{err}");
        Ok(())
    });
}

#[test]
fn test_init_logging_installs_subscriber_once() {
    Jail::expect_with(|jail| {
        jail.set_env("RUST_LOG", "atomic_counters=debug,info");
        let cfg = LoggingConfig {
            level: "info".to_owned(),
            format: LogFormat::Json,
        };

        assert!(init_logging(&cfg).unwrap());
        assert!(!init_logging(&LoggingConfig::default()).unwrap());

        tracing::info!("logging is up");
        Ok(())
    });
}
