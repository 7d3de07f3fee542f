//! Logging initialization.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Output format of log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset, e.g. `info` or
    /// `atomic_counters=debug,warn`.
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Text,
        }
    }
}

/// Installs the global subscriber described by `cfg`.
///
/// `RUST_LOG` takes precedence over `cfg.level` when it is set. Returns
/// `Ok(false)` without changing anything if a global subscriber is already set.
///
/// # Errors
/// Returns an error if `RUST_LOG` is set but malformed, or if it is unset and
/// `cfg.level` is not a valid filter directive.
pub fn init_logging(cfg: &LoggingConfig) -> anyhow::Result<bool> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) => EnvFilter::try_new(&directives).map_err(|e| {
            anyhow::anyhow!("invalid {} '{directives}': {e}", EnvFilter::DEFAULT_ENV)
        })?,
        Err(_) => EnvFilter::try_new(&cfg.level)
            .map_err(|e| anyhow::anyhow!("invalid log level '{}': {e}", cfg.level))?,
    };

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match cfg.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
            .is_ok(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init()
            .is_ok(),
    };

    if installed {
        tracing::debug!(format = ?cfg.format, "logging initialized");
    }
    Ok(installed)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn parses_format_names() {
        let cfg: LoggingConfig =
            serde_json::from_value(serde_json::json!({ "format": "json" })).unwrap();
        assert_eq!(cfg.format, LogFormat::Json);
        assert_eq!(cfg.level, "info");
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<LoggingConfig, _> =
            serde_json::from_value(serde_json::json!({ "colour": true }));
        assert!(result.is_err());
    }
}
