//! Configuration for the atomic-counters module.
//!
//! Two loading paths are supported:
//!
//! 1. **Host config**: the host hands over a raw JSON document shaped as
//!    `{ "modules": { "<name>": { "config": { ... } } } }` through
//!    `ConfigProvider`, and `module_config_or_default` extracts this module's
//!    section.
//! 2. **Standalone**: `AtomicCountersConfig::load` layers defaults, an optional
//!    YAML file and `ATOMIC_COUNTERS__`-prefixed environment variables.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix of environment variables read by `AtomicCountersConfig::load`.
/// Nested keys are separated by `__`, e.g. `ATOMIC_COUNTERS__LOGGING__LEVEL`.
pub const ENV_PREFIX: &str = "ATOMIC_COUNTERS__";

/// Where counter work runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutorKind {
    /// Tokio blocking thread pool of the current runtime.
    #[default]
    BlockingPool,
    /// Synchronously on the submitting thread.
    Inline,
}

/// Configuration for the atomic-counters module.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct AtomicCountersConfig {
    /// Initial value for counters created by a request that carries none.
    /// Default: `0`
    pub default_initial_value: i64,

    /// Execution context for counter work.
    /// Default: `blocking_pool`
    pub executor: ExecutorKind,

    pub logging: LoggingConfig,
}

impl Default for AtomicCountersConfig {
    fn default() -> Self {
        Self {
            default_initial_value: 0,
            executor: ExecutorKind::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl AtomicCountersConfig {
    /// Defaults, then the YAML file at `path` if given and present, then
    /// environment variables.
    #[must_use]
    pub fn figment(path: Option<&Path>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            figment = figment.merge(Yaml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Extracts the configuration from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` if a provider fails or the merged values
    /// do not form a valid configuration.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
    }

    /// Loads the standalone configuration, see `figment`.
    ///
    /// # Errors
    /// Returns `ConfigError::Load` on unreadable files or invalid values.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment(path))
    }
}

/// Failure to read the module configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid config for module '{module}': {source}")]
    InvalidConfig {
        module: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to load configuration: {0}")]
    Load(#[source] Box<figment::Error>),
}

/// Provider of module-specific configuration (raw JSON sections only).
pub trait ConfigProvider: Send + Sync {
    /// Returns raw JSON section for the module, if any.
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value>;
}

/// A whole host document: module sections live under `modules.<name>`.
impl ConfigProvider for serde_json::Value {
    fn get_module_config(&self, module_name: &str) -> Option<&serde_json::Value> {
        self.get("modules")?.get(module_name)
    }
}

/// Lenient loader: a missing module, a non-object module value or a missing
/// `config` section all yield `T::default()`.
///
/// # Errors
/// Returns `ConfigError::InvalidConfig` if the config section exists but cannot be deserialized.
pub fn module_config_or_default<T: DeserializeOwned + Default>(
    provider: &dyn ConfigProvider,
    module_name: &str,
) -> Result<T, ConfigError> {
    let Some(section) = provider
        .get_module_config(module_name)
        .and_then(serde_json::Value::as_object)
        .and_then(|obj| obj.get("config"))
    else {
        return Ok(T::default());
    };

    T::deserialize(section).map_err(|e| ConfigError::InvalidConfig {
        module: module_name.to_owned(),
        source: e,
    })
}
