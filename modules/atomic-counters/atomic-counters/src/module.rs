//! Module declaration for the atomic-counters module.

use std::sync::Arc;

use atomic_counters_sdk::{AtomicCountersClient, CounterStore};
use tracing::{debug, info};

use crate::api::{CommandHandler, CounterCommandHandler};
use crate::config::{AtomicCountersConfig, ConfigProvider, ExecutorKind, module_config_or_default};
use crate::domain::{BlockingPoolExecutor, CounterDispatcher, ExecutionContext, InlineExecutor};
use crate::local_client::AtomicCountersLocalClient;

/// Name of this module's section in the host configuration.
pub const MODULE_NAME: &str = "atomic_counters";

/// Atomic counters module.
///
/// Wires a counter store and an execution context into the `incr`/`decr`
/// command handler and the in-process client. Both share one dispatcher.
pub struct AtomicCountersModule {
    config: AtomicCountersConfig,
    handler: Arc<CounterCommandHandler>,
    client: Arc<AtomicCountersLocalClient>,
}

impl AtomicCountersModule {
    /// Builds the module with the executor selected by `config.executor`.
    ///
    /// # Errors
    /// Returns an error if the blocking pool executor is selected and no
    /// tokio runtime is running.
    pub fn new(config: AtomicCountersConfig, store: Arc<dyn CounterStore>) -> anyhow::Result<Self> {
        let executor: Arc<dyn ExecutionContext> = match config.executor {
            ExecutorKind::BlockingPool => Arc::new(BlockingPoolExecutor::current()?),
            ExecutorKind::Inline => Arc::new(InlineExecutor),
        };
        Ok(Self::with_executor(config, store, executor))
    }

    /// Builds the module from the host configuration document, falling back
    /// to defaults when the module has no `config` section.
    ///
    /// # Errors
    /// Returns an error if the section is invalid or the executor cannot be built.
    pub fn from_provider(
        provider: &dyn ConfigProvider,
        store: Arc<dyn CounterStore>,
    ) -> anyhow::Result<Self> {
        let config: AtomicCountersConfig = module_config_or_default(provider, MODULE_NAME)?;
        Self::new(config, store)
    }

    /// Builds the module with an explicit execution context; `config.executor`
    /// is ignored.
    #[must_use]
    pub fn with_executor(
        config: AtomicCountersConfig,
        store: Arc<dyn CounterStore>,
        executor: Arc<dyn ExecutionContext>,
    ) -> Self {
        info!("Initializing {MODULE_NAME} module");
        debug!(
            "Loaded {MODULE_NAME} config: default_initial_value={}, executor={}",
            config.default_initial_value,
            executor.name()
        );

        let dispatcher = Arc::new(
            CounterDispatcher::new(store, executor)
                .with_default_initial(config.default_initial_value),
        );
        let handler = Arc::new(CounterCommandHandler::new(Arc::clone(&dispatcher)));
        let client = Arc::new(AtomicCountersLocalClient::new(dispatcher));

        info!("{MODULE_NAME} module initialized");
        Self {
            config,
            handler,
            client,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AtomicCountersConfig {
        &self.config
    }

    /// Handler to register with the command routing layer.
    #[must_use]
    pub fn handler(&self) -> Arc<dyn CommandHandler> {
        self.handler.clone()
    }

    /// Client for in-process consumers.
    #[must_use]
    pub fn client(&self) -> Arc<dyn AtomicCountersClient> {
        self.client.clone()
    }
}
