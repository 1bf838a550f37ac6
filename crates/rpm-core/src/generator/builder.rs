//! Builder for creating and configuring Generator instances.

use std::sync::Arc;

use log::debug;

use super::Generator;
use crate::{
    config::{ConfigBuilder, DispatchMode, ProviderConfig},
    error::{ProviderError, Result, RpmError},
    provider::{GeminiProvider, TextProvider},
};

/// Builder for creating and configuring Generator instances.
#[derive(Clone, Default)]
pub struct GeneratorBuilder {
    config: Option<ProviderConfig>,
    provider: Option<Arc<dyn TextProvider>>,
    dispatch: Option<DispatchMode>,
}

impl GeneratorBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses already resolved provider configuration.
    ///
    /// If not specified, configuration is resolved with
    /// [`ConfigBuilder::build`] (config file and environment).
    pub fn with_config(mut self, config: ProviderConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Uses a custom provider instead of the configured Gemini client.
    pub fn with_provider(mut self, provider: Arc<dyn TextProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Overrides the dispatch mode from configuration.
    pub fn with_dispatch(mut self, dispatch: DispatchMode) -> Self {
        self.dispatch = Some(dispatch);
        self
    }

    /// Builds the configured generator.
    ///
    /// # Errors
    ///
    /// Returns `RpmError::Configuration` if no API key is configured or the
    /// HTTP client cannot be created, and any error from resolving
    /// configuration.
    pub fn build(self) -> Result<Generator> {
        let config = match self.config {
            Some(config) => config,
            None if self.provider.is_some() => ProviderConfig::default(),
            None => ConfigBuilder::new().build()?,
        };

        let provider = match self.provider {
            Some(provider) => provider,
            None => Arc::new(GeminiProvider::from_config(&config).map_err(|e| match e {
                ProviderError::MissingApiKey => RpmError::configuration(e),
                other => RpmError::configuration(format!("cannot create HTTP client: {other}")),
            })?),
        };

        let dispatch = self.dispatch.unwrap_or(config.dispatch);
        debug!(
            "Generator using provider {} model {} ({dispatch} dispatch)",
            provider.name(),
            provider.model()
        );
        Ok(Generator::new(provider, dispatch))
    }
}
