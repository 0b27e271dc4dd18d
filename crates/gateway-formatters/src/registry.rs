use crate::errors::FormatError;
use crate::formatter::{OutputFormatter, WechatWorkFormatter};
use gateway_model::{FormattedRequest, GatewayEvent, ProviderKind, TargetEndpoint};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Formatters keyed by provider name.
#[derive(Clone, Default)]
pub struct FormatterRegistry {
    formatters: BTreeMap<&'static str, Arc<dyn OutputFormatter>>,
}

impl FormatterRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in formatter using default configuration.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(WechatWorkFormatter::default()));
        registry
    }

    /// Register `formatter` under its name, returning the one it replaces.
    pub fn register(
        &mut self,
        formatter: Arc<dyn OutputFormatter>,
    ) -> Option<Arc<dyn OutputFormatter>> {
        self.formatters.insert(formatter.name(), formatter)
    }

    /// Look up a formatter by provider id or alias (case-insensitive).
    pub fn get(&self, provider: &str) -> Option<Arc<dyn OutputFormatter>> {
        let kind = ProviderKind::parse(provider)?;
        self.formatters.get(kind.as_str()).map(Arc::clone)
    }

    pub fn providers(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.formatters.keys().copied()
    }

    pub fn format(
        &self,
        provider: &str,
        event: &GatewayEvent,
        target: &TargetEndpoint,
    ) -> Result<FormattedRequest, FormatError> {
        let formatter = self.get(provider).ok_or_else(|| {
            warn!(provider, "no formatter registered");
            FormatError::UnknownProvider(provider.to_string())
        })?;
        Ok(formatter.format(event, target))
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry")
            .field("providers", &self.formatters.keys().collect::<Vec<_>>())
            .finish()
    }
}
