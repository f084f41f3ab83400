//! Logging fallback for observing unhandled values.

use typeswitch_core::{BoxError, Fallback, FallbackResult, Message};

/// A fallback that logs the value it is offered and passes it on.
///
/// It never claims a value, so pushing it last (it runs first) observes
/// every value that reaches the fallback chain without changing the outcome.
/// Logging goes through `tracing` when the feature is enabled.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher = Dispatcher::new();
/// dispatcher.add_fallback(my_fallback);
/// dispatcher.add_fallback(LoggingFallback::named("ingest"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LoggingFallback {
    name: &'static str,
}

impl LoggingFallback {
    /// Create a new `LoggingFallback` with a default name.
    pub fn new() -> Self {
        Self { name: "fallback" }
    }

    /// Create a new `LoggingFallback` with a custom name.
    ///
    /// The name is used in log records to identify the dispatcher.
    pub fn named(name: &'static str) -> Self {
        Self { name }
    }

    /// The name used in log records.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Default for LoggingFallback {
    fn default() -> Self {
        Self::new()
    }
}

impl<O> Fallback<O> for LoggingFallback {
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<FallbackResult, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(
                name = %self.name,
                type_name = value.type_name(),
                value = ?value,
                "value reached the fallback chain"
            );
        }

        #[cfg(not(feature = "tracing"))]
        {
            let _ = (self.name, value);
        }

        Ok(FallbackResult::Next)
    }
}
