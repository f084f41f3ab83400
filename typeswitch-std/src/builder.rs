//! Builder for configuring a [`Dispatcher`] in one expression.

use crate::dispatcher::{Dispatcher, GatePolicy};
use typeswitch_core::{Fallback, Handler, Message, RegistryError};

/// Builder for constructing a Dispatcher.
///
/// Types are registered first, then handlers are bound, then fallbacks are
/// pushed, each group in call order. A handler naming a type that was never
/// added makes [`build`](Self::build) fail.
///
/// # Example
/// ```ignore
/// let dispatcher = DispatcherBuilder::new()
///     .add_type(String::new())
///     .handler("String", typed(|s: &String| println!("{s}")))
///     .fallback(LoggingFallback::new())
///     .build()?;
/// ```
pub struct DispatcherBuilder<O = ()> {
    policy: GatePolicy,
    samples: Vec<Box<dyn Message>>,
    handlers: Vec<(String, Box<dyn Handler<O>>)>,
    fallbacks: Vec<Box<dyn Fallback<O>>>,
}

impl<O: 'static> DispatcherBuilder<O> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            policy: GatePolicy::default(),
            samples: Vec::new(),
            handlers: Vec::new(),
            fallbacks: Vec::new(),
        }
    }

    /// Set the gate policy.
    pub fn policy(mut self, policy: GatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Register the runtime type of `sample`.
    pub fn add_type<M: Message>(mut self, sample: M) -> Self {
        self.samples.push(Box::new(sample));
        self
    }

    /// Bind a handler to the type registered under `name`.
    pub fn handler<H: Handler<O>>(mut self, name: impl Into<String>, handler: H) -> Self {
        self.handlers.push((name.into(), Box::new(handler)));
        self
    }

    /// Append a fallback.
    pub fn fallback<F: Fallback<O>>(mut self, fallback: F) -> Self {
        self.fallbacks.push(Box::new(fallback));
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Result<Dispatcher<O>, RegistryError> {
        let mut dispatcher = Dispatcher::with_policy(self.policy);
        for sample in &self.samples {
            dispatcher.add_type(sample.as_ref());
        }
        for (name, handler) in self.handlers {
            dispatcher.set_boxed_handler(&name, handler)?;
        }
        for fallback in self.fallbacks {
            dispatcher.add_boxed_fallback(fallback);
        }
        Ok(dispatcher)
    }

    /// Number of types queued for registration.
    pub fn type_count(&self) -> usize {
        self.samples.len()
    }
}

impl<O: 'static> Default for DispatcherBuilder<O> {
    fn default() -> Self {
        Self::new()
    }
}
