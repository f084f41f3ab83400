//! The dispatcher: type registry, handler table and fallback stack behind a
//! single `dispatch` entry point.
//!
//! # Dispatch order
//!
//! 1. The value's runtime type is looked up in the registry. An unregistered
//!    type fails with [`DispatchError::NotInRegistry`] without consulting
//!    handlers or fallbacks (under [`GatePolicy::Strict`]).
//! 2. If the type has a handler, it runs and its result is returned as is.
//! 3. Otherwise the fallbacks run, most recently added first, until one
//!    claims the value or returns an error. An empty stack fails with
//!    [`DispatchError::NoFallback`]; an exhausted one with
//!    [`DispatchError::NotHandled`].

use crate::{builder::DispatcherBuilder, fallbacks::FallbackStack, registry::TypeRegistry, table::HandlerTable};
use typeswitch_core::{
    DispatchError, Fallback, FallbackResult, Handler, Message, RegistryError, TypeToken,
};

/// How the dispatcher treats values whose type is not registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GatePolicy {
    /// Unregistered types fail with `NotInRegistry`; fallbacks never see them.
    #[default]
    Strict,
    /// Unregistered types skip the handler table and go to the fallback chain.
    ///
    /// With an empty chain they still fail with `NotInRegistry`.
    Open,
}

/// Routes values to handlers by runtime type.
///
/// `O` is the output slot handed to handlers and fallbacks. Use the default
/// `()` when handlers only produce side effects.
///
/// Mutating operations take `&mut self` and `dispatch` takes `&self`, so a
/// configured dispatcher can be shared read-only, for example in an `Arc`.
///
/// # Example
///
/// ```rust,ignore
/// let mut dispatcher: Dispatcher = Dispatcher::new();
/// dispatcher.add_type(&String::new());
/// dispatcher.set_handler("String", typed(|s: &String| println!("{s} is a string")))?;
/// dispatcher.add_fallback(fallback_fn(|value| {
///     println!("fallback for {value:?}");
///     true
/// }));
///
/// dispatcher.dispatch(&String::from("my string"))?;
/// ```
pub struct Dispatcher<O = ()> {
    registry: TypeRegistry,
    handlers: HandlerTable<O>,
    fallbacks: FallbackStack<O>,
    policy: GatePolicy,
}

impl<O: 'static> Default for Dispatcher<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: 'static> Dispatcher<O> {
    /// Create an empty dispatcher with [`GatePolicy::Strict`].
    pub fn new() -> Self {
        Self::with_policy(GatePolicy::Strict)
    }

    /// Create an empty dispatcher with the given gate policy.
    pub fn with_policy(policy: GatePolicy) -> Self {
        Self {
            registry: TypeRegistry::new(),
            handlers: HandlerTable::new(),
            fallbacks: FallbackStack::new(),
            policy,
        }
    }

    /// Start building a dispatcher.
    pub fn builder() -> DispatcherBuilder<O> {
        DispatcherBuilder::new()
    }

    /// The gate policy chosen at construction.
    pub fn policy(&self) -> GatePolicy {
        self.policy
    }

    /// Read-only view of the type registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Type registry
    // ------------------------------------------------------------------

    /// Register the runtime type of `sample`.
    ///
    /// Re-adding a type mints a fresh token; a handler bound to the previous
    /// registration is dropped.
    pub fn add_type(&mut self, sample: &dyn Message) -> TypeToken {
        let (token, replaced) = self.registry.add_type(sample);
        if let Some(stale) = replaced {
            self.handlers.remove(&stale);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = token.name(), generation = token.generation(), "type added");

        token
    }

    /// Unregister a type and drop its handler. Removing an absent name is a no-op.
    pub fn remove_type(&mut self, name: &str) -> Option<TypeToken> {
        let removed = self.registry.remove_type(name)?;
        self.handlers.remove(&removed);

        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = removed.name(), "type removed");

        Some(removed)
    }

    /// Returns `true` if `name` is registered.
    pub fn has_type(&self, name: &str) -> bool {
        self.registry.has_type(name)
    }

    /// Look up the token registered under `name`.
    pub fn get_type(&self, name: &str) -> Result<TypeToken, RegistryError> {
        self.registry.get_type(name)
    }

    // ------------------------------------------------------------------
    // Handler table
    // ------------------------------------------------------------------

    /// Bind `handler` to the registered type `name`, replacing any existing one.
    pub fn set_handler<H: Handler<O>>(&mut self, name: &str, handler: H) -> Result<(), RegistryError> {
        self.set_boxed_handler(name, Box::new(handler))
    }

    pub(crate) fn set_boxed_handler(
        &mut self,
        name: &str,
        handler: Box<dyn Handler<O>>,
    ) -> Result<(), RegistryError> {
        let token = self.registry.get_type(name)?;
        self.handlers.insert(token, handler);

        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = token.name(), "handler set");

        Ok(())
    }

    /// Returns `true` if the registered type `name` has a handler.
    pub fn has_handler(&self, name: &str) -> Result<bool, RegistryError> {
        let token = self.registry.get_type(name)?;
        Ok(self.handlers.contains(&token))
    }

    /// The handler bound to the registered type `name`, if any.
    pub fn get_handler(&self, name: &str) -> Result<Option<&dyn Handler<O>>, RegistryError> {
        let token = self.registry.get_type(name)?;
        Ok(self.handlers.get(&token))
    }

    /// Unbind the handler of the registered type `name`.
    ///
    /// Succeeds even if no handler was bound.
    pub fn remove_handler(&mut self, name: &str) -> Result<(), RegistryError> {
        let token = self.registry.get_type(name)?;
        self.handlers.remove(&token);

        #[cfg(feature = "tracing")]
        tracing::trace!(type_name = token.name(), "handler removed");

        Ok(())
    }

    // ------------------------------------------------------------------
    // Fallback stack
    // ------------------------------------------------------------------

    /// Append a fallback. It runs before every fallback added earlier.
    pub fn add_fallback<F: Fallback<O>>(&mut self, fallback: F) {
        self.fallbacks.push(Box::new(fallback));
    }

    pub(crate) fn add_boxed_fallback(&mut self, fallback: Box<dyn Fallback<O>>) {
        self.fallbacks.push(fallback);
    }

    /// Remove every fallback.
    pub fn remove_fallbacks(&mut self) {
        self.fallbacks.clear();
    }

    /// Number of installed fallbacks.
    pub fn fallback_count(&self) -> usize {
        self.fallbacks.len()
    }

    // ------------------------------------------------------------------
    // Dispatch
    // ------------------------------------------------------------------

    /// Route `value` by its runtime type, passing `out` to whichever handler
    /// or fallback processes it.
    pub fn dispatch_with(&self, value: &dyn Message, out: &mut O) -> Result<(), DispatchError> {
        let type_name = value.type_name();

        let Some(token) = self.registry.resolve(value) else {
            return match self.policy {
                GatePolicy::Strict => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(type_name, "rejected unregistered type");

                    Err(DispatchError::NotInRegistry(type_name.to_string()))
                }
                GatePolicy::Open => {
                    self.run_fallbacks(value, out, DispatchError::NotInRegistry)
                }
            };
        };

        if let Some(handler) = self.handlers.get(&token) {
            #[cfg(feature = "tracing")]
            tracing::debug!(type_name, "dispatching to handler");

            return handler.handle(value, out).map_err(DispatchError::Handler);
        }

        self.run_fallbacks(value, out, DispatchError::NoFallback)
    }

    fn run_fallbacks(
        &self,
        value: &dyn Message,
        out: &mut O,
        on_empty: fn(String) -> DispatchError,
    ) -> Result<(), DispatchError> {
        let type_name = value.type_name();

        if self.fallbacks.is_empty() {
            return Err(on_empty(type_name.to_string()));
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(type_name, fallbacks = self.fallbacks.len(), "offering to fallbacks");

        match self
            .fallbacks
            .offer(value, out)
            .map_err(DispatchError::Fallback)?
        {
            FallbackResult::Handled => Ok(()),
            FallbackResult::Next => Err(DispatchError::NotHandled {
                value: format!("{value:?}"),
                type_name: type_name.to_string(),
            }),
        }
    }
}

impl Dispatcher<()> {
    /// Route `value` by its runtime type.
    pub fn dispatch(&self, value: &dyn Message) -> Result<(), DispatchError> {
        self.dispatch_with(value, &mut ())
    }
}

impl<O: 'static> std::fmt::Debug for Dispatcher<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher")
            .field("registry", &self.registry)
            .field("handlers", &self.handlers)
            .field("fallbacks", &self.fallbacks)
            .field("policy", &self.policy)
            .finish()
    }
}
