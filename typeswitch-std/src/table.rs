//! Handler table: at most one handler per registered type.

use std::collections::HashMap;
use typeswitch_core::{Handler, TypeToken};

/// Mapping from type token to its handler.
///
/// Tokens are resolved by the owning dispatcher; the table itself never
/// consults the registry.
pub struct HandlerTable<O = ()> {
    handlers: HashMap<TypeToken, Box<dyn Handler<O>>>,
}

impl<O: 'static> Default for HandlerTable<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: 'static> HandlerTable<O> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Bind `handler` to `token`, replacing any existing binding.
    pub fn insert(&mut self, token: TypeToken, handler: Box<dyn Handler<O>>) {
        self.handlers.insert(token, handler);
    }

    /// Look up the handler bound to `token`.
    pub fn get(&self, token: &TypeToken) -> Option<&dyn Handler<O>> {
        self.handlers.get(token).map(|handler| &**handler)
    }

    /// Returns `true` if `token` has a handler.
    pub fn contains(&self, token: &TypeToken) -> bool {
        self.handlers.contains_key(token)
    }

    /// Unbind the handler for `token`. Returns `true` if one was bound.
    pub fn remove(&mut self, token: &TypeToken) -> bool {
        self.handlers.remove(token).is_some()
    }

    /// Number of bound handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if no handler is bound.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl<O: 'static> std::fmt::Debug for HandlerTable<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set()
            .entries(self.handlers.keys().map(TypeToken::name))
            .finish()
    }
}
