//! Type registry: the set of concrete types a dispatcher knows about.

use std::collections::HashMap;
use typeswitch_core::{Message, RegistryError, TypeToken};

/// Mapping from type name to the token minted when the type was registered.
///
/// A name absent from the registry is, by definition, an unregistered type.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: HashMap<&'static str, TypeToken>,
    next_generation: u64,
}

impl TypeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the runtime type of `sample`.
    ///
    /// Always mints a fresh token, replacing any token previously stored
    /// under the same name. Returns the new token and the replaced one.
    pub fn add_type(&mut self, sample: &dyn Message) -> (TypeToken, Option<TypeToken>) {
        let token = TypeToken::new(sample, self.next_generation);
        self.next_generation += 1;
        let replaced = self.types.insert(token.name(), token);
        (token, replaced)
    }

    /// Unregister a type. Removing an absent name is not an error.
    pub fn remove_type(&mut self, name: &str) -> Option<TypeToken> {
        self.types.remove(name)
    }

    /// Returns `true` if `name` is registered.
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Look up the token registered under `name`.
    pub fn get_type(&self, name: &str) -> Result<TypeToken, RegistryError> {
        self.types
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::NotInRegistry(name.to_string()))
    }

    /// Resolve the token for a value.
    ///
    /// The name must be registered and the value's concrete type must be the
    /// one the token was minted from; a different type that happens to share
    /// the name does not resolve.
    pub fn resolve(&self, value: &dyn Message) -> Option<TypeToken> {
        self.types
            .get(value.type_name())
            .filter(|token| token.matches(value))
            .copied()
    }

    /// Iterate over registered type names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.types.keys().copied()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns `true` if no type is registered.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
