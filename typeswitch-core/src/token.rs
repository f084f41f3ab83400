//! Type identity tokens.

use crate::message::Message;
use std::any::TypeId;
use std::hash::{Hash, Hasher};

/// Opaque identity of a registered type.
///
/// A token is minted from a sample value when its type is registered. Two
/// tokens are equal only if they come from the same registration: re-adding
/// a type mints a new generation, so anything keyed by the old token
/// (such as a handler) no longer matches.
#[derive(Debug, Clone, Copy)]
pub struct TypeToken {
    id: TypeId,
    name: &'static str,
    generation: u64,
}

impl TypeToken {
    /// Mint a token for the concrete type of `sample`.
    ///
    /// Registries hand out increasing `generation` numbers so that each
    /// registration yields a distinct identity.
    pub fn new(sample: &dyn Message, generation: u64) -> Self {
        Self {
            id: sample.concrete_type_id(),
            name: sample.type_name(),
            generation,
        }
    }

    /// The registered type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The concrete `TypeId` of the registered type.
    pub fn type_id(&self) -> TypeId {
        self.id
    }

    /// The registration generation this token belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if `value` has exactly the registered concrete type.
    pub fn matches(&self, value: &dyn Message) -> bool {
        value.concrete_type_id() == self.id
    }
}

impl PartialEq for TypeToken {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation && self.id == other.id
    }
}

impl Eq for TypeToken {}

impl Hash for TypeToken {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.generation.hash(state);
        self.id.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_is_by_registration_not_name() {
        let a = TypeToken::new(&1i32, 0);
        let b = TypeToken::new(&2i32, 0);
        let c = TypeToken::new(&1i32, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.name(), c.name());
    }

    #[test]
    fn matches_checks_concrete_type() {
        let token = TypeToken::new(&String::new(), 3);
        assert!(token.matches(&String::from("hello")));
        assert!(!token.matches(&"hello"));
        assert_eq!(token.type_id(), TypeId::of::<String>());
        assert_eq!(token.generation(), 3);
    }
}
