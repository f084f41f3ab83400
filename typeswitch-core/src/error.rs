//! Error types for typeswitch.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`RegistryError`] - Errors from registry and handler table operations
//! - [`DispatchError`] - Errors produced by a single dispatch
//! - [`TypeMismatch`] - Raised by typed adaptors handed a value of another type

use thiserror::Error;

/// A boxed error type for errors produced by handlers and fallbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when resolving a type name through the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The type name was never registered (or has been removed).
    #[error("type {0} is not registered, use Dispatcher::add_type")]
    NotInRegistry(String),
}

/// Errors that can occur during a single dispatch.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The value's runtime type is not registered.
    ///
    /// Raised before any handler or fallback runs.
    #[error("type {0} is not registered, use Dispatcher::add_type")]
    NotInRegistry(String),

    /// The type is registered but has no handler, and no fallbacks exist.
    #[error("no handler for type {0} and no fallback registered")]
    NoFallback(String),

    /// Every fallback was offered the value and none claimed it.
    #[error("value {value} of type {type_name} was not handled by any fallback")]
    NotHandled {
        /// `Debug` rendering of the unhandled value.
        value: String,
        /// Runtime type name of the unhandled value.
        type_name: String,
    },

    /// The error returned by the type's handler, unchanged.
    #[error(transparent)]
    Handler(BoxError),

    /// The error returned by a fallback, unchanged. Later fallbacks did not run.
    #[error(transparent)]
    Fallback(BoxError),
}

impl DispatchError {
    /// The runtime type name this error refers to, if it carries one.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            DispatchError::NotInRegistry(name) | DispatchError::NoFallback(name) => Some(name),
            DispatchError::NotHandled { type_name, .. } => Some(type_name),
            DispatchError::Handler(_) | DispatchError::Fallback(_) => None,
        }
    }

    /// Returns the error produced by a handler or fallback, if this is one.
    pub fn into_source(self) -> Option<BoxError> {
        match self {
            DispatchError::Handler(err) | DispatchError::Fallback(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RegistryError> for DispatchError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::NotInRegistry(name) => DispatchError::NotInRegistry(name),
        }
    }
}

/// A typed adaptor received a value of a different concrete type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected a value of type {expected}, got {found}")]
pub struct TypeMismatch {
    /// Type the adaptor was written for.
    pub expected: &'static str,
    /// Runtime type name of the value it received.
    pub found: &'static str,
}
