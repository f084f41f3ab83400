//! # typeswitch-core
//!
//! Core traits for the typeswitch runtime type dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! plugins that contribute handlers or fallbacks without needing the full
//! `typeswitch-std` implementation.
//!
//! # Building Blocks
//!
//! - [`Message`] - a value that knows its runtime type name and can be downcast
//! - [`TypeToken`] - the identity minted when a type is registered
//! - [`Handler`] - processes values of exactly one registered type
//! - [`Fallback`] - tried last-in-first-out for types without a handler;
//!   reports [`FallbackResult::Handled`] or [`FallbackResult::Next`]
//!
//! # Error Types
//!
//! - [`RegistryError`] - name resolution failures
//! - [`DispatchError`] - everything a single dispatch can fail with

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod fallback;
mod handler;
mod message;
mod response;
mod token;

// Re-exports
pub use error::{BoxError, DispatchError, RegistryError, TypeMismatch};
pub use fallback::{Fallback, FallbackResult, FnFallback, TypedFallback, fallback_fn, typed_fallback};
pub use handler::{FnHandler, Handler, Typed, TypedWith, handler_fn, typed, typed_with};
pub use message::Message;
pub use response::{IntoFallbackResult, IntoHandlerResult};
pub use token::TypeToken;
