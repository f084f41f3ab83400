//! # typeswitch-std
//!
//! Standard implementations for the typeswitch runtime type dispatcher.
//!
//! This crate provides:
//! - **Tables**: [`TypeRegistry`], [`HandlerTable`], [`FallbackStack`]
//! - **Dispatch**: [`Dispatcher`], [`DispatcherBuilder`], [`GatePolicy`]
//! - **Closed unions**: the [`dispatch_union!`] macro
//! - **Standard fallbacks**: [`LoggingFallback`]
//! - **Distributed registration**: `register_type!` (feature `inventory`)
//! - **Testing utilities**: [`testing`]

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use typeswitch_core;

// Modules
pub mod builder;
pub mod closed;
pub mod dispatcher;
pub mod fallbacks;
pub mod registry;
pub mod table;
pub mod testing;

#[cfg(feature = "inventory")]
pub mod collected;

#[cfg(feature = "inventory")]
pub use inventory;

pub use builder::DispatcherBuilder;
pub use dispatcher::{Dispatcher, GatePolicy};
pub use fallbacks::{FallbackStack, LoggingFallback};
pub use registry::TypeRegistry;
pub use table::HandlerTable;

#[cfg(feature = "inventory")]
pub use collected::TypeRegistration;
