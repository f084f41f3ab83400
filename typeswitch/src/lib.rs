//! # typeswitch - route values to handlers by runtime type
//!
//! `typeswitch` replaces a hard-coded `match` over payload types with an open
//! routing table: types, per-type handlers and fallbacks can all be added,
//! replaced and removed from outside the code that dispatches.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use typeswitch::prelude::*;
//!
//! #[derive(Debug, Message)]
//! struct Special(i32);
//!
//! let mut dispatcher = Dispatcher::new();
//! dispatcher.add_type(&String::new());
//! dispatcher.add_type(&Special(0));
//!
//! dispatcher.set_handler("String", typed(|s: &String| println!("{s} is a string")))?;
//! dispatcher.add_fallback(fallback_fn(|value| {
//!     println!("fallback for {value:?}");
//!     true
//! }));
//!
//! dispatcher.dispatch(&String::from("my string"))?; // handler
//! dispatcher.dispatch(&Special(2))?;                // fallback
//! dispatcher.dispatch(&34.0f64).unwrap_err();       // f64 is not registered
//! ```
//!
//! ## Fallback order
//!
//! Fallbacks run in reverse order of registration. A fallback added from the
//! outside therefore sees values first and decides, by claiming them or not,
//! whether the fallbacks registered before it run at all.
//!
//! ## Errors
//!
//! `dispatch` returns every failure to its caller instead of handling it
//! centrally. Wrap the call if you want one place to log or recover.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use typeswitch_core::{
    // Error types
    BoxError,
    DispatchError,
    // Fallbacks
    Fallback,
    FallbackResult,
    FnFallback,
    // Handlers
    FnHandler,
    Handler,
    // Response
    IntoFallbackResult,
    IntoHandlerResult,
    // Message
    Message,
    RegistryError,
    TypeMismatch,
    TypeToken,
    Typed,
    TypedFallback,
    TypedWith,
    fallback_fn,
    handler_fn,
    typed,
    typed_fallback,
    typed_with,
};

pub use typeswitch_std::{
    Dispatcher, DispatcherBuilder, FallbackStack, GatePolicy, HandlerTable, TypeRegistry,
    dispatch_union,
};

/// Standard fallback implementations.
pub mod fallbacks {
    pub use typeswitch_std::fallbacks::LoggingFallback;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use typeswitch_std::testing::*;
}

/// Distributed type registration.
#[cfg(feature = "inventory")]
pub mod collected {
    pub use typeswitch_std::collected::TypeRegistration;
}

#[cfg(feature = "inventory")]
pub use typeswitch_std::register_type;

/// Prelude module - common imports for typeswitch.
///
/// # Usage
///
/// ```rust,ignore
/// use typeswitch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        DispatchError,
        // Core
        Dispatcher,
        DispatcherBuilder,
        Fallback,
        FallbackResult,
        GatePolicy,
        Handler,
        Message,
        RegistryError,
        // Adaptors
        fallback_fn,
        handler_fn,
        typed,
        typed_fallback,
        typed_with,
    };
}

#[cfg(feature = "macros")]
pub use typeswitch_macros::Message;
