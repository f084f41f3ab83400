//! Registers a few types, binds handlers and a fallback, then dispatches.
//!
//! Run with `cargo run --example basic --features macros,tracing` and
//! `RUST_LOG=debug` to see the dispatch decisions.

use tracing_subscriber::EnvFilter;
use typeswitch::{fallbacks::LoggingFallback, prelude::*};

#[derive(Debug, Message)]
#[message(name = "I")]
struct I(i32);

fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Types are registered once, from a sample value.
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&String::new());
    dispatcher.add_type(&I(0));
    dispatcher.add_type(&3i32);

    // Fallbacks catch registered types without a handler.
    dispatcher.add_fallback(fallback_fn(|value| {
        println!("fallback for {value:?}");
        true
    }));
    dispatcher.add_fallback(LoggingFallback::named("basic"));

    // Handlers can rely on the downcast: the registry already checked the type.
    dispatcher.set_handler("String", typed(|s: &String| println!("{s} is a string")))?;
    dispatcher.set_handler("I", typed(|i: &I| println!("{} is an I", i.0)))?;

    dispatcher.dispatch(&String::from("my string"))?;
    dispatcher.dispatch(&I(3))?;
    println!("{}", dispatcher.has_type("f64"));
    if let Err(err) = dispatcher.dispatch(&34.0f64) {
        println!("{err}");
    }
    dispatcher.dispatch(&34i32)?;

    Ok(())
}
