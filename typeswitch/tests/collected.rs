#![cfg(feature = "inventory")]

use std::any::Any;
use std::sync::{
    Arc,
    atomic::{AtomicU32, Ordering},
};
use typeswitch::{Dispatcher, Message, register_type, typed};

#[derive(Debug)]
struct PluginEvent(u32);

impl Message for PluginEvent {
    fn type_name(&self) -> &'static str {
        "PluginEvent"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

register_type!(PluginEvent(0));
register_type!(String::new());

// ============================================================================
// Test: Distributed registration
// ============================================================================

#[test]
fn test_collect_types_registers_submissions() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    let collected = dispatcher.collect_types();

    assert!(collected >= 2);
    assert!(dispatcher.has_type("PluginEvent"));
    assert!(dispatcher.has_type("String"));

    let seen = Arc::new(AtomicU32::new(0));
    let sink = seen.clone();
    dispatcher
        .set_handler(
            "PluginEvent",
            typed(move |event: &PluginEvent| {
                sink.store(event.0, Ordering::SeqCst);
            }),
        )
        .unwrap();
    dispatcher.dispatch(&PluginEvent(7)).unwrap();
    assert_eq!(seen.load(Ordering::SeqCst), 7);
}
