//! Configuring a dispatcher through `DispatcherBuilder`.

use typeswitch::{
    DispatchError, Dispatcher, GatePolicy, RegistryError, fallback_fn, typed,
    fallbacks::LoggingFallback,
    testing::{CallLog, RecordingFallback},
};

mod common;
use common::Special;

// ============================================================================
// Test: DispatcherBuilder
// ============================================================================

#[test]
fn test_builder_matches_manual_setup() {
    let log = CallLog::new();
    let dispatcher: Dispatcher = Dispatcher::builder()
        .add_type(String::new())
        .add_type(Special(0))
        .handler("Special", typed(|special: &Special| assert!(special.0 >= 0)))
        .fallback(RecordingFallback::claiming("strings", log.clone()))
        .fallback(LoggingFallback::new())
        .build()
        .unwrap();

    assert_eq!(dispatcher.registry().len(), 2);
    assert_eq!(dispatcher.fallback_count(), 2);

    dispatcher.dispatch(&Special(1)).unwrap();
    dispatcher.dispatch(&String::from("s")).unwrap();
    assert_eq!(log.entries(), vec!["strings".to_string()]);

    assert!(matches!(
        dispatcher.dispatch(&1u8),
        Err(DispatchError::NotInRegistry(_))
    ));
}

#[test]
fn test_builder_rejects_unknown_handler_names() {
    let result = Dispatcher::<()>::builder()
        .add_type(Special(0))
        .handler("special", typed(|_: &Special| ()))
        .build();

    assert_eq!(
        result.unwrap_err(),
        RegistryError::NotInRegistry("special".to_string())
    );
}

#[test]
fn test_builder_open_policy() {
    let dispatcher: Dispatcher = Dispatcher::builder()
        .policy(GatePolicy::Open)
        .fallback(fallback_fn(|value| value.type_name() == "u64"))
        .build()
        .unwrap();

    dispatcher.dispatch(&9u64).unwrap();
    assert!(dispatcher.dispatch(&9u32).is_err());
}
