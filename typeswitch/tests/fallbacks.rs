//! Fallback chain ordering, claiming and error propagation.

use typeswitch::{
    BoxError, DispatchError, Dispatcher, FallbackResult, GatePolicy, Message, fallback_fn,
    fallbacks::LoggingFallback,
    testing::{CallLog, RecordingFallback},
    typed_fallback,
};

mod common;
use common::{Rejected, Special, rejected};

// ============================================================================
// Test: Fallback chain order
// ============================================================================

#[test]
fn test_fallbacks_run_last_registered_first() {
    // F3, F2, F1 are added in that order; only F2 and F1 would claim.
    let log = CallLog::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&String::new());
    dispatcher.add_fallback(RecordingFallback::claiming("F3", log.clone()));
    dispatcher.add_fallback(RecordingFallback::claiming("F2", log.clone()));
    dispatcher.add_fallback(RecordingFallback::passing("F1", log.clone()));

    let result = dispatcher.dispatch(&String::from("x"));

    assert!(result.is_ok());
    assert_eq!(log.entries(), vec!["F1".to_string(), "F2".to_string()]);
}

#[test]
fn test_fallback_error_stops_chain() {
    let log = CallLog::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&Special(0));
    dispatcher.add_fallback(RecordingFallback::claiming("never", log.clone()));
    dispatcher.add_fallback(fallback_fn(|value| -> Result<bool, BoxError> {
        Err(rejected(value))
    }));
    dispatcher.add_fallback(RecordingFallback::passing("first", log.clone()));

    let err = dispatcher.dispatch(&Special(1)).unwrap_err();

    assert!(matches!(err, DispatchError::Fallback(_)));
    assert_eq!(err.to_string(), "rejected value Special(1)");
    assert_eq!(
        err.into_source().unwrap().downcast_ref::<Rejected>(),
        Some(&Rejected("Special(1)".to_string()))
    );
    assert_eq!(log.entries(), vec!["first".to_string()]);
}

#[test]
fn test_no_fallback_for_registered_type() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&Special(0));

    let err = dispatcher.dispatch(&Special(3)).unwrap_err();

    assert!(matches!(err, DispatchError::NoFallback(ref name) if name == "Special"));
    assert!(err.to_string().contains("Special"));
}

// ============================================================================
// Test: Unclaimed values
// ============================================================================

#[test]
fn test_unclaimed_value_is_reported() {
    let log = CallLog::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&0i32);
    dispatcher.add_fallback(RecordingFallback::passing("a", log.clone()));
    dispatcher.add_fallback(RecordingFallback::passing("b", log.clone()));

    let err = dispatcher.dispatch(&34i32).unwrap_err();

    match err {
        DispatchError::NotHandled { value, type_name } => {
            assert_eq!(value, "34");
            assert_eq!(type_name, "i32");
        }
        other => panic!("expected NotHandled, got {other:?}"),
    }
    assert_eq!(log.entries(), vec!["b".to_string(), "a".to_string()]);
}

#[test]
fn test_typed_fallback_claims_only_its_type() {
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&0i32);
    dispatcher.add_type(&Special(0));
    dispatcher.add_fallback(typed_fallback(|special: &Special| special.0 > 0));

    dispatcher.dispatch(&Special(5)).unwrap();
    assert!(matches!(
        dispatcher.dispatch(&Special(-5)),
        Err(DispatchError::NotHandled { .. })
    ));
    assert!(matches!(
        dispatcher.dispatch(&5i32),
        Err(DispatchError::NotHandled { .. })
    ));
}

// ============================================================================
// Test: Standard fallbacks
// ============================================================================

#[test]
fn test_logging_fallback_observes_without_claiming() {
    let log = CallLog::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&"");
    dispatcher.add_fallback(RecordingFallback::claiming("sink", log.clone()));
    dispatcher.add_fallback(LoggingFallback::named("observer"));

    dispatcher.dispatch(&"hello").unwrap();
    assert_eq!(log.entries(), vec!["sink".to_string()]);
}

#[test]
fn test_fallbacks_can_be_replaced_wholesale() {
    let log = CallLog::new();
    let mut dispatcher: Dispatcher = Dispatcher::new();
    dispatcher.add_type(&0u8);
    dispatcher.add_fallback(RecordingFallback::claiming("old", log.clone()));
    dispatcher.remove_fallbacks();
    dispatcher.add_fallback(RecordingFallback::claiming("new", log.clone()));

    dispatcher.dispatch(&1u8).unwrap();
    assert_eq!(log.entries(), vec!["new".to_string()]);
}

// ============================================================================
// Test: Gate policy
// ============================================================================

#[test]
fn test_open_policy_routes_unregistered_types() {
    let mut dispatcher: Dispatcher = Dispatcher::with_policy(GatePolicy::Open);
    dispatcher.add_fallback(|value: &dyn Message, _out: &mut ()| {
        if value.is::<f64>() {
            FallbackResult::Handled
        } else {
            FallbackResult::Next
        }
    });

    dispatcher.dispatch(&34.0f64).unwrap();
    assert!(matches!(
        dispatcher.dispatch(&34i32),
        Err(DispatchError::NotHandled { ref type_name, .. }) if type_name == "i32"
    ));
}
