//! Testing utilities for typeswitch.
//!
//! This module provides handlers and fallbacks that record what they see,
//! to make testing dispatcher setups easier.
//!
//! # Features
//!
//! - [`CallLog`]: A shared, ordered log of calls
//! - [`RecordingFallback`]: A fallback that logs its label and returns a fixed result
//! - [`RecordingHandler`]: A handler that records the `Debug` form of each value
//! - [`CountingHandler`]: A handler that counts invocations
//! - [`FailingHandler`]: A handler that always returns an error

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};
use typeswitch_core::{BoxError, Fallback, FallbackResult, Handler, Message};

// ============================================================================
// Call Log
// ============================================================================

/// A cloneable, shared log of call labels, in call order.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// dispatcher.add_fallback(RecordingFallback::passing("f1", log.clone()));
/// dispatcher.add_fallback(RecordingFallback::claiming("f2", log.clone()));
///
/// dispatcher.dispatch(&value)?;
/// assert_eq!(log.entries(), vec!["f2"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&self, entry: impl Into<String>) {
        self.entries.lock().unwrap().push(entry.into());
    }

    /// Get a clone of the recorded entries.
    pub fn entries(&self) -> Vec<String> {
        self.entries.lock().unwrap().clone()
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all recorded entries.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }
}

// ============================================================================
// Recording Fallback
// ============================================================================

/// A fallback that records its label in a [`CallLog`] and returns a fixed result.
pub struct RecordingFallback {
    label: String,
    log: CallLog,
    result: FallbackResult,
}

impl RecordingFallback {
    /// Create a recording fallback that returns `result`.
    pub fn with_result(label: impl Into<String>, log: CallLog, result: FallbackResult) -> Self {
        Self {
            label: label.into(),
            log,
            result,
        }
    }

    /// Create a recording fallback that passes values on.
    pub fn passing(label: impl Into<String>, log: CallLog) -> Self {
        Self::with_result(label, log, FallbackResult::Next)
    }

    /// Create a recording fallback that claims every value.
    pub fn claiming(label: impl Into<String>, log: CallLog) -> Self {
        Self::with_result(label, log, FallbackResult::Handled)
    }
}

impl<O> Fallback<O> for RecordingFallback {
    fn handle(&self, _value: &dyn Message, _out: &mut O) -> Result<FallbackResult, BoxError> {
        self.log.record(self.label.clone());
        Ok(self.result)
    }
}

// ============================================================================
// Recording Handler
// ============================================================================

/// A handler that records the `Debug` rendering of every value it receives.
#[derive(Debug, Clone, Default)]
pub struct RecordingHandler {
    values: CallLog,
}

impl RecordingHandler {
    /// Create a new recording handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded values.
    pub fn values(&self) -> Vec<String> {
        self.values.entries()
    }

    /// Get the number of recorded values.
    pub fn count(&self) -> usize {
        self.values.len()
    }
}

impl<O> Handler<O> for RecordingHandler {
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<(), BoxError> {
        self.values.record(format!("{value:?}"));
        Ok(())
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// A handler that counts invocations.
///
/// # Example
///
/// ```rust,ignore
/// let counter = CountingHandler::new();
/// dispatcher.set_handler("String", counter.clone())?;
///
/// dispatcher.dispatch(&String::from("x"))?;
/// assert_eq!(counter.count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CountingHandler {
    count: Arc<AtomicUsize>,
}

impl CountingHandler {
    /// Create a new counting handler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl<O> Handler<O> for CountingHandler {
    fn handle(&self, _value: &dyn Message, _out: &mut O) -> Result<(), BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ============================================================================
// Failing Handler
// ============================================================================

/// A handler that always fails with the given message.
#[derive(Debug, Clone)]
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a failing handler.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl<O> Handler<O> for FailingHandler {
    fn handle(&self, _value: &dyn Message, _out: &mut O) -> Result<(), BoxError> {
        Err(self.message.clone().into())
    }
}
