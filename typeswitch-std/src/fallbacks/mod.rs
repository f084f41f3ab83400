//! Fallback stack and standard fallbacks.

pub mod logging;

pub use logging::LoggingFallback;

use typeswitch_core::{BoxError, Fallback, FallbackResult, Message};

/// Ordered list of fallbacks, consumed last-registered-first.
///
/// Fallbacks can only be appended individually and cleared all at once.
pub struct FallbackStack<O = ()> {
    fallbacks: Vec<Box<dyn Fallback<O>>>,
}

impl<O: 'static> Default for FallbackStack<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: 'static> FallbackStack<O> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self {
            fallbacks: Vec::new(),
        }
    }

    /// Append a fallback; it will be tried before every fallback already present.
    pub fn push(&mut self, fallback: Box<dyn Fallback<O>>) {
        self.fallbacks.push(fallback);
    }

    /// Remove every fallback.
    pub fn clear(&mut self) {
        self.fallbacks.clear();
    }

    /// Number of fallbacks.
    pub fn len(&self) -> usize {
        self.fallbacks.len()
    }

    /// Returns `true` if the stack is empty.
    pub fn is_empty(&self) -> bool {
        self.fallbacks.is_empty()
    }

    /// Iterate in dispatch order: most recently added first.
    pub fn iter(&self) -> impl Iterator<Item = &dyn Fallback<O>> {
        self.fallbacks.iter().rev().map(|fallback| &**fallback)
    }

    /// Offer `value` to each fallback in dispatch order.
    ///
    /// Stops at the first fallback that claims the value or returns an error.
    /// Returns `Next` if the stack is exhausted without a claim.
    pub fn offer(&self, value: &dyn Message, out: &mut O) -> Result<FallbackResult, BoxError> {
        for fallback in self.iter() {
            match fallback.handle(value, out)? {
                FallbackResult::Handled => return Ok(FallbackResult::Handled),
                FallbackResult::Next => continue,
            }
        }
        Ok(FallbackResult::Next)
    }
}

impl<O: 'static> std::fmt::Debug for FallbackStack<O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FallbackStack")
            .field("len", &self.fallbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use typeswitch_core::fallback_fn;

    fn recording(
        label: &'static str,
        order: &Arc<Mutex<Vec<&'static str>>>,
        claim: bool,
    ) -> Box<dyn Fallback> {
        let order = order.clone();
        Box::new(fallback_fn(move |_value| {
            order.lock().unwrap().push(label);
            claim
        }))
    }

    #[test]
    fn offers_in_reverse_registration_order() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut stack = FallbackStack::new();
        stack.push(recording("first", &order, false));
        stack.push(recording("second", &order, false));
        stack.push(recording("third", &order, false));

        let result = stack.offer(&1i32, &mut ()).unwrap();
        assert_eq!(result, FallbackResult::Next);
        assert_eq!(*order.lock().unwrap(), vec!["third", "second", "first"]);
    }

    #[test]
    fn claim_stops_the_chain() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut stack = FallbackStack::new();
        stack.push(recording("never", &order, true));
        stack.push(recording("claims", &order, true));

        assert_eq!(stack.offer(&1i32, &mut ()).unwrap(), FallbackResult::Handled);
        assert_eq!(*order.lock().unwrap(), vec!["claims"]);
    }

    #[test]
    fn error_stops_the_chain() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut stack = FallbackStack::new();
        stack.push(recording("never", &order, true));
        stack.push(Box::new(fallback_fn(|_value| -> Result<bool, BoxError> {
            Err("broken".into())
        })));

        let err = stack.offer(&1i32, &mut ()).unwrap_err();
        assert_eq!(err.to_string(), "broken");
        assert!(order.lock().unwrap().is_empty());
    }

    #[test]
    fn clear_empties() {
        let order = Arc::new(Mutex::new(Vec::new()));
        let mut stack = FallbackStack::new();
        stack.push(recording("a", &order, true));
        assert_eq!(stack.len(), 1);
        stack.clear();
        assert!(stack.is_empty());
        assert_eq!(stack.offer(&1i32, &mut ()).unwrap(), FallbackResult::Next);
    }
}
