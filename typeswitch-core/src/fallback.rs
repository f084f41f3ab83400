//! # Fallbacks
//!
//! Fallbacks are generic handlers tried for values whose type has no bound
//! handler. They are consulted last-registered-first and each one decides
//! whether it claimed the value (`Handled`) or passes it on (`Next`).
//!
//! Installing a fallback from the outside lets a host intercept the chain:
//! returning `Handled` keeps the fallbacks registered before it from running.

use crate::{
    error::BoxError,
    message::Message,
    response::IntoFallbackResult,
};
use std::marker::PhantomData;

/// Result of a fallback indicating whether it claimed the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackResult {
    /// The value was not claimed; offer it to the next fallback.
    Next,
    /// The value was fully handled; stop the chain.
    Handled,
}

impl FallbackResult {
    /// Returns `true` for [`FallbackResult::Handled`].
    pub const fn is_handled(self) -> bool {
        matches!(self, FallbackResult::Handled)
    }
}

/// A generic handler for values without a type-specific handler.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a fallback with output slot `{O}`",
    label = "missing `Fallback<{O}>` implementation",
    note = "Closures of the form `Fn(&dyn Message, &mut {O})` returning `bool` or `FallbackResult` are fallbacks; see also `fallback_fn`."
)]
pub trait Fallback<O = ()>: Send + Sync + 'static {
    /// Offer `value` to this fallback.
    fn handle(&self, value: &dyn Message, out: &mut O) -> Result<FallbackResult, BoxError>;
}

// Blanket impl for closures
impl<F, O, R> Fallback<O> for F
where
    F: Fn(&dyn Message, &mut O) -> R + Send + Sync + 'static,
    R: IntoFallbackResult,
{
    fn handle(&self, value: &dyn Message, out: &mut O) -> Result<FallbackResult, BoxError> {
        (self)(value, out).into_fallback_result()
    }
}

/// Fallback built from a closure that ignores the output slot.
pub struct FnFallback<F>(F);

/// Wrap a closure taking only the value.
pub fn fallback_fn<F, R>(f: F) -> FnFallback<F>
where
    F: Fn(&dyn Message) -> R + Send + Sync + 'static,
    R: IntoFallbackResult,
{
    FnFallback(f)
}

impl<F, R, O> Fallback<O> for FnFallback<F>
where
    F: Fn(&dyn Message) -> R + Send + Sync + 'static,
    R: IntoFallbackResult,
{
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<FallbackResult, BoxError> {
        (self.0)(value).into_fallback_result()
    }
}

/// Fallback that only considers values of type `T`.
///
/// Values of any other type are passed on with `Next` without calling the
/// closure.
pub struct TypedFallback<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

/// Wrap a closure over a concrete type as a fallback.
pub fn typed_fallback<T, F, R>(f: F) -> TypedFallback<T, F>
where
    T: Message,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: IntoFallbackResult,
{
    TypedFallback {
        f,
        _marker: PhantomData,
    }
}

impl<T, F, R, O> Fallback<O> for TypedFallback<T, F>
where
    T: Message,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: IntoFallbackResult,
{
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<FallbackResult, BoxError> {
        match value.downcast_ref::<T>() {
            Some(concrete) => (self.f)(concrete).into_fallback_result(),
            None => Ok(FallbackResult::Next),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_fallback_fills_slot() {
        let fallback = |value: &dyn Message, out: &mut Vec<String>| {
            out.push(value.type_name().to_string());
            true
        };
        let mut out = Vec::new();
        let result = fallback.handle(&1.5f32, &mut out).unwrap();
        assert_eq!(result, FallbackResult::Handled);
        assert_eq!(out, vec!["f32".to_string()]);
    }

    #[test]
    fn fallback_fn_passes_on() {
        let fallback = fallback_fn(|_value| false);
        let result = Fallback::<()>::handle(&fallback, &'c', &mut ()).unwrap();
        assert_eq!(result, FallbackResult::Next);
        assert!(!result.is_handled());
    }

    #[test]
    fn typed_fallback_skips_other_types() {
        let fallback = typed_fallback(|n: &u32| *n > 10);
        assert_eq!(
            Fallback::<()>::handle(&fallback, &11u32, &mut ()).unwrap(),
            FallbackResult::Handled
        );
        assert_eq!(
            Fallback::<()>::handle(&fallback, &3u32, &mut ()).unwrap(),
            FallbackResult::Next
        );
        assert_eq!(
            Fallback::<()>::handle(&fallback, &"eleven", &mut ()).unwrap(),
            FallbackResult::Next
        );
    }
}
