//! # Handlers
//!
//! A handler is bound to exactly one registered type and fully processes
//! values of that type. It receives the value as a [`Message`] trait object
//! together with an output slot `&mut O` it may fill in; dispatchers that do
//! not use the slot are `Dispatcher<()>`.
//!
//! # Usage Patterns
//!
//! 1. **Closure**: `|value: &dyn Message, out: &mut O| { ... }`
//! 2. **Value only**: [`handler_fn`]`(|value| ...)`
//! 3. **Typed**: [`typed`]`(|s: &String| ...)` downcasts before calling
//! 4. **Struct implementation**: `impl Handler<O> for MyHandler`

use crate::{
    error::{BoxError, TypeMismatch},
    message::Message,
    response::IntoHandlerResult,
};
use std::marker::PhantomData;

/// A function bound to a single registered type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be used as a handler with output slot `{O}`",
    label = "missing `Handler<{O}>` implementation",
    note = "Closures of the form `Fn(&dyn Message, &mut {O})` are handlers; see also `handler_fn` and `typed`."
)]
pub trait Handler<O = ()>: Send + Sync + 'static {
    /// Process `value`, optionally writing into `out`.
    fn handle(&self, value: &dyn Message, out: &mut O) -> Result<(), BoxError>;
}

// Blanket impl for closures
impl<F, O, R> Handler<O> for F
where
    F: Fn(&dyn Message, &mut O) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    fn handle(&self, value: &dyn Message, out: &mut O) -> Result<(), BoxError> {
        (self)(value, out).into_handler_result()
    }
}

/// Handler built from a closure that ignores the output slot.
pub struct FnHandler<F>(F);

/// Wrap a closure taking only the value.
pub fn handler_fn<F, R>(f: F) -> FnHandler<F>
where
    F: Fn(&dyn Message) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    FnHandler(f)
}

impl<F, R, O> Handler<O> for FnHandler<F>
where
    F: Fn(&dyn Message) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<(), BoxError> {
        (self.0)(value).into_handler_result()
    }
}

/// Handler that downcasts to `T` before calling the inner closure.
///
/// A value of any other type yields a [`TypeMismatch`] error.
pub struct Typed<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

/// Wrap a closure over a concrete type.
pub fn typed<T, F, R>(f: F) -> Typed<T, F>
where
    T: Message,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    Typed {
        f,
        _marker: PhantomData,
    }
}

impl<T, F, R, O> Handler<O> for Typed<T, F>
where
    T: Message,
    F: Fn(&T) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    fn handle(&self, value: &dyn Message, _out: &mut O) -> Result<(), BoxError> {
        let concrete = downcast::<T>(value)?;
        (self.f)(concrete).into_handler_result()
    }
}

/// Handler that downcasts to `T` and also receives the output slot.
pub struct TypedWith<T, F> {
    f: F,
    _marker: PhantomData<fn(&T)>,
}

/// Wrap a closure over a concrete type and the output slot.
pub fn typed_with<T, O, F, R>(f: F) -> TypedWith<T, F>
where
    T: Message,
    F: Fn(&T, &mut O) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    TypedWith {
        f,
        _marker: PhantomData,
    }
}

impl<T, F, R, O> Handler<O> for TypedWith<T, F>
where
    T: Message,
    F: Fn(&T, &mut O) -> R + Send + Sync + 'static,
    R: IntoHandlerResult,
{
    fn handle(&self, value: &dyn Message, out: &mut O) -> Result<(), BoxError> {
        let concrete = downcast::<T>(value)?;
        (self.f)(concrete, out).into_handler_result()
    }
}

fn downcast<T: Message>(value: &dyn Message) -> Result<&T, TypeMismatch> {
    value.downcast_ref::<T>().ok_or_else(|| TypeMismatch {
        expected: std::any::type_name::<T>(),
        found: value.type_name(),
    })
}
