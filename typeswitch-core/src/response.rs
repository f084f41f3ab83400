//! Response conversion traits.

use crate::{error::BoxError, fallback::FallbackResult};

/// Trait for converting a handler's return value into its dispatch result.
///
/// # Default Implementations
///
/// - `()` → success
/// - `Result<(), BoxError>` → as is
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid handler return type",
    label = "missing `IntoHandlerResult` implementation",
    note = "Handlers return `()` or `Result<(), BoxError>`."
)]
pub trait IntoHandlerResult {
    /// Convert the output into success or a boxed error.
    fn into_handler_result(self) -> Result<(), BoxError>;
}

impl IntoHandlerResult for () {
    fn into_handler_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl IntoHandlerResult for Result<(), BoxError> {
    fn into_handler_result(self) -> Result<(), BoxError> {
        self
    }
}

/// Trait for converting a fallback's return value into a [`FallbackResult`].
///
/// # Default Implementations
///
/// - `()` → `Handled`
/// - `bool` → `true` = `Handled`, `false` = `Next`
/// - `FallbackResult` → as is
/// - `Result<T, BoxError>` → delegates to `T` or propagates the error
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid fallback return type",
    label = "missing `IntoFallbackResult` implementation",
    note = "Fallbacks return `bool`, `FallbackResult`, `()` or a `Result<_, BoxError>` of those."
)]
pub trait IntoFallbackResult {
    /// Convert the output into a claim decision or a boxed error.
    fn into_fallback_result(self) -> Result<FallbackResult, BoxError>;
}

impl IntoFallbackResult for () {
    fn into_fallback_result(self) -> Result<FallbackResult, BoxError> {
        Ok(FallbackResult::Handled)
    }
}

impl IntoFallbackResult for bool {
    fn into_fallback_result(self) -> Result<FallbackResult, BoxError> {
        Ok(if self {
            FallbackResult::Handled
        } else {
            FallbackResult::Next
        })
    }
}

impl IntoFallbackResult for FallbackResult {
    fn into_fallback_result(self) -> Result<FallbackResult, BoxError> {
        Ok(self)
    }
}

impl<T: IntoFallbackResult> IntoFallbackResult for Result<T, BoxError> {
    fn into_fallback_result(self) -> Result<FallbackResult, BoxError> {
        self.and_then(IntoFallbackResult::into_fallback_result)
    }
}
