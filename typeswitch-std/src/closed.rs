//! Closed unions of payload types.
//!
//! When the set of payload types is known up front, declare it with
//! [`dispatch_union!`](crate::dispatch_union). The generated enum is matched
//! exhaustively by the compiler, while each payload still dispatches through
//! the open registry and fallback chain.

/// Declares an enum over a closed set of [`Message`] payload types.
///
/// # Example
///
/// ```rust,ignore
/// dispatch_union! {
///     #[derive(Debug)]
///     pub enum Payload {
///         Text(String),
///         Count(i64),
///     }
/// }
///
/// let mut dispatcher = Dispatcher::new();
/// Payload::register_types(&mut dispatcher);
/// dispatcher.dispatch(Payload::from(3i64).as_message())?;
/// ```
///
/// # Generated Code
///
/// The macro expands to:
/// - The enum definition with the specified variants
/// - `as_message(&self) -> &dyn Message` returning the payload
/// - `register_types(&mut Dispatcher<O>)` adding every payload type from its
///   `Default` value
/// - `impl From<PayloadType> for EnumName` for each variant
///
/// [`Message`]: typeswitch_core::Message
#[macro_export]
macro_rules! dispatch_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $variant:ident($inner:ty)
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name {
            $(
                $variant($inner),
            )+
        }

        impl $name {
            /// The payload as a dispatchable message.
            $vis fn as_message(&self) -> &dyn $crate::typeswitch_core::Message {
                match self {
                    $(
                        Self::$variant(inner) => inner as &dyn $crate::typeswitch_core::Message,
                    )+
                }
            }

            /// Register every payload type with `dispatcher`.
            $vis fn register_types<O: 'static>(dispatcher: &mut $crate::dispatcher::Dispatcher<O>) {
                $(
                    dispatcher.add_type(&<$inner as ::core::default::Default>::default());
                )+
            }
        }

        // Generate From impls for ergonomic construction
        $(
            impl From<$inner> for $name {
                fn from(inner: $inner) -> Self {
                    Self::$variant(inner)
                }
            }
        )+
    };
}
