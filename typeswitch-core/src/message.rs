//! Message trait for dispatchable values.

use std::any::{Any, TypeId};
use std::fmt::Debug;

/// A value that can be routed by its runtime type.
///
/// The type name is the key a dispatcher looks up in its registry; the
/// `Any` view lets handlers downcast to the concrete type.
///
/// Implemented for the common scalar types, `String` and `&'static str`.
/// Use `#[derive(Message)]` (feature `macros`) for your own types.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Debug)]
/// struct Special(i32);
///
/// impl Message for Special {
///     fn type_name(&self) -> &'static str { "Special" }
///     fn as_any(&self) -> &dyn Any { self }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a valid Message",
    label = "must implement `Message` to be dispatched",
    note = "Derive it with `#[derive(typeswitch::Message)]` or implement `type_name` and `as_any`."
)]
pub trait Message: Any + Debug + 'static {
    /// The runtime type name used as the registry key.
    fn type_name(&self) -> &'static str;

    /// View the value as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;
}

impl dyn Message {
    /// The concrete `TypeId` of the value behind this trait object.
    pub fn concrete_type_id(&self) -> TypeId {
        Any::type_id(self.as_any())
    }

    /// Returns `true` if the value is a `T`.
    pub fn is<T: Message>(&self) -> bool {
        self.as_any().is::<T>()
    }

    /// Downcast to a concrete type.
    pub fn downcast_ref<T: Message>(&self) -> Option<&T> {
        self.as_any().downcast_ref::<T>()
    }
}

macro_rules! impl_message {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        $(
            impl Message for $ty {
                fn type_name(&self) -> &'static str {
                    $name
                }

                fn as_any(&self) -> &dyn Any {
                    self
                }
            }
        )+
    };
}

// Common Message implementations
impl_message! {
    () => "()",
    bool => "bool",
    char => "char",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    f32 => "f32",
    f64 => "f64",
    String => "String",
    &'static str => "&str",
}
