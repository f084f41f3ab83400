//! Distributed type registration via `inventory`.
//!
//! Plugins submit their payload types with [`register_type!`](crate::register_type)
//! and the host pulls them in with [`Dispatcher::collect_types`], so adding a
//! type does not require touching the host's setup code.

use crate::dispatcher::Dispatcher;
use typeswitch_core::Message;

/// A type submitted for registration.
pub struct TypeRegistration {
    sample: fn() -> Box<dyn Message>,
}

impl TypeRegistration {
    /// Create a registration from a sample factory.
    pub const fn new(sample: fn() -> Box<dyn Message>) -> Self {
        Self { sample }
    }

    /// Produce a fresh sample value.
    pub fn sample(&self) -> Box<dyn Message> {
        (self.sample)()
    }
}

inventory::collect!(TypeRegistration);

/// Submits a type to every dispatcher that calls [`Dispatcher::collect_types`].
///
/// The expression is evaluated each time the registrations are collected and
/// must produce a value of the type to register.
///
/// # Example
/// ```rust,ignore
/// register_type!(Special(0));
/// ```
#[macro_export]
macro_rules! register_type {
    ($sample:expr) => {
        const _: () = {
            fn __typeswitch_sample() -> ::std::boxed::Box<dyn $crate::typeswitch_core::Message> {
                ::std::boxed::Box::new($sample)
            }

            $crate::inventory::submit! {
                $crate::collected::TypeRegistration::new(__typeswitch_sample)
            }
        };
    };
}

impl<O: 'static> Dispatcher<O> {
    /// Register every type submitted with `register_type!`.
    ///
    /// Returns the number of registrations applied.
    pub fn collect_types(&mut self) -> usize {
        let mut count = 0;
        for registration in inventory::iter::<TypeRegistration> {
            self.add_type(registration.sample().as_ref());
            count += 1;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count, "collected distributed type registrations");

        count
    }
}
