#![allow(dead_code)]

use std::any::Any;
use typeswitch::{BoxError, Message};

// ============================================================================
// Test Message Types
// ============================================================================

/// A user-defined integer newtype, registered separately from `i32`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Special(pub i32);

impl Message for Special {
    fn type_name(&self) -> &'static str {
        "Special"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A second type that claims the same name as [`Special`].
#[derive(Clone, Copy, Debug)]
pub struct Impostor;

impl Message for Impostor {
    fn type_name(&self) -> &'static str {
        "Special"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ============================================================================
// Test Errors
// ============================================================================

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("rejected value {0}")]
pub struct Rejected(pub String);

pub fn rejected(value: &dyn Message) -> BoxError {
    Box::new(Rejected(format!("{value:?}")))
}
