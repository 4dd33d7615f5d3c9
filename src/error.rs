//! Error types for the scripting bridge.
//!
//! Two layers: `ScriptError` is the user-facing failure a native capability
//! object raises while servicing a scripting call, and `DispatchError`
//! classifies why a host dispatch failed. Scripting errors cross the bridge
//! boundary as a host-visible exception signal plus a failure return, never
//! as a native-level fault.

use serde::{Deserialize, Serialize};
use std::fmt;

/// User-facing scripting failure raised by a native capability object.
///
/// Carries the human-readable message surfaced to the script author when the
/// bridge signals the exception to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptError {
    /// Human-readable message
    pub message: String,
}

impl ScriptError {
    /// Create a new scripting error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Create an invalid-argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(format!(
            "Invalid argument '{}': {}",
            name.into(),
            reason.into()
        ))
    }

    /// Create an unknown-method error.
    pub fn no_such_method(name: impl Into<String>) -> Self {
        Self::new(format!("No method named '{}'", name.into()))
    }

    /// Create an unknown-property error.
    pub fn no_such_property(name: impl Into<String>) -> Self {
        Self::new(format!("No property named '{}'", name.into()))
    }

    /// Create an operation-failed error.
    pub fn operation_failed(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(format!("{} failed: {}", operation.into(), reason.into()))
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ScriptError {}

/// Result type for calls into a native capability object.
pub type ScriptResult<T> = std::result::Result<T, ScriptError>;

/// Why a host dispatch failed.
///
/// Only the `Script` variant ever translates into a host-visible exception,
/// and only for the operations whose policy signals one (invoke and
/// set-property; property reads and the unsupported stubs fail silently).
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    /// Scripting failure raised by the native object
    #[error("{0}")]
    Script(#[from] ScriptError),

    /// Operation not implemented by this object
    #[error("operation not supported")]
    Unsupported,

    /// Dispatch attempted after invalidation; the native object may no
    /// longer be touched
    #[error("object has been invalidated")]
    Invalidated,

    /// Dispatch attempted before the bridge was bound to a native object
    #[error("object is not bound to a native target")]
    Unbound,

    /// Identifier token did not resolve to a string name
    #[error("identifier does not name a string")]
    UnknownIdentifier,
}

/// Result type for bridge-internal dispatch steps.
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
