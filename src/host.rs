//! Host-communication surface.
//!
//! The embedding host supplies identifier interning, value marshalling,
//! exception signaling and event delivery as a per-session facility. The
//! bridge consumes it as an opaque service boundary: it moves [`HostValue`]s
//! across without inspecting them and resolves [`Identifier`] tokens only
//! through the link.

use crate::protocol::{BridgeHandle, ObjectClass};
use crate::variant::Variant;
use std::fmt;
use uuid::Uuid;

/// Interned identifier token supplied by the host.
///
/// Tokens are allocated by the host's interning facility. A token that does
/// not resolve back to a string (hosts may intern integral identifiers too)
/// names nothing as far as the bridge is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Identifier(u64);

impl Identifier {
    /// Wrap a raw host token.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw host token.
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// The host engine's own value representation.
///
/// Opaque to the bridge: conversion to and from [`Variant`] always goes
/// through the [`HostLink`] marshaller. The default value is `Void`, the
/// state of an untouched result slot.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum HostValue {
    /// No value ("undefined")
    #[default]
    Void,
    /// Explicit null
    Null,
    /// Boolean value
    Bool(bool),
    /// 32-bit integer value
    Int(i32),
    /// Floating point value
    Double(f64),
    /// String value
    Str(String),
    /// Reference to a host-side object
    ObjectRef(u64),
}

/// Identity of a bridge instance.
///
/// Used when signaling exceptions and delivering events so the host can
/// attribute them to the right scripting object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstanceId(Uuid);

impl InstanceId {
    /// Generate a fresh instance identity.
    pub fn fresh() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for InstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-session host-communication facility.
///
/// Shared read-only across every bridge in a session; bridges query the
/// interning and marshalling services but never mutate shared host state.
pub trait HostLink {
    /// Resolve an interned identifier back to its string form.
    ///
    /// Returns `None` for tokens that do not name a string.
    fn string_for_identifier(&self, ident: Identifier) -> Option<String>;

    /// Intern a string, returning the host's identifier token for it.
    fn identifier_for_string(&self, name: &str) -> Identifier;

    /// Convert a host value into the bridge's variant representation.
    fn to_variant(&self, value: &HostValue) -> Variant;

    /// Convert a variant back into the host's value representation.
    fn from_variant(&self, variant: &Variant) -> HostValue;

    /// Raise a host-visible exception attributed to `source`.
    ///
    /// The message surfaces to the script author as a thrown exception.
    fn signal_exception(&self, source: InstanceId, message: &str);

    /// Deliver a native-raised event to the scripting engine, attributed to
    /// `source`.
    fn deliver_event(&self, source: InstanceId, name: &str, args: &[HostValue]);

    /// Allocate a scripting handle through the host's object allocator.
    ///
    /// The allocation entry point carries no native-side parameters; binding
    /// is a separate step (see [`create_object`](crate::protocol::create_object)).
    /// The default routes straight to the class allocator; hosts that track
    /// live allocations may override.
    fn allocate_handle(&self, class: &ObjectClass) -> BridgeHandle {
        (class.allocate)()
    }
}
