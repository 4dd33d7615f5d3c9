//! Generic-object protocol surface.
//!
//! The host drives every scripting handle through a fixed, positional table
//! of entry points: it calls by function pointer, never by name, so even
//! the reserved operations are real entries. [`ObjectClass`] is that table,
//! [`BridgeHandle`] is the reference-counted handle the host holds, and the
//! entry points translate table calls into [`ScriptObject`] calls. This
//! keeps protocol compliance mechanically separate from the dispatch logic
//! in [`bridge`](crate::bridge).

use crate::bridge::ScriptObjectBridge;
use crate::capability::ScriptableApi;
use crate::host::{HostLink, HostValue, Identifier};
use std::ops::Deref;
use std::sync::Arc;

/// The dispatch surface of a host-allocated scripting object.
///
/// These are the protocol operations as ordinary polymorphic methods; the
/// entry-point table below adapts them to the host's function-pointer
/// calling convention. Invoke-style operations return `Some(value)` on
/// success and `None` to report failure to the host dispatcher.
pub trait ScriptObject {
    /// Forbid further native forwarding; the scripting context is going
    /// away while the native side may persist.
    fn invalidate(&self);

    /// Whether the object exposes a method named by `name`.
    fn has_method(&self, name: Identifier) -> bool;

    /// Invoke the method named by `name` with `args`.
    fn invoke(&self, name: Identifier, args: &[HostValue]) -> Option<HostValue>;

    /// Invoke the object itself (a call with the empty name).
    fn invoke_default(&self, args: &[HostValue]) -> Option<HostValue>;

    /// Whether the object exposes a property (or event handler slot) named
    /// by `name`.
    fn has_property(&self, name: Identifier) -> bool;

    /// Read the property named by `name`.
    fn get_property(&self, name: Identifier) -> Option<HostValue>;

    /// Write `value` to the property named by `name`.
    fn set_property(&self, name: Identifier, value: &HostValue) -> bool;

    /// Remove the property named by `name`. Reserved; reports unsupported.
    fn remove_property(&self, name: Identifier) -> bool;

    /// Enumerate the object's member names. Reserved; reports unsupported.
    fn enumerate(&self) -> Option<Vec<Identifier>>;

    /// Construct a new object. Reserved; reports unsupported.
    fn construct(&self, args: &[HostValue]) -> Option<HostValue>;
}

/// Host-visible handle to a bridge object.
///
/// The host manages object lifetime by reference count: `retain` adds a
/// reference, `release` drops one, and the final release runs the
/// destruction path (detaching the bridge from its native object).
#[derive(Clone)]
pub struct BridgeHandle(Arc<ScriptObjectBridge>);

impl BridgeHandle {
    /// The bridge instance behind this handle.
    pub fn instance(&self) -> &Arc<ScriptObjectBridge> {
        &self.0
    }

    /// Add a reference.
    pub fn retain(&self) -> BridgeHandle {
        BridgeHandle(Arc::clone(&self.0))
    }

    /// Drop a reference; the last release deallocates the bridge.
    pub fn release(self) {}

    /// Current reference count.
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.0)
    }
}

impl Deref for BridgeHandle {
    type Target = ScriptObjectBridge;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// The fixed table of entry points of the generic-object protocol.
///
/// Every host-allocated scripting handle provides all twelve, including the
/// reserved stubs; the host looks them up positionally. Invoke-style entries
/// write the converted result into the out-slot only on success and leave it
/// untouched on failure.
pub struct ObjectClass {
    /// Allocate a fresh, unbound object
    pub allocate: fn() -> BridgeHandle,
    /// Drop one handle reference; the last release deallocates
    pub deallocate: fn(BridgeHandle),
    /// Forbid further native forwarding
    pub invalidate: fn(&BridgeHandle),
    /// Method-existence query
    pub has_method: fn(&BridgeHandle, Identifier) -> bool,
    /// Named method invocation
    pub invoke: fn(&BridgeHandle, Identifier, &[HostValue], &mut HostValue) -> bool,
    /// Default (unnamed) invocation
    pub invoke_default: fn(&BridgeHandle, &[HostValue], &mut HostValue) -> bool,
    /// Property-existence query
    pub has_property: fn(&BridgeHandle, Identifier) -> bool,
    /// Property read
    pub get_property: fn(&BridgeHandle, Identifier, &mut HostValue) -> bool,
    /// Property write
    pub set_property: fn(&BridgeHandle, Identifier, &HostValue) -> bool,
    /// Property removal (reserved)
    pub remove_property: fn(&BridgeHandle, Identifier) -> bool,
    /// Member enumeration (reserved)
    pub enumerate: fn(&BridgeHandle, &mut Vec<Identifier>) -> bool,
    /// Construction (reserved)
    pub construct: fn(&BridgeHandle, &[HostValue], &mut HostValue) -> bool,
}

/// The entry-point table for [`ScriptObjectBridge`].
pub static BRIDGE_CLASS: ObjectClass = ObjectClass {
    allocate,
    deallocate,
    invalidate,
    has_method,
    invoke,
    invoke_default,
    has_property,
    get_property,
    set_property,
    remove_property,
    enumerate,
    construct,
};

/// Create a bound bridge object: allocate a handle through the host's
/// allocation entry point, then bind it to `api` before it is exposed to
/// scripting code.
///
/// Binding is a second step because the allocation entry point cannot carry
/// native-side parameters.
pub fn create_object(
    class: &ObjectClass,
    api: Arc<dyn ScriptableApi>,
    host: Arc<dyn HostLink>,
) -> BridgeHandle {
    let handle = host.allocate_handle(class);
    ScriptObjectBridge::bind(handle.instance(), api, host);
    handle
}

fn allocate() -> BridgeHandle {
    BridgeHandle(Arc::new(ScriptObjectBridge::new()))
}

fn deallocate(handle: BridgeHandle) {
    handle.release();
}

fn invalidate(handle: &BridgeHandle) {
    ScriptObject::invalidate(&**handle);
}

fn has_method(handle: &BridgeHandle, name: Identifier) -> bool {
    ScriptObject::has_method(&**handle, name)
}

fn invoke(
    handle: &BridgeHandle,
    name: Identifier,
    args: &[HostValue],
    result: &mut HostValue,
) -> bool {
    match ScriptObject::invoke(&**handle, name, args) {
        Some(value) => {
            *result = value;
            true
        }
        None => false,
    }
}

fn invoke_default(handle: &BridgeHandle, args: &[HostValue], result: &mut HostValue) -> bool {
    match ScriptObject::invoke_default(&**handle, args) {
        Some(value) => {
            *result = value;
            true
        }
        None => false,
    }
}

fn has_property(handle: &BridgeHandle, name: Identifier) -> bool {
    ScriptObject::has_property(&**handle, name)
}

fn get_property(handle: &BridgeHandle, name: Identifier, result: &mut HostValue) -> bool {
    match ScriptObject::get_property(&**handle, name) {
        Some(value) => {
            *result = value;
            true
        }
        None => false,
    }
}

fn set_property(handle: &BridgeHandle, name: Identifier, value: &HostValue) -> bool {
    ScriptObject::set_property(&**handle, name, value)
}

fn remove_property(handle: &BridgeHandle, name: Identifier) -> bool {
    ScriptObject::remove_property(&**handle, name)
}

fn enumerate(handle: &BridgeHandle, names: &mut Vec<Identifier>) -> bool {
    match ScriptObject::enumerate(&**handle) {
        Some(list) => {
            *names = list;
            true
        }
        None => false,
    }
}

fn construct(handle: &BridgeHandle, args: &[HostValue], result: &mut HostValue) -> bool {
    match ScriptObject::construct(&**handle, args) {
        Some(value) => {
            *result = value;
            true
        }
        None => false,
    }
}
