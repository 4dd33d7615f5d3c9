//! Native capability surface wrapped by the bridge.
//!
//! A [`ScriptableApi`] is the native object exposing methods, properties and
//! events to script. The bridge wraps exactly one of these per host-visible
//! handle and registers itself as an [`EventSink`] so native-initiated
//! callbacks can flow back to the scripting engine.

use crate::error::ScriptResult;
use crate::variant::Variant;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Weak};

/// Registration token returned by [`ScriptableApi::attach_sink`].
///
/// Tokens are opaque; each one is detached at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SinkId(u64);

impl SinkId {
    /// Wrap a raw registration token.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw registration token.
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Receiver for native-initiated events.
///
/// The bridge implements this trait and registers itself with the wrapped
/// object at bind time, mirroring its own lifetime: attached when bound,
/// detached when the host releases the last handle.
pub trait EventSink {
    /// Called by the native object when it raises `name` with `args`.
    fn event_raised(&self, name: &str, args: &[Variant]);
}

/// A native capability object exposing methods, properties and events to
/// script.
///
/// Implementations are shared with the rest of the native system; the bridge
/// never assumes exclusive mutation rights, so every operation takes `&self`.
/// Failures are reported as [`ScriptError`](crate::error::ScriptError)
/// results and surface to script as exceptions where the dispatch policy
/// calls for one.
pub trait ScriptableApi {
    /// Whether the object exposes a method named `name`.
    fn has_method(&self, name: &str) -> bool;

    /// Invoke `name` with `args`.
    ///
    /// An empty `name` invokes the object itself (the default call).
    fn invoke(&self, name: &str, args: Vec<Variant>) -> ScriptResult<Variant>;

    /// Whether the object exposes a property named `name`.
    fn has_property(&self, name: &str) -> bool;

    /// Whether the object exposes an event handler slot named `name`.
    fn has_event(&self, _name: &str) -> bool {
        false
    }

    /// Read the property named `name`.
    fn get_property(&self, name: &str) -> ScriptResult<Variant>;

    /// Write `value` to the property named `name`.
    fn set_property(&self, name: &str, value: Variant) -> ScriptResult<()>;

    /// Notice that the scripting context is going away; release any
    /// host-side resources held by the object.
    fn invalidate(&self) {}

    /// Register an event sink. Sinks are held weakly; a dead sink is skipped
    /// at fire time.
    fn attach_sink(&self, _sink: Weak<dyn EventSink>) -> SinkId {
        SinkId::from_raw(0)
    }

    /// Remove a previously attached sink.
    fn detach_sink(&self, _sink: SinkId) {}
}

/// Reusable event-sink bookkeeping for capability objects.
///
/// Objects that raise events embed one of these and delegate
/// `attach_sink`/`detach_sink` to it; `fire` delivers an event to every live
/// sink.
pub struct SinkRegistry {
    next: AtomicU64,
    sinks: Mutex<HashMap<SinkId, Weak<dyn EventSink>>>,
}

impl SinkRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            sinks: Mutex::new(HashMap::new()),
        }
    }

    /// Register a sink, returning its detach token.
    pub fn attach(&self, sink: Weak<dyn EventSink>) -> SinkId {
        let id = SinkId::from_raw(self.next.fetch_add(1, Ordering::Relaxed));
        self.sinks.lock().insert(id, sink);
        id
    }

    /// Remove a sink. Returns whether the token was still registered.
    pub fn detach(&self, id: SinkId) -> bool {
        self.sinks.lock().remove(&id).is_some()
    }

    /// Deliver `name`/`args` to every live sink, pruning dead ones.
    ///
    /// The lock is not held across sink callbacks; sinks may re-enter the
    /// registry (or the object embedding it).
    pub fn fire(&self, name: &str, args: &[Variant]) {
        let live: Vec<Arc<dyn EventSink>> = {
            let mut sinks = self.sinks.lock();
            sinks.retain(|_, weak| weak.upgrade().is_some());
            sinks.values().filter_map(Weak::upgrade).collect()
        };
        for sink in live {
            sink.event_raised(name, args);
        }
    }

    /// Number of registered sinks, counting dead ones not yet pruned.
    pub fn len(&self) -> usize {
        self.sinks.lock().len()
    }

    /// Whether no sinks are registered.
    pub fn is_empty(&self) -> bool {
        self.sinks.lock().is_empty()
    }
}

impl Default for SinkRegistry {
    fn default() -> Self {
        Self::new()
    }
}
