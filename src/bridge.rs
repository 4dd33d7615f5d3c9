//! The scripting bridge object.
//!
//! One [`ScriptObjectBridge`] wraps exactly one native capability object and
//! services the host's generic-object protocol for it: method invocation,
//! property access, the reserved stubs, invalidation and teardown. Values
//! cross the boundary through the session's [`HostLink`] marshaller in both
//! directions.
//!
//! Lifecycle: the host allocates the bridge through its object allocator
//! (which carries no native-side parameters), then [`ScriptObjectBridge::bind`]
//! attaches it to the native object before the handle is exposed to script.
//! The host's reference count reaching zero drops the bridge, which detaches
//! from the native object exactly once, even when invalidation happened
//! first.

use crate::capability::{EventSink, ScriptableApi, SinkId};
use crate::error::{DispatchError, DispatchResult};
use crate::host::{HostLink, HostValue, Identifier, InstanceId};
use crate::metrics::DispatchCounters;
use crate::protocol::ScriptObject;
use crate::variant::Variant;
use parking_lot::Mutex;
use std::sync::{Arc, Weak};
use tracing::{debug, trace};

/// Everything needed to forward a call to the native side.
struct Binding {
    api: Arc<dyn ScriptableApi>,
    host: Arc<dyn HostLink>,
    sink: SinkId,
}

/// Mutable bridge state behind a single short-lived lock.
///
/// The lock is never held across a native call: native code may re-enter the
/// bridge (an event fired mid-invoke dispatches back through here).
struct BridgeState {
    binding: Option<Binding>,
    valid: bool,
}

/// Bridge between one native capability object and one host-visible
/// scripting handle.
pub struct ScriptObjectBridge {
    id: InstanceId,
    state: Mutex<BridgeState>,
    counters: DispatchCounters,
}

impl ScriptObjectBridge {
    /// Create an unbound bridge.
    ///
    /// Until [`bind`](Self::bind) runs, every dispatch reports "not found" /
    /// failure. Allocation and binding are separate steps because the host's
    /// allocation entry point cannot carry native-side parameters.
    pub fn new() -> Self {
        Self {
            id: InstanceId::fresh(),
            state: Mutex::new(BridgeState {
                binding: None,
                valid: true,
            }),
            counters: DispatchCounters::new(),
        }
    }

    /// This bridge's identity, used by the host to attribute exceptions and
    /// events.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Dispatch counters for this bridge.
    pub fn counters(&self) -> &DispatchCounters {
        &self.counters
    }

    /// Whether the bridge may still forward calls to the native object.
    pub fn is_valid(&self) -> bool {
        self.state.lock().valid
    }

    /// Whether the bridge is bound to a native object.
    pub fn is_bound(&self) -> bool {
        self.state.lock().binding.is_some()
    }

    /// Bind the bridge to its native object and host link.
    ///
    /// Registers the bridge as an event sink on the native object. Must run
    /// before the handle is exposed to scripting code. Rebinding detaches
    /// the superseded registration, so attach/detach stays paired per
    /// registration.
    pub fn bind(this: &Arc<Self>, api: Arc<dyn ScriptableApi>, host: Arc<dyn HostLink>) {
        let sink_arc: Arc<dyn EventSink> = this.clone();
        let sink_ref: Weak<dyn EventSink> = Arc::downgrade(&sink_arc);
        let sink = api.attach_sink(sink_ref);

        let previous = {
            let mut state = this.state.lock();
            let previous = state.binding.take();
            state.binding = Some(Binding { api, host, sink });
            previous
        };
        if let Some(previous) = previous {
            previous.api.detach_sink(previous.sink);
        }
        debug!(id = %this.id, "bridge bound to native object");
    }

    /// Resolve the forwarding target, cloning the references out of the lock
    /// so no lock is held across the native call.
    fn target(&self) -> DispatchResult<(Arc<dyn ScriptableApi>, Arc<dyn HostLink>)> {
        let state = self.state.lock();
        if !state.valid {
            return Err(DispatchError::Invalidated);
        }
        match &state.binding {
            Some(binding) => Ok((Arc::clone(&binding.api), Arc::clone(&binding.host))),
            None => Err(DispatchError::Unbound),
        }
    }

    /// Signal a host-visible exception attributed to this bridge.
    fn signal(&self, message: &str) {
        let host = {
            let state = self.state.lock();
            state.binding.as_ref().map(|b| Arc::clone(&b.host))
        };
        if let Some(host) = host {
            host.signal_exception(self.id, message);
            self.counters.record_exception();
        }
    }

    fn try_invoke(&self, name: Identifier, args: &[HostValue]) -> DispatchResult<HostValue> {
        let (api, host) = self.target()?;
        let name = host
            .string_for_identifier(name)
            .ok_or(DispatchError::UnknownIdentifier)?;
        let converted: Vec<Variant> = args.iter().map(|a| host.to_variant(a)).collect();
        let result = api.invoke(&name, converted)?;
        Ok(host.from_variant(&result))
    }

    fn try_get_property(&self, name: Identifier) -> DispatchResult<HostValue> {
        let (api, host) = self.target()?;
        let name = host
            .string_for_identifier(name)
            .ok_or(DispatchError::UnknownIdentifier)?;
        let value = api.get_property(&name)?;
        Ok(host.from_variant(&value))
    }

    fn try_set_property(&self, name: Identifier, value: &HostValue) -> DispatchResult<()> {
        let (api, host) = self.target()?;
        let name = host
            .string_for_identifier(name)
            .ok_or(DispatchError::UnknownIdentifier)?;
        let converted = host.to_variant(value);
        api.set_property(&name, converted)?;
        Ok(())
    }
}

impl Default for ScriptObjectBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptObject for ScriptObjectBridge {
    fn invalidate(&self) {
        let api = {
            let mut state = self.state.lock();
            if !state.valid {
                // One-way transition; the notice is forwarded once.
                return;
            }
            state.valid = false;
            state.binding.as_ref().map(|b| Arc::clone(&b.api))
        };
        debug!(id = %self.id, "bridge invalidated");
        if let Some(api) = api {
            api.invalidate();
        }
    }

    fn has_method(&self, name: Identifier) -> bool {
        let Ok((api, host)) = self.target() else {
            return false;
        };
        match host.string_for_identifier(name) {
            Some(name) => api.has_method(&name),
            None => false,
        }
    }

    fn invoke(&self, name: Identifier, args: &[HostValue]) -> Option<HostValue> {
        self.counters.record_invocation();
        match self.try_invoke(name, args) {
            Ok(value) => Some(value),
            Err(DispatchError::Script(err)) => {
                self.counters.record_invocation_failure();
                self.signal(&err.message);
                None
            }
            Err(err) => {
                self.counters.record_invocation_failure();
                trace!(id = %self.id, %err, "invoke not dispatched");
                None
            }
        }
    }

    fn invoke_default(&self, args: &[HostValue]) -> Option<HostValue> {
        // A default call is an invocation of the empty name.
        let Ok((_, host)) = self.target() else {
            return None;
        };
        let name = host.identifier_for_string("");
        ScriptObject::invoke(self, name, args)
    }

    fn has_property(&self, name: Identifier) -> bool {
        let Ok((api, host)) = self.target() else {
            return false;
        };
        let Some(name) = host.string_for_identifier(name) else {
            return false;
        };
        // Event handler slots answer the property query too, so script can
        // assign `obj.onchange = fn` as an ordinary property write.
        api.has_event(&name) || api.has_property(&name)
    }

    fn get_property(&self, name: Identifier) -> Option<HostValue> {
        self.counters.record_property_read();
        match self.try_get_property(name) {
            Ok(value) => Some(value),
            Err(err) => {
                // A failed read surfaces to script as "no such value", not
                // as an exception; only invocations and writes raise.
                self.counters.record_property_read_failure();
                trace!(id = %self.id, %err, "property read failed");
                None
            }
        }
    }

    fn set_property(&self, name: Identifier, value: &HostValue) -> bool {
        self.counters.record_property_write();
        match self.try_set_property(name, value) {
            Ok(()) => true,
            Err(DispatchError::Script(err)) => {
                self.counters.record_property_write_failure();
                self.signal(&err.message);
                false
            }
            Err(err) => {
                self.counters.record_property_write_failure();
                trace!(id = %self.id, %err, "property write not dispatched");
                false
            }
        }
    }

    fn remove_property(&self, _name: Identifier) -> bool {
        // TODO: forward removal once the capability surface exposes it.
        self.counters.record_unsupported();
        false
    }

    fn enumerate(&self) -> Option<Vec<Identifier>> {
        self.counters.record_unsupported();
        None
    }

    fn construct(&self, _args: &[HostValue]) -> Option<HostValue> {
        self.counters.record_unsupported();
        None
    }
}

impl EventSink for ScriptObjectBridge {
    fn event_raised(&self, name: &str, args: &[Variant]) {
        // Events raised after invalidation have nowhere to go; drop them.
        let Ok((_, host)) = self.target() else {
            return;
        };
        let converted: Vec<HostValue> = args.iter().map(|v| host.from_variant(v)).collect();
        host.deliver_event(self.id, name, &converted);
        self.counters.record_event_forwarded();
    }
}

impl Drop for ScriptObjectBridge {
    fn drop(&mut self) {
        // Detach pairs with the bind-time attach exactly once, even when
        // invalidation happened first. Shared ownership keeps the native
        // object alive to receive it.
        if let Some(binding) = self.state.get_mut().binding.take() {
            binding.api.detach_sink(binding.sink);
            trace!(id = %self.id, "bridge detached from native object");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::SinkRegistry;
    use crate::error::{ScriptError, ScriptResult};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Native stub recording every forwarded call.
    struct RecordingApi {
        sinks: SinkRegistry,
        attaches: AtomicUsize,
        detaches: AtomicUsize,
        invalidations: AtomicUsize,
        touches: AtomicUsize,
        calls: Mutex<Vec<(String, Vec<Variant>)>>,
        properties: Mutex<HashMap<String, Variant>>,
    }

    impl RecordingApi {
        fn new() -> Arc<Self> {
            let mut properties = HashMap::new();
            properties.insert("volume".to_string(), Variant::Number(11.0));
            Arc::new(Self {
                sinks: SinkRegistry::new(),
                attaches: AtomicUsize::new(0),
                detaches: AtomicUsize::new(0),
                invalidations: AtomicUsize::new(0),
                touches: AtomicUsize::new(0),
                calls: Mutex::new(Vec::new()),
                properties: Mutex::new(properties),
            })
        }

        fn fire(&self, name: &str, args: &[Variant]) {
            self.sinks.fire(name, args);
        }

        fn touches(&self) -> usize {
            self.touches.load(Ordering::SeqCst)
        }
    }

    impl ScriptableApi for RecordingApi {
        fn has_method(&self, name: &str) -> bool {
            self.touches.fetch_add(1, Ordering::SeqCst);
            matches!(name, "echo" | "boom" | "")
        }

        fn invoke(&self, name: &str, args: Vec<Variant>) -> ScriptResult<Variant> {
            self.touches.fetch_add(1, Ordering::SeqCst);
            self.calls.lock().push((name.to_string(), args.clone()));
            match name {
                "echo" => Ok(Variant::Array(args)),
                "boom" => Err(ScriptError::new("kaboom")),
                "" => Ok(Variant::String("default".into())),
                other => Err(ScriptError::no_such_method(other)),
            }
        }

        fn has_property(&self, name: &str) -> bool {
            self.touches.fetch_add(1, Ordering::SeqCst);
            self.properties.lock().contains_key(name)
        }

        fn has_event(&self, name: &str) -> bool {
            self.touches.fetch_add(1, Ordering::SeqCst);
            name == "onchange"
        }

        fn get_property(&self, name: &str) -> ScriptResult<Variant> {
            self.touches.fetch_add(1, Ordering::SeqCst);
            self.properties
                .lock()
                .get(name)
                .cloned()
                .ok_or_else(|| ScriptError::no_such_property(name))
        }

        fn set_property(&self, name: &str, value: Variant) -> ScriptResult<()> {
            self.touches.fetch_add(1, Ordering::SeqCst);
            if name == "readonly" {
                return Err(ScriptError::new("bad value"));
            }
            self.properties.lock().insert(name.to_string(), value);
            Ok(())
        }

        fn invalidate(&self) {
            self.invalidations.fetch_add(1, Ordering::SeqCst);
        }

        fn attach_sink(&self, sink: Weak<dyn EventSink>) -> SinkId {
            self.attaches.fetch_add(1, Ordering::SeqCst);
            self.sinks.attach(sink)
        }

        fn detach_sink(&self, sink: SinkId) {
            self.detaches.fetch_add(1, Ordering::SeqCst);
            self.sinks.detach(sink);
        }
    }

    /// Host stub: interning table plus recorded exceptions and events.
    struct StubHost {
        idents: Mutex<Vec<String>>,
        exceptions: Mutex<Vec<(InstanceId, String)>>,
        events: Mutex<Vec<(InstanceId, String, Vec<HostValue>)>>,
    }

    impl StubHost {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                idents: Mutex::new(Vec::new()),
                exceptions: Mutex::new(Vec::new()),
                events: Mutex::new(Vec::new()),
            })
        }

        fn exception_messages(&self) -> Vec<String> {
            self.exceptions.lock().iter().map(|(_, m)| m.clone()).collect()
        }
    }

    impl HostLink for StubHost {
        fn string_for_identifier(&self, ident: Identifier) -> Option<String> {
            self.idents.lock().get(ident.raw() as usize).cloned()
        }

        fn identifier_for_string(&self, name: &str) -> Identifier {
            let mut idents = self.idents.lock();
            if let Some(pos) = idents.iter().position(|s| s == name) {
                Identifier::from_raw(pos as u64)
            } else {
                idents.push(name.to_string());
                Identifier::from_raw((idents.len() - 1) as u64)
            }
        }

        fn to_variant(&self, value: &HostValue) -> Variant {
            match value {
                HostValue::Void | HostValue::Null => Variant::Null,
                HostValue::Bool(b) => Variant::Bool(*b),
                HostValue::Int(n) => Variant::Number(*n as f64),
                HostValue::Double(n) => Variant::Number(*n),
                HostValue::Str(s) => Variant::String(s.clone()),
                HostValue::ObjectRef(id) => Variant::Number(*id as f64),
            }
        }

        fn from_variant(&self, variant: &Variant) -> HostValue {
            match variant {
                Variant::Null => HostValue::Null,
                Variant::Bool(b) => HostValue::Bool(*b),
                Variant::Number(n) => HostValue::Double(*n),
                Variant::String(s) => HostValue::Str(s.clone()),
                other => HostValue::Str(serde_json::to_string(other).unwrap_or_default()),
            }
        }

        fn signal_exception(&self, source: InstanceId, message: &str) {
            self.exceptions.lock().push((source, message.to_string()));
        }

        fn deliver_event(&self, source: InstanceId, name: &str, args: &[HostValue]) {
            self.events.lock().push((source, name.to_string(), args.to_vec()));
        }
    }

    /// An identifier token the interning table never handed out.
    const OPAQUE_IDENT: Identifier = Identifier::from_raw(u64::MAX);

    fn bound_bridge() -> (Arc<ScriptObjectBridge>, Arc<RecordingApi>, Arc<StubHost>) {
        let api = RecordingApi::new();
        let host = StubHost::new();
        let bridge = Arc::new(ScriptObjectBridge::new());
        ScriptObjectBridge::bind(&bridge, api.clone(), host.clone());
        (bridge, api, host)
    }

    #[test]
    fn test_invoke_preserves_argument_order_and_count() {
        let (bridge, api, host) = bound_bridge();
        let name = host.identifier_for_string("echo");
        let args = [
            HostValue::Int(1),
            HostValue::Str("two".into()),
            HostValue::Bool(true),
        ];

        let result = bridge.invoke(name, &args);

        let calls = api.calls.lock();
        assert_eq!(calls.len(), 1);
        let (called, forwarded) = &calls[0];
        assert_eq!(called, "echo");
        assert_eq!(
            forwarded,
            &vec![
                Variant::Number(1.0),
                Variant::String("two".into()),
                Variant::Bool(true),
            ]
        );

        // The converted-back result is exactly from_variant(native result).
        let expected = host.from_variant(&Variant::Array(forwarded.clone()));
        assert_eq!(result, Some(expected));
    }

    #[test]
    fn test_unknown_method_is_distinct_from_throwing_method() {
        let (bridge, _api, host) = bound_bridge();

        // Known not to exist: the existence query answers without raising.
        assert!(!bridge.has_method(host.identifier_for_string("missing")));
        assert!(host.exception_messages().is_empty());

        // Exists but throws: invoke fails and raises.
        assert!(bridge.has_method(host.identifier_for_string("boom")));
        let result = bridge.invoke(host.identifier_for_string("boom"), &[]);
        assert_eq!(result, None);
        assert_eq!(host.exception_messages(), vec!["kaboom".to_string()]);
    }

    #[test]
    fn test_invoke_error_signals_exactly_one_exception() {
        let (bridge, _api, host) = bound_bridge();
        let result = bridge.invoke(host.identifier_for_string("boom"), &[HostValue::Int(3)]);
        assert_eq!(result, None);

        let exceptions = host.exceptions.lock();
        assert_eq!(exceptions.len(), 1);
        assert_eq!(exceptions[0].0, bridge.id());
        assert_eq!(exceptions[0].1, "kaboom");
    }

    #[test]
    fn test_invoke_default_matches_empty_name_invoke() {
        let (bridge, api, host) = bound_bridge();
        let args = [HostValue::Int(5)];

        let by_default = bridge.invoke_default(&args);
        let by_name = bridge.invoke(host.identifier_for_string(""), &args);
        assert_eq!(by_default, by_name);
        assert_eq!(by_default, Some(HostValue::Str("default".into())));

        let calls = api.calls.lock();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], calls[1]);
        assert_eq!(calls[0].0, "");
    }

    #[test]
    fn test_has_property_includes_event_slots() {
        let (bridge, _api, host) = bound_bridge();
        // Event handler slot only, no property of that name.
        assert!(bridge.has_property(host.identifier_for_string("onchange")));
        // Plain property.
        assert!(bridge.has_property(host.identifier_for_string("volume")));
        // Neither.
        assert!(!bridge.has_property(host.identifier_for_string("missing")));
    }

    #[test]
    fn test_get_property_converts_result() {
        let (bridge, _api, host) = bound_bridge();
        let value = bridge.get_property(host.identifier_for_string("volume"));
        assert_eq!(value, Some(HostValue::Double(11.0)));
    }

    #[test]
    fn test_get_property_failure_is_silent() {
        let (bridge, _api, host) = bound_bridge();
        let value = bridge.get_property(host.identifier_for_string("missing"));
        assert_eq!(value, None);
        assert!(host.exception_messages().is_empty());
        assert_eq!(bridge.counters().snapshot().property_read_failures, 1);
    }

    #[test]
    fn test_set_property_success() {
        let (bridge, api, host) = bound_bridge();
        let ok = bridge.set_property(
            host.identifier_for_string("volume"),
            &HostValue::Str("loud".into()),
        );
        assert!(ok);
        assert_eq!(
            api.properties.lock().get("volume"),
            Some(&Variant::String("loud".into()))
        );
        assert!(host.exception_messages().is_empty());
    }

    #[test]
    fn test_set_property_error_signals_bad_value() {
        let (bridge, _api, host) = bound_bridge();
        let ok = bridge.set_property(host.identifier_for_string("readonly"), &HostValue::Int(1));
        assert!(!ok);
        assert_eq!(host.exception_messages(), vec!["bad value".to_string()]);
    }

    #[test]
    fn test_reserved_operations_report_unsupported_without_exceptions() {
        let (bridge, _api, host) = bound_bridge();
        assert!(!bridge.remove_property(host.identifier_for_string("volume")));
        assert_eq!(bridge.enumerate(), None);
        assert_eq!(bridge.construct(&[HostValue::Int(1)]), None);
        assert!(host.exception_messages().is_empty());
        assert_eq!(bridge.counters().snapshot().unsupported_calls, 3);
    }

    #[test]
    fn test_invalidate_forwards_notice_once() {
        let (bridge, api, _host) = bound_bridge();
        bridge.invalidate();
        assert_eq!(api.invalidations.load(Ordering::SeqCst), 1);
        assert!(!bridge.is_valid());

        bridge.invalidate();
        assert_eq!(api.invalidations.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_no_native_calls_after_invalidate() {
        let (bridge, api, host) = bound_bridge();
        let method = host.identifier_for_string("echo");
        let property = host.identifier_for_string("volume");
        bridge.invalidate();
        let touches = api.touches();

        assert!(!bridge.has_method(method));
        assert_eq!(bridge.invoke(method, &[HostValue::Int(1)]), None);
        assert_eq!(bridge.invoke_default(&[]), None);
        assert!(!bridge.has_property(property));
        assert_eq!(bridge.get_property(property), None);
        assert!(!bridge.set_property(property, &HostValue::Int(2)));

        assert_eq!(api.touches(), touches);
        assert!(host.exception_messages().is_empty());
    }

    #[test]
    fn test_attach_and_detach_paired_exactly_once() {
        let (bridge, api, _host) = bound_bridge();
        assert_eq!(api.attaches.load(Ordering::SeqCst), 1);
        assert_eq!(api.detaches.load(Ordering::SeqCst), 0);

        bridge.invalidate();
        // Invalidation is not destruction; the registration stays.
        assert_eq!(api.detaches.load(Ordering::SeqCst), 0);

        drop(bridge);
        assert_eq!(api.attaches.load(Ordering::SeqCst), 1);
        assert_eq!(api.detaches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_detach_waits_for_last_reference() {
        let (bridge, api, _host) = bound_bridge();
        let second = Arc::clone(&bridge);

        drop(bridge);
        assert_eq!(api.detaches.load(Ordering::SeqCst), 0);

        drop(second);
        assert_eq!(api.detaches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_rebind_detaches_previous_registration() {
        let (bridge, first, host) = bound_bridge();
        let second = RecordingApi::new();
        ScriptObjectBridge::bind(&bridge, second.clone(), host);

        assert_eq!(first.detaches.load(Ordering::SeqCst), 1);
        assert_eq!(second.attaches.load(Ordering::SeqCst), 1);

        drop(bridge);
        assert_eq!(first.detaches.load(Ordering::SeqCst), 1);
        assert_eq!(second.detaches.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_unbound_dispatch_reports_not_found() {
        let host = StubHost::new();
        let bridge = Arc::new(ScriptObjectBridge::new());
        let name = host.identifier_for_string("echo");

        assert!(!bridge.is_bound());
        assert!(!bridge.has_method(name));
        assert!(!bridge.has_property(name));
        assert_eq!(bridge.invoke(name, &[]), None);
        assert_eq!(bridge.invoke_default(&[]), None);
        assert_eq!(bridge.get_property(name), None);
        assert!(!bridge.set_property(name, &HostValue::Null));
        assert!(host.exception_messages().is_empty());
    }

    #[test]
    fn test_unresolvable_identifier_names_nothing() {
        let (bridge, api, host) = bound_bridge();
        let touches = api.touches();

        assert!(!bridge.has_method(OPAQUE_IDENT));
        assert!(!bridge.has_property(OPAQUE_IDENT));
        assert_eq!(bridge.invoke(OPAQUE_IDENT, &[]), None);
        assert_eq!(bridge.get_property(OPAQUE_IDENT), None);
        assert!(!bridge.set_property(OPAQUE_IDENT, &HostValue::Null));

        assert_eq!(api.touches(), touches);
        assert!(host.exception_messages().is_empty());
    }

    #[test]
    fn test_native_events_forward_through_host_link() {
        let (bridge, api, host) = bound_bridge();
        api.fire("tick", &[Variant::Number(1.0), Variant::String("x".into())]);

        let events = host.events.lock();
        assert_eq!(events.len(), 1);
        let (source, name, args) = &events[0];
        assert_eq!(*source, bridge.id());
        assert_eq!(name, "tick");
        assert_eq!(
            args,
            &vec![HostValue::Double(1.0), HostValue::Str("x".into())]
        );
    }

    #[test]
    fn test_events_after_invalidate_are_dropped() {
        let (bridge, api, host) = bound_bridge();
        bridge.invalidate();
        api.fire("tick", &[]);
        assert!(host.events.lock().is_empty());
        assert_eq!(bridge.counters().snapshot().events_forwarded, 0);
    }

    #[test]
    fn test_counters_track_dispatch() {
        let (bridge, _api, host) = bound_bridge();
        bridge.invoke(host.identifier_for_string("echo"), &[]);
        bridge.invoke(host.identifier_for_string("boom"), &[]);
        bridge.get_property(host.identifier_for_string("volume"));
        bridge.set_property(host.identifier_for_string("volume"), &HostValue::Int(1));

        let stats = bridge.counters().snapshot();
        assert_eq!(stats.invocations, 2);
        assert_eq!(stats.invocation_failures, 1);
        assert_eq!(stats.exceptions_signaled, 1);
        assert_eq!(stats.property_reads, 1);
        assert_eq!(stats.property_writes, 1);
    }
}
