//! Per-session bookkeeping for live bridge objects.
//!
//! A [`BridgeSession`] owns the host link and configuration, creates bound
//! bridge objects, and tracks them weakly so a scripting-context teardown
//! can invalidate every live object in one sweep. Tracking is weak: the
//! host's handle reference count still decides when an object is torn down.

use crate::bridge::ScriptObjectBridge;
use crate::capability::ScriptableApi;
use crate::config::{BridgeConfig, ConfigError};
use crate::host::{HostLink, InstanceId};
use crate::metrics::DispatchStats;
use crate::protocol::{create_object, BridgeHandle, ScriptObject, BRIDGE_CLASS};
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Weak};
use tracing::{debug, info};

/// Session error types
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Creating another object would exceed the configured ceiling
    #[error("live object limit reached ({0})")]
    ObjectLimit(usize),

    /// The session configuration failed validation
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Aggregated statistics for a session.
///
/// Dispatch totals cover live objects only; counters leave the aggregate
/// when their bridge is deallocated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    /// Number of live bridge objects
    pub live_objects: usize,
    /// Dispatch totals across live objects
    pub dispatch: DispatchStats,
}

/// Tracks every live bridge created for one host session.
pub struct BridgeSession {
    host: Arc<dyn HostLink>,
    config: BridgeConfig,
    live: DashMap<InstanceId, Weak<ScriptObjectBridge>>,
}

impl BridgeSession {
    /// Create a session over `host` with the given configuration.
    pub fn new(host: Arc<dyn HostLink>, config: BridgeConfig) -> Result<Self, SessionError> {
        config.validate()?;
        info!(
            max_live_objects = config.max_live_objects,
            "bridge session started"
        );
        Ok(Self {
            host,
            config,
            live: DashMap::new(),
        })
    }

    /// The session's host link.
    pub fn host(&self) -> &Arc<dyn HostLink> {
        &self.host
    }

    /// The session configuration.
    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Create a bound bridge object for `api` and track it.
    ///
    /// The returned handle is ready to hand to scripting code.
    pub fn create_object(&self, api: Arc<dyn ScriptableApi>) -> Result<BridgeHandle, SessionError> {
        self.prune();
        if self.live.len() >= self.config.max_live_objects {
            return Err(SessionError::ObjectLimit(self.config.max_live_objects));
        }

        let handle = create_object(&BRIDGE_CLASS, api, Arc::clone(&self.host));
        self.live.insert(handle.id(), Arc::downgrade(handle.instance()));
        if self.config.debug {
            debug!(id = %handle.id(), live = self.live.len(), "bridge object created");
        }
        Ok(handle)
    }

    /// Number of live bridge objects.
    pub fn live_count(&self) -> usize {
        self.prune();
        self.live.len()
    }

    /// Invalidate every live object; the scripting context is going away.
    ///
    /// Objects stay allocated (the host still holds handles) but stop
    /// forwarding to native code.
    pub fn invalidate_all(&self) {
        info!(
            live = self.live.len(),
            "invalidating scripting objects for session teardown"
        );
        for entry in self.live.iter() {
            if let Some(bridge) = entry.value().upgrade() {
                ScriptObject::invalidate(&*bridge);
            }
        }
        self.live.clear();
    }

    /// Aggregate dispatch statistics over live objects.
    pub fn stats(&self) -> SessionStats {
        let mut stats = SessionStats::default();
        for entry in self.live.iter() {
            if let Some(bridge) = entry.value().upgrade() {
                stats.live_objects += 1;
                stats.dispatch.accumulate(&bridge.counters().snapshot());
            }
        }
        stats
    }

    fn prune(&self) {
        self.live.retain(|_, weak| weak.upgrade().is_some());
    }
}
