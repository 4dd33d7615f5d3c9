//! Dispatch counters for observability.
//!
//! Every bridge carries a set of counters covering its dispatch surface;
//! a session aggregates them over its live objects. Counters are
//! observability only; no dispatch behavior depends on them.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Atomic counters recorded while dispatching host calls.
#[derive(Debug, Default)]
pub struct DispatchCounters {
    invocations: AtomicU64,
    invocation_failures: AtomicU64,
    property_reads: AtomicU64,
    property_read_failures: AtomicU64,
    property_writes: AtomicU64,
    property_write_failures: AtomicU64,
    exceptions_signaled: AtomicU64,
    events_forwarded: AtomicU64,
    unsupported_calls: AtomicU64,
}

impl DispatchCounters {
    /// Create a zeroed counter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a method invocation attempt.
    pub fn record_invocation(&self) {
        self.invocations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed method invocation.
    pub fn record_invocation_failure(&self) {
        self.invocation_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a property read attempt.
    pub fn record_property_read(&self) {
        self.property_reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed property read.
    pub fn record_property_read_failure(&self) {
        self.property_read_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a property write attempt.
    pub fn record_property_write(&self) {
        self.property_writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed property write.
    pub fn record_property_write_failure(&self) {
        self.property_write_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one exception signaled to the host.
    pub fn record_exception(&self) {
        self.exceptions_signaled.fetch_add(1, Ordering::Relaxed);
    }

    /// Record one native event forwarded to the host.
    pub fn record_event_forwarded(&self) {
        self.events_forwarded.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a call to an unsupported operation.
    pub fn record_unsupported(&self) {
        self.unsupported_calls.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time snapshot of the counters.
    pub fn snapshot(&self) -> DispatchStats {
        DispatchStats {
            invocations: self.invocations.load(Ordering::Relaxed),
            invocation_failures: self.invocation_failures.load(Ordering::Relaxed),
            property_reads: self.property_reads.load(Ordering::Relaxed),
            property_read_failures: self.property_read_failures.load(Ordering::Relaxed),
            property_writes: self.property_writes.load(Ordering::Relaxed),
            property_write_failures: self.property_write_failures.load(Ordering::Relaxed),
            exceptions_signaled: self.exceptions_signaled.load(Ordering::Relaxed),
            events_forwarded: self.events_forwarded.load(Ordering::Relaxed),
            unsupported_calls: self.unsupported_calls.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time dispatch statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchStats {
    /// Method invocation attempts
    pub invocations: u64,
    /// Failed method invocations
    pub invocation_failures: u64,
    /// Property read attempts
    pub property_reads: u64,
    /// Failed property reads
    pub property_read_failures: u64,
    /// Property write attempts
    pub property_writes: u64,
    /// Failed property writes
    pub property_write_failures: u64,
    /// Exceptions signaled to the host
    pub exceptions_signaled: u64,
    /// Native events forwarded to the host
    pub events_forwarded: u64,
    /// Calls to unsupported operations
    pub unsupported_calls: u64,
}

impl DispatchStats {
    /// Fold another snapshot into this one.
    pub fn accumulate(&mut self, other: &DispatchStats) {
        self.invocations += other.invocations;
        self.invocation_failures += other.invocation_failures;
        self.property_reads += other.property_reads;
        self.property_read_failures += other.property_read_failures;
        self.property_writes += other.property_writes;
        self.property_write_failures += other.property_write_failures;
        self.exceptions_signaled += other.exceptions_signaled;
        self.events_forwarded += other.events_forwarded;
        self.unsupported_calls += other.unsupported_calls;
    }
}
