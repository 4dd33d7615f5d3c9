//! # Script Object Bridge
//!
//! This library exposes native capability objects to an embedding host's
//! scripting engine. The host drives a fixed, positional table of entry
//! points; each call is translated into the wrapped object's capability
//! surface, with values marshalled through the host's per-session link in
//! both directions.
//!
//! ## Architecture
//!
//! ```text
//! Host scripting engine
//!     │
//!     │ entry-point table (positional)
//!     ▼
//! ScriptObjectBridge (this crate)
//!     │
//!     │ variant marshalling
//!     ▼
//! Native capability object
//! ```
//!
//! ## Guarantees
//!
//! - **Faithful marshalling**: argument order and count are preserved
//!   exactly across the boundary
//! - **Contained failures**: scripting errors become host-visible exceptions
//!   plus a failure return, never a native fault
//! - **Paired lifetime**: the bridge attaches to its native object at bind
//!   time and detaches exactly once at teardown
//! - **Safe invalidation**: once invalidated, no dispatch touches the native
//!   object, while the bridge itself stays allocated until the host releases
//!   its last handle

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bridge;
pub mod capability;
pub mod config;
pub mod error;
pub mod host;
pub mod metrics;
pub mod protocol;
pub mod session;
pub mod variant;

// Re-export commonly used types
pub use bridge::ScriptObjectBridge;
pub use capability::{EventSink, ScriptableApi, SinkId, SinkRegistry};
pub use config::BridgeConfig;
pub use error::{DispatchError, ScriptError, ScriptResult};
pub use host::{HostLink, HostValue, Identifier, InstanceId};
pub use metrics::{DispatchCounters, DispatchStats};
pub use protocol::{create_object, BridgeHandle, ObjectClass, ScriptObject, BRIDGE_CLASS};
pub use session::{BridgeSession, SessionError, SessionStats};
pub use variant::Variant;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the process-wide tracing subscriber.
///
/// Reads the filter from the environment; safe to call more than once (only
/// the first call installs).
pub fn init_tracing() {
    static INSTALLED: once_cell::sync::OnceCell<()> = once_cell::sync::OnceCell::new();
    INSTALLED.get_or_init(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::from_default_env()
                    .add_directive("script_object_bridge=debug".parse().unwrap()),
            )
            .init();
    });
}
