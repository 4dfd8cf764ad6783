//! Reporter session: notification-id assignment and persisted state.
//!
//! The session is the explicit context object owning what would
//! otherwise be process-wide mutable state: the notification-id
//! counter and the configurable default state. Hosts create one
//! session per plugin load; tests create a fresh one per case, which
//! gives the reset-between-sessions semantics without hidden globals.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crashmon_core::prelude::*;
use crashmon_core::{parse_crash_log, PersistedState};

use crate::device::Device;

/// Key segment used when neither a selected app nor a device is known
const UNKNOWN_OWNER: &str = "unknown";

/// Per-load reporter context.
///
/// Crash ids are unique and increasing within one session. The
/// counter is atomic so a session shared across ingest tasks stays
/// safe; the default state is read-only after construction.
#[derive(Debug, Default)]
pub struct ReporterSession {
    next_notification_id: AtomicU64,
    default_state: PersistedState,
}

impl ReporterSession {
    /// Create a session with an empty default state
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session with a host-configured default state
    pub fn with_default_state(default_state: PersistedState) -> Self {
        Self {
            next_notification_id: AtomicU64::new(0),
            default_state,
        }
    }

    /// The state handed out for plugin keys with no stored entry
    pub fn default_state(&self) -> &PersistedState {
        &self.default_state
    }

    /// Resolve the current state for a plugin key against the host's
    /// per-key state map, falling back to this session's default.
    pub fn resolve<'a>(
        &'a self,
        plugin_key: &str,
        states_by_id: &'a HashMap<String, PersistedState>,
    ) -> &'a PersistedState {
        resolve_state(plugin_key, &self.default_state, states_by_id)
    }

    /// Ingest a raw crash log into `current`, returning the next state.
    ///
    /// Returns `None` when the OS tag is absent -- the log cannot be
    /// processed and no state change must happen. This is distinct
    /// from a successful-but-unrecognized parse, which yields a crash
    /// with the sentinel cause. The input state is never mutated.
    pub fn append_from_log(
        &self,
        current: &PersistedState,
        raw_log: &str,
        os_tag: Option<&str>,
    ) -> Option<PersistedState> {
        let os_tag = os_tag?;

        let crash = parse_crash_log(raw_log, os_tag)
            .into_crash(self.next_notification_id.fetch_add(1, Ordering::SeqCst));
        debug!(
            "Ingested crash {} ({}) for os {:?}",
            crash.notification_id, crash.name, os_tag
        );

        Some(current.appended(crash))
    }
}

/// Look up the state stored for `plugin_key`, else the default.
///
/// Pure lookup with fallback; mutates nothing.
pub fn resolve_state<'a>(
    plugin_key: &str,
    default_state: &'a PersistedState,
    states_by_id: &'a HashMap<String, PersistedState>,
) -> &'a PersistedState {
    states_by_id.get(plugin_key).unwrap_or(default_state)
}

/// Derive the stable key identifying which device/app owns a plugin's
/// state.
///
/// The selected app takes precedence over the device serial; the
/// literal `"unknown"` stands in when neither is available.
pub fn plugin_key(
    selected_app: Option<&str>,
    device: Option<&Device>,
    plugin_id: &str,
) -> String {
    let owner = selected_app
        .or_else(|| device.map(|d| d.serial.as_str()))
        .unwrap_or(UNKNOWN_OWNER);
    format!("{}#{}", owner, plugin_id)
}
