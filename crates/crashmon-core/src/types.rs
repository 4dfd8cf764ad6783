//! Core domain types for crash ingestion

use serde::{Deserialize, Serialize};

/// Operating system a crash log was captured on.
///
/// Only the two tagged formats are recognized. Tags are matched
/// case-sensitively (`"iOS"`, `"Android"`) because that is what the
/// device channel sends; anything else degrades to the sentinel cause
/// at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashOs {
    #[serde(rename = "iOS")]
    Ios,
    Android,
}

impl CrashOs {
    /// Parse an OS tag as sent by the device channel.
    ///
    /// Returns `None` for tags that are present but unrecognized. A
    /// *missing* tag is a different condition handled by the caller
    /// (see `ReporterSession::append_from_log`).
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "iOS" => Some(Self::Ios),
            "Android" => Some(Self::Android),
            _ => None,
        }
    }

    /// The wire tag for this OS
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Android => "Android",
        }
    }
}

/// A single ingested crash.
///
/// Immutable once created. The notification id is assigned from the
/// session counter at creation time and stringified for the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Crash {
    /// Monotonically increasing id, unique within a session
    #[serde(rename = "notificationID")]
    pub notification_id: String,

    /// Short crash name (e.g., "SIGSEGV", "FATAL EXCEPTION: main")
    pub name: String,

    /// Human-readable crash reason
    pub reason: String,

    /// Verbatim raw crash log, unmodified
    pub callstack: String,
}

/// Accumulated crash state for one device/app, owned by the host
/// plugin registry and keyed by plugin key.
///
/// Append-only from this core's perspective: entries are never
/// reordered or dropped, order is arrival order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub crashes: Vec<Crash>,
}

impl PersistedState {
    /// Create a state holding the given crashes
    pub fn new(crashes: Vec<Crash>) -> Self {
        Self { crashes }
    }

    /// Return a new state with `crash` appended. The receiver is not
    /// mutated.
    pub fn appended(&self, crash: Crash) -> Self {
        let mut crashes = self.crashes.clone();
        crashes.push(crash);
        Self { crashes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_crash(id: u64, name: &str) -> Crash {
        Crash {
            notification_id: id.to_string(),
            name: name.to_string(),
            reason: name.to_string(),
            callstack: String::new(),
        }
    }

    #[test]
    fn test_os_from_tag() {
        assert_eq!(CrashOs::from_tag("iOS"), Some(CrashOs::Ios));
        assert_eq!(CrashOs::from_tag("Android"), Some(CrashOs::Android));
        assert_eq!(CrashOs::from_tag("ios"), None); // case-sensitive
        assert_eq!(CrashOs::from_tag("windows"), None);
        assert_eq!(CrashOs::from_tag(""), None);
    }

    #[test]
    fn test_os_tag_round_trip() {
        for os in [CrashOs::Ios, CrashOs::Android] {
            assert_eq!(CrashOs::from_tag(os.as_tag()), Some(os));
        }
    }

    #[test]
    fn test_appended_does_not_mutate() {
        let prior = PersistedState::new(vec![sample_crash(0, "first")]);
        let next = prior.appended(sample_crash(1, "second"));

        assert_eq!(prior.crashes.len(), 1);
        assert_eq!(next.crashes.len(), 2);
        assert_eq!(next.crashes[0], prior.crashes[0]);
        assert_eq!(next.crashes[1].name, "second");
    }

    #[test]
    fn test_crash_serializes_with_notification_id_key() {
        let json = serde_json::to_string(&sample_crash(7, "SIGSEGV")).unwrap();
        assert!(json.contains("\"notificationID\":\"7\""));
        assert!(json.contains("\"callstack\""));
    }
}
