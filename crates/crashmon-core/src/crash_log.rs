//! Crash log parsing for iOS and Android crash reports.
//!
//! Maps a raw crash-log text blob plus an OS tag to a structured
//! name/reason pair via a small fixed set of pattern rules per OS,
//! and extracts the embedded filesystem path that identifies which
//! simulator/device produced the log.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::{Crash, CrashOs};

/// Sentinel used when no pattern rule recognizes the log content
pub const UNKNOWN_CAUSE: &str = "Cannot figure out the cause";

// ─────────────────────────────────────────────────────────────────────────────
// Pattern Rules
// ─────────────────────────────────────────────────────────────────────────────

/// iOS crash reports carry an `Exception Type:` line, e.g.
/// `Exception Type:  SIGSEGV` or `Exception Type:  EXC_BAD_ACCESS`.
///
/// The value class is ASCII-only (`[[:word:]]`), so emoji or other
/// unicode directly after the keyword fails the rule and falls back
/// to [`UNKNOWN_CAUSE`]. Keyword matching is case-sensitive.
static IOS_EXCEPTION_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Exception Type:[ \t]*([[:word:]]+)").expect("Invalid exception type regex")
});

/// Android fatal crash header line, e.g. `FATAL EXCEPTION: main`
static ANDROID_FATAL_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^.*FATAL EXCEPTION.*$").expect("Invalid fatal header regex")
});

/// Android exception line following the header, e.g.
/// `java.lang.IndexOutOfBoundsException: Invalid index 190, size is 0`
///
/// The class token must end in Exception/Error/Throwable so that
/// metadata lines between header and exception (`Process: com.app,
/// PID: 1234`) are not mistaken for the cause.
static ANDROID_EXCEPTION_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*([A-Za-z_$][A-Za-z0-9_$.]*(?:Exception|Error|Throwable)):[ \t]*.*$")
        .expect("Invalid exception line regex")
});

/// `Path:` line embedded in simulator crash logs, value runs to end
/// of line (spaces, percent-encoding etc. preserved verbatim)
static PATH_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Path:[ \t]*([^\n]+)").expect("Invalid path line regex"));

// ─────────────────────────────────────────────────────────────────────────────
// Parsing
// ─────────────────────────────────────────────────────────────────────────────

/// Parsed name/reason for a crash log, before a notification id has
/// been assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrashSummary {
    /// Short crash name
    pub name: String,

    /// Human-readable crash reason
    pub reason: String,

    /// Verbatim raw log, unmodified (including empty input)
    pub callstack: String,
}

impl CrashSummary {
    /// Attach a notification id, producing a finished [`Crash`]
    pub fn into_crash(self, notification_id: u64) -> Crash {
        Crash {
            notification_id: notification_id.to_string(),
            name: self.name,
            reason: self.reason,
            callstack: self.callstack,
        }
    }

    fn unknown(raw_log: &str) -> Self {
        Self {
            name: UNKNOWN_CAUSE.to_string(),
            reason: UNKNOWN_CAUSE.to_string(),
            callstack: raw_log.to_string(),
        }
    }
}

/// Parse a raw crash log tagged with an OS.
///
/// An unrecognized tag, or content that no rule for the tagged OS
/// matches, degrades to [`UNKNOWN_CAUSE`] for both name and reason.
/// The callstack is always the verbatim input.
pub fn parse_crash_log(raw_log: &str, os_tag: &str) -> CrashSummary {
    match CrashOs::from_tag(os_tag) {
        Some(CrashOs::Ios) => parse_ios(raw_log),
        Some(CrashOs::Android) => parse_android(raw_log),
        None => {
            tracing::debug!("Unrecognized OS tag {:?}, using sentinel cause", os_tag);
            CrashSummary::unknown(raw_log)
        }
    }
}

fn parse_ios(raw_log: &str) -> CrashSummary {
    let cause = IOS_EXCEPTION_TYPE
        .captures(raw_log)
        .map(|caps| caps[1].trim().to_string())
        .filter(|value| !value.is_empty());

    match cause {
        Some(value) => CrashSummary {
            name: value.clone(),
            reason: value,
            callstack: raw_log.to_string(),
        },
        None => CrashSummary::unknown(raw_log),
    }
}

fn parse_android(raw_log: &str) -> CrashSummary {
    // Name extraction is more permissive than reason extraction: any
    // log with a line break yields its first line as the name.
    let first_line = raw_log.split_once('\n').map(|(first, _)| first);

    let header = ANDROID_FATAL_HEADER.find(raw_log);
    let exception_line = header.and_then(|h| {
        ANDROID_EXCEPTION_LINE
            .find(&raw_log[h.end()..])
            .map(|m| m.as_str().trim().to_string())
    });

    let (name, reason) = match (header, exception_line) {
        // Full two-part structure: header line is the name, the
        // exception class + message line is the reason.
        (Some(h), Some(exception)) => (h.as_str().to_string(), exception),
        _ => (
            first_line
                .map(str::to_string)
                .unwrap_or_else(|| UNKNOWN_CAUSE.to_string()),
            UNKNOWN_CAUSE.to_string(),
        ),
    };

    CrashSummary {
        name,
        reason,
        callstack: raw_log.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Extraction
// ─────────────────────────────────────────────────────────────────────────────

/// Extract the embedded filesystem path from a crash log.
///
/// Simulator crash logs carry a `Path:` line pointing at the crashed
/// binary inside the simulator device directory. The value is
/// returned verbatim (not percent-decoded), minus line-ending
/// whitespace so CRLF logs do not leak a trailing `\r` into the
/// path; `None` when no such line exists.
pub fn extract_path(raw_log: &str) -> Option<String> {
    PATH_LINE
        .captures(raw_log)
        .map(|caps| caps[1].trim().to_string())
        .filter(|path| !path.is_empty())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
