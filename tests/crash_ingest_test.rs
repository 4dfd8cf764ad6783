//! End-to-end ingest flow over fixture crash logs.
//!
//! Exercises the full path a crash takes through the core: parse the
//! raw log, derive the owning plugin key, resolve prior state, append
//! the crash, and gate the UI notification against the selected
//! device.

use std::collections::HashMap;

use crashmon_app::{plugin_key, should_show_notification, Device, ReporterSession};
use crashmon_core::{extract_path, parse_crash_log, CrashOs, PersistedState, UNKNOWN_CAUSE};

const IOS_LOG: &str = include_str!("fixtures/ios_sigsegv.log");
const ANDROID_LOG: &str = include_str!("fixtures/android_fatal.log");

const SIM_UDID: &str = "6ACA1A9C-3A1B-4E51-9D9B-0123456789AB";

#[test]
fn test_ios_fixture_parses() {
    let summary = parse_crash_log(IOS_LOG, "iOS");

    assert_eq!(summary.name, "SIGSEGV");
    assert_eq!(summary.reason, "SIGSEGV");
    assert_eq!(summary.callstack, IOS_LOG);
}

#[test]
fn test_android_fixture_parses() {
    let summary = parse_crash_log(ANDROID_LOG, "Android");

    assert_eq!(summary.name, "FATAL EXCEPTION: main");
    assert_eq!(
        summary.reason,
        "java.lang.IndexOutOfBoundsException: Invalid index 190, size is 0"
    );
    assert_eq!(summary.callstack, ANDROID_LOG);
}

#[test]
fn test_fixture_parsed_with_wrong_os_degrades_to_sentinel() {
    let summary = parse_crash_log(ANDROID_LOG, "iOS");
    assert_eq!(summary.name, UNKNOWN_CAUSE);
    assert_eq!(summary.reason, UNKNOWN_CAUSE);
}

#[test]
fn test_ios_fixture_path_points_into_simulator_device() {
    let path = extract_path(IOS_LOG).expect("fixture carries a Path: line");
    assert!(path.starts_with("/Users/dev/Library/Developer/CoreSimulator/Devices/"));
    assert!(path.split('/').any(|segment| segment == SIM_UDID));
}

#[test]
fn test_full_ingest_flow_for_selected_device() {
    let session = ReporterSession::new();
    let device = Device::new(SIM_UDID, "iPhone 15 Pro", Some(CrashOs::Ios));

    // Host-side plugin registry state
    let mut states_by_id: HashMap<String, PersistedState> = HashMap::new();

    let key = plugin_key(None, Some(&device), "CrashReporter");
    assert_eq!(key, format!("{}#CrashReporter", SIM_UDID));

    // First crash arrives: no stored state yet, resolve falls back to default
    let current = session.resolve(&key, &states_by_id).clone();
    assert!(current.crashes.is_empty());

    let next = session
        .append_from_log(&current, IOS_LOG, Some("iOS"))
        .expect("tagged log must produce a state update");
    assert_eq!(next.crashes.len(), 1);
    assert_eq!(next.crashes[0].notification_id, "0");
    assert_eq!(next.crashes[0].name, "SIGSEGV");
    states_by_id.insert(key.clone(), next);

    // Second crash for the same owner appends behind the first
    let current = session.resolve(&key, &states_by_id).clone();
    let next = session
        .append_from_log(&current, IOS_LOG, Some("iOS"))
        .expect("tagged log must produce a state update");
    assert_eq!(next.crashes.len(), 2);
    assert_eq!(next.crashes[1].notification_id, "1");
    states_by_id.insert(key.clone(), next);

    // The crash belongs to the selected simulator, so the UI alerts
    assert!(should_show_notification(Some(&device), IOS_LOG));

    // A different selected device stays quiet
    let other = Device::new("emulator-5554", "Pixel 8", Some(CrashOs::Android));
    assert!(!should_show_notification(Some(&other), IOS_LOG));
}

#[test]
fn test_untagged_log_never_updates_state() {
    let session = ReporterSession::new();
    let state = PersistedState::default();

    assert!(session.append_from_log(&state, IOS_LOG, None).is_none());
    assert!(session.append_from_log(&state, ANDROID_LOG, None).is_none());
    assert!(session.append_from_log(&state, "", None).is_none());
}

#[test]
fn test_android_fixture_has_no_path_so_no_notification() {
    let device = Device::new("emulator-5554", "Pixel 8", Some(CrashOs::Android));
    assert_eq!(extract_path(ANDROID_LOG), None);
    assert!(!should_show_notification(Some(&device), ANDROID_LOG));
}
