//! Notification gating: does a crash belong to the selected device?
//!
//! Simulator crash logs embed the crashed binary's path, which
//! contains the simulator device id as a path component
//! (`.../CoreSimulator/Devices/<udid>/...`). A UI alert should only
//! surface when that component matches the currently selected device.

use crashmon_core::extract_path;
use crashmon_core::prelude::*;

use crate::device::Device;

/// Decide whether a UI notification should be shown for a crash log.
///
/// Returns `false` when no device is selected or the log carries no
/// `Path:` line; otherwise true iff the selected device's serial
/// matches a path segment exactly. Segment equality (rather than
/// substring search) keeps a serial that is a prefix of another from
/// matching the wrong device.
pub fn should_show_notification(selected_device: Option<&Device>, raw_log: &str) -> bool {
    let Some(device) = selected_device else {
        return false;
    };
    let Some(path) = extract_path(raw_log) else {
        return false;
    };

    let matched = path.split('/').any(|segment| segment == device.serial);
    if !matched {
        debug!(
            "Crash path {:?} does not belong to selected device {}",
            path, device.serial
        );
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crashmon_core::CrashOs;

    const UDID: &str = "6ACA1A9C-3A1B-4E51-9D9B-0123456789AB";

    fn simulator_log(udid: &str) -> String {
        format!(
            "Process:  Sample [87361]\nPath:     /Users/dev/Library/Developer/CoreSimulator/Devices/{}/data/Containers/Bundle/Application/Sample.app/Sample\nIdentifier: Sample\nException Type:  SIGSEGV\n",
            udid
        )
    }

    fn selected(serial: &str) -> Device {
        Device::new(serial, "iPhone 15", Some(CrashOs::Ios))
    }

    #[test]
    fn test_notifies_for_matching_device() {
        let device = selected(UDID);
        assert!(should_show_notification(Some(&device), &simulator_log(UDID)));
    }

    #[test]
    fn test_no_device_selected() {
        assert!(!should_show_notification(None, &simulator_log(UDID)));
    }

    #[test]
    fn test_log_without_path_line() {
        let device = selected(UDID);
        assert!(!should_show_notification(
            Some(&device),
            "Exception Type:  SIGSEGV\nno path here\n"
        ));
    }

    #[test]
    fn test_mismatched_device_id() {
        let device = selected("FFFF0000-1111-2222-3333-444455556666");
        assert!(!should_show_notification(Some(&device), &simulator_log(UDID)));
    }

    #[test]
    fn test_serial_prefix_does_not_match() {
        // "6ACA1A9C" is a prefix of the path component but not equal to it
        let device = selected("6ACA1A9C");
        assert!(!should_show_notification(Some(&device), &simulator_log(UDID)));
    }

    #[test]
    fn test_empty_log() {
        let device = selected(UDID);
        assert!(!should_show_notification(Some(&device), ""));
    }
}
