//! Device abstraction supplied by the host device-communication layer

use crashmon_core::CrashOs;
use serde::{Deserialize, Serialize};

/// A connected device (or simulator/emulator) as seen by the host.
///
/// Only the fields this core needs: the serial is the stable
/// identifier that also appears as a path component inside simulator
/// crash logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    /// Unique device identifier (simulator UDID or adb serial)
    pub serial: String,

    /// Human-readable device name
    pub name: String,

    /// OS the device runs, when known
    #[serde(default)]
    pub os: Option<CrashOs>,
}

impl Device {
    pub fn new(serial: impl Into<String>, name: impl Into<String>, os: Option<CrashOs>) -> Self {
        Self {
            serial: serial.into(),
            name: name.into(),
            os,
        }
    }

    /// Get a display string for the device
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.serial)
    }
}
