//! # crashmon-app - Reporter State and Orchestration
//!
//! Session state and gating logic for Crashmon, layered on
//! `crashmon-core`. The host device-debugging tool owns the plugin
//! registry and the device channel; this crate supplies everything in
//! between:
//!
//! - [`Device`] - the minimal device abstraction (serial, name, OS)
//! - [`ReporterSession`] - per-load context owning the notification-id
//!   counter and default state
//! - [`resolve_state()`] / [`ReporterSession::append_from_log()`] -
//!   persisted-state lookup and append-only ingestion
//! - [`plugin_key()`] - stable `"{owner}#{pluginId}"` key derivation
//! - [`should_show_notification()`] - UI alert gating against the
//!   selected device

pub mod device;
pub mod notification;
pub mod session;

pub use device::Device;
pub use notification::should_show_notification;
pub use session::{plugin_key, resolve_state, ReporterSession};
