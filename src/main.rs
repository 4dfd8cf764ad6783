//! Crashmon - crash-log ingestion and triage for device debugging
//!
//! This is the binary entry point. All logic lives in the library crates.

use std::path::PathBuf;

use clap::Parser;
use crashmon_app::{should_show_notification, Device, ReporterSession};
use crashmon_core::prelude::*;
use crashmon_core::{extract_path, CrashOs, PersistedState};

/// Crashmon - parse device crash logs and report the cause
#[derive(Parser, Debug)]
#[command(name = "crashmon")]
#[command(about = "Parse device crash logs and report the cause", long_about = None)]
struct Args {
    /// Path to the crash log file
    #[arg(value_name = "LOG_FILE")]
    log_file: PathBuf,

    /// OS tag the log was captured on ("iOS" or "Android")
    #[arg(long, value_name = "OS")]
    os: String,

    /// Serial of the currently selected device; when given, report
    /// whether a notification would surface for it
    #[arg(long, value_name = "SERIAL")]
    device: Option<String>,

    /// Emit the ingested crash as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    crashmon_core::logging::init()?;

    let args = Args::parse();

    let raw_log = std::fs::read_to_string(&args.log_file)
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::log_not_found(&args.log_file),
            std::io::ErrorKind::InvalidData => Error::log_not_utf8(&args.log_file),
            _ => Error::Io(e),
        })
        .with_context(|| format!("Failed to read {}", args.log_file.display()))?;

    // The core degrades unknown tags to the sentinel cause; for the CLI
    // a mistyped tag is an input error instead.
    let os = CrashOs::from_tag(&args.os).ok_or_else(|| Error::unknown_os(&args.os))?;

    let session = ReporterSession::new();
    let state = session
        .append_from_log(&PersistedState::default(), &raw_log, Some(os.as_tag()))
        .ok_or_else(|| Error::config("ingest produced no state"))?;

    // append_from_log always appends exactly one crash
    let crash = state.crashes.last().ok_or_else(|| Error::config("empty state after ingest"))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(crash)?);
        return Ok(());
    }

    println!("Name:   {}", crash.name);
    println!("Reason: {}", crash.reason);

    match extract_path(&raw_log) {
        Some(path) => println!("Path:   {}", path),
        None => println!("Path:   (none)"),
    }

    if let Some(serial) = &args.device {
        let device = Device::new(serial.clone(), serial.clone(), None);
        let notify = should_show_notification(Some(&device), &raw_log);
        println!("Notify: {}", notify);
    }

    Ok(())
}
