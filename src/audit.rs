//! Append-only CSV audit log, one row per successful run.

use std::fs::OpenOptions;
use std::path::Path;

use chrono::Local;

use crate::error::{Error, Result};

const HEADER: [&str; 3] = ["timestamp", "managed_record", "public_ip"];

/// Append one audit row to the log at `path`.
///
/// A file that does not exist yet gets the header row first, so the
/// first line of the log is always `timestamp,managed_record,public_ip`.
/// The file is opened in append mode; prior history is never truncated.
/// This runs after the DNS write has succeeded, so a failure here is
/// surfaced as the run's terminal error but rolls nothing back.
pub fn append_entry(path: &Path, managed_name: &str, public_ip: &str) -> Result<()> {
    // Existence check must happen before the create-on-open below.
    let is_new = !path.exists();

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::log_write(format!("{}: {}", path.display(), e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if is_new {
        writer
            .write_record(HEADER)
            .map_err(|e| Error::log_write(e.to_string()))?;
    }

    // Local time, microsecond precision, no zone offset.
    let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    writer
        .write_record([timestamp.as_str(), managed_name, public_ip])
        .map_err(|e| Error::log_write(e.to_string()))?;

    writer.flush().map_err(|e| Error::log_write(e.to_string()))
}
