//! CSV export of the outcome log.

use std::path::Path;

use chrono::SecondsFormat;

use crate::error::{SessionError, SessionResult};
use crate::log::OutcomeLog;

/// File name suggested for exports.
pub const DEFAULT_EXPORT_FILE: &str = "spin-results.csv";

fn quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Render the log as CSV with a `time,label` header, newest first.
///
/// Every cell is double-quoted with embedded quotes doubled. Rows are joined
/// by `\n` with no trailing newline.
pub fn to_csv(log: &OutcomeLog) -> String {
    let mut rows = vec![format!("{},{}", quote("time"), quote("label"))];
    for record in log.records() {
        let time = record.time.to_rfc3339_opts(SecondsFormat::Millis, true);
        rows.push(format!("{},{}", quote(&time), quote(&record.label)));
    }
    rows.join("\n")
}

/// Write the log as CSV to `path`.
pub fn write_csv(log: &OutcomeLog, path: &Path) -> SessionResult<()> {
    std::fs::write(path, to_csv(log)).map_err(|source| SessionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), records = log.len(), "exported CSV");
    Ok(())
}
