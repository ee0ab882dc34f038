use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

use waypick_core::record::ActionRecord;

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

/// Serializes records as newline-delimited JSON, one object per line.
/// An empty collection yields an empty string (zero lines).
pub fn to_jsonl(records: &[ActionRecord]) -> Result<String, ExportError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(record)?);
        out.push('\n');
    }
    Ok(out)
}

/// Timestamped export file name, e.g. `actions-1756500000.jsonl`.
pub fn export_file_name(now: SystemTime) -> String {
    let secs = now
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    format!("actions-{secs}.jsonl")
}

pub fn write_export(path: &Path, records: &[ActionRecord]) -> Result<(), ExportError> {
    std::fs::write(path, to_jsonl(records)?)?;
    Ok(())
}
