//! JSON output formatting for entries.

use journal_core::Entry;

/// Convert an entry to JSON for output, using the wire field names.
pub fn entry_json(entry: &Entry) -> anyhow::Result<serde_json::Value> {
    Ok(serde_json::to_value(entry)?)
}

/// Convert multiple entries to a JSON array for output.
pub fn entries_json(entries: &[Entry]) -> anyhow::Result<Vec<serde_json::Value>> {
    entries.iter().map(entry_json).collect()
}
