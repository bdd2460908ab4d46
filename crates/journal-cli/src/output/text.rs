//! Text and table output formatting for entries.

use comfy_table::presets::NOTHING;
use comfy_table::{ContentArrangement, Table};

use journal_core::Entry;

use super::json::entries_json;

const NOTES_PREVIEW_MAX: usize = 40;

fn id_label(entry: &Entry) -> String {
    entry
        .entry_id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn preview(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() > NOTES_PREVIEW_MAX {
        let cut: String = first_line.chars().take(NOTES_PREVIEW_MAX - 3).collect();
        format!("{}...", cut)
    } else {
        first_line.to_string()
    }
}

/// Render entries as a borderless table.
pub fn entry_table(entries: &[Entry]) -> String {
    let mut table = Table::new();
    table.load_preset(NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["ID", "Title", "Notes", "Photo URL"]);
    for entry in entries {
        table.add_row(vec![
            id_label(entry),
            entry.title.clone(),
            preview(&entry.notes),
            entry.photo_url.clone(),
        ]);
    }
    table.to_string()
}

/// Print entries as JSON, bare IDs (quiet) or a table.
pub fn print_entry_list(entries: &[Entry], json: bool, quiet: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&entries_json(entries)?)?);
        return Ok(());
    }
    if quiet {
        for entry in entries {
            println!("{}", id_label(entry));
        }
        return Ok(());
    }
    if entries.is_empty() {
        println!("No entries found.");
        return Ok(());
    }
    println!("{}", entry_table(entries));
    Ok(())
}

/// Print a single entry in human-readable format.
pub fn print_entry(entry: &Entry, quiet: bool) {
    if !quiet {
        println!("ID: {}", id_label(entry));
        println!("Title: {}", entry.title);
        println!("Photo: {}", entry.photo_url);
        println!();
    }
    println!("{}", entry.notes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_truncates_long_first_line() {
        let long = "x".repeat(100);
        let shown = preview(&long);
        assert_eq!(shown.chars().count(), NOTES_PREVIEW_MAX);
        assert!(shown.ends_with("..."));
        assert_eq!(preview("short\nsecond line"), "short");
    }

    #[test]
    fn test_entry_table_lists_every_entry() {
        let entries = vec![
            Entry::new("First", "a", "https://example.com/1.png").with_id(2),
            Entry::new("Second", "b", "https://example.com/2.png").with_id(1),
        ];
        let rendered = entry_table(&entries);
        assert!(rendered.contains("Photo URL"));
        assert!(rendered.contains("First"));
        assert!(rendered.contains("https://example.com/2.png"));
    }
}
