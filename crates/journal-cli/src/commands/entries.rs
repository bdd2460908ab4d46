mod add;
mod delete;
mod edit;
mod list;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use show::handle_show;

use journal_core::{EntryId, EntryStore};

use crate::errors::CliError;

const LIST_HINT: &str = "Hint: Run `journal list` to find entry IDs.";

/// Fetch an entry or fail with the not-found exit code.
fn require_entry(store: &dyn EntryStore, id: EntryId) -> anyhow::Result<journal_core::Entry> {
    match store.get(id)? {
        Some(entry) => Ok(entry),
        None => Err(CliError::not_found(format!("Entry {} not found.", id), LIST_HINT).into()),
    }
}
