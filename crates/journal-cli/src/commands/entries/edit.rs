use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::output::entry_json;

use super::require_entry;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if args.title.is_none() && args.notes.is_none() && args.photo_url.is_none() {
        return Err(CliError::invalid_input(
            "Nothing to change.\nHint: Pass --title, --notes or --photo-url.",
        )
        .into());
    }

    let mut store = ctx.open_store()?;
    let mut entry = require_entry(store.as_ref(), args.id)?;
    if let Some(ref title) = args.title {
        entry.title = title.clone();
    }
    if let Some(ref notes) = args.notes {
        entry.notes = notes.clone();
    }
    if let Some(ref photo_url) = args.photo_url {
        entry.photo_url = photo_url.clone();
    }

    let updated = store.update(&entry)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&updated)?)?);
    } else if !ctx.quiet() {
        println!("Updated entry {}", args.id);
    }
    Ok(())
}
