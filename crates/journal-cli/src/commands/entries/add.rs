use journal_core::Entry;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::output::{entry_json, print_entry};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let entry = Entry::new(&args.title, &args.notes, &args.photo_url);
    let created = store.create(&entry)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&created)?)?);
    } else if ctx.quiet() {
        // Bare id for scripting.
        if let Some(id) = created.entry_id {
            println!("{}", id);
        }
    } else {
        print_entry(&created, false);
    }
    Ok(())
}
