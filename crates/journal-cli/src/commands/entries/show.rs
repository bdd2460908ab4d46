use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{entry_json, print_entry};

use super::require_entry;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entry = require_entry(store.as_ref(), args.id)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entry_json(&entry)?)?);
    } else {
        print_entry(&entry, ctx.quiet());
    }
    Ok(())
}
