use crate::app::AppContext;
use crate::cli::DeleteArgs;

use super::require_entry;

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    // The local slot treats a missing id as a no-op; report it instead.
    require_entry(store.as_ref(), args.id)?;
    store.delete(args.id)?;
    if !ctx.quiet() {
        println!("Deleted entry {}", args.id);
    }
    Ok(())
}
