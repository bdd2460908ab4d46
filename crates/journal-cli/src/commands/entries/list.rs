use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::output::print_entry_list;

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let entries = store.list()?;
    print_entry_list(&entries, args.json, ctx.quiet())
}
