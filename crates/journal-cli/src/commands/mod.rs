//! Command handlers, one per subcommand.

mod entries;
mod serve;

pub use entries::{handle_add, handle_delete, handle_edit, handle_list, handle_show};
pub use serve::handle_serve;
