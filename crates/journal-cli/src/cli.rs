use clap::{Args, Parser, Subcommand};

use journal_core::service::IdAssignment;
use journal_core::{EntryId, VERSION};

/// Journal - record entries with a title, notes and a photo
#[derive(Parser)]
#[command(name = "journal")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use the remote service at this URL instead of local storage
    #[arg(long, global = true, env = "JOURNAL_REMOTE", value_name = "URL")]
    pub remote: Option<String>,

    /// Directory for local storage
    #[arg(long, global = true, env = "JOURNAL_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Config file path
    #[arg(long, global = true, env = "JOURNAL_CONFIG", value_name = "PATH")]
    pub config: Option<String>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List entries
    List(ListArgs),

    /// Show a single entry
    Show(ShowArgs),

    /// Add a new entry
    Add(AddArgs),

    /// Edit an existing entry
    Edit(EditArgs),

    /// Delete an entry
    Delete(DeleteArgs),

    /// Run the entry HTTP service
    Serve(ServeArgs),
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: EntryId,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Entry title
    #[arg(long)]
    pub title: String,

    /// Entry notes
    #[arg(long)]
    pub notes: String,

    /// Photo URL
    #[arg(long)]
    pub photo_url: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: EntryId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// New photo URL
    #[arg(long)]
    pub photo_url: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Entry ID
    #[arg(value_name = "ID")]
    pub id: EntryId,
}

/// Arguments for the `serve` command
#[derive(Args)]
pub struct ServeArgs {
    /// Listen address (e.g., 127.0.0.1:8080)
    #[arg(long)]
    pub address: Option<std::net::SocketAddr>,

    /// SQLite database file
    #[arg(long, value_name = "PATH")]
    pub database: Option<String>,

    /// Who assigns entry ids on create (server, client)
    #[arg(long, value_name = "MODE")]
    pub id_assignment: Option<IdAssignment>,
}
