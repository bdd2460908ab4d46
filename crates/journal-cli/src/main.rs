//! Journal CLI - record entries with a title, notes and a photo
//!
//! This is the command-line interface for Journal. Entries live in a local
//! slot directory by default, or behind `journal serve` with `--remote`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod logging;
mod output;

use clap::Parser;

use journal_core::JournalError;

use app::AppContext;
use cli::{Cli, Commands};
use errors::CliError;

fn run(cli: &Cli) -> anyhow::Result<()> {
    let ctx = AppContext::new(cli);

    match &cli.command {
        Commands::List(args) => commands::handle_list(&ctx, args),
        Commands::Show(args) => commands::handle_show(&ctx, args),
        Commands::Add(args) => commands::handle_add(&ctx, args),
        Commands::Edit(args) => commands::handle_edit(&ctx, args),
        Commands::Delete(args) => commands::handle_delete(&ctx, args),
        Commands::Serve(args) => commands::handle_serve(&ctx, args),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    if let Err(err) = run(&cli) {
        if let Some(cli_err) = err.downcast_ref::<CliError>() {
            cli_err.exit();
        }
        if let Some(cli_err) = err
            .downcast_ref::<JournalError>()
            .and_then(CliError::from_journal)
        {
            cli_err.exit();
        }
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
