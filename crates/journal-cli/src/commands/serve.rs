use log::info;

use journal_core::service::{self, ServiceConfig};

use crate::app::AppContext;
use crate::cli::ServeArgs;

/// Layer `serve` flags over the `[server]` config section.
fn service_config(ctx: &AppContext, args: &ServeArgs) -> anyhow::Result<ServiceConfig> {
    let mut server = ctx.config()?.server.clone();
    if let Some(ref path) = args.database {
        server.database_path = Some(path.clone());
    }
    if let Some(address) = args.address {
        server.address = Some(address);
    }
    if let Some(id_assignment) = args.id_assignment {
        server.id_assignment = Some(id_assignment);
    }
    server.service_config()
}

pub fn handle_serve(ctx: &AppContext, args: &ServeArgs) -> anyhow::Result<()> {
    let config = service_config(ctx, args)?;
    if let Some(parent) = config.database_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    info!("Using database {}", config.database_path.display());

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(service::serve(config))?;
    Ok(())
}
