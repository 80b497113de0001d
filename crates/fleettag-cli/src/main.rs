use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use fleettag_core::prelude::{
    DryRunWriter, InventoryFile, Region, TagConfig, TagContext, TagRequest, TagWriter, Tagger,
};
use fleettag_model::ENV_INSTANCE_ID;
use fleettag_observe::{LoggerConfig, init_local_offset, init_logger};

mod args;
use args::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Offset detection only works while the process is single-threaded.
    init_local_offset();

    // 1) logger
    let mut log_cfg = LoggerConfig {
        format: cli.log_format,
        tz: cli.log_tz,
        ..Default::default()
    };
    if cli.debug {
        log_cfg = log_cfg.with_debug();
    }
    init_logger(&log_cfg)?;

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build runtime")?
        .block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // 2) target and region, resolved once and passed down
    let instance_id = match cli.instance_id {
        Some(id) => id,
        None => {
            let id = std::env::var(ENV_INSTANCE_ID)
                .with_context(|| format!("--instance-id not given and {ENV_INSTANCE_ID} not set"))?;
            info!(instance_id = %id, "instance id not provided, using environment");
            id
        }
    };
    let region = Region::resolve(cli.region.as_deref())?;
    info!(%region, "region resolved");

    // 3) collaborators
    let inventory = Arc::new(InventoryFile::new(&cli.inventory));
    let writer: Arc<dyn TagWriter> = if cli.dry_run {
        Arc::new(DryRunWriter)
    } else {
        inventory.clone()
    };

    // 4) tag
    let config = TagConfig {
        digits: cli.digits,
        collision: cli.collision,
        refetch_attempts: cli.refetch_attempts,
    };
    let tagger = Tagger::new(inventory, writer, config, TagContext::new(region));

    let mut request = TagRequest::new(instance_id)?;
    if let Some(group) = cli.asg_name {
        request = request.with_scaling_group(group);
    }
    if let Some(basename) = cli.basename {
        request = request.with_basename(basename);
    }

    let outcome = tagger.run(&request).await?;
    println!("{}", serde_json::to_string(&outcome)?);
    Ok(())
}
