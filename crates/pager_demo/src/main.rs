mod config;
mod render;

use std::path::PathBuf;

use log::LevelFilter;
use pager_core::ListStatus;
use pager_engine::{ListController, VecPageSource};
use pager_logging::{pager_info, pager_warn, LogDestination};

use config::DemoConfig;

// Bounds the scripted scroll session if the source never runs dry.
const MAX_LOAD_MORE_ROUNDS: usize = 1_000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(config::DEFAULT_CONFIG_FILE));
    let config = config::load(&config_path)?;

    let destination = if config.log_to_file {
        LogDestination::Both(PathBuf::from("./pager_demo.log"))
    } else {
        LogDestination::Terminal
    };
    if !pager_logging::initialize(destination, LevelFilter::Info) {
        eprintln!("Warning: logging is disabled, no logger could be installed");
    }

    run(config).await
}

/// Plays a scroll session: initial load, scroll to the end, then pull to refresh.
async fn run(config: DemoConfig) -> anyhow::Result<()> {
    let source = VecPageSource::new(
        (1..=config.total_items)
            .map(|n| format!("item {n}"))
            .collect(),
    );
    let controller = ListController::spawn(config.list_config()?, source);

    let mut updates = controller.subscribe()?;
    let printer = tokio::spawn(async move {
        while let Some(status) = updates.recv().await {
            for line in render::render(&status) {
                println!("{line}");
            }
        }
    });

    controller.load()?;
    let mut status = controller.settled().await?;

    let mut rounds = 0;
    while !status.is_exhausted() && rounds < MAX_LOAD_MORE_ROUNDS {
        if let ListStatus::Failed { error, .. } = &status {
            pager_warn!("Stopping scroll session after failure: {}", error);
            break;
        }
        controller.load_more()?;
        status = controller.settled().await?;
        rounds += 1;
    }
    pager_info!(
        "Scrolled to {} items in {} pages",
        status.item_count(),
        rounds
    );

    controller.load()?;
    let status = controller.settled().await?;
    pager_info!("Refreshed: {} items", status.item_count());

    controller.shutdown();
    drop(controller);
    let _ = printer.await;
    Ok(())
}
