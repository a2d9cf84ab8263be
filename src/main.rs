use anyhow::{Context, Result};
use clap::Parser;
use orderdesk::config::Config;
use orderdesk::logger;
use orderdesk::orders::OrderBook;
use orderdesk::ui;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orderdesk", version, about = "A terminal storefront for customer orders")]
struct Cli {
    /// Use this configuration file instead of the default search path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a default configuration file and exit
    #[arg(long)]
    generate_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.generate_config {
        let path = match cli.config {
            Some(path) => path,
            None => Config::get_default_config_path()?,
        };
        return Config::generate_default_config(path);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };

    logger::init(&config.logging)?;

    let orders = OrderBook::bundled().context("Failed to load bundled orders")?;
    log::info!("loaded {} orders", orders.len());

    // Run the TUI application
    ui::run_app(&config, orders).await?;

    Ok(())
}
