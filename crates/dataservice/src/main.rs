use anyhow::Context;
use clap::Parser;

use crate::cli::{App, Commands};

mod cli;
mod config;
mod logging;
mod run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();
    logging::init(app.verbose);

    match app.cmd {
        Commands::Get(arg) => {
            let config = config::load(app.config.as_deref()).context("failed to load config")?;
            tracing::debug!(status = %config.status, "config loaded");
            run::get(arg, config).await
        }
        Commands::Completions(arg) => {
            run::completions(arg);
            Ok(())
        }
    }
}
