//! Meri Shikayat front end: every page registered on one router and hosted
//! in the terminal.

mod app;
mod config;
mod model;
mod pages;

use clap::Parser;
use shikayat_router::Application;

use crate::config::Cli;
use crate::model::SharedState;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.init_logging()?;
    tracing::info!(path = %cli.path, "starting");

    let application = Application::new(cli.app_config());
    application.run(move |router| {
        let state = SharedState::default();
        app::register_routes(router, &state)?;
        Ok(())
    })
}
