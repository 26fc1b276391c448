//! Sous-Chef: interactive recipe browsing companion.

mod app;
mod app_command;
mod catalog;
mod chime;
mod command_parser;
mod config;
mod error;
mod notifier;
#[cfg(test)]
mod tests;

pub(crate) use {
    app::App,
    app_command::{AppCommand, TimerAction},
    catalog::Catalog,
    error::{AppError, Result as AppResult},
    notifier::DesktopNotifier,
};

use crate::config::Config;

use std::sync::Arc;

use tracing::error;

/// Application entry point.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("sous_chef=info")
        .init();

    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load config: {:?}", e);
            std::process::exit(1);
        }
    };

    let catalog = match Catalog::load_embedded() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load demo catalog: {:?}", e);
            std::process::exit(1);
        }
    };

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!("Failed to create tokio runtime: {:?}", e);
            std::process::exit(1);
        }
    };

    rt.block_on(async {
        let sink = Arc::new(DesktopNotifier::new(&config.notifications));
        let app = App::new(config, catalog, sink);

        if let Err(e) = app.run().await {
            error!(error = ?e, "App error");
            std::process::exit(1);
        }
    });
}
