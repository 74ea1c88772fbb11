//! The main entry point for the search bot.
mod app;
mod commands;
mod config;
mod lookup;
mod notify;
mod tasks;

use anyhow::Result;

/// The main function of the application.
///
/// Initializes the application and runs the interactive client until the
/// user exits.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
