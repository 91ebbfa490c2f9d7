//! Timestamper
//!
//! A desktop tool for marking emotion and gender labeled segments on a
//! YouTube video and exchanging them as JSON.

mod app;
mod components;
mod constants;
mod core;
mod error;
mod hotkeys;
mod state;
mod utils;

use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timestamper=info")),
        )
        .init();

    let config = Config::new()
        .with_window(
            WindowBuilder::new()
                .with_title("Timestamper")
                .with_inner_size(LogicalSize::new(1280.0, 800.0))
                .with_resizable(true),
        )
        .with_menu(None)
        .with_custom_head(constants::CUSTOM_HEAD.to_string());

    tracing::info!("starting Timestamper");
    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);
}
