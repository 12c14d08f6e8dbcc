//! Renju GUI
//!
//! Two players at one screen, crosses against noughts.

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use renju::cli::Cli;
use renju::ui::{AppConfig, RenjuApp};

fn main() -> Result<(), eframe::Error> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .init();

    let config = AppConfig {
        names: cli.player_names(),
        rule: cli.highlight.into(),
        assets: cli.assets,
        skip_intro: cli.skip_intro,
    };
    info!(?config, "starting Renju");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([800.0, 860.0])
            .with_min_inner_size([600.0, 640.0])
            .with_title("Renju"),
        ..Default::default()
    };

    eframe::run_native(
        "Renju",
        options,
        Box::new(|cc| Ok(Box::new(RenjuApp::new(cc, config)))),
    )
}
