//! Islands of Hex GUI
//!
//! A graphical interface for two players, or for watching a simulated game.
//! An optional first argument names the TOML config file to load.

use std::path::PathBuf;

use islands::config::{AppConfig, DEFAULT_CONFIG_PATH};
use islands::ui::IslandsApp;

fn main() -> Result<(), eframe::Error> {
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));

    let config = match AppConfig::load_or_default(&path) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 800.0])
            .with_min_inner_size([600.0, 500.0])
            .with_title("Islands of Hex"),
        ..Default::default()
    };

    eframe::run_native(
        "Islands of Hex",
        options,
        Box::new(move |cc| Ok(Box::new(IslandsApp::new(cc, &config)))),
    )
}
