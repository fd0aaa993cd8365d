// Desktop entry point for the banking UI
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::sync::Arc;

use banking::data::load_from_dir;
use banking::{BankData, Config, InMemoryBank};

mod app;
pub mod session;
mod ui;
pub mod wasm_utils;

fn open_bank(config: &Config) -> Result<Arc<dyn BankData>, banking::BankingError> {
    let bank = match &config.data.fixtures_dir {
        Some(dir) => InMemoryBank::new(load_from_dir(dir)?),
        None => InMemoryBank::builtin()?,
    };
    Ok(Arc::new(bank))
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let (config, bank) = match Config::load().and_then(|config| open_bank(&config).map(|bank| (config, bank))) {
        Ok(loaded) => loaded,
        Err(err) => {
            log::error!("Failed to load bank data: {}", err);
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title(&config.application.name),
        ..Default::default()
    };

    let title = config.application.name.clone();
    eframe::run_native(
        &title,
        native_options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app::BankingApp::new(cc, config, bank)))
        }),
    )
}
