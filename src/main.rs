mod app;
mod color;
mod data;
mod state;
mod ui;

use anyhow::Context;
use app::VitalViewApp;
use eframe::egui;
use state::AppState;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // The dashboard is useless without its dataset: fail with a message
    // before any window opens.
    let raw = data::loader::fetch_url(data::loader::DATA_URL)
        .context("loading the mortality dataset")?;

    let mut state = AppState::default();
    state.set_dataset(raw);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Mortality Indicators, CDC-NCHS Dashboard",
        options,
        Box::new(|_cc| Ok(Box::new(VitalViewApp::new(state)))),
    )
    .map_err(|e| anyhow::anyhow!("eframe error: {e}"))
}
