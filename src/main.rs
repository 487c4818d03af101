mod app;
mod chart;
mod color;
mod data;
mod state;
mod ui;

use app::AwardsExplorerApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 860.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Awards Explorer – Academy Awards",
        options,
        Box::new(|_cc| Ok(Box::new(AwardsExplorerApp::default()))),
    )
}
