mod app;
mod color;
mod data;
mod raster;
mod state;
mod ui;

use app::HeatviewApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([400.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Heatview – Matrix Heatmap Viewer",
        options,
        Box::new(|cc| Ok(Box::new(HeatviewApp::new(cc)))),
    )
}
