use std::path::Path;

use eframe::egui;

use crate::data::loader;
use crate::state::{AppState, ViewerSettings};
use crate::ui::{panels, plot};

/// Storage key for the persisted viewer settings.
const SETTINGS_KEY: &str = "heatview-settings";

/// Input file loaded at startup when present in the working directory.
const DEFAULT_INPUT: &str = "measure.csv";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HeatviewApp {
    pub state: AppState,
}

impl HeatviewApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings: ViewerSettings = cc
            .storage
            .and_then(|storage| storage.get_string(SETTINGS_KEY))
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default();

        let mut state = AppState::with_settings(settings);
        load_default_input(&mut state);
        Self { state }
    }
}

/// Load `measure.csv` from the working directory if it exists.  A missing
/// file only leaves a hint in the UI; a malformed one surfaces its error
/// chain in the status line instead of aborting.
fn load_default_input(state: &mut AppState) {
    let path = Path::new(DEFAULT_INPUT);
    if !path.exists() {
        log::info!("No {DEFAULT_INPUT} in the working directory");
        state.status_message = Some(format!("{DEFAULT_INPUT} not found – use File → Open…"));
        return;
    }

    match loader::load_file(path) {
        Ok(matrix) => {
            log::info!(
                "Loaded {} × {} matrix from {DEFAULT_INPUT}",
                matrix.rows(),
                matrix.cols()
            );
            state.set_matrix(matrix, path.to_path_buf());
        }
        Err(e) => {
            log::error!("Failed to load {DEFAULT_INPUT}: {e:#}");
            state.status_message = Some(format!("Error: {e:#}"));
        }
    }
}

impl eframe::App for HeatviewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: display settings ----
        egui::SidePanel::left("display_panel")
            .default_width(180.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: heatmap ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::heatmap_plot(ui, &mut self.state);
        });
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(&self.state.settings()) {
            storage.set_string(SETTINGS_KEY, json);
        }
    }
}
