use eframe::egui::{self, Color32, Rect, RichText, Sense, Ui, Vec2};

use crate::data::loader;
use crate::raster;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let can_export = state.matrix.is_some();
            if ui
                .add_enabled(can_export, egui::Button::new("Export PNG…"))
                .clicked()
            {
                export_png_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(matrix) = &state.matrix {
            let name = state
                .source_path
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "matrix".to_owned());
            ui.label(format!(
                "{name}: {} × {} cells",
                matrix.rows(),
                matrix.cols()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – display settings and statistics
// ---------------------------------------------------------------------------

/// Render the left display panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Display");
    ui.separator();

    // ---- Colour scale selector ----
    ui.strong("Color scale");
    let mut scale = state.scale;
    egui::ComboBox::from_id_salt("color_scale")
        .selected_text(scale.label())
        .show_ui(ui, |ui: &mut Ui| {
            for candidate in crate::color::ColorScale::ALL {
                ui.selectable_value(&mut scale, candidate, candidate.label());
            }
        });
    state.set_scale(scale);
    ui.separator();

    let Some(matrix) = state.matrix.clone() else {
        ui.label("No matrix loaded.");
        return;
    };

    // ---- Statistics ----
    ui.strong("Statistics");
    ui.label(format!("rows: {}", matrix.rows()));
    ui.label(format!("columns: {}", matrix.cols()));
    if let Some(range) = matrix.value_range() {
        ui.label(format!("min: {:.4}", range.min));
        ui.label(format!("max: {:.4}", range.max));
    }
    if let Some(mean) = matrix.mean() {
        ui.label(format!("mean: {mean:.4}"));
    }
    ui.separator();

    // ---- Gradient legend ----
    ui.strong("Scale");
    if let Some(range) = matrix.value_range() {
        ui.label(format!("{:.4}", range.max));
        legend_gradient(ui, state);
        ui.label(format!("{:.4}", range.min));
    } else {
        ui.label("no finite values");
    }
}

/// Paint a vertical gradient strip for the active colour scale, max on top.
fn legend_gradient(ui: &mut Ui, state: &AppState) {
    let size = Vec2::new(24.0, 140.0);
    let (response, painter) = ui.allocate_painter(size, Sense::hover());
    let rect = response.rect;

    let steps = 64;
    let slice_h = rect.height() / steps as f32;
    for i in 0..steps {
        let t = 1.0 - (i as f64 + 0.5) / steps as f64;
        let top = rect.top() + i as f32 * slice_h;
        let slice = Rect::from_min_size(
            egui::pos2(rect.left(), top),
            Vec2::new(rect.width(), slice_h + 0.5),
        );
        painter.rect_filled(slice, 0.0, state.scale.sample(t));
    }
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open matrix data")
        .add_filter("Supported files", &["csv", "txt", "json"])
        .add_filter("Delimited text", &["csv", "txt"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match loader::load_file(&path) {
            Ok(matrix) => {
                log::info!(
                    "Loaded {} × {} matrix from {}",
                    matrix.rows(),
                    matrix.cols(),
                    path.display()
                );
                state.set_matrix(matrix, path);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

pub fn export_png_dialog(state: &mut AppState) {
    let Some(matrix) = state.matrix.clone() else {
        return;
    };

    let file = rfd::FileDialog::new()
        .set_title("Export heatmap as PNG")
        .set_file_name("heatmap.png")
        .add_filter("PNG image", &["png"])
        .save_file();

    if let Some(path) = file {
        match raster::write_png(&matrix, state.scale, &path) {
            Ok(()) => {
                log::info!("Exported heatmap to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export PNG: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
