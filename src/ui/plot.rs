use eframe::egui::{Ui, Vec2};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Heatmap plot (central panel)
// ---------------------------------------------------------------------------

/// Render the heatmap in the central panel.
///
/// The matrix occupies plot space `x ∈ [0, cols]`, `y ∈ [0, rows]` with row 0
/// at the top, matching the file's line order.
pub fn heatmap_plot(ui: &mut Ui, state: &mut AppState) {
    let Some(matrix) = state.matrix.clone() else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a matrix file to view a heatmap  (File → Open…)");
        });
        return;
    };

    let texture_id = match state.ensure_texture(ui.ctx()) {
        Some(texture) => texture.id(),
        None => return,
    };

    let rows = matrix.rows();
    let cols = matrix.cols();

    // Hover readout: plot coordinate → cell row/column/value.
    let hovered = matrix.clone();
    let formatter = move |_name: &str, point: &PlotPoint| {
        let col = point.x.floor();
        let row = (rows as f64 - point.y).floor();
        if col < 0.0 || row < 0.0 || col >= cols as f64 || row >= rows as f64 {
            return String::new();
        }
        let (row, col) = (row as usize, col as usize);
        format!("row {row}, col {col}\nvalue {:.4}", hovered.get(row, col))
    };

    Plot::new("heatmap")
        .data_aspect(1.0)
        .x_axis_label("column")
        .y_axis_label("row (0 at top)")
        .label_formatter(formatter)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let image = PlotImage::new(
                texture_id,
                PlotPoint::new(cols as f64 / 2.0, rows as f64 / 2.0),
                Vec2::new(cols as f32, rows as f32),
            );
            plot_ui.image(image);
        });
}
