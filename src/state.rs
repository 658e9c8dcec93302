use std::path::PathBuf;
use std::sync::Arc;

use eframe::egui::{Context, TextureHandle, TextureOptions};
use serde::{Deserialize, Serialize};

use crate::color::ColorScale;
use crate::data::model::Matrix;
use crate::raster;

// ---------------------------------------------------------------------------
// Persisted settings
// ---------------------------------------------------------------------------

/// Settings that survive restarts through eframe storage.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ViewerSettings {
    pub scale: ColorScale,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded measurement matrix (None until a file is loaded).
    pub matrix: Option<Arc<Matrix>>,

    /// Path the matrix was loaded from.
    pub source_path: Option<PathBuf>,

    /// Active colour scale.
    pub scale: ColorScale,

    /// Cached heatmap texture; rebuilt when matrix or scale changes.
    texture: Option<TextureHandle>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            matrix: None,
            source_path: None,
            scale: ColorScale::default(),
            texture: None,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn with_settings(settings: ViewerSettings) -> Self {
        Self {
            scale: settings.scale,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> ViewerSettings {
        ViewerSettings { scale: self.scale }
    }

    /// Ingest a newly loaded matrix and invalidate the cached texture.
    pub fn set_matrix(&mut self, matrix: Matrix, path: PathBuf) {
        self.matrix = Some(Arc::new(matrix));
        self.source_path = Some(path);
        self.texture = None;
        self.status_message = None;
    }

    /// Switch the colour scale; the texture is rebuilt on the next frame.
    pub fn set_scale(&mut self, scale: ColorScale) {
        if self.scale != scale {
            self.scale = scale;
            self.texture = None;
        }
    }

    /// Return the heatmap texture, rasterizing the matrix if needed.
    pub fn ensure_texture(&mut self, ctx: &Context) -> Option<&TextureHandle> {
        if self.texture.is_none() {
            let matrix = self.matrix.as_ref()?;
            let img = raster::to_color_image(matrix, self.scale);
            // Nearest filtering keeps cell boundaries crisp when zoomed.
            self.texture = Some(ctx.load_texture("heatmap", img, TextureOptions::NEAREST));
        }
        self.texture.as_ref()
    }
}
