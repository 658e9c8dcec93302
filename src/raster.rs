use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui::{Color32, ColorImage};
use image::{Rgba, RgbaImage};

use crate::color::ColorScale;
use crate::data::model::Matrix;

// ---------------------------------------------------------------------------
// Matrix → raster image, one texel per cell
// ---------------------------------------------------------------------------

/// Rasterize a matrix for the viewer texture.  Cell values are normalized
/// against the matrix's finite range and mapped through the colour scale.
/// Non-finite cells come out transparent.
pub fn to_color_image(matrix: &Matrix, scale: ColorScale) -> ColorImage {
    let range = matrix.value_range();
    let mut img = ColorImage::new([matrix.cols(), matrix.rows()], Color32::TRANSPARENT);

    for (i, &v) in matrix.values().iter().enumerate() {
        if !v.is_finite() {
            continue;
        }
        let t = range.map_or(0.5, |r| r.normalize(v));
        img.pixels[i] = scale.sample(t);
    }
    img
}

/// Rasterize a matrix for PNG export.  Same mapping as [`to_color_image`].
pub fn to_rgba_image(matrix: &Matrix, scale: ColorScale) -> RgbaImage {
    let range = matrix.value_range();
    let mut img = RgbaImage::new(matrix.cols() as u32, matrix.rows() as u32);

    for row in 0..matrix.rows() {
        for col in 0..matrix.cols() {
            let v = matrix.get(row, col);
            let pixel = if v.is_finite() {
                let t = range.map_or(0.5, |r| r.normalize(v));
                let c = scale.sample(t);
                Rgba([c.r(), c.g(), c.b(), 255])
            } else {
                Rgba([0, 0, 0, 0])
            };
            img.put_pixel(col as u32, row as u32, pixel);
        }
    }
    img
}

/// Export the heatmap as a PNG file, one pixel per cell.
pub fn write_png(matrix: &Matrix, scale: ColorScale, path: &Path) -> Result<()> {
    to_rgba_image(matrix, scale)
        .save(path)
        .with_context(|| format!("writing {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn make_temp_dir() -> PathBuf {
        let mut dir = std::env::temp_dir();
        let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
        dir.push(format!("heatview_raster_{}_{}", std::process::id(), id));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn sample_matrix() -> Matrix {
        Matrix::from_rows(vec![vec![0.0, 1.0, 2.0], vec![3.0, 4.0, 5.0]]).unwrap()
    }

    #[test]
    fn color_image_has_matrix_dimensions() {
        let img = to_color_image(&sample_matrix(), ColorScale::Thermal);
        assert_eq!(img.size, [3, 2]);
        assert_eq!(img.pixels.len(), 6);
    }

    #[test]
    fn extremes_map_to_scale_endpoints() {
        let img = to_color_image(&sample_matrix(), ColorScale::Grayscale);
        // Min value → t = 0, max value → t = 1.
        assert_eq!(img.pixels[0], ColorScale::Grayscale.sample(0.0));
        assert_eq!(img.pixels[5], ColorScale::Grayscale.sample(1.0));
    }

    #[test]
    fn flat_matrix_uses_midpoint_colour() {
        let m = Matrix::from_rows(vec![vec![2.0, 2.0], vec![2.0, 2.0]]).unwrap();
        let img = to_color_image(&m, ColorScale::Viridis);
        for p in &img.pixels {
            assert_eq!(*p, ColorScale::Viridis.sample(0.5));
        }
    }

    #[test]
    fn non_finite_cells_are_transparent() {
        let m = Matrix::from_rows(vec![vec![1.0, f64::NAN]]).unwrap();
        let img = to_color_image(&m, ColorScale::Thermal);
        assert_eq!(img.pixels[1], Color32::TRANSPARENT);

        let rgba = to_rgba_image(&m, ColorScale::Thermal);
        assert_eq!(rgba.get_pixel(1, 0).0[3], 0);
    }

    #[test]
    fn png_export_round_trips_dimensions() {
        let dir = make_temp_dir();
        let path = dir.join("heatmap.png");

        write_png(&sample_matrix(), ColorScale::Thermal, &path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
    }
}
