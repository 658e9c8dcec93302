use eframe::egui::Color32;
use palette::{LinSrgb, Mix, Srgb};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Continuous colour scales: normalized value → Color32
// ---------------------------------------------------------------------------

/// A continuous colour scale.  Sampling at `t ∈ [0, 1]` interpolates between
/// the scale's gradient stops in linear RGB.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorScale {
    Thermal,
    Viridis,
    Grayscale,
}

/// Gradient stop: position in `[0, 1]` and an sRGB colour.
type Stop = (f32, [f32; 3]);

const THERMAL_STOPS: &[Stop] = &[
    (0.00, [0.0, 0.0, 0.0]),
    (0.36, [0.9, 0.0, 0.0]),
    (0.75, [1.0, 0.9, 0.0]),
    (1.00, [1.0, 1.0, 1.0]),
];

const VIRIDIS_STOPS: &[Stop] = &[
    (0.00, [0.267, 0.005, 0.329]),
    (0.25, [0.229, 0.322, 0.546]),
    (0.50, [0.128, 0.567, 0.551]),
    (0.75, [0.369, 0.789, 0.383]),
    (1.00, [0.993, 0.906, 0.144]),
];

const GRAYSCALE_STOPS: &[Stop] = &[(0.00, [0.0, 0.0, 0.0]), (1.00, [1.0, 1.0, 1.0])];

impl ColorScale {
    pub const ALL: [ColorScale; 3] = [
        ColorScale::Thermal,
        ColorScale::Viridis,
        ColorScale::Grayscale,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ColorScale::Thermal => "Thermal",
            ColorScale::Viridis => "Viridis",
            ColorScale::Grayscale => "Grayscale",
        }
    }

    fn stops(&self) -> &'static [Stop] {
        match self {
            ColorScale::Thermal => THERMAL_STOPS,
            ColorScale::Viridis => VIRIDIS_STOPS,
            ColorScale::Grayscale => GRAYSCALE_STOPS,
        }
    }

    /// Sample the scale at `t`, clamped to `[0, 1]`.
    pub fn sample(&self, t: f64) -> Color32 {
        let t = t.clamp(0.0, 1.0) as f32;
        let stops = self.stops();

        // Find the surrounding pair of stops and mix in linear RGB.
        let mut lower = stops[0];
        let mut upper = stops[stops.len() - 1];
        for window in stops.windows(2) {
            if t >= window[0].0 && t <= window[1].0 {
                lower = window[0];
                upper = window[1];
                break;
            }
        }

        let span = upper.0 - lower.0;
        let local = if span <= f32::EPSILON {
            0.0
        } else {
            (t - lower.0) / span
        };

        let a: LinSrgb = Srgb::new(lower.1[0], lower.1[1], lower.1[2]).into_linear();
        let b: LinSrgb = Srgb::new(upper.1[0], upper.1[1], upper.1[2]).into_linear();
        let mixed: Srgb = Srgb::from_linear(a.mix(b, local));

        Color32::from_rgb(
            (mixed.red * 255.0).round() as u8,
            (mixed.green * 255.0).round() as u8,
            (mixed.blue * 255.0).round() as u8,
        )
    }
}

impl Default for ColorScale {
    fn default() -> Self {
        ColorScale::Thermal
    }
}
