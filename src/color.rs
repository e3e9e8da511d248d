use eframe::egui::Color32;
use palette::{Mix, Srgb};

// ---------------------------------------------------------------------------
// Viridis colour scale
// ---------------------------------------------------------------------------

/// Viridis sampled at t = 0.0, 0.1, …, 1.0.
const VIRIDIS: [(u8, u8, u8); 11] = [
    (68, 1, 84),
    (72, 36, 117),
    (65, 68, 135),
    (53, 95, 141),
    (42, 120, 142),
    (33, 145, 140),
    (34, 168, 132),
    (68, 191, 112),
    (122, 209, 81),
    (189, 223, 38),
    (253, 231, 37),
];

/// Colour for values that cannot be placed on the scale (NaN, ±inf).
pub const INVALID_COLOR: Color32 = Color32::GRAY;

/// Viridis colour at position `t` in `[0, 1]`; out-of-range input is clamped.
pub fn viridis(t: f32) -> Color32 {
    if t.is_nan() {
        return INVALID_COLOR;
    }
    let last = VIRIDIS.len() - 1;
    let scaled = t.clamp(0.0, 1.0) * last as f32;
    let i = (scaled.floor() as usize).min(last - 1);
    let frac = scaled - i as f32;

    let stop = |(r, g, b): (u8, u8, u8)| Srgb::new(r, g, b).into_format::<f32>();
    let mixed: Srgb<u8> = stop(VIRIDIS[i])
        .mix(stop(VIRIDIS[i + 1]), frac)
        .into_format();
    Color32::from_rgb(mixed.red, mixed.green, mixed.blue)
}

// ---------------------------------------------------------------------------
// Value → colour mapping
// ---------------------------------------------------------------------------

/// Linear mapping of a value range onto viridis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
}

impl ColorScale {
    /// Span the finite values of `values`. Without any finite value the
    /// scale collapses to `[0, 0]`.
    pub fn from_values(values: &[f64]) -> Self {
        let (min, max) = values
            .iter()
            .copied()
            .filter(|v| v.is_finite())
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
                (lo.min(v), hi.max(v))
            });
        if min > max {
            ColorScale { min: 0.0, max: 0.0 }
        } else {
            ColorScale { min, max }
        }
    }

    /// Position of `value` on the scale. A scale whose width is lost in the
    /// rounding of its endpoints puts everything at the low end.
    pub fn normalize(&self, value: f64) -> Option<f32> {
        if !value.is_finite() {
            return None;
        }
        let range = self.max - self.min;
        let magnitude = self.min.abs().max(self.max.abs());
        if range <= magnitude * f64::EPSILON {
            return Some(0.0);
        }
        Some(((value - self.min) / range).clamp(0.0, 1.0) as f32)
    }

    /// Look up the colour for a value.
    pub fn color_for(&self, value: f64) -> Color32 {
        self.normalize(value).map_or(INVALID_COLOR, viridis)
    }
}
