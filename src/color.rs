use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Sequential colour ramp: count → Color32
// ---------------------------------------------------------------------------

const HUE: f32 = 215.0;
const LIGHTNESS_LOW: f32 = 0.72;
const LIGHTNESS_HIGH: f32 = 0.38;

/// Maps bar counts onto a single-hue ramp: small counts light, large counts dark.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountRamp {
    min: usize,
    max: usize,
}

impl CountRamp {
    /// Build a ramp spanning the given counts. An empty slice gives a flat ramp.
    pub fn new(counts: &[usize]) -> Self {
        let min = counts.iter().copied().min().unwrap_or(0);
        let max = counts.iter().copied().max().unwrap_or(0);
        CountRamp { min, max }
    }

    /// Position of `count` on the ramp in `[0, 1]`.
    fn position(&self, count: usize) -> f32 {
        if self.max <= self.min {
            return 1.0;
        }
        let clamped = count.clamp(self.min, self.max);
        (clamped - self.min) as f32 / (self.max - self.min) as f32
    }

    /// Look up the colour for a given count.
    pub fn color_for(&self, count: usize) -> Color32 {
        let t = self.position(count);
        let lightness = LIGHTNESS_LOW + (LIGHTNESS_HIGH - LIGHTNESS_LOW) * t;
        let rgb: Srgb = Hsl::new(HUE, 0.65, lightness).into_color();
        Color32::from_rgb(
            (rgb.red * 255.0) as u8,
            (rgb.green * 255.0) as u8,
            (rgb.blue * 255.0) as u8,
        )
    }
}
