use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Pollutant;

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: pollutant → Color32
// ---------------------------------------------------------------------------

/// Maps each pollutant to a distinct colour, stable across frames.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: [Color32; 6],
}

impl Default for ColorMap {
    fn default() -> Self {
        let palette = generate_palette(Pollutant::ALL.len());
        let mut colors = [Color32::GRAY; 6];
        for (slot, color) in colors.iter_mut().zip(palette) {
            *slot = color;
        }
        ColorMap { colors }
    }
}

impl ColorMap {
    /// Look up the colour for a pollutant.
    pub fn color_for(&self, pollutant: Pollutant) -> Color32 {
        self.colors[pollutant as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colors_for_six_slices() {
        let palette = generate_palette(6);
        assert_eq!(palette.len(), 6);
        for (i, a) in palette.iter().enumerate() {
            for b in &palette[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_palette_is_empty() {
        assert!(generate_palette(0).is_empty());
    }
}
