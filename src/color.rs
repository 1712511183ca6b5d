use std::collections::BTreeMap;

use palette::{Hsl, IntoColor, Srgb};

use crate::data::Outcome;

/// 8-bit sRGB colour shared by the web and desktop front-ends.
pub type Rgb = Srgb<u8>;

pub const SUCCESS_COLOR: Rgb = Srgb::new(0, 128, 0);
pub const FAILURE_COLOR: Rgb = Srgb::new(255, 0, 0);
const DEFAULT_COLOR: Rgb = Srgb::new(128, 128, 128);

/// Fixed outcome colours: success green, failure red.
pub fn outcome_color(outcome: Outcome) -> Rgb {
    match outcome {
        Outcome::Success => SUCCESS_COLOR,
        Outcome::Failure => FAILURE_COLOR,
    }
}

/// `#rrggbb`, as understood by browsers and Plotly.
pub fn to_hex(c: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", c.red, c.green, c.blue)
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Rgb> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            rgb.into_format::<u8>()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: category label → colour
// ---------------------------------------------------------------------------

/// Maps category labels (sites, booster categories) to distinct colours.
///
/// Colours are assigned in the order the labels are given, so the same
/// dataset always yields the same mapping.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Rgb>,
    order: Vec<String>,
}

impl ColorMap {
    pub fn new<S: AsRef<str>>(labels: &[S]) -> Self {
        let palette = generate_palette(labels.len());
        let order: Vec<String> = labels.iter().map(|l| l.as_ref().to_string()).collect();
        let mapping = order.iter().cloned().zip(palette).collect();
        ColorMap { mapping, order }
    }

    /// Look up the colour for a label; unknown labels are grey.
    pub fn color_for(&self, label: &str) -> Rgb {
        self.mapping.get(label).copied().unwrap_or(DEFAULT_COLOR)
    }

    /// Legend entries (label → colour) in assignment order.
    pub fn legend_entries(&self) -> Vec<(String, Rgb)> {
        self.order
            .iter()
            .map(|label| (label.clone(), self.color_for(label)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_distinct_colours() {
        let p = generate_palette(5);
        assert_eq!(p.len(), 5);
        for i in 0..p.len() {
            for j in (i + 1)..p.len() {
                assert_ne!(p[i], p[j]);
            }
        }
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn color_map_is_stable_and_greys_unknowns() {
        let a = ColorMap::new(&["v1.0", "v1.1", "FT"]);
        let b = ColorMap::new(&["v1.0", "v1.1", "FT"]);
        assert_eq!(a.color_for("FT"), b.color_for("FT"));
        assert_eq!(a.color_for("B5"), DEFAULT_COLOR);
        let legend: Vec<String> = a.legend_entries().into_iter().map(|(l, _)| l).collect();
        assert_eq!(legend, vec!["v1.0", "v1.1", "FT"]);
    }

    #[test]
    fn hex_formatting() {
        assert_eq!(to_hex(SUCCESS_COLOR), "#008000");
        assert_eq!(to_hex(outcome_color(Outcome::Failure)), "#ff0000");
    }
}
