//! Particle colours.

use serde::{Deserialize, Serialize};

/// A fully saturated, half-lightness colour identified by its hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Hue(f64);

impl Hue {
    /// Creates a hue, wrapping into `0.0..360.0`.
    pub fn new(degrees: f64) -> Self {
        Self(degrees.rem_euclid(360.0))
    }

    /// Hue angle in degrees.
    pub fn degrees(self) -> f64 {
        self.0
    }

    /// Converts `hsl(h, 100%, 50%)` to 8-bit RGB.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        let h = self.0 / 60.0;
        // With s = 1 and l = 0.5 the chroma is 1.
        let x = 1.0 - (h.rem_euclid(2.0) - 1.0).abs();
        let (r, g, b) = match h as u32 {
            0 => (1.0, x, 0.0),
            1 => (x, 1.0, 0.0),
            2 => (0.0, 1.0, x),
            3 => (0.0, x, 1.0),
            4 => (x, 0.0, 1.0),
            _ => (1.0, 0.0, x),
        };
        let to_byte = |c: f64| (c * 255.0).round() as u8;
        (to_byte(r), to_byte(g), to_byte(b))
    }

    /// RGB scaled toward black by `alpha`, for hosts without real transparency.
    pub fn to_rgb_faded(self, alpha: f64) -> (u8, u8, u8) {
        let a = alpha.clamp(0.0, 1.0);
        let (r, g, b) = self.to_rgb();
        let scale = |c: u8| (f64::from(c) * a).round() as u8;
        (scale(r), scale(g), scale(b))
    }
}

impl std::fmt::Display for Hue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "hsl({:.0}, 100%, 50%)", self.0)
    }
}
