//! A single celebration particle.

use super::color::Hue;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A decaying, moving point.
///
/// Alpha starts at 1.0 and drops by `fade` every update, so it never rises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, new)]
pub struct Particle {
    /// Horizontal position.
    pub x: f64,
    /// Vertical position, growing downward.
    pub y: f64,
    /// Fill colour.
    pub color: Hue,
    /// Circle radius.
    pub size: f64,
    /// Distance travelled per update along `angle`.
    pub speed: f64,
    /// Heading in radians; `PI / 2` points straight down.
    pub angle: f64,
    /// Extra downward drift per update.
    pub gravity: f64,
    /// Alpha lost per update.
    pub fade: f64,
    /// Opacity.
    #[new(value = "1.0")]
    pub alpha: f64,
}

impl Particle {
    /// Advances one frame.
    pub fn update(&mut self) {
        self.x += self.angle.cos() * self.speed;
        self.y += self.angle.sin() * self.speed + self.gravity;
        self.alpha -= self.fade;
    }

    /// True once the particle is fully transparent.
    pub fn is_faded(&self) -> bool {
        self.alpha <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_new_particle_is_opaque() {
        let p = Particle::new(1.0, 2.0, Hue::new(10.0), 3.0, 4.0, 0.0, 0.05, 0.01);
        assert_eq!(p.alpha, 1.0);
        assert!(!p.is_faded());
    }

    #[test]
    fn test_update_moves_along_angle_plus_gravity() {
        let mut p = Particle::new(0.0, 0.0, Hue::new(0.0), 2.0, 2.0, FRAC_PI_2, 0.5, 0.25);
        p.update();
        assert!(p.x.abs() < 1e-9);
        assert!((p.y - 2.5).abs() < 1e-9);
        assert!((p.alpha - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_alpha_never_increases() {
        let mut p = Particle::new(0.0, 0.0, Hue::new(0.0), 2.0, 1.0, 0.3, 0.05, 0.015);
        let mut last = p.alpha;
        while !p.is_faded() {
            p.update();
            assert!(p.alpha < last);
            last = p.alpha;
        }
    }
}
