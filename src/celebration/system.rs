//! Fireworks and confetti launched when a game is won.

use super::color::Hue;
use super::particle::Particle;
use crate::bridge::{DisplaySurface, SurfaceSize};
use crate::config::{CelebrationConfig, ParticleProfile};
use rand::Rng;
use tracing::{debug, info, instrument, trace};

/// Owns every live celebration particle.
///
/// Burst (fireworks) and rain (confetti) particles live in separate
/// collections because they are pruned by different rules.
#[derive(Debug, Clone, Default)]
pub struct ParticleSystem {
    settings: CelebrationConfig,
    burst: Vec<Particle>,
    rain: Vec<Particle>,
}

impl ParticleSystem {
    /// Creates an idle system.
    pub fn new(settings: CelebrationConfig) -> Self {
        Self {
            settings,
            burst: Vec::new(),
            rain: Vec::new(),
        }
    }

    /// Replaces any running celebration with a fresh one.
    #[instrument(skip(self, rng))]
    pub fn launch<R: Rng + ?Sized>(&mut self, surface: SurfaceSize, rng: &mut R) {
        self.clear();

        let s = &self.settings;
        self.burst.reserve(s.bursts() * s.particles_per_burst());
        for _ in 0..*s.bursts() {
            let x = sample(rng, 0.0, surface.width);
            let y = sample(rng, 0.0, surface.height / 2.0);
            debug!(x, y, "Burst origin");
            for _ in 0..*s.particles_per_burst() {
                self.burst.push(spawn(rng, x, y, s.burst()));
            }
        }

        self.rain.reserve(*s.rain_count());
        for _ in 0..*s.rain_count() {
            let x = sample(rng, 0.0, surface.width);
            self.rain.push(spawn(rng, x, *s.rain_start_y(), s.rain()));
        }

        info!(
            burst = self.burst.len(),
            rain = self.rain.len(),
            "Celebration launched"
        );
    }

    /// Advances every particle one frame, then drops the dead ones.
    pub fn tick(&mut self, surface: SurfaceSize) {
        if self.is_idle() {
            return;
        }

        self.burst.iter_mut().for_each(Particle::update);
        self.rain.iter_mut().for_each(Particle::update);

        let floor = surface.height + self.settings.rain_margin();
        self.burst.retain(|p| !p.is_faded());
        self.rain.retain(|p| !p.is_faded() && p.y <= floor);

        trace!(burst = self.burst.len(), rain = self.rain.len(), "Tick");
    }

    /// Paints live particles, fireworks first, each in insertion order.
    pub fn render<S: DisplaySurface + ?Sized>(&self, surface: &mut S) {
        for p in self.burst.iter().chain(&self.rain) {
            surface.fill_circle(p.x, p.y, p.size, p.color, p.alpha);
        }
    }

    /// Drops every particle.
    pub fn clear(&mut self) {
        self.burst.clear();
        self.rain.clear();
    }

    /// True when nothing is left to draw.
    pub fn is_idle(&self) -> bool {
        self.burst.is_empty() && self.rain.is_empty()
    }

    /// Total live particles.
    pub fn len(&self) -> usize {
        self.burst.len() + self.rain.len()
    }

    /// Returns true when no particles are alive.
    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }

    /// Live firework particles.
    pub fn burst(&self) -> &[Particle] {
        &self.burst
    }

    /// Live confetti particles.
    pub fn rain(&self) -> &[Particle] {
        &self.rain
    }
}

fn spawn<R: Rng + ?Sized>(rng: &mut R, x: f64, y: f64, profile: &ParticleProfile) -> Particle {
    let spread = *profile.spread();
    Particle::new(
        x,
        y,
        Hue::new(rng.gen_range(0.0..360.0)),
        sample(rng, *profile.size_min(), *profile.size_max()),
        sample(rng, *profile.speed_min(), *profile.speed_max()),
        profile.heading() + sample(rng, -spread, spread),
        *profile.gravity(),
        *profile.fade(),
    )
}

/// Uniform in `[lo, hi)`; collapses to `lo` when the range is empty.
fn sample<R: Rng + ?Sized>(rng: &mut R, lo: f64, hi: f64) -> f64 {
    if hi > lo { rng.gen_range(lo..hi) } else { lo }
}
