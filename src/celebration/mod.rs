//! Particle celebration shown when a game is won.

mod color;
mod particle;
mod system;

pub use color::Hue;
pub use particle::Particle;
pub use system::ParticleSystem;
