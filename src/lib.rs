//! Ball Pit - balls bouncing around a circular arena
//!
//! Core modules:
//! - `sim`: Simulation core (arena, collisions, ball life-cycle, tick)
//! - `settings`: Tunables passed into the simulation at construction
//! - `color`: Vibrant color generation for new balls
//! - `renderer`: GPU-ready instance data for whatever draws the frame

pub mod color;
pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use color::Rgb;
pub use error::{SimError, SimResult};
pub use settings::{Preset, SimConfig};

use glam::Vec2;

/// Default tunables
pub mod consts {
    /// Nominal step rate the driver calls `tick` at
    pub const SIM_HZ: u32 = 60;
    /// Milliseconds between nominal steps
    pub const STEP_MS: u64 = 1000 / SIM_HZ as u64;

    /// Window edge length the default arena is fitted to
    pub const WINDOW_SIZE: f32 = 600.0;
    /// Gap between arena wall and window edge
    pub const ARENA_MARGIN: f32 = 20.0;
    pub const ARENA_RADIUS: f32 = WINDOW_SIZE / 2.0 - ARENA_MARGIN;

    /// Ball defaults
    pub const NEW_BALL_RADIUS: f32 = 15.0;
    /// Initial velocity components are drawn from [-VELOCITY_RANDOM, VELOCITY_RANDOM]
    pub const VELOCITY_RANDOM: f32 = 2.0;
    /// Speed above which a ball stops colliding with others
    pub const DEATH_VELOCITY: f32 = 10.0;
    pub const COLLISION_COOLDOWN_MS: u64 = 50;

    /// Wall reflection jitter (radians, ±)
    pub const ANGLE_JITTER: f32 = 0.01;

    pub const DEFAULT_SEED: u64 = 0x5eed_ba11;
}

/// Convert cartesian `pos` to polar (r, theta) around `center`
#[inline]
pub fn cartesian_to_polar(center: Vec2, pos: Vec2) -> (f32, f32) {
    let d = pos - center;
    (d.length(), d.y.atan2(d.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_polar_offset_center() {
        let center = Vec2::new(300.0, 300.0);
        let (r, theta) = cartesian_to_polar(center, Vec2::new(300.0, 350.0));
        assert!((r - 50.0).abs() < 1e-4);
        assert!((theta - FRAC_PI_2).abs() < 1e-5);
    }

    #[test]
    fn test_default_arena_fits_window() {
        assert_eq!(consts::ARENA_RADIUS, 280.0);
        assert_eq!(consts::STEP_MS, 16);
    }
}
