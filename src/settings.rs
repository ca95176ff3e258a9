//! Simulation tunables
//!
//! Everything the physics core reads is gathered in `SimConfig` and handed to
//! the simulation at construction. Stored as JSON when persisted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::color::{DEATH_COLOR, Rgb};
use crate::consts::*;
use crate::error::{SimError, SimResult};

/// Named tuning presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Preset {
    /// Elastic bounces, no drag
    #[default]
    Classic,
    /// Every bounce adds a little speed, so balls eventually die
    Energetic,
    /// Slight drag, the pit calms down over time
    Damped,
}

impl Preset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Classic => "Classic",
            Preset::Energetic => "Energetic",
            Preset::Damped => "Damped",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Preset::Classic),
            "energetic" | "energy" => Some(Preset::Energetic),
            "damped" | "drag" => Some(Preset::Damped),
            _ => None,
        }
    }
}

/// Simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    pub arena_center: Vec2,
    pub arena_radius: f32,

    // === Energy ===
    /// Impulse added along the new velocity after a wall bounce
    pub wall_bounce_increase: f32,
    /// Impulse added to the initiating ball after a ball-ball bounce
    pub collide_bounce_increase: f32,
    /// Velocity multiplier applied every tick (1 = no drag)
    pub drag_multiplier: f32,

    // === Life-cycle ===
    /// Speed above which a ball goes inert
    pub death_velocity: f32,
    pub death_color: Rgb,

    // === Collisions ===
    /// Global ball-ball collision toggle
    pub balls_collide: bool,
    /// Per-ball minimum time between self-initiated collision responses
    pub collision_cooldown_ms: u64,
    /// Wall normal jitter (radians, ±)
    pub angle_jitter: f32,

    // === Spawning ===
    /// Initial velocity components are uniform in ±velocity_random
    pub velocity_random: f32,
    /// Radius used by input-driven spawns
    pub new_ball_radius: f32,

    /// RNG seed for jitter, initial velocities and colors
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            arena_center: Vec2::splat(WINDOW_SIZE / 2.0),
            arena_radius: ARENA_RADIUS,

            wall_bounce_increase: 0.0,
            collide_bounce_increase: 0.0,
            drag_multiplier: 1.0,

            death_velocity: DEATH_VELOCITY,
            death_color: DEATH_COLOR,

            balls_collide: true,
            collision_cooldown_ms: COLLISION_COOLDOWN_MS,
            angle_jitter: ANGLE_JITTER,

            velocity_random: VELOCITY_RANDOM,
            new_ball_radius: NEW_BALL_RADIUS,

            seed: DEFAULT_SEED,
        }
    }
}

impl SimConfig {
    /// Create a config from a preset (applies preset tunables over defaults)
    pub fn from_preset(preset: Preset) -> Self {
        let mut config = Self::default();
        config.apply_preset(preset);
        config
    }

    /// Apply a preset's energy tunables
    pub fn apply_preset(&mut self, preset: Preset) {
        match preset {
            Preset::Classic => {
                self.wall_bounce_increase = 0.0;
                self.collide_bounce_increase = 0.0;
                self.drag_multiplier = 1.0;
            }
            Preset::Energetic => {
                self.wall_bounce_increase = 0.1;
                self.collide_bounce_increase = 0.05;
                self.drag_multiplier = 1.0;
            }
            Preset::Damped => {
                self.wall_bounce_increase = 0.0;
                self.collide_bounce_increase = 0.0;
                self.drag_multiplier = 0.995;
            }
        }
    }

    /// Reject values the physics can't make sense of
    pub fn validate(&self) -> SimResult<()> {
        if !self.arena_center.is_finite() {
            return Err(SimError::InvalidConfig(
                "arena_center must be finite".to_string(),
            ));
        }
        if !(self.arena_radius.is_finite() && self.arena_radius > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "arena_radius must be positive, got {}",
                self.arena_radius
            )));
        }
        if !(self.drag_multiplier.is_finite() && self.drag_multiplier >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "drag_multiplier must be >= 0, got {}",
                self.drag_multiplier
            )));
        }
        if !(self.angle_jitter.is_finite() && self.angle_jitter >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "angle_jitter must be >= 0, got {}",
                self.angle_jitter
            )));
        }
        if !(self.velocity_random.is_finite() && self.velocity_random >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "velocity_random must be >= 0, got {}",
                self.velocity_random
            )));
        }
        if !(self.new_ball_radius.is_finite() && self.new_ball_radius > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "new_ball_radius must be positive, got {}",
                self.new_ball_radius
            )));
        }
        if self.death_velocity.is_nan()
            || self.wall_bounce_increase.is_nan()
            || self.collide_bounce_increase.is_nan()
        {
            return Err(SimError::InvalidConfig("NaN tunable".to_string()));
        }
        Ok(())
    }

    pub fn from_json(json: &str) -> SimResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> SimResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> SimResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> SimResult<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Config saved to {}", path.display());
        Ok(())
    }
}
