//! Ball and ensemble state
//!
//! `Simulation` owns the one authoritative ball list. Active/inert/alive
//! subsets are derived from per-ball state, never stored separately.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::Arena;
use crate::color::{Rgb, generate_vibrant_color};
use crate::error::{SimError, SimResult};
use crate::settings::SimConfig;

/// Stable handle to a spawned ball
pub type BallId = u32;

/// Whether a ball takes part in ball-ball collisions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionState {
    /// Collides with other active balls; can still die from overspeed
    Active,
    /// Went over the death velocity. Only bounces off the wall from now on
    Inert,
}

/// Whether a ball is still part of the ensemble
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliveState {
    Alive,
    /// Marked for removal; dropped at the end of the tick
    Removed,
}

/// A ball entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub id: BallId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub collision: CollisionState,
    pub alive: AliveState,
    /// Timestamp (ms) of the last collision this ball initiated
    pub last_collision_ms: Option<u64>,
    /// Minimum gap (ms) between collisions this ball initiates
    pub collision_cooldown_ms: u64,
}

impl Ball {
    pub fn new(
        id: BallId,
        pos: Vec2,
        vel: Vec2,
        radius: f32,
        color: Rgb,
        cooldown_ms: u64,
    ) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
            collision: CollisionState::Active,
            alive: AliveState::Alive,
            last_collision_ms: None,
            collision_cooldown_ms: cooldown_ms,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.collision == CollisionState::Active && self.alive == AliveState::Alive
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive == AliveState::Alive
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// True if this ball may initiate a collision response at `now_ms`
    pub fn cooldown_ready(&self, now_ms: u64) -> bool {
        match self.last_collision_ms {
            None => true,
            Some(last) => now_ms.saturating_sub(last) > self.collision_cooldown_ms,
        }
    }

    /// Active -> Inert. No-op if already inert
    pub fn go_inert(&mut self, death_color: Rgb) {
        if self.collision == CollisionState::Active {
            log::debug!("Ball {} went inert at speed {:.2}", self.id, self.speed());
        }
        self.collision = CollisionState::Inert;
        self.color = death_color;
    }

    /// Alive -> Removed. The ball is dropped at the end of the tick
    pub fn mark_removed(&mut self) {
        self.alive = AliveState::Removed;
    }
}

/// Read-only view of a ball handed to `for_each_ball` visitors
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub id: BallId,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
    pub collision: CollisionState,
    pub alive: AliveState,
}

impl From<&Ball> for BallView {
    fn from(ball: &Ball) -> Self {
        Self {
            id: ball.id,
            pos: ball.pos,
            radius: ball.radius,
            color: ball.color,
            collision: ball.collision,
            alive: ball.alive,
        }
    }
}

/// Serializable dump of the ensemble
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub time_ticks: u64,
    pub arena: Arena,
    pub balls: Vec<Ball>,
}

/// The simulation: arena, configuration, and every live ball
#[derive(Debug, Clone)]
pub struct Simulation {
    pub config: SimConfig,
    pub arena: Arena,
    /// All balls, in spawn order
    pub balls: Vec<Ball>,
    /// Number of completed ticks
    pub time_ticks: u64,
    pub(crate) rng: Pcg32,
    next_id: BallId,
}

impl Simulation {
    /// Build a simulation from a validated config
    pub fn new(config: SimConfig) -> SimResult<Self> {
        config.validate()?;
        let arena = Arena::new(config.arena_center, config.arena_radius);
        log::info!(
            "Simulation created: arena center=({}, {}) radius={} seed={}",
            arena.center.x,
            arena.center.y,
            arena.radius,
            config.seed
        );
        Ok(Self {
            rng: Pcg32::seed_from_u64(config.seed),
            config,
            arena,
            balls: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        })
    }

    /// Allocate a new ball ID
    fn next_ball_id(&mut self) -> BallId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an active ball with a random initial velocity
    pub fn spawn_ball(&mut self, pos: Vec2, radius: f32) -> SimResult<BallId> {
        let range = self.config.velocity_random;
        let vel = Vec2::new(
            self.rng.random_range(-range..=range),
            self.rng.random_range(-range..=range),
        );
        self.spawn_ball_with_velocity(pos, radius, vel)
    }

    /// Spawn an active ball with a chosen velocity
    pub fn spawn_ball_with_velocity(
        &mut self,
        pos: Vec2,
        radius: f32,
        vel: Vec2,
    ) -> SimResult<BallId> {
        if !(radius.is_finite() && radius > 0.0) {
            log::warn!("Rejected spawn with radius {}", radius);
            return Err(SimError::InvalidRadius(radius));
        }
        if !pos.is_finite() {
            log::warn!("Rejected spawn at ({}, {})", pos.x, pos.y);
            return Err(SimError::InvalidPosition(pos.x, pos.y));
        }
        let id = self.next_ball_id();
        let color = generate_vibrant_color(&mut self.rng);
        let vel = if vel.is_finite() { vel } else { Vec2::ZERO };
        self.balls.push(Ball::new(
            id,
            pos,
            vel,
            radius,
            color,
            self.config.collision_cooldown_ms,
        ));
        Ok(id)
    }

    /// Spawn a ball of the configured default radius (click / held button)
    pub fn spawn_default(&mut self, pos: Vec2) -> SimResult<BallId> {
        self.spawn_ball(pos, self.config.new_ball_radius)
    }

    /// Spawn a default ball at the arena center (space key)
    pub fn spawn_at_center(&mut self) -> SimResult<BallId> {
        self.spawn_default(self.arena.center)
    }

    /// Visit every ball still in the ensemble, in spawn order
    pub fn for_each_ball<F: FnMut(&BallView)>(&self, mut visitor: F) {
        for ball in self.balls.iter().filter(|b| b.is_alive()) {
            visitor(&BallView::from(ball));
        }
    }

    pub fn ball(&self, id: BallId) -> Option<&Ball> {
        self.balls.iter().find(|b| b.id == id && b.is_alive())
    }

    pub fn ball_mut(&mut self, id: BallId) -> Option<&mut Ball> {
        self.balls.iter_mut().find(|b| b.id == id && b.is_alive())
    }

    /// Number of balls in the ensemble
    pub fn len(&self) -> usize {
        self.balls.iter().filter(|b| b.is_alive()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Balls still taking part in ball-ball collisions
    pub fn active_count(&self) -> usize {
        self.balls.iter().filter(|b| b.is_active()).count()
    }

    pub fn inert_count(&self) -> usize {
        self.balls
            .iter()
            .filter(|b| b.is_alive() && b.collision == CollisionState::Inert)
            .count()
    }

    /// Sum of ½|v|² over all balls (unit mass)
    pub fn kinetic_energy(&self) -> f32 {
        self.balls
            .iter()
            .filter(|b| b.is_alive())
            .map(|b| 0.5 * b.vel.length_squared())
            .sum()
    }

    /// Drop balls marked `Removed`
    pub(crate) fn compact(&mut self) -> usize {
        let before = self.balls.len();
        self.balls.retain(Ball::is_alive);
        before - self.balls.len()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            time_ticks: self.time_ticks,
            arena: self.arena,
            balls: self.balls.iter().filter(|b| b.is_alive()).cloned().collect(),
        }
    }
}
