//! Simulation module
//!
//! All physics lives here. This module must stay deterministic:
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - Caller-supplied timestamps, no clock reads
//! - No rendering or platform dependencies

pub mod arena;
pub mod collision;
pub mod state;
pub mod tick;

pub use arena::Arena;
pub use collision::{Contact, apply_bounce_boost, ball_contact, reflect_velocity, wall_contact};
pub use state::{AliveState, Ball, BallId, BallView, CollisionState, Simulation, Snapshot};
pub use tick::{TickSummary, tick, total_overlap};
