//! One simulation step
//!
//! Each ball, in spawn order, runs: integrate, wall bounce, ball-ball
//! collisions (active balls only), drag, life-cycle checks. Corrections made
//! while resolving ball A are visible to every ball processed after it in the
//! same pass. Removed balls are only marked during the pass and dropped at
//! the end.

use glam::Vec2;
use rand::Rng;

use super::collision::{apply_bounce_boost, ball_contact, reflect_velocity, separate, wall_contact};
use super::state::{Ball, BallId, Simulation};

/// What happened during one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickSummary {
    /// Balls that bounced off the arena wall
    pub wall_bounces: u32,
    /// Accepted ball-ball responses (one per initiating ball)
    pub ball_collisions: u32,
    /// Deepest a bouncing ball's edge was past the wall
    pub max_wall_penetration: f32,
    /// Balls that went inert this tick
    pub died: Vec<BallId>,
    /// Balls removed from the ensemble this tick
    pub removed: Vec<BallId>,
}

/// Advance the simulation by one step at wall-clock time `now_ms`.
///
/// Exactly one step per call; the caller picks the cadence.
pub fn tick(sim: &mut Simulation, now_ms: u64) -> TickSummary {
    let mut summary = TickSummary::default();

    for i in 0..sim.balls.len() {
        if !sim.balls[i].is_alive() {
            continue;
        }

        // Integrate (one unit step per tick)
        let vel = sim.balls[i].vel;
        sim.balls[i].pos += vel;

        if let Some(penetration) = collide_wall(sim, i) {
            summary.wall_bounces += 1;
            summary.max_wall_penetration = summary.max_wall_penetration.max(penetration);
        }

        if sim.balls[i].is_active() && collide_balls(sim, i, now_ms) {
            summary.ball_collisions += 1;
        }

        let drag = sim.config.drag_multiplier;
        let death_velocity = sim.config.death_velocity;
        let death_color = sim.config.death_color;
        let oversize = sim.arena.is_oversize(sim.balls[i].radius);

        let ball = &mut sim.balls[i];
        ball.vel *= drag;

        if oversize {
            log::info!(
                "Ball {} removed: radius {} exceeds arena",
                ball.id,
                ball.radius
            );
            ball.mark_removed();
            summary.removed.push(ball.id);
            continue;
        }

        if ball.is_active() && ball.speed() > death_velocity {
            ball.go_inert(death_color);
            summary.died.push(ball.id);
        }
    }

    sim.compact();
    sim.time_ticks += 1;
    summary
}

/// Reflect ball `i` off the arena wall if its edge is past it.
///
/// Velocity only; the ball is not pushed back inside. Returns how far the
/// edge was past the wall if it bounced.
fn collide_wall(sim: &mut Simulation, i: usize) -> Option<f32> {
    let (pos, radius) = (sim.balls[i].pos, sim.balls[i].radius);
    let spread = sim.config.angle_jitter;
    let rng = &mut sim.rng;

    let contact = wall_contact(&sim.arena, pos, radius, || {
        if spread > 0.0 {
            rng.random_range(-spread..=spread)
        } else {
            0.0
        }
    })?;

    let ball = &mut sim.balls[i];
    ball.vel = reflect_velocity(ball.vel, contact.normal);
    ball.vel = apply_bounce_boost(ball.vel, sim.config.wall_bounce_increase);
    Some(contact.penetration)
}

/// Resolve ball `i` against every other active ball.
///
/// Only ball `i`'s cooldown gates the response; the other ball is pushed and
/// reflected whatever its own cooldown says, and its timestamp is untouched.
/// Returns true if ball `i` initiated a response this tick.
fn collide_balls(sim: &mut Simulation, i: usize, now_ms: u64) -> bool {
    if !sim.config.balls_collide {
        return false;
    }

    let boost = sim.config.collide_bounce_increase;
    let mut initiated = false;

    for j in 0..sim.balls.len() {
        if j == i || !sim.balls[j].is_active() {
            continue;
        }

        let (me, other) = pair_mut(&mut sim.balls, i, j);
        let Some(contact) = ball_contact(me.pos, me.radius, other.pos, other.radius) else {
            continue;
        };
        if !me.cooldown_ready(now_ms) {
            continue;
        }
        me.last_collision_ms = Some(now_ms);

        (me.pos, other.pos) = separate(me.pos, other.pos, &contact);

        me.vel = reflect_velocity(me.vel, contact.normal);
        other.vel = reflect_velocity(other.vel, contact.normal);

        me.vel = apply_bounce_boost(me.vel, boost);
        initiated = true;
    }

    initiated
}

/// Mutable references to two distinct balls
fn pair_mut(balls: &mut [Ball], i: usize, j: usize) -> (&mut Ball, &mut Ball) {
    debug_assert_ne!(i, j);
    if i < j {
        let (head, tail) = balls.split_at_mut(j);
        (&mut head[i], &mut tail[0])
    } else {
        let (head, tail) = balls.split_at_mut(i);
        (&mut tail[0], &mut head[j])
    }
}

/// Total displacement needed to clear every active overlap (diagnostics)
pub fn total_overlap(sim: &Simulation) -> f32 {
    let active: Vec<(Vec2, f32)> = sim
        .balls
        .iter()
        .filter(|b| b.is_active())
        .map(|b| (b.pos, b.radius))
        .collect();

    let mut total = 0.0;
    for (a, &(pa, ra)) in active.iter().enumerate() {
        for &(pb, rb) in &active[a + 1..] {
            if let Some(contact) = ball_contact(pa, ra, pb, rb) {
                total += contact.penetration;
            }
        }
    }
    total
}
