//! Collision detection and response
//!
//! Two kinds of contact: a ball against the arena wall, and a ball against
//! another ball. Both respond by reflecting velocity about a unit normal;
//! only ball-ball contacts correct positions.

use glam::Vec2;

use super::arena::Arena;

/// Result of a contact check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal used for reflection
    pub normal: Vec2,
    /// Overlap depth (for position correction)
    pub penetration: f32,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

/// Add a fixed-magnitude impulse along the current direction of travel.
///
/// A ball at rest has no direction, so it gets nothing.
#[inline]
pub fn apply_bounce_boost(velocity: Vec2, magnitude: f32) -> Vec2 {
    velocity + velocity.normalize_or_zero() * magnitude
}

/// Check a ball against the arena wall.
///
/// `jitter` is only called on contact; its result is added to the ball's
/// angular position before building the normal. Return 0 for an exact
/// radial normal.
pub fn wall_contact<F>(arena: &Arena, pos: Vec2, radius: f32, jitter: F) -> Option<Contact>
where
    F: FnOnce() -> f32,
{
    if !arena.is_outside(pos, radius) {
        return None;
    }
    let theta = arena.angle_of(pos) + jitter();
    Some(Contact {
        normal: Arena::outward_normal(theta),
        penetration: arena.penetration(pos, radius),
    })
}

/// Check ball `a` against ball `b`.
///
/// The normal points from `b` toward `a`. Coincident centers have no defined
/// direction; they get +X so the pair still separates.
pub fn ball_contact(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> Option<Contact> {
    let reach = radius_a + radius_b;
    let offset = pos_a - pos_b;
    let distance = offset.length();
    if distance >= reach {
        return None;
    }
    let normal = if distance > f32::EPSILON {
        offset / distance
    } else {
        Vec2::X
    };
    Some(Contact {
        normal,
        penetration: reach - distance,
    })
}

/// Push two balls apart along `contact.normal`, half the overlap each.
///
/// Returns the corrected (a, b) positions.
#[inline]
pub fn separate(pos_a: Vec2, pos_b: Vec2, contact: &Contact) -> (Vec2, Vec2) {
    let push = contact.normal * (contact.penetration / 2.0);
    (pos_a + push, pos_b - push)
}
