//! Circular arena boundary
//!
//! The arena never moves or resizes once built. Wall tests use the direction
//! from the arena center to the ball center as the wall normal, not the true
//! contact normal; for balls much smaller than the arena the two coincide.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::cartesian_to_polar;

/// Static circular boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub center: Vec2,
    pub radius: f32,
}

impl Arena {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Distance from the arena center to `pos`
    #[inline]
    pub fn distance_from_center(&self, pos: Vec2) -> f32 {
        pos.distance(self.center)
    }

    /// Angular position of `pos` around the arena center (atan2 convention)
    #[inline]
    pub fn angle_of(&self, pos: Vec2) -> f32 {
        cartesian_to_polar(self.center, pos).1
    }

    /// True if the ball's outer edge is past the wall
    #[inline]
    pub fn is_outside(&self, pos: Vec2, radius: f32) -> bool {
        self.distance_from_center(pos) + radius > self.radius
    }

    /// How far the ball's edge sticks out past the wall (0 if inside)
    pub fn penetration(&self, pos: Vec2, radius: f32) -> f32 {
        (self.distance_from_center(pos) + radius - self.radius).max(0.0)
    }

    /// Outward unit normal at angular position `theta`
    #[inline]
    pub fn outward_normal(theta: f32) -> Vec2 {
        Vec2::new(theta.cos(), theta.sin())
    }

    /// True if a ball this large can never fit inside
    #[inline]
    pub fn is_oversize(&self, radius: f32) -> bool {
        radius > self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn arena() -> Arena {
        Arena::new(Vec2::new(400.0, 400.0), 380.0)
    }

    #[test]
    fn test_is_outside() {
        let a = arena();
        assert!(!a.is_outside(Vec2::new(400.0, 400.0), 20.0));
        assert!(!a.is_outside(Vec2::new(759.0, 400.0), 20.0));
        assert!(a.is_outside(Vec2::new(761.0, 400.0), 20.0));
        assert!(a.is_outside(Vec2::new(400.0, 39.0), 20.0));
    }

    #[test]
    fn test_penetration() {
        let a = arena();
        assert_eq!(a.penetration(Vec2::new(400.0, 400.0), 20.0), 0.0);
        assert!((a.penetration(Vec2::new(770.0, 400.0), 20.0) - 10.0).abs() < 1e-3);
    }

    #[test]
    fn test_angle_and_normal() {
        let a = arena();
        let theta = a.angle_of(Vec2::new(400.0, 500.0));
        assert!((theta - FRAC_PI_2).abs() < 1e-5);

        let n = Arena::outward_normal(PI);
        assert!((n - Vec2::new(-1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn test_oversize() {
        let a = arena();
        assert!(!a.is_oversize(380.0));
        assert!(a.is_oversize(380.5));
    }
}
