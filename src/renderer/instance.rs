//! Per-ball instance data for the draw layer

use bytemuck::{Pod, Zeroable};

use crate::color::{ARENA_COLOR, BACKGROUND_COLOR};
use crate::sim::{BallView, CollisionState, Simulation};

/// One filled circle, ready to upload as an instance buffer entry
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct BallInstance {
    pub center: [f32; 2],
    pub radius: f32,
    pub _pad: f32,
    pub color: [f32; 4],
}

impl BallInstance {
    pub fn new(center: [f32; 2], radius: f32, color: [f32; 4]) -> Self {
        Self {
            center,
            radius,
            _pad: 0.0,
            color,
        }
    }
}

impl From<&BallView> for BallInstance {
    fn from(ball: &BallView) -> Self {
        Self::new(ball.pos.to_array(), ball.radius, ball.color.to_rgba_f32())
    }
}

/// Frame-wide uniforms: arena disc and clear color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    pub arena_center: [f32; 2],
    pub arena_radius: f32,
    pub _pad: f32,
    pub arena_color: [f32; 4],
    pub background: [f32; 4],
}

impl FrameUniforms {
    pub fn from_sim(sim: &Simulation) -> Self {
        Self {
            arena_center: sim.arena.center.to_array(),
            arena_radius: sim.arena.radius,
            _pad: 0.0,
            arena_color: ARENA_COLOR.to_rgba_f32(),
            background: BACKGROUND_COLOR.to_rgba_f32(),
        }
    }
}

/// Build instances for every ball, inert balls first so active balls draw
/// on top of them
pub fn collect_instances(sim: &Simulation) -> Vec<BallInstance> {
    let mut inert = Vec::new();
    let mut active = Vec::with_capacity(sim.balls.len());
    sim.for_each_ball(|ball| match ball.collision {
        CollisionState::Inert => inert.push(BallInstance::from(ball)),
        CollisionState::Active => active.push(BallInstance::from(ball)),
    });
    inert.extend(active);
    inert
}

/// Raw bytes for uploading an instance slice
pub fn instance_bytes(instances: &[BallInstance]) -> &[u8] {
    bytemuck::cast_slice(instances)
}
