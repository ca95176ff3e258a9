//! Render-facing data
//!
//! The window, draw calls and frame pacing live outside this crate. This
//! module only turns simulation state into plain GPU-uploadable structs.

pub mod instance;

pub use instance::{BallInstance, FrameUniforms, collect_instances, instance_bytes};
