//! Rigid body state and integration
//!
//! Bodies are point-mass spheres: position, velocity, radius. No spin, no
//! angular state. Integration is semi-implicit Euler, so the position
//! update always sees the freshly updated velocity.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// A simulated sphere
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RigidBody {
    /// Stable identifier; renderers reference bodies by id
    pub id: u32,
    pub pos: Vec3,
    pub vel: Vec3,
    pub radius: f32,
    /// RGB passthrough for the renderer; physics never reads it
    pub color: Vec3,
}

impl RigidBody {
    pub fn new(id: u32, pos: Vec3, radius: f32, vel: Vec3, color: Vec3) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Advance one semi-implicit Euler step.
    ///
    /// Bodies at exact rest are skipped: they stay put until something
    /// collides with them, and no zero-length vector ever reaches a
    /// downstream normalize.
    pub fn integrate(&mut self, gravity: Vec3, dt: f32) {
        if self.vel == Vec3::ZERO {
            return;
        }
        self.vel += gravity * dt;
        self.pos += self.vel * dt;
    }
}
