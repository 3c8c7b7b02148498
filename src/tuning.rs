//! Data-driven physics and gameplay balance
//!
//! Every constant that shapes game feel lives in [`Tuning`] so hosts can
//! adjust difficulty without touching simulation code. A `Tuning` is
//! validated once when the game state is built; the simulation assumes the
//! invariants hold from then on and never re-checks them mid-run.

use glam::Vec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Configuration rejected at startup
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("radius must be positive, got {0}")]
    NonPositiveRadius(f32),

    #[error("friction must be in (0, 1], got {0}")]
    InvalidFriction(f32),

    #[error("hole growth factor must be at least 1, got {0}")]
    InvalidGrowth(f32),

    #[error("stage set must define at least one stage")]
    EmptyStageSet,

    #[error("arena min must be strictly below max on every axis")]
    InvalidArena,
}

/// Simulation-wide physics and gameplay parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tuning {
    /// Acceleration applied to every moving body each step
    pub gravity: Vec3,
    /// Velocity damping applied after any collision, in (0, 1]
    pub friction: f32,
    /// Hole movement speed in units/sec
    pub hole_speed: f32,
    /// Hole radius at game start
    pub hole_start_radius: f32,
    /// Multiplicative hole growth when a body scores with others in play
    pub hole_growth: f32,
    /// Bodies falling below this depth are scored and removed
    pub score_depth: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, GRAVITY_Y, 0.0),
            friction: FRICTION_SLOWDOWN,
            hole_speed: HOLE_SPEED,
            hole_start_radius: HOLE_START_RADIUS,
            hole_growth: HOLE_GROWTH_FACTOR,
            score_depth: SCORE_DEPTH,
        }
    }
}

impl Tuning {
    /// Check the invariants the simulation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.friction > 0.0 && self.friction <= 1.0) {
            return Err(ConfigError::InvalidFriction(self.friction));
        }
        if !(self.hole_growth >= 1.0) {
            return Err(ConfigError::InvalidGrowth(self.hole_growth));
        }
        if !(self.hole_start_radius > 0.0) {
            return Err(ConfigError::NonPositiveRadius(self.hole_start_radius));
        }
        Ok(())
    }
}
