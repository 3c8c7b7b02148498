//! Sinkhole - deterministic core for a hole-in-the-ground arcade game
//!
//! Spheres bounce around a boxed arena while the player steers a circular
//! hole across the ground plane, trying to swallow every one of them.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, stage progression)
//! - `tuning`: Data-driven physics and gameplay balance
//!
//! Rendering, audio, camera, and raw input capture belong to the host
//! application. The simulation exposes body and hole transforms for the
//! renderer and status text for the display, and emits events for audio
//! cues; it never reads anything back from those layers.

pub mod sim;
pub mod tuning;

pub use sim::{
    Arena, GameEvent, GamePhase, GameState, Hole, RigidBody, SpawnSpec, StageDef, StageSet,
    TickInput, tick,
};
pub use tuning::{ConfigError, Tuning};

/// Game configuration constants
pub mod consts {
    use glam::Vec3;

    /// Recommended fixed simulation timestep for host loops
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_MIN: Vec3 = Vec3::new(-10.0, 0.0, -16.0);
    pub const ARENA_MAX: Vec3 = Vec3::new(10.0, 30.0, 8.0);

    /// Downward acceleration applied to every moving body (units/s²)
    pub const GRAVITY_Y: f32 = -10.0;
    /// Velocity damping applied after any collision
    pub const FRICTION_SLOWDOWN: f32 = 0.9;

    /// Hole defaults
    pub const HOLE_SPEED: f32 = 10.0;
    pub const HOLE_START_RADIUS: f32 = 1.0;
    /// Multiplicative growth when a body scores with others still in play
    pub const HOLE_GROWTH_FACTOR: f32 = 1.25;

    /// Bodies falling below this depth are scored and removed
    pub const SCORE_DEPTH: f32 = -10.0;
}
