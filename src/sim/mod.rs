//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One clock-driven step per host frame
//! - Seeded RNG only (stage generation)
//! - Stable iteration order (collection order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod stage;
pub mod state;
pub mod tick;

pub use body::RigidBody;
pub use collision::{in_funnel, reflect, resolve_boundary, resolve_pair, resolve_rim};
pub use stage::{SpawnSpec, StageDef, StageSet};
pub use state::{Arena, GameEvent, GamePhase, GameState, Hole};
pub use tick::{TickInput, tick};
