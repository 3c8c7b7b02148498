//! Game state and core simulation types
//!
//! Everything the host needs to draw a frame or save a run lives here:
//! the arena, the hole, the live body collection, and the stage machine.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::body::RigidBody;
use super::stage::StageSet;
use crate::tuning::{ConfigError, Tuning};

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the start signal; nothing spawned yet
    Idle,
    /// Active gameplay
    Playing,
    /// Every stage cleared
    Won,
}

/// Events emitted by the simulation for the host to act on
///
/// Audio and text display are external collaborators: the core reports
/// what happened and the host decides how to present it (the score cue on
/// `Scored`, the win cue and banner on `GameWon`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A body fell through the hole and was removed
    Scored { id: u32 },
    /// The hole grew after a score with bodies still in play
    HoleGrown { radius: f32 },
    /// A stage emptied and the next one spawned
    StageCleared { next_stage: usize },
    /// The final stage emptied
    GameWon,
}

/// The fixed axis-aligned play volume
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub min: Vec3,
    pub max: Vec3,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            min: crate::consts::ARENA_MIN,
            max: crate::consts::ARENA_MAX,
        }
    }
}

impl Arena {
    pub fn new(min: Vec3, max: Vec3) -> Result<Self, ConfigError> {
        let arena = Self { min, max };
        arena.validate()?;
        Ok(arena)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min.x < self.max.x && self.min.y < self.max.y && self.min.z < self.max.z {
            Ok(())
        } else {
            Err(ConfigError::InvalidArena)
        }
    }

    /// Extent along each axis
    #[inline]
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// The movable circular opening in the ground plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// Center on the ground plane; `center.y` is the world Z coordinate
    pub center: Vec2,
    pub radius: f32,
}

impl Hole {
    pub fn new(radius: f32) -> Self {
        Self {
            center: Vec2::ZERO,
            radius,
        }
    }

    /// World-space center (always at ground level)
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::new(self.center.x, 0.0, self.center.y)
    }

    /// Scale for a unit-radius hole mesh
    #[inline]
    pub fn render_scale(&self) -> Vec3 {
        Vec3::new(self.radius, 1.0, self.radius)
    }

    /// Distance from a point to the hole center, measured on the ground plane
    #[inline]
    pub fn horizontal_distance(&self, p: Vec3) -> f32 {
        Vec2::new(p.x, p.z).distance(self.center)
    }

    /// Move on the ground plane from a held input vector.
    ///
    /// Input y is screen-up, which maps to -Z in world space.
    pub fn translate(&mut self, input: Vec2, speed: f32, dt: f32) {
        self.center.x += input.x * speed * dt;
        self.center.y -= input.y * speed * dt;
    }

    /// Keep the full disc inside the arena footprint.
    ///
    /// Runs after movement, not before: driving into a wall parks the hole
    /// flush against it instead of stopping short.
    pub fn clamp_to(&mut self, arena: &Arena) {
        if self.center.x + self.radius > arena.max.x {
            self.center.x = arena.max.x - self.radius;
        }
        if self.center.x - self.radius < arena.min.x {
            self.center.x = arena.min.x + self.radius;
        }
        if self.center.y + self.radius > arena.max.z {
            self.center.y = arena.max.z - self.radius;
        }
        if self.center.y - self.radius < arena.min.z {
            self.center.y = arena.min.z + self.radius;
        }
    }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Multiplicative growth applied when a score leaves bodies in play
    pub fn grow(&mut self, factor: f32) {
        self.radius *= factor;
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub arena: Arena,
    pub tuning: Tuning,
    pub stages: StageSet,
    pub hole: Hole,
    /// Live bodies only; scored bodies are evicted immediately
    pub bodies: Vec<RigidBody>,
    /// Monotonically non-decreasing; past the last stage means the game is won
    pub stage_index: usize,
    pub phase: GamePhase,
    /// Events since the last drain
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Build a validated game state in the idle phase.
    pub fn new(arena: Arena, tuning: Tuning, stages: StageSet) -> Result<Self, ConfigError> {
        arena.validate()?;
        tuning.validate()?;
        stages.validate()?;

        Ok(Self {
            arena,
            hole: Hole::new(tuning.hole_start_radius),
            tuning,
            stages,
            bodies: Vec::new(),
            stage_index: 0,
            phase: GamePhase::Idle,
            events: Vec::new(),
            next_id: 1,
        })
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a stage's bodies and apply its hole reset, if any.
    pub fn spawn_stage(&mut self, index: usize) {
        let Some(stage) = self.stages.get(index).cloned() else {
            return;
        };

        if let Some(radius) = stage.hole_radius {
            self.hole.set_radius(radius);
        }
        for spawn in &stage.spawns {
            let id = self.next_entity_id();
            self.bodies
                .push(RigidBody::new(id, spawn.pos, spawn.radius, spawn.vel, spawn.color));
        }

        log::info!(
            "stage {}: spawned {} bodies, hole radius {}",
            index,
            stage.spawns.len(),
            self.hole.radius
        );
    }

    /// Advance after the active set empties: next stage, or the win.
    pub(crate) fn advance_stage(&mut self) {
        self.stage_index += 1;
        if self.stage_index < self.stages.len() {
            self.spawn_stage(self.stage_index);
            self.events.push(GameEvent::StageCleared {
                next_stage: self.stage_index,
            });
        } else {
            self.phase = GamePhase::Won;
            self.events.push(GameEvent::GameWon);
            log::info!("all {} stages cleared", self.stages.len());
        }
    }

    /// Text for the host to display, if the current phase has any
    pub fn status_text(&self) -> Option<&'static str> {
        match self.phase {
            GamePhase::Idle => Some("press a button to start"),
            GamePhase::Playing => None,
            GamePhase::Won => Some("YOU WIN!"),
        }
    }

    /// Take all events accumulated since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hole_translate_axes() {
        let mut hole = Hole::new(1.0);
        hole.translate(Vec2::new(1.0, 1.0), 10.0, 0.1);

        // Screen-up input moves the hole toward -Z
        assert_relative_eq!(hole.center.x, 1.0);
        assert_relative_eq!(hole.center.y, -1.0);
    }

    #[test]
    fn test_hole_clamps_flush_to_walls() {
        let arena = Arena::default();
        let mut hole = Hole::new(1.0);
        hole.center = Vec2::new(50.0, -50.0);
        hole.clamp_to(&arena);

        assert_relative_eq!(hole.center.x, arena.max.x - hole.radius);
        assert_relative_eq!(hole.center.y, arena.min.z + hole.radius);
    }

    #[test]
    fn test_hole_horizontal_distance_ignores_height() {
        let mut hole = Hole::new(1.0);
        hole.center = Vec2::new(3.0, 4.0);

        let d = hole.horizontal_distance(Vec3::new(0.0, 25.0, 0.0));
        assert_relative_eq!(d, 5.0);
    }

    #[test]
    fn test_degenerate_arena_rejected() {
        let result = Arena::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 10.0));
        assert_eq!(result.unwrap_err(), ConfigError::InvalidArena);
    }

    #[test]
    fn test_status_text_per_phase() {
        let mut state = GameState::new(
            Arena::default(),
            Tuning::default(),
            StageSet::classic(7),
        )
        .unwrap();

        assert_eq!(state.status_text(), Some("press a button to start"));
        state.phase = GamePhase::Playing;
        assert_eq!(state.status_text(), None);
        state.phase = GamePhase::Won;
        assert_eq!(state.status_text(), Some("YOU WIN!"));
    }

    #[test]
    fn test_spawn_stage_resets_hole_radius() {
        let mut state = GameState::new(
            Arena::default(),
            Tuning::default(),
            StageSet::classic(7),
        )
        .unwrap();

        state.hole.set_radius(3.0);
        state.spawn_stage(1);
        assert_relative_eq!(state.hole.radius, 0.5);
        assert!(!state.bodies.is_empty());
    }

    #[test]
    fn test_state_serde_roundtrip() {
        let mut state = GameState::new(
            Arena::default(),
            Tuning::default(),
            StageSet::classic(7),
        )
        .unwrap();
        state.spawn_stage(0);

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(back.bodies, state.bodies);
        assert_eq!(back.phase, state.phase);
        assert_eq!(back.hole, state.hole);
    }
}
