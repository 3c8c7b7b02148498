//! Declarative stage definitions
//!
//! What to spawn is data; how to advance is tick logic. A [`StageSet`] is
//! an ordered list of [`StageDef`]s that hosts can author in JSON, build in
//! code, or generate deterministically from a seed. The built-in
//! [`StageSet::classic`] set ships three stages: a four-ball warmup, a
//! ten-ball rally, and a seeded scatter finale.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::Arena;
use crate::tuning::ConfigError;

const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const BLUE: Vec3 = Vec3::new(0.0, 0.0, 1.0);
const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const PURPLE: Vec3 = Vec3::new(0.5, 0.0, 0.5);
const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// One body to create at stage start
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnSpec {
    pub pos: Vec3,
    pub radius: f32,
    pub vel: Vec3,
    pub color: Vec3,
}

impl SpawnSpec {
    pub fn new(pos: Vec3, radius: f32, vel: Vec3, color: Vec3) -> Self {
        Self {
            pos,
            radius,
            vel,
            color,
        }
    }
}

/// A single stage: an optional hole reset plus the bodies it spawns
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StageDef {
    /// Reset the hole to this radius when the stage spawns
    #[serde(default)]
    pub hole_radius: Option<f32>,
    pub spawns: Vec<SpawnSpec>,
}

/// Ordered stage list for one full game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StageSet {
    pub stages: Vec<StageDef>,
}

impl StageSet {
    pub fn new(stages: Vec<StageDef>) -> Self {
        Self { stages }
    }

    /// Load a stage set from JSON level data.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StageDef> {
        self.stages.get(index)
    }

    /// Reject stage data the simulation cannot run.
    ///
    /// Radius invariants are enforced here, once, so they can never be
    /// violated mid-run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stages.is_empty() {
            return Err(ConfigError::EmptyStageSet);
        }
        for stage in &self.stages {
            if let Some(radius) = stage.hole_radius {
                if radius <= 0.0 {
                    return Err(ConfigError::NonPositiveRadius(radius));
                }
            }
            for spawn in &stage.spawns {
                if spawn.radius <= 0.0 {
                    return Err(ConfigError::NonPositiveRadius(spawn.radius));
                }
            }
        }
        Ok(())
    }

    /// The built-in three-stage game.
    ///
    /// The scatter finale is generated from `seed`, so the same seed always
    /// produces the same level data.
    pub fn classic(seed: u64) -> Self {
        Self::new(vec![
            warmup_stage(),
            rally_stage(),
            scatter_stage(seed, &Arena::default()),
        ])
    }
}

/// Four spheres placed to make the physics visually checkable
fn warmup_stage() -> StageDef {
    StageDef {
        hole_radius: None,
        spawns: vec![
            SpawnSpec::new(
                Vec3::new(0.0, 0.25, 7.5),
                0.25,
                Vec3::new(0.0, 10.0, -4.0),
                RED,
            ),
            SpawnSpec::new(
                Vec3::new(-8.0, 1.0, -5.0),
                0.5,
                Vec3::new(4.0, 0.0, 0.0),
                GREEN,
            ),
            SpawnSpec::new(
                Vec3::new(8.0, 1.0, -4.5),
                0.5,
                Vec3::new(-9.0, 0.0, 0.0),
                BLUE,
            ),
            SpawnSpec::new(
                Vec3::new(0.0, 0.25, -12.0),
                0.5,
                Vec3::new(15.0, 10.0, -20.0),
                YELLOW,
            ),
        ],
    }
}

/// Eight fast movers launched from the +X wall plus two big resting anchors
fn rally_stage() -> StageDef {
    let movers = [
        (6.0, -12.0, 0.25, Vec3::new(15.0, 5.0, -20.0)),
        (3.0, 7.0, 0.25, Vec3::new(10.0, 2.0, 4.0)),
        (2.0, -15.0, 0.25, Vec3::new(5.0, 2.0, -4.0)),
        (15.0, 0.0, 0.5, Vec3::new(5.0, 5.0, -2.0)),
        (29.0, -15.0, 0.75, Vec3::new(-42.0, 0.0, 7.0)),
        (3.0, 7.0, 1.0, Vec3::new(7.0, 0.0, 0.0)),
        (24.0, 6.0, 1.25, Vec3::new(4.0, -3.0, 10.0)),
        (2.0, 2.0, 1.5, Vec3::new(-4.0, 0.0, -20.0)),
    ];

    let mut spawns: Vec<SpawnSpec> = movers
        .iter()
        .map(|&(y, z, radius, vel)| SpawnSpec::new(Vec3::new(10.0, y, z), radius, vel, PURPLE))
        .collect();

    spawns.push(SpawnSpec::new(Vec3::ZERO, 1.75, Vec3::ZERO, CYAN));
    spawns.push(SpawnSpec::new(
        Vec3::new(5.0, 0.0, -5.0),
        2.25,
        Vec3::ZERO,
        CYAN,
    ));

    StageDef {
        hole_radius: Some(0.5),
        spawns,
    }
}

/// Graded spheres scattered across the arena, plus one oversized anchor.
///
/// Radii step from 0.2 to 1.9 so the hole has to grow through the whole
/// range before the anchor fits. Positions stay one unit inside the arena
/// footprint; launch velocities spread up to 25 units/sec per axis.
fn scatter_stage(seed: u64, arena: &Arena) -> StageDef {
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut spawns = Vec::with_capacity(19);

    for i in 0..18 {
        let radius = 0.2 + 0.1 * i as f32;
        let pos = Vec3::new(
            rng.random_range(arena.min.x + 1.0..arena.max.x - 1.0),
            radius / 2.0,
            rng.random_range(arena.min.z + 1.0..arena.max.z - 1.0),
        );
        let vel = Vec3::new(
            rng.random_range(-25.0..25.0),
            rng.random_range(0.0..25.0),
            rng.random_range(-25.0..25.0),
        );
        let color = Vec3::new(
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
            rng.random_range(0.0..1.0),
        );
        spawns.push(SpawnSpec::new(pos, radius, vel, color));
    }

    spawns.push(SpawnSpec::new(Vec3::ZERO, 2.25, Vec3::ZERO, CYAN));

    StageDef {
        hole_radius: Some(0.5),
        spawns,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_shape() {
        let set = StageSet::classic(42);
        assert_eq!(set.len(), 3);
        assert!(set.validate().is_ok());

        assert_eq!(set.get(0).unwrap().spawns.len(), 4);
        assert_eq!(set.get(0).unwrap().hole_radius, None);
        assert_eq!(set.get(1).unwrap().spawns.len(), 10);
        assert_eq!(set.get(1).unwrap().hole_radius, Some(0.5));
        assert_eq!(set.get(2).unwrap().spawns.len(), 19);
        assert_eq!(set.get(2).unwrap().hole_radius, Some(0.5));
    }

    #[test]
    fn test_scatter_is_seed_deterministic() {
        let a = scatter_stage(7, &Arena::default());
        let b = scatter_stage(7, &Arena::default());
        let c = scatter_stage(8, &Arena::default());

        assert_eq!(a.spawns, b.spawns);
        assert_ne!(a.spawns, c.spawns);
    }

    #[test]
    fn test_scatter_spawns_inside_arena() {
        let arena = Arena::default();
        let stage = scatter_stage(1234, &arena);
        for spawn in &stage.spawns {
            assert!(spawn.pos.x > arena.min.x && spawn.pos.x < arena.max.x);
            assert!(spawn.pos.z > arena.min.z && spawn.pos.z < arena.max.z);
            assert!(spawn.radius > 0.0);
        }
    }

    #[test]
    fn test_validate_rejects_nonpositive_radius() {
        let set = StageSet::new(vec![StageDef {
            hole_radius: None,
            spawns: vec![SpawnSpec::new(Vec3::ZERO, 0.0, Vec3::ZERO, RED)],
        }]);
        assert_eq!(set.validate(), Err(ConfigError::NonPositiveRadius(0.0)));

        let set = StageSet::new(vec![StageDef {
            hole_radius: Some(-1.0),
            spawns: Vec::new(),
        }]);
        assert_eq!(set.validate(), Err(ConfigError::NonPositiveRadius(-1.0)));
    }

    #[test]
    fn test_validate_rejects_empty_set() {
        assert_eq!(
            StageSet::new(Vec::new()).validate(),
            Err(ConfigError::EmptyStageSet)
        );
    }

    #[test]
    fn test_json_level_data_roundtrip() {
        let set = StageSet::classic(3);
        let json = serde_json::to_string(&set).unwrap();
        let back = StageSet::from_json(&json).unwrap();

        assert_eq!(back.len(), set.len());
        for (a, b) in back.stages.iter().zip(&set.stages) {
            assert_eq!(a.hole_radius, b.hole_radius);
            assert_eq!(a.spawns, b.spawns);
        }
    }

    #[test]
    fn test_hand_written_json_defaults() {
        let json = r#"{
            "stages": [
                {
                    "spawns": [
                        {
                            "pos": [0.0, 1.0, 0.0],
                            "radius": 0.5,
                            "vel": [2.0, 0.0, 0.0],
                            "color": [1.0, 0.0, 0.0]
                        }
                    ]
                }
            ]
        }"#;

        let set = StageSet::from_json(json).unwrap();
        assert!(set.validate().is_ok());
        assert_eq!(set.get(0).unwrap().hole_radius, None);
        assert_eq!(set.get(0).unwrap().spawns[0].radius, 0.5);
    }
}
