//! Per-frame simulation step
//!
//! Advances the game one clock-driven step in a fixed order: hole
//! movement, body integration, pairwise collisions, then the environment
//! pass that scores, funnels, or bounces each body. The order is
//! load-bearing: a pair correction from this frame is checked against the
//! arena and rim later in the *same* frame, never deferred.

use glam::Vec2;

use super::collision::{in_funnel, resolve_boundary, resolve_pair, resolve_rim};
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Held directional input; components in {-1, 0, 1}
    pub move_dir: Vec2,
    /// Start signal (button press) that leaves the idle screen
    pub start: bool,
}

/// Advance the game state by one timestep.
///
/// `dt` must be non-negative and finite; zero is a legal no-op frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // The hole tracks input in every phase, even before the start signal
    state
        .hole
        .translate(input.move_dir, state.tuning.hole_speed, dt);
    state.hole.clamp_to(&state.arena);

    match state.phase {
        GamePhase::Idle => {
            if input.start {
                state.spawn_stage(0);
                state.phase = GamePhase::Playing;
                log::info!("game started");
            }
            return;
        }
        GamePhase::Won => return,
        GamePhase::Playing => {}
    }

    // Integrate every active body
    let gravity = state.tuning.gravity;
    for body in &mut state.bodies {
        body.integrate(gravity, dt);
    }

    // Every unordered pair exactly once; O(n²) is fine at this body count
    let friction = state.tuning.friction;
    for i in 0..state.bodies.len() {
        for j in (i + 1)..state.bodies.len() {
            let (head, tail) = state.bodies.split_at_mut(j);
            resolve_pair(&mut head[i], &mut tail[0], friction);
        }
    }

    // Environment pass, in collection order. Scored bodies are evicted on
    // the spot; survivors hit the rim or the arena walls. A body whose top
    // is already below ground is descending inside the hole and must not
    // collide with the floor plane.
    let mut cleared = false;
    let mut i = 0;
    while i < state.bodies.len() {
        if state.bodies[i].pos.y < state.tuning.score_depth {
            let body = state.bodies.remove(i);
            state.events.push(GameEvent::Scored { id: body.id });
            log::debug!("body {} fell through, {} left", body.id, state.bodies.len());

            if state.bodies.is_empty() {
                cleared = true;
            } else {
                state.hole.grow(state.tuning.hole_growth);
                state.events.push(GameEvent::HoleGrown {
                    radius: state.hole.radius,
                });
            }
            continue;
        }

        let hole = state.hole;
        let body = &mut state.bodies[i];
        if in_funnel(body, &hole) {
            resolve_rim(body, &hole, friction);
        } else if body.pos.y + body.radius > 0.0 {
            resolve_boundary(body, &state.arena, friction);
        }
        i += 1;
    }

    // Stage transitions happen after the pass so freshly spawned bodies
    // are untouched until next frame
    if cleared {
        state.advance_stage();
    }
}
