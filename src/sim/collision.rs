//! Collision resolution against the arena, other bodies, and the hole rim
//!
//! All three resolvers follow the same shape: correct the position so the
//! sphere is tangent to whatever it hit, reflect the velocity about the
//! contact normal, then damp by the friction factor.
//!
//! Zero-length directions are possible in legitimate states (coincident
//! pair centers, a body exactly over the hole center) and every normalize
//! here is guarded accordingly.

use glam::Vec3;

use super::body::RigidBody;
use super::state::{Arena, Hole};

/// Reflect a vector about a unit surface normal: v' = v - 2(v·n)n
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// True when the body fits through the hole and sits inside its footprint.
///
/// This is the gate for [`resolve_rim`]; bodies outside the funnel zone
/// collide with the arena instead.
#[inline]
pub fn in_funnel(body: &RigidBody, hole: &Hole) -> bool {
    body.radius < hole.radius && hole.horizontal_distance(body.pos) < hole.radius
}

/// Resolve collisions between a body and the six arena planes.
///
/// Every face is checked independently, in a fixed order (+X, -X, +Y, -Y,
/// +Z, -Z), so a body wedged into a corner picks up one correction per
/// violated face. Arena faces are axis-aligned, which makes the reflection
/// a single component negation. Each correction damps the whole velocity
/// by `friction`.
pub fn resolve_boundary(body: &mut RigidBody, arena: &Arena, friction: f32) {
    if body.pos.x + body.radius > arena.max.x {
        body.pos.x = arena.max.x - body.radius;
        body.vel.x = -body.vel.x;
        body.vel *= friction;
    }
    if body.pos.x - body.radius < arena.min.x {
        body.pos.x = arena.min.x + body.radius;
        body.vel.x = -body.vel.x;
        body.vel *= friction;
    }
    if body.pos.y + body.radius > arena.max.y {
        body.pos.y = arena.max.y - body.radius;
        body.vel.y = -body.vel.y;
        body.vel *= friction;
    }
    if body.pos.y - body.radius < arena.min.y {
        body.pos.y = arena.min.y + body.radius;
        body.vel.y = -body.vel.y;
        body.vel *= friction;
    }
    if body.pos.z + body.radius > arena.max.z {
        body.pos.z = arena.max.z - body.radius;
        body.vel.z = -body.vel.z;
        body.vel *= friction;
    }
    if body.pos.z - body.radius < arena.min.z {
        body.pos.z = arena.min.z + body.radius;
        body.vel.z = -body.vel.z;
        body.vel *= friction;
    }
}

/// Resolve a collision between two bodies.
///
/// Positional correction is symmetric: each body backs off half the
/// overlap along the center-to-center axis, so argument order does not
/// matter. The velocity response is the arcade model this game is built
/// on: each body's velocity *direction* is reflected about that axis and
/// rescaled to `0.5 * friction`, discarding relative speed and mass
/// entirely. It is not an elastic impulse exchange and must not be
/// replaced with one.
pub fn resolve_pair(a: &mut RigidBody, b: &mut RigidBody, friction: f32) {
    let offset = a.pos - b.pos;
    let distance = offset.length();
    if distance >= a.radius + b.radius {
        return;
    }

    // Coincident centers leave no separation axis to push along
    let Some(normal) = offset.try_normalize() else {
        return;
    };

    let overlap = (a.radius + b.radius) - distance;
    if overlap > 0.0 {
        let correction = normal * (overlap * 0.5);
        a.pos += correction;
        b.pos -= correction;
    }

    a.vel = pair_response(a.vel, normal, friction);
    b.vel = pair_response(b.vel, -normal, friction);
}

/// The simplified pair velocity response; resting bodies keep resting.
fn pair_response(vel: Vec3, normal: Vec3, friction: f32) -> Vec3 {
    match vel.try_normalize() {
        Some(dir) => reflect(dir, normal) * 0.5 * friction,
        None => vel,
    }
}

/// Resolve a collision between a body and the rim of the hole.
///
/// Callers gate on [`in_funnel`]. The closest point on the rim circle to
/// the body's ground projection is the contact candidate: a body still
/// clipping it is pushed out to tangency and reflected about the normal
/// pointing from the rim toward the hole center; a body dropping cleanly
/// through is left alone.
pub fn resolve_rim(body: &mut RigidBody, hole: &Hole, friction: f32) {
    let center = hole.position();
    let on_ground = Vec3::new(body.pos.x, 0.0, body.pos.z);

    // Exactly over the center there is no nearest rim direction; the body
    // is falling clean
    let Some(dir) = (on_ground - center).try_normalize() else {
        return;
    };
    let rim_point = center + dir * hole.radius;

    let to_body = body.pos - rim_point;
    let dist = to_body.length();
    if dist >= body.radius {
        return;
    }

    let Some(away) = to_body.try_normalize() else {
        return;
    };
    body.pos += away * (body.radius - dist);

    // From the rim point toward the hole center, i.e. straight back along
    // the rim direction
    let normal = -dir;
    body.vel = reflect(body.vel, normal) * friction;
}
