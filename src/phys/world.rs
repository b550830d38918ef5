//! The rigid-body world: an arena of bodies, a fixed-size stepping routine
//! and an all-candidates ray query.

use glam::Vec2;

use crate::phys::body::{Body, BodyDef, BodyId, BodyKind, Shape};
use crate::phys::narrowphase::{
    self, Overlap, SegmentHit, overlap_box_box, overlap_circle_box, overlap_circle_circle,
};

/// Fraction of remaining penetration removed per position iteration.
const POSITION_RELAX: f32 = 0.2;

pub struct PhysicsWorld {
    gravity: Vec2,
    bodies: Vec<Body>,
}

impl PhysicsWorld {
    pub fn new(gravity: Vec2) -> Self {
        Self {
            gravity,
            bodies: Vec::new(),
        }
    }

    /*──────────────────────── body management ───────────────────────*/

    pub fn create_body(&mut self, def: BodyDef) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(Body::from_def(def));
        id
    }

    #[inline]
    pub fn body(&self, id: BodyId) -> &Body {
        &self.bodies[id.0 as usize]
    }

    #[inline]
    pub fn body_mut(&mut self, id: BodyId) -> &mut Body {
        &mut self.bodies[id.0 as usize]
    }

    pub fn bodies(&self) -> impl Iterator<Item = (BodyId, &Body)> {
        self.bodies
            .iter()
            .enumerate()
            .map(|(i, b)| (BodyId(i as u32), b))
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /*──────────────────────── stepping ──────────────────────────────*/

    /// Advance the world by exactly `dt` seconds.
    ///
    /// Callers drive this at a fixed rate (see [`crate::sim`]); the world
    /// never advances by variable or partial ticks. `velocity_iterations`
    /// passes cancel approach velocity at contacts, `position_iterations`
    /// passes bleed off the remaining penetration.
    pub fn step(&mut self, dt: f32, velocity_iterations: u32, position_iterations: u32) {
        for body in &mut self.bodies {
            if body.kind == BodyKind::Dynamic {
                body.vel += self.gravity * dt;
                body.pos += body.vel * dt;
            }
        }

        for _ in 0..velocity_iterations {
            for (i, contact) in self.contacts() {
                let body = &mut self.bodies[i];
                let vn = body.vel.dot(contact.normal);
                if vn < 0.0 {
                    body.vel -= contact.normal * vn;
                }
            }
        }

        for _ in 0..position_iterations {
            for (i, contact) in self.contacts() {
                self.bodies[i].pos += contact.normal * (contact.depth * POSITION_RELAX);
            }
        }
    }

    /// Current penetrations of every dynamic body, normals pointing into
    /// the dynamic body. Recomputed per solver iteration.
    fn contacts(&self) -> Vec<(usize, Overlap)> {
        let mut out = Vec::new();
        for (i, a) in self.bodies.iter().enumerate() {
            if a.kind != BodyKind::Dynamic {
                continue;
            }
            for (j, b) in self.bodies.iter().enumerate() {
                if i == j {
                    continue;
                }
                if let Some(overlap) = shape_overlap(a, b) {
                    out.push((i, overlap));
                }
            }
        }
        out
    }

    /*──────────────────────── ray query ─────────────────────────────*/

    /// Cast the segment `origin→end` through every body.
    ///
    /// `f` receives `(body, point, normal, fraction)` for each crossing, in
    /// no particular order, at most once per body (the entry point). Its
    /// return value is the new maximum fraction: return `1.0` to keep
    /// enumerating every candidate, the reported fraction to clip the query
    /// to that depth, or `0.0` to terminate. A segment that crosses nothing
    /// invokes `f` zero times.
    ///
    /// The query is read-only with respect to world state.
    pub fn raycast<F>(&self, origin: Vec2, end: Vec2, mut f: F)
    where
        F: FnMut(BodyId, Vec2, Vec2, f32) -> f32,
    {
        let mut max_fraction = 1.0_f32;
        for (i, body) in self.bodies.iter().enumerate() {
            let hit = match body.shape {
                Shape::Box { half_extents } => {
                    narrowphase::segment_box(origin, end, body.pos, half_extents)
                }
                Shape::Circle { radius } => {
                    narrowphase::segment_circle(origin, end, body.pos, radius)
                }
            };
            let Some(SegmentHit {
                point,
                normal,
                fraction,
            }) = hit
            else {
                continue;
            };
            if fraction > max_fraction {
                continue;
            }
            let control = f(BodyId(i as u32), point, normal, fraction);
            if control <= 0.0 {
                return;
            }
            max_fraction = max_fraction.min(control);
        }
    }
}

/// Penetration of `a` by `b`, normal pointing into `a`.
fn shape_overlap(a: &Body, b: &Body) -> Option<Overlap> {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            overlap_circle_circle(a.pos, ra, b.pos, rb)
        }
        (Shape::Circle { radius }, Shape::Box { half_extents }) => {
            overlap_circle_box(a.pos, radius, b.pos, half_extents)
        }
        (Shape::Box { half_extents }, Shape::Circle { radius }) => {
            overlap_circle_box(b.pos, radius, a.pos, half_extents).map(|o| Overlap {
                normal: -o.normal,
                depth: o.depth,
            })
        }
        (Shape::Box { half_extents: ha }, Shape::Box { half_extents: hb }) => {
            overlap_box_box(a.pos, ha, b.pos, hb)
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn static_box(world: &mut PhysicsWorld, pos: Vec2, half: Vec2) -> BodyId {
        world.create_body(BodyDef::new(
            BodyKind::Static,
            pos,
            Shape::Box { half_extents: half },
        ))
    }

    #[test]
    fn raycast_reports_every_crossing() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        let near = static_box(&mut world, Vec2::new(7.0, 5.0), Vec2::ONE);
        let far = static_box(&mut world, Vec2::new(2.5, 5.0), Vec2::ONE);

        let mut hits = Vec::new();
        world.raycast(Vec2::new(10.0, 5.0), Vec2::new(-5.0, 5.0), |id, p, n, t| {
            hits.push((id, p, n, t));
            1.0
        });

        assert_eq!(hits.len(), 2);
        let near_hit = hits.iter().find(|h| h.0 == near).unwrap();
        let far_hit = hits.iter().find(|h| h.0 == far).unwrap();
        assert!((near_hit.1.x - 8.0).abs() < 1e-5);
        assert!((far_hit.1.x - 3.5).abs() < 1e-5);
        assert!(near_hit.3 < far_hit.3);
        // Entry normals face the ray origin
        assert!((near_hit.2 - Vec2::X).length() < 1e-5);
    }

    #[test]
    fn raycast_miss_invokes_nothing() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        static_box(&mut world, Vec2::new(2.5, 2.5), Vec2::ONE);
        let mut calls = 0;
        world.raycast(Vec2::new(10.0, 10.0), Vec2::new(20.0, 10.0), |_, _, _, _| {
            calls += 1;
            1.0
        });
        assert_eq!(calls, 0);
    }

    #[test]
    fn raycast_callback_can_clip() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        // Enumeration runs in arena order, so put the near body first and
        // clip at its fraction: the far body must then be filtered out.
        static_box(&mut world, Vec2::new(7.0, 5.0), Vec2::ONE);
        static_box(&mut world, Vec2::new(2.5, 5.0), Vec2::ONE);

        let mut reported = Vec::new();
        world.raycast(Vec2::new(10.0, 5.0), Vec2::new(-5.0, 5.0), |id, _, _, t| {
            reported.push(id);
            t
        });
        assert_eq!(reported.len(), 1);
    }

    #[test]
    fn raycast_callback_can_terminate() {
        let mut world = PhysicsWorld::new(Vec2::ZERO);
        static_box(&mut world, Vec2::new(7.0, 5.0), Vec2::ONE);
        static_box(&mut world, Vec2::new(2.5, 5.0), Vec2::ONE);
        let mut calls = 0;
        world.raycast(Vec2::new(10.0, 5.0), Vec2::new(-5.0, 5.0), |_, _, _, _| {
            calls += 1;
            0.0
        });
        assert_eq!(calls, 1);
    }

    #[test]
    fn dynamic_circle_falls_and_rests_on_box() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, -10.0));
        static_box(&mut world, Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.5));
        let ball = world.create_body(BodyDef::new(
            BodyKind::Dynamic,
            Vec2::new(0.0, 3.0),
            Shape::Circle { radius: 0.5 },
        ));

        for _ in 0..600 {
            world.step(1.0 / 60.0, 8, 2);
        }
        let b = world.body(ball);
        // Resting on top of the box: y ≈ 0.5 (box top) + 0.5 (radius)
        assert!((b.pos.y - 1.0).abs() < 0.05, "y = {}", b.pos.y);
        assert!(b.vel.length() < 0.1);
    }

    #[test]
    fn static_bodies_never_move() {
        let mut world = PhysicsWorld::new(Vec2::new(0.0, -10.0));
        let id = static_box(&mut world, Vec2::new(2.5, 2.5), Vec2::ONE);
        for _ in 0..100 {
            world.step(1.0 / 60.0, 8, 2);
        }
        assert_eq!(world.body(id).pos, Vec2::new(2.5, 2.5));
    }

    #[test]
    fn stepping_is_deterministic() {
        let run = || {
            let mut world = PhysicsWorld::new(Vec2::new(0.0, -1.0));
            static_box(&mut world, Vec2::new(0.0, -2.0), Vec2::new(10.0, 1.0));
            let ball = world.create_body(BodyDef::new(
                BodyKind::Dynamic,
                Vec2::new(0.0, 5.0),
                Shape::Circle { radius: 0.5 },
            ));
            for _ in 0..240 {
                world.step(1.0 / 60.0, 8, 2);
            }
            world.body(ball).pos
        };
        assert_eq!(run(), run());
    }
}
