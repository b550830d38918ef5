//! Ray intersection collection.
//!
//! Unlike a nearest-hit query, the collector asks the world to keep
//! reporting every candidate (callback control value 1.0) and hands the
//! whole set back. The underlying query guarantees no ordering and no
//! uniqueness across grazing geometry, so callers sort explicitly and
//! pick a [`DedupPolicy`].

use std::cmp::Ordering;

use glam::Vec2;
use smallvec::SmallVec;

use crate::phys::{BodyId, PhysicsWorld};

/// One surface crossing along a ray.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    /// Back-reference to the struck body; render metadata is looked up
    /// through it in the style registry.
    pub body: BodyId,
    pub point: Vec2,
    pub normal: Vec2,
    /// Position along the ray: 0 at the origin, 1 at maximum range.
    pub fraction: f32,
}

/// Most rays cross a handful of surfaces; stay off the heap for those.
pub type HitList = SmallVec<[RayHit; 8]>;

/// What to do when the same body is reported more than once for one ray
/// (grazing a shared edge, for instance). Default is to keep every report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DedupPolicy {
    KeepAll,
    /// Keep only the nearest report per body.
    FirstPerBody,
}

/// Gather every surface the segment `origin→end` crosses.
///
/// A ray that strikes nothing yields an empty list (not an error).
pub fn collect_hits(
    world: &PhysicsWorld,
    origin: Vec2,
    end: Vec2,
    dedup: DedupPolicy,
) -> HitList {
    let mut hits = HitList::new();
    world.raycast(origin, end, |body, point, normal, fraction| {
        hits.push(RayHit {
            body,
            point,
            normal,
            fraction,
        });
        1.0 // keep enumerating
    });

    if dedup == DedupPolicy::FirstPerBody {
        hits.sort_unstable_by(|a, b| {
            a.body
                .cmp(&b.body)
                .then(a.fraction.partial_cmp(&b.fraction).unwrap_or(Ordering::Equal))
        });
        hits.dedup_by(|next, kept| next.body == kept.body);
    }
    hits
}

/// Order hits by fraction descending so the compositor can walk them
/// far-to-near (painter's algorithm).
pub fn sort_far_to_near(hits: &mut HitList) {
    hits.sort_unstable_by(|a, b| {
        b.fraction
            .partial_cmp(&a.fraction)
            .unwrap_or(Ordering::Equal)
    });
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
