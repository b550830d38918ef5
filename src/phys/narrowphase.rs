//! Segment and overlap primitives for the two supported shapes.
//!
//! Segment tests report the *entry* crossing only, with the fraction
//! normalized to the segment (0 at `a`, 1 at `b`). Segments starting inside
//! a shape report no hit, matching the behaviour of conventional rigid-body
//! ray queries.

use glam::Vec2;

/// One segment/shape crossing.
#[derive(Clone, Copy, Debug)]
pub struct SegmentHit {
    pub point: Vec2,
    pub normal: Vec2,
    /// Position along the segment, 0 at its start, 1 at its end.
    pub fraction: f32,
}

/// Discrete penetration between two shapes.
#[derive(Clone, Copy, Debug)]
pub struct Overlap {
    /// Points from the second shape into the first.
    pub normal: Vec2,
    /// Penetration depth, ≥ 0.
    pub depth: f32,
}

/*──────────────────────── segment queries ───────────────────────────*/

/// Slab test of segment `a→b` against a centered axis-aligned box.
pub fn segment_box(a: Vec2, b: Vec2, center: Vec2, half_extents: Vec2) -> Option<SegmentHit> {
    let d = b - a;
    let min = center - half_extents;
    let max = center + half_extents;

    let mut tmin = 0.0_f32;
    let mut tmax = 1.0_f32;
    let mut n_enter = Vec2::ZERO;
    let mut entered = false;

    for axis in 0..2 {
        let (da, aa, lo, hi) = match axis {
            0 => (d.x, a.x, min.x, max.x),
            _ => (d.y, a.y, min.y, max.y),
        };
        if da.abs() < f32::EPSILON {
            if aa < lo || aa > hi {
                return None;
            }
        } else {
            let inv = 1.0 / da;
            let mut t1 = (lo - aa) * inv;
            let mut t2 = (hi - aa) * inv;
            let mut sign = -1.0;
            if t1 > t2 {
                core::mem::swap(&mut t1, &mut t2);
                sign = 1.0;
            }
            if t1 > tmin {
                tmin = t1;
                n_enter = if axis == 0 {
                    Vec2::new(sign, 0.0)
                } else {
                    Vec2::new(0.0, sign)
                };
                entered = true;
            }
            tmax = tmax.min(t2);
            if tmin > tmax {
                return None;
            }
        }
    }

    // `entered` is false when the segment starts inside the box; such
    // segments report nothing, like a ray cast from inside a fixture.
    if !entered {
        return None;
    }
    Some(SegmentHit {
        point: a + d * tmin,
        normal: n_enter,
        fraction: tmin,
    })
}

/// Quadratic test of segment `a→b` against a circle.
pub fn segment_circle(a: Vec2, b: Vec2, center: Vec2, radius: f32) -> Option<SegmentHit> {
    let d = b - a;
    let m = a - center;
    let qa = d.length_squared();
    if qa == 0.0 {
        return None;
    }
    // Start point inside the circle: no entry crossing to report.
    if m.length_squared() < radius * radius {
        return None;
    }
    let qb = 2.0 * m.dot(d);
    let qc = m.length_squared() - radius * radius;
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return None;
    }
    let t = (-qb - disc.sqrt()) / (2.0 * qa);
    if !(0.0..=1.0).contains(&t) {
        return None;
    }
    let point = a + d * t;
    Some(SegmentHit {
        point,
        normal: (point - center).normalize_or_zero(),
        fraction: t,
    })
}

/*──────────────────────── overlap queries ───────────────────────────*/

/// Circle against centered box. The normal points from the box into the
/// circle.
pub fn overlap_circle_box(c: Vec2, r: f32, box_c: Vec2, box_h: Vec2) -> Option<Overlap> {
    let min = box_c - box_h;
    let max = box_c + box_h;
    let closest = c.clamp(min, max);
    let delta = c - closest;
    let dist2 = delta.length_squared();

    if dist2 > r * r {
        return None;
    }
    if dist2 > 0.0 {
        let dist = dist2.sqrt();
        return Some(Overlap {
            normal: delta / dist,
            depth: r - dist,
        });
    }

    // Center inside the box: push out along the axis of least penetration.
    let to_face = Vec2::new(
        box_h.x - (c.x - box_c.x).abs(),
        box_h.y - (c.y - box_c.y).abs(),
    );
    let (normal, face_depth) = if to_face.x <= to_face.y {
        (
            Vec2::new(if c.x >= box_c.x { 1.0 } else { -1.0 }, 0.0),
            to_face.x,
        )
    } else {
        (
            Vec2::new(0.0, if c.y >= box_c.y { 1.0 } else { -1.0 }),
            to_face.y,
        )
    };
    Some(Overlap {
        normal,
        depth: face_depth + r,
    })
}

/// Circle against circle. The normal points from the second into the first.
pub fn overlap_circle_circle(c0: Vec2, r0: f32, c1: Vec2, r1: f32) -> Option<Overlap> {
    let delta = c0 - c1;
    let dist2 = delta.length_squared();
    let rsum = r0 + r1;
    if dist2 > rsum * rsum {
        return None;
    }
    if dist2 == 0.0 {
        // Coincident centers: direction undefined, pick +Y so the solver
        // still separates the pair.
        return Some(Overlap {
            normal: Vec2::Y,
            depth: rsum,
        });
    }
    let dist = dist2.sqrt();
    Some(Overlap {
        normal: delta / dist,
        depth: (rsum - dist).max(0.0),
    })
}

/// Box against box, both axis-aligned. Normal from the second into the first.
pub fn overlap_box_box(c0: Vec2, h0: Vec2, c1: Vec2, h1: Vec2) -> Option<Overlap> {
    let d = c1 - c0;
    let ox = (h0.x + h1.x) - d.x.abs();
    let oy = (h0.y + h1.y) - d.y.abs();
    if ox < 0.0 || oy < 0.0 {
        return None;
    }
    let (depth, normal) = if ox <= oy {
        (ox, Vec2::new(if d.x >= 0.0 { -1.0 } else { 1.0 }, 0.0))
    } else {
        (oy, Vec2::new(0.0, if d.y >= 0.0 { -1.0 } else { 1.0 }))
    };
    Some(Overlap {
        normal,
        depth: depth.max(0.0),
    })
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
