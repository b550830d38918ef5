//! Plain 2-D vector helpers shared by the camera, the renderer and the
//! debug overlay. All functions are pure.

use glam::Vec2;

/// Rotate `v` counter-clockwise by `angle` radians.
#[inline]
pub fn rotate(v: Vec2, angle: f32) -> Vec2 {
    let (s, c) = angle.sin_cos();
    Vec2::new(v.x * c - v.y * s, v.x * s + v.y * c)
}

/// Projection of `v` onto the direction of `onto`.
///
/// A zero-length `onto` yields the zero vector.
#[inline]
pub fn project_onto(v: Vec2, onto: Vec2) -> Vec2 {
    let dir = onto.normalize_or_zero();
    v.dot(dir) * dir
}

/// Unsigned angle between `a` and `b` in radians, in `[0, π]`.
pub fn angle_between(a: Vec2, b: Vec2) -> f32 {
    let denom = a.length() * b.length();
    if denom <= f32::EPSILON {
        return 0.0;
    }
    (a.dot(b) / denom).clamp(-1.0, 1.0).acos()
}

/// Intersection point of the closed segments `a0→a1` and `b0→b1`.
///
/// Parallel or coincident segments (determinant ≈ 0) report `None`, as do
/// lines that cross outside either segment's parameter range. Endpoint
/// touches count as intersections.
pub fn segment_intersection(a0: Vec2, a1: Vec2, b0: Vec2, b1: Vec2) -> Option<Vec2> {
    let r = a1 - a0;
    let s = b1 - b0;
    let det = r.perp_dot(s);
    if det.abs() < 1e-6 {
        return None;
    }
    let q = b0 - a0;
    let t = q.perp_dot(s) / det;
    let u = q.perp_dot(r) / det;
    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(a0 + r * t)
    } else {
        None
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    #[test]
    fn rotate_quarter_turn() {
        let v = rotate(Vec2::X, FRAC_PI_2);
        assert!((v - Vec2::Y).length() < 1e-6);
        // Full turn comes back
        let w = rotate(Vec2::new(3.0, -2.0), 2.0 * PI);
        assert!((w - Vec2::new(3.0, -2.0)).length() < 1e-5);
    }

    #[test]
    fn rotate_preserves_length() {
        let v = Vec2::new(1.5, -0.5);
        assert!((rotate(v, 0.7).length() - v.length()).abs() < 1e-6);
    }

    #[test]
    fn projection_onto_axis() {
        let p = project_onto(Vec2::new(3.0, 4.0), Vec2::new(10.0, 0.0));
        assert!((p - Vec2::new(3.0, 0.0)).length() < 1e-6);
        // Degenerate target
        assert_eq!(project_onto(Vec2::ONE, Vec2::ZERO), Vec2::ZERO);
    }

    #[test]
    fn angle_between_axes() {
        assert!((angle_between(Vec2::X, Vec2::Y) - FRAC_PI_2).abs() < 1e-6);
        assert!(angle_between(Vec2::X, Vec2::X).abs() < 1e-6);
        assert!((angle_between(Vec2::X, -Vec2::X) - PI).abs() < 1e-6);
    }

    #[test]
    fn segments_crossing() {
        let p = segment_intersection(
            Vec2::new(-1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(0.0, -1.0),
            Vec2::new(0.0, 1.0),
        )
        .unwrap();
        assert!(p.length() < 1e-6);
    }

    #[test]
    fn segments_parallel_none() {
        assert!(
            segment_intersection(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 1.0),
            )
            .is_none()
        );
        // Coincident lines are also "no intersection"
        assert!(
            segment_intersection(
                Vec2::new(0.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.5, 0.0),
                Vec2::new(2.0, 0.0),
            )
            .is_none()
        );
    }

    #[test]
    fn segments_out_of_range_none() {
        assert!(
            segment_intersection(
                Vec2::new(-1.0, 0.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(2.0, -1.0),
                Vec2::new(2.0, 1.0),
            )
            .is_none()
        );
    }

    #[test]
    fn segments_endpoint_touch() {
        let p = segment_intersection(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, -1.0),
            Vec2::new(1.0, 1.0),
        )
        .unwrap();
        assert!((p - Vec2::new(1.0, 0.0)).length() < 1e-6);
    }
}
