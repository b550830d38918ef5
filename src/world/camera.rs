use glam::Vec2;

use crate::world::geometry;

/// Viewer in world space.
///
/// * `fwd` starts out unit length and is only ever rotated, never
///   re-normalized; rotation preserves its length.
/// * Mutated once per fixed tick by input handling, strictly before the
///   render pass reads it. The renderer only borrows it.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pub pos: Vec2,
    pub fwd: Vec2,
}

impl Camera {
    /// Create a camera at `pos` looking along `fwd`.
    pub fn new(pos: Vec2, fwd: Vec2) -> Self {
        Self { pos, fwd }
    }

    /// Unit-ish vector pointing to the camera's left on the X-Y plane.
    #[inline]
    pub fn left(&self) -> Vec2 {
        Vec2::new(self.fwd.y, -self.fwd.x)
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Move `amount` units along the forward vector.
    pub fn step(&mut self, amount: f32) {
        self.pos += self.fwd * amount;
    }

    /// Move `amount` units along the left vector.
    pub fn strafe(&mut self, amount: f32) {
        self.pos += self.left() * amount;
    }

    /// Rotate the forward vector by `angle` radians (counter-clockwise).
    pub fn turn(&mut self, angle: f32) {
        self.fwd = geometry::rotate(self.fwd, angle);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
