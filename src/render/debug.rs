//! Wireframe overlay: a thin adapter from physics bodies to 2-D outlines
//! in the frame buffer, for eyeballing the world from above.

use bitflags::bitflags;
use glam::Vec2;

use crate::phys::{BodyKind, PhysicsWorld, Shape};
use crate::render::Rgba;
use crate::world::{Camera, geometry};

bitflags! {
    #[derive(Clone, Copy, Debug)]
    pub struct DrawFlags: u32 {
        const SHAPES         = 0x0001;
        const CENTER_OF_MASS = 0x0002;
    }
}

const STATIC_COLOR: Rgba = 0xFF_5C_B5_5C;
const DYNAMIC_COLOR: Rgba = 0xFF_E6_B4_50;
const CAMERA_COLOR: Rgba = 0xFF_FF_FF_FF;
const COM_COLOR: Rgba = 0xFF_FF_40_40;

/// Number of segments used to approximate circle outlines.
const CIRCLE_STEPS: usize = 32;

pub struct DebugDraw {
    /// Pixels per world unit.
    pub scale: f32,
    pub flags: DrawFlags,
}

impl Default for DebugDraw {
    fn default() -> Self {
        Self {
            scale: 32.0,
            flags: DrawFlags::SHAPES | DrawFlags::CENTER_OF_MASS,
        }
    }
}

impl DebugDraw {
    /// Draw every body plus the camera marker into `buf` (north up).
    pub fn draw_world(
        &self,
        buf: &mut [Rgba],
        w: usize,
        h: usize,
        world: &PhysicsWorld,
        camera: &Camera,
    ) {
        for (_, body) in world.bodies() {
            let color = match body.kind {
                BodyKind::Static => STATIC_COLOR,
                BodyKind::Dynamic => DYNAMIC_COLOR,
            };
            if self.flags.contains(DrawFlags::SHAPES) {
                match body.shape {
                    Shape::Box { half_extents } => {
                        self.draw_box(buf, w, h, body.pos, half_extents, color)
                    }
                    Shape::Circle { radius } => {
                        self.draw_circle(buf, w, h, body.pos, radius, color)
                    }
                }
            }
            if self.flags.contains(DrawFlags::CENTER_OF_MASS) {
                let c = self.to_screen(body.pos, h);
                draw_line(buf, w, h, c.0 - 2, c.1, c.0 + 2, c.1, COM_COLOR);
                draw_line(buf, w, h, c.0, c.1 - 2, c.0, c.1 + 2, COM_COLOR);
            }
        }

        // Camera: a circle of the forward vector's length plus the vector
        self.draw_circle(buf, w, h, camera.pos, camera.fwd.length(), CAMERA_COLOR);
        let p0 = self.to_screen(camera.pos, h);
        let p1 = self.to_screen(camera.pos + camera.fwd, h);
        draw_line(buf, w, h, p0.0, p0.1, p1.0, p1.1, CAMERA_COLOR);
    }

    fn to_screen(&self, p: Vec2, h: usize) -> (i32, i32) {
        // invert Y so north is up
        ((p.x * self.scale) as i32, h as i32 - (p.y * self.scale) as i32)
    }

    fn draw_box(
        &self,
        buf: &mut [Rgba],
        w: usize,
        h: usize,
        center: Vec2,
        half: Vec2,
        color: Rgba,
    ) {
        let corners = [
            center + Vec2::new(-half.x, -half.y),
            center + Vec2::new(half.x, -half.y),
            center + Vec2::new(half.x, half.y),
            center + Vec2::new(-half.x, half.y),
        ];
        for i in 0..4 {
            let a = self.to_screen(corners[i], h);
            let b = self.to_screen(corners[(i + 1) % 4], h);
            draw_line(buf, w, h, a.0, a.1, b.0, b.1, color);
        }
    }

    fn draw_circle(
        &self,
        buf: &mut [Rgba],
        w: usize,
        h: usize,
        center: Vec2,
        radius: f32,
        color: Rgba,
    ) {
        let step = std::f32::consts::TAU / CIRCLE_STEPS as f32;
        let mut spoke = Vec2::new(radius, 0.0);
        for _ in 0..CIRCLE_STEPS {
            let next = geometry::rotate(spoke, step);
            let a = self.to_screen(center + spoke, h);
            let b = self.to_screen(center + next, h);
            draw_line(buf, w, h, a.0, a.1, b.0, b.1, color);
            spoke = next;
        }
    }
}

/// Integer Bresenham line-drawing algorithm.
pub fn draw_line(
    buf: &mut [Rgba],
    w: usize,
    h: usize,
    mut x0: i32,
    mut y0: i32,
    x1: i32,
    y1: i32,
    colour: Rgba,
) {
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if (0..w as i32).contains(&x0) && (0..h as i32).contains(&y0) {
            buf[y0 as usize * w + x0 as usize] = colour;
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            if x0 == x1 {
                break;
            }
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            if y0 == y1 {
                break;
            }
            err += dx;
            y0 += sy;
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
