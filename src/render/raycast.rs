//! The raycast render pass.
//!
//! One ray per screen column: collect every crossing, sort far-to-near and
//! overdraw nearer strips on top of farther ones. Depth compositing needs
//! no buffer this way; the nearest metadata-bearing surface simply wins.

use glam::Vec2;

use crate::assets::TextureBank;
use crate::phys::PhysicsWorld;
use crate::render::{
    DistanceMode, RAY_LENGTH, RayDirMode, RenderConfig, Rgba, StyleRegistry, SurfaceStyle,
    collector::{collect_hits, sort_far_to_near},
};
use crate::world::{Camera, geometry};

/// Scratch value for untouched pixels; alpha 0 marks them background.
pub const CLEAR: Rgba = 0x0000_0000;

/// Owns the off-screen frame the columns are drawn into.
///
/// Usage per frame: [`begin_frame`](Self::begin_frame) →
/// [`render_view`](Self::render_view) → [`end_frame`](Self::end_frame),
/// which loans the finished buffer to a submit closure exactly once.
#[derive(Default)]
pub struct Raycaster {
    width: usize,
    height: usize,
    scratch: Vec<Rgba>,
}

impl Raycaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)allocate the scratch frame and clear it to transparent.
    pub fn begin_frame(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.scratch.clear();
        self.scratch.resize(width * height, CLEAR);
    }

    /// Finish the frame and **loan** the buffer to `submit`.
    pub fn end_frame<F>(&mut self, submit: F)
    where
        F: FnOnce(&[Rgba], usize, usize),
    {
        submit(&self.scratch, self.width, self.height);
    }

    /// Cast one ray per column of the current frame and composite the
    /// resulting strips. Reads the world and camera, writes only the
    /// scratch buffer; rendering twice without an intervening step is
    /// byte-identical.
    pub fn render_view(
        &mut self,
        world: &PhysicsWorld,
        camera: &Camera,
        styles: &StyleRegistry,
        textures: &TextureBank,
        cfg: &RenderConfig,
    ) {
        let view_plane = cfg.angle_modifier * Vec2::new(-camera.fwd.y, camera.fwd.x);
        let view_angle = std::f32::consts::FRAC_PI_4 * cfg.angle_modifier;

        for col in 0..self.width {
            // [-1, 1] across the screen from left to right
            let screen_x = -1.0 + 2.0 * (col as f32 / self.width as f32);
            let dir = match cfg.ray_dir {
                RayDirMode::ViewPlane => {
                    let d = camera.fwd + screen_x * view_plane;
                    if cfg.normalize_view_plane_dirs {
                        d.normalize_or_zero()
                    } else {
                        d
                    }
                }
                RayDirMode::Rotated => geometry::rotate(camera.fwd, view_angle * screen_x),
            };
            let end = camera.pos + RAY_LENGTH * dir;

            let mut hits = collect_hits(world, camera.pos, end, cfg.dedup);
            sort_far_to_near(&mut hits);

            for hit in &hits {
                // Surfaces without render metadata are invisible
                let Some(style) = styles.style(hit.body) else {
                    continue;
                };
                match *style {
                    SurfaceStyle::Wall { tint } => {
                        let distance = depth_of(cfg, camera, hit.point);
                        self.draw_wall_strip(col, distance, tint);
                    }
                    SurfaceStyle::Sprite {
                        tint,
                        texture,
                        radius,
                    } => {
                        let center = world.body(hit.body).pos;
                        self.draw_sprite_strip(
                            col, camera, cfg, center, end, tint, texture, radius, textures,
                        );
                    }
                }
            }
        }
    }

    /*──────────────────────── strip drawing ─────────────────────────*/

    fn draw_wall_strip(&mut self, col: usize, distance: f32, tint: Rgba) {
        let Some((y0, y1, _, _)) = self.strip_extent(distance) else {
            return;
        };
        let color = scale_rgb(tint, shade(distance));
        for y in y0..=y1 {
            self.scratch[y as usize * self.width + col] = color;
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_sprite_strip(
        &mut self,
        col: usize,
        camera: &Camera,
        cfg: &RenderConfig,
        center: Vec2,
        ray_end: Vec2,
        tint: Rgba,
        texture: crate::assets::TextureId,
        radius: f32,
        textures: &TextureBank,
    ) {
        // Depth comes from the billboard center, not the hit point, so the
        // whole disc renders at one depth.
        let distance = depth_of(cfg, camera, center);
        let Some(u) = billboard_u(camera.pos, ray_end, center, radius) else {
            return;
        };
        let Some((y0, y1, top, line_height)) = self.strip_extent(distance) else {
            return;
        };

        let tex = textures.texture_or_missing(texture);
        let tex_x = ((u * tex.w as f32) as usize).min(tex.w - 1);
        let strip_tint = scale_rgb(tint, shade(distance));

        // Vertical texture coordinate spans the whole (unclipped) strip
        let v_step = tex.h as f32 / line_height.max(1) as f32;
        let mut v_f = (y0 - top) as f32 * v_step;
        for y in y0..=y1 {
            let v = (v_f as usize).min(tex.h - 1);
            v_f += v_step;
            let texel = tex.pixels[v * tex.w + tex_x];
            if texel >> 24 == 0 {
                continue; // transparent texel
            }
            self.scratch[y as usize * self.width + col] = modulate(texel, strip_tint);
        }
    }

    /// Clipped `(y0, y1)` plus unclipped top and height of the centered
    /// strip for `distance`. `None` when the strip is degenerate.
    fn strip_extent(&self, distance: f32) -> Option<(i32, i32, i32, i32)> {
        if distance.abs() <= f32::EPSILON {
            return None;
        }
        let line_height = (self.height as f32 / distance).abs() as i32;
        if line_height == 0 {
            return None;
        }
        let half = self.height as i32 / 2;
        let top = half - line_height / 2;
        let y0 = top.max(0);
        let y1 = (half + line_height / 2).min(self.height as i32 - 1);
        if y0 > y1 {
            return None;
        }
        Some((y0, y1, top, line_height))
    }
}

/// Distance from the ray origin to `point` under the configured metric.
#[inline]
fn depth_of(cfg: &RenderConfig, camera: &Camera, point: Vec2) -> f32 {
    let ray = point - camera.pos;
    match cfg.distance {
        DistanceMode::True => ray.length(),
        DistanceMode::Perpendicular => ray.dot(camera.fwd),
    }
}

/// Darkening factor: 1 at the camera, 0 at `RAY_LENGTH` and beyond.
#[inline]
fn shade(distance: f32) -> f32 {
    (1.0 - distance / RAY_LENGTH).clamp(0.0, 1.0)
}

/// Horizontal billboard coordinate in `[0, 1]` for the cast segment
/// `origin→ray_end` against a disc of `radius` around `center`.
///
/// The billboard chord is the segment of length `2·radius` through the
/// center, perpendicular to the camera-to-center direction. Cast segments
/// that miss the chord — parallel, degenerate, or stopping short of it —
/// yield `None`: the sprite contributes no strip for them. A ray exactly
/// through the disc edge maps to 0 or 1, never outside.
///
/// Callers pass the full cast segment, not the hit point: the chord sits
/// behind the disc's near surface, and the cast may be longer than
/// `RAY_LENGTH` when its direction is not unit length.
pub fn billboard_u(origin: Vec2, ray_end: Vec2, center: Vec2, radius: f32) -> Option<f32> {
    let to_center = center - origin;
    let axis = Vec2::new(-to_center.y, to_center.x).normalize_or_zero();
    if axis == Vec2::ZERO || radius <= 0.0 {
        return None;
    }
    let chord0 = center - axis * radius;
    let chord1 = center + axis * radius;

    let p = geometry::segment_intersection(origin, ray_end, chord0, chord1)?;
    // Small slack so exact edge hits stay on the disc
    if (p - center).length_squared() > radius * radius + 1e-5 {
        return None;
    }
    Some(((p - chord0).dot(axis) / (2.0 * radius)).clamp(0.0, 1.0))
}

/// Scale the RGB channels of `c` by `f`, forcing alpha opaque.
#[inline]
fn scale_rgb(c: Rgba, f: f32) -> Rgba {
    let r = (((c >> 16) & 0xFF) as f32 * f) as u32;
    let g = (((c >> 8) & 0xFF) as f32 * f) as u32;
    let b = ((c & 0xFF) as f32 * f) as u32;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/// Per-channel multiply of a texel by the shaded tint.
#[inline]
fn modulate(texel: Rgba, tint: Rgba) -> Rgba {
    let r = ((texel >> 16) & 0xFF) * ((tint >> 16) & 0xFF) / 255;
    let g = ((texel >> 8) & 0xFF) * ((tint >> 8) & 0xFF) / 255;
    let b = (texel & 0xFF) * (tint & 0xFF) / 255;
    0xFF00_0000 | (r << 16) | (g << 8) | b
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
