//! Everything between a ray query and a pixel.
//!
//! [`collector`] gathers every surface a ray crosses, [`surface`] maps
//! bodies to their visual descriptors, [`raycast`] turns camera + world
//! into vertical strips, [`debug`] draws the wireframe overlay and
//! [`blit`] stretches the off-screen frame onto the window.

pub mod blit;
pub mod collector;
pub mod debug;
pub mod raycast;
pub mod surface;

pub use collector::{DedupPolicy, HitList, RayHit, collect_hits, sort_far_to_near};
pub use debug::{DebugDraw, DrawFlags};
pub use raycast::Raycaster;
pub use surface::{StyleRegistry, SurfaceStyle};

use std::fmt;

/// Pixel format of the software frame-buffer (0xAARRGGBB).
pub type Rgba = u32;

/// How far rays travel before they stop; also the distance at which the
/// shade factor reaches zero.
pub const RAY_LENGTH: f32 = 15.0;

/// Depth metric applied uniformly to walls and sprites.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DistanceMode {
    /// Euclidean length of (hit − ray origin).
    True,
    /// Component of (hit − ray origin) along the camera forward vector;
    /// removes fisheye distortion.
    Perpendicular,
}

impl DistanceMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::True => Self::Perpendicular,
            Self::Perpendicular => Self::True,
        }
    }
}

impl fmt::Display for DistanceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::True => "true distance",
            Self::Perpendicular => "perpendicular distance",
        })
    }
}

/// How the per-column ray direction is derived from the camera.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayDirMode {
    /// `fwd + screen_x · view_plane`, the view plane being the forward
    /// vector rotated 90° and scaled by the angle modifier.
    ViewPlane,
    /// `rotate(fwd, view_angle · screen_x)` with
    /// `view_angle = (π/4) · angle modifier`.
    Rotated,
}

impl RayDirMode {
    pub fn toggled(self) -> Self {
        match self {
            Self::ViewPlane => Self::Rotated,
            Self::Rotated => Self::ViewPlane,
        }
    }
}

impl fmt::Display for RayDirMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ViewPlane => "view plane",
            Self::Rotated => "rotated forward vector",
        })
    }
}

/// Immutable per-frame render settings, built from input state each tick
/// and threaded into [`Raycaster::render_view`].
#[derive(Clone, Copy, Debug)]
pub struct RenderConfig {
    pub distance: DistanceMode,
    pub ray_dir: RayDirMode,
    /// Field-of-view modifier, clamped to
    /// [`Self::MIN_ANGLE_MODIFIER`, `Self::MAX_ANGLE_MODIFIER`].
    pub angle_modifier: f32,
    /// The historical view-plane mode casts un-normalized directions,
    /// which widens the effective field of view and skews perpendicular
    /// distances toward the screen edges. `false` preserves that
    /// behaviour; `true` normalizes like the rotated mode.
    pub normalize_view_plane_dirs: bool,
    pub dedup: DedupPolicy,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            distance: DistanceMode::True,
            ray_dir: RayDirMode::ViewPlane,
            angle_modifier: 1.0,
            normalize_view_plane_dirs: false,
            dedup: DedupPolicy::KeepAll,
        }
    }
}

impl RenderConfig {
    pub const MIN_ANGLE_MODIFIER: f32 = 0.25;
    pub const MAX_ANGLE_MODIFIER: f32 = 2.0;

    /// Adjust the field-of-view modifier, clamping to the legal range.
    pub fn nudge_angle(&mut self, delta: f32) {
        self.angle_modifier = (self.angle_modifier + delta)
            .clamp(Self::MIN_ANGLE_MODIFIER, Self::MAX_ANGLE_MODIFIER);
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
