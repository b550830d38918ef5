//! Per-surface render descriptors.
//!
//! Bodies in the physics world carry no visual information. The scene
//! owner attaches a [`SurfaceStyle`] to a body id in a [`StyleRegistry`];
//! the compositor looks styles up by id and silently skips bodies without
//! one (invisible collision geometry such as camera-only occluders).

use std::collections::HashMap;

use crate::assets::TextureId;
use crate::phys::BodyId;
use crate::render::Rgba;

/// Visual descriptor of one physics surface. Immutable after attachment,
/// shared read-only by every ray that strikes the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceStyle {
    /// Flat-shaded opaque wall.
    Wall { tint: Rgba },
    /// Texture-sampled billboard: a disc of `radius` centered on the body,
    /// always facing the camera.
    Sprite {
        tint: Rgba,
        texture: TextureId,
        radius: f32,
    },
}

impl SurfaceStyle {
    pub fn wall(tint: Rgba) -> Self {
        Self::Wall { tint }
    }

    /// Untinted sprite with the default billboard radius of 1.0.
    pub fn sprite(texture: TextureId) -> Self {
        Self::Sprite {
            tint: 0xFF_FF_FF_FF,
            texture,
            radius: 1.0,
        }
    }

    /// Override the billboard radius; walls pass through unchanged.
    pub fn with_radius(self, radius: f32) -> Self {
        match self {
            Self::Sprite { tint, texture, .. } => Self::Sprite {
                tint,
                texture,
                radius,
            },
            wall @ Self::Wall { .. } => wall,
        }
    }
}

/// Registry mapping stable body ids to their render styles.
///
/// Owned by the scene, not the renderer: when a body goes away its style
/// is detached by the same owner.
#[derive(Default)]
pub struct StyleRegistry {
    styles: HashMap<BodyId, SurfaceStyle>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, id: BodyId, style: SurfaceStyle) {
        self.styles.insert(id, style);
    }

    pub fn style(&self, id: BodyId) -> Option<&SurfaceStyle> {
        self.styles.get(&id)
    }

    pub fn detach(&mut self, id: BodyId) -> Option<SurfaceStyle> {
        self.styles.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
