use glam::Vec2;

/// Stable handle for a body in the world's arena.
///
/// Valid for the lifetime of the owning [`crate::phys::PhysicsWorld`];
/// bodies are never removed in this demo, so handles never dangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Never moves; ignored by integration.
    Static,
    /// Integrated under gravity and pushed out of overlaps.
    Dynamic,
}

/// Collision shapes supported by the world.
#[derive(Clone, Copy, Debug)]
pub enum Shape {
    /// Axis-aligned box given by half extents along X/Y.
    Box { half_extents: Vec2 },
    /// Circle centered on the body position.
    Circle { radius: f32 },
}

/// Everything needed to create a body.
#[derive(Clone, Copy, Debug)]
pub struct BodyDef {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub shape: Shape,
    pub vel: Vec2,
}

impl BodyDef {
    pub fn new(kind: BodyKind, pos: Vec2, shape: Shape) -> Self {
        Self {
            kind,
            pos,
            shape,
            vel: Vec2::ZERO,
        }
    }

    pub fn with_velocity(mut self, vel: Vec2) -> Self {
        self.vel = vel;
        self
    }
}

/// Live body state.
#[derive(Clone, Copy, Debug)]
pub struct Body {
    pub kind: BodyKind,
    pub pos: Vec2,
    pub vel: Vec2,
    pub shape: Shape,
}

impl Body {
    pub(crate) fn from_def(def: BodyDef) -> Self {
        Self {
            kind: def.kind,
            pos: def.pos,
            vel: def.vel,
            shape: def.shape,
        }
    }
}
