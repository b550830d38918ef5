mod body;
pub mod narrowphase;
mod world;

pub use body::{Body, BodyDef, BodyId, BodyKind, Shape};
pub use world::PhysicsWorld;
