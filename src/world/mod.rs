mod camera;
pub mod geometry;

pub use camera::Camera;
