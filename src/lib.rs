//! Raycasting view of a small 2-D rigid-body world.
//!
//! One ray is cast per screen column through the physics world; every
//! surface the ray crosses is collected, sorted far-to-near and drawn as a
//! shaded vertical strip whose height encodes depth. Walls are flat-shaded,
//! billboard sprites sample a texture column.
//!
//! Module map:
//! * [`world`]  – camera and 2-D geometry helpers
//! * [`phys`]   – rigid-body world: bodies, fixed stepping, ray queries
//! * [`render`] – hit collection, surface styles, the column renderer,
//!   the debug wireframe overlay and frame blitting
//! * [`assets`] – texture bank and TGA loading
//! * [`sim`]    – fixed-timestep accumulator and solver constants

pub mod assets;
pub mod phys;
pub mod render;
pub mod sim;
pub mod world;
