mod texture;
pub mod tga;

pub use texture::{NO_TEXTURE, Texture, TextureBank, TextureError, TextureId};
