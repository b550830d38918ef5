//! Minimal Targa (TGA) decoder for the sprite texture.
//!
//! ### Supported files
//! * Type 2 — uncompressed true-color, 24 or 32 bpp.
//! * Type 10 — run-length encoded true-color, 24 or 32 bpp.
//!
//! Color-mapped and grayscale images are rejected. 24-bit texels decode
//! with alpha 255; the renderer treats alpha 0 as transparent.

use byteorder::{LittleEndian as LE, ReadBytesExt};
use std::{
    fs::File,
    io::{self, BufReader, Read, Seek, SeekFrom},
    path::Path,
};
use thiserror::Error;

use crate::assets::texture::Texture;

/// Errors that can be encountered while decoding a TGA file.
#[derive(Error, Debug)]
pub enum TgaError {
    /// Underlying I/O failure – propagated unchanged.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Image type other than (RLE) true-color.
    #[error("unsupported TGA image type {0} (want 2 or 10)")]
    UnsupportedType(u8),

    /// Pixel depth other than 24 or 32 bits.
    #[error("unsupported TGA pixel depth {0} (want 24 or 32)")]
    UnsupportedDepth(u8),

    /// Width or height of zero.
    #[error("degenerate TGA dimensions {0}x{1}")]
    BadDimensions(u16, u16),

    /// RLE stream ended before the pixel area was filled.
    #[error("truncated RLE pixel data")]
    TruncatedRle,
}

/// Load a TGA from disk. The texture is named after the file stem.
pub fn load_tga<P: AsRef<Path>>(path: P) -> Result<Texture, TgaError> {
    let path = path.as_ref();
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_uppercase())
        .unwrap_or_else(|| "SPRITE".into());
    let mut r = BufReader::new(File::open(path)?);

    /*----------- 1. header ------------------------------------------*/
    let id_length = r.read_u8()?;
    let colormap_type = r.read_u8()?;
    let image_type = r.read_u8()?;
    if colormap_type != 0 || (image_type != 2 && image_type != 10) {
        return Err(TgaError::UnsupportedType(image_type));
    }
    r.seek(SeekFrom::Current(5))?; // color-map fields, unused for type 2/10
    let _x_origin = r.read_u16::<LE>()?;
    let _y_origin = r.read_u16::<LE>()?;
    let w = r.read_u16::<LE>()?;
    let h = r.read_u16::<LE>()?;
    let depth = r.read_u8()?;
    let descriptor = r.read_u8()?;
    if w == 0 || h == 0 {
        return Err(TgaError::BadDimensions(w, h));
    }
    let bytes_per_px = match depth {
        24 => 3usize,
        32 => 4usize,
        other => return Err(TgaError::UnsupportedDepth(other)),
    };
    r.seek(SeekFrom::Current(id_length as i64))?;

    /*----------- 2. pixel data --------------------------------------*/
    let (w, h) = (w as usize, h as usize);
    let mut pixels = vec![0u32; w * h];

    if image_type == 2 {
        let mut px = [0u8; 4];
        for slot in pixels.iter_mut() {
            r.read_exact(&mut px[..bytes_per_px])?;
            *slot = decode_texel(&px, bytes_per_px);
        }
    } else {
        let mut filled = 0usize;
        let mut px = [0u8; 4];
        while filled < pixels.len() {
            let packet = r.read_u8().map_err(|_| TgaError::TruncatedRle)?;
            let count = (packet as usize & 0x7F) + 1;
            if filled + count > pixels.len() {
                return Err(TgaError::TruncatedRle);
            }
            if packet & 0x80 != 0 {
                // run packet: one texel repeated
                r.read_exact(&mut px[..bytes_per_px])?;
                let texel = decode_texel(&px, bytes_per_px);
                pixels[filled..filled + count].fill(texel);
            } else {
                // raw packet
                for slot in &mut pixels[filled..filled + count] {
                    r.read_exact(&mut px[..bytes_per_px])?;
                    *slot = decode_texel(&px, bytes_per_px);
                }
            }
            filled += count;
        }
    }

    // Bit 5 of the descriptor: origin at the top. Storage is top-down,
    // so bottom-origin files get their rows flipped.
    if descriptor & 0x20 == 0 {
        for y in 0..h / 2 {
            let (top, bot) = (y * w, (h - 1 - y) * w);
            for x in 0..w {
                pixels.swap(top + x, bot + x);
            }
        }
    }

    Ok(Texture { name, w, h, pixels })
}

/// TGA stores BGR(A); pack into 0xAARRGGBB.
#[inline]
fn decode_texel(px: &[u8; 4], bytes_per_px: usize) -> u32 {
    let (b, g, r) = (px[0] as u32, px[1] as u32, px[2] as u32);
    let a = if bytes_per_px == 4 { px[3] as u32 } else { 0xFF };
    (a << 24) | (r << 16) | (g << 8) | b
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn header(image_type: u8, w: u16, h: u16, depth: u8, descriptor: u8) -> Vec<u8> {
        let mut v = vec![0u8, 0, image_type, 0, 0, 0, 0, 0];
        v.extend_from_slice(&0u16.to_le_bytes()); // x origin
        v.extend_from_slice(&0u16.to_le_bytes()); // y origin
        v.extend_from_slice(&w.to_le_bytes());
        v.extend_from_slice(&h.to_le_bytes());
        v.push(depth);
        v.push(descriptor);
        v
    }

    fn write_temp(bytes: &[u8]) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "raybox_tga_test_{}_{}.tga",
            std::process::id(),
            bytes.len()
        ));
        let mut f = File::create(&path).unwrap();
        f.write_all(bytes).unwrap();
        path
    }

    #[test]
    fn decode_uncompressed_32bpp_top_origin() {
        // 2x2, top-origin: red, green / blue, half-alpha white
        let mut bytes = header(2, 2, 2, 32, 0x20);
        for px in [
            [0u8, 0, 255, 255],
            [0, 255, 0, 255],
            [255, 0, 0, 255],
            [255, 255, 255, 128],
        ] {
            bytes.extend_from_slice(&px);
        }
        let path = write_temp(&bytes);
        let tex = load_tga(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!((tex.w, tex.h), (2, 2));
        assert_eq!(tex.pixels[0], 0xFF_FF_00_00);
        assert_eq!(tex.pixels[1], 0xFF_00_FF_00);
        assert_eq!(tex.pixels[2], 0xFF_00_00_FF);
        assert_eq!(tex.pixels[3], 0x80_FF_FF_FF);
    }

    #[test]
    fn decode_bottom_origin_flips_rows() {
        // 1x2, bottom-origin: first stored row is the image *bottom*
        let mut bytes = header(2, 1, 2, 24, 0);
        bytes.extend_from_slice(&[0, 0, 255]); // bottom row: red
        bytes.extend_from_slice(&[255, 0, 0]); // top row: blue
        let path = write_temp(&bytes);
        let tex = load_tga(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(tex.pixels[0], 0xFF_00_00_FF); // top row first
        assert_eq!(tex.pixels[1], 0xFF_FF_00_00);
    }

    #[test]
    fn decode_rle_run_and_raw() {
        // 2x2 RLE 24bpp top-origin: run of 3 red + 1 raw green
        let mut bytes = header(10, 2, 2, 24, 0x20);
        bytes.push(0x80 | 2); // run, count 3
        bytes.extend_from_slice(&[0, 0, 255]);
        bytes.push(0); // raw, count 1
        bytes.extend_from_slice(&[0, 255, 0]);
        let path = write_temp(&bytes);
        let tex = load_tga(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(tex.pixels[..3], [0xFF_FF_00_00; 3]);
        assert_eq!(tex.pixels[3], 0xFF_00_FF_00);
    }

    #[test]
    fn reject_colormapped() {
        let bytes = header(1, 2, 2, 24, 0);
        let path = write_temp(&bytes);
        let err = load_tga(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, TgaError::UnsupportedType(1)));
    }

    #[test]
    fn reject_truncated_rle() {
        let mut bytes = header(10, 2, 2, 24, 0x20);
        bytes.push(0x80 | 1); // run of 2, but no texel follows
        let path = write_temp(&bytes);
        let err = load_tga(&path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, TgaError::TruncatedRle | TgaError::Io(_)));
    }
}
