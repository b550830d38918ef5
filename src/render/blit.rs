//! Nearest-neighbour stretch of the off-screen frame onto the window
//! buffer. The frame is rendered at a selectable (usually smaller)
//! resolution and scaled up at present time.

use crate::render::Rgba;

/// Stretch `src` (`sw`×`sh`) over `dst` (`dw`×`dh`). Transparent source
/// pixels (alpha 0) take `background` instead.
pub fn blit_scaled(
    src: &[Rgba],
    sw: usize,
    sh: usize,
    dst: &mut [Rgba],
    dw: usize,
    dh: usize,
    background: Rgba,
) {
    debug_assert_eq!(src.len(), sw * sh);
    debug_assert_eq!(dst.len(), dw * dh);

    for y in 0..dh {
        let sy = y * sh / dh;
        let src_row = &src[sy * sw..(sy + 1) * sw];
        let dst_row = &mut dst[y * dw..(y + 1) * dw];
        for (x, out) in dst_row.iter_mut().enumerate() {
            let c = src_row[x * sw / dw];
            *out = if c >> 24 == 0 { background } else { c };
        }
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = 0xFF_80_80_FF;

    #[test]
    fn transparent_source_becomes_background() {
        let src = vec![0u32; 4];
        let mut dst = vec![0u32; 16];
        blit_scaled(&src, 2, 2, &mut dst, 4, 4, BG);
        assert!(dst.iter().all(|&p| p == BG));
    }

    #[test]
    fn upscale_preserves_quadrants() {
        // 2x2 source: opaque red / transparent over transparent / opaque blue
        let src = vec![0xFF_FF_00_00, 0, 0, 0xFF_00_00_FF];
        let mut dst = vec![0u32; 16];
        blit_scaled(&src, 2, 2, &mut dst, 4, 4, BG);
        assert_eq!(dst[0], 0xFF_FF_00_00); // top-left quadrant
        assert_eq!(dst[3], BG); // top-right was transparent
        assert_eq!(dst[15], 0xFF_00_00_FF); // bottom-right quadrant
    }

    #[test]
    fn identity_scale_copies() {
        let src = vec![0xFF_01_02_03; 9];
        let mut dst = vec![0u32; 9];
        blit_scaled(&src, 3, 3, &mut dst, 3, 3, BG);
        assert_eq!(src, dst);
    }
}
