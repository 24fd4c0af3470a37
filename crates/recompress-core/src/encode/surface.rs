//! Off-screen raster surface the source image is drawn onto before encoding.

use crate::decode::SourceImage;

/// An opaque RGB raster at the source's native resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterSurface {
    pub width: u32,
    pub height: u32,
    /// RGB pixel data, `width * height * 3` bytes.
    pub pixels: Vec<u8>,
}

impl RasterSurface {
    /// Draw `source` onto a fresh surface.
    ///
    /// The surface starts out solid black and the source is composited over
    /// it, so partially transparent pixels darken and fully transparent ones
    /// come out black.
    pub fn render(source: &SourceImage) -> Self {
        let pixels = if source.has_transparency() {
            source
                .pixels
                .chunks_exact(4)
                .flat_map(|px| {
                    let alpha = u16::from(px[3]);
                    [
                        over_black(px[0], alpha),
                        over_black(px[1], alpha),
                        over_black(px[2], alpha),
                    ]
                })
                .collect()
        } else {
            let mut rgb = Vec::with_capacity(source.pixels.len() / 4 * 3);
            for px in source.pixels.chunks_exact(4) {
                rgb.extend_from_slice(&px[..3]);
            }
            rgb
        };

        Self {
            width: source.width,
            height: source.height,
            pixels,
        }
    }
}

#[inline]
fn over_black(channel: u8, alpha: u16) -> u8 {
    // Rounded c * a / 255; never exceeds 255.
    ((u16::from(channel) * alpha + 127) / 255) as u8
}
