//! Fixture builders shared by unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};

/// A photo-like RGB image: smooth gradients plus deterministic sensor noise.
pub(crate) fn photo_like(width: u32, height: u32) -> RgbImage {
    let mut state: u32 = 0x2545_F491;
    RgbImage::from_fn(width, height, |x, y| {
        // xorshift32, amplitude +/-12
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        let noise = (state % 25) as i32 - 12;

        let r = (x * 255 / width.max(1)) as i32 + noise;
        let g = (y * 255 / height.max(1)) as i32 - noise;
        let b = ((x + y) * 127 / (width + height).max(1)) as i32 + 64 + noise / 2;
        Rgb([
            r.clamp(0, 255) as u8,
            g.clamp(0, 255) as u8,
            b.clamp(0, 255) as u8,
        ])
    })
}

/// PNG file bytes for [`photo_like`].
pub(crate) fn photo_like_png(width: u32, height: u32) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(photo_like(width, height))
        .write_to(&mut buf, ImageFormat::Png)
        .unwrap();
    buf.into_inner()
}
