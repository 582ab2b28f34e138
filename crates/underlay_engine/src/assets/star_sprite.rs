//! Procedural star sprite
//!
//! A soft round glow: grayscale intensity falls off with the fifth power of
//! the inverted distance from the centre, alpha stays opaque so the additive
//! star pass can tint it.

use image::{Rgba, RgbaImage};

use crate::assets::ImageData;
use crate::foundation::math::Vec2;

/// Edge length of the star sprite in pixels
pub const STAR_SPRITE_SIZE: u32 = 16;

const FALLOFF_EXPONENT: i32 = 5;

/// Intensity of a pixel of a square sprite with edge `size`
fn glow_intensity(x: u32, y: u32, size: u32) -> u8 {
    let size = size as f32;
    let offset = Vec2::new(
        (x as f32 + 0.5) / size - 0.5,
        (y as f32 + 0.5) / size - 0.5,
    ) * 2.0;

    let distance = offset.norm().min(1.0);
    let falloff = (1.0 - distance).powi(FALLOFF_EXPONENT);
    (falloff * 255.0) as u8
}

/// Synthesize the star sprite bitmap
pub fn generate_star_sprite(size: u32) -> ImageData {
    let sprite = RgbaImage::from_fn(size, size, |x, y| {
        let value = glow_intensity(x, y, size);
        Rgba([value, value, value, 0xFF])
    });
    ImageData::from_rgba(sprite)
}
