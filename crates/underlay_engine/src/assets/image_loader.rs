//! Image loading utilities for texture data
//!
//! Provides PNG and WebP loading for use with the graphics backends.

use std::path::Path;
use image::RgbaImage;
use crate::assets::AssetError;

/// Loaded image data ready for GPU upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    /// Raw RGBA pixel data, row-major from the top-left
    pub data: Vec<u8>,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
}

impl ImageData {
    /// Load an image from a file path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path_ref = path.as_ref();

        log::debug!("Loading image from: {:?}", path_ref);

        // Sniff the format from the contents, asset names do not always match
        let img = image::ImageReader::open(path_ref)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| AssetError::LoadFailed(format!("Failed to open image {}: {}", path_ref.display(), e)))?
            .decode()
            .map_err(|e| AssetError::LoadFailed(format!("Failed to decode image {}: {}", path_ref.display(), e)))?;

        let image = Self::from_rgba(img.to_rgba8());
        log::info!("Loaded image {}x{} from {:?}", image.width, image.height, path_ref);
        Ok(image)
    }

    /// Load image from memory (useful for embedded resources)
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let img = image::load_from_memory(bytes)
            .map_err(|e| AssetError::LoadFailed(format!("Failed to load image from bytes: {}", e)))?;

        let image = Self::from_rgba(img.to_rgba8());
        log::debug!("Loaded image {}x{} from memory", image.width, image.height);
        Ok(image)
    }

    /// Take ownership of an RGBA8 buffer
    pub fn from_rgba(rgba: RgbaImage) -> Self {
        let (width, height) = rgba.dimensions();
        Self {
            data: rgba.into_raw(),
            width,
            height,
        }
    }

    /// RGBA value of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = ((y * self.width + x) * 4) as usize;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.data[offset..offset + 4]);
        Some(rgba)
    }

    /// Get the size of the image data in bytes
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }
}
