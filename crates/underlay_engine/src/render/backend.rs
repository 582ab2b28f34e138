//! Backend abstraction trait for the underlay renderer
//!
//! A backend owns the host's graphics resources and executes draw lists.
//! Resource handles are opaque to everything above the backend.

use std::path::Path;

use crate::assets::ImageData;
use crate::render::{DrawList, RenderError};

/// Result type for backend operations
pub type BackendResult<T> = Result<T, RenderError>;

/// Handle to a texture owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a shader effect owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectHandle(pub u64);

/// Handle to a sampler state owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerHandle(pub u64);

/// Handle to the unit quad vertex buffer owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuadHandle(pub u64);

/// Texture filtering for sampler states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleFilter {
    /// Nearest neighbour, keeps pixel art crisp
    Point,
    /// Bilinear
    Linear,
}

/// Graphics backend trait
///
/// Single-threaded: the host calls every method from its render thread.
pub trait GraphicsBackend {
    /// Run `f` with the backend's graphics context made current
    ///
    /// Resource creation and destruction outside the host's render callback
    /// must go through this.
    fn with_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T
    where
        Self: Sized,
    {
        f(self)
    }

    /// Upload an RGBA image as a texture
    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle>;

    /// Load a texture from an image file
    fn load_texture(&mut self, path: &Path) -> BackendResult<TextureHandle>;

    /// Size of a live texture in pixels
    fn texture_size(&self, texture: TextureHandle) -> BackendResult<(u32, u32)>;

    /// Compile an effect file
    fn load_effect(&mut self, path: &Path) -> BackendResult<EffectHandle>;

    /// Create a sampler state
    fn create_sampler(&mut self, filter: SampleFilter) -> BackendResult<SamplerHandle>;

    /// Build the unit quad `[0,1]²` with matching texture coordinates, as a
    /// four-vertex triangle strip
    fn create_unit_quad(&mut self) -> BackendResult<QuadHandle>;

    /// Release a texture
    fn destroy_texture(&mut self, texture: TextureHandle);

    /// Release an effect
    fn destroy_effect(&mut self, effect: EffectHandle);

    /// Release a sampler state
    fn destroy_sampler(&mut self, sampler: SamplerHandle);

    /// Release the unit quad
    fn destroy_quad(&mut self, quad: QuadHandle);

    /// Execute one frame's draw list
    fn submit(&mut self, frame: &DrawList) -> BackendResult<()>;
}
