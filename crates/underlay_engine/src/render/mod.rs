//! Rendering
//!
//! Rendering is split the same way for every frame:
//! - [`build_frame`] turns the scene and resource handles into a [`DrawList`]
//! - a [`GraphicsBackend`] executes the list with real draw calls
//!
//! The renderer never touches the backend directly, which keeps it pure and
//! lets the host backend stay a thin translation layer.

pub mod backend;
pub mod commands;
pub mod recording;
pub mod renderer;
pub mod resources;

pub use backend::{
    BackendResult, EffectHandle, GraphicsBackend, QuadHandle, SampleFilter, SamplerHandle,
    TextureHandle,
};
pub use commands::{
    BlendMode, DrawCommand, DrawList, EffectRef, ParamValue, QuadDraw, QuadPlacement,
    ShaderParam, Technique,
};
pub use recording::RecordingBackend;
pub use renderer::{build_frame, ShipLayout};
pub use resources::{SceneResources, ShipSprite};

use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A texture, buffer, sampler or effect could not be created
    #[error("Resource creation failed: {0}")]
    ResourceCreationFailed(String),

    /// A draw operation failed during execution
    #[error("Rendering failed: {0}")]
    RenderingFailed(String),

    /// A handle did not refer to a live resource
    #[error("Invalid handle: {0}")]
    InvalidHandle(String),

    /// Backend-specific error occurred
    #[error("Backend error: {0}")]
    BackendError(String),
}
