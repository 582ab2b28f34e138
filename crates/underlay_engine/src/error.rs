//! Top-level error type

use thiserror::Error;

use crate::assets::AssetError;
use crate::config::ConfigError;
use crate::render::RenderError;

/// Errors surfaced by the underlay engine
#[derive(Error, Debug)]
pub enum UnderlayError {
    /// An asset could not be located or decoded
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    /// The graphics backend rejected an operation
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Configuration could not be read or written
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
