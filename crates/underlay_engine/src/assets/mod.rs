//! Asset resolution and loading
//!
//! The underlay consumes a handful of files shipped in the plugin's data
//! directory. They are resolved by name once at creation and never reloaded.

pub mod image_loader;
pub mod shader;
pub mod star_sprite;

pub use image_loader::ImageData;
pub use shader::ShaderSource;
pub use star_sprite::{generate_star_sprite, STAR_SPRITE_SIZE};

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File names of the assets loaded at creation
pub mod names {
    /// Side view of the spacecraft, drawn facing right
    pub const STARFIGHTER: &str = "starfighter-side.png";

    /// Trans pride flag texture for the trail
    pub const TRANS_FLAG: &str = "transflag.webp";

    /// Lesbian pride flag texture for the trail
    pub const LESBIAN_FLAG: &str = "lesbianflag.webp";

    /// Effect that blends and waves the two flags
    pub const FLAG_EFFECT: &str = "flag-shader.effect";
}

/// Asset errors
#[derive(Error, Debug)]
pub enum AssetError {
    /// Asset file not found
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Asset loading failed
    #[error("Failed to load asset: {0}")]
    LoadFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Maps asset names to files on disk
pub trait AssetResolver {
    /// Resolve an asset name to an existing file
    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError>;
}

/// Resolves assets inside a single data directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Create a resolver rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Data directory this resolver looks in
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetResolver for DirectoryAssets {
    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        let path = self.root.join(name);
        if path.is_file() {
            Ok(path)
        } else {
            Err(AssetError::NotFound(path.display().to_string()))
        }
    }
}
