//! # Underlay Engine
//!
//! Host-agnostic core of Lain's animated starfield underlay.
//!
//! ## Features
//!
//! - **Parallax Starfield**: Three star tiers drifting at different speeds
//! - **Ship & Flag Trail**: A bobbing spacecraft sprite with a pulsing flag trail
//! - **Draw Lists**: Rendering produces plain commands, executed by a backend
//! - **Fail Closed**: Missing assets disable only the draws that need them
//!
//! The host plugin (`lainstream`) owns one [`UnderlaySource`] per source
//! instance and forwards its lifecycle callbacks to it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use underlay_engine::prelude::*;
//!
//! fn frame(backend: &mut RecordingBackend) -> Result<(), UnderlayError> {
//!     let settings = MemorySettings::new();
//!     let assets = DirectoryAssets::new("data");
//!     let mut source = UnderlaySource::create(&settings, backend, &assets);
//!
//!     source.tick(true, 1.0 / 60.0);
//!     source.render(true, backend)?;
//!
//!     source.destroy(backend);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod foundation;
pub mod config;
pub mod assets;
pub mod scene;
pub mod render;
pub mod source;

mod error;

pub use error::UnderlayError;
pub use source::UnderlaySource;

/// Common imports for host integrations
pub mod prelude {
    pub use crate::{
        UnderlayError,
        UnderlaySource,
        assets::{AssetError, AssetResolver, DirectoryAssets, ImageData},
        config::{Config, UnderlayConfig},
        render::{
            BackendResult, DrawCommand, DrawList, GraphicsBackend, RecordingBackend,
            RenderError, SampleFilter,
        },
        scene::SceneState,
        source::{MemorySettings, PropertySheet, SettingsStore},
    };
}
