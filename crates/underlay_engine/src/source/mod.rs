//! Underlay source lifecycle
//!
//! [`UnderlaySource`] is the per-instance object behind the host callbacks:
//! create, update, tick, render, destroy and the property sheet. The host
//! decides when each runs; the source never schedules anything itself.

pub mod properties;
pub mod settings;

pub use properties::{Property, PropertyKind, PropertySheet};
pub use settings::{MemorySettings, SettingsStore};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::assets::AssetResolver;
use crate::config::{UnderlayConfig, SHIP_KEY};
use crate::render::{build_frame, BackendResult, GraphicsBackend, SceneResources};
use crate::scene::{SceneState, CANVAS_SIZE};

/// One animated underlay instance
#[derive(Debug)]
pub struct UnderlaySource {
    scene: SceneState,
    resources: SceneResources,
    config: UnderlayConfig,
    rng: StdRng,
}

impl UnderlaySource {
    /// Create a source, loading its graphics resources
    pub fn create<B: GraphicsBackend>(
        settings: &impl SettingsStore,
        backend: &mut B,
        assets: &impl AssetResolver,
    ) -> Self {
        Self::create_with_rng(settings, backend, assets, StdRng::from_entropy())
    }

    /// Create a source with a caller-provided random source
    pub fn create_with_rng<B: GraphicsBackend>(
        settings: &impl SettingsStore,
        backend: &mut B,
        assets: &impl AssetResolver,
        mut rng: StdRng,
    ) -> Self {
        let scene = SceneState::new(&mut rng);
        let resources = backend.with_context(|gfx| SceneResources::load(gfx, assets));

        let mut source = Self {
            scene,
            resources,
            config: UnderlayConfig::default(),
            rng,
        };
        source.update(settings);

        log::info!(
            "Underlay source created ({} stars, ship {})",
            source.scene.starfield.len(),
            if source.config.ship { "shown" } else { "hidden" }
        );
        source
    }

    /// Apply changed settings
    pub fn update(&mut self, settings: &impl SettingsStore) {
        self.config = UnderlayConfig::from_settings(settings);
        self.scene.show_ship = self.config.ship;
        log::debug!("Underlay settings updated: {:?}", self.config);
    }

    /// Advance the animation; does nothing while the host reports the
    /// source inactive
    pub fn tick(&mut self, active: bool, seconds: f32) {
        if !active {
            return;
        }
        if !seconds.is_finite() || seconds < 0.0 {
            log::debug!("Ignoring tick with invalid elapsed time {}", seconds);
            return;
        }
        self.scene.tick(seconds, &mut self.rng);
    }

    /// Draw the current frame; draws nothing while inactive
    pub fn render<B: GraphicsBackend>(&self, active: bool, backend: &mut B) -> BackendResult<()> {
        if !active {
            return Ok(());
        }
        backend.submit(&build_frame(&self.scene, &self.resources))
    }

    /// Release every graphics resource
    pub fn destroy<B: GraphicsBackend>(mut self, backend: &mut B) {
        let resources = &mut self.resources;
        backend.with_context(|gfx| resources.release(gfx));
        log::info!("Underlay source destroyed");
    }

    /// Properties shown in the host's settings dialog
    pub fn properties() -> PropertySheet {
        let mut sheet = PropertySheet::new();
        sheet.add_bool(SHIP_KEY, "ship");
        sheet
    }

    /// Register default settings
    pub fn defaults(settings: &mut impl SettingsStore) {
        UnderlayConfig::register_defaults(settings);
    }

    /// Fixed canvas size in pixels
    pub const fn size() -> (u32, u32) {
        CANVAS_SIZE
    }

    /// Current animation state
    pub const fn scene(&self) -> &SceneState {
        &self.scene
    }

    /// Graphics resources held by the source
    pub const fn resources(&self) -> &SceneResources {
        &self.resources
    }

    /// Current options
    pub const fn config(&self) -> UnderlayConfig {
        self.config
    }
}
