//! Graphics resources owned by one underlay source
//!
//! Every handle is optional. A resource that fails to load is logged and
//! left empty, and the renderer skips whatever depends on it.

use crate::assets::{generate_star_sprite, names, AssetResolver, STAR_SPRITE_SIZE};
use crate::render::{
    BackendResult, EffectHandle, GraphicsBackend, QuadHandle, SampleFilter, SamplerHandle,
    TextureHandle,
};

/// Ship texture with its pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipSprite {
    /// Texture handle
    pub texture: TextureHandle,
    /// Texture width in pixels
    pub width: u32,
    /// Texture height in pixels
    pub height: u32,
}

/// All graphics resources of a source instance
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SceneResources {
    /// Unit quad every draw uses
    pub quad: Option<QuadHandle>,
    /// Procedural star glow
    pub star: Option<TextureHandle>,
    /// Spacecraft sprite
    pub ship: Option<ShipSprite>,
    /// Nearest-neighbour sampler for the ship
    pub nearest: Option<SamplerHandle>,
    /// Flag trail effect
    pub flag_effect: Option<EffectHandle>,
    /// First trail flag
    pub trans_flag: Option<TextureHandle>,
    /// Second trail flag
    pub lesbian_flag: Option<TextureHandle>,
}

fn loaded<T>(what: &str, result: BackendResult<T>) -> Option<T> {
    match result {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::warn!("Underlay {} unavailable: {}", what, e);
            None
        }
    }
}

fn load_texture_asset<B: GraphicsBackend>(
    backend: &mut B,
    assets: &impl AssetResolver,
    name: &str,
) -> Option<TextureHandle> {
    match assets.resolve(name) {
        Ok(path) => loaded(name, backend.load_texture(&path)),
        Err(e) => {
            log::warn!("Underlay asset {} unavailable: {}", name, e);
            None
        }
    }
}

impl SceneResources {
    /// Create every resource the underlay draws with
    ///
    /// Must run inside the backend's graphics context.
    pub fn load<B: GraphicsBackend>(backend: &mut B, assets: &impl AssetResolver) -> Self {
        let star = loaded("star sprite", backend.create_texture(&generate_star_sprite(STAR_SPRITE_SIZE)));
        let quad = loaded("unit quad", backend.create_unit_quad());

        let ship = load_texture_asset(backend, assets, names::STARFIGHTER).and_then(|texture| {
            match backend.texture_size(texture) {
                Ok((width, height)) => Some(ShipSprite { texture, width, height }),
                Err(e) => {
                    log::warn!("Underlay ship texture has no size: {}", e);
                    backend.destroy_texture(texture);
                    None
                }
            }
        });
        let nearest = loaded("nearest sampler", backend.create_sampler(SampleFilter::Point));

        let flag_effect = match assets.resolve(names::FLAG_EFFECT) {
            Ok(path) => loaded(names::FLAG_EFFECT, backend.load_effect(&path)),
            Err(e) => {
                log::warn!("Underlay asset {} unavailable: {}", names::FLAG_EFFECT, e);
                None
            }
        };
        let trans_flag = load_texture_asset(backend, assets, names::TRANS_FLAG);
        let lesbian_flag = load_texture_asset(backend, assets, names::LESBIAN_FLAG);

        let resources = Self {
            quad,
            star,
            ship,
            nearest,
            flag_effect,
            trans_flag,
            lesbian_flag,
        };
        log::debug!("Underlay resources loaded: {}/7", resources.live_count());
        resources
    }

    /// Whether the flag trail can be drawn
    pub const fn has_flag_trail(&self) -> bool {
        self.flag_effect.is_some() && self.trans_flag.is_some() && self.lesbian_flag.is_some()
    }

    /// Number of live handles
    pub fn live_count(&self) -> usize {
        [
            self.quad.is_some(),
            self.star.is_some(),
            self.ship.is_some(),
            self.nearest.is_some(),
            self.flag_effect.is_some(),
            self.trans_flag.is_some(),
            self.lesbian_flag.is_some(),
        ]
        .into_iter()
        .filter(|live| *live)
        .count()
    }

    /// Release every live handle, leaving all of them empty
    ///
    /// Must run inside the backend's graphics context.
    pub fn release<B: GraphicsBackend>(&mut self, backend: &mut B) {
        if let Some(star) = self.star.take() {
            backend.destroy_texture(star);
        }
        if let Some(quad) = self.quad.take() {
            backend.destroy_quad(quad);
        }
        if let Some(ship) = self.ship.take() {
            backend.destroy_texture(ship.texture);
        }
        if let Some(nearest) = self.nearest.take() {
            backend.destroy_sampler(nearest);
        }
        if let Some(flag) = self.trans_flag.take() {
            backend.destroy_texture(flag);
        }
        if let Some(flag) = self.lesbian_flag.take() {
            backend.destroy_texture(flag);
        }
        if let Some(effect) = self.flag_effect.take() {
            backend.destroy_effect(effect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::DirectoryAssets;
    use crate::render::RecordingBackend;
    use image::{Rgba, RgbaImage};

    fn write_assets(dir: &std::path::Path) {
        RgbaImage::from_pixel(56, 32, Rgba([200, 200, 255, 255]))
            .save(dir.join(names::STARFIGHTER))
            .unwrap();
        RgbaImage::from_pixel(5, 3, Rgba([91, 206, 250, 255]))
            .save_with_format(dir.join(names::TRANS_FLAG), image::ImageFormat::Png)
            .unwrap();
        RgbaImage::from_pixel(5, 3, Rgba([214, 41, 0, 255]))
            .save_with_format(dir.join(names::LESBIAN_FLAG), image::ImageFormat::Png)
            .unwrap();
        std::fs::write(dir.join(names::FLAG_EFFECT), "technique Draw\n{\n}\n").unwrap();
    }

    #[test]
    fn test_load_everything() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path());
        let mut backend = RecordingBackend::new();

        let resources = SceneResources::load(&mut backend, &DirectoryAssets::new(dir.path()));

        assert_eq!(resources.live_count(), 7);
        assert!(resources.has_flag_trail());
        let ship = resources.ship.unwrap();
        assert_eq!((ship.width, ship.height), (56, 32));
        assert_eq!(backend.texture_size(resources.star.unwrap()), Ok((16, 16)));
        assert_eq!(backend.live_resources(), 7);
    }

    #[test]
    fn test_missing_assets_fail_closed() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = RecordingBackend::new();

        let resources = SceneResources::load(&mut backend, &DirectoryAssets::new(dir.path()));

        assert!(resources.quad.is_some());
        assert!(resources.star.is_some());
        assert!(resources.nearest.is_some());
        assert!(resources.ship.is_none());
        assert!(!resources.has_flag_trail());
        assert_eq!(resources.live_count(), 3);
    }

    #[test]
    fn test_release_destroys_all_handles() {
        let dir = tempfile::tempdir().unwrap();
        write_assets(dir.path());
        let mut backend = RecordingBackend::new();
        let mut resources = SceneResources::load(&mut backend, &DirectoryAssets::new(dir.path()));

        resources.release(&mut backend);

        assert_eq!(resources, SceneResources::default());
        assert_eq!(backend.live_resources(), 0);

        // Releasing twice is harmless
        resources.release(&mut backend);
        assert_eq!(backend.live_resources(), 0);
    }
}
