//! In-memory graphics backend
//!
//! Keeps track of live resources and records every submitted frame instead
//! of drawing it. Useful for tests and for running the underlay without a
//! host.

use std::collections::HashMap;
use std::path::Path;

use crate::assets::{ImageData, ShaderSource};
use crate::render::{
    BackendResult, DrawCommand, DrawList, EffectHandle, EffectRef, GraphicsBackend, ParamValue,
    QuadHandle, RenderError, SampleFilter, SamplerHandle, TextureHandle,
};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Resource {
    Texture { width: u32, height: u32 },
    Effect,
    Sampler(SampleFilter),
    Quad,
}

/// Graphics backend that records instead of drawing
#[derive(Debug, Default)]
pub struct RecordingBackend {
    next_id: u64,
    resources: HashMap<u64, Resource>,
    frames: Vec<DrawList>,
    context_entries: usize,
}

impl RecordingBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame submitted so far
    pub fn frames(&self) -> &[DrawList] {
        &self.frames
    }

    /// Most recently submitted frame
    pub fn last_frame(&self) -> Option<&DrawList> {
        self.frames.last()
    }

    /// Number of draw calls across all submitted frames
    pub fn draw_calls(&self) -> usize {
        self.frames.iter().map(|frame| frame.quads().count()).sum()
    }

    /// Number of resources created and not yet destroyed
    pub fn live_resources(&self) -> usize {
        self.resources.len()
    }

    /// Number of times the graphics context was entered
    pub fn context_entries(&self) -> usize {
        self.context_entries
    }

    fn insert(&mut self, resource: Resource) -> u64 {
        self.next_id += 1;
        self.resources.insert(self.next_id, resource);
        self.next_id
    }

    fn remove(&mut self, id: u64, what: &str) {
        if self.resources.remove(&id).is_none() {
            log::warn!("Destroying unknown {} handle {}", what, id);
        }
    }

    fn check(&self, id: u64, what: &str, matches: impl Fn(&Resource) -> bool) -> BackendResult<()> {
        match self.resources.get(&id) {
            Some(resource) if matches(resource) => Ok(()),
            _ => Err(RenderError::InvalidHandle(format!("{} {}", what, id))),
        }
    }

    fn check_texture(&self, texture: TextureHandle) -> BackendResult<()> {
        self.check(texture.0, "texture", |r| matches!(r, Resource::Texture { .. }))
    }
}

impl GraphicsBackend for RecordingBackend {
    fn with_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.context_entries += 1;
        f(self)
    }

    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle> {
        let expected = (image.width * image.height * 4) as usize;
        if image.width == 0 || image.height == 0 || image.size_bytes() != expected {
            return Err(RenderError::ResourceCreationFailed(format!(
                "texture data does not match {}x{}",
                image.width, image.height
            )));
        }
        Ok(TextureHandle(self.insert(Resource::Texture {
            width: image.width,
            height: image.height,
        })))
    }

    fn load_texture(&mut self, path: &Path) -> BackendResult<TextureHandle> {
        let image = ImageData::from_file(path)
            .map_err(|e| RenderError::ResourceCreationFailed(e.to_string()))?;
        self.create_texture(&image)
    }

    fn texture_size(&self, texture: TextureHandle) -> BackendResult<(u32, u32)> {
        match self.resources.get(&texture.0) {
            Some(Resource::Texture { width, height }) => Ok((*width, *height)),
            _ => Err(RenderError::InvalidHandle(format!("texture {}", texture.0))),
        }
    }

    fn load_effect(&mut self, path: &Path) -> BackendResult<EffectHandle> {
        ShaderSource::from_file(path).map_err(|e| RenderError::ResourceCreationFailed(e.to_string()))?;
        Ok(EffectHandle(self.insert(Resource::Effect)))
    }

    fn create_sampler(&mut self, filter: SampleFilter) -> BackendResult<SamplerHandle> {
        Ok(SamplerHandle(self.insert(Resource::Sampler(filter))))
    }

    fn create_unit_quad(&mut self) -> BackendResult<QuadHandle> {
        Ok(QuadHandle(self.insert(Resource::Quad)))
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        self.remove(texture.0, "texture");
    }

    fn destroy_effect(&mut self, effect: EffectHandle) {
        self.remove(effect.0, "effect");
    }

    fn destroy_sampler(&mut self, sampler: SamplerHandle) {
        self.remove(sampler.0, "sampler");
    }

    fn destroy_quad(&mut self, quad: QuadHandle) {
        self.remove(quad.0, "quad");
    }

    fn submit(&mut self, frame: &DrawList) -> BackendResult<()> {
        let mut blend_depth = 0usize;
        let mut bound = false;

        for command in &frame.commands {
            match command {
                DrawCommand::BindQuad(quad) => {
                    self.check(quad.0, "quad", |r| *r == Resource::Quad)?;
                    bound = true;
                }
                DrawCommand::PushBlend(_) => blend_depth += 1,
                DrawCommand::PopBlend => {
                    blend_depth = blend_depth.checked_sub(1).ok_or_else(|| {
                        RenderError::RenderingFailed("blend state popped without push".to_string())
                    })?;
                }
                DrawCommand::Quad(quad) => {
                    if !bound {
                        return Err(RenderError::RenderingFailed("quad drawn before binding".to_string()));
                    }
                    if let EffectRef::Custom(effect) = quad.effect {
                        self.check(effect.0, "effect", |r| *r == Resource::Effect)?;
                    }
                    if let Some(sampler) = quad.sampler {
                        self.check(sampler.0, "sampler", |r| matches!(r, Resource::Sampler(_)))?;
                    }
                    for param in &quad.params {
                        if let ParamValue::Texture(texture) = param.value {
                            self.check_texture(texture)?;
                        }
                    }
                }
            }
        }

        if blend_depth != 0 {
            return Err(RenderError::RenderingFailed("blend state left pushed".to_string()));
        }

        self.frames.push(frame.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::generate_star_sprite;
    use crate::foundation::math::Vec2;
    use crate::render::{BlendMode, QuadDraw, QuadPlacement, ShaderParam, Technique};

    fn quad_with_texture(texture: TextureHandle) -> DrawCommand {
        DrawCommand::Quad(QuadDraw {
            placement: QuadPlacement::uniform(Vec2::zeros(), 1.0),
            effect: EffectRef::Base,
            technique: Technique::Draw,
            params: vec![ShaderParam::texture("image", texture)],
            sampler: None,
        })
    }

    #[test]
    fn test_resource_lifetime_tracking() {
        let mut backend = RecordingBackend::new();
        let texture = backend.create_texture(&generate_star_sprite(8)).unwrap();
        let sampler = backend.create_sampler(SampleFilter::Point).unwrap();
        let quad = backend.create_unit_quad().unwrap();
        assert_eq!(backend.live_resources(), 3);
        assert_eq!(backend.texture_size(texture), Ok((8, 8)));

        backend.destroy_texture(texture);
        backend.destroy_sampler(sampler);
        backend.destroy_quad(quad);
        assert_eq!(backend.live_resources(), 0);
        assert!(backend.texture_size(texture).is_err());
    }

    #[test]
    fn test_rejects_malformed_texture_data() {
        let mut backend = RecordingBackend::new();
        let image = ImageData { data: vec![0; 10], width: 2, height: 2 };
        assert!(matches!(
            backend.create_texture(&image),
            Err(RenderError::ResourceCreationFailed(_))
        ));
    }

    #[test]
    fn test_submit_validates_handles() {
        let mut backend = RecordingBackend::new();
        let quad = backend.create_unit_quad().unwrap();
        let texture = backend.create_texture(&generate_star_sprite(4)).unwrap();

        let mut frame = DrawList::new();
        frame.push(DrawCommand::BindQuad(quad));
        frame.push(quad_with_texture(texture));
        backend.submit(&frame).unwrap();
        assert_eq!(backend.draw_calls(), 1);

        backend.destroy_texture(texture);
        assert_eq!(
            backend.submit(&frame),
            Err(RenderError::InvalidHandle(format!("texture {}", texture.0)))
        );
        assert_eq!(backend.frames().len(), 1);
    }

    #[test]
    fn test_submit_checks_ordering() {
        let mut backend = RecordingBackend::new();
        let quad = backend.create_unit_quad().unwrap();
        let texture = backend.create_texture(&generate_star_sprite(4)).unwrap();

        let unbound = DrawList { commands: vec![quad_with_texture(texture)] };
        assert!(backend.submit(&unbound).is_err());

        let unbalanced = DrawList {
            commands: vec![DrawCommand::BindQuad(quad), DrawCommand::PushBlend(BlendMode::Additive)],
        };
        assert!(backend.submit(&unbalanced).is_err());

        let popped = DrawList { commands: vec![DrawCommand::PopBlend] };
        assert!(backend.submit(&popped).is_err());

        assert!(backend.last_frame().is_none());
    }

    #[test]
    fn test_context_is_counted() {
        let mut backend = RecordingBackend::new();
        let quad = backend.with_context(|gfx| gfx.create_unit_quad()).unwrap();
        assert_eq!(backend.context_entries(), 1);
        backend.with_context(|gfx| gfx.destroy_quad(quad));
        assert_eq!(backend.context_entries(), 2);
        assert_eq!(backend.live_resources(), 0);
    }
}
