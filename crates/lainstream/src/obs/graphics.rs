//! libobs graphics backend
//!
//! Handles are the raw libobs pointers. Null is never handed out, so a zero
//! handle always means a bug above the backend.

use std::collections::HashMap;
use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;

use underlay_engine::assets::ImageData;
use underlay_engine::render::{
    BackendResult, BlendMode, DrawCommand, DrawList, EffectHandle, EffectRef, GraphicsBackend,
    ParamValue, QuadDraw, QuadHandle, RenderError, SampleFilter, SamplerHandle, TextureHandle,
};

use super::ffi;

fn to_handle<T>(raw: *mut T) -> u64 {
    raw as usize as u64
}

fn from_handle<T>(handle: u64, what: &str) -> BackendResult<*mut T> {
    if handle == 0 {
        return Err(RenderError::InvalidHandle(format!("null {}", what)));
    }
    Ok(handle as usize as *mut T)
}

fn created<T>(raw: *mut T, what: &str) -> BackendResult<u64> {
    if raw.is_null() {
        Err(RenderError::ResourceCreationFailed(what.to_string()))
    } else {
        Ok(to_handle(raw))
    }
}

fn path_cstring(path: &Path) -> BackendResult<CString> {
    let text = path
        .to_str()
        .ok_or_else(|| RenderError::ResourceCreationFailed(format!("non UTF-8 path {}", path.display())))?;
    CString::new(text).map_err(|e| RenderError::ResourceCreationFailed(e.to_string()))
}

/// Holds the host graphics context for its lifetime
struct GraphicsContext;

impl GraphicsContext {
    fn enter() -> Self {
        unsafe { ffi::obs_enter_graphics() };
        Self
    }
}

impl Drop for GraphicsContext {
    fn drop(&mut self) {
        unsafe { ffi::obs_leave_graphics() };
    }
}

/// Backend drawing through the host's `gs_*` API
#[derive(Debug, Default)]
pub struct ObsGraphics {
    names: HashMap<&'static str, CString>,
}

impl ObsGraphics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Null-terminated copy of a parameter or technique name
    fn c_name(&mut self, name: &'static str) -> BackendResult<*const c_char> {
        if let Some(cached) = self.names.get(name) {
            return Ok(cached.as_ptr());
        }
        let owned = CString::new(name).map_err(|e| RenderError::RenderingFailed(e.to_string()))?;
        Ok(self.names.entry(name).or_insert(owned).as_ptr())
    }

    fn execute(&mut self, frame: &DrawList, blend_depth: &mut usize) -> BackendResult<()> {
        let base = unsafe { ffi::obs_get_base_effect(ffi::OBS_EFFECT_DEFAULT) };

        for command in &frame.commands {
            match command {
                DrawCommand::BindQuad(quad) => {
                    let buffer = from_handle::<ffi::gs_vertbuffer_t>(quad.0, "quad")?;
                    unsafe {
                        ffi::gs_load_vertexbuffer(buffer);
                        ffi::gs_load_indexbuffer(ptr::null_mut());
                    }
                }
                DrawCommand::PushBlend(mode) => {
                    unsafe { ffi::gs_blend_state_push() };
                    *blend_depth += 1;
                    if *mode == BlendMode::Additive {
                        unsafe { ffi::gs_blend_function(ffi::GS_BLEND_ONE, ffi::GS_BLEND_ONE) };
                    }
                }
                DrawCommand::PopBlend => {
                    if *blend_depth == 0 {
                        return Err(RenderError::RenderingFailed("blend state popped without push".to_string()));
                    }
                    unsafe { ffi::gs_blend_state_pop() };
                    *blend_depth -= 1;
                }
                DrawCommand::Quad(draw) => self.draw_quad(base, draw)?,
            }
        }
        Ok(())
    }

    fn draw_quad(&mut self, base: *mut ffi::gs_effect_t, draw: &QuadDraw) -> BackendResult<()> {
        let effect = match draw.effect {
            EffectRef::Base => base,
            EffectRef::Custom(handle) => from_handle(handle.0, "effect")?,
        };
        if effect.is_null() {
            return Err(RenderError::BackendError("host returned no effect to draw with".to_string()));
        }

        let mut sampler = draw.sampler;
        for param in &draw.params {
            let name = self.c_name(param.name)?;
            let target = unsafe { ffi::gs_effect_get_param_by_name(effect, name) };
            if target.is_null() {
                log::debug!("Effect has no parameter {}", param.name);
                continue;
            }
            match param.value {
                ParamValue::Texture(texture) => {
                    let texture = from_handle(texture.0, "texture")?;
                    unsafe { ffi::gs_effect_set_texture(target, texture) };
                    // The override sampler applies to the first texture only
                    if let Some(state) = sampler.take() {
                        let state = from_handle(state.0, "sampler")?;
                        unsafe { ffi::gs_effect_set_next_sampler(target, state) };
                    }
                }
                ParamValue::Float(value) => unsafe { ffi::gs_effect_set_float(target, value) },
            }
        }

        let technique = self.c_name(draw.technique.name())?;
        let origin = draw.placement.origin;
        let scale = draw.placement.scale;
        unsafe {
            ffi::gs_matrix_push();
            ffi::gs_matrix_translate3f(origin.x, origin.y, 0.0);
            ffi::gs_matrix_scale3f(scale.x, scale.y, 1.0);
            while ffi::gs_effect_loop(effect, technique) {
                ffi::gs_draw(ffi::GS_TRISTRIP, 0, 0);
            }
            ffi::gs_matrix_pop();
        }
        Ok(())
    }
}

impl GraphicsBackend for ObsGraphics {
    fn with_context<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        let _context = GraphicsContext::enter();
        f(self)
    }

    fn create_texture(&mut self, image: &ImageData) -> BackendResult<TextureHandle> {
        let expected = image.width as usize * image.height as usize * 4;
        if image.width == 0 || image.height == 0 || image.size_bytes() != expected {
            return Err(RenderError::ResourceCreationFailed(format!(
                "texture data does not match {}x{}",
                image.width, image.height
            )));
        }

        let mut levels = [image.data.as_ptr()];
        let texture = unsafe {
            ffi::gs_texture_create(image.width, image.height, ffi::GS_RGBA, 1, levels.as_mut_ptr(), 0)
        };
        created(texture, "gs_texture_create").map(TextureHandle)
    }

    fn load_texture(&mut self, path: &Path) -> BackendResult<TextureHandle> {
        let file = path_cstring(path)?;
        let texture = unsafe { ffi::gs_texture_create_from_file(file.as_ptr()) };
        created(texture, &format!("texture {}", path.display())).map(TextureHandle)
    }

    fn texture_size(&self, texture: TextureHandle) -> BackendResult<(u32, u32)> {
        let texture = from_handle::<ffi::gs_texture_t>(texture.0, "texture")?;
        Ok(unsafe { (ffi::gs_texture_get_width(texture), ffi::gs_texture_get_height(texture)) })
    }

    fn load_effect(&mut self, path: &Path) -> BackendResult<EffectHandle> {
        let file = path_cstring(path)?;
        let mut error: *mut c_char = ptr::null_mut();
        let effect = unsafe { ffi::gs_effect_create_from_file(file.as_ptr(), &mut error) };

        if !error.is_null() {
            let message = unsafe { CStr::from_ptr(error) }.to_string_lossy().into_owned();
            unsafe { ffi::bfree(error.cast()) };
            if effect.is_null() {
                return Err(RenderError::ResourceCreationFailed(format!(
                    "effect {}: {}",
                    path.display(),
                    message
                )));
            }
            log::warn!("Effect {} compiled with messages: {}", path.display(), message);
        }
        created(effect, &format!("effect {}", path.display())).map(EffectHandle)
    }

    fn create_sampler(&mut self, filter: SampleFilter) -> BackendResult<SamplerHandle> {
        let info = ffi::gs_sampler_info {
            filter: match filter {
                SampleFilter::Point => ffi::GS_FILTER_POINT,
                SampleFilter::Linear => ffi::GS_FILTER_LINEAR,
            },
            address_u: ffi::GS_ADDRESS_CLAMP,
            address_v: ffi::GS_ADDRESS_CLAMP,
            address_w: ffi::GS_ADDRESS_CLAMP,
            max_anisotropy: 1,
            border_color: 0,
        };
        let sampler = unsafe { ffi::gs_samplerstate_create(&info) };
        created(sampler, "gs_samplerstate_create").map(SamplerHandle)
    }

    fn create_unit_quad(&mut self) -> BackendResult<QuadHandle> {
        let buffer = unsafe {
            ffi::gs_render_start(true);
            for (x, y) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
                ffi::gs_vertex2f(x, y);
            }
            for (u, v) in [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)] {
                ffi::gs_texcoord(u, v, 0);
            }
            ffi::gs_render_save()
        };
        created(buffer, "gs_render_save").map(QuadHandle)
    }

    fn destroy_texture(&mut self, texture: TextureHandle) {
        match from_handle(texture.0, "texture") {
            Ok(raw) => unsafe { ffi::gs_texture_destroy(raw) },
            Err(e) => log::warn!("{}", e),
        }
    }

    fn destroy_effect(&mut self, effect: EffectHandle) {
        match from_handle(effect.0, "effect") {
            Ok(raw) => unsafe { ffi::gs_effect_destroy(raw) },
            Err(e) => log::warn!("{}", e),
        }
    }

    fn destroy_sampler(&mut self, sampler: SamplerHandle) {
        match from_handle(sampler.0, "sampler") {
            Ok(raw) => unsafe { ffi::gs_samplerstate_destroy(raw) },
            Err(e) => log::warn!("{}", e),
        }
    }

    fn destroy_quad(&mut self, quad: QuadHandle) {
        match from_handle(quad.0, "quad") {
            Ok(raw) => unsafe { ffi::gs_vertexbuffer_destroy(raw) },
            Err(e) => log::warn!("{}", e),
        }
    }

    fn submit(&mut self, frame: &DrawList) -> BackendResult<()> {
        let mut blend_depth = 0;
        let result = self.execute(frame, &mut blend_depth);

        // Leave the host's blend stack as we found it, even after a failed draw
        for _ in 0..blend_depth {
            unsafe { ffi::gs_blend_state_pop() };
        }
        result
    }
}
