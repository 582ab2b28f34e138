//! Raw libobs declarations
//!
//! Only the symbols the underlay uses. Struct layouts mirror the libobs
//! headers; `obs_source_info` stops after `video_render` and is registered
//! with its own size, the host zero-fills the remaining callbacks.

#![allow(non_camel_case_types)]

use std::ffi::{c_char, c_int, c_void};

macro_rules! opaque {
    ($($name:ident),* $(,)?) => {
        $(
            #[repr(C)]
            pub struct $name {
                _private: [u8; 0],
            }
        )*
    };
}

opaque!(
    obs_module_t,
    obs_source_t,
    obs_data_t,
    obs_properties_t,
    obs_property_t,
    gs_texture_t,
    gs_effect_t,
    gs_eparam_t,
    gs_samplerstate_t,
    gs_vertbuffer_t,
    gs_indexbuffer_t,
);

pub const LOG_ERROR: c_int = 100;
pub const LOG_WARNING: c_int = 200;
pub const LOG_INFO: c_int = 300;
pub const LOG_DEBUG: c_int = 400;

pub const GS_RGBA: c_int = 3;
pub const GS_TRISTRIP: c_int = 4;
pub const GS_BLEND_ONE: c_int = 1;
pub const GS_FILTER_POINT: c_int = 0;
pub const GS_FILTER_LINEAR: c_int = 1;
pub const GS_ADDRESS_CLAMP: c_int = 0;
pub const OBS_EFFECT_DEFAULT: c_int = 0;

#[repr(C)]
pub struct gs_sampler_info {
    pub filter: c_int,
    pub address_u: c_int,
    pub address_v: c_int,
    pub address_w: c_int,
    pub max_anisotropy: c_int,
    pub border_color: u32,
}

#[repr(C)]
pub struct obs_source_info {
    pub id: *const c_char,
    pub type_: c_int,
    pub output_flags: u32,
    pub get_name: Option<unsafe extern "C" fn(type_data: *mut c_void) -> *const c_char>,
    pub create: Option<unsafe extern "C" fn(settings: *mut obs_data_t, source: *mut obs_source_t) -> *mut c_void>,
    pub destroy: Option<unsafe extern "C" fn(data: *mut c_void)>,
    pub get_width: Option<unsafe extern "C" fn(data: *mut c_void) -> u32>,
    pub get_height: Option<unsafe extern "C" fn(data: *mut c_void) -> u32>,
    pub get_defaults: Option<unsafe extern "C" fn(settings: *mut obs_data_t)>,
    pub get_properties: Option<unsafe extern "C" fn(data: *mut c_void) -> *mut obs_properties_t>,
    pub update: Option<unsafe extern "C" fn(data: *mut c_void, settings: *mut obs_data_t)>,
    pub activate: Option<unsafe extern "C" fn(data: *mut c_void)>,
    pub deactivate: Option<unsafe extern "C" fn(data: *mut c_void)>,
    pub show: Option<unsafe extern "C" fn(data: *mut c_void)>,
    pub hide: Option<unsafe extern "C" fn(data: *mut c_void)>,
    pub video_tick: Option<unsafe extern "C" fn(data: *mut c_void, seconds: f32)>,
    pub video_render: Option<unsafe extern "C" fn(data: *mut c_void, effect: *mut gs_effect_t)>,
}

#[link(name = "obs")]
extern "C" {
    // Module and source registration
    pub fn obs_register_source_s(info: *const obs_source_info, size: usize);
    pub fn obs_find_module_file(module: *mut obs_module_t, file: *const c_char) -> *mut c_char;
    pub fn obs_source_active(source: *const obs_source_t) -> bool;
    pub fn obs_get_base_effect(effect: c_int) -> *mut gs_effect_t;
    pub fn obs_enter_graphics();
    pub fn obs_leave_graphics();

    // Settings and properties
    pub fn obs_data_get_bool(data: *mut obs_data_t, name: *const c_char) -> bool;
    pub fn obs_data_set_bool(data: *mut obs_data_t, name: *const c_char, val: bool);
    pub fn obs_data_set_default_bool(data: *mut obs_data_t, name: *const c_char, val: bool);
    pub fn obs_properties_create() -> *mut obs_properties_t;
    pub fn obs_properties_add_bool(
        props: *mut obs_properties_t,
        name: *const c_char,
        description: *const c_char,
    ) -> *mut obs_property_t;

    // Utilities
    pub fn blog(log_level: c_int, format: *const c_char, ...);
    pub fn bfree(ptr: *mut c_void);

    // Textures
    pub fn gs_texture_create(
        width: u32,
        height: u32,
        color_format: c_int,
        levels: u32,
        data: *mut *const u8,
        flags: u32,
    ) -> *mut gs_texture_t;
    pub fn gs_texture_create_from_file(file: *const c_char) -> *mut gs_texture_t;
    pub fn gs_texture_get_width(tex: *const gs_texture_t) -> u32;
    pub fn gs_texture_get_height(tex: *const gs_texture_t) -> u32;
    pub fn gs_texture_destroy(tex: *mut gs_texture_t);

    // Immediate-mode geometry
    pub fn gs_render_start(b_new: bool);
    pub fn gs_vertex2f(x: f32, y: f32);
    pub fn gs_texcoord(x: f32, y: f32, unit: c_int);
    pub fn gs_render_save() -> *mut gs_vertbuffer_t;
    pub fn gs_vertexbuffer_destroy(vertbuffer: *mut gs_vertbuffer_t);
    pub fn gs_load_vertexbuffer(vertbuffer: *mut gs_vertbuffer_t);
    pub fn gs_load_indexbuffer(indexbuffer: *mut gs_indexbuffer_t);

    // Samplers
    pub fn gs_samplerstate_create(info: *const gs_sampler_info) -> *mut gs_samplerstate_t;
    pub fn gs_samplerstate_destroy(samplerstate: *mut gs_samplerstate_t);

    // Effects
    pub fn gs_effect_create_from_file(file: *const c_char, error_string: *mut *mut c_char) -> *mut gs_effect_t;
    pub fn gs_effect_destroy(effect: *mut gs_effect_t);
    pub fn gs_effect_get_param_by_name(effect: *const gs_effect_t, name: *const c_char) -> *mut gs_eparam_t;
    pub fn gs_effect_set_texture(param: *mut gs_eparam_t, val: *mut gs_texture_t);
    pub fn gs_effect_set_float(param: *mut gs_eparam_t, val: f32);
    pub fn gs_effect_set_next_sampler(param: *mut gs_eparam_t, sampler: *mut gs_samplerstate_t);
    pub fn gs_effect_loop(effect: *mut gs_effect_t, name: *const c_char) -> bool;

    // Drawing state
    pub fn gs_draw(draw_mode: c_int, start_vert: u32, num_verts: u32);
    pub fn gs_matrix_push();
    pub fn gs_matrix_pop();
    pub fn gs_matrix_translate3f(x: f32, y: f32, z: f32);
    pub fn gs_matrix_scale3f(x: f32, y: f32, z: f32);
    pub fn gs_blend_state_push();
    pub fn gs_blend_state_pop();
    pub fn gs_blend_function(src: c_int, dest: c_int);
}
