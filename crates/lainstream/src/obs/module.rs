//! Exported module entry points and source callbacks
//!
//! Every callback is null-checked and panic-guarded; a panic must never
//! unwind into the host.

use std::ffi::{c_char, c_int, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::sync::atomic::{AtomicPtr, Ordering};

use underlay_engine::UnderlaySource;

use super::assets::ObsModuleFiles;
use super::ffi;
use super::graphics::ObsGraphics;
use super::logger;
use super::settings::{to_obs_properties, ObsSettings};
use crate::descriptor::{LIBOBS_API_VERSION, MODULE_DESCRIPTION, UNDERLAY_SOURCE};

static MODULE: AtomicPtr<ffi::obs_module_t> = AtomicPtr::new(ptr::null_mut());

/// State behind one source's `data` pointer
struct Instance {
    source: *mut ffi::obs_source_t,
    underlay: UnderlaySource,
    graphics: ObsGraphics,
    render_failing: bool,
}

fn guarded<T>(callback: &str, fallback: T, f: impl FnOnce() -> T) -> T {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|_| {
        log::error!("Panic in {} callback", callback);
        fallback
    })
}

unsafe fn instance<'a>(data: *mut c_void) -> Option<&'a mut Instance> {
    unsafe { data.cast::<Instance>().as_mut() }
}

fn is_active(source: *mut ffi::obs_source_t) -> bool {
    !source.is_null() && unsafe { ffi::obs_source_active(source) }
}

#[no_mangle]
pub extern "C" fn obs_module_set_pointer(module: *mut ffi::obs_module_t) {
    MODULE.store(module, Ordering::Release);
}

#[no_mangle]
pub extern "C" fn obs_current_module() -> *mut ffi::obs_module_t {
    MODULE.load(Ordering::Acquire)
}

#[no_mangle]
pub extern "C" fn obs_module_ver() -> u32 {
    LIBOBS_API_VERSION
}

#[no_mangle]
pub extern "C" fn obs_module_description() -> *const c_char {
    MODULE_DESCRIPTION.as_ptr()
}

#[no_mangle]
pub extern "C" fn obs_module_load() -> bool {
    logger::install();

    let info = ffi::obs_source_info {
        id: UNDERLAY_SOURCE.id.as_ptr(),
        type_: UNDERLAY_SOURCE.kind.as_raw() as c_int,
        output_flags: UNDERLAY_SOURCE.output_flags.bits(),
        get_name: Some(get_name),
        create: Some(create),
        destroy: Some(destroy),
        get_width: Some(get_width),
        get_height: Some(get_height),
        get_defaults: Some(get_defaults),
        get_properties: Some(get_properties),
        update: Some(update),
        activate: None,
        deactivate: None,
        show: None,
        hide: None,
        video_tick: Some(video_tick),
        video_render: Some(video_render),
    };
    // The host copies the struct
    unsafe { ffi::obs_register_source_s(&info, std::mem::size_of::<ffi::obs_source_info>()) };

    log::info!("Registered source {:?}", UNDERLAY_SOURCE.id);
    true
}

#[no_mangle]
pub extern "C" fn obs_module_unload() {
    log::info!("Module unloaded");
}

unsafe extern "C" fn get_name(_type_data: *mut c_void) -> *const c_char {
    UNDERLAY_SOURCE.name.as_ptr()
}

unsafe extern "C" fn create(settings: *mut ffi::obs_data_t, source: *mut ffi::obs_source_t) -> *mut c_void {
    guarded("create", ptr::null_mut(), || {
        let Some(settings) = ObsSettings::from_raw(settings) else {
            log::error!("Source created without settings");
            return ptr::null_mut();
        };
        let mut graphics = ObsGraphics::new();
        let assets = ObsModuleFiles::new(obs_current_module());
        let underlay = UnderlaySource::create(&settings, &mut graphics, &assets);

        Box::into_raw(Box::new(Instance {
            source,
            underlay,
            graphics,
            render_failing: false,
        }))
        .cast()
    })
}

unsafe extern "C" fn destroy(data: *mut c_void) {
    if data.is_null() {
        return;
    }
    let instance = unsafe { Box::from_raw(data.cast::<Instance>()) };
    guarded("destroy", (), move || {
        let Instance { underlay, mut graphics, .. } = *instance;
        underlay.destroy(&mut graphics);
    });
}

unsafe extern "C" fn get_width(_data: *mut c_void) -> u32 {
    UNDERLAY_SOURCE.width
}

unsafe extern "C" fn get_height(_data: *mut c_void) -> u32 {
    UNDERLAY_SOURCE.height
}

unsafe extern "C" fn get_defaults(settings: *mut ffi::obs_data_t) {
    guarded("get_defaults", (), || {
        if let Some(mut settings) = ObsSettings::from_raw(settings) {
            UnderlaySource::defaults(&mut settings);
        }
    });
}

unsafe extern "C" fn get_properties(_data: *mut c_void) -> *mut ffi::obs_properties_t {
    guarded("get_properties", ptr::null_mut(), || {
        to_obs_properties(&UnderlaySource::properties())
    })
}

unsafe extern "C" fn update(data: *mut c_void, settings: *mut ffi::obs_data_t) {
    let (Some(instance), Some(settings)) = (unsafe { instance(data) }, ObsSettings::from_raw(settings)) else {
        return;
    };
    guarded("update", (), || instance.underlay.update(&settings));
}

unsafe extern "C" fn video_tick(data: *mut c_void, seconds: f32) {
    let Some(instance) = (unsafe { instance(data) }) else {
        return;
    };
    guarded("video_tick", (), || {
        let active = is_active(instance.source);
        instance.underlay.tick(active, seconds);
    });
}

unsafe extern "C" fn video_render(data: *mut c_void, _effect: *mut ffi::gs_effect_t) {
    let Some(instance) = (unsafe { instance(data) }) else {
        return;
    };
    guarded("video_render", (), || {
        let active = is_active(instance.source);
        match instance.underlay.render(active, &mut instance.graphics) {
            Ok(()) => instance.render_failing = false,
            Err(e) => {
                // Once per failure streak, not once per frame
                if !instance.render_failing {
                    log::warn!("Underlay frame dropped: {}", e);
                }
                instance.render_failing = true;
            }
        }
    });
}
