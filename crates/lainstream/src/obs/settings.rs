//! `obs_data_t` settings and `obs_properties_t` property sheets

use std::ffi::CString;

use underlay_engine::source::{PropertyKind, PropertySheet, SettingsStore};

use super::ffi;

fn key(name: &str) -> Option<CString> {
    let key = CString::new(name).ok();
    if key.is_none() {
        log::warn!("Setting name {:?} contains a NUL byte", name);
    }
    key
}

/// Borrowed host settings object
pub struct ObsSettings {
    data: *mut ffi::obs_data_t,
}

impl ObsSettings {
    /// Wrap a settings pointer handed to a callback; `None` for null
    pub fn from_raw(data: *mut ffi::obs_data_t) -> Option<Self> {
        (!data.is_null()).then_some(Self { data })
    }
}

impl SettingsStore for ObsSettings {
    fn get_bool(&self, name: &str) -> bool {
        key(name).is_some_and(|key| unsafe { ffi::obs_data_get_bool(self.data, key.as_ptr()) })
    }

    fn set_bool(&mut self, name: &str, value: bool) {
        if let Some(key) = key(name) {
            unsafe { ffi::obs_data_set_bool(self.data, key.as_ptr(), value) };
        }
    }

    fn set_default_bool(&mut self, name: &str, value: bool) {
        if let Some(key) = key(name) {
            unsafe { ffi::obs_data_set_default_bool(self.data, key.as_ptr(), value) };
        }
    }
}

/// Build a host property list; ownership passes to the host
pub fn to_obs_properties(sheet: &PropertySheet) -> *mut ffi::obs_properties_t {
    let props = unsafe { ffi::obs_properties_create() };
    if props.is_null() {
        return props;
    }

    for property in sheet.properties() {
        let (Some(name), Some(description)) = (key(property.name), key(property.description)) else {
            continue;
        };
        match property.kind {
            PropertyKind::Bool => unsafe {
                ffi::obs_properties_add_bool(props, name.as_ptr(), description.as_ptr());
            },
        }
    }
    props
}
