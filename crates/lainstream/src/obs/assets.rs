//! Asset lookup in the plugin's data directory

use std::ffi::{CStr, CString};
use std::path::PathBuf;

use underlay_engine::assets::{AssetError, AssetResolver};

use super::ffi;

/// Resolves asset names through `obs_find_module_file`
pub struct ObsModuleFiles {
    module: *mut ffi::obs_module_t,
}

impl ObsModuleFiles {
    pub fn new(module: *mut ffi::obs_module_t) -> Self {
        Self { module }
    }
}

impl AssetResolver for ObsModuleFiles {
    fn resolve(&self, name: &str) -> Result<PathBuf, AssetError> {
        if self.module.is_null() {
            return Err(AssetError::NotFound(format!("{} (module pointer not set)", name)));
        }
        let file = CString::new(name).map_err(|e| AssetError::LoadFailed(e.to_string()))?;

        let found = unsafe { ffi::obs_find_module_file(self.module, file.as_ptr()) };
        if found.is_null() {
            return Err(AssetError::NotFound(name.to_string()));
        }
        let path = unsafe { CStr::from_ptr(found) }.to_string_lossy().into_owned();
        unsafe { ffi::bfree(found.cast()) };

        Ok(PathBuf::from(path))
    }
}
