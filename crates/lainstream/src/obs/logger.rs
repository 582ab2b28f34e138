//! Forwards `log` records to the host log

use std::ffi::CString;

use log::{Level, LevelFilter, Log, Metadata, Record};

use super::ffi;

struct ObsLogger;

static LOGGER: ObsLogger = ObsLogger;

const fn host_level(level: Level) -> std::ffi::c_int {
    match level {
        Level::Error => ffi::LOG_ERROR,
        Level::Warn => ffi::LOG_WARNING,
        Level::Info => ffi::LOG_INFO,
        Level::Debug | Level::Trace => ffi::LOG_DEBUG,
    }
}

impl Log for ObsLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let text = format!("[lainstream] {}", record.args()).replace('\0', "\\0");
        let Ok(message) = CString::new(text) else {
            return;
        };
        unsafe { ffi::blog(host_level(record.level()), c"%s".as_ptr(), message.as_ptr()) };
    }

    fn flush(&self) {}
}

/// Route the `log` facade to the host; keeps any logger already installed
pub fn install() {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(LevelFilter::Debug);
    }
}
