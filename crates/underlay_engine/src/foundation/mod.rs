//! Foundation module - Core utilities and types
//!
//! - Math types and angle helpers
//! - Logging setup

pub mod math;
pub mod logging;
