//! libobs integration
//!
//! Adapts the engine's traits to the host API and exports the module entry
//! points. Only built with the `libobs` feature.

mod assets;
mod ffi;
mod graphics;
mod logger;
mod module;
mod settings;
