//! Static description of the underlay source as registered with the host

use std::ffi::CStr;

use bitflags::bitflags;
use underlay_engine::UnderlaySource;

/// Source type identifier
pub const SOURCE_ID: &CStr = c"lain_background";

/// Name shown in the host's source list
pub const DISPLAY_NAME: &CStr = c"Lain's Underlay";

/// Module description reported to the host
pub const MODULE_DESCRIPTION: &CStr = c"Lain's custom plugin";

/// Host API version the module was written against
pub const LIBOBS_API_VERSION: u32 = api_version(30, 0, 0);

/// Pack a libobs version triple the way the host compares it
pub const fn api_version(major: u32, minor: u32, patch: u32) -> u32 {
    (major << 24) | (minor << 16) | patch
}

/// Kind of source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    /// Produces its own content
    Input,
    /// Modifies another source
    Filter,
    /// Blends between scenes
    Transition,
    /// Scene container
    Scene,
}

impl SourceKind {
    /// Host enum value
    pub const fn as_raw(self) -> u32 {
        match self {
            Self::Input => 0,
            Self::Filter => 1,
            Self::Transition => 2,
            Self::Scene => 3,
        }
    }
}

bitflags! {
    /// Source capability flags
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OutputFlags: u32 {
        /// Renders video
        const VIDEO = 1 << 0;
        /// Produces audio
        const AUDIO = 1 << 1;
        /// Pushes frames asynchronously
        const ASYNC = 1 << 2;
        /// Draws with its own effects instead of the host's default one
        const CUSTOM_DRAW = 1 << 3;
    }
}

/// Everything the host needs to register a source type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceDescriptor {
    /// Type identifier
    pub id: &'static CStr,
    /// Display name
    pub name: &'static CStr,
    /// Source kind
    pub kind: SourceKind,
    /// Capability flags
    pub output_flags: OutputFlags,
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
}

/// The animated underlay source
pub const UNDERLAY_SOURCE: SourceDescriptor = SourceDescriptor {
    id: SOURCE_ID,
    name: DISPLAY_NAME,
    kind: SourceKind::Input,
    output_flags: OutputFlags::VIDEO.union(OutputFlags::CUSTOM_DRAW),
    width: UnderlaySource::size().0,
    height: UnderlaySource::size().1,
};
