//! # lainstream
//!
//! OBS Studio plugin wrapping [`underlay_engine`] as a video source.
//!
//! Without features the crate only exposes the [`descriptor`] of the source.
//! The `libobs` feature links against libobs and exports the module entry
//! points (`obs_module_load` and friends), registering a source whose
//! callbacks forward to an [`underlay_engine::UnderlaySource`].
//!
//! The plugin's data directory must hold `data/flag-shader.effect` next to
//! the ship and flag images.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![deny(unsafe_code)]

pub mod descriptor;

#[cfg(feature = "libobs")]
#[allow(unsafe_code)]
mod obs;

pub use descriptor::{OutputFlags, SourceDescriptor, SourceKind, UNDERLAY_SOURCE};

#[cfg(test)]
mod tests {
    use std::path::Path;

    use underlay_engine::assets::{names, ShaderSource};
    use underlay_engine::render::renderer::params;

    #[test]
    fn test_shipped_effect_matches_trail_draw() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data").join(names::FLAG_EFFECT);
        let effect = ShaderSource::from_file(&path).unwrap();

        assert!(effect.has_technique("Draw"));
        for uniform in [params::TRANS_FLAG, params::LESBIAN_FLAG, params::WAVE_ROT, params::PULSE_ROT] {
            assert!(effect.has_uniform(uniform), "missing uniform {}", uniform);
        }
    }
}
