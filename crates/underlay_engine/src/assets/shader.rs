//! Effect (shader) source files

use std::path::{Path, PathBuf};
use crate::assets::AssetError;

/// Text of an effect file, kept with the path it came from
#[derive(Debug, Clone)]
pub struct ShaderSource {
    /// File the source was read from
    pub path: PathBuf,
    /// Effect source text
    pub text: String,
}

impl ShaderSource {
    /// Read an effect file, rejecting empty files
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        if text.trim().is_empty() {
            return Err(AssetError::LoadFailed(format!("Effect file is empty: {}", path.display())));
        }
        Ok(Self {
            path: path.to_path_buf(),
            text,
        })
    }

    /// Whether the effect declares a technique with the given name
    pub fn has_technique(&self, name: &str) -> bool {
        self.text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("technique"))
            .any(|rest| rest.split_whitespace().next() == Some(name))
    }

    /// Whether the effect declares a uniform with the given name
    pub fn has_uniform(&self, name: &str) -> bool {
        self.text
            .lines()
            .filter_map(|line| line.trim().strip_prefix("uniform"))
            .filter_map(|rest| rest.split_whitespace().nth(1))
            .any(|ident| ident.trim_end_matches(';') == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EFFECT: &str = "uniform float4x4 ViewProj;\nuniform float wave_rot;\n\ntechnique Draw\n{\n}\n";

    #[test]
    fn test_reads_effect_declarations() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test.effect");
        std::fs::write(&path, EFFECT).unwrap();

        let source = ShaderSource::from_file(&path).unwrap();
        assert_eq!(source.path, path);
        assert!(source.has_technique("Draw"));
        assert!(!source.has_technique("DrawMultiply"));
        assert!(source.has_uniform("wave_rot"));
        assert!(!source.has_uniform("pulse_rot"));
    }

    #[test]
    fn test_rejects_missing_and_empty_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ShaderSource::from_file(dir.path().join("missing.effect")),
            Err(AssetError::Io(_))
        ));

        let empty = dir.path().join("empty.effect");
        std::fs::write(&empty, "  \n").unwrap();
        assert!(matches!(ShaderSource::from_file(&empty), Err(AssetError::LoadFailed(_))));
    }
}
