//! CLI command implementations

pub mod convert;
pub mod probe;

use crate::TargetArgs;
use anyhow::{bail, Context, Result};
use colorout::{ColoroutConfig, ColoroutParams, ColoroutStage, PipeType};
use std::path::Path;

/// Builds a stage for `target` and commits `name` as its output profile.
pub fn build_stage(name: &str, target: &TargetArgs, config: ColoroutConfig) -> Result<ColoroutStage> {
    let pipe = if target.export { PipeType::Export } else { PipeType::Full };
    let mut stage = ColoroutStage::new(config, pipe).context("Failed to create stage")?;

    if let Some(path) = &target.display_icc {
        let icc = std::fs::read(path)
            .with_context(|| format!("Failed to read display profile: {}", path.display()))?;
        stage = stage.with_display_profile(icc);
    }

    let params = if target.export {
        ColoroutParams {
            icc_profile: name.to_string(),
            intent: target.intent,
            ..Default::default()
        }
    } else {
        ColoroutParams {
            display_profile: name.to_string(),
            display_intent: target.intent,
            ..Default::default()
        }
    };
    stage.commit(&params);
    Ok(stage)
}

/// Reads a raw little-endian f32 buffer of exactly `expected` values.
pub fn read_f32(path: &Path, expected: usize) -> Result<Vec<f32>> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
    if bytes.len() != expected * 4 {
        bail!(
            "{}: expected {} bytes ({} floats), found {}",
            path.display(),
            expected * 4,
            expected,
            bytes.len()
        );
    }
    Ok(bytes
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect())
}

/// Writes `data` as a raw little-endian f32 buffer.
pub fn write_f32(path: &Path, data: &[f32]) -> Result<()> {
    let bytes: Vec<u8> = data.iter().flat_map(|v| v.to_le_bytes()).collect();
    std::fs::write(path, bytes).with_context(|| format!("Failed to write: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_roundtrip_and_size_check() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buf.f32");
        write_f32(&path, &[1.0, -2.5, 3.25]).unwrap();
        assert_eq!(read_f32(&path, 3).unwrap(), [1.0, -2.5, 3.25]);
        assert!(read_f32(&path, 4).is_err());
    }
}
