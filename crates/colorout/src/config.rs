//! Stage configuration.
//!
//! Read from YAML; every field is optional:
//!
//! ```yaml
//! threads: 8
//! lut_samples: 65536
//! prefer_matrix_path: true
//! config_dir: ~/.config/colorout
//! data_dir: /usr/share/colorout
//! export:
//!   icc_profile: adobergb
//!   icc_intent: relative_colorimetric
//! ```

use std::path::{Path, PathBuf};

use colorout_icc::{DirProfileStore, Intent, LUT_SAMPLES};
use serde::{Deserialize, Serialize};

use crate::{ColoroutError, ColoroutResult, PipeType};

/// Export profile value meaning "use the stage parameter".
pub const EXPORT_PROFILE_FROM_IMAGE: &str = "image";

/// Smallest accepted `lut_samples`.
///
/// LUTs are sampled at `k / (n - 1)` but looked up at `v * n`; the skew
/// between the two is about `1 / n` of the range, so short tables visibly
/// shift the tone curve.
pub const MIN_LUT_SAMPLES: usize = 256;

/// Runtime configuration of the stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoroutConfig {
    /// Worker threads (0 = available parallelism).
    pub threads: usize,
    /// Samples per tone LUT, at least [`MIN_LUT_SAMPLES`].
    pub lut_samples: usize,
    /// Use the matrix path for matrix/TRC profiles. Disable to force the
    /// general path everywhere.
    pub prefer_matrix_path: bool,
    /// User profile root, searched first.
    pub config_dir: Option<PathBuf>,
    /// Shared profile root, searched second.
    pub data_dir: Option<PathBuf>,
    /// Overrides applied to export pipes.
    pub export: ExportOverrides,
}

impl Default for ColoroutConfig {
    fn default() -> Self {
        Self {
            threads: 0,
            lut_samples: LUT_SAMPLES,
            prefer_matrix_path: true,
            config_dir: None,
            data_dir: None,
            export: ExportOverrides::default(),
        }
    }
}

impl ColoroutConfig {
    /// Loads configuration from a YAML file.
    pub fn load(path: impl AsRef<Path>) -> ColoroutResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ColoroutError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parses and validates configuration from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> ColoroutResult<Self> {
        // An empty document means "all defaults".
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> ColoroutResult<()> {
        if self.lut_samples < MIN_LUT_SAMPLES {
            return Err(ColoroutError::InvalidConfig(format!(
                "lut_samples must be at least {MIN_LUT_SAMPLES}, got {}",
                self.lut_samples
            )));
        }
        Ok(())
    }

    /// Profile store over the configured roots, config dir first.
    pub fn profile_store(&self) -> DirProfileStore {
        DirProfileStore::new(self.config_dir.iter().chain(self.data_dir.iter()).cloned())
    }
}

/// Export settings that take precedence over the stage parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOverrides {
    /// Output profile; `"image"` or absent keeps the stage parameter.
    pub icc_profile: Option<String>,
    /// Rendering intent; absent keeps the stage parameter.
    pub icc_intent: Option<Intent>,
}

impl ExportOverrides {
    /// Applies the overrides to the selection of a pipe. Display pipes are
    /// returned unchanged.
    pub fn apply<'a>(&'a self, pipe: PipeType, name: &'a str, intent: Intent) -> (&'a str, Intent) {
        if !pipe.is_export() {
            return (name, intent);
        }
        let name = match self.icc_profile.as_deref() {
            Some(over) if over != EXPORT_PROFILE_FROM_IMAGE && !over.is_empty() => over,
            _ => name,
        };
        (name, self.icc_intent.unwrap_or(intent))
    }
}
