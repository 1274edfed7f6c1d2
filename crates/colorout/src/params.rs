//! Stage parameters and profile names.

use colorout_icc::{Intent, StandardProfile};
use serde::{Deserialize, Serialize};

/// Name that selects the display profile supplied by the host.
pub const SYSTEM_PROFILE_NAME: &str = "X profile";

/// User-facing stage parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColoroutParams {
    /// Output profile for exports.
    pub icc_profile: String,
    /// Output profile for on-screen pipes.
    pub display_profile: String,
    /// Rendering intent for exports.
    pub intent: Intent,
    /// Rendering intent for on-screen pipes.
    pub display_intent: Intent,
}

impl Default for ColoroutParams {
    fn default() -> Self {
        Self {
            icc_profile: StandardProfile::Srgb.name().to_string(),
            display_profile: SYSTEM_PROFILE_NAME.to_string(),
            intent: Intent::Perceptual,
            display_intent: Intent::Perceptual,
        }
    }
}

impl ColoroutParams {
    /// Profile name and intent a pipe of type `pipe` would use, before
    /// export overrides.
    pub fn selection(&self, pipe: PipeType) -> (&str, Intent) {
        if pipe.is_export() {
            (&self.icc_profile, self.intent)
        } else {
            (&self.display_profile, self.display_intent)
        }
    }
}

/// Kind of pixel pipe a stage instance belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipeType {
    /// Full-resolution on-screen pipe.
    #[default]
    Full,
    /// Thumbnail/navigation pipe.
    Preview,
    /// File export.
    Export,
}

impl PipeType {
    /// True for the export pipe.
    pub fn is_export(self) -> bool {
        matches!(self, PipeType::Export)
    }
}

/// Where a profile name points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileRequest<'a> {
    /// One of the built-in profiles.
    Standard(StandardProfile),
    /// The host's display profile.
    System,
    /// A file looked up by the profile store.
    File(&'a str),
}

impl<'a> ProfileRequest<'a> {
    /// Classifies a profile name. Matching is exact.
    pub fn parse(name: &'a str) -> Self {
        if name == SYSTEM_PROFILE_NAME {
            return Self::System;
        }
        match StandardProfile::from_name(name) {
            Some(standard) => Self::Standard(standard),
            None => Self::File(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ColoroutParams::default();
        assert_eq!(params.icc_profile, "sRGB");
        assert_eq!(params.display_profile, SYSTEM_PROFILE_NAME);
        assert_eq!(params.intent, Intent::Perceptual);
        assert_eq!(params.display_intent, Intent::Perceptual);
    }

    #[test]
    fn test_selection_by_pipe() {
        let params = ColoroutParams {
            icc_profile: "print.icc".into(),
            display_profile: "monitor.icc".into(),
            intent: Intent::Saturation,
            display_intent: Intent::RelativeColorimetric,
        };
        assert_eq!(params.selection(PipeType::Export), ("print.icc", Intent::Saturation));
        assert_eq!(
            params.selection(PipeType::Preview),
            ("monitor.icc", Intent::RelativeColorimetric)
        );
        assert_eq!(params.selection(PipeType::Full).0, "monitor.icc");
    }

    #[test]
    fn test_request_parse() {
        assert_eq!(ProfileRequest::parse("sRGB"), ProfileRequest::Standard(StandardProfile::Srgb));
        assert_eq!(
            ProfileRequest::parse("linear_rgb"),
            ProfileRequest::Standard(StandardProfile::LinearRgb)
        );
        assert_eq!(
            ProfileRequest::parse("adobergb"),
            ProfileRequest::Standard(StandardProfile::AdobeRgb)
        );
        assert_eq!(ProfileRequest::parse("X profile"), ProfileRequest::System);
        assert_eq!(ProfileRequest::parse("srgb"), ProfileRequest::File("srgb"));
        assert_eq!(ProfileRequest::parse("wide.icc"), ProfileRequest::File("wide.icc"));
    }

    #[test]
    fn test_params_yaml() {
        let params: ColoroutParams =
            serde_yaml::from_str("icc_profile: adobergb\nintent: saturation\n").unwrap();
        assert_eq!(params.icc_profile, "adobergb");
        assert_eq!(params.intent, Intent::Saturation);
        assert_eq!(params.display_profile, SYSTEM_PROFILE_NAME);
    }
}
