//! Color management engine seam.
//!
//! Profile resolution only talks to the engine through [`ColorEngine`], so
//! hosts and tests can substitute their own implementation.

use crate::{IccResult, Intent, LabTransform, MatrixShaper, Profile};

/// A Lab to output RGB transform over one row of pixels.
///
/// Implementations need not be `Sync`: the plan keeps one per worker.
pub trait RowTransform: Send {
    /// Converts `lab` into `rgb`, pixel by pixel.
    fn transform_row(&self, lab: &[[f32; 3]], rgb: &mut [[f32; 3]]);
}

impl RowTransform for LabTransform {
    fn transform_row(&self, lab: &[[f32; 3]], rgb: &mut [[f32; 3]]) {
        LabTransform::transform_row(self, lab, rgb);
    }
}

/// The operations profile resolution needs from a color management engine.
pub trait ColorEngine {
    /// Reduces `profile` to a matrix plus three tone LUTs, if possible.
    fn derive_matrix_shaper(&self, profile: &Profile, samples: usize) -> IccResult<MatrixShaper>;

    /// Builds a Lab to RGB transform into `output` at `intent`.
    fn lab_transform(&self, output: &Profile, intent: Intent) -> IccResult<Box<dyn RowTransform>>;
}

/// [`ColorEngine`] backed by Little CMS 2.
///
/// Holds the Lab (D50) working-space profile every transform starts from.
pub struct LcmsEngine {
    lab: Profile,
}

impl LcmsEngine {
    /// Creates the engine and its Lab working profile.
    pub fn new() -> IccResult<Self> {
        Ok(Self { lab: Profile::lab()? })
    }
}

impl ColorEngine for LcmsEngine {
    fn derive_matrix_shaper(&self, profile: &Profile, samples: usize) -> IccResult<MatrixShaper> {
        MatrixShaper::from_profile(profile, samples)
    }

    fn lab_transform(&self, output: &Profile, intent: Intent) -> IccResult<Box<dyn RowTransform>> {
        Ok(Box::new(LabTransform::new(&self.lab, output, intent)?))
    }
}

impl std::fmt::Debug for LcmsEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LcmsEngine").finish_non_exhaustive()
    }
}
