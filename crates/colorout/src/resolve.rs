//! Profile resolution: turns a profile name and intent into a plan.
//!
//! Resolution never fails. Profiles that can't be loaded are replaced by
//! sRGB, and so are profiles the color engine can neither reduce to a
//! matrix nor build a general transform for. Either way the user log gets
//! exactly one warning.

use colorout_compute::{TransformPlan, WorkerSlots};
use colorout_icc::{
    ColorEngine, IccError, IccResult, Intent, MatrixShaper, Profile, ProfileStore, RowTransform,
    StandardProfile,
};
use tracing::{debug, warn};

use crate::{ProfileRequest, UserLog, SYSTEM_PROFILE_NAME};

/// Warning logged when the engine can't handle an output profile.
pub const UNSUPPORTED_PROFILE_WARNING: &str =
    "unsupported output profile has been replaced by sRGB!";

/// Collaborators and settings needed to resolve a profile.
#[derive(Clone, Copy)]
pub struct ResolveContext<'a> {
    /// Finds profile files by name.
    pub store: &'a dyn ProfileStore,
    /// Builds matrix shapers and general transforms.
    pub engine: &'a dyn ColorEngine,
    /// Receives substitution warnings.
    pub log: &'a dyn UserLog,
    /// ICC data of the host's display profile, if it has one.
    pub display_profile: Option<&'a [u8]>,
    /// Number of general transforms to build.
    pub workers: usize,
    /// Samples per tone LUT.
    pub lut_samples: usize,
    /// Try the matrix path before the general one.
    pub prefer_matrix: bool,
}

/// Outcome of a resolution.
#[derive(Debug)]
pub struct Resolved {
    /// Plan to process pixels with.
    pub plan: TransformPlan,
    /// Profile the plan converts into.
    pub profile: Profile,
    /// Name of `profile`; `"sRGB"` after a substitution.
    pub name: String,
    /// True if the requested profile was replaced by sRGB.
    pub substituted: bool,
}

/// Resolves `name` at `intent` into a usable plan.
pub fn resolve_plan(ctx: &ResolveContext<'_>, name: &str, intent: Intent) -> Resolved {
    let srgb_name = StandardProfile::Srgb.name();

    let (profile, substituted) = match load_profile(ctx, name) {
        Ok(profile) => (profile, false),
        Err(e) => {
            debug!(name, error = %e, "output profile unavailable");
            ctx.log
                .warn(&format!("output profile `{name}` could not be loaded, using sRGB"));
            (Profile::srgb(), true)
        }
    };

    if let Some(plan) = build_plan(ctx, &profile, intent) {
        let name = if substituted { srgb_name } else { name };
        debug!(name, kind = plan.kind(), ?intent, "output profile resolved");
        return Resolved {
            plan,
            profile,
            name: name.to_string(),
            substituted,
        };
    }

    // The engine refused `profile`. Don't warn twice if it already was sRGB.
    let plan = if substituted {
        None
    } else {
        ctx.log.warn(UNSUPPORTED_PROFILE_WARNING);
        drop(profile);
        build_plan(ctx, &Profile::srgb(), intent)
    };
    let plan = plan.unwrap_or_else(|| {
        warn!("color engine rejected sRGB, using the built-in sRGB matrix");
        TransformPlan::Matrix(MatrixShaper::srgb_builtin(ctx.lut_samples))
    });
    debug!(kind = plan.kind(), "output profile replaced by sRGB");

    Resolved {
        plan,
        profile: Profile::srgb(),
        name: srgb_name.to_string(),
        substituted: true,
    }
}

/// Opens the profile a name refers to.
pub fn load_profile(ctx: &ResolveContext<'_>, name: &str) -> IccResult<Profile> {
    match ProfileRequest::parse(name) {
        ProfileRequest::Standard(standard) => Ok(standard.to_profile()),
        ProfileRequest::System => match ctx.display_profile {
            Some(data) => Profile::from_icc(data),
            None => Err(IccError::NotFound(SYSTEM_PROFILE_NAME.to_string())),
        },
        ProfileRequest::File(file) => ctx.store.open(file),
    }
}

/// Matrix plan if the profile allows it, otherwise one general transform
/// per worker. `None` if neither can be built.
fn build_plan(ctx: &ResolveContext<'_>, profile: &Profile, intent: Intent) -> Option<TransformPlan> {
    if ctx.prefer_matrix {
        match ctx.engine.derive_matrix_shaper(profile, ctx.lut_samples) {
            Ok(shaper) => return Some(TransformPlan::Matrix(shaper)),
            Err(e) => debug!(error = %e, "no matrix path"),
        }
    }

    let slots: IccResult<Vec<Box<dyn RowTransform>>> = (0..ctx.workers.max(1))
        .map(|_| ctx.engine.lab_transform(profile, intent))
        .collect();
    match slots {
        Ok(slots) => Some(TransformPlan::General(WorkerSlots::new(slots))),
        Err(e) => {
            debug!(error = %e, "general transform unavailable");
            None
        }
    }
}
