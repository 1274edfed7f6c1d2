//! Profile store: resolves output profile names to files.

use crate::{IccError, IccResult, Profile};
use std::path::{Path, PathBuf};

/// Resolves profile names to loaded profiles.
///
/// A failed lookup is an ordinary error; profile resolution recovers from
/// it by substituting sRGB.
pub trait ProfileStore {
    /// Finds the file backing `name`, if any.
    fn locate(&self, name: &str) -> Option<PathBuf>;

    /// Loads the profile called `name`.
    fn open(&self, name: &str) -> IccResult<Profile> {
        let path = self
            .locate(name)
            .ok_or_else(|| IccError::NotFound(name.to_string()))?;
        Profile::from_file(&path)
    }
}

/// Looks up output profiles in `<root>/color/out/<name>` for each root, in
/// order. Absolute paths are used as given.
///
/// # Example
///
/// ```rust
/// use colorout_icc::{DirProfileStore, ProfileStore};
///
/// let store = DirProfileStore::new(["/etc/colorout", "/usr/share/colorout"]);
/// assert!(store.locate("does-not-exist.icc").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirProfileStore {
    roots: Vec<PathBuf>,
}

impl DirProfileStore {
    /// Subdirectory of each root that holds output profiles.
    pub const SUBDIR: &'static str = "color/out";

    /// Creates a store searching `roots` in order (user config dir first,
    /// then shared data dir).
    pub fn new<I, P>(roots: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
        }
    }

    /// Search roots.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ProfileStore for DirProfileStore {
    fn locate(&self, name: &str) -> Option<PathBuf> {
        let direct = Path::new(name);
        if direct.is_absolute() {
            return direct.is_file().then(|| direct.to_path_buf());
        }
        let found = self
            .roots
            .iter()
            .map(|root| root.join(Self::SUBDIR).join(name))
            .find(|candidate| candidate.is_file());
        tracing::debug!(name, ?found, "profile lookup");
        found
    }
}
