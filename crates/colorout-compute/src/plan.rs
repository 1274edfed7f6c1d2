//! Resolved transform plans.

use colorout_icc::{MatrixShaper, RowTransform};
use std::sync::{Mutex, PoisonError};

/// How pixels reach the output profile.
///
/// Built once per parameter commit, then shared read-only by every
/// processing call until it is replaced.
pub enum TransformPlan {
    /// Fast path: XYZ matrix plus three tone LUTs.
    Matrix(MatrixShaper),
    /// Precise path: one general transform per worker.
    General(WorkerSlots),
}

impl TransformPlan {
    /// True if the plan may be offloaded to an accelerator.
    pub fn accelerator_eligible(&self) -> bool {
        matches!(self, Self::Matrix(_))
    }

    /// The matrix shaper, for matrix plans.
    pub fn shaper(&self) -> Option<&MatrixShaper> {
        match self {
            Self::Matrix(shaper) => Some(shaper),
            Self::General(_) => None,
        }
    }

    /// The worker slots, for general plans.
    pub fn slots(&self) -> Option<&WorkerSlots> {
        match self {
            Self::Matrix(_) => None,
            Self::General(slots) => Some(slots),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Matrix(_) => "matrix",
            Self::General(_) => "general",
        }
    }
}

impl std::fmt::Debug for TransformPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Matrix(shaper) => f
                .debug_struct("Matrix")
                .field("xyz_to_rgb", &shaper.xyz_to_rgb)
                .field("lut_samples", &shaper.lut_samples())
                .finish(),
            Self::General(slots) => f.debug_struct("General").field("slots", &slots.len()).finish(),
        }
    }
}

/// Arena of general transforms indexed by worker id.
///
/// Each slot belongs to one worker and is never used by two workers at once;
/// the per-slot lock only exists to make the arena shareable and is
/// uncontended when worker ids map one-to-one onto slots.
pub struct WorkerSlots {
    slots: Vec<Mutex<Box<dyn RowTransform>>>,
}

impl WorkerSlots {
    /// Wraps one transform per worker.
    pub fn new(transforms: Vec<Box<dyn RowTransform>>) -> Self {
        Self {
            slots: transforms.into_iter().map(Mutex::new).collect(),
        }
    }

    /// Number of slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True if there are no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Runs `f` with the transform owned by `worker`.
    ///
    /// Worker ids beyond the slot count wrap around. Returns `None` only for
    /// an empty arena.
    pub fn with_slot<R>(&self, worker: usize, f: impl FnOnce(&dyn RowTransform) -> R) -> Option<R> {
        if self.slots.is_empty() {
            return None;
        }
        let slot = &self.slots[worker % self.slots.len()];
        let guard = slot.lock().unwrap_or_else(PoisonError::into_inner);
        Some(f(&**guard))
    }
}
