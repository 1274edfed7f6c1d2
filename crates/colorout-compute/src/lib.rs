//! Pixel transform engine for the output color profile stage.
//!
//! Applies a [`TransformPlan`] to an interleaved Lab float buffer, producing
//! output RGB. Matrix plans run per pixel on a rayon pool or on an optional
//! [`Accelerator`]; general plans run per scanline, each worker using its own
//! transform slot.
//!
//! # Architecture
//!
//! ```text
//! PixelEngine
//!     +-- Accelerator (optional, matrix plans only)
//!     +-- CpuExecutor (rayon pool, one worker per plan slot)
//!             +-- matrix path:  Lab -> XYZ -> Mat3 -> 3x ToneLut
//!             +-- general path: row gather -> RowTransform -> row scatter
//! ```
//!
//! # Example
//!
//! ```rust
//! use colorout_compute::{PixelBuffer, PixelEngine, TransformPlan};
//! use colorout_icc::MatrixShaper;
//!
//! let engine = PixelEngine::new(2).unwrap();
//! let plan = TransformPlan::Matrix(MatrixShaper::srgb_builtin(4096));
//!
//! let input = PixelBuffer::from_f32(vec![50.0, 0.0, 0.0].repeat(4), 2, 2, 3).unwrap();
//! let mut output = PixelBuffer::new(2, 2, 3);
//! engine.process(&plan, &input, &mut output).unwrap();
//! assert!((output.data()[0] - 0.466).abs() < 0.01);
//! ```

mod accel;
mod cpu;
mod engine;
mod image;
mod plan;

pub use accel::Accelerator;
pub use cpu::CpuExecutor;
pub use engine::{Dispatch, PixelEngine};
pub use image::PixelBuffer;
pub use plan::{TransformPlan, WorkerSlots};

use thiserror::Error;

/// Pixel engine errors.
///
/// These are host contract violations (mismatched buffers) or accelerator
/// failures; profile problems never reach the engine.
#[derive(Error, Debug)]
pub enum ComputeError {
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSizeMismatch { expected: usize, actual: usize },

    #[error("Dimension mismatch: input {input:?}, output {output:?}")]
    DimensionMismatch {
        input: (u32, u32, u32),
        output: (u32, u32, u32),
    },

    #[error("Unsupported channel count: {0} (expected 3 or 4)")]
    UnsupportedChannels(u32),

    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),

    #[error("Accelerator failed: {0}")]
    Accelerator(String),
}

pub type ComputeResult<T> = Result<T, ComputeError>;
