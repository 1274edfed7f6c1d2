//! Accelerator seam for the matrix path.

use crate::{ComputeResult, PixelBuffer};
use colorout_icc::MatrixShaper;

/// A compute device able to run the matrix path.
///
/// Implementations receive the row-major matrix and the three LUTs through
/// `shaper` and must produce the same result as
/// [`CpuExecutor::exec_matrix`](crate::CpuExecutor::exec_matrix) over a
/// width x height work grid. An error makes the engine fall back to the CPU
/// for that call.
pub trait Accelerator: Send + Sync {
    /// Device name for logs.
    fn name(&self) -> &str;

    /// Runs the matrix path from `input` into `output`.
    fn run_matrix_lut(
        &self,
        shaper: &MatrixShaper,
        input: &PixelBuffer,
        output: &mut PixelBuffer,
    ) -> ComputeResult<()>;
}
