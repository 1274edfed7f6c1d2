//! Pixel transform engine: dispatches a plan to the accelerator or CPU.

use tracing::{trace, warn};

use crate::{Accelerator, ComputeError, ComputeResult, CpuExecutor, PixelBuffer, TransformPlan};

/// Which path processed a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Matrix plan on the accelerator.
    Accelerator,
    /// Matrix plan on the CPU pool.
    CpuMatrix,
    /// General plan on the CPU pool.
    CpuGeneral,
}

/// Applies transform plans to pixel buffers.
pub struct PixelEngine {
    cpu: CpuExecutor,
    accelerator: Option<Box<dyn Accelerator>>,
}

impl PixelEngine {
    /// Creates a CPU-only engine with `threads` workers (0 = auto).
    pub fn new(threads: usize) -> ComputeResult<Self> {
        Ok(Self {
            cpu: CpuExecutor::new(threads)?,
            accelerator: None,
        })
    }

    /// Adds an accelerator used for matrix plans.
    pub fn with_accelerator(mut self, accelerator: Box<dyn Accelerator>) -> Self {
        self.accelerator = Some(accelerator);
        self
    }

    /// Number of CPU workers. General plans need one slot per worker.
    pub fn workers(&self) -> usize {
        self.cpu.threads()
    }

    /// Name of the configured accelerator.
    pub fn accelerator_name(&self) -> Option<&str> {
        self.accelerator.as_deref().map(|a| a.name())
    }

    /// Converts `input` (Lab) into `output` using `plan`.
    ///
    /// Matrix plans go to the accelerator when one is configured; if it
    /// fails the call is logged and repeated on the CPU. Output values are
    /// not clamped.
    ///
    /// # Errors
    ///
    /// Only when `input` and `output` disagree in size or channel count.
    pub fn process(
        &self,
        plan: &TransformPlan,
        input: &PixelBuffer,
        output: &mut PixelBuffer,
    ) -> ComputeResult<Dispatch> {
        if input.dimensions() != output.dimensions() {
            return Err(ComputeError::DimensionMismatch {
                input: input.dimensions(),
                output: output.dimensions(),
            });
        }
        if !(3..=4).contains(&input.channels) {
            return Err(ComputeError::UnsupportedChannels(input.channels));
        }
        let expected = input.pixel_count() * input.channels as usize;
        for actual in [input.data.len(), output.data.len()] {
            if actual != expected {
                return Err(ComputeError::BufferSizeMismatch { expected, actual });
            }
        }

        let channels = input.channels as usize;
        let dispatch = match plan {
            TransformPlan::Matrix(shaper) => {
                let offloaded = match &self.accelerator {
                    Some(accel) => match accel.run_matrix_lut(shaper, input, output) {
                        Ok(()) => true,
                        Err(e) => {
                            warn!(device = accel.name(), "couldn't enqueue output color kernel: {e}");
                            false
                        }
                    },
                    None => false,
                };
                if offloaded {
                    Dispatch::Accelerator
                } else {
                    self.cpu.exec_matrix(shaper, &input.data, &mut output.data, channels);
                    Dispatch::CpuMatrix
                }
            }
            TransformPlan::General(slots) => {
                self.cpu.exec_general(
                    slots,
                    &input.data,
                    &mut output.data,
                    input.width as usize,
                    channels,
                );
                Dispatch::CpuGeneral
            }
        };

        trace!(?dispatch, width = input.width, height = input.height, "processed");
        Ok(dispatch)
    }
}

impl std::fmt::Debug for PixelEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelEngine")
            .field("workers", &self.workers())
            .field("accelerator", &self.accelerator_name())
            .finish()
    }
}
