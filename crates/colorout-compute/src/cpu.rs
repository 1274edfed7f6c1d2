//! CPU execution using a dedicated rayon pool.

use rayon::prelude::*;

use crate::{ComputeError, ComputeResult, WorkerSlots};
use colorout_icc::MatrixShaper;

/// CPU executor owning a fixed-size rayon pool.
///
/// The pool size is the worker count profile resolution builds general
/// transforms for, so worker `i` always uses slot `i`.
pub struct CpuExecutor {
    pool: rayon::ThreadPool,
}

impl CpuExecutor {
    /// Creates a pool with `threads` workers (0 = rayon's default).
    pub fn new(threads: usize) -> ComputeResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("colorout-{i}"))
            .build()
            .map_err(|e| ComputeError::ThreadPool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Number of workers.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Matrix path: every pixel independently, Lab -> XYZ -> RGB -> LUT.
    pub fn exec_matrix(&self, shaper: &MatrixShaper, src: &[f32], dst: &mut [f32], channels: usize) {
        self.pool.install(|| {
            dst.par_chunks_mut(channels)
                .zip(src.par_chunks(channels))
                .for_each(|(out, inp)| {
                    let rgb = shaper.apply_lab([inp[0], inp[1], inp[2]]);
                    out[..3].copy_from_slice(&rgb);
                    if channels > 3 {
                        out[3] = inp[3];
                    }
                });
        });
    }

    /// General path: rows are gathered into contiguous Lab triples, converted
    /// with the executing worker's slot, and scattered back.
    pub fn exec_general(
        &self,
        slots: &WorkerSlots,
        src: &[f32],
        dst: &mut [f32],
        width: usize,
        channels: usize,
    ) {
        let row_len = width * channels;
        if row_len == 0 {
            return;
        }
        self.pool.install(|| {
            dst.par_chunks_mut(row_len)
                .zip(src.par_chunks(row_len))
                .for_each_init(
                    || (vec![[0.0f32; 3]; width], vec![[0.0f32; 3]; width]),
                    |(lab, rgb), (out, inp)| {
                        for (px, chunk) in lab.iter_mut().zip(inp.chunks_exact(channels)) {
                            *px = [chunk[0], chunk[1], chunk[2]];
                        }

                        let worker = rayon::current_thread_index().unwrap_or(0);
                        slots.with_slot(worker, |xform| xform.transform_row(lab, rgb));

                        for ((px, o), i) in rgb
                            .iter()
                            .zip(out.chunks_exact_mut(channels))
                            .zip(inp.chunks_exact(channels))
                        {
                            o[..3].copy_from_slice(px);
                            if channels > 3 {
                                o[3] = i[3];
                            }
                        }
                    },
                );
        });
    }
}

impl std::fmt::Debug for CpuExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuExecutor").field("threads", &self.threads()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorout_icc::RowTransform;
    use std::sync::Mutex;
    use std::thread::ThreadId;

    /// Passes Lab through and records which threads used the slot.
    struct Recorder {
        threads: std::sync::Arc<Mutex<Vec<(usize, ThreadId)>>>,
        slot: usize,
    }

    impl RowTransform for Recorder {
        fn transform_row(&self, lab: &[[f32; 3]], rgb: &mut [[f32; 3]]) {
            self.threads
                .lock()
                .unwrap()
                .push((self.slot, std::thread::current().id()));
            rgb.copy_from_slice(lab);
        }
    }

    #[test]
    fn test_general_rows_and_alpha() {
        let exec = CpuExecutor::new(3).unwrap();
        let log = std::sync::Arc::new(Mutex::new(Vec::new()));
        let slots = WorkerSlots::new(
            (0..3)
                .map(|slot| {
                    Box::new(Recorder { threads: log.clone(), slot }) as Box<dyn RowTransform>
                })
                .collect(),
        );

        let (width, height) = (5usize, 16usize);
        let src: Vec<f32> = (0..width * height * 4).map(|v| v as f32).collect();
        let mut dst = vec![0.0; src.len()];
        exec.exec_general(&slots, &src, &mut dst, width, 4);

        assert_eq!(dst, src);
        let log = log.lock().unwrap();
        assert_eq!(log.len(), height);

        // A slot is only ever driven from a single pool thread.
        for slot in 0..3 {
            let mut ids: Vec<_> = log.iter().filter(|(s, _)| *s == slot).map(|(_, t)| *t).collect();
            ids.dedup();
            assert!(ids.len() <= 1, "slot {slot} used by {} threads", ids.len());
        }
    }

    #[test]
    fn test_matrix_three_channels() {
        let exec = CpuExecutor::new(2).unwrap();
        let shaper = MatrixShaper::srgb_builtin(4096);
        let src = [100.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let mut dst = [0.0f32; 6];
        exec.exec_matrix(&shaper, &src, &mut dst, 3);
        assert!(dst[..3].iter().all(|v| (v - 1.0).abs() < 0.01));
        assert!(dst[3..].iter().all(|v| v.abs() < 0.01));
    }
}
