//! Engine tests for colorout-compute.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use colorout_compute::{
    Accelerator, ComputeError, ComputeResult, Dispatch, PixelBuffer, PixelEngine, TransformPlan,
    WorkerSlots,
};
use colorout_icc::{ColorEngine, Intent, LcmsEngine, MatrixShaper, Profile, RowTransform};

/// Accelerator that always fails to enqueue.
struct Broken {
    calls: Arc<AtomicUsize>,
}

impl Accelerator for Broken {
    fn name(&self) -> &str {
        "broken"
    }

    fn run_matrix_lut(
        &self,
        _shaper: &MatrixShaper,
        _input: &PixelBuffer,
        output: &mut PixelBuffer,
    ) -> ComputeResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        // Leave garbage behind to prove the CPU pass overwrites it.
        output.data_mut().fill(f32::NAN);
        Err(ComputeError::Accelerator("queue full".into()))
    }
}

/// Accelerator that runs the same math on the calling thread.
struct Serial;

impl Accelerator for Serial {
    fn name(&self) -> &str {
        "serial"
    }

    fn run_matrix_lut(
        &self,
        shaper: &MatrixShaper,
        input: &PixelBuffer,
        output: &mut PixelBuffer,
    ) -> ComputeResult<()> {
        let c = input.channels as usize;
        for (o, i) in output.data_mut().chunks_exact_mut(c).zip(input.data().chunks_exact(c)) {
            o[..3].copy_from_slice(&shaper.apply_lab([i[0], i[1], i[2]]));
            if c > 3 {
                o[3] = i[3];
            }
        }
        Ok(())
    }
}

fn lab_ramp(width: u32, height: u32, channels: u32) -> PixelBuffer {
    let mut data = Vec::new();
    for y in 0..height {
        for x in 0..width {
            let l = 100.0 * x as f32 / (width - 1).max(1) as f32;
            let a = -40.0 + 80.0 * y as f32 / (height - 1).max(1) as f32;
            data.extend_from_slice(&[l, a, 10.0]);
            if channels == 4 {
                data.push(0.5);
            }
        }
    }
    PixelBuffer::from_f32(data, width, height, channels).unwrap()
}

fn general_plan(workers: usize) -> TransformPlan {
    let engine = LcmsEngine::new().unwrap();
    let srgb = Profile::srgb();
    let slots: Vec<Box<dyn RowTransform>> = (0..workers)
        .map(|_| engine.lab_transform(&srgb, Intent::RelativeColorimetric).unwrap())
        .collect();
    TransformPlan::General(WorkerSlots::new(slots))
}

#[test]
fn test_accelerator_failure_falls_back_to_cpu() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = PixelEngine::new(2)
        .unwrap()
        .with_accelerator(Box::new(Broken { calls: calls.clone() }));
    let cpu_only = PixelEngine::new(2).unwrap();
    let plan = TransformPlan::Matrix(MatrixShaper::srgb_builtin(4096));

    let input = lab_ramp(16, 8, 4);
    let mut a = PixelBuffer::new(16, 8, 4);
    let mut b = PixelBuffer::new(16, 8, 4);

    assert_eq!(engine.process(&plan, &input, &mut a).unwrap(), Dispatch::CpuMatrix);
    assert_eq!(cpu_only.process(&plan, &input, &mut b).unwrap(), Dispatch::CpuMatrix);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_accelerator_matches_cpu() {
    let engine = PixelEngine::new(2).unwrap().with_accelerator(Box::new(Serial));
    let cpu_only = PixelEngine::new(2).unwrap();
    let plan = TransformPlan::Matrix(MatrixShaper::srgb_builtin(4096));

    let input = lab_ramp(9, 7, 3);
    let mut a = PixelBuffer::new(9, 7, 3);
    let mut b = PixelBuffer::new(9, 7, 3);

    assert_eq!(engine.process(&plan, &input, &mut a).unwrap(), Dispatch::Accelerator);
    cpu_only.process(&plan, &input, &mut b).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_general_plan_never_offloaded() {
    let engine = PixelEngine::new(2).unwrap().with_accelerator(Box::new(Serial));
    let plan = general_plan(engine.workers());

    let input = lab_ramp(4, 4, 3);
    let mut out = PixelBuffer::new(4, 4, 3);
    assert_eq!(engine.process(&plan, &input, &mut out).unwrap(), Dispatch::CpuGeneral);
}

#[test]
fn test_matrix_and_general_agree() {
    let engine = PixelEngine::new(3).unwrap();
    let lcms = LcmsEngine::new().unwrap();
    let matrix = TransformPlan::Matrix(
        lcms.derive_matrix_shaper(&Profile::srgb(), colorout_icc::LUT_SAMPLES).unwrap(),
    );
    let general = general_plan(engine.workers());

    // Stay inside the sRGB gamut so clipping in the general path doesn't matter.
    let data: Vec<f32> = [[50.0, 0.0, 0.0], [65.0, 10.0, 5.0], [30.0, -5.0, -10.0]]
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<_>>()
        .repeat(10);
    let input = PixelBuffer::from_f32(data, 5, 6, 3).unwrap();
    let mut fast = PixelBuffer::new(5, 6, 3);
    let mut slow = PixelBuffer::new(5, 6, 3);

    engine.process(&matrix, &input, &mut fast).unwrap();
    engine.process(&general, &input, &mut slow).unwrap();

    for (a, b) in fast.data().iter().zip(slow.data()) {
        assert!((a - b).abs() < 0.01, "fast {a} vs general {b}");
    }
}

#[test]
fn test_alpha_is_carried() {
    let engine = PixelEngine::new(2).unwrap();
    let input = lab_ramp(3, 3, 4);
    for plan in [TransformPlan::Matrix(MatrixShaper::srgb_builtin(256)), general_plan(2)] {
        let mut out = PixelBuffer::new(3, 3, 4);
        engine.process(&plan, &input, &mut out).unwrap();
        assert!(out.data().chunks_exact(4).all(|px| px[3] == 0.5));
    }
}

#[test]
fn test_repeatable() {
    let engine = PixelEngine::new(4).unwrap();
    let plan = general_plan(engine.workers());
    let input = lab_ramp(32, 32, 3);
    let mut a = PixelBuffer::new(32, 32, 3);
    let mut b = PixelBuffer::new(32, 32, 3);
    engine.process(&plan, &input, &mut a).unwrap();
    engine.process(&plan, &input, &mut b).unwrap();
    assert_eq!(a.data(), b.data());
}

#[test]
fn test_out_of_gamut_stays_finite() {
    let engine = PixelEngine::new(1).unwrap();
    let plan = TransformPlan::Matrix(MatrixShaper::srgb_builtin(4096));
    // Red goes negative before the LUT, which holds it at the edge sample.
    let input = PixelBuffer::from_f32(vec![60.0, -120.0, 60.0], 1, 1, 3).unwrap();
    let mut out = PixelBuffer::new(1, 1, 3);
    engine.process(&plan, &input, &mut out).unwrap();
    assert!(out.data().iter().all(|v| v.is_finite()));
}

#[test]
fn test_mismatched_buffers() {
    let engine = PixelEngine::new(1).unwrap();
    let plan = TransformPlan::Matrix(MatrixShaper::srgb_builtin(16));
    let input = lab_ramp(4, 4, 3);

    let mut wrong_size = PixelBuffer::new(4, 3, 3);
    assert!(matches!(
        engine.process(&plan, &input, &mut wrong_size),
        Err(ComputeError::DimensionMismatch { .. })
    ));

    let mut wrong_channels = PixelBuffer::new(4, 4, 4);
    assert!(engine.process(&plan, &input, &mut wrong_channels).is_err());
}
