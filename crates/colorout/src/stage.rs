//! The output color profile stage of a pixel pipe.

use colorout_compute::{Accelerator, Dispatch, PixelBuffer, PixelEngine, TransformPlan};
use colorout_icc::{ColorEngine, LcmsEngine, Profile, ProfileStore};
use std::cell::OnceCell;
use tracing::debug;

use crate::{
    resolve_plan, ColoroutConfig, ColoroutParams, ColoroutResult, PipeType,
    ResolveContext, Resolved, TracingLog, UserLog,
};

/// Converts Lab pixels into the output profile of one pipe.
///
/// Owns its collaborators and the current plan. The plan is resolved lazily
/// on first use and rebuilt on every [`commit`](Self::commit); processing
/// only reads it.
///
/// # Example
///
/// ```rust
/// use colorout::{ColoroutConfig, ColoroutStage, PipeType};
/// use colorout_compute::PixelBuffer;
///
/// let config = ColoroutConfig { threads: 2, ..Default::default() };
/// let stage = ColoroutStage::new(config, PipeType::Export).unwrap();
/// assert_eq!(stage.profile_name(), "sRGB");
///
/// let input = PixelBuffer::from_f32(vec![50.0, 0.0, 0.0], 1, 1, 3).unwrap();
/// let mut output = PixelBuffer::new(1, 1, 3);
/// stage.process(&input, &mut output).unwrap();
/// ```
pub struct ColoroutStage {
    config: ColoroutConfig,
    pipe: PipeType,
    params: ColoroutParams,
    engine: Box<dyn ColorEngine>,
    store: Box<dyn ProfileStore>,
    log: Box<dyn UserLog>,
    display_profile: Option<Vec<u8>>,
    pixels: PixelEngine,
    resolved: OnceCell<Resolved>,
}

impl ColoroutStage {
    /// Creates a stage for `pipe` with the default parameters.
    ///
    /// Nothing is resolved yet: the plan is built on first use, after the
    /// builders below have installed their collaborators.
    pub fn new(config: ColoroutConfig, pipe: PipeType) -> ColoroutResult<Self> {
        config.validate()?;
        Ok(Self {
            engine: Box::new(LcmsEngine::new()?),
            store: Box::new(config.profile_store()),
            log: Box::new(TracingLog),
            display_profile: None,
            pixels: PixelEngine::new(config.threads)?,
            params: ColoroutParams::default(),
            resolved: OnceCell::new(),
            config,
            pipe,
        })
    }

    /// Replaces the color engine.
    pub fn with_engine(mut self, engine: Box<dyn ColorEngine>) -> Self {
        self.engine = engine;
        self.resolved.take();
        self
    }

    /// Replaces the profile store.
    pub fn with_store(mut self, store: Box<dyn ProfileStore>) -> Self {
        self.store = store;
        self.resolved.take();
        self
    }

    /// Replaces the user log.
    pub fn with_log(mut self, log: Box<dyn UserLog>) -> Self {
        self.log = log;
        self.resolved.take();
        self
    }

    /// Sets the ICC data behind the `"X profile"` name.
    pub fn with_display_profile(mut self, icc: Vec<u8>) -> Self {
        self.display_profile = Some(icc);
        self.resolved.take();
        self
    }

    /// Offloads matrix plans to `accelerator`.
    pub fn with_accelerator(mut self, accelerator: Box<dyn Accelerator>) -> Self {
        self.pixels = self.pixels.with_accelerator(accelerator);
        self
    }

    /// Applies new parameters and rebuilds the plan.
    ///
    /// The previous plan is released before the new one is built. Never
    /// fails: unusable profiles are replaced by sRGB.
    pub fn commit(&mut self, params: &ColoroutParams) -> &Resolved {
        self.params = params.clone();
        self.resolved.take();
        self.resolved()
    }

    fn resolved(&self) -> &Resolved {
        self.resolved.get_or_init(|| self.resolve())
    }

    fn resolve(&self) -> Resolved {
        let (name, intent) = self.params.selection(self.pipe);
        let (name, intent) = self.config.export.apply(self.pipe, name, intent);
        debug!(pipe = ?self.pipe, name, ?intent, "resolving output profile");

        let ctx = ResolveContext {
            store: self.store.as_ref(),
            engine: self.engine.as_ref(),
            log: self.log.as_ref(),
            display_profile: self.display_profile.as_deref(),
            workers: self.pixels.workers(),
            lut_samples: self.config.lut_samples,
            prefer_matrix: self.config.prefer_matrix_path,
        };
        resolve_plan(&ctx, name, intent)
    }

    /// Converts `input` (Lab) into `output` (output RGB).
    pub fn process(&self, input: &PixelBuffer, output: &mut PixelBuffer) -> ColoroutResult<Dispatch> {
        Ok(self.pixels.process(self.plan(), input, output)?)
    }

    /// Current plan.
    pub fn plan(&self) -> &TransformPlan {
        &self.resolved().plan
    }

    /// Profile the current plan converts into.
    pub fn output_profile(&self) -> &Profile {
        &self.resolved().profile
    }

    /// Name of the output profile actually in use.
    pub fn profile_name(&self) -> &str {
        &self.resolved().name
    }

    /// True if the current profile replaced the requested one by sRGB.
    pub fn substituted(&self) -> bool {
        self.resolved().substituted
    }

    /// Last committed parameters.
    pub fn params(&self) -> &ColoroutParams {
        &self.params
    }

    /// Pipe this stage belongs to.
    pub fn pipe(&self) -> PipeType {
        self.pipe
    }

    /// Stage configuration.
    pub fn config(&self) -> &ColoroutConfig {
        &self.config
    }

    /// Pixel engine used by [`process`](Self::process).
    pub fn pixels(&self) -> &PixelEngine {
        &self.pixels
    }
}

impl std::fmt::Debug for ColoroutStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColoroutStage")
            .field("pipe", &self.pipe)
            .field("params", &self.params)
            .field("resolved", &self.resolved.get().map(|r| r.name.as_str()))
            .field("pixels", &self.pixels)
            .finish()
    }
}
