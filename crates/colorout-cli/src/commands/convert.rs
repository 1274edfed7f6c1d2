//! Convert command: Lab buffer in, output RGB buffer out.

use crate::ConvertArgs;
use anyhow::{bail, Result};
use colorout::ColoroutConfig;
use colorout_compute::PixelBuffer;
use tracing::{debug, info};

/// Converts the input buffer and writes the result.
pub fn run(args: ConvertArgs, config: ColoroutConfig) -> Result<()> {
    if !(3..=4).contains(&args.channels) {
        bail!("channels must be 3 or 4, got {}", args.channels);
    }
    let count = args.width as usize * args.height as usize * args.channels as usize;
    debug!(input = %args.input.display(), count, "reading Lab buffer");
    let data = super::read_f32(&args.input, count)?;
    let input = PixelBuffer::from_f32(data, args.width, args.height, args.channels)?;
    let mut output = PixelBuffer::new(args.width, args.height, args.channels);

    let stage = super::build_stage(&args.profile, &args.target, config)?;
    let dispatch = stage.process(&input, &mut output)?;

    info!(
        "{} -> {} ({}x{}x{}, profile {}, {:?})",
        args.input.display(),
        args.output.display(),
        args.width,
        args.height,
        args.channels,
        stage.profile_name(),
        dispatch
    );

    super::write_f32(&args.output, output.data())
}
