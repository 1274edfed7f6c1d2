//! colorout - output color profile conversion from the command line
//!
//! Converts raw Lab float buffers into an output profile, or reports how a
//! profile would be handled.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colorout::ColoroutConfig;
use colorout_icc::Intent;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "colorout")]
#[command(author, version, about = "Output color profile conversion")]
#[command(long_about = "
Converts CIE Lab (D50) float buffers into an output color profile.

Profiles are named like in the pipeline: sRGB, linear_rgb, adobergb,
\"X profile\" (needs --display-icc), or an ICC file found under
<config_dir>/color/out or <data_dir>/color/out.

Examples:
  colorout convert -i lab.f32 -o rgb.f32 -W 1920 -H 1080
  colorout convert -i lab.f32 -o rgb.f32 -W 64 -H 64 -c 4 -p adobergb --export
  colorout probe wide-gamut.icc --intent relative_colorimetric
  colorout --config colorout.yaml -j 8 probe sRGB
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw little-endian f32 Lab buffer
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Show how a profile resolves
    #[command(visible_alias = "p")]
    Probe(ProbeArgs),
}

/// Arguments for the `convert` command.
#[derive(Args)]
struct ConvertArgs {
    /// Input buffer (interleaved Lab floats)
    #[arg(short, long)]
    input: PathBuf,

    /// Output buffer
    #[arg(short, long)]
    output: PathBuf,

    /// Image width in pixels
    #[arg(short = 'W', long)]
    width: u32,

    /// Image height in pixels
    #[arg(short = 'H', long)]
    height: u32,

    /// Channels per pixel (3, or 4 with a carried-through 4th channel)
    #[arg(short, long, default_value = "3")]
    channels: u32,

    /// Output profile name
    #[arg(short, long, default_value = "sRGB")]
    profile: String,

    #[command(flatten)]
    target: TargetArgs,
}

/// Arguments for the `probe` command.
#[derive(Args)]
struct ProbeArgs {
    /// Profile name
    name: String,

    #[command(flatten)]
    target: TargetArgs,
}

/// Pipe settings shared by all commands.
#[derive(Args)]
struct TargetArgs {
    /// Rendering intent: perceptual, relative_colorimetric, saturation, absolute_colorimetric
    #[arg(long, default_value = "perceptual")]
    intent: Intent,

    /// Run as an export pipe (applies export overrides from the config)
    #[arg(long)]
    export: bool,

    /// ICC file used for the "X profile" name
    #[arg(long)]
    display_icc: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ColoroutConfig> {
    let mut config = match &cli.config {
        Some(path) => ColoroutConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => ColoroutConfig::default(),
    };
    if cli.threads > 0 {
        config.threads = cli.threads;
    }
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Convert(args) => commands::convert::run(args, config),
        Commands::Probe(args) => commands::probe::run(args, config),
    }
}
