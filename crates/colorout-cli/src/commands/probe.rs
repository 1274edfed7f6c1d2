//! Probe command: shows how a profile name resolves.

use crate::ProbeArgs;
use anyhow::Result;
use colorout::ColoroutConfig;
use colorout_compute::TransformPlan;

/// Resolves the profile and prints the outcome.
pub fn run(args: ProbeArgs, config: ColoroutConfig) -> Result<()> {
    let stage = super::build_stage(&args.name, &args.target, config)?;

    println!("{}", args.name);
    println!("  Pipe:        {:?}", stage.pipe());
    println!("  Intent:      {}", args.target.intent.name());
    println!("  Resolved to: {}", stage.profile_name());
    let profile = stage.output_profile();
    println!("  Description: {}", profile.description());
    println!("  Color space: {}", profile.color_space());
    if stage.substituted() {
        println!("  Substituted: yes (requested profile unusable)");
    }

    match stage.plan() {
        TransformPlan::Matrix(shaper) => {
            println!("  Plan:        matrix + 3 LUTs ({} samples)", shaper.lut_samples());
            for row in shaper.xyz_to_rgb.m {
                println!("               [{:>9.5} {:>9.5} {:>9.5}]", row[0], row[1], row[2]);
            }
        }
        TransformPlan::General(slots) => {
            println!("  Plan:        general ({} worker transforms)", slots.len());
        }
    }
    let eligible = stage.plan().accelerator_eligible();
    println!("  Accelerator: {}", if eligible { "eligible" } else { "CPU only" });

    Ok(())
}
