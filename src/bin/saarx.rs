// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use log::{error, info};
use saarx::core::config::NoiseConfig;
use saarx::core::error::Result;
use saarx::core::save_state::SaveState;

/// SAA1099 noise channel diagnostic tool
///
/// Renders a noise bit stream with the configured clocking and reports its
/// statistics; optionally dumps the raw levels and a save state. This is a
/// developer tool, not an audio host.
#[derive(Parser)]
#[command(name = "saarx")]
#[command(about = "SAA1099 noise generator core", long_about = None)]
struct Args {
    /// Path to a TOML render configuration
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Number of samples to render
    #[arg(short = 'n', long, default_value = "44100")]
    samples: usize,

    /// Override the PRNG seed
    #[arg(long)]
    seed: Option<u32>,

    /// Override the noise clock selector (masked to 0-3; 3 = external)
    #[arg(long)]
    source: Option<u8>,

    /// Override the host sample rate in Hz (44100, 22050 or 11025)
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Write raw level bytes (0x00/0x01 per sample) to this file
    #[arg(short = 'o', long)]
    output: Option<String>,

    /// Write a save state to this file after rendering
    #[arg(long)]
    save_state: Option<String>,
}

fn main() -> Result<()> {
    // Load .env file if present (for development configuration)
    if let Err(e) = dotenvy::dotenv() {
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("saarx v{}", env!("CARGO_PKG_VERSION"));
    info!("SAA1099 noise generator core");

    // Parse command line arguments
    let args = Args::parse();

    // Load configuration, then apply command-line overrides
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading config from: {}", path);
            NoiseConfig::from_toml_file(path).inspect_err(|e| {
                error!("Failed to load config: {}", e);
            })?
        }
        None => NoiseConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(source) = args.source {
        config.source = source;
    }
    if let Some(rate) = args.sample_rate {
        config.sample_rate_hz = rate;
    }

    let mut noise = config.build().inspect_err(|e| {
        error!("Invalid configuration: {}", e);
    })?;

    info!(
        "Rendering {} samples at {} Hz (source {}, {} algorithm)",
        args.samples,
        config.sample_rate_hz,
        config.source,
        config.algorithm
    );

    // In external-trigger mode there is no oscillator attached here, so
    // drive one trigger per sample to exercise the update path
    let external = noise.source().is_external();

    let mut levels = Vec::with_capacity(args.samples);
    let mut ones: u64 = 0;
    let mut transitions: u64 = 0;
    let mut last = noise.level();

    for _ in 0..args.samples {
        if external {
            noise.trigger();
        }
        let bit = noise.tick();
        ones += bit as u64;
        if bit != last {
            transitions += 1;
            last = bit;
        }
        levels.push(bit);
    }

    info!(
        "Rendered: {} ones / {} samples ({:.2}%), {} transitions",
        ones,
        args.samples,
        100.0 * ones as f64 / args.samples.max(1) as f64,
        transitions
    );

    if let Some(path) = &args.output {
        std::fs::write(path, &levels)?;
        info!("Raw levels written to: {}", path);
    }

    if let Some(path) = &args.save_state {
        let state = SaveState::from_generator(&noise, "saarx render");
        state.save_to_file(path)?;
        info!("Save state written to: {}", path);
    }

    Ok(())
}
