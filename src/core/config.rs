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

//! Render configuration
//!
//! Host-facing settings for a noise channel, loadable from a TOML file:
//!
//! ```toml
//! seed = 286331153          # 0x11111111
//! source = 1                # noise clock selector (3 = external trigger)
//! sample_rate_hz = 44100    # 44100, 22050 or 11025
//! algorithm = "lcg"         # or "shift-register"
//! ```
//!
//! All fields are optional and default to the chip's power-on values.
//! Configuration is an infrequent, non-real-time path; validation failures
//! surface as [`CoreError`](crate::core::error::CoreError).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, Result};
use crate::core::noise::{NoiseAlgorithm, NoiseGenerator, SampleRate, DEFAULT_SEED};

/// Noise channel configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseConfig {
    /// PRNG seed
    pub seed: u32,

    /// Noise clock selector (two-bit domain; 3 selects external clocking)
    pub source: u8,

    /// Host sample rate in Hz (44100, 22050 or 11025)
    pub sample_rate_hz: u32,

    /// State-update algorithm name: "lcg" or "shift-register"
    pub algorithm: String,
}

impl Default for NoiseConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            source: 0,
            sample_rate_hz: 11_025,
            algorithm: "lcg".to_string(),
        }
    }
}

impl NoiseConfig {
    /// Load a configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this structure.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| CoreError::Parse(e.to_string()))
    }

    /// Build a configured generator from these settings
    ///
    /// # Errors
    ///
    /// Returns an error for an unsupported sample rate or an unknown
    /// algorithm name. The source selector is masked, not rejected, matching
    /// the register semantics.
    pub fn build(&self) -> Result<NoiseGenerator> {
        let rate = SampleRate::from_hz(self.sample_rate_hz)?;
        let algorithm: NoiseAlgorithm = self.algorithm.parse()?;

        let mut noise = NoiseGenerator::with_algorithm(algorithm);
        noise.seed(self.seed);
        noise.set_sample_rate(rate);
        noise.set_source(self.source);

        log::debug!(
            "Noise config: seed=0x{:08X} source={} rate={} Hz algorithm={}",
            self.seed,
            self.source,
            self.sample_rate_hz,
            self.algorithm
        );
        Ok(noise)
    }
}
