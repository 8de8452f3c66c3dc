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

//! Save state serialization for the noise core
//!
//! Captures a noise channel's complete state so an emulation session can be
//! suspended and resumed bit-exactly. States are serialized with bincode and
//! carry a version number plus creation metadata; loading a state with a
//! different version fails with an error.
//!
//! # Example
//!
//! ```no_run
//! use saarx::core::noise::NoiseGenerator;
//! use saarx::core::save_state::SaveState;
//!
//! let mut noise = NoiseGenerator::new();
//! for _ in 0..1000 {
//!     noise.tick();
//! }
//!
//! // Save
//! let state = SaveState::from_generator(&noise, "before boss fight");
//! state.save_to_file("noise.state").unwrap();
//!
//! // Later: load and resume
//! let loaded = SaveState::load_from_file("noise.state").unwrap();
//! loaded.apply(&mut noise);
//! ```

use bincode::{config, Decode, Encode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::core::error::{CoreError, Result};
use crate::core::noise::{NoiseGenerator, NoiseState};

/// Save state version for compatibility checking
///
/// Incremented whenever the serialized layout changes incompatibly.
pub const SAVE_STATE_VERSION: u32 = 1;

/// Complete noise channel save state
#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
pub struct SaveState {
    /// Version number for compatibility checking
    pub version: u32,

    /// Save state metadata
    pub metadata: SaveStateMetadata,

    /// Noise channel state
    pub noise: NoiseState,
}

/// Save state metadata
#[derive(Debug, Serialize, Deserialize, Encode, Decode)]
#[bincode(encode_bounds = "", decode_bounds = "")]
pub struct SaveStateMetadata {
    /// Timestamp when the save state was created
    #[bincode(with_serde)]
    pub created_at: DateTime<Utc>,

    /// Free-form label supplied by the host
    pub description: String,
}

impl SaveState {
    /// Capture the given generator into a new save state
    pub fn from_generator(noise: &NoiseGenerator, description: &str) -> Self {
        Self {
            version: SAVE_STATE_VERSION,
            metadata: SaveStateMetadata {
                created_at: Utc::now(),
                description: description.to_string(),
            },
            noise: noise.snapshot(),
        }
    }

    /// Restore this state into a generator
    pub fn apply(&self, noise: &mut NoiseGenerator) {
        noise.restore(&self.noise);
    }

    /// Save state to a binary file
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the file cannot be written.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let config = config::standard();
        let encoded = bincode::encode_to_vec(self, config)
            .map_err(|e| CoreError::SaveStateEncode(e.to_string()))?;

        let mut file = File::create(path)?;
        file.write_all(&encoded)?;

        log::info!("Save state written ({} bytes)", encoded.len());
        Ok(())
    }

    /// Load a state from a binary file and verify version compatibility
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, decoding fails, or the
    /// version does not match [`SAVE_STATE_VERSION`].
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;

        let config = config::standard();
        let (state, _): (SaveState, usize) = bincode::decode_from_slice(&buffer, config)
            .map_err(|e| CoreError::SaveStateDecode(e.to_string()))?;

        // Version check
        if state.version != SAVE_STATE_VERSION {
            return Err(CoreError::SaveStateVersion {
                expected: SAVE_STATE_VERSION,
                got: state.version,
            });
        }

        Ok(state)
    }
}
