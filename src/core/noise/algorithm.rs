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

//! Noise state-update algorithms
//!
//! Two historical routines reproduce the chip's noise sequence; both were
//! shipped by real emulators of the same silicon and both are kept here,
//! selected once at construction. They share one contract: a step mutates the
//! 32-bit state and returns the output bit published for that update.

use std::str::FromStr;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;

/// Multiplier of the arithmetic recurrence
const LCG_MUL: u32 = 110_351_245;

/// Additive constant of the arithmetic recurrence
const LCG_INC: u32 = 12_345;

/// State-update strategy for the noise generator
///
/// Chosen once when the generator is constructed; callers are agnostic to
/// which is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub enum NoiseAlgorithm {
    /// Arithmetic recurrence (`state * 110351245 + 12345`, wrapping)
    ///
    /// The default routine. The output bit is taken from the state *before*
    /// the recurrence: 1 iff the state exceeds 0x8000_0000.
    #[default]
    Lcg,

    /// Shift register with feedback taps at bits 30 and 2
    ///
    /// The output bit is the new state's lowest bit after the shift.
    ShiftRegister,
}

impl NoiseAlgorithm {
    /// Perform one state update, returning the output bit for this update
    #[inline(always)]
    #[allow(clippy::match_same_arms)] // the tap branch is four-way on hardware
    pub(crate) fn step(self, state: &mut u32) -> u8 {
        match self {
            NoiseAlgorithm::Lcg => {
                let level = (*state > 0x8000_0000) as u8;
                // Wrapping is intentional; the overflow is part of the period
                *state = state.wrapping_mul(LCG_MUL).wrapping_add(LCG_INC);
                level
            }
            NoiseAlgorithm::ShiftRegister => {
                // Feedback from bits 30 and 2: the two agreement cases insert
                // a 0, the two disagreement cases insert a 1. The hardware
                // resolves the four cases as four separate branches, and so
                // does this routine.
                let taps = ((*state >> 30) & 1, (*state >> 2) & 1);
                *state = match taps {
                    (1, 1) => *state << 1,
                    (1, 0) => (*state << 1) | 1,
                    (0, 1) => (*state << 1) | 1,
                    _ => *state << 1, // (0, 0)
                };
                (*state & 1) as u8
            }
        }
    }
}

impl FromStr for NoiseAlgorithm {
    type Err = CoreError;

    /// Parse a configuration name (`"lcg"` or `"shift-register"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lcg" => Ok(NoiseAlgorithm::Lcg),
            "shift-register" => Ok(NoiseAlgorithm::ShiftRegister),
            other => Err(CoreError::UnknownAlgorithm(other.to_string())),
        }
    }
}
