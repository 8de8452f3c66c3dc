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

//! Phase accumulator clocking
//!
//! The noise channel derives its update rate from the host sample rate with a
//! fixed-point frequency divider: every host sample a fixed increment is added
//! to a counter, and each time the counter crosses the threshold for the
//! current sample-rate tier one state update fires. All values are kept in
//! 24.8 fixed point so the three supported host rates are exact right-shifts
//! of one reference threshold.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

use crate::core::error::{CoreError, Result};

/// Reference threshold: 44100 Hz in 24.8 fixed point (44100 << 8)
///
/// The firing threshold for a tier is this value right-shifted by the tier's
/// exponent, so it can never reach zero.
pub const RATE_BASE: u32 = 44_100 << 8;

/// Host sample-rate tier
///
/// The three supported host rates are successive halvings of 44100 Hz,
/// selected by a small exponent (rate = 44100 >> exponent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum SampleRate {
    /// 44100 Hz (exponent 0)
    Hz44100,
    /// 22050 Hz (exponent 1)
    Hz22050,
    /// 11025 Hz (exponent 2)
    Hz11025,
}

impl SampleRate {
    /// Right-shift applied to the reference rate for this tier
    pub const fn exponent(self) -> u32 {
        match self {
            SampleRate::Hz44100 => 0,
            SampleRate::Hz22050 => 1,
            SampleRate::Hz11025 => 2,
        }
    }

    /// Sample rate in Hz
    pub const fn hz(self) -> u32 {
        44_100 >> self.exponent()
    }

    /// Look up the tier for a raw rate in Hz
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedSampleRate` for anything other than
    /// 44100, 22050 or 11025.
    pub fn from_hz(hz: u32) -> Result<Self> {
        match hz {
            44_100 => Ok(SampleRate::Hz44100),
            22_050 => Ok(SampleRate::Hz22050),
            11_025 => Ok(SampleRate::Hz11025),
            other => Err(CoreError::UnsupportedSampleRate(other)),
        }
    }
}

impl Default for SampleRate {
    /// Power-on default of the chip core
    fn default() -> Self {
        SampleRate::Hz11025
    }
}

/// Fractional-phase counter for the internal noise clock
///
/// A value object so the rescale-on-rate-change invariant can be tested in
/// isolation: the counter always measures elapsed phase in units of the
/// *current* tier, and [`PhaseAccumulator::set_rate`] rescales it when the
/// tier changes so firing times stay continuous across a live rate switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct PhaseAccumulator {
    /// Accumulated phase, 24.8 fixed point
    counter: u32,

    /// Current sample-rate tier (defines the firing threshold)
    rate: SampleRate,
}

impl PhaseAccumulator {
    /// Create an accumulator at zero phase for the given tier
    pub fn new(rate: SampleRate) -> Self {
        Self { counter: 0, rate }
    }

    /// Firing threshold for the current tier
    pub fn threshold(&self) -> u32 {
        RATE_BASE >> self.rate.exponent()
    }

    /// Add one tick's increment and drain the counter below the threshold
    ///
    /// Returns how many times the threshold was crossed. At low sample-rate
    /// tiers the increment exceeds the threshold, so this can be more than
    /// one per tick; the counter is drained by a loop, never a single
    /// conditional.
    pub fn advance(&mut self, increment: u32) -> u32 {
        self.counter += increment;

        let threshold = self.threshold();
        let mut fired = 0;
        while self.counter >= threshold {
            self.counter -= threshold;
            fired += 1;
        }
        fired
    }

    /// Switch tiers, preserving elapsed-phase proportion
    ///
    /// The counter is rescaled by the exponent delta so the fraction of a
    /// period already elapsed carries over (up to the right-shift's integer
    /// truncation when the rate decreases).
    pub fn set_rate(&mut self, rate: SampleRate) {
        let old = self.rate.exponent();
        let new = rate.exponent();
        if new < old {
            // Sample rate increased; scale the counter up accordingly
            self.counter <<= old - new;
        } else {
            // Sample rate decreased (or unchanged); scale down
            self.counter >>= new - old;
        }
        self.rate = rate;
    }

    /// Reset to zero phase, discarding accumulated sub-threshold phase
    pub fn reset(&mut self) {
        self.counter = 0;
    }

    /// Current accumulated phase
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Current sample-rate tier
    pub fn rate(&self) -> SampleRate {
        self.rate
    }
}

impl Default for PhaseAccumulator {
    fn default() -> Self {
        Self::new(SampleRate::default())
    }
}
