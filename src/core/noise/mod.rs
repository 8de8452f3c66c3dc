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

//! SAA1099 noise generator
//!
//! One noise channel of the chip. The channel is a pseudo-random bit source
//! with two clocking regimes:
//!
//! - **Internal divider** (sources 0-2): every host sample, a phase
//!   accumulator advances by a fixed increment derived from the chip's
//!   31.25 kHz noise clock; each threshold crossing fires one state update.
//! - **External trigger** (source 3): the channel performs no autonomous
//!   clocking and is driven by the coupled frequency generator, which calls
//!   [`NoiseGenerator::trigger`] once per edge.
//!
//! The host mixing loop calls [`NoiseGenerator::tick`] once per output sample
//! and reads the output bit from it (or from [`NoiseGenerator::level`]
//! between updates). A sync hold freezes the internal clock at zero phase so
//! sibling channels can be re-aligned on a chip-wide reset.
//!
//! # Example
//!
//! ```
//! use saarx::core::noise::NoiseGenerator;
//!
//! let mut noise = NoiseGenerator::new();
//! noise.set_source(1); // 15.625 kHz noise clock
//!
//! for _ in 0..1024 {
//!     let bit = noise.tick();
//!     assert!(bit <= 1);
//! }
//! ```

pub mod algorithm;
pub mod phase;

#[cfg(test)]
mod tests;

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

pub use algorithm::NoiseAlgorithm;
pub use phase::{PhaseAccumulator, SampleRate};

/// Base per-tick phase increment: the chip's 31.25 kHz noise clock in 24.8
/// fixed point (31250 << 8)
pub const ADD_BASE: u32 = 31_250 << 8;

/// Power-on PRNG seed
pub const DEFAULT_SEED: u32 = 0x1111_1111;

/// Clock source for the noise channel
///
/// Selected by the low two bits of the channel's noise-source register.
/// Sources 0-2 divide the 31.25 kHz noise clock; source 3 hands clocking to
/// the coupled frequency generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum ClockSource {
    /// 31.25 kHz noise clock (selector 0)
    Div1,
    /// 15.625 kHz (selector 1)
    Div2,
    /// 7.8125 kHz (selector 2)
    Div4,
    /// Clocked by the coupled frequency generator's trigger pulses (selector 3)
    External,
}

impl ClockSource {
    /// Decode a noise-source register value
    ///
    /// Only the low two bits are significant; higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => ClockSource::Div1,
            1 => ClockSource::Div2,
            2 => ClockSource::Div4,
            _ => ClockSource::External,
        }
    }

    /// Two-bit selector value for this source
    pub const fn bits(self) -> u8 {
        match self {
            ClockSource::Div1 => 0,
            ClockSource::Div2 => 1,
            ClockSource::Div4 => 2,
            ClockSource::External => 3,
        }
    }

    /// True iff the coupled frequency generator drives the clock
    pub const fn is_external(self) -> bool {
        matches!(self, ClockSource::External)
    }
}

/// One noise channel
///
/// A plain value with no shared state; instantiate one per emulated channel.
/// Single-threaded, allocation-free and infallible on the per-sample path.
#[derive(Debug, Clone)]
pub struct NoiseGenerator {
    /// PRNG state; sole source of the output bit
    state: u32,

    /// Last-computed output bit, cached between state updates
    level: u8,

    /// While held, internal clocking is suspended at zero phase
    sync: bool,

    /// Fractional-phase counter for internal clocking
    phase: PhaseAccumulator,

    /// Per-tick phase increment; unused while externally clocked
    increment: u32,

    /// Current clock source
    source: ClockSource,

    /// State-update strategy, fixed at construction
    algorithm: NoiseAlgorithm,
}

impl NoiseGenerator {
    /// Create a generator with the chip's power-on defaults
    ///
    /// Seed 0x1111_1111, 11025 Hz tier, source 0, arithmetic-recurrence
    /// algorithm. The defaults make `tick`/`trigger` safe before any explicit
    /// configuration, but hosts are expected to set the real sample rate
    /// before use.
    pub fn new() -> Self {
        Self::with_algorithm(NoiseAlgorithm::default())
    }

    /// Create a generator with an explicit seed
    pub fn with_seed(seed: u32) -> Self {
        let mut noise = Self::new();
        noise.state = seed;
        noise
    }

    /// Create a generator using the given state-update algorithm
    ///
    /// The algorithm is fixed for the generator's lifetime; both variants
    /// satisfy the same `tick`/`level` contract.
    pub fn with_algorithm(algorithm: NoiseAlgorithm) -> Self {
        Self {
            state: DEFAULT_SEED,
            level: 0,
            sync: false,
            phase: PhaseAccumulator::default(),
            increment: ADD_BASE,
            source: ClockSource::Div1,
            algorithm,
        }
    }

    /// Change the host sample-rate tier
    ///
    /// Phase-continuous: the accumulated phase is rescaled to the new tier
    /// instead of being reset, so a live rate change does not disturb the
    /// firing schedule.
    pub fn set_sample_rate(&mut self, rate: SampleRate) {
        self.phase.set_rate(rate);
        log::debug!("Noise: sample rate = {} Hz", rate.hz());
    }

    /// Select the clock source from a noise-source register value
    ///
    /// The value is masked to its low two bits. Selectors 0-2 pick internal
    /// clocking with `increment = ADD_BASE >> selector`; selector 3 hands
    /// clocking to [`trigger`](Self::trigger).
    pub fn set_source(&mut self, bits: u8) {
        self.source = ClockSource::from_bits(bits);
        if !self.source.is_external() {
            self.increment = ADD_BASE >> self.source.bits();
        }
        log::debug!("Noise: source = {:?}", self.source);
    }

    /// Advance by one host audio sample
    ///
    /// No-op while the sync hold is active or the channel is externally
    /// clocked. Otherwise the phase accumulator advances and every threshold
    /// crossing fires one state update; at low sample-rate tiers a single
    /// tick can fire several.
    ///
    /// # Returns
    ///
    /// The output bit (0 or 1) after all updates for this tick
    #[inline(always)]
    pub fn tick(&mut self) -> u8 {
        if !self.sync && !self.source.is_external() {
            let fired = self.phase.advance(self.increment);
            for _ in 0..fired {
                self.update_state();
            }
        }
        self.level
    }

    /// Fire one state update from the coupled frequency generator
    ///
    /// Called once per edge event of the coupled oscillator. Does nothing
    /// unless the channel is externally clocked (sources 0-2 ignore stray
    /// trigger pulses). Sync is not checked here: a held chip generates no
    /// oscillator edges in the first place.
    pub fn trigger(&mut self) {
        if self.source.is_external() {
            self.update_state();
        }
    }

    /// Enter or leave the sync hold
    ///
    /// Entering the hold resets the phase counter to zero, discarding any
    /// accumulated sub-threshold phase; this is what re-aligns the channel
    /// with a sibling's reset event.
    pub fn set_sync(&mut self, active: bool) {
        if active {
            self.phase.reset();
        }
        self.sync = active;
    }

    /// Overwrite the PRNG state
    ///
    /// The cached output bit is unaffected until the next state update.
    pub fn seed(&mut self, seed: u32) {
        self.state = seed;
    }

    /// Current output bit (0 or 1)
    ///
    /// Pure read; safe to call any number of times between updates.
    #[inline(always)]
    pub fn level(&self) -> u8 {
        self.level
    }

    /// Phase accumulator state (for hosts and diagnostics)
    pub fn phase(&self) -> &PhaseAccumulator {
        &self.phase
    }

    /// Current clock source
    pub fn source(&self) -> ClockSource {
        self.source
    }

    /// Active state-update algorithm
    pub fn algorithm(&self) -> NoiseAlgorithm {
        self.algorithm
    }

    /// Capture the complete channel state
    pub fn snapshot(&self) -> NoiseState {
        NoiseState {
            state: self.state,
            level: self.level,
            sync: self.sync,
            phase: self.phase,
            increment: self.increment,
            source: self.source,
            algorithm: self.algorithm,
        }
    }

    /// Restore a previously captured channel state
    pub fn restore(&mut self, snapshot: &NoiseState) {
        self.state = snapshot.state;
        self.level = snapshot.level;
        self.sync = snapshot.sync;
        self.phase = snapshot.phase;
        self.increment = snapshot.increment;
        self.source = snapshot.source;
        self.algorithm = snapshot.algorithm;
    }

    /// Perform one state update and publish the new output bit
    fn update_state(&mut self) {
        self.level = self.algorithm.step(&mut self.state);
    }
}

impl Default for NoiseGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of one noise channel
///
/// Captured by [`NoiseGenerator::snapshot`] and embedded in save states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub struct NoiseState {
    /// PRNG state
    pub state: u32,

    /// Cached output bit
    pub level: u8,

    /// Sync hold flag
    pub sync: bool,

    /// Phase accumulator (counter + tier)
    pub phase: PhaseAccumulator,

    /// Per-tick phase increment
    pub increment: u32,

    /// Clock source
    pub source: ClockSource,

    /// State-update algorithm
    pub algorithm: NoiseAlgorithm,
}
