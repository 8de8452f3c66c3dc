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

//! SAA1099 noise generator core library
//!
//! This library provides the noise channel of a Philips SAA1099 sound chip
//! emulator: a period-correct pseudo-random bit source clocked either from an
//! internal frequency divider or from an external frequency generator's
//! trigger pulses. It is intended to be embedded in a full multi-channel chip
//! core that adds tone generators, envelopes and mixing on top.
//!
//! # Example
//!
//! ```
//! use saarx::core::noise::phase::SampleRate;
//! use saarx::core::noise::NoiseGenerator;
//!
//! let mut noise = NoiseGenerator::new();
//! noise.set_sample_rate(SampleRate::Hz44100);
//! noise.set_source(0);
//!
//! // One output bit per host audio sample
//! let bit = noise.tick();
//! assert!(bit <= 1);
//! ```

pub mod core;
