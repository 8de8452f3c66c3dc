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

/// Core error types
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Main error type for the noise core
///
/// The per-sample path (`tick`/`trigger`/`level`) never fails; errors only
/// occur at the configuration and persistence boundaries.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unsupported sample rate: {0} Hz (expected 44100, 22050 or 11025)")]
    UnsupportedSampleRate(u32),

    #[error("Unknown noise algorithm: {0:?} (expected \"lcg\" or \"shift-register\")")]
    UnknownAlgorithm(String),

    #[error("Config parse error: {0}")]
    Parse(String),

    #[error("Save state version mismatch: expected {expected}, got {got}")]
    SaveStateVersion { expected: u32, got: u32 },

    #[error("Save state encode error: {0}")]
    SaveStateEncode(String),

    #[error("Save state decode error: {0}")]
    SaveStateDecode(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
