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

//! Noise channel tests
//!
//! This module organizes noise tests into logical categories:
//! - `basic`: Construction, defaults, seeding, selector decoding
//! - `timing`: Phase accumulator firing, catch-up loop, rate rescale
//! - `algorithm`: Reference vectors for both state-update routines
//! - `sync`: Sync hold and external-trigger clocking

mod algorithm;
