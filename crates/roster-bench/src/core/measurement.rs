// Roster - Student Records and Instrumented Algorithms
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Measurement primitives.
//!
//! Sort and search calls report different counter sets. [`Measurement`]
//! folds both into one shape so ranking and aggregation do not care which
//! kind of strategy produced it.

use roster_algo::{SearchMetrics, SortMetrics};
use std::time::Duration;

/// Counters and timing of one strategy call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Measurement {
    /// Wall-clock time of the call.
    pub elapsed: Duration,
    /// Comparator invocations.
    pub comparisons: u64,
    /// Element moves, `None` for searches.
    pub moves: Option<u64>,
}

impl Measurement {
    /// Creates a measurement with just a duration.
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    /// Returns the duration in nanoseconds, saturating at `u64::MAX`.
    pub fn as_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

impl From<SortMetrics> for Measurement {
    fn from(m: SortMetrics) -> Self {
        Self {
            elapsed: m.elapsed,
            comparisons: m.comparisons,
            moves: Some(m.moves),
        }
    }
}

impl From<SearchMetrics> for Measurement {
    fn from(m: SearchMetrics) -> Self {
        Self {
            elapsed: m.elapsed,
            comparisons: m.comparisons,
            moves: None,
        }
    }
}

/// Runs `trial` `iterations` times and collects each measurement.
///
/// Unlike a single timed loop, every trial keeps its own counters so that
/// spread can be computed afterwards.
///
/// # Example
///
/// ```
/// use roster_bench::core::measurement::{measure, Measurement};
/// use std::time::Duration;
///
/// let trials = measure(3, || Measurement::new(Duration::from_micros(5)));
/// assert_eq!(trials.len(), 3);
/// ```
pub fn measure<F>(iterations: usize, mut trial: F) -> Vec<Measurement>
where
    F: FnMut() -> Measurement,
{
    (0..iterations).map(|_| trial()).collect()
}
