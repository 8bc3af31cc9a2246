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

//! Per-call performance counters.
//!
//! Each strategy call builds a fresh counter set, fills it while running and
//! hands it back by value. Nothing is kept on the strategy, so counters from
//! two calls can never mix.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use crate::Comparator;

/// Counters captured from one sort call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortMetrics {
    /// Comparator invocations.
    pub comparisons: u64,
    /// Swaps (in-place sorts) or element writes (merge sort).
    pub moves: u64,
    /// Wall-clock time spent inside the algorithm.
    pub elapsed: Duration,
}

/// Counters captured from one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchMetrics {
    /// Comparator invocations.
    pub comparisons: u64,
    /// Wall-clock time spent inside the algorithm.
    pub elapsed: Duration,
}

/// Counting wrapper around a comparator, used inside one call.
pub(crate) struct Probe<'c, T> {
    cmp: &'c Comparator<'c, T>,
    pub(crate) comparisons: u64,
    pub(crate) moves: u64,
    started: Instant,
}

impl<'c, T> Probe<'c, T> {
    pub(crate) fn start(cmp: &'c Comparator<'c, T>) -> Self {
        Self {
            cmp,
            comparisons: 0,
            moves: 0,
            started: Instant::now(),
        }
    }

    #[inline]
    pub(crate) fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        (self.cmp)(a, b)
    }

    #[inline]
    pub(crate) fn swap(&mut self, data: &mut [T], i: usize, j: usize) {
        data.swap(i, j);
        self.moves += 1;
    }

    /// Counts one element write that is not a swap.
    #[inline]
    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn finish_sort(self) -> SortMetrics {
        SortMetrics {
            comparisons: self.comparisons,
            moves: self.moves,
            elapsed: self.started.elapsed(),
        }
    }

    pub(crate) fn finish_search(self) -> SearchMetrics {
        SearchMetrics {
            comparisons: self.comparisons,
            elapsed: self.started.elapsed(),
        }
    }
}
