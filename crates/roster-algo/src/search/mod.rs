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

//! Search strategies.
//!
//! A search locates an element equal to a target under a comparator and
//! reports its index together with the counters of the call. An absent
//! target is a normal outcome, not an error.

mod binary;
mod linear;

pub use binary::BinarySearch;
pub use linear::LinearSearch;

use std::fmt;
use std::str::FromStr;

use crate::{AlgorithmError, AlgorithmInfo, Comparator, SearchMetrics};

/// Index reported by [`SearchOutcome::index_or_sentinel`] when nothing matched.
pub const NOT_FOUND: isize = -1;

/// Result of one search call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchOutcome {
    /// Position of a matching element, if any.
    pub index: Option<usize>,
    /// Counters captured during the call.
    pub metrics: SearchMetrics,
}

impl SearchOutcome {
    /// Whether the target was found.
    pub fn found(&self) -> bool {
        self.index.is_some()
    }

    /// Index as a signed integer, [`NOT_FOUND`] when absent.
    pub fn index_or_sentinel(&self) -> isize {
        self.index.map_or(NOT_FOUND, |i| i as isize)
    }
}

/// An interchangeable search algorithm.
pub trait SearchStrategy<T> {
    /// Static descriptor of the algorithm.
    fn info(&self) -> AlgorithmInfo;

    /// Whether `data` must be sorted under `cmp` for results to be valid.
    ///
    /// On unsorted input such a strategy still returns without failing, but
    /// its answer is unreliable.
    fn requires_sorted(&self) -> bool;

    /// Looks for `target` in `data` without modifying it.
    fn search(&self, data: &[T], target: &T, cmp: &Comparator<'_, T>) -> SearchOutcome;

    /// Display name of the algorithm.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

/// Search algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SearchAlgorithm {
    /// [`LinearSearch`]
    Linear,
    /// [`BinarySearch`]
    Binary,
}

impl SearchAlgorithm {
    /// Every search algorithm, in menu order.
    pub const ALL: [SearchAlgorithm; 2] = [Self::Linear, Self::Binary];

    const NAMES: &'static str = "linear, binary";

    /// Static descriptor of the selected algorithm.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Linear => LinearSearch::INFO,
            Self::Binary => BinarySearch::INFO,
        }
    }

    /// Short lowercase key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Binary => "binary",
        }
    }
}

impl<T> SearchStrategy<T> for SearchAlgorithm {
    fn info(&self) -> AlgorithmInfo {
        SearchAlgorithm::info(*self)
    }

    fn requires_sorted(&self) -> bool {
        matches!(self, Self::Binary)
    }

    fn search(&self, data: &[T], target: &T, cmp: &Comparator<'_, T>) -> SearchOutcome {
        match self {
            Self::Linear => LinearSearch.search(data, target, cmp),
            Self::Binary => BinarySearch.search(data, target, cmp),
        }
    }
}

impl fmt::Display for SearchAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::info(*self).name)
    }
}

impl FromStr for SearchAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "linear" | "linear-search" | "linear_search" => Ok(Self::Linear),
            "binary" | "binary-search" | "binary_search" => Ok(Self::Binary),
            _ => Err(AlgorithmError::UnknownAlgorithm {
                kind: "search",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
