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

//! Sort strategies.
//!
//! All sorts work in place on a mutable slice and order it non-decreasingly
//! under the supplied comparator. [`BubbleSort`] and [`MergeSort`] are
//! stable; [`QuickSort`] may reorder equal elements.

mod bubble;
mod merge;
mod quick;

pub use bubble::BubbleSort;
pub use merge::MergeSort;
pub use quick::QuickSort;

use std::fmt;
use std::str::FromStr;

use crate::{AlgorithmError, AlgorithmInfo, Comparator, SortMetrics};

/// An interchangeable in-place sorting algorithm.
///
/// Implementations must leave `data` non-decreasing under `cmp` and must
/// return counters that describe this call only.
pub trait SortStrategy<T> {
    /// Static descriptor of the algorithm.
    fn info(&self) -> AlgorithmInfo;

    /// Sorts `data` in place and returns the counters of this call.
    fn sort(&self, data: &mut [T], cmp: &Comparator<'_, T>) -> SortMetrics;

    /// Display name of the algorithm.
    fn name(&self) -> &'static str {
        self.info().name
    }
}

/// Sort algorithm selector.
///
/// Dispatches to the matching strategy, so it can be used wherever a
/// [`SortStrategy`] is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SortAlgorithm {
    /// [`BubbleSort`]
    Bubble,
    /// [`QuickSort`]
    Quick,
    /// [`MergeSort`]
    Merge,
}

impl SortAlgorithm {
    /// Every sort algorithm, in menu order.
    pub const ALL: [SortAlgorithm; 3] = [Self::Bubble, Self::Quick, Self::Merge];

    const NAMES: &'static str = "bubble, quick, merge";

    /// Static descriptor of the selected algorithm.
    pub fn info(self) -> AlgorithmInfo {
        match self {
            Self::Bubble => BubbleSort::INFO,
            Self::Quick => QuickSort::INFO,
            Self::Merge => MergeSort::INFO,
        }
    }

    /// Short lowercase key used on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Quick => "quick",
            Self::Merge => "merge",
        }
    }
}

impl<T: Clone> SortStrategy<T> for SortAlgorithm {
    fn info(&self) -> AlgorithmInfo {
        SortAlgorithm::info(*self)
    }

    fn sort(&self, data: &mut [T], cmp: &Comparator<'_, T>) -> SortMetrics {
        match self {
            Self::Bubble => BubbleSort.sort(data, cmp),
            Self::Quick => QuickSort.sort(data, cmp),
            Self::Merge => MergeSort.sort(data, cmp),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Self::info(*self).name)
    }
}

impl FromStr for SortAlgorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubble-sort" | "bubble_sort" => Ok(Self::Bubble),
            "quick" | "quick-sort" | "quick_sort" | "quicksort" => Ok(Self::Quick),
            "merge" | "merge-sort" | "merge_sort" | "mergesort" => Ok(Self::Merge),
            _ => Err(AlgorithmError::UnknownAlgorithm {
                kind: "sort",
                name: s.to_string(),
                expected: Self::NAMES,
            }),
        }
    }
}
