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

use std::cmp::Ordering;

use crate::metrics::Probe;
use crate::{AlgorithmInfo, Comparator, SearchOutcome, SearchStrategy};

/// Iterative binary search over sorted input.
///
/// The window is kept half-open as `[lo, hi)` and each step probes
/// `lo + (hi - lo) / 2`, which on even-sized windows is the upper of the two
/// middle elements. With duplicates, any matching index may be returned.
///
/// Unsorted input is not detected; the result is then unreliable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BinarySearch;

impl BinarySearch {
    /// Static descriptor.
    pub const INFO: AlgorithmInfo = AlgorithmInfo {
        name: "Binary Search",
        time_complexity: "O(log n)",
        space_complexity: "O(1) iterative",
        stable: false,
        strengths: &[
            "Very fast (O(log n))",
            "Efficient for large datasets",
            "Eliminates half of data each step",
        ],
        weaknesses: &["Requires sorted list", "More complex implementation"],
        typical_use: "Large sorted data, frequent searches",
    };
}

impl<T> SearchStrategy<T> for BinarySearch {
    fn info(&self) -> AlgorithmInfo {
        Self::INFO
    }

    fn requires_sorted(&self) -> bool {
        true
    }

    fn search(&self, data: &[T], target: &T, cmp: &Comparator<'_, T>) -> SearchOutcome {
        let mut probe = Probe::start(cmp);
        let (mut lo, mut hi) = (0, data.len());
        let mut index = None;

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match probe.compare(&data[mid], target) {
                Ordering::Equal => {
                    index = Some(mid);
                    break;
                }
                Ordering::Less => lo = mid + 1,
                Ordering::Greater => hi = mid,
            }
        }

        SearchOutcome {
            index,
            metrics: probe.finish_search(),
        }
    }
}
