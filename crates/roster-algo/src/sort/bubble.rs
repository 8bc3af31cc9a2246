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
use crate::{AlgorithmInfo, Comparator, SortMetrics, SortStrategy};

/// Bubble sort with early exit.
///
/// Repeatedly walks the unsorted prefix swapping adjacent out-of-order
/// pairs. A pass without swaps proves the slice sorted and ends the run, so
/// sorted input costs a single pass of `n - 1` comparisons.
///
/// Only strictly greater pairs are swapped, which keeps the sort stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl BubbleSort {
    /// Static descriptor.
    pub const INFO: AlgorithmInfo = AlgorithmInfo {
        name: "Bubble Sort",
        time_complexity: "O(n²) avg/worst, O(n) best",
        space_complexity: "O(1)",
        stable: true,
        strengths: &[
            "Simple to understand and implement",
            "Stable (maintains order of equal elements)",
            "In-place (O(1) space)",
        ],
        weaknesses: &["Slow for large datasets (O(n²))"],
        typical_use: "Educational purposes, small datasets",
    };
}

impl<T> SortStrategy<T> for BubbleSort {
    fn info(&self) -> AlgorithmInfo {
        Self::INFO
    }

    fn sort(&self, data: &mut [T], cmp: &Comparator<'_, T>) -> SortMetrics {
        let mut probe = Probe::start(cmp);
        let n = data.len();

        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;

            for j in 0..n - pass - 1 {
                if probe.compare(&data[j], &data[j + 1]) == Ordering::Greater {
                    probe.swap(data, j, j + 1);
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }

        probe.finish_sort()
    }
}
