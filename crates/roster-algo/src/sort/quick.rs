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

/// Quick sort with median-of-three pivot selection and Lomuto partitioning.
///
/// Before each partition the first, middle and last elements are ordered
/// against each other so that the median ends up in the last slot, which
/// then serves as pivot. This keeps sorted and reverse-sorted input out of
/// the quadratic case.
///
/// Recursion always descends into the smaller partition and loops on the
/// larger one, bounding stack depth to `O(log n)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuickSort;

impl QuickSort {
    /// Static descriptor.
    pub const INFO: AlgorithmInfo = AlgorithmInfo {
        name: "Quick Sort",
        time_complexity: "O(n log n) avg, O(n²) worst",
        space_complexity: "O(log n)",
        stable: false,
        strengths: &[
            "Fast average performance (O(n log n))",
            "In-place with minimal extra memory",
            "Good cache performance",
        ],
        weaknesses: &["Not stable", "Worst case O(n²) (rare with good pivot)"],
        typical_use: "General purpose, large datasets",
    };
}

impl<T> SortStrategy<T> for QuickSort {
    fn info(&self) -> AlgorithmInfo {
        Self::INFO
    }

    fn sort(&self, data: &mut [T], cmp: &Comparator<'_, T>) -> SortMetrics {
        let mut probe = Probe::start(cmp);
        quick_sort(data, &mut probe);
        probe.finish_sort()
    }
}

fn quick_sort<T>(mut data: &mut [T], probe: &mut Probe<'_, T>) {
    while data.len() > 1 {
        let pivot = partition(data, probe);
        let (left, rest) = std::mem::take(&mut data).split_at_mut(pivot);
        let right = &mut rest[1..];

        if left.len() < right.len() {
            quick_sort(left, probe);
            data = right;
        } else {
            quick_sort(right, probe);
            data = left;
        }
    }
}

/// Orders first, middle and last so the median sits at the end.
///
/// Always costs three comparisons.
fn median_of_three<T>(data: &mut [T], probe: &mut Probe<'_, T>) {
    let high = data.len() - 1;
    let mid = high / 2;

    if probe.compare(&data[mid], &data[0]) == Ordering::Less {
        probe.swap(data, 0, mid);
    }
    if probe.compare(&data[high], &data[0]) == Ordering::Less {
        probe.swap(data, 0, high);
    }
    if probe.compare(&data[mid], &data[high]) == Ordering::Less {
        probe.swap(data, mid, high);
    }
}

/// Partitions `data` around its last element and returns the pivot's final index.
///
/// Every element not greater than the pivot is swapped into the growing
/// prefix, counted even when it swaps with itself.
fn partition<T>(data: &mut [T], probe: &mut Probe<'_, T>) -> usize {
    median_of_three(data, probe);

    let high = data.len() - 1;
    let mut boundary = 0;

    for j in 0..high {
        if probe.compare(&data[j], &data[high]) != Ordering::Greater {
            probe.swap(data, boundary, j);
            boundary += 1;
        }
    }

    probe.swap(data, boundary, high);
    boundary
}
