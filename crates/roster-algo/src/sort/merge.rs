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

/// Top-down merge sort.
///
/// Each merge copies its range into an auxiliary buffer and writes the
/// merged result back. Ties take the element from the left run, so the
/// sort is stable. Moves count every element written back, tails included.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl MergeSort {
    /// Static descriptor.
    pub const INFO: AlgorithmInfo = AlgorithmInfo {
        name: "Merge Sort",
        time_complexity: "O(n log n) all cases",
        space_complexity: "O(n)",
        stable: true,
        strengths: &[
            "Guaranteed O(n log n) all cases",
            "Stable (maintains order of equal elements)",
            "Predictable performance",
        ],
        weaknesses: &["Requires O(n) extra space"],
        typical_use: "When stability required, external sorting",
    };
}

impl<T: Clone> SortStrategy<T> for MergeSort {
    fn info(&self) -> AlgorithmInfo {
        Self::INFO
    }

    fn sort(&self, data: &mut [T], cmp: &Comparator<'_, T>) -> SortMetrics {
        let mut probe = Probe::start(cmp);
        merge_sort(data, &mut probe);
        probe.finish_sort()
    }
}

fn merge_sort<T: Clone>(data: &mut [T], probe: &mut Probe<'_, T>) {
    if data.len() <= 1 {
        return;
    }

    // Left run takes the extra element on odd lengths.
    let split = (data.len() + 1) / 2;
    {
        let (left, right) = data.split_at_mut(split);
        merge_sort(left, probe);
        merge_sort(right, probe);
    }
    merge(data, split, probe);
}

fn merge<T: Clone>(data: &mut [T], split: usize, probe: &mut Probe<'_, T>) {
    let buffer = data.to_vec();
    let (left, right) = buffer.split_at(split);
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        if probe.compare(&left[i], &right[j]) != Ordering::Greater {
            data[k] = left[i].clone();
            i += 1;
        } else {
            data[k] = right[j].clone();
            j += 1;
        }
        probe.record_move();
        k += 1;
    }

    for item in left[i..].iter().chain(&right[j..]) {
        data[k] = item.clone();
        probe.record_move();
        k += 1;
    }
}
