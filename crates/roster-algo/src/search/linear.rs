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

/// Front-to-back scan returning the first match.
///
/// Works on any ordering of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSearch;

impl LinearSearch {
    /// Static descriptor.
    pub const INFO: AlgorithmInfo = AlgorithmInfo {
        name: "Linear Search",
        time_complexity: "O(n)",
        space_complexity: "O(1)",
        stable: false,
        strengths: &[
            "Simple to understand and implement",
            "Works on unsorted lists",
            "No preprocessing required",
        ],
        weaknesses: &[
            "Slow for large datasets (O(n))",
            "Checks every element in worst case",
        ],
        typical_use: "Small/unsorted data, one-time searches",
    };
}

impl<T> SearchStrategy<T> for LinearSearch {
    fn info(&self) -> AlgorithmInfo {
        Self::INFO
    }

    fn requires_sorted(&self) -> bool {
        false
    }

    fn search(&self, data: &[T], target: &T, cmp: &Comparator<'_, T>) -> SearchOutcome {
        let mut probe = Probe::start(cmp);
        let index = data
            .iter()
            .position(|item| probe.compare(item, target) == Ordering::Equal);

        SearchOutcome {
            index,
            metrics: probe.finish_search(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asc(a: &i32, b: &i32) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn test_found_at_end_of_unsorted() {
        let outcome = LinearSearch.search(&[4, 2, 9, 7], &7, &asc);
        assert_eq!(outcome.index, Some(3));
        assert_eq!(outcome.metrics.comparisons, 4);
    }

    #[test]
    fn test_first_match_wins() {
        let outcome = LinearSearch.search(&[1, 5, 5, 5], &5, &asc);
        assert_eq!(outcome.index, Some(1));
        assert_eq!(outcome.metrics.comparisons, 2);
    }

    #[test]
    fn test_missing_scans_everything() {
        let outcome = LinearSearch.search(&[1, 3, 5], &4, &asc);
        assert_eq!(outcome.index, None);
        assert_eq!(outcome.index_or_sentinel(), -1);
        assert_eq!(outcome.metrics.comparisons, 3);
    }

    #[test]
    fn test_empty() {
        let outcome = LinearSearch.search(&[], &1, &asc);
        assert_eq!(outcome.index, None);
        assert_eq!(outcome.metrics.comparisons, 0);
    }
}
