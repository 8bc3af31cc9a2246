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

//! Instrumented sorting and searching strategies.
//!
//! Every algorithm in this crate sits behind one of two object-safe traits,
//! [`SortStrategy`] and [`SearchStrategy`], and reports the same set of
//! counters for each call: comparisons performed, elements moved (sorts
//! only) and elapsed wall-clock time. Counters are returned by value, so a
//! strategy carries no state between calls and can be shared freely.
//!
//! # Strategies
//!
//! | Strategy         | Time                        | Space          | Stable |
//! |------------------|-----------------------------|----------------|--------|
//! | [`BubbleSort`]   | O(n²) avg/worst, O(n) best  | O(1)           | yes    |
//! | [`QuickSort`]    | O(n log n) avg, O(n²) worst | O(log n)       | no     |
//! | [`MergeSort`]    | O(n log n) all cases        | O(n)           | yes    |
//! | [`LinearSearch`] | O(n)                        | O(1)           | -      |
//! | [`BinarySearch`] | O(log n)                    | O(1) iterative | -      |
//!
//! # Examples
//!
//! ```
//! use roster_algo::{BinarySearch, QuickSort, SearchStrategy, SortStrategy};
//!
//! let mut data = vec![5, 3, 8, 1];
//! let metrics = QuickSort.sort(&mut data, &|a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(data, vec![1, 3, 5, 8]);
//! assert!(metrics.comparisons > 0);
//!
//! let outcome = BinarySearch.search(&data, &8, &|a: &i32, b: &i32| a.cmp(b));
//! assert_eq!(outcome.index, Some(3));
//! ```

mod error;
mod info;
pub mod metrics;
pub mod search;
pub mod sort;

pub use error::{AlgorithmError, Result};
pub use info::AlgorithmInfo;
pub use metrics::{SearchMetrics, SortMetrics};
pub use search::{
    BinarySearch, LinearSearch, SearchAlgorithm, SearchOutcome, SearchStrategy, NOT_FOUND,
};
pub use sort::{BubbleSort, MergeSort, QuickSort, SortAlgorithm, SortStrategy};

use std::cmp::Ordering;

/// A caller-supplied total order over `T`.
///
/// Strategies borrow the comparator for the duration of one call and never
/// store it.
pub type Comparator<'a, T> = dyn Fn(&T, &T) -> Ordering + 'a;

/// Returns `true` if `data` is non-decreasing under `cmp`.
pub fn is_sorted_by<T>(data: &[T], cmp: &Comparator<'_, T>) -> bool {
    data.windows(2).all(|w| cmp(&w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_by() {
        let asc = |a: &i32, b: &i32| a.cmp(b);
        assert!(is_sorted_by(&[1, 2, 2, 3], &asc));
        assert!(is_sorted_by::<i32>(&[], &asc));
        assert!(!is_sorted_by(&[2, 1], &asc));
    }
}
