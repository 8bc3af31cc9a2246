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

//! Property-based tests for search strategies.

use proptest::prelude::*;
use roster_algo::{BinarySearch, LinearSearch, SearchStrategy};
use std::cmp::Ordering;

fn asc(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a reported index always points at an equal element.
    #[test]
    fn prop_found_index_matches_target(
        mut data in prop::collection::vec(-500_i32..500, 0..200),
        target in -500_i32..500
    ) {
        data.sort();

        for outcome in [
            LinearSearch.search(&data, &target, &asc),
            BinarySearch.search(&data, &target, &asc),
        ] {
            if let Some(i) = outcome.index {
                prop_assert_eq!(data[i], target);
            }
        }
    }

    /// Property: on sorted input both strategies agree on presence.
    #[test]
    fn prop_strategies_agree_on_presence(
        mut data in prop::collection::vec(-50_i32..50, 0..100),
        target in -60_i32..60
    ) {
        data.sort();
        let present = data.contains(&target);

        prop_assert_eq!(LinearSearch.search(&data, &target, &asc).found(), present);
        prop_assert_eq!(BinarySearch.search(&data, &target, &asc).found(), present);
    }

    /// Property: binary search never exceeds floor(log2 n) + 1 comparisons.
    #[test]
    fn prop_binary_search_is_logarithmic(
        mut data in prop::collection::vec(any::<i32>(), 1..2000),
        target in any::<i32>()
    ) {
        data.sort();
        let bound = (usize::BITS - data.len().leading_zeros()) as u64;
        let outcome = BinarySearch.search(&data, &target, &asc);

        prop_assert!(outcome.metrics.comparisons <= bound);
    }

    /// Property: linear search comparisons equal index + 1, or n when absent.
    #[test]
    fn prop_linear_search_cost(
        data in prop::collection::vec(0_i32..20, 0..100),
        target in 0_i32..25
    ) {
        let outcome = LinearSearch.search(&data, &target, &asc);
        let expected = outcome.index.map_or(data.len(), |i| i + 1) as u64;

        prop_assert_eq!(outcome.metrics.comparisons, expected);
    }
}
