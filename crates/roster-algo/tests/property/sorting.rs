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

//! Property-based tests for sort strategies.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use roster_algo::{is_sorted_by, SortAlgorithm, SortStrategy};
use std::cmp::Ordering;

fn asc(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    /// Property: every sort produces the same result as the standard library.
    #[test]
    fn prop_sort_matches_std(data in prop::collection::vec(-1000_i32..1000, 0..200)) {
        let mut expected = data.clone();
        expected.sort();

        for algorithm in SortAlgorithm::ALL {
            let mut actual = data.clone();
            algorithm.sort(&mut actual, &asc);
            prop_assert_eq!(&actual, &expected, "{} disagrees with std", algorithm);
        }
    }

    /// Property: a descending comparator yields a non-increasing result.
    #[test]
    fn prop_sort_respects_comparator(data in prop::collection::vec(any::<i16>(), 0..100)) {
        let desc = |a: &i16, b: &i16| b.cmp(a);

        for algorithm in SortAlgorithm::ALL {
            let mut actual = data.clone();
            algorithm.sort(&mut actual, &desc);
            prop_assert!(is_sorted_by(&actual, &desc));
        }
    }

    /// Property: stable sorts keep equal keys in input order.
    #[test]
    fn prop_stable_sorts_are_stable(keys in prop::collection::vec(0_u8..5, 0..120)) {
        let data: Vec<(u8, usize)> = keys.iter().copied().zip(0..).collect();
        let by_key = |a: &(u8, usize), b: &(u8, usize)| a.0.cmp(&b.0);

        for algorithm in SortAlgorithm::ALL.into_iter().filter(|a| SortAlgorithm::info(*a).stable) {
            let mut actual = data.clone();
            algorithm.sort(&mut actual, &by_key);
            for pair in actual.windows(2) {
                if pair[0].0 == pair[1].0 {
                    prop_assert!(pair[0].1 < pair[1].1, "{} is not stable", algorithm);
                }
            }
        }
    }

    /// Property: counters depend only on the input, never on earlier calls.
    #[test]
    fn prop_counters_are_deterministic(data in prop::collection::vec(any::<i32>(), 0..100)) {
        for algorithm in SortAlgorithm::ALL {
            let mut first = data.clone();
            let a = algorithm.sort(&mut first, &asc);
            let mut second = data.clone();
            let b = algorithm.sort(&mut second, &asc);

            prop_assert_eq!(a.comparisons, b.comparisons);
            prop_assert_eq!(a.moves, b.moves);
        }
    }

    /// Property: bubble sort on sorted input does one pass and no swaps.
    #[test]
    fn prop_bubble_sorted_input_is_linear(mut data in prop::collection::vec(any::<i32>(), 1..200)) {
        data.sort();
        let n = data.len() as u64;
        let metrics = SortAlgorithm::Bubble.sort(&mut data, &asc);

        prop_assert_eq!(metrics.comparisons, n - 1);
        prop_assert_eq!(metrics.moves, 0);
    }
}

#[test]
fn test_shuffled_permutations() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let expected: Vec<i32> = (0..1_000).collect();

    for _ in 0..10 {
        let mut shuffled = expected.clone();
        shuffled.shuffle(&mut rng);

        for algorithm in SortAlgorithm::ALL {
            let mut actual = shuffled.clone();
            algorithm.sort(&mut actual, &asc);
            assert_eq!(actual, expected, "{} failed on shuffled input", algorithm);
        }
    }
}
