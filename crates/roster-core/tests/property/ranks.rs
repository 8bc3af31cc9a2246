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

//! Property-based tests for rank bands.

use proptest::prelude::*;
use roster_core::{Rank, RosterError, Student};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    /// Property: a valid mark falls inside the band of its rank.
    #[test]
    fn prop_mark_inside_its_band(mark in 0.0_f64..=10.0) {
        let rank = Rank::from_mark(mark).unwrap();
        prop_assert!(mark >= rank.min_mark());
        if rank == Rank::Excellent {
            prop_assert!(mark <= rank.max_mark());
        } else {
            prop_assert!(mark < rank.max_mark());
        }
    }

    /// Property: a higher mark never gets a lower rank.
    #[test]
    fn prop_rank_is_monotonic(a in 0.0_f64..=10.0, b in 0.0_f64..=10.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(Rank::from_mark(low).unwrap() <= Rank::from_mark(high).unwrap());
    }

    /// Property: marks outside the range are rejected everywhere.
    #[test]
    fn prop_out_of_range_rejected(mark in prop_oneof![-1e6_f64..-1e-9, 10.000_001_f64..1e6]) {
        let rejected = matches!(Rank::from_mark(mark), Err(RosterError::MarkOutOfRange { .. }));
        prop_assert!(rejected);
        prop_assert!(Student::new("S1", "Someone", mark).is_err());
    }

    /// Property: changing a mark always recomputes the rank.
    #[test]
    fn prop_set_mark_keeps_rank_in_sync(first in 0.0_f64..=10.0, second in 0.0_f64..=10.0) {
        let mut student = Student::new("S1", "Someone", first).unwrap();
        student.set_mark(second).unwrap();
        prop_assert_eq!(student.rank(), Rank::from_mark(second).unwrap());
    }
}
