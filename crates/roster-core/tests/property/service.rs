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

//! Property-based tests for the student service.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use roster_algo::{SearchAlgorithm, SortAlgorithm};
use roster_core::{comparator, Dataset, SortField, SortOrder, Student, StudentService};

const NAMES: [&str; 4] = ["Alice Smith", "Bob Stone", "Carol Moss", "Dan Hill"];

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)]
}

fn arb_field() -> impl Strategy<Value = SortField> {
    prop::sample::select(SortField::ALL.to_vec())
}

/// Services with unique ids and heavily repeated names and ranks.
fn arb_service() -> impl Strategy<Value = StudentService> {
    prop::collection::vec((0..NAMES.len(), 0_u8..=100), 0..60).prop_map(|rows| {
        let mut service = StudentService::default();
        for (i, (name, tenths)) in rows.into_iter().enumerate() {
            service
                .add(&format!("S{:03}", i), NAMES[name], f64::from(tenths) / 10.0)
                .unwrap();
        }
        service
    })
}

fn ids(students: &[Student]) -> Vec<String> {
    students.iter().map(|s| s.id().to_string()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: stable strategies match the standard library's stable sort.
    #[test]
    fn prop_stable_sorts_match_std(
        service in arb_service(),
        field in arb_field(),
        order in arb_order()
    ) {
        let mut expected = service.find_all();
        let cmp = comparator(field, order);
        expected.sort_by(|a, b| cmp(a, b));

        for algorithm in [SortAlgorithm::Bubble, SortAlgorithm::Merge] {
            let sorted = service.sort(&algorithm, field, order);
            prop_assert_eq!(ids(&sorted.students), ids(&expected));
        }
    }

    /// Property: quick sort yields an ordered permutation.
    #[test]
    fn prop_quick_sort_is_ordered(
        service in arb_service(),
        field in arb_field(),
        order in arb_order()
    ) {
        let sorted = service.sort(&SortAlgorithm::Quick, field, order);
        let cmp = comparator(field, order);

        prop_assert_eq!(sorted.students.len(), service.len());
        prop_assert!(sorted
            .students
            .windows(2)
            .all(|w| cmp(&w[0], &w[1]) != std::cmp::Ordering::Greater));

        let mut got = ids(&sorted.students);
        let mut want = ids(&service.find_all());
        got.sort();
        want.sort();
        prop_assert_eq!(got, want);
    }

    /// Property: name search returns exactly the names containing the query.
    #[test]
    fn prop_name_search_filters(service in arb_service(), query in "[a-zA-Z]{1,3}") {
        let hits = service.search_by_name(&query).unwrap();
        let needle = query.to_lowercase();
        let expected = service
            .find_all()
            .into_iter()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .count();

        prop_assert_eq!(hits.len(), expected);
        prop_assert!(hits.iter().all(|s| s.name().to_lowercase().contains(&needle)));
    }
}

#[test]
fn test_every_generated_id_is_found_by_both_searches() {
    let mut students = Dataset::Generated(200).students().unwrap();
    students.shuffle(&mut StdRng::seed_from_u64(42));

    let mut service = StudentService::default();
    for student in students {
        service.add_student(student).unwrap();
    }

    for i in 1..=200 {
        let id = format!("S{:04}", i);
        for algorithm in SearchAlgorithm::ALL {
            let hit = service.search_by_id(&algorithm, &id).unwrap();
            assert_eq!(
                hit.student.as_ref().map(Student::id),
                Some(id.as_str()),
                "{} missed {}",
                algorithm,
                id
            );
        }
    }
}
