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

//! Strategy comparisons over the loaded students

use roster_algo::{SearchAlgorithm, SearchStrategy, SortAlgorithm, SortStrategy};
use roster_bench::BenchmarkRunner;
use roster_core::{SortField, SortOrder, Student, StudentService};

use crate::error::Result;
use crate::render;

fn sort_strategies() -> Vec<&'static dyn SortStrategy<Student>> {
    vec![
        &SortAlgorithm::Bubble,
        &SortAlgorithm::Quick,
        &SortAlgorithm::Merge,
    ]
}

fn search_strategies() -> Vec<&'static dyn SearchStrategy<Student>> {
    vec![&SearchAlgorithm::Linear, &SearchAlgorithm::Binary]
}

/// Run every sort strategy and print the report. With `repeat`, also print
/// timing statistics over that many runs per strategy.
pub fn compare_sorts(
    service: StudentService,
    field: SortField,
    order: SortOrder,
    repeat: Option<usize>,
) -> Result<()> {
    let strategies = sort_strategies();
    let report = service.compare_sorts(field, order, &strategies)?;

    render::heading(&format!(
        "Sorting {} students by {} ({})",
        report.size, field, order
    ));
    render::summary(&report.summary);
    render::heading("Detailed breakdown");
    render::breakdown(&report.breakdown);
    render::recommendation(&report.recommendation);

    if let Some(repeat) = repeat {
        let config = service.runner().config().clone().with_repeat(repeat);
        let service = service.with_runner(BenchmarkRunner::new(config)?);
        let runs = service.repeat_sorts(field, order, &strategies)?;

        render::heading(&format!("Timing over {} runs", repeat));
        render::repeated_runs(&runs);
    }
    Ok(())
}

/// Run every search strategy for `id` and print the report.
///
/// With `unsorted`, the students are searched in mark order and the data is
/// declared unsorted, so the report always advises linear search.
pub fn compare_searches(service: &StudentService, id: &str, unsorted: bool) -> Result<()> {
    let arrangement = if unsorted { SortField::Mark } else { SortField::Id };
    if service.find(id)?.is_none() {
        render::warning(&format!(
            "Student {} not found; comparing the miss instead",
            id.trim()
        ));
    }

    let report =
        service.compare_searches(id, arrangement, Some(!unsorted), &search_strategies())?;

    render::heading(&format!(
        "Searching {} students for {} ({})",
        report.size,
        id.trim(),
        if report.sorted { "sorted by id" } else { "unsorted" }
    ));
    render::summary(&report.summary);
    render::heading("Detailed breakdown");
    render::breakdown(&report.breakdown);
    render::recommendation(&report.recommendation);
    Ok(())
}
