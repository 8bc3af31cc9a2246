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

//! Single-strategy runs: sort and search

use roster_algo::{SearchAlgorithm, SortAlgorithm};
use roster_bench::report::format_duration;
use roster_core::{SortField, SortOrder, StudentService};

use crate::error::Result;
use crate::render;

/// Sort the students with `algorithm` and print them with the run counters.
pub fn sort(
    service: &StudentService,
    field: SortField,
    order: SortOrder,
    algorithm: SortAlgorithm,
) -> Result<()> {
    let sorted = service.sort(&algorithm, field, order);

    render::heading(&format!(
        "Students by {} ({}) using {}",
        field, order, algorithm
    ));
    render::students(&sorted.students);
    println!();
    println!(
        "{} comparisons, {} moves, {}",
        sorted.metrics.comparisons,
        sorted.metrics.moves,
        format_duration(sorted.metrics.elapsed)
    );
    Ok(())
}

/// Look for `id` with `algorithm` and print the outcome.
pub fn search(service: &StudentService, id: &str, algorithm: SearchAlgorithm) -> Result<()> {
    let hit = service.search_by_id(&algorithm, id)?;

    render::heading(&format!("{} for {}", algorithm, id.trim()));
    match &hit.student {
        Some(student) => {
            render::success(&format!("Found at index {}", hit.outcome.index_or_sentinel()));
            render::students(std::slice::from_ref(student));
        }
        None => render::warning(&format!(
            "Not found (index {})",
            hit.outcome.index_or_sentinel()
        )),
    }

    println!();
    match hit.arrangement {
        Some(field) => println!("Searched {} students ordered by {}", service.len(), field),
        None => println!("Searched {} students in stored order", service.len()),
    }
    println!(
        "{} comparisons, {}",
        hit.outcome.metrics.comparisons,
        format_duration(hit.outcome.metrics.elapsed)
    );
    Ok(())
}
