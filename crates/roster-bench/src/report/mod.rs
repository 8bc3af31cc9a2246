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

//! Comparison reports.
//!
//! A report has three parts: a summary table, a detailed breakdown with
//! highlights and a size-based recommendation. All parts are plain data
//! (strings and numbers) so any front end can render them.

mod recommendation;
mod types;

pub use recommendation::{recommend_search, recommend_sort, Recommendation, SizeBucket, Winner};
pub use types::{
    BreakdownEntry, BreakdownField, SearchReport, SearchResult, SortReport, SortResult,
    SummaryTable,
};

use std::time::Duration;

/// Formats a duration as milliseconds with microsecond precision.
///
/// ```
/// use roster_bench::report::format_duration;
/// use std::time::Duration;
///
/// assert_eq!(format_duration(Duration::from_micros(1_250)), "1.250 ms");
/// ```
pub fn format_duration(d: Duration) -> String {
    format!("{:.3} ms", d.as_secs_f64() * 1_000.0)
}

/// Formats a yes/no flag for tables.
pub(crate) fn yes_no(flag: bool) -> &'static str {
    if flag {
        "Yes"
    } else {
        "No"
    }
}
