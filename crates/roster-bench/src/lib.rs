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

//! Roster Benchmark Engine
//!
//! Runs interchangeable sort and search strategies over the same dataset and
//! turns their counters into a comparison report.
//!
//! ## Features
//!
//! - **Isolated runs**: every sort works on its own copy of the data
//! - **Reports**: summary table, highlighted breakdown and size-based advice
//! - **Repeated trials**: timing statistics across several runs
//!
//! ## Usage
//!
//! ```
//! use roster_algo::{BubbleSort, MergeSort, QuickSort, SortStrategy};
//! use roster_bench::BenchmarkRunner;
//!
//! let data = vec![5, 3, 8, 1];
//! let strategies: [&dyn SortStrategy<i32>; 3] = [&BubbleSort, &QuickSort, &MergeSort];
//!
//! let report = BenchmarkRunner::default()
//!     .compare_sorts(&data, &|a: &i32, b: &i32| a.cmp(b), &strategies)
//!     .unwrap();
//!
//! assert_eq!(report.results.len(), 3);
//! assert!(report.recommendation.winner.is_some());
//! ```
//!
//! Run the criterion benchmarks:
//! ```bash
//! cargo bench --package roster-bench
//! ```

pub mod core;
pub mod error;
pub mod harness;
pub mod report;

pub use crate::core::{BenchConfig, Measurement, SizeThresholds, DEFAULT_MAX_DATASET_SIZE};
pub use error::{validate_dataset_size, BenchError, Result};
pub use harness::{
    aggregate_results, compute_statistics, AggregatedResults, BenchmarkRunner, Highlight,
    RepeatedRun, Statistics,
};
pub use report::{
    BreakdownEntry, BreakdownField, Recommendation, SearchReport, SearchResult, SizeBucket,
    SortReport, SortResult, SummaryTable, Winner,
};
