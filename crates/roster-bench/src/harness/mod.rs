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

//! Benchmark harness.
//!
//! # Modules
//!
//! - `runner`: strategy execution and report assembly
//! - `comparator`: highlight awarding
//! - `aggregator`: result aggregation and statistics

pub mod aggregator;
pub mod comparator;
pub mod runner;

pub use aggregator::{aggregate_results, compute_statistics, AggregatedResults, Statistics};
pub use comparator::{award_highlights, Highlight, Highlights};
pub use runner::{BenchmarkRunner, RepeatedRun, SEARCH_COLUMNS, SORT_COLUMNS};
