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

//! Benchmark runner.
//!
//! Runs a set of strategies over one dataset and turns their counters into
//! a report. Strategies run one after another on the caller's thread.
//! Each sort gets its own copy of the dataset; searches share the caller's
//! slice since they never write to it.

use crate::core::{measure, BenchConfig, Measurement};
use crate::error::{validate_dataset_size, BenchError, Result};
use crate::harness::aggregator::{compute_statistics, Statistics};
use crate::harness::comparator::{award_highlights, Highlight, Highlights};
use crate::report::{
    format_duration, recommend_search, recommend_sort, yes_no, BreakdownEntry, BreakdownField,
    SearchReport, SearchResult, SortReport, SortResult, SummaryTable,
};
use roster_algo::{is_sorted_by, Comparator, SearchStrategy, SortStrategy};
use tracing::{debug, info, warn};

/// Summary columns of a sort comparison.
pub const SORT_COLUMNS: [&str; 6] = [
    "Algorithm",
    "Time",
    "Comparisons",
    "Swaps/Moves",
    "Time Complexity",
    "Space Complexity",
];

/// Summary columns of a search comparison.
pub const SEARCH_COLUMNS: [&str; 7] = [
    "Algorithm",
    "Found",
    "Index",
    "Time",
    "Comparisons",
    "Requires Sorted",
    "Time Complexity",
];

/// Trials of one strategy under repeated runs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RepeatedRun {
    /// Name of the strategy.
    pub name: &'static str,
    /// One measurement per trial.
    pub trials: Vec<Measurement>,
    /// Timing spread over the trials.
    pub statistics: Statistics,
}

/// Runner comparing strategies under one configuration.
#[derive(Debug, Clone, Default)]
pub struct BenchmarkRunner {
    config: BenchConfig,
}

impl BenchmarkRunner {
    /// Creates a runner, rejecting unusable configurations.
    pub fn new(config: BenchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active configuration.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Runs every sort strategy on its own copy of `data`.
    ///
    /// `data` itself is never modified.
    ///
    /// # Errors
    ///
    /// - [`BenchError::InvalidArgument`] if `strategies` is empty
    /// - [`BenchError::DatasetTooLarge`] if `data` exceeds the configured limit
    pub fn compare_sorts<T: Clone>(
        &self,
        data: &[T],
        cmp: &Comparator<'_, T>,
        strategies: &[&dyn SortStrategy<T>],
    ) -> Result<SortReport> {
        self.check_inputs(data.len(), strategies.len())?;
        info!(
            "Comparing {} sort strategies on {} elements",
            strategies.len(),
            data.len()
        );

        let results: Vec<SortResult> = strategies
            .iter()
            .map(|strategy| {
                let mut copy = data.to_vec();
                let metrics = strategy.sort(&mut copy, cmp);
                let verified = is_sorted_by(&copy, cmp);
                if !verified {
                    warn!("{} left its output unsorted", strategy.name());
                }
                debug!(
                    "{}: {} comparisons, {} moves, {:?}",
                    strategy.name(),
                    metrics.comparisons,
                    metrics.moves,
                    metrics.elapsed
                );
                SortResult {
                    info: strategy.info(),
                    measurement: metrics.into(),
                    verified,
                }
            })
            .collect();

        let measurements: Vec<Measurement> = results.iter().map(|r| r.measurement).collect();
        let highlights = award_highlights(&measurements, &vec![true; results.len()]);

        let report = SortReport {
            size: data.len(),
            summary: sort_summary(&results),
            breakdown: sort_breakdown(&results, &highlights),
            recommendation: recommend_sort(&results, data.len(), &self.config.sort_thresholds),
            results,
        };

        if let Some(winner) = &report.recommendation.winner {
            info!("Sort comparison finished, fastest: {}", winner.algorithm);
        }
        Ok(report)
    }

    /// Runs every search strategy for `target` over `data`.
    ///
    /// `declared_sorted` is the caller's word on whether `data` is sorted
    /// under `cmp`; with `None` it is detected here. It drives the
    /// recommendation, so a dataset declared unsorted only ever gets the
    /// linear-only advice. Strategies that need sorted input still run on
    /// unsorted data; their answers are reported as-is.
    ///
    /// # Errors
    ///
    /// - [`BenchError::InvalidArgument`] if `strategies` is empty
    /// - [`BenchError::DatasetTooLarge`] if `data` exceeds the configured limit
    pub fn compare_searches<T>(
        &self,
        data: &[T],
        target: &T,
        cmp: &Comparator<'_, T>,
        declared_sorted: Option<bool>,
        strategies: &[&dyn SearchStrategy<T>],
    ) -> Result<SearchReport> {
        self.check_inputs(data.len(), strategies.len())?;
        let sorted = declared_sorted.unwrap_or_else(|| is_sorted_by(data, cmp));
        info!(
            "Comparing {} search strategies on {} elements (sorted: {})",
            strategies.len(),
            data.len(),
            sorted
        );

        let results: Vec<SearchResult> = strategies
            .iter()
            .map(|strategy| {
                let outcome = strategy.search(data, target, cmp);
                debug!(
                    "{}: index {}, {} comparisons, {:?}",
                    strategy.name(),
                    outcome.index_or_sentinel(),
                    outcome.metrics.comparisons,
                    outcome.metrics.elapsed
                );
                SearchResult {
                    info: strategy.info(),
                    requires_sorted: strategy.requires_sorted(),
                    outcome,
                }
            })
            .collect();

        let measurements: Vec<Measurement> = results.iter().map(|r| r.measurement()).collect();
        let found: Vec<bool> = results.iter().map(|r| r.outcome.found()).collect();
        let highlights = award_highlights(&measurements, &found);

        Ok(SearchReport {
            size: data.len(),
            sorted,
            summary: search_summary(&results),
            breakdown: search_breakdown(&results, &highlights),
            recommendation: recommend_search(
                &results,
                data.len(),
                sorted,
                &self.config.search_thresholds,
            ),
            results,
        })
    }

    /// Runs `trial` the configured number of times.
    pub fn repeat<F>(&self, name: &'static str, trial: F) -> RepeatedRun
    where
        F: FnMut() -> Measurement,
    {
        let trials = measure(self.config.repeat, trial);
        let statistics = compute_statistics(&trials);
        debug!(
            "{}: {} trials, mean {:?}, std dev {:?}",
            name, statistics.count, statistics.mean, statistics.std_dev
        );
        RepeatedRun {
            name,
            trials,
            statistics,
        }
    }

    /// Repeats every sort strategy, each trial on a fresh copy of `data`.
    pub fn repeat_sorts<T: Clone>(
        &self,
        data: &[T],
        cmp: &Comparator<'_, T>,
        strategies: &[&dyn SortStrategy<T>],
    ) -> Result<Vec<RepeatedRun>> {
        self.check_inputs(data.len(), strategies.len())?;
        info!(
            "Repeating {} sort strategies {} times on {} elements",
            strategies.len(),
            self.config.repeat,
            data.len()
        );

        Ok(strategies
            .iter()
            .map(|strategy| {
                self.repeat(strategy.name(), || {
                    let mut copy = data.to_vec();
                    strategy.sort(&mut copy, cmp).into()
                })
            })
            .collect())
    }

    /// Repeats every search strategy for `target` over `data`.
    pub fn repeat_searches<T>(
        &self,
        data: &[T],
        target: &T,
        cmp: &Comparator<'_, T>,
        strategies: &[&dyn SearchStrategy<T>],
    ) -> Result<Vec<RepeatedRun>> {
        self.check_inputs(data.len(), strategies.len())?;

        Ok(strategies
            .iter()
            .map(|strategy| {
                self.repeat(strategy.name(), || {
                    strategy.search(data, target, cmp).metrics.into()
                })
            })
            .collect())
    }

    fn check_inputs(&self, size: usize, strategies: usize) -> Result<()> {
        if strategies == 0 {
            return Err(BenchError::invalid_argument(
                "at least one strategy is required",
            ));
        }
        validate_dataset_size(size, self.config.max_dataset_size)
    }
}

fn marked(
    value: String,
    highlight: Highlight,
    highlights: &Highlights,
    index: usize,
) -> BreakdownField {
    let label = match highlight {
        Highlight::Fastest => "Execution Time",
        Highlight::FewestComparisons => "Comparisons",
        Highlight::FewestMoves => "Swaps/Moves",
    };
    BreakdownField {
        label,
        value,
        highlight: highlights.holds(index, highlight).then_some(highlight),
    }
}

fn sort_summary(results: &[SortResult]) -> SummaryTable {
    SummaryTable {
        headers: SORT_COLUMNS.to_vec(),
        rows: results
            .iter()
            .map(|r| {
                vec![
                    r.info.name.to_string(),
                    format_duration(r.measurement.elapsed),
                    r.measurement.comparisons.to_string(),
                    r.measurement.moves.unwrap_or(0).to_string(),
                    r.info.time_complexity.to_string(),
                    r.info.space_complexity.to_string(),
                ]
            })
            .collect(),
    }
}

fn sort_breakdown(results: &[SortResult], highlights: &Highlights) -> Vec<BreakdownEntry> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| BreakdownEntry {
            algorithm: r.info.name,
            fields: vec![
                marked(
                    format_duration(r.measurement.elapsed),
                    Highlight::Fastest,
                    highlights,
                    i,
                ),
                marked(
                    r.measurement.comparisons.to_string(),
                    Highlight::FewestComparisons,
                    highlights,
                    i,
                ),
                marked(
                    r.measurement.moves.unwrap_or(0).to_string(),
                    Highlight::FewestMoves,
                    highlights,
                    i,
                ),
                BreakdownField::plain("Time Complexity", r.info.time_complexity),
                BreakdownField::plain("Space Complexity", r.info.space_complexity),
            ],
        })
        .collect()
}

fn search_summary(results: &[SearchResult]) -> SummaryTable {
    SummaryTable {
        headers: SEARCH_COLUMNS.to_vec(),
        rows: results
            .iter()
            .map(|r| {
                vec![
                    r.info.name.to_string(),
                    yes_no(r.outcome.found()).to_string(),
                    r.outcome.index_or_sentinel().to_string(),
                    format_duration(r.outcome.metrics.elapsed),
                    r.outcome.metrics.comparisons.to_string(),
                    yes_no(r.requires_sorted).to_string(),
                    r.info.time_complexity.to_string(),
                ]
            })
            .collect(),
    }
}

fn search_breakdown(results: &[SearchResult], highlights: &Highlights) -> Vec<BreakdownEntry> {
    results
        .iter()
        .enumerate()
        .map(|(i, r)| BreakdownEntry {
            algorithm: r.info.name,
            fields: vec![
                BreakdownField::plain("Found", yes_no(r.outcome.found())),
                BreakdownField::plain("Index", r.outcome.index_or_sentinel().to_string()),
                marked(
                    format_duration(r.outcome.metrics.elapsed),
                    Highlight::Fastest,
                    highlights,
                    i,
                ),
                marked(
                    r.outcome.metrics.comparisons.to_string(),
                    Highlight::FewestComparisons,
                    highlights,
                    i,
                ),
                BreakdownField::plain("Requires Sorted", yes_no(r.requires_sorted)),
                BreakdownField::plain("Time Complexity", r.info.time_complexity),
            ],
        })
        .collect()
}
