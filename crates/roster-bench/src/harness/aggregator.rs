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

//! Summaries over repeated runs.
//!
//! [`compute_statistics`] describes the timing spread of one strategy's
//! trials. [`aggregate_results`] ranks strategies against each other by
//! their mean time.

use crate::core::Measurement;
use crate::harness::runner::RepeatedRun;
use std::time::Duration;

/// Ranking of the strategies in one repeated comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AggregatedResults {
    /// Number of strategies ranked.
    pub strategies: usize,
    /// Time spent across every trial of every strategy.
    pub total_time: Duration,
    /// Strategy with the lowest mean; ties go to the earliest.
    pub fastest: Option<&'static str>,
    /// Strategy with the highest mean; ties go to the latest.
    pub slowest: Option<&'static str>,
}

/// Timing spread of repeated trials.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    pub mean: Duration,
    /// Population standard deviation.
    pub std_dev: Duration,
    pub min: Duration,
    pub max: Duration,
    /// Upper median for an even number of trials.
    pub median: Duration,
    pub count: usize,
}

/// Ranks repeated runs by mean time.
pub fn aggregate_results(runs: &[RepeatedRun]) -> AggregatedResults {
    AggregatedResults {
        strategies: runs.len(),
        total_time: runs
            .iter()
            .flat_map(|run| run.trials.iter().map(|m| m.elapsed))
            .sum(),
        fastest: runs
            .iter()
            .min_by_key(|run| run.statistics.mean)
            .map(|run| run.name),
        slowest: runs
            .iter()
            .max_by_key(|run| run.statistics.mean)
            .map(|run| run.name),
    }
}

/// Timing spread over `trials`; all zero when there are none.
pub fn compute_statistics(trials: &[Measurement]) -> Statistics {
    let mut durations: Vec<Duration> = trials.iter().map(|m| m.elapsed).collect();
    durations.sort();
    let (Some(&min), Some(&max)) = (durations.first(), durations.last()) else {
        return Statistics::default();
    };

    let count = durations.len();
    let mean = durations.iter().sum::<Duration>() / count as u32;
    let mean_nanos = Measurement::new(mean).as_nanos() as f64;
    let variance = trials
        .iter()
        .map(|m| (m.as_nanos() as f64 - mean_nanos).powi(2))
        .sum::<f64>()
        / count as f64;

    Statistics {
        mean,
        std_dev: Duration::from_nanos(variance.sqrt() as u64),
        min,
        max,
        median: durations[count / 2],
        count,
    }
}
