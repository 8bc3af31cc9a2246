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

//! Centralized benchmark configuration.
//!
//! Holds the size buckets used by recommendations, the largest dataset the
//! engine accepts and the number of trials for repeated runs.

use crate::error::{BenchError, Result};
use crate::report::SizeBucket;

/// Largest dataset accepted unless configured otherwise.
pub const DEFAULT_MAX_DATASET_SIZE: usize = 100_000;

/// Default number of trials for repeated runs.
pub const DEFAULT_REPEAT: usize = 5;

/// Boundaries between small, medium and large datasets.
///
/// A size below `small_below` is small, a size at or above `large_from` is
/// large, everything in between is medium.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SizeThresholds {
    /// Exclusive upper bound of the small bucket.
    pub small_below: usize,
    /// Inclusive lower bound of the large bucket.
    pub large_from: usize,
}

impl SizeThresholds {
    /// Sort recommendation buckets: `< 50`, `50..1000`, `>= 1000`.
    pub const SORT: SizeThresholds = SizeThresholds {
        small_below: 50,
        large_from: 1_000,
    };

    /// Search recommendation buckets: `< 100`, `100..1000`, `>= 1000`.
    pub const SEARCH: SizeThresholds = SizeThresholds {
        small_below: 100,
        large_from: 1_000,
    };

    /// Classifies a dataset size.
    pub fn bucket(&self, size: usize) -> SizeBucket {
        if size < self.small_below {
            SizeBucket::Small
        } else if size < self.large_from {
            SizeBucket::Medium
        } else {
            SizeBucket::Large
        }
    }
}

/// Benchmark configuration.
///
/// # Example
///
/// ```
/// use roster_bench::core::config::{BenchConfig, SizeThresholds};
///
/// let config = BenchConfig::default()
///     .with_repeat(10)
///     .with_sort_thresholds(SizeThresholds { small_below: 20, large_from: 500 });
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BenchConfig {
    /// Largest dataset a comparison will accept.
    pub max_dataset_size: usize,
    /// Trials per strategy for repeated runs.
    pub repeat: usize,
    /// Buckets for sort recommendations.
    pub sort_thresholds: SizeThresholds,
    /// Buckets for search recommendations.
    pub search_thresholds: SizeThresholds,
}

impl BenchConfig {
    /// Sets the dataset size limit.
    pub fn with_max_dataset_size(mut self, max: usize) -> Self {
        self.max_dataset_size = max;
        self
    }

    /// Sets the trial count for repeated runs.
    pub fn with_repeat(mut self, repeat: usize) -> Self {
        self.repeat = repeat;
        self
    }

    /// Sets the sort recommendation buckets.
    pub fn with_sort_thresholds(mut self, thresholds: SizeThresholds) -> Self {
        self.sort_thresholds = thresholds;
        self
    }

    /// Sets the search recommendation buckets.
    pub fn with_search_thresholds(mut self, thresholds: SizeThresholds) -> Self {
        self.search_thresholds = thresholds;
        self
    }

    /// Checks that every parameter is usable.
    pub fn validate(&self) -> Result<()> {
        if self.max_dataset_size == 0 {
            return Err(BenchError::invalid_config(
                "max_dataset_size",
                "must be positive",
            ));
        }
        if self.repeat == 0 {
            return Err(BenchError::invalid_config("repeat", "must be at least 1"));
        }
        for (name, t) in [
            ("sort_thresholds", self.sort_thresholds),
            ("search_thresholds", self.search_thresholds),
        ] {
            if t.small_below > t.large_from {
                return Err(BenchError::invalid_config(
                    name,
                    format!(
                        "small bound {} is above large bound {}",
                        t.small_below, t.large_from
                    ),
                ));
            }
        }
        Ok(())
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            max_dataset_size: DEFAULT_MAX_DATASET_SIZE,
            repeat: DEFAULT_REPEAT,
            sort_thresholds: SizeThresholds::SORT,
            search_thresholds: SizeThresholds::SEARCH,
        }
    }
}
