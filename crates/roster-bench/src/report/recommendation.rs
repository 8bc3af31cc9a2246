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

//! Size-based strategy recommendations.

use crate::core::SizeThresholds;
use crate::report::{format_duration, SearchResult, SortResult};
use std::fmt;

/// Dataset size class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SizeBucket {
    /// Below the small threshold.
    Small,
    /// Between the thresholds.
    Medium,
    /// At or above the large threshold.
    Large,
}

impl fmt::Display for SizeBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeBucket::Small => "small",
            SizeBucket::Medium => "medium",
            SizeBucket::Large => "large",
        })
    }
}

/// Strategy singled out by a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Winner {
    /// Label shown before the name, e.g. "Overall Winner".
    pub title: &'static str,
    /// Strategy name.
    pub algorithm: &'static str,
    /// Deciding figure, e.g. "0.120 ms" or "2 comparisons".
    pub detail: String,
}

/// Advice for a dataset of a given size.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Recommendation {
    /// Size class the advice was chosen for.
    pub bucket: SizeBucket,
    /// `false` when a search ran over unsorted data.
    pub sorted: bool,
    /// One-line summary of the situation.
    pub headline: String,
    /// Individual advice lines.
    pub advice: Vec<&'static str>,
    /// Fastest sort, or the search with fewest comparisons that found its target.
    pub winner: Option<Winner>,
}

impl Recommendation {
    /// Whether the advice is a warning rather than a preference.
    pub fn is_warning(&self) -> bool {
        !self.sorted
    }
}

/// Builds the sort recommendation for `size` elements.
pub fn recommend_sort(
    results: &[SortResult],
    size: usize,
    thresholds: &SizeThresholds,
) -> Recommendation {
    let bucket = thresholds.bucket(size);
    let (headline, advice) = match bucket {
        SizeBucket::Small => (
            format!("For small datasets (< {} elements):", thresholds.small_below),
            vec![
                "Bubble Sort is acceptable due to simplicity",
                "Quick Sort and Merge Sort may have overhead",
            ],
        ),
        SizeBucket::Medium => (
            format!(
                "For medium datasets ({}-{} elements):",
                thresholds.small_below, thresholds.large_from
            ),
            vec![
                "Quick Sort is recommended for best average performance",
                "Merge Sort if stable sorting is required",
            ],
        ),
        SizeBucket::Large => (
            format!("For large datasets (>= {} elements):", thresholds.large_from),
            vec![
                "Quick Sort for fastest average case",
                "Merge Sort for guaranteed O(n log n) performance",
                "Avoid Bubble Sort - O(n²) is too slow",
            ],
        ),
    };

    let winner = results
        .iter()
        .min_by_key(|r| r.measurement.elapsed)
        .map(|r| Winner {
            title: "Overall Winner",
            algorithm: r.info.name,
            detail: format_duration(r.measurement.elapsed),
        });

    Recommendation {
        bucket,
        sorted: true,
        headline,
        advice,
        winner,
    }
}

/// Builds the search recommendation for `size` elements.
///
/// Unsorted data overrides the size buckets: only a strategy that tolerates
/// any order is recommended.
pub fn recommend_search(
    results: &[SearchResult],
    size: usize,
    sorted: bool,
    thresholds: &SizeThresholds,
) -> Recommendation {
    let bucket = thresholds.bucket(size);
    let (headline, advice) = if !sorted {
        (
            "Data is NOT sorted:".to_string(),
            vec![
                "You MUST use Linear Search",
                "Binary Search requires sorted data",
                "Consider sorting if you'll search frequently",
            ],
        )
    } else {
        match bucket {
            SizeBucket::Small => (
                format!(
                    "For small sorted datasets (< {} elements):",
                    thresholds.small_below
                ),
                vec![
                    "Linear Search is acceptable due to small size",
                    "Binary Search may have overhead for very small data",
                ],
            ),
            SizeBucket::Medium => (
                format!(
                    "For medium sorted datasets ({}-{} elements):",
                    thresholds.small_below, thresholds.large_from
                ),
                vec![
                    "Binary Search is recommended (much faster)",
                    "O(log n) is significantly better than O(n)",
                ],
            ),
            SizeBucket::Large => (
                format!(
                    "For large sorted datasets (>= {} elements):",
                    thresholds.large_from
                ),
                vec![
                    "Binary Search is strongly recommended",
                    "O(log n) is exponentially faster than O(n)",
                    "Example: 1000 elements -> Binary needs ~10 comparisons vs Linear's 500",
                ],
            ),
        }
    };

    let winner = results
        .iter()
        .filter(|r| r.outcome.found())
        .min_by_key(|r| r.outcome.metrics.comparisons)
        .map(|r| Winner {
            title: "Most Efficient",
            algorithm: r.info.name,
            detail: format!("{} comparisons", r.outcome.metrics.comparisons),
        });

    Recommendation {
        bucket,
        sorted,
        headline,
        advice,
        winner,
    }
}
