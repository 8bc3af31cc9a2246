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

//! Report data structures.
//!
//! Everything here is plain data. Rendering is left to the caller.

use crate::core::Measurement;
use crate::harness::Highlight;
use crate::report::Recommendation;
use roster_algo::{AlgorithmInfo, SearchOutcome};

/// Outcome of one sort strategy in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortResult {
    /// Descriptor of the strategy.
    pub info: AlgorithmInfo,
    /// Counters of the run.
    pub measurement: Measurement,
    /// Whether the strategy's output was sorted under the comparator.
    pub verified: bool,
}

/// Outcome of one search strategy in a comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchResult {
    /// Descriptor of the strategy.
    pub info: AlgorithmInfo,
    /// Whether the strategy needs sorted input.
    pub requires_sorted: bool,
    /// Index found and counters of the run.
    pub outcome: SearchOutcome,
}

impl SearchResult {
    /// Counters of the run in strategy-independent form.
    pub fn measurement(&self) -> Measurement {
        self.outcome.metrics.into()
    }
}

/// Column headers plus one row of display strings per strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryTable {
    /// Column headers.
    pub headers: Vec<&'static str>,
    /// One row per strategy, same width as `headers`.
    pub rows: Vec<Vec<String>>,
}

impl SummaryTable {
    /// Display width of every column, counting characters.
    pub fn column_widths(&self) -> Vec<usize> {
        self.headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// One labelled value in a detailed breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BreakdownField {
    /// Label, e.g. "Comparisons".
    pub label: &'static str,
    /// Display value.
    pub value: String,
    /// Highlight earned by this value, if any.
    pub highlight: Option<Highlight>,
}

impl BreakdownField {
    pub(crate) fn plain(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
            highlight: None,
        }
    }
}

/// Detailed view of one strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BreakdownEntry {
    /// Strategy name.
    pub algorithm: &'static str,
    /// Labelled values in display order.
    pub fields: Vec<BreakdownField>,
}

impl BreakdownEntry {
    /// Every highlight this strategy earned.
    pub fn highlights(&self) -> Vec<Highlight> {
        self.fields.iter().filter_map(|f| f.highlight).collect()
    }
}

/// Full result of a sort comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SortReport {
    /// Number of elements sorted.
    pub size: usize,
    /// One result per strategy, in input order.
    pub results: Vec<SortResult>,
    /// Summary table.
    pub summary: SummaryTable,
    /// Detailed breakdown with highlights.
    pub breakdown: Vec<BreakdownEntry>,
    /// Size-based advice and overall winner.
    pub recommendation: Recommendation,
}

/// Full result of a search comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SearchReport {
    /// Number of elements searched.
    pub size: usize,
    /// Whether the dataset was sorted under the comparator.
    pub sorted: bool,
    /// One result per strategy, in input order.
    pub results: Vec<SearchResult>,
    /// Summary table.
    pub summary: SummaryTable,
    /// Detailed breakdown with highlights.
    pub breakdown: Vec<BreakdownEntry>,
    /// Size-based advice and most efficient strategy.
    pub recommendation: Recommendation,
}
