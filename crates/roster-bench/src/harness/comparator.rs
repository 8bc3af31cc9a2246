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

//! Highlight awarding.
//!
//! Picks the best strategy for each tracked figure. A tie always goes to the
//! strategy that appeared first in the input.

use crate::core::Measurement;
use std::fmt;

/// Distinction earned by a strategy within one comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Highlight {
    /// Lowest elapsed time.
    Fastest,
    /// Fewest comparator invocations.
    FewestComparisons,
    /// Fewest element moves (sorts only).
    FewestMoves,
}

impl Highlight {
    /// Marker text shown next to the winning value.
    pub fn label(self) -> &'static str {
        match self {
            Highlight::Fastest => "FASTEST",
            Highlight::FewestComparisons => "FEWEST COMPARISONS",
            Highlight::FewestMoves => "FEWEST SWAPS",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Winning positions for each highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Highlights {
    /// Index of the fastest strategy.
    pub fastest: Option<usize>,
    /// Index of the strategy with fewest comparisons.
    pub fewest_comparisons: Option<usize>,
    /// Index of the strategy with fewest moves.
    pub fewest_moves: Option<usize>,
}

impl Highlights {
    /// Whether the strategy at `index` holds `highlight`.
    pub fn holds(&self, index: usize, highlight: Highlight) -> bool {
        let winner = match highlight {
            Highlight::Fastest => self.fastest,
            Highlight::FewestComparisons => self.fewest_comparisons,
            Highlight::FewestMoves => self.fewest_moves,
        };
        winner == Some(index)
    }
}

/// Awards highlights among the measurements marked eligible.
///
/// # Arguments
///
/// * `measurements` - One measurement per strategy, in input order
/// * `eligible` - Whether the strategy at the same index may win anything;
///   missing entries count as ineligible
///
/// # Returns
///
/// The winning index per highlight. `FewestMoves` is only awarded among
/// measurements that track moves.
pub fn award_highlights(measurements: &[Measurement], eligible: &[bool]) -> Highlights {
    Highlights {
        fastest: earliest_min(
            candidates(measurements, eligible).map(|(i, m)| (i, Some(m.elapsed))),
        ),
        fewest_comparisons: earliest_min(
            candidates(measurements, eligible).map(|(i, m)| (i, Some(m.comparisons))),
        ),
        fewest_moves: earliest_min(candidates(measurements, eligible).map(|(i, m)| (i, m.moves))),
    }
}

fn candidates<'a>(
    measurements: &'a [Measurement],
    eligible: &'a [bool],
) -> impl Iterator<Item = (usize, &'a Measurement)> + 'a {
    measurements
        .iter()
        .enumerate()
        .filter(move |(i, _)| eligible.get(*i).copied().unwrap_or(false))
}

/// Index of the smallest present key; the earliest one on ties.
fn earliest_min<K: Ord>(keyed: impl Iterator<Item = (usize, Option<K>)>) -> Option<usize> {
    keyed
        .filter_map(|(i, key)| key.map(|k| (i, k)))
        .min_by(|a, b| a.1.cmp(&b.1))
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn m(micros: u64, comparisons: u64, moves: Option<u64>) -> Measurement {
        Measurement {
            elapsed: Duration::from_micros(micros),
            comparisons,
            moves,
        }
    }

    #[test]
    fn test_award_highlights() {
        let ms = [m(30, 6, Some(4)), m(10, 9, Some(7)), m(20, 5, Some(8))];
        let h = award_highlights(&ms, &[true; 3]);

        assert_eq!(h.fastest, Some(1));
        assert_eq!(h.fewest_comparisons, Some(2));
        assert_eq!(h.fewest_moves, Some(0));
        assert!(h.holds(1, Highlight::Fastest));
        assert!(!h.holds(1, Highlight::FewestComparisons));
        assert!(h.holds(0, Highlight::FewestMoves));
    }

    #[test]
    fn test_ties_go_to_earliest() {
        let ms = [m(10, 5, Some(3)), m(10, 5, Some(3))];
        let h = award_highlights(&ms, &[true, true]);

        for highlight in [
            Highlight::Fastest,
            Highlight::FewestComparisons,
            Highlight::FewestMoves,
        ] {
            assert!(h.holds(0, highlight));
            assert!(!h.holds(1, highlight));
        }
    }

    #[test]
    fn test_ineligible_never_wins() {
        let ms = [m(1, 1, None), m(50, 8, None)];
        let h = award_highlights(&ms, &[false, true]);

        assert_eq!(h.fastest, Some(1));
        assert_eq!(h.fewest_comparisons, Some(1));
        assert_eq!(h.fewest_moves, None);
    }

    #[test]
    fn test_nothing_eligible() {
        let ms = [m(1, 1, Some(1))];
        assert_eq!(award_highlights(&ms, &[false]), Highlights::default());
        assert_eq!(award_highlights(&[], &[]), Highlights::default());
    }

    #[test]
    fn test_labels() {
        assert_eq!(Highlight::Fastest.to_string(), "FASTEST");
        assert_eq!(Highlight::FewestMoves.label(), "FEWEST SWAPS");
    }
}
