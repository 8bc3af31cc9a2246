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

//! Rank bands derived from a mark.

use std::fmt;
use std::str::FromStr;

use crate::{Result, RosterError};

/// Lowest accepted mark.
pub const MIN_MARK: f64 = 0.0;
/// Highest accepted mark.
pub const MAX_MARK: f64 = 10.0;

/// Classification of a mark.
///
/// Variants are declared from lowest to highest band, so the derived
/// ordering sorts `Fail` first and `Excellent` last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Rank {
    /// `[0.0, 5.0)`
    Fail,
    /// `[5.0, 6.5)`
    Medium,
    /// `[6.5, 7.5)`
    Good,
    /// `[7.5, 9.0)`
    VeryGood,
    /// `[9.0, 10.0]`
    Excellent,
}

impl Rank {
    /// Every rank from lowest to highest.
    pub const ALL: [Rank; 5] = [
        Self::Fail,
        Self::Medium,
        Self::Good,
        Self::VeryGood,
        Self::Excellent,
    ];

    /// Classifies `mark`.
    ///
    /// # Errors
    ///
    /// [`RosterError::MarkOutOfRange`] for NaN or a mark outside
    /// `[0.0, 10.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use roster_core::Rank;
    ///
    /// assert_eq!(Rank::from_mark(6.5).unwrap(), Rank::Good);
    /// assert_eq!(Rank::from_mark(10.0).unwrap(), Rank::Excellent);
    /// assert!(Rank::from_mark(-0.1).is_err());
    /// ```
    pub fn from_mark(mark: f64) -> Result<Rank> {
        if mark.is_nan() || !(MIN_MARK..=MAX_MARK).contains(&mark) {
            return Err(RosterError::MarkOutOfRange { mark });
        }

        Ok(Self::ALL
            .into_iter()
            .rev()
            .find(|rank| mark >= rank.min_mark())
            .unwrap_or(Self::Fail))
    }

    /// Inclusive lower bound of the band.
    pub fn min_mark(self) -> f64 {
        match self {
            Self::Fail => 0.0,
            Self::Medium => 5.0,
            Self::Good => 6.5,
            Self::VeryGood => 7.5,
            Self::Excellent => 9.0,
        }
    }

    /// Upper bound of the band. Exclusive except for [`Rank::Excellent`].
    pub fn max_mark(self) -> f64 {
        match self {
            Self::Fail => 5.0,
            Self::Medium => 6.5,
            Self::Good => 7.5,
            Self::VeryGood => 9.0,
            Self::Excellent => MAX_MARK,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fail => "Fail",
            Self::Medium => "Medium",
            Self::Good => "Good",
            Self::VeryGood => "Very Good",
            Self::Excellent => "Excellent",
        }
    }

    /// Band written as an interval, e.g. `[6.5 - 7.5)`.
    pub fn mark_range(self) -> String {
        let close = if self == Self::Excellent { ']' } else { ')' };
        format!("[{:.1} - {:.1}{}", self.min_mark(), self.max_mark(), close)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Rank {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();

        match key.as_str() {
            "fail" => Ok(Self::Fail),
            "medium" => Ok(Self::Medium),
            "good" => Ok(Self::Good),
            "verygood" => Ok(Self::VeryGood),
            "excellent" => Ok(Self::Excellent),
            _ => Err(RosterError::invalid_argument(format!(
                "unknown rank '{}', expected one of: fail, medium, good, very-good, excellent",
                s
            ))),
        }
    }
}
