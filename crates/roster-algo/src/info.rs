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

//! Static descriptors for strategies.

/// Descriptive labels for one algorithm.
///
/// These are fixed per strategy and never computed from a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmInfo {
    /// Display name, e.g. "Quick Sort".
    pub name: &'static str,
    /// Time complexity label.
    pub time_complexity: &'static str,
    /// Space complexity label.
    pub space_complexity: &'static str,
    /// Whether equal elements keep their input order. Always `false` for searches.
    pub stable: bool,
    /// Properties that favour the algorithm.
    pub strengths: &'static [&'static str],
    /// Properties that count against it.
    pub weaknesses: &'static [&'static str],
    /// Where the algorithm is a sensible choice.
    pub typical_use: &'static str,
}
