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

//! Structured error types for the Roster CLI.
//!
//! Every command returns `Result<(), CliError>`; `main` prints the message
//! and exits with status 1.

use roster_algo::AlgorithmError;
use roster_bench::BenchError;
use roster_core::RosterError;
use thiserror::Error;

/// The main error type for Roster CLI operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CliError {
    /// A record operation failed.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A benchmark could not run.
    #[error(transparent)]
    Bench(#[from] BenchError),

    /// An algorithm name did not resolve.
    #[error(transparent)]
    Algorithm(#[from] AlgorithmError),

    /// Invalid input provided by the user.
    ///
    /// Covers option combinations and argument text clap cannot check on
    /// its own, such as a malformed `--student` value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
