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

//! Roster CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! ## Records
//!
//! - **list**: students in stored order, optionally one rank only
//! - **find**: by exact id or by part of a name
//! - **sort**: sort with a chosen strategy and show its counters
//! - **search**: search an id with a chosen strategy
//! - **stats**: average, highest and lowest mark plus rank distribution
//! - **ranks**: the rank bands with student counts
//! - **classify**: the rank of a single mark
//!
//! ## Comparisons
//!
//! - **compare sort**: Bubble, Quick and Merge sort on the same students
//! - **compare search**: Linear and Binary search for the same id
//!
//! ## Utilities
//!
//! - **completion**: shell completion scripts (bash, zsh, fish, powershell, elvish)
//!
//! # Data
//!
//! Each invocation loads one built-in dataset (`--dataset`), optionally
//! extended with `--student ID,NAME,MARK`. Nothing is persisted. Generated
//! datasets are limited by `ROSTER_MAX_DATASET` (default 100 000).

pub mod cli;
pub mod commands;
pub mod error;
pub mod render;

pub use error::{CliError, Result};
