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

//! CLI command definitions and argument parsing.
//!
//! Commands are grouped by concern and flattened so they all appear at the
//! top level:
//!
//! - [`records`]: record views (list, find, sort, search, stats, ranks, classify)
//! - [`bench`]: strategy comparisons (compare sort, compare search)
//! - [`utility`]: shell completion
//!
//! Dataset selection and output options are global and may be given before
//! or after the subcommand.

mod bench;
mod records;
mod utility;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::commands;
use crate::error::Result;

pub use bench::{BenchCommands, CompareTarget};
pub use records::RecordCommands;
pub use utility::UtilityCommands;

/// Roster - student records and instrumented algorithms
///
/// # Examples
///
/// ```bash
/// # List the default dataset ranked by mark
/// roster sort --by mark --order desc --algorithm quick
///
/// # Find a student with binary search
/// roster search --id S004 --algorithm binary
///
/// # Compare every sort strategy on 5000 generated students
/// roster --dataset generated --size 5000 compare sort --by name
/// ```
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(author, version, about = "Roster - student records and instrumented algorithms", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Run the selected command.
    pub fn execute(self) -> Result<()> {
        self.command.execute(&self.global)
    }
}

/// Built-in dataset choices.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DatasetKind {
    /// 15 students across every rank
    #[default]
    Default,
    /// 5 students
    Small,
    /// 25 students, five per rank
    Balanced,
    /// --size generated students
    Generated,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Dataset to load before running the command
    #[arg(long, global = true, value_enum, default_value_t = DatasetKind::Default)]
    pub dataset: DatasetKind,

    /// Number of students for `--dataset generated` (limit: ROSTER_MAX_DATASET)
    #[arg(long, global = true, value_name = "N")]
    pub size: Option<usize>,

    /// Extra student appended to the dataset (repeatable)
    #[arg(long = "student", global = true, value_name = "ID,NAME,MARK")]
    pub students: Vec<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(flatten)]
    Records(RecordCommands),

    #[command(flatten)]
    Bench(BenchCommands),

    #[command(flatten)]
    Utility(UtilityCommands),
}

impl Commands {
    /// Execute the command, loading the dataset first where one is needed.
    pub fn execute(self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Records(cmd) => cmd.execute(commands::load_service(global)?),
            Commands::Bench(cmd) => cmd.execute(commands::load_service(global)?),
            Commands::Utility(cmd) => cmd.execute(),
        }
    }
}
