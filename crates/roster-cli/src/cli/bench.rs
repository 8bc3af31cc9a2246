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

//! Strategy comparison commands.

use clap::Subcommand;
use roster_core::{SortField, SortOrder, StudentService};

use crate::commands;
use crate::error::Result;

/// Commands that benchmark strategies against each other.
#[derive(Subcommand, Debug)]
pub enum BenchCommands {
    /// Compare every strategy of one kind on the loaded students
    Compare {
        #[command(subcommand)]
        target: CompareTarget,
    },
}

/// What to compare.
#[derive(Subcommand, Debug)]
pub enum CompareTarget {
    /// Run Bubble, Quick and Merge sort on the same students
    Sort {
        /// Field to sort by (id, name, mark, rank)
        #[arg(long, value_name = "FIELD", default_value = "id")]
        by: SortField,

        /// Sort order (asc, desc)
        #[arg(long, value_name = "ORDER", default_value = "asc")]
        order: SortOrder,

        /// Also time each strategy over N repeated runs
        #[arg(long, value_name = "N")]
        repeat: Option<usize>,
    },

    /// Run Linear and Binary search for the same id
    ///
    /// The id does not have to exist; a miss is compared too.
    Search {
        /// Student id to look for
        #[arg(long, value_name = "ID")]
        id: String,

        /// Search the students ordered by mark instead of by id
        #[arg(long)]
        unsorted: bool,
    },
}

impl BenchCommands {
    /// Execute the comparison against `service`.
    pub fn execute(self, service: StudentService) -> Result<()> {
        match self {
            BenchCommands::Compare {
                target: CompareTarget::Sort { by, order, repeat },
            } => commands::compare_sorts(service, by, order, repeat),
            BenchCommands::Compare {
                target: CompareTarget::Search { id, unsorted },
            } => commands::compare_searches(&service, &id, unsorted),
        }
    }
}
