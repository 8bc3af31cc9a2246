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

//! Record commands.

use clap::{ArgGroup, Subcommand};
use roster_algo::{SearchAlgorithm, SortAlgorithm};
use roster_core::{Rank, SortField, SortOrder, StudentService};

use crate::commands;
use crate::error::Result;

/// Commands that read the loaded students.
#[derive(Subcommand, Debug)]
pub enum RecordCommands {
    /// List students in stored order
    List {
        /// Only students in this rank (fail, medium, good, very-good, excellent)
        #[arg(long, value_name = "RANK")]
        rank: Option<Rank>,
    },

    /// Find students by id or by name
    #[command(group(ArgGroup::new("key").required(true).args(["id", "name"])))]
    Find {
        /// Exact student id
        #[arg(long, value_name = "ID")]
        id: Option<String>,

        /// Case-insensitive part of a name
        #[arg(long, value_name = "QUERY")]
        name: Option<String>,
    },

    /// Sort students with a chosen strategy
    ///
    /// Prints the sorted students followed by the comparison and move
    /// counters of the run.
    Sort {
        /// Field to sort by (id, name, mark, rank)
        #[arg(long, value_name = "FIELD", default_value = "id")]
        by: SortField,

        /// Sort order (asc, desc)
        #[arg(long, value_name = "ORDER", default_value = "asc")]
        order: SortOrder,

        /// Sort strategy (bubble, quick, merge)
        #[arg(short, long, value_name = "ALGORITHM", default_value = "quick")]
        algorithm: SortAlgorithm,
    },

    /// Search for a student id with a chosen strategy
    ///
    /// Binary search runs over the students ordered by id; linear search
    /// runs over them in stored order.
    Search {
        /// Student id to look for
        #[arg(long, value_name = "ID")]
        id: String,

        /// Search strategy (linear, binary)
        #[arg(short, long, value_name = "ALGORITHM", default_value = "binary")]
        algorithm: SearchAlgorithm,
    },

    /// Show mark statistics and the rank distribution
    Stats,

    /// Show the rank bands and how many students fall in each
    Ranks,

    /// Show the rank a mark belongs to
    Classify {
        /// Mark between 0.0 and 10.0
        #[arg(value_name = "MARK", allow_hyphen_values = true)]
        mark: String,
    },
}

impl RecordCommands {
    /// Execute the record command against `service`.
    pub fn execute(self, service: StudentService) -> Result<()> {
        match self {
            RecordCommands::List { rank } => commands::list(&service, rank),
            RecordCommands::Find { id: Some(id), .. } => commands::find_by_id(&service, &id),
            RecordCommands::Find { name, .. } => {
                commands::find_by_name(&service, name.as_deref().unwrap_or_default())
            }
            RecordCommands::Sort {
                by,
                order,
                algorithm,
            } => commands::sort(&service, by, order, algorithm),
            RecordCommands::Search { id, algorithm } => commands::search(&service, &id, algorithm),
            RecordCommands::Stats => commands::stats(&service),
            RecordCommands::Ranks => commands::ranks(&service),
            RecordCommands::Classify { mark } => commands::classify(&mark),
        }
    }
}
