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

//! Shell completion generation

use clap::Command;
use clap_complete::{generate, Generator};
use std::io;

use crate::error::Result;

/// Write the completion script for `cmd` to stdout.
pub fn generate_completion_for_command<G: Generator>(generator: G, cmd: &mut Command) -> Result<()> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, &mut io::stdout());
    Ok(())
}

/// Installation instructions for roster completions in `shell`.
///
/// Shell names are case-insensitive. Returns `None` for unsupported shells.
///
/// # Examples
///
/// ```
/// use roster_cli::commands::installation_instructions;
///
/// assert!(installation_instructions("Bash").unwrap().contains("bashrc"));
/// assert!(installation_instructions("tcsh").is_none());
/// ```
pub fn installation_instructions(shell: &str) -> Option<&'static str> {
    let text = match shell.to_lowercase().as_str() {
        "bash" => {
            r#"# Bash completion installation:

# For current session only:
eval "$(roster completion bash)"

# For persistent installation, add to your ~/.bashrc:
echo 'eval "$(roster completion bash)"' >> ~/.bashrc
"#
        }
        "zsh" => {
            r#"# Zsh completion installation:

# For current session only:
eval "$(roster completion zsh)"

# Or save to a directory in $fpath:
roster completion zsh > ~/.zsh/completions/_roster
"#
        }
        "fish" => {
            r#"# Fish completion installation:

roster completion fish > ~/.config/fish/completions/roster.fish
"#
        }
        "powershell" | "pwsh" => {
            r#"# PowerShell completion installation:

# Add this line to the profile found at $PROFILE:
roster completion powershell | Out-String | Invoke-Expression
"#
        }
        "elvish" => {
            r#"# Elvish completion installation:

# Add to your ~/.elvish/rc.elv:
eval (roster completion elvish)
"#
        }
        _ => return None,
    };
    Some(text)
}
