// Benchviz - Benchmark Report Visualization
//
// Copyright (c) 2025 Benchviz contributors.
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

//! CLI command definitions and dispatch.

use crate::commands;
use crate::error::Result;
use clap::Subcommand;
use std::path::PathBuf;

/// Top-level CLI commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate the benchmark charts from a report file.
    ///
    /// Emits three SVGs per platform into the output directory: absolute
    /// runtimes with the interpreter, absolute runtimes compiled-only, and
    /// speedups relative to O0.
    Generate {
        /// Path to the benchmark report text file.
        report: PathBuf,

        /// Output directory for the chart artifacts (created if absent).
        #[arg(short, long, default_value = "charts")]
        out_dir: PathBuf,

        /// JSON file replacing the built-in chart configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Parse a report and print its tables and warnings without rendering.
    Validate {
        /// Path to the benchmark report text file.
        report: PathBuf,

        /// JSON file replacing the built-in chart configuration.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    ///
    /// Propagates any [`crate::error::CliError`] from the underlying
    /// operation; `main` maps it onto a nonzero exit code.
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Generate {
                report,
                out_dir,
                config,
            } => commands::generate(report, out_dir, config.as_deref()),
            Self::Validate { report, config } => commands::validate(report, config.as_deref()),
        }
    }
}
