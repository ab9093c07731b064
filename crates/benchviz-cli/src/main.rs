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

//! Benchviz command-line interface.

use benchviz_cli::cli::Commands;
use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

/// Benchviz - benchmark report chart generation
///
/// Parses a plain-text benchmark report and renders comparative grouped bar
/// charts: absolute runtimes (with and without the interpreter) and speedups
/// relative to the O0 baseline, one set per platform.
///
/// # Examples
///
/// ```bash
/// # Render all six charts into ./charts
/// benchviz generate doc/benchmark_results.txt
///
/// # Check what a report parses to without rendering
/// benchviz validate doc/benchmark_results.txt
/// ```
#[derive(Parser)]
#[command(name = "benchviz")]
#[command(author, version, about = "Benchviz - benchmark report chart generation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
