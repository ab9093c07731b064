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

//! Command implementations.

mod generate;
mod validate;

pub use generate::generate;
pub use validate::validate;

use crate::error::{CliError, Result};
use benchviz_core::ParseWarning;
use colored::Colorize;
use std::fs;
use std::path::Path;

/// Read the report file as UTF-8 text.
fn read_report(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| CliError::io(path, e))
}

/// Print parse warnings for one platform to stderr.
fn print_warnings(marker: &str, warnings: &[ParseWarning]) {
    for warning in warnings {
        eprintln!("{} [{marker}] {warning}", "warning:".yellow().bold());
    }
}
