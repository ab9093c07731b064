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

//! Structured error types for the benchviz CLI.

use benchviz_core::ReportError;
use benchviz_render::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for CLI operations.
///
/// Wraps the core and render error taxonomies and adds the two failure
/// classes only the CLI can hit: unreadable input files and malformed
/// configuration overrides. Every variant names the file it concerns.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O operation failed (report read, output directory creation).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error.
        path: PathBuf,
        /// The error message.
        message: String,
    },

    /// A configuration override file could not be parsed.
    #[error("invalid configuration '{path}': {message}")]
    Config {
        /// The configuration file path.
        path: PathBuf,
        /// Parse error detail.
        message: String,
    },

    /// Report parsing or speedup derivation failed.
    #[error(transparent)]
    Report(#[from] ReportError),

    /// Chart rendering failed.
    #[error(transparent)]
    Render(#[from] RenderError),
}

impl CliError {
    /// Wrap an I/O error with the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with [`CliError`].
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display_names_path() {
        let err = CliError::io(
            "missing.txt",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "I/O error for 'missing.txt': not found");
    }

    #[test]
    fn test_report_error_passes_through() {
        let err = CliError::from(ReportError::MissingMarker {
            marker: "riscv64".to_string(),
        });
        assert!(err.to_string().contains("riscv64"));
    }
}
