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

//! Chart generation configuration.
//!
//! The built-in defaults reproduce the original report generator's setup:
//! two platforms, fixed titles, fixed y-axis tick ranges. A JSON file given
//! with `--config` replaces the whole structure.

use crate::error::{CliError, Result};
use benchviz_render::{StyleConfig, YTicks};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-platform chart parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformConfig {
    /// Marker string that opens this platform's report section.
    pub marker: String,
    /// Short name used in output file stems, e.g. `x86`.
    pub slug: String,
    /// Title for both absolute-runtime charts.
    pub title_runtime: String,
    /// Title for the speedup chart.
    pub title_speedup: String,
    /// Y ticks for the runtime chart including the interpreter.
    pub y_ticks_all: YTicks,
    /// Y ticks for the compiled-only runtime chart.
    pub y_ticks_compiled: YTicks,
}

/// The full configuration surface of a chart run.
///
/// # Examples
///
/// ```
/// use benchviz_cli::config::ChartConfig;
///
/// let config = ChartConfig::default();
/// assert_eq!(config.platforms.len(), 2);
/// assert_eq!(config.platforms[0].marker, "x86_64");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    /// Platforms to chart, in report order.
    pub platforms: Vec<PlatformConfig>,
    /// Category colors and legend labels.
    #[serde(default)]
    pub style: StyleConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            platforms: vec![
                PlatformConfig {
                    marker: "x86_64".to_string(),
                    slug: "x86".to_string(),
                    title_runtime: "Mandelbrot.b runtime on x86_64 (Zen2 4.4GHz)".to_string(),
                    title_speedup: "Relative Speedup to Optimization Level O0 on x86_64"
                        .to_string(),
                    y_ticks_all: YTicks {
                        max: 22_000.0,
                        step: 2_000.0,
                    },
                    y_ticks_compiled: YTicks {
                        max: 2_300.0,
                        step: 250.0,
                    },
                },
                PlatformConfig {
                    marker: "riscv64".to_string(),
                    slug: "riscv".to_string(),
                    title_runtime: "Mandelbrot.b runtime on riscv64 (Ky X1 1.6GHz)".to_string(),
                    title_speedup: "Relative Speedup to Optimization Level O0 on riscv64"
                        .to_string(),
                    y_ticks_all: YTicks {
                        max: 120_000.0,
                        step: 10_000.0,
                    },
                    y_ticks_compiled: YTicks {
                        max: 12_000.0,
                        step: 1_000.0,
                    },
                },
            ],
            style: StyleConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Load a configuration override, or the defaults when `path` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] if the file cannot be read and
    /// [`CliError::Config`] if it is not valid JSON for this structure.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path).map_err(|e| CliError::io(path, e))?;
        serde_json::from_str(&text).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The platform entry for a report marker, if configured.
    #[must_use]
    pub fn platform(&self, marker: &str) -> Option<&PlatformConfig> {
        self.platforms.iter().find(|p| p.marker == marker)
    }
}
