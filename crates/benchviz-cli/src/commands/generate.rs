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

//! The `generate` command: report in, six charts out.

use super::{print_warnings, read_report};
use crate::config::{ChartConfig, PlatformConfig};
use crate::error::{CliError, Result};
use benchviz_core::{parse_report, Category, ParsedPlatform, SpeedupTable};
use benchviz_render::{
    render_grouped_bars, BarChart, ChartSpec, LegendPosition, StyleConfig, ValueFormat,
};
use colored::Colorize;
use std::fs;
use std::path::Path;

const RUNTIME_X_DESC: &str = "brainiac --transpile Optimization Level";
const RUNTIME_Y_DESC: &str = "Runtime in milliseconds";
const SPEEDUP_X_DESC: &str = "Optimization Level";
const SPEEDUP_Y_DESC: &str = "Speedup (relative to O0)";

/// Generate every configured chart from one report file.
///
/// The report is read once; each platform section is parsed into a table,
/// and three charts are rendered per platform. A missing platform marker
/// aborts before anything is written.
pub fn generate(report: &Path, out_dir: &Path, config: Option<&Path>) -> Result<()> {
    let config = ChartConfig::load(config)?;
    let text = read_report(report)?;

    let markers: Vec<&str> = config.platforms.iter().map(|p| p.marker.as_str()).collect();
    let platforms = parse_report(&text, &markers)?;

    fs::create_dir_all(out_dir).map_err(|e| CliError::io(out_dir, e))?;

    for parsed in &platforms {
        // parse_report only returns markers it was given.
        let Some(platform) = config.platform(&parsed.marker) else {
            continue;
        };
        print_warnings(&parsed.marker, &parsed.warnings);
        render_platform(parsed, platform, &config.style, out_dir)?;
    }

    Ok(())
}

fn render_platform(
    parsed: &ParsedPlatform,
    platform: &PlatformConfig,
    style: &StyleConfig,
    out_dir: &Path,
) -> Result<()> {
    let charts = [
        (
            "all",
            BarChart::absolute(&parsed.table, &Category::ALL),
            ChartSpec {
                title: platform.title_runtime.clone(),
                x_desc: RUNTIME_X_DESC.to_string(),
                y_desc: RUNTIME_Y_DESC.to_string(),
                y_ticks: Some(platform.y_ticks_all),
                value_format: ValueFormat::Millis,
                legend: LegendPosition::UpperRight,
            },
        ),
        (
            "compiled",
            BarChart::absolute(&parsed.table, &Category::COMPILED),
            ChartSpec {
                title: platform.title_runtime.clone(),
                x_desc: RUNTIME_X_DESC.to_string(),
                y_desc: RUNTIME_Y_DESC.to_string(),
                y_ticks: Some(platform.y_ticks_compiled),
                value_format: ValueFormat::Millis,
                legend: LegendPosition::UpperRight,
            },
        ),
        (
            "speedup",
            BarChart::speedup(&SpeedupTable::from_table(&parsed.table)?, &Category::ALL),
            ChartSpec {
                title: platform.title_speedup.clone(),
                x_desc: SPEEDUP_X_DESC.to_string(),
                y_desc: SPEEDUP_Y_DESC.to_string(),
                y_ticks: None,
                value_format: ValueFormat::Speedup,
                legend: LegendPosition::UpperLeft,
            },
        ),
    ];

    for (variant, chart, spec) in &charts {
        let path = out_dir.join(format!("benchmark_{}_{variant}.svg", platform.slug));
        render_grouped_bars(chart, spec, style, &path)?;
        println!("{} {}", "generated".green(), path.display());
    }
    Ok(())
}
