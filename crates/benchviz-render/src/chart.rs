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

//! Grouped bar chart rendering.
//!
//! One x-axis group per optimization level, one bar per category inside
//! each group. The same drawing routine serves the absolute-runtime charts
//! and the speedup charts; only the input values, y ticks and value
//! formatting differ.

use crate::error::{RenderError, Result};
use crate::style::StyleConfig;
use benchviz_core::{BenchmarkTable, Category, SpeedupTable};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Rendered image size in pixels.
const CHART_SIZE: (u32, u32) = (1200, 800);

/// Fraction of each group's unit slot occupied by bars.
const GROUP_WIDTH: f64 = 0.8;

/// Gap subtracted from each bar's width, in group-slot units.
const BAR_GAP: f64 = 0.02;

const TITLE_FONT_SIZE: u32 = 30;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 18;
const VALUE_LABEL_FONT_SIZE: u32 = 13;

/// How bar values are printed above their bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueFormat {
    /// Plain integer milliseconds, e.g. `1234`.
    Millis,
    /// One-decimal ratio with an `x` suffix, e.g. `2.4x`.
    Speedup,
}

impl ValueFormat {
    /// Format one value for its bar annotation.
    #[must_use]
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Millis => format!("{}", value.round() as u64),
            Self::Speedup => format!("{value:.1}x"),
        }
    }

    /// Whether a defined value gets an annotation. Zero-height absolute bars
    /// stay unlabeled; every defined speedup ratio is labeled.
    fn annotate(self, value: f64) -> bool {
        match self {
            Self::Millis => value > 0.0,
            Self::Speedup => true,
        }
    }
}

/// Where the legend box is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperRight,
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(pos: LegendPosition) -> Self {
        match pos {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        }
    }
}

/// Fixed y-axis ticks: labels every `step` up to `max`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YTicks {
    /// Top of the y axis.
    pub max: f64,
    /// Distance between tick labels.
    pub step: f64,
}

/// Presentation parameters for one chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// Chart title.
    pub title: String,
    /// X-axis description.
    pub x_desc: String,
    /// Y-axis description.
    pub y_desc: String,
    /// Fixed y ticks, or `None` to scale to the data.
    pub y_ticks: Option<YTicks>,
    /// Bar annotation formatting.
    pub value_format: ValueFormat,
    /// Legend placement.
    pub legend: LegendPosition,
}

/// One x-axis group: a label and one optional value per category.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGroup {
    /// Tick label under the group, e.g. `O2`.
    pub label: String,
    /// Values in the chart's category order. `None` draws neither a bar nor
    /// an annotation.
    pub values: Vec<Option<f64>>,
}

/// The data behind one grouped bar chart.
///
/// Groups run left to right in vector order; within a group, bars follow
/// `categories` order. Construction from a [`BenchmarkTable`] or a
/// [`SpeedupTable`] keeps the two chart families on one drawing routine.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    /// Left-to-right bar order within each group.
    pub categories: Vec<Category>,
    /// Ascending-level groups.
    pub groups: Vec<BarGroup>,
}

impl BarChart {
    /// Absolute-runtime chart data for the given categories.
    ///
    /// Missing cells become zero-height bars, which render but stay
    /// unlabeled.
    #[must_use]
    pub fn absolute(table: &BenchmarkTable, categories: &[Category]) -> Self {
        let groups = table
            .levels()
            .into_iter()
            .map(|level| BarGroup {
                label: format!("O{level}"),
                values: categories
                    .iter()
                    .map(|&cat| Some(table.get(level, cat).unwrap_or(0) as f64))
                    .collect(),
            })
            .collect();
        Self {
            categories: categories.to_vec(),
            groups,
        }
    }

    /// Speedup chart data for the given categories.
    ///
    /// Categories without a baseline measurement are left out entirely;
    /// levels at which a category was not measured stay `None`.
    #[must_use]
    pub fn speedup(speedup: &SpeedupTable, categories: &[Category]) -> Self {
        let categories: Vec<Category> = categories
            .iter()
            .copied()
            .filter(|&cat| speedup.ratios(cat).is_some())
            .collect();
        let groups = speedup
            .levels()
            .iter()
            .enumerate()
            .map(|(i, level)| BarGroup {
                label: format!("O{level}"),
                values: categories
                    .iter()
                    .map(|&cat| speedup.ratios(cat).and_then(|row| row[i]))
                    .collect(),
            })
            .collect();
        Self { categories, groups }
    }

    /// The largest defined value, or zero if there is none.
    fn max_value(&self) -> f64 {
        self.groups
            .iter()
            .flat_map(|g| g.values.iter().flatten())
            .fold(0.0_f64, |acc, &v| acc.max(v))
    }
}

/// Render one grouped bar chart as an SVG artifact at `path`.
///
/// Pure function of its arguments: the same chart, spec and style always
/// produce the same layout. Each call owns its drawing area and presents it
/// before returning.
///
/// # Errors
///
/// Returns [`RenderError`] if the backend cannot draw or the file cannot be
/// written, naming the output path, or if the style carries a malformed
/// color.
pub fn render_grouped_bars(
    chart: &BarChart,
    spec: &ChartSpec,
    style: &StyleConfig,
    path: &Path,
) -> Result<()> {
    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE).map_err(|e| RenderError::backend(path, e))?;

    if chart.groups.is_empty() || chart.categories.is_empty() {
        // Nothing to draw; persist the blank canvas so the artifact set
        // stays complete.
        return root.present().map_err(|e| RenderError::backend(path, e));
    }

    let num_groups = chart.groups.len();
    let num_cats = chart.categories.len();
    let bar_width = GROUP_WIDTH / num_cats as f64;

    let y_max = match spec.y_ticks {
        Some(ticks) => ticks.max,
        None => (chart.max_value() * 1.15).max(1.0),
    };
    let y_label_count = spec
        .y_ticks
        .map_or(10, |ticks| (ticks.max / ticks.step).round() as usize);

    let mut ctx = ChartBuilder::on(&root)
        .caption(&spec.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d(-0.5..(num_groups as f64 - 0.5), 0.0..y_max)
        .map_err(|e| RenderError::backend(path, e))?;

    let group_labels: Vec<&str> = chart.groups.iter().map(|g| g.label.as_str()).collect();
    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(num_groups)
        .x_label_formatter(&|x| {
            let idx = x.round();
            if (x - idx).abs() < 0.3 && idx >= 0.0 && (idx as usize) < group_labels.len() {
                group_labels[idx as usize].to_string()
            } else {
                String::new()
            }
        })
        .y_labels(y_label_count)
        .x_desc(spec.x_desc.as_str())
        .y_desc(spec.y_desc.as_str())
        .label_style(("sans-serif", TICK_LABEL_FONT_SIZE))
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()
        .map_err(|e| RenderError::backend(path, e))?;

    // One series per category; the series label doubles as its legend entry.
    for (ci, &category) in chart.categories.iter().enumerate() {
        let color = style.rgb(category)?;
        let bars: Vec<Rectangle<(f64, f64)>> = chart
            .groups
            .iter()
            .enumerate()
            .filter_map(|(gi, group)| {
                group.values[ci].map(|value| {
                    let center = bar_center(gi, ci, num_cats, bar_width);
                    let half = (bar_width - BAR_GAP) / 2.0;
                    Rectangle::new([(center - half, 0.0), (center + half, value)], color.filled())
                })
            })
            .collect();
        ctx.draw_series(bars)
            .map_err(|e| RenderError::backend(path, e))?
            .label(style.label(category))
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - 6), (x + 18, y + 6)], color.filled())
            });
    }

    // Value annotations above the bars.
    let label_style = ("sans-serif", VALUE_LABEL_FONT_SIZE)
        .into_font()
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Bottom));
    let offset = y_max * 0.005;
    let labels: Vec<Text<(f64, f64), String>> = chart
        .groups
        .iter()
        .enumerate()
        .flat_map(|(gi, group)| {
            let label_style = &label_style;
            let value_format = spec.value_format;
            group
                .values
                .iter()
                .enumerate()
                .filter_map(move |(ci, slot)| {
                    let value = (*slot)?;
                    if !value_format.annotate(value) {
                        return None;
                    }
                    let center = bar_center(gi, ci, num_cats, bar_width);
                    Some(Text::new(
                        value_format.format(value),
                        (center, value + offset),
                        label_style.clone(),
                    ))
                })
        })
        .collect();
    ctx.draw_series(labels)
        .map_err(|e| RenderError::backend(path, e))?;

    ctx.configure_series_labels()
        .position(spec.legend.into())
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()
        .map_err(|e| RenderError::backend(path, e))?;

    root.present().map_err(|e| RenderError::backend(path, e))
}

/// Data-space x of a bar's center: group `gi`, bar `ci` of `num_cats`.
fn bar_center(gi: usize, ci: usize, num_cats: usize, bar_width: f64) -> f64 {
    gi as f64 + (ci as f64 - num_cats as f64 / 2.0 + 0.5) * bar_width
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> BenchmarkTable {
        let mut table = BenchmarkTable::new();
        table.insert(0, Category::Interpreter, 20000);
        table.insert(0, Category::Native, 1000);
        table.insert(1, Category::Native, 500);
        table
    }

    #[test]
    fn test_format_millis() {
        assert_eq!(ValueFormat::Millis.format(1234.0), "1234");
        assert_eq!(ValueFormat::Millis.format(0.6), "1");
    }

    #[test]
    fn test_format_speedup() {
        assert_eq!(ValueFormat::Speedup.format(2.0), "2.0x");
        assert_eq!(ValueFormat::Speedup.format(2.449), "2.4x");
    }

    #[test]
    fn test_annotate_rules() {
        assert!(!ValueFormat::Millis.annotate(0.0));
        assert!(ValueFormat::Millis.annotate(1.0));
        assert!(ValueFormat::Speedup.annotate(0.5));
    }

    #[test]
    fn test_absolute_chart_missing_cell_is_zero_bar() {
        let chart = BarChart::absolute(&sample_table(), &Category::ALL);
        assert_eq!(chart.groups.len(), 2);
        assert_eq!(chart.groups[0].label, "O0");
        // Gcc was never measured: zero-height bar, still present.
        assert_eq!(chart.groups[0].values[2], Some(0.0));
        assert_eq!(chart.groups[1].values[0], Some(0.0));
        assert_eq!(chart.groups[1].values[1], Some(500.0));
    }

    #[test]
    fn test_absolute_chart_respects_category_subset() {
        let chart = BarChart::absolute(&sample_table(), &Category::COMPILED);
        assert_eq!(chart.categories, Category::COMPILED.to_vec());
        assert_eq!(chart.groups[0].values.len(), 3);
    }

    #[test]
    fn test_speedup_chart_holes_stay_none() {
        let mut table = BenchmarkTable::new();
        table.insert(0, Category::Interpreter, 20000);
        table.insert(0, Category::Native, 500);
        table.insert(1, Category::Interpreter, 10000);
        let speedup = SpeedupTable::from_table(&table).unwrap();

        let chart = BarChart::speedup(&speedup, &Category::ALL);
        assert_eq!(chart.categories, vec![Category::Interpreter, Category::Native]);
        assert_eq!(chart.groups.len(), 1);
        assert_eq!(chart.groups[0].values[0], Some(2.0));
        assert_eq!(chart.groups[0].values[1], None);
    }

    #[test]
    fn test_bar_centers_symmetric_within_group() {
        let width = GROUP_WIDTH / 4.0;
        let left = bar_center(0, 0, 4, width);
        let right = bar_center(0, 3, 4, width);
        assert!((left + right).abs() < 1e-12);
        assert!(right - left <= GROUP_WIDTH);
    }

    #[test]
    fn test_chart_data_is_deterministic() {
        let a = BarChart::absolute(&sample_table(), &Category::ALL);
        let b = BarChart::absolute(&sample_table(), &Category::ALL);
        assert_eq!(a, b);
    }

    #[test]
    fn test_max_value() {
        let chart = BarChart::absolute(&sample_table(), &Category::ALL);
        assert_eq!(chart.max_value(), 20000.0);
    }
}
