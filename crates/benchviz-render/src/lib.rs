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

//! Grouped bar chart rendering for benchmark tables.
//!
//! Turns a [`benchviz_core::BenchmarkTable`] or
//! [`benchviz_core::SpeedupTable`] into an SVG bar chart. Every render call
//! is a pure function of its arguments (chart data, presentation
//! parameters, style lookup, output path) and owns its drawing surface for
//! the duration of the call.

mod chart;
mod error;
mod style;

pub use chart::{
    render_grouped_bars, BarChart, BarGroup, ChartSpec, LegendPosition, ValueFormat, YTicks,
};
pub use error::{RenderError, Result};
pub use style::{CategoryStyle, StyleConfig};
