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

//! Category colors and display labels.
//!
//! Styling is an explicit value passed into every render call, not ambient
//! state, so renders stay pure functions of their arguments. The default
//! matches the palette of the original report generator.

use crate::error::{RenderError, Result};
use benchviz_core::Category;
use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How one category is presented in every chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStyle {
    /// Fill color as a `#rrggbb` hex string.
    pub color: String,
    /// Legend label.
    pub label: String,
}

/// The category → style lookup shared by all chart variants.
///
/// # Examples
///
/// ```
/// use benchviz_core::Category;
/// use benchviz_render::StyleConfig;
///
/// let style = StyleConfig::default();
/// assert_eq!(style.label(Category::Gcc), "gcc -O3");
/// assert_eq!(style.rgb(Category::Interpreter).unwrap().0, 0xe1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleConfig {
    categories: BTreeMap<Category, CategoryStyle>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Interpreter,
            CategoryStyle {
                color: "#e13b59".to_string(),
                label: "brainiac --interpret".to_string(),
            },
        );
        categories.insert(
            Category::Native,
            CategoryStyle {
                color: "#f3ba14".to_string(),
                label: "brainiac --compile".to_string(),
            },
        );
        categories.insert(
            Category::Gcc,
            CategoryStyle {
                color: "#59a14f".to_string(),
                label: "gcc -O3".to_string(),
            },
        );
        categories.insert(
            Category::Clang,
            CategoryStyle {
                color: "#4e79a6".to_string(),
                label: "clang -O3".to_string(),
            },
        );
        Self { categories }
    }
}

impl StyleConfig {
    /// Legend label for a category; falls back to the category identifier
    /// if the configuration has no entry.
    #[must_use]
    pub fn label(&self, category: Category) -> &str {
        self.categories
            .get(&category)
            .map_or_else(|| category.as_str(), |s| s.label.as_str())
    }

    /// Fill color for a category; unconfigured categories draw gray.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::InvalidColor`] if the configured value is not
    /// a `#rrggbb` hex string.
    pub fn rgb(&self, category: Category) -> Result<RGBColor> {
        match self.categories.get(&category) {
            None => Ok(RGBColor(128, 128, 128)),
            Some(style) => parse_hex(&style.color).ok_or_else(|| RenderError::InvalidColor {
                category,
                value: style.color.clone(),
            }),
        }
    }
}

fn parse_hex(value: &str) -> Option<RGBColor> {
    let hex = value.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(RGBColor(r, g, b))
}
