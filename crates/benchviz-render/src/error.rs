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

//! Error types for chart rendering.

use benchviz_core::Category;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while drawing or persisting a chart.
///
/// Every variant that touches the filesystem carries the offending path, so
/// a failed batch run names the artifact it could not produce.
///
/// # Examples
///
/// ```
/// use benchviz_render::RenderError;
/// use benchviz_core::Category;
///
/// let err = RenderError::InvalidColor {
///     category: Category::Gcc,
///     value: "greenish".to_string(),
/// };
/// assert_eq!(
///     err.to_string(),
///     "invalid color 'greenish' for category gcc (expected #rrggbb)"
/// );
/// ```
#[derive(Debug, Error)]
pub enum RenderError {
    /// The drawing backend failed while producing an artifact.
    #[error("failed to render '{path}': {message}")]
    Backend {
        /// The output artifact that could not be written.
        path: PathBuf,
        /// Backend error message.
        message: String,
    },

    /// A configured category color is not a `#rrggbb` hex string.
    #[error("invalid color '{value}' for category {category} (expected #rrggbb)")]
    InvalidColor {
        /// The category with the bad color.
        category: Category,
        /// The malformed color value.
        value: String,
    },
}

impl RenderError {
    pub(crate) fn backend(path: impl Into<PathBuf>, err: impl fmt::Display) -> Self {
        Self::Backend {
            path: path.into(),
            message: err.to_string(),
        }
    }
}

/// Convenience type alias for `Result` with [`RenderError`].
pub type Result<T> = std::result::Result<T, RenderError>;
