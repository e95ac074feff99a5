// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types
//!
//! The rasterizer and view tree are total over their inputs: degenerate or
//! off-screen geometry simply draws nothing. Errors only arise in the glue
//! around them: loading a demo configuration, resolving a scene name, or
//! exporting a rendered frame.

use thiserror::Error;

/// Errors produced by the crate's fallible surfaces
#[derive(Debug, Error)]
pub enum MonoviewError {
    /// Reading a configuration or writing an exported frame failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A demo configuration file did not parse as TOML
    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// A scene name did not match any known demo scene
    #[error("unknown scene '{0}'")]
    UnknownScene(String),

    /// Encoding a frame as PNG failed
    #[cfg(feature = "png")]
    #[error("PNG export failed: {0}")]
    Export(#[from] image::ImageError),
}

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, MonoviewError>;
