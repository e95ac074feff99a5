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

//! Demo configuration
//!
//! The demo binary can read its settings from a TOML file; flags given on
//! the command line take precedence over the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Settings for a demo run
///
/// # Examples
///
/// ```
/// use monoview::demo::DemoConfig;
///
/// let config: DemoConfig = toml::from_str(
///     r#"
///     scene = "fan"
///     frames = 30
///     "#,
/// )
/// .unwrap();
/// assert_eq!(config.scene, "fan");
/// assert_eq!(config.frames, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Name of the scene to build (see [`crate::demo::scenes::SCENES`])
    pub scene: String,
    /// How many frame-synchronous updates to run
    pub frames: u32,
    /// Directory PNG frames are written into
    pub output: PathBuf,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            scene: "gallery".to_string(),
            frames: 1,
            output: PathBuf::from("frames"),
        }
    }
}

impl DemoConfig {
    /// Load a configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = DemoConfig::default();
        assert_eq!(config.scene, "gallery");
        assert_eq!(config.frames, 1);
        assert_eq!(config.output, PathBuf::from("frames"));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: DemoConfig = toml::from_str("scene = \"dither\"").unwrap();
        assert_eq!(config.scene, "dither");
        assert_eq!(config.frames, 1);
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: std::result::Result<DemoConfig, _> = toml::from_str("scene = \"fan\"\nspeed = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_round_trip() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "scene = \"fan\"").unwrap();
        writeln!(file, "frames = 12").unwrap();
        writeln!(file, "output = \"out\"").unwrap();

        let config = DemoConfig::from_file(file.path()).unwrap();
        assert_eq!(config.scene, "fan");
        assert_eq!(config.frames, 12);
        assert_eq!(config.output, PathBuf::from("out"));
    }

    #[test]
    fn test_missing_file_is_an_io_error() {
        let result = DemoConfig::from_file(Path::new("/nonexistent/monoview-demo.toml"));
        assert!(result.is_err());
    }
}
