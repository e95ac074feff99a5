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

//! Demo support
//!
//! Everything the `monoview-demo` binary needs around the core: prebuilt
//! scenes, a TOML configuration file, and PNG export of rendered frames.
//!
//! # Example
//!
//! ```
//! use monoview::core::display::FrameBuffer;
//! use monoview::core::view::Input;
//! use monoview::demo::scenes;
//!
//! let mut screen = scenes::build("gallery").unwrap();
//! let mut frame = FrameBuffer::new();
//! assert!(screen.update(&Input::idle(), &mut frame));
//! ```

pub mod config;
#[cfg(feature = "png")]
pub mod export;
pub mod scenes;

pub use config::DemoConfig;
