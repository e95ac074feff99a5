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

//! monoview: a retained-mode UI toolkit for monochrome displays
//!
//! This crate renders a tree of views onto a fixed-size 1-bit-per-pixel
//! raster surface using a software rasterizer.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - [`core::display`]: The packed 1-bpp frame buffer and display constants
//! - [`core::geometry`]: Points, sizes, rectangles, and edge insets
//! - [`core::graphics`]: The software rasterizer (clipping, scanline spans,
//!   rectangle and triangle fill, ordered dithering, pattern cache)
//! - [`core::view`]: The view tree, its damage-propagation protocol, the
//!   per-frame driver, and the stock widgets
//! - [`demo`]: Scene builders, configuration, and PNG export used by the
//!   `monoview-demo` binary
//!
//! # Example
//!
//! ```
//! use monoview::core::display::FrameBuffer;
//! use monoview::core::geometry::{Point, Rect};
//! use monoview::core::graphics::{fill_rect, fill_triangle, Color, Triangle};
//!
//! let mut frame = FrameBuffer::new();
//! fill_rect(&Rect::new(20.0, 20.0, 100.0, 60.0), Color::Black, &mut frame);
//! fill_triangle(
//!     &Triangle::new(
//!         Point::new(200.0, 40.0),
//!         Point::new(160.0, 120.0),
//!         Point::new(240.0, 120.0),
//!     ),
//!     Color::dithered(0.5),
//!     &mut frame,
//! );
//! ```
//!
//! # Drawing model
//!
//! All pixel writes funnel through a single scanline span primitive; the
//! rectangle and triangle fill routines clip and decompose their input and
//! delegate row by row. Whether a frame is rendered at all is decided by the
//! view tree's dirty flag, which propagates up to the root on any change and
//! cascades back down when the root is cleared after a render pass.
//!
//! # Error Handling
//!
//! All fallible operations return [`core::error::Result<T>`] which is an
//! alias for `Result<T, MonoviewError>`. The rasterizer itself is total:
//! degenerate or off-screen geometry draws nothing and is not an error.

pub mod core;
pub mod demo;

// Re-export commonly used types
pub use core::error::{MonoviewError, Result};
