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

//! Software rasterizer
//!
//! This module converts geometry into pixels on the 1-bit frame buffer:
//!
//! - [`clip_to_bounds`]: clamp a rectangle to the display's pixel range
//! - [`draw_span`]: the single horizontal-run primitive all fills go through
//! - [`fill_rect`]: clipped row-by-row rectangle fill
//! - [`fill_triangle`]: scanline triangle fill with flat decomposition
//! - [`Color::dithered`] and [`PatternCache`]: ordered-dither gray
//!   approximation as 8×8 repeating bit patterns
//!
//! Everything here is a total function over its inputs: degenerate or
//! off-screen geometry produces no pixels, never an error.

// Module declarations
mod bounds;
mod color;
mod pattern_cache;
mod rect;
mod scanline;
mod triangle;
#[cfg(test)]
mod tests;

// Public re-exports
pub use bounds::{clip_to_bounds, Bounds};
pub use color::{BitPattern, Color, PATTERN_MASK_ALWAYS_DRAW, PATTERN_MASK_NEVER_DRAW};
pub use pattern_cache::PatternCache;
pub use rect::fill_rect;
pub use scanline::draw_span;
pub use triangle::{fill_triangle, Triangle};
