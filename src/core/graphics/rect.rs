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

//! Rectangle fill

use crate::core::display::FrameBuffer;
use crate::core::geometry::Rect;
use crate::core::graphics::bounds::clip_to_bounds;
use crate::core::graphics::color::Color;
use crate::core::graphics::scanline::draw_span;

/// Fill a rectangle with a color
///
/// The rectangle is clipped to the display and filled row by row through the
/// span writer. Degenerate rectangles (non-positive width or height) and the
/// clear color draw nothing. The clipped maxima are treated as exclusive
/// iteration limits on both axes, so a rectangle fully inside the display
/// covers exactly the integer grid `[min_x, max_x) × [min_y, max_y)`.
///
/// # Arguments
///
/// * `rect` - The region to fill
/// * `color` - Fill color
/// * `frame` - Destination surface
///
/// # Examples
///
/// ```
/// use monoview::core::display::FrameBuffer;
/// use monoview::core::geometry::Rect;
/// use monoview::core::graphics::{fill_rect, Color};
///
/// let mut frame = FrameBuffer::new();
/// fill_rect(&Rect::new(10.0, 10.0, 4.0, 2.0), Color::Black, &mut frame);
///
/// assert!(!frame.pixel(10, 10));
/// assert!(!frame.pixel(13, 11));
/// assert!(frame.pixel(14, 10)); // right edge is exclusive
/// assert!(frame.pixel(10, 12)); // bottom edge is exclusive
/// ```
pub fn fill_rect(rect: &Rect, color: Color, frame: &mut FrameBuffer) {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return;
    }
    let bounds = clip_to_bounds(rect);

    // A clear color writes nothing, so skip the frame buffer entirely.
    if matches!(color, Color::Clear) {
        return;
    }

    log::trace!(
        "fill_rect: ({}, {}) {}x{} -> rows {}..{}",
        rect.x,
        rect.y,
        rect.width,
        rect.height,
        bounds.min_y,
        bounds.max_y,
    );

    // The span writer's range is inclusive; stop one short of the clipped
    // maximum, flooring at the minimum for sub-pixel-wide input.
    let last_column = (bounds.max_x - 1).max(bounds.min_x);
    for y in bounds.min_y..bounds.max_y {
        draw_span(bounds.min_x, last_column, y, color, frame);
    }
}
