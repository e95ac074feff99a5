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

//! Display-bounds clipping
//!
//! Fill routines clip their input rectangle to the display's valid pixel
//! range before touching the frame buffer. Clipping is total: it always
//! returns a bounds value, possibly empty, never an error.

use crate::core::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH};
use crate::core::geometry::Rect;

/// Integer pixel bounds inside the display
///
/// Produced fresh by every [`clip_to_bounds`] call and never mutated in
/// place. After clipping, `0 <= min <= max < dimension` holds on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// Leftmost pixel column
    pub min_x: i32,
    /// Topmost pixel row
    pub min_y: i32,
    /// Rightmost extent (clamped to the last column at the display edge)
    pub max_x: i32,
    /// Bottom extent (clamped to the last row at the display edge)
    pub max_y: i32,
}

/// Clip a rectangle to the display's pixel range
///
/// The min/max values on each axis come from the rectangle's origin and
/// extents; a min above its max is swapped (negative sizes can arrive from
/// layout code), the max is clamped to `dimension - 1` when it reaches
/// or exceeds the dimension, and the min is clamped to zero last so a swap
/// can never leak a negative value through.
///
/// Clipping is idempotent: feeding the returned bounds back in as a
/// rectangle yields the same bounds.
///
/// # Examples
///
/// ```
/// use monoview::core::geometry::Rect;
/// use monoview::core::graphics::clip_to_bounds;
///
/// let bounds = clip_to_bounds(&Rect::new(-20.0, 10.0, 500.0, 40.0));
/// assert_eq!(bounds.min_x, 0);
/// assert_eq!(bounds.max_x, 399);
/// assert_eq!(bounds.min_y, 10);
/// assert_eq!(bounds.max_y, 50);
/// ```
pub fn clip_to_bounds(rect: &Rect) -> Bounds {
    let mut min_x = rect.x.max(0.0) as i32;
    let mut max_x = rect.max_x() as i32;
    let mut min_y = rect.y.max(0.0) as i32;
    let mut max_y = rect.max_y() as i32;

    if min_x > max_x {
        std::mem::swap(&mut min_x, &mut max_x);
    }
    if max_x >= DISPLAY_WIDTH as i32 {
        max_x = DISPLAY_WIDTH as i32 - 1;
    }

    if min_y > max_y {
        std::mem::swap(&mut min_y, &mut max_y);
    }
    if max_y >= DISPLAY_HEIGHT as i32 {
        max_y = DISPLAY_HEIGHT as i32 - 1;
    }

    // A swap above can surface a negative max-derived value as the min,
    // and the edge clamp can drop the max below a min that started past
    // the display; clamping the min last keeps the result ordered and
    // inside the display on both axes.
    min_x = min_x.max(0).min(max_x);
    min_y = min_y.max(0).min(max_y);

    Bounds {
        min_x,
        min_y,
        max_x,
        max_y,
    }
}
