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

//! Scanline span writer
//!
//! The single primitive that writes a horizontal run of pixels into the
//! frame buffer. Both the rectangle and the triangle fill routines delegate
//! here; nothing else in the engine touches pixels.

use crate::core::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FrameBuffer};
use crate::core::graphics::color::Color;

/// Write a horizontal run of pixels at row `y`
///
/// Pixels are written for every column in the inclusive range
/// `[min(x1, x2), max(x1, x2)]` intersected with the display's width; if the
/// intersection is empty, or the row lies outside the display, nothing is
/// written. Solid colors write uniform bits. Pattern colors sample row
/// `y mod 8` of the tile at bit `x mod 8` per pixel, and only where the
/// draw mask has that bit set; masked-out bits leave the existing pixel
/// untouched.
///
/// # Arguments
///
/// * `x1`, `x2` - Span endpoints, in either order
/// * `y` - Scanline row
/// * `color` - Fill color; [`Color::Clear`] writes nothing
/// * `frame` - Destination surface
pub fn draw_span(x1: i32, x2: i32, y: i32, color: Color, frame: &mut FrameBuffer) {
    if y < 0 || y >= DISPLAY_HEIGHT as i32 {
        return;
    }

    let start = x1.min(x2).max(0);
    let end = x1.max(x2).min(DISPLAY_WIDTH as i32 - 1);
    if start > end {
        return;
    }

    match color {
        Color::Clear => {}
        Color::Black | Color::White => {
            let white = matches!(color, Color::White);
            for x in start..=end {
                frame.set_pixel(x as usize, y as usize, white);
            }
        }
        Color::Pattern { pattern, mask } => {
            let row = pattern.0[(y % 8) as usize];
            let mask_row = mask.0[(y % 8) as usize];
            for x in start..=end {
                let bit = 1u8 << (x % 8);
                if mask_row & bit != 0 {
                    frame.set_pixel(x as usize, y as usize, row & bit != 0);
                }
            }
        }
    }
}
