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

//! Unit tests for rectangle fill

use crate::core::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FrameBuffer};
use crate::core::geometry::Rect;
use crate::core::graphics::{clip_to_bounds, fill_rect, Color};

#[test]
fn test_interior_rect_covers_exactly_its_grid() {
    let rect = Rect::new(10.0, 20.0, 5.0, 3.0);
    let bounds = clip_to_bounds(&rect);

    let mut frame = FrameBuffer::new();
    fill_rect(&rect, Color::Black, &mut frame);

    for y in 0..DISPLAY_HEIGHT {
        for x in 0..DISPLAY_WIDTH {
            let inside = (bounds.min_x..bounds.max_x).contains(&(x as i32))
                && (bounds.min_y..bounds.max_y).contains(&(y as i32));
            assert_eq!(!frame.pixel(x, y), inside, "pixel ({x}, {y})");
        }
    }
    assert_eq!(frame.black_pixel_count(), 15);
}

#[test]
fn test_right_and_bottom_edges_are_exclusive() {
    let mut frame = FrameBuffer::new();
    fill_rect(&Rect::new(10.0, 10.0, 4.0, 2.0), Color::Black, &mut frame);

    assert!(!frame.pixel(10, 10));
    assert!(!frame.pixel(13, 11));
    assert!(frame.pixel(14, 10));
    assert!(frame.pixel(10, 12));
}

#[test]
fn test_clear_color_leaves_buffer_unchanged() {
    let mut frame = FrameBuffer::new();
    frame.set_pixel(50, 50, false);
    fill_rect(&Rect::new(0.0, 0.0, 400.0, 240.0), Color::Clear, &mut frame);

    assert_eq!(frame.black_pixel_count(), 1);
    assert!(!frame.pixel(50, 50));
}

#[test]
fn test_degenerate_extents_draw_nothing() {
    let mut frame = FrameBuffer::new();
    fill_rect(&Rect::new(10.0, 10.0, 0.0, 20.0), Color::Black, &mut frame);
    fill_rect(&Rect::new(10.0, 10.0, 20.0, 0.0), Color::Black, &mut frame);
    fill_rect(&Rect::new(10.0, 10.0, -5.0, 20.0), Color::Black, &mut frame);
    fill_rect(&Rect::new(10.0, 10.0, 20.0, -5.0), Color::Black, &mut frame);
    assert_eq!(frame.black_pixel_count(), 0);
}

#[test]
fn test_rect_overhanging_the_display_is_clipped() {
    let mut frame = FrameBuffer::new();
    fill_rect(&Rect::new(-20.0, -20.0, 1000.0, 1000.0), Color::Black, &mut frame);

    // Clip clamps the maxima to the last pixel; the fill loop treats them
    // as exclusive, so the very last row and column stay untouched.
    assert!(!frame.pixel(0, 0));
    assert!(!frame.pixel(DISPLAY_WIDTH - 2, DISPLAY_HEIGHT - 2));
    assert!(frame.pixel(DISPLAY_WIDTH - 1, 0));
    assert!(frame.pixel(0, DISPLAY_HEIGHT - 1));
}

#[test]
fn test_rect_fully_above_or_below_draws_nothing() {
    let mut frame = FrameBuffer::new();
    fill_rect(&Rect::new(10.0, -50.0, 20.0, 20.0), Color::Black, &mut frame);
    fill_rect(&Rect::new(10.0, 300.0, 20.0, 20.0), Color::Black, &mut frame);
    assert_eq!(frame.black_pixel_count(), 0);
}

#[test]
fn test_pattern_fill_tiles_in_display_coordinates() {
    // 50% gray: row 0 of the tile keeps columns 1, 3, 5, 7
    let mut frame = FrameBuffer::new();
    fill_rect(&Rect::new(0.0, 0.0, 8.0, 1.0), Color::dithered(0.5), &mut frame);

    for x in 0..8usize {
        assert_eq!(frame.pixel(x, 0), x % 2 == 1, "column {x}");
    }
}

#[test]
fn test_default_white_fill_erases() {
    let mut frame = FrameBuffer::new();
    frame.clear(false);
    fill_rect(&Rect::new(100.0, 100.0, 10.0, 10.0), Color::White, &mut frame);

    assert!(frame.pixel(100, 100));
    assert!(frame.pixel(109, 109));
    assert!(!frame.pixel(110, 100));
    assert_eq!(
        frame.black_pixel_count(),
        DISPLAY_WIDTH * DISPLAY_HEIGHT - 100
    );
}
