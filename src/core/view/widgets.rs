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

//! Stock widgets
//!
//! Concrete [`Widget`] implementations built entirely on the rasterizer's
//! fill primitives. Text rendering is deliberately absent; these widgets
//! express themselves with rectangles, triangles, and dither patterns.

use std::sync::OnceLock;

use crate::core::display::FrameBuffer;
use crate::core::geometry::{EdgeInsets, Point, Rect};
use crate::core::graphics::{fill_rect, fill_triangle, Color, PatternCache, Triangle};
use crate::core::view::input::{Buttons, Input};
use crate::core::view::Widget;

/// Shared dither shades for every widget
///
/// The cache is immutable once built, so a single process-wide instance can
/// be read from anywhere without locking.
fn shades() -> &'static PatternCache {
    static SHADES: OnceLock<PatternCache> = OnceLock::new();
    SHADES.get_or_init(PatternCache::new)
}

/// Brightness of a gauge's filled portion
const GAUGE_FILL_BRIGHTNESS: f32 = 0.25;

/// Border thickness around a gauge's track, in pixels
const GAUGE_BORDER: f32 = 2.0;

/// A horizontal level bar
///
/// Draws a black border, a white track, and a dithered fill proportional to
/// the current value. While focused, LEFT/RIGHT presses step the value.
///
/// # Examples
///
/// ```
/// use monoview::core::view::widgets::Gauge;
///
/// let mut gauge = Gauge::new(0.5);
/// gauge.set_value(1.4);
/// assert_eq!(gauge.value(), 1.0); // clamped
/// ```
pub struct Gauge {
    value: f32,
    step: f32,
}

impl Gauge {
    /// Create a gauge at the given level, clamped to `[0, 1]`
    pub fn new(value: f32) -> Self {
        Self {
            value: value.clamp(0.0, 1.0),
            step: 0.1,
        }
    }

    /// The current level in `[0, 1]`
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Set the level, clamping to `[0, 1]`
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 1.0);
    }

    /// Change the increment applied per focused LEFT/RIGHT press
    pub fn set_step(&mut self, step: f32) {
        self.step = step;
    }
}

impl Widget for Gauge {
    fn draw(&self, frame_rect: Rect, frame: &mut FrameBuffer) {
        fill_rect(&frame_rect, Color::Black, frame);

        let track = frame_rect.inset(EdgeInsets::uniform(GAUGE_BORDER));
        fill_rect(&track, Color::White, frame);

        let filled = Rect::new(track.x, track.y, track.width * self.value, track.height);
        fill_rect(&filled, shades().nearest(GAUGE_FILL_BRIGHTNESS), frame);
    }

    fn process(&mut self, input: &Input, focused: bool) -> bool {
        if !focused {
            return false;
        }

        let before = self.value;
        if input.pressed.contains(Buttons::RIGHT) {
            self.set_value(self.value + self.step);
        }
        if input.pressed.contains(Buttons::LEFT) {
            self.set_value(self.value - self.step);
        }
        self.value != before
    }
}

/// Which way a [`Chevron`] points
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowDirection {
    /// Apex on the view's left edge
    Left,
    /// Apex on the view's right edge
    Right,
}

/// A directional chevron indicator
///
/// Two triangle fills: a solid arrowhead spanning the view's frame, then a
/// smaller carve in white that leaves an angled band. The stroke width is
/// the band's approximate thickness in pixels.
pub struct Chevron {
    direction: ArrowDirection,
    stroke: f32,
}

impl Chevron {
    /// Create a chevron pointing the given way
    pub fn new(direction: ArrowDirection) -> Self {
        Self {
            direction,
            stroke: 4.0,
        }
    }

    /// The pointing direction
    pub fn direction(&self) -> ArrowDirection {
        self.direction
    }
}

impl Widget for Chevron {
    fn draw(&self, frame_rect: Rect, frame: &mut FrameBuffer) {
        let r = frame_rect;
        let t = self.stroke;

        let (head, carve) = match self.direction {
            ArrowDirection::Left => (
                Triangle::new(
                    Point::new(r.x, r.mid_y()),
                    Point::new(r.max_x(), r.y),
                    Point::new(r.max_x(), r.max_y()),
                ),
                Triangle::new(
                    Point::new(r.x + 2.0 * t, r.mid_y()),
                    Point::new(r.max_x(), r.y + t),
                    Point::new(r.max_x(), r.max_y() - t),
                ),
            ),
            ArrowDirection::Right => (
                Triangle::new(
                    Point::new(r.max_x(), r.mid_y()),
                    Point::new(r.x, r.y),
                    Point::new(r.x, r.max_y()),
                ),
                Triangle::new(
                    Point::new(r.max_x() - 2.0 * t, r.mid_y()),
                    Point::new(r.x, r.y + t),
                    Point::new(r.x, r.max_y() - t),
                ),
            ),
        };

        fill_triangle(&head, Color::Black, frame);
        fill_triangle(&carve, Color::White, frame);
    }
}

/// A horizontal sweep through the dither shades
///
/// Splits its frame into equal swatches and fills each with the cached
/// pattern nearest its brightness, darkest on the left.
pub struct BrightnessRamp {
    steps: usize,
}

impl BrightnessRamp {
    /// Create a ramp with the given number of swatches (at least two)
    pub fn new(steps: usize) -> Self {
        Self {
            steps: steps.max(2),
        }
    }
}

impl Widget for BrightnessRamp {
    fn draw(&self, frame_rect: Rect, frame: &mut FrameBuffer) {
        let swatch_width = frame_rect.width / self.steps as f32;
        for index in 0..self.steps {
            let brightness = index as f32 / (self.steps - 1) as f32;
            let swatch = Rect::new(
                frame_rect.x + swatch_width * index as f32,
                frame_rect.y,
                swatch_width,
                frame_rect.height,
            );
            fill_rect(&swatch, shades().nearest(brightness), frame);
        }
    }
}
