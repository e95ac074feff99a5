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

//! Unit tests for the stock widgets

use crate::core::display::FrameBuffer;
use crate::core::geometry::Rect;
use crate::core::view::input::{Buttons, Input};
use crate::core::view::widgets::{ArrowDirection, BrightnessRamp, Chevron, Gauge};
use crate::core::view::Widget;

#[test]
fn test_gauge_clamps_its_value() {
    let mut gauge = Gauge::new(2.0);
    assert_eq!(gauge.value(), 1.0);
    gauge.set_value(-0.5);
    assert_eq!(gauge.value(), 0.0);
}

#[test]
fn test_gauge_draws_border_and_track() {
    let gauge = Gauge::new(0.0);
    let area = Rect::new(10.0, 10.0, 60.0, 12.0);

    let mut frame = FrameBuffer::new();
    gauge.draw(area, &mut frame);

    // Border corners are black, the empty track is white
    assert!(!frame.pixel(10, 10));
    assert!(!frame.pixel(69, 10));
    assert!(frame.pixel(30, 16));
}

#[test]
fn test_full_gauge_shades_its_track() {
    let gauge = Gauge::new(1.0);
    let area = Rect::new(10.0, 10.0, 60.0, 12.0);

    let mut frame = FrameBuffer::new();
    gauge.draw(area, &mut frame);

    // The dithered fill leaves at least some black inside the track
    let filled = (12..68)
        .flat_map(|x| (12..20).map(move |y| (x, y)))
        .filter(|(x, y)| !frame.pixel(*x, *y))
        .count();
    assert!(filled > 0);
}

#[test]
fn test_gauge_steps_only_while_focused() {
    let mut gauge = Gauge::new(0.5);
    let right = Input::press(Buttons::RIGHT);

    assert!(!gauge.process(&right, false));
    assert_eq!(gauge.value(), 0.5);

    assert!(gauge.process(&right, true));
    assert!((gauge.value() - 0.6).abs() < 1e-6);
}

#[test]
fn test_gauge_steps_down_and_saturates() {
    let mut gauge = Gauge::new(0.05);
    let left = Input::press(Buttons::LEFT);

    assert!(gauge.process(&left, true));
    assert_eq!(gauge.value(), 0.0);

    // Already at the floor: nothing changes, no redraw requested
    assert!(!gauge.process(&left, true));
}

#[test]
fn test_gauge_ignores_unrelated_buttons() {
    let mut gauge = Gauge::new(0.5);
    assert!(!gauge.process(&Input::press(Buttons::A), true));
    assert_eq!(gauge.value(), 0.5);
}

#[test]
fn test_chevron_paints_its_apex() {
    let area = Rect::new(100.0, 100.0, 24.0, 24.0);

    let left = Chevron::new(ArrowDirection::Left);
    let mut frame = FrameBuffer::new();
    left.draw(area, &mut frame);
    assert!(!frame.pixel(100, 112));

    let right = Chevron::new(ArrowDirection::Right);
    let mut frame = FrameBuffer::new();
    right.draw(area, &mut frame);
    assert!(!frame.pixel(123, 112));
}

#[test]
fn test_chevron_is_carved_hollow() {
    let area = Rect::new(100.0, 100.0, 24.0, 24.0);
    let chevron = Chevron::new(ArrowDirection::Left);

    let mut frame = FrameBuffer::new();
    chevron.draw(area, &mut frame);

    // The carve leaves the middle of the head white
    assert!(frame.pixel(118, 112));
}

#[test]
fn test_chevron_direction_accessor() {
    assert_eq!(
        Chevron::new(ArrowDirection::Right).direction(),
        ArrowDirection::Right
    );
}

#[test]
fn test_ramp_runs_dark_to_light() {
    let ramp = BrightnessRamp::new(8);
    let area = Rect::new(0.0, 0.0, 320.0, 16.0);

    let mut frame = FrameBuffer::new();
    ramp.draw(area, &mut frame);

    // Leftmost swatch is the all-black tile, rightmost the all-white one
    assert!(!frame.pixel(2, 4));
    assert!(frame.pixel(318, 4));
}

#[test]
fn test_ramp_brightness_is_monotonic() {
    let steps = 8;
    let ramp = BrightnessRamp::new(steps);
    let area = Rect::new(0.0, 0.0, 320.0, 16.0);

    let mut frame = FrameBuffer::new();
    ramp.draw(area, &mut frame);

    let swatch_width = 320 / steps;
    let mut previous = usize::MAX;
    for index in 0..steps {
        let black = (0..swatch_width)
            .flat_map(|dx| (0..16).map(move |y| (index * swatch_width + dx, y)))
            .filter(|(x, y)| !frame.pixel(*x, *y))
            .count();
        assert!(black <= previous, "swatch {index} got darker");
        previous = black;
    }
}
