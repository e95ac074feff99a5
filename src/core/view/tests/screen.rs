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

//! Unit tests for the per-frame driver

use crate::core::display::FrameBuffer;
use crate::core::geometry::Rect;
use crate::core::graphics::Color;
use crate::core::view::{Input, Screen, View, Widget};

/// Widget that requests a redraw on every processed frame
struct AlwaysChanging;

impl Widget for AlwaysChanging {
    fn process(&mut self, _input: &Input, _focused: bool) -> bool {
        true
    }
}

/// Widget that grows its frame during layout
struct Growing;

impl Widget for Growing {
    fn layout(&mut self, frame_rect: &mut Rect) {
        frame_rect.width = 100.0;
    }
}

#[test]
fn test_first_update_renders_then_settles() {
    let mut screen = Screen::new();
    let mut frame = FrameBuffer::new();

    assert!(screen.update(&Input::idle(), &mut frame));
    assert!(!screen.update(&Input::idle(), &mut frame));
}

#[test]
fn test_clean_tree_leaves_the_buffer_untouched() {
    let mut screen = Screen::new();
    let mut frame = FrameBuffer::new();
    screen.update(&Input::idle(), &mut frame);

    // Scribble on the buffer; a clean tree must not repaint over it
    frame.set_pixel(33, 44, false);
    assert!(!screen.update(&Input::idle(), &mut frame));
    assert!(!frame.pixel(33, 44));
}

#[test]
fn test_render_pass_clears_to_white_first() {
    let mut screen = Screen::new();
    let mut frame = FrameBuffer::new();
    frame.clear(false);

    assert!(screen.update(&Input::idle(), &mut frame));
    // Root background is clear, so the white wash is all that remains
    assert_eq!(frame.black_pixel_count(), 0);
}

#[test]
fn test_render_pass_draws_the_tree() {
    let mut screen = Screen::new();
    let root = screen.root();
    screen.tree_mut().insert(
        root,
        View::with_background(Rect::new(10.0, 10.0, 20.0, 20.0), Color::Black),
    );

    let mut frame = FrameBuffer::new();
    screen.update(&Input::idle(), &mut frame);
    assert!(!frame.pixel(15, 15));
    assert!(frame.pixel(50, 50));
}

#[test]
fn test_update_clears_every_flag_after_drawing() {
    let mut screen = Screen::new();
    let root = screen.root();
    let panel = screen
        .tree_mut()
        .insert(root, View::new(Rect::new(0.0, 0.0, 50.0, 50.0)));
    let child = screen
        .tree_mut()
        .insert(panel, View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));

    let mut frame = FrameBuffer::new();
    screen.update(&Input::idle(), &mut frame);

    assert!(!screen.tree().is_dirty(root));
    assert!(!screen.tree().is_dirty(panel));
    assert!(!screen.tree().is_dirty(child));
}

#[test]
fn test_widget_change_requests_redraw() {
    let mut screen = Screen::new();
    let root = screen.root();
    screen.tree_mut().insert(
        root,
        View::with_widget(Rect::new(0.0, 0.0, 10.0, 10.0), AlwaysChanging),
    );

    let mut frame = FrameBuffer::new();
    assert!(screen.update(&Input::idle(), &mut frame));
    // The widget keeps reporting changes, so every update renders
    assert!(screen.update(&Input::idle(), &mut frame));
    assert!(screen.update(&Input::idle(), &mut frame));
}

#[test]
fn test_layout_runs_before_drawing() {
    let mut screen = Screen::new();
    let root = screen.root();
    let panel = screen.tree_mut().insert(
        root,
        View::with_widget(Rect::new(0.0, 0.0, 10.0, 10.0), Growing),
    );

    let mut frame = FrameBuffer::new();
    screen.update(&Input::idle(), &mut frame);
    assert_eq!(screen.tree().get(panel).frame.width, 100.0);
}

#[test]
fn test_focus_on_moves_focus_between_subtrees() {
    let mut screen = Screen::new();
    let root = screen.root();
    let first = screen
        .tree_mut()
        .insert(root, View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));
    let second = screen
        .tree_mut()
        .insert(root, View::new(Rect::new(20.0, 0.0, 10.0, 10.0)));

    screen.focus_on(first);
    assert!(screen.tree().is_focused(first));
    assert!(!screen.tree().is_focused(second));

    screen.focus_on(second);
    assert!(!screen.tree().is_focused(first));
    assert!(screen.tree().is_focused(second));
}

#[test]
fn test_focus_on_schedules_a_render_pass() {
    let mut screen = Screen::new();
    let root = screen.root();
    let panel = screen
        .tree_mut()
        .insert(root, View::new(Rect::new(0.0, 0.0, 10.0, 10.0)));

    let mut frame = FrameBuffer::new();
    screen.update(&Input::idle(), &mut frame);
    assert!(!screen.tree().is_dirty(root));

    screen.focus_on(panel);
    assert!(screen.update(&Input::idle(), &mut frame));
}
