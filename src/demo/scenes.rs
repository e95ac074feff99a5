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

//! Demo scenes
//!
//! Each scene is a prebuilt [`Screen`] exercising a slice of the toolkit:
//! `gallery` arranges the stock widgets, `dither` sweeps the shade cache,
//! and `fan` animates a spinning fan of filled triangles.

use std::f32::consts::TAU;

use crate::core::display::FrameBuffer;
use crate::core::error::{MonoviewError, Result};
use crate::core::geometry::{Point, Rect};
use crate::core::graphics::{fill_triangle, Color, Triangle};
use crate::core::view::widgets::{ArrowDirection, BrightnessRamp, Chevron, Gauge};
use crate::core::view::{Input, Screen, View, Widget};

/// Names accepted by [`build`]
pub const SCENES: &[&str] = &["gallery", "dither", "fan"];

/// Build the named scene
///
/// # Errors
///
/// Returns [`MonoviewError::UnknownScene`] for names not in [`SCENES`].
pub fn build(name: &str) -> Result<Screen> {
    match name {
        "gallery" => Ok(gallery()),
        "dither" => Ok(dither()),
        "fan" => Ok(fan()),
        other => Err(MonoviewError::UnknownScene(other.to_string())),
    }
}

/// The stock widgets arranged on one screen
fn gallery() -> Screen {
    let mut screen = Screen::new();
    let root = screen.root();
    screen.tree_mut().get_mut(root).background = Color::White;

    let tree = screen.tree_mut();
    tree.insert(
        root,
        View::with_background(Rect::new(0.0, 0.0, 400.0, 24.0), Color::Black),
    );
    tree.insert(
        root,
        View::with_background(Rect::new(20.0, 40.0, 360.0, 64.0), Color::dithered(0.85)),
    );

    tree.insert(
        root,
        View::with_widget(
            Rect::new(32.0, 60.0, 24.0, 24.0),
            Chevron::new(ArrowDirection::Left),
        ),
    );
    let gauge = tree.insert(
        root,
        View::with_widget(Rect::new(72.0, 64.0, 256.0, 16.0), Gauge::new(0.4)),
    );
    tree.insert(
        root,
        View::with_widget(
            Rect::new(344.0, 60.0, 24.0, 24.0),
            Chevron::new(ArrowDirection::Right),
        ),
    );

    tree.insert(
        root,
        View::with_widget(Rect::new(20.0, 140.0, 360.0, 32.0), BrightnessRamp::new(16)),
    );
    tree.insert(
        root,
        View::with_background(Rect::new(20.0, 196.0, 360.0, 24.0), Color::dithered(0.5)),
    );

    screen.focus_on(gauge);
    screen
}

/// Stacked brightness ramps at increasing resolution
fn dither() -> Screen {
    let mut screen = Screen::new();
    let root = screen.root();
    screen.tree_mut().get_mut(root).background = Color::White;

    let tree = screen.tree_mut();
    for (index, steps) in [2usize, 4, 8, 16, 32, 64].iter().enumerate() {
        tree.insert(
            root,
            View::with_widget(
                Rect::new(20.0, 16.0 + index as f32 * 36.0, 360.0, 28.0),
                BrightnessRamp::new(*steps),
            ),
        );
    }
    screen
}

/// A spinning fan of filled triangles
fn fan() -> Screen {
    let mut screen = Screen::new();
    let root = screen.root();
    screen.tree_mut().get_mut(root).background = Color::White;

    let tree = screen.tree_mut();
    tree.insert(root, View::with_widget(Rect::display(), FanWidget::new()));
    screen
}

/// Number of blades in the fan scene
const FAN_BLADES: u32 = 8;

/// Rotation per processed frame, in radians
const FAN_STEP: f32 = 0.06;

/// Angular width of one blade, in radians
const FAN_BLADE_ARC: f32 = 0.35;

/// Widget that redraws a rotating triangle fan every frame
///
/// The rotation advances once per processed frame, so the animation is a
/// pure function of how many updates have run.
pub struct FanWidget {
    phase: u32,
}

impl FanWidget {
    /// Create a fan at its starting rotation
    pub fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Default for FanWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for FanWidget {
    fn draw(&self, frame_rect: Rect, frame: &mut FrameBuffer) {
        let center = frame_rect.center();
        let radius = (frame_rect.width.min(frame_rect.height) / 2.0) - 8.0;
        let rotation = self.phase as f32 * FAN_STEP;

        for blade in 0..FAN_BLADES {
            let angle = rotation + blade as f32 * (TAU / FAN_BLADES as f32);
            let tip = Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            );
            let trailing = Point::new(
                center.x + radius * (angle + FAN_BLADE_ARC).cos(),
                center.y + radius * (angle + FAN_BLADE_ARC).sin(),
            );

            let color = if blade % 2 == 0 {
                Color::Black
            } else {
                Color::dithered(0.5)
            };
            fill_triangle(&Triangle::new(center, tip, trailing), color, frame);
        }
    }

    fn process(&mut self, _input: &Input, _focused: bool) -> bool {
        self.phase = self.phase.wrapping_add(1);
        true
    }
}
