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

//! Input snapshots
//!
//! The host samples its controls once per frame and hands the widgets an
//! immutable snapshot: which buttons are held, which went down this frame,
//! and which came up.

use bitflags::bitflags;

bitflags! {
    /// Physical buttons a widget can react to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Buttons: u8 {
        /// Primary action button
        const A = 1 << 0;
        /// Secondary action button
        const B = 1 << 1;
        /// D-pad up
        const UP = 1 << 2;
        /// D-pad down
        const DOWN = 1 << 3;
        /// D-pad left
        const LEFT = 1 << 4;
        /// D-pad right
        const RIGHT = 1 << 5;
    }
}

/// One frame's button state
///
/// # Examples
///
/// ```
/// use monoview::core::view::{Buttons, Input};
///
/// let input = Input::press(Buttons::RIGHT);
/// assert!(input.pressed.contains(Buttons::RIGHT));
/// assert!(input.released.is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Input {
    /// Buttons currently held down
    pub current: Buttons,
    /// Buttons that went down this frame
    pub pressed: Buttons,
    /// Buttons that came up this frame
    pub released: Buttons,
}

impl Input {
    /// A frame with no button activity
    pub const fn idle() -> Self {
        Self {
            current: Buttons::empty(),
            pressed: Buttons::empty(),
            released: Buttons::empty(),
        }
    }

    /// A frame where the given buttons just went down
    pub const fn press(buttons: Buttons) -> Self {
        Self {
            current: buttons,
            pressed: buttons,
            released: Buttons::empty(),
        }
    }
}
