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

//! Stack-based navigation
//!
//! A navigation stack holds multiple screens; only the topmost one receives
//! updates, all others are suspended until they are exposed again.

use crate::core::display::FrameBuffer;
use crate::core::view::input::Input;
use crate::core::view::screen::Screen;

/// A stack of screens with topmost-only updates
///
/// # Examples
///
/// ```
/// use monoview::core::view::{NavigationStack, Screen};
///
/// let mut nav = NavigationStack::new(Screen::new());
/// nav.push(Screen::new());
/// assert_eq!(nav.len(), 2);
///
/// nav.pop();
/// assert_eq!(nav.len(), 1);
/// ```
pub struct NavigationStack {
    screens: Vec<Screen>,
}

impl NavigationStack {
    /// Create a stack with its root screen
    pub fn new(root: Screen) -> Self {
        Self {
            screens: vec![root],
        }
    }

    /// Number of screens on the stack
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Whether the stack holds no screens
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// The topmost screen, if any
    pub fn top(&self) -> Option<&Screen> {
        self.screens.last()
    }

    /// The topmost screen mutably, if any
    pub fn top_mut(&mut self) -> Option<&mut Screen> {
        self.screens.last_mut()
    }

    /// Push a screen, making it the topmost
    pub fn push(&mut self, screen: Screen) {
        self.screens.push(screen);
    }

    /// Pop and return the topmost screen
    ///
    /// The newly exposed screen is marked dirty so its stale contents are
    /// repainted on the next update.
    pub fn pop(&mut self) -> Option<Screen> {
        let popped = self.screens.pop();
        if popped.is_some() {
            if let Some(top) = self.screens.last_mut() {
                let root = top.root();
                top.tree_mut().mark_dirty(root);
            }
        }
        popped
    }

    /// Run one update cycle on the topmost screen
    ///
    /// Suspended screens receive nothing. Returns whether a render pass
    /// ran; an empty stack never renders.
    pub fn update(&mut self, input: &Input, frame: &mut FrameBuffer) -> bool {
        match self.screens.last_mut() {
            Some(top) => top.update(input, frame),
            None => false,
        }
    }
}
