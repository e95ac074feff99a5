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

//! Per-frame driver
//!
//! A screen owns one view tree and runs its update cycle: process input,
//! check the root's render flag, and only when it is set clear the
//! display to white, lay out, draw, and mark the whole tree clean again.

use crate::core::display::FrameBuffer;
use crate::core::view::input::Input;
use crate::core::view::{ViewId, ViewTree};

/// A view tree together with its frame-synchronous update cycle
///
/// # Examples
///
/// ```
/// use monoview::core::display::FrameBuffer;
/// use monoview::core::view::{Input, Screen};
///
/// let mut screen = Screen::new();
/// let mut frame = FrameBuffer::new();
///
/// // The initial tree is dirty, so the first update renders
/// assert!(screen.update(&Input::idle(), &mut frame));
/// // Nothing changed since, so the second does not
/// assert!(!screen.update(&Input::idle(), &mut frame));
/// ```
pub struct Screen {
    tree: ViewTree,
}

impl Screen {
    /// Create a screen with an empty display-sized root view
    pub fn new() -> Self {
        Self {
            tree: ViewTree::with_display_root(),
        }
    }

    /// Create a screen around an existing tree
    pub fn from_tree(tree: ViewTree) -> Self {
        Self { tree }
    }

    /// The underlying view tree
    pub fn tree(&self) -> &ViewTree {
        &self.tree
    }

    /// The underlying view tree, mutably
    pub fn tree_mut(&mut self) -> &mut ViewTree {
        &mut self.tree
    }

    /// The root view's identifier
    pub fn root(&self) -> ViewId {
        self.tree.root()
    }

    /// Move input focus to the given view's subtree
    ///
    /// Every other top-level subtree loses focus, and a render pass is
    /// scheduled so focus-dependent appearance updates.
    pub fn focus_on(&mut self, id: ViewId) {
        let root = self.tree.root();
        for index in 0..self.tree.children(root).len() {
            let child = self.tree.children(root)[index];
            self.tree.set_focused(child, false);
        }
        self.tree.set_focused(id, true);
        self.tree.mark_dirty(root);
    }

    /// Perform a single update cycle
    ///
    /// Input is processed every frame. Rendering is gated on the root's
    /// render flag: when it is clear the frame buffer is left untouched
    /// and `false` is returned. When set, the display is cleared to white,
    /// the tree lays out and draws, and the root flag is cleared,
    /// cascading clean through every view.
    pub fn update(&mut self, input: &Input, frame: &mut FrameBuffer) -> bool {
        self.tree.process(input);

        let root = self.tree.root();
        if !self.tree.is_dirty(root) {
            return false;
        }

        frame.clear(true);
        self.tree.layout();
        self.tree.draw(frame);
        self.tree.clear_dirty(root);

        log::trace!("screen: render pass complete");
        true
    }
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}
