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

//! View tree and damage propagation
//!
//! Views form a tree: a parent exclusively owns its children, children are
//! painted in order after their parent's background, and every node carries
//! a render flag that decides whether the next frame is drawn at all.
//!
//! # Damage protocol
//!
//! Each view starts out needing a render pass, so everything is drawn at
//! least once. Whenever a node's flag changes, the new value propagates
//! toward the root while the parent's flag differs; the root, having no
//! parent, pushes the value down through its descendants instead. A single
//! dirty leaf therefore forces the whole tree dirty, and clearing the root
//! after a render pass cascades clean through every view in one sweep.
//! Damage is whole-tree and binary; there are no partial dirty regions.
//!
//! # Ownership
//!
//! Nodes live in an arena indexed by [`ViewId`]; the parent link is a plain
//! index, never an owning reference, so ownership flows strictly from
//! parent to children and removal cannot leave a dangling owner behind.

use bitflags::bitflags;

use crate::core::display::FrameBuffer;
use crate::core::geometry::Rect;
use crate::core::graphics::{fill_rect, Color};

pub mod input;
mod navigation;
mod screen;
pub mod widgets;
#[cfg(test)]
mod tests;

pub use input::{Buttons, Input};
pub use navigation::NavigationStack;
pub use screen::Screen;

bitflags! {
    /// Per-view state bits
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ViewFlags: u8 {
        /// The subtree's drawn state is stale and must be redrawn
        const NEEDS_RENDER = 1 << 0;
        /// The view and its subtree are skipped while drawing
        const HIDDEN = 1 << 1;
        /// The view currently holds input focus
        const FOCUSED = 1 << 2;
    }
}

/// Handle to a view stored in a [`ViewTree`]
///
/// Identifiers stay valid until the view is removed from the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(usize);

/// Behavior attached to a view
///
/// The tree's traversals call these hooks generically, so concrete widgets
/// stay independent of each other. All three have no-op defaults; a widget
/// implements only what it needs.
pub trait Widget {
    /// Draw custom content on top of the view's background fill
    fn draw(&self, frame_rect: Rect, frame: &mut FrameBuffer) {
        let _ = (frame_rect, frame);
    }

    /// Adjust the view's frame before the draw traversal
    fn layout(&mut self, frame_rect: &mut Rect) {
        let _ = frame_rect;
    }

    /// React to this frame's input; return `true` to request a redraw
    fn process(&mut self, input: &Input, focused: bool) -> bool {
        let _ = (input, focused);
        false
    }
}

/// A single drawable node of the tree
pub struct View {
    /// The rectangle the view occupies, in display coordinates
    pub frame: Rect,
    /// Color painted behind the view's content
    pub background: Color,
    flags: ViewFlags,
    parent: Option<ViewId>,
    children: Vec<ViewId>,
    widget: Option<Box<dyn Widget>>,
}

impl View {
    /// Create a view with a clear background and no widget
    ///
    /// New views need a render pass, so every view is drawn at least once.
    pub fn new(frame: Rect) -> Self {
        Self {
            frame,
            background: Color::Clear,
            flags: ViewFlags::NEEDS_RENDER,
            parent: None,
            children: Vec::new(),
            widget: None,
        }
    }

    /// Create a view with a background color
    pub fn with_background(frame: Rect, background: Color) -> Self {
        let mut view = Self::new(frame);
        view.background = background;
        view
    }

    /// Create a view driven by a widget
    pub fn with_widget(frame: Rect, widget: impl Widget + 'static) -> Self {
        let mut view = Self::new(frame);
        view.widget = Some(Box::new(widget));
        view
    }

    /// Whether the view is skipped while drawing
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(ViewFlags::HIDDEN)
    }

    /// Whether the view holds input focus
    pub fn is_focused(&self) -> bool {
        self.flags.contains(ViewFlags::FOCUSED)
    }
}

/// Tree of views plus the damage state that gates rendering
///
/// # Examples
///
/// ```
/// use monoview::core::geometry::Rect;
/// use monoview::core::graphics::Color;
/// use monoview::core::view::{View, ViewTree};
///
/// let mut tree = ViewTree::with_display_root();
/// let panel = tree.insert(
///     tree.root(),
///     View::with_background(Rect::new(10.0, 10.0, 80.0, 40.0), Color::Black),
/// );
///
/// tree.clear_dirty(tree.root());
/// assert!(!tree.is_dirty(panel));
///
/// tree.mark_dirty(panel);
/// assert!(tree.is_dirty(tree.root()));
/// ```
pub struct ViewTree {
    nodes: Vec<Option<View>>,
    free: Vec<usize>,
    root: ViewId,
}

impl ViewTree {
    /// Create a tree from its root view
    pub fn new(root_view: View) -> Self {
        let mut tree = Self {
            nodes: Vec::new(),
            free: Vec::new(),
            root: ViewId(0),
        };
        tree.root = tree.alloc(root_view);
        tree
    }

    /// Create a tree whose root covers the whole display
    pub fn with_display_root() -> Self {
        Self::new(View::new(Rect::display()))
    }

    /// The root view's identifier
    pub fn root(&self) -> ViewId {
        self.root
    }

    /// Whether the identifier refers to a live view
    pub fn contains(&self, id: ViewId) -> bool {
        self.nodes.get(id.0).is_some_and(|slot| slot.is_some())
    }

    /// Borrow a view
    ///
    /// # Panics
    ///
    /// Panics if the view was removed from the tree.
    pub fn get(&self, id: ViewId) -> &View {
        self.nodes[id.0].as_ref().expect("view was removed")
    }

    /// Mutably borrow a view
    ///
    /// Direct mutation does not touch the render flag; callers changing
    /// anything visible should follow up with [`ViewTree::mark_dirty`].
    ///
    /// # Panics
    ///
    /// Panics if the view was removed from the tree.
    pub fn get_mut(&mut self, id: ViewId) -> &mut View {
        self.nodes[id.0].as_mut().expect("view was removed")
    }

    /// The view's parent, or `None` for the root
    pub fn parent(&self, id: ViewId) -> Option<ViewId> {
        self.get(id).parent
    }

    /// The view's children in paint order
    pub fn children(&self, id: ViewId) -> &[ViewId] {
        &self.get(id).children
    }

    /// Add a view as the last child of a parent
    ///
    /// The parent is marked dirty so the new child gets drawn.
    pub fn insert(&mut self, parent: ViewId, view: View) -> ViewId {
        let index = self.children(parent).len();
        self.insert_at(parent, index, view)
    }

    /// Add a view as a child at a given position in the paint order
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the parent's child count.
    pub fn insert_at(&mut self, parent: ViewId, index: usize, view: View) -> ViewId {
        let id = self.alloc(view);
        self.get_mut(id).parent = Some(parent);
        self.get_mut(parent).children.insert(index, id);
        self.mark_dirty(parent);
        id
    }

    /// Remove a view and its whole subtree from the tree
    ///
    /// Removing the root is a no-op. The removed identifiers become
    /// invalid; the former parent is marked dirty so the vacated region is
    /// repainted.
    pub fn remove(&mut self, id: ViewId) {
        let Some(parent) = self.parent(id) else {
            return;
        };
        let siblings = &mut self.get_mut(parent).children;
        if let Some(position) = siblings.iter().position(|child| *child == id) {
            siblings.remove(position);
        }
        self.free_subtree(id);
        self.mark_dirty(parent);
    }

    /// Whether the view needs a render pass
    pub fn is_dirty(&self, id: ViewId) -> bool {
        self.get(id).flags.contains(ViewFlags::NEEDS_RENDER)
    }

    /// Signal that the view's contents are stale
    pub fn mark_dirty(&mut self, id: ViewId) {
        self.set_render_flag(id, true);
    }

    /// Signal that the view's contents have been drawn
    pub fn clear_dirty(&mut self, id: ViewId) {
        self.set_render_flag(id, false);
    }

    /// Show or hide a view, scheduling a repaint on change
    pub fn set_hidden(&mut self, id: ViewId, hidden: bool) {
        if self.get(id).is_hidden() == hidden {
            return;
        }
        self.get_mut(id).flags.set(ViewFlags::HIDDEN, hidden);
        self.mark_dirty(id);
    }

    /// Change a view's background color, scheduling a repaint
    pub fn set_background(&mut self, id: ViewId, background: Color) {
        self.get_mut(id).background = background;
        self.mark_dirty(id);
    }

    /// Whether the view holds input focus
    pub fn is_focused(&self, id: ViewId) -> bool {
        self.get(id).is_focused()
    }

    /// Grant or revoke focus for a view and its whole subtree
    pub fn set_focused(&mut self, id: ViewId, focused: bool) {
        self.get_mut(id).flags.set(ViewFlags::FOCUSED, focused);
        for index in 0..self.children(id).len() {
            let child = self.children(id)[index];
            self.set_focused(child, focused);
        }
    }

    /// Run the input hooks over the whole tree
    ///
    /// Views whose widget reports a change are marked dirty.
    pub fn process(&mut self, input: &Input) {
        self.process_node(self.root, input);
    }

    /// Run the layout hooks over the whole tree
    pub fn layout(&mut self) {
        self.layout_node(self.root);
    }

    /// Draw the whole tree into the frame buffer
    ///
    /// Hidden views are skipped along with their subtree. Each view fills
    /// its background first, then its widget content, then its children in
    /// order, so later siblings paint over earlier ones.
    pub fn draw(&self, frame: &mut FrameBuffer) {
        self.draw_node(self.root, frame);
    }

    fn alloc(&mut self, view: View) -> ViewId {
        match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = Some(view);
                ViewId(slot)
            }
            None => {
                self.nodes.push(Some(view));
                ViewId(self.nodes.len() - 1)
            }
        }
    }

    fn free_subtree(&mut self, id: ViewId) {
        let view = self.nodes[id.0].take().expect("view was removed");
        for child in view.children {
            self.free_subtree(child);
        }
        self.free.push(id.0);
    }

    /// Apply the damage transition rule
    ///
    /// The new value bubbles toward the root while the parent's flag
    /// differs; at the root it cascades down through every descendant
    /// instead. The upward check is what terminates the cascade: a child
    /// reached from above sees its parent already holding the new value.
    fn set_render_flag(&mut self, id: ViewId, value: bool) {
        self.get_mut(id).flags.set(ViewFlags::NEEDS_RENDER, value);
        match self.parent(id) {
            Some(parent) => {
                if self.is_dirty(parent) != value {
                    self.set_render_flag(parent, value);
                }
            }
            None => self.push_to_descendants(id, value),
        }
    }

    fn push_to_descendants(&mut self, id: ViewId, value: bool) {
        for index in 0..self.children(id).len() {
            let child = self.children(id)[index];
            self.get_mut(child).flags.set(ViewFlags::NEEDS_RENDER, value);
            self.push_to_descendants(child, value);
        }
    }

    fn process_node(&mut self, id: ViewId, input: &Input) {
        let focused = self.is_focused(id);
        if let Some(mut widget) = self.get_mut(id).widget.take() {
            if widget.process(input, focused) {
                self.mark_dirty(id);
            }
            self.get_mut(id).widget = Some(widget);
        }
        for index in 0..self.children(id).len() {
            let child = self.children(id)[index];
            self.process_node(child, input);
        }
    }

    fn layout_node(&mut self, id: ViewId) {
        if let Some(mut widget) = self.get_mut(id).widget.take() {
            let view = self.get_mut(id);
            let mut frame_rect = view.frame;
            widget.layout(&mut frame_rect);
            view.frame = frame_rect;
            view.widget = Some(widget);
        }
        for index in 0..self.children(id).len() {
            let child = self.children(id)[index];
            self.layout_node(child);
        }
    }

    fn draw_node(&self, id: ViewId, frame: &mut FrameBuffer) {
        let view = self.get(id);
        if view.is_hidden() {
            return;
        }
        fill_rect(&view.frame, view.background, frame);
        if let Some(widget) = &view.widget {
            widget.draw(view.frame, frame);
        }
        for child in &view.children {
            self.draw_node(*child, frame);
        }
    }
}
