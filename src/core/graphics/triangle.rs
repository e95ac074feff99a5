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

//! Triangle rasterization
//!
//! Implements scanline triangle fill with top-flat/bottom-flat
//! decomposition:
//!
//! 1. Sort vertices by Y coordinate
//! 2. Snap vertices to the pixel grid and validate drawability
//! 3. Split the triangle at the middle vertex
//! 4. Rasterize each half with incremental inverse slopes
//!
//! Splitting at the middle vertex reduces an arbitrary triangle to two
//! trapezoid-like regions that a single linear scanline sweep can fill,
//! O(height) instead of per-pixel point-in-triangle testing.
//!
//! # References
//!
//! - [Triangle Rasterization Tutorial](https://www.sunshine2k.de/coding/java/TriangleRasterization/TriangleRasterization.html)

use crate::core::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FrameBuffer};
use crate::core::geometry::Point;
use crate::core::graphics::color::Color;
use crate::core::graphics::scanline::draw_span;

/// A triangular face in two-dimensional space
///
/// # Examples
///
/// ```
/// use monoview::core::geometry::Point;
/// use monoview::core::graphics::Triangle;
///
/// let tri = Triangle::new(
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(0.0, 10.0),
/// );
/// assert_eq!(tri.signed_area(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// The first point of the face
    pub a: Point,
    /// The second point of the face
    pub b: Point,
    /// The third point of the face
    pub c: Point,
}

impl Triangle {
    /// Create a triangle from its three points
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self { a, b, c }
    }

    /// The face's signed area
    ///
    /// The sign encodes winding order, which 3D front ends use to cull
    /// back faces. The rasterizer itself does not consult it.
    pub fn signed_area(&self) -> f32 {
        (self.b.x - self.a.x) * (self.c.y - self.b.y)
            - (self.c.x - self.b.x) * (self.b.y - self.a.y)
    }
}

/// Sort a triangle's vertices by ascending Y
///
/// Three pairwise compare-and-swap steps; afterwards `a.y <= b.y <= c.y`.
fn sort_by_y(tri: &Triangle) -> Triangle {
    let mut sorted = *tri;
    if sorted.b.y < sorted.a.y {
        std::mem::swap(&mut sorted.a, &mut sorted.b);
    }
    if sorted.c.y < sorted.b.y {
        std::mem::swap(&mut sorted.b, &mut sorted.c);
    }
    if sorted.b.y < sorted.a.y {
        std::mem::swap(&mut sorted.a, &mut sorted.b);
    }
    sorted
}

/// Snap every vertex component to the pixel grid, flooring independently
fn floor_vertices(tri: &mut Triangle) {
    tri.a.x = tri.a.x.floor();
    tri.b.x = tri.b.x.floor();
    tri.c.x = tri.c.x.floor();

    tri.a.y = tri.a.y.floor();
    tri.b.y = tri.b.y.floor();
    tri.c.y = tri.c.y.floor();
}

/// Whether a sorted, grid-snapped triangle produces any pixels
///
/// Rejects zero-height triangles, triangles collapsed onto one vertical
/// line, and triangles whose vertical or horizontal span lies entirely
/// outside the display.
fn is_drawable(tri: &Triangle) -> bool {
    if tri.a.y == tri.c.y {
        return false;
    }
    if tri.a.x == tri.b.x && tri.b.x == tri.c.x {
        return false;
    }
    if tri.a.y >= DISPLAY_HEIGHT as f32 || tri.c.y < 0.0 {
        return false;
    }
    if tri.a.x < 0.0 && tri.b.x < 0.0 && tri.c.x < 0.0 {
        return false;
    }
    if tri.a.x >= DISPLAY_WIDTH as f32
        && tri.b.x >= DISPLAY_WIDTH as f32
        && tri.c.x >= DISPLAY_WIDTH as f32
    {
        return false;
    }
    true
}

/// Fill a triangle with a color
///
/// The enclosed pixels are written through the span writer; the result is
/// independent of the order the three vertices are given in, since they are
/// sorted internally. Degenerate and fully off-screen triangles write
/// nothing, as does the clear color.
///
/// # Algorithm
///
/// 1. Sort vertices by Y coordinate (`a.y <= b.y <= c.y`)
/// 2. Floor every vertex component to the pixel grid
/// 3. Reject degenerate and off-screen cases
/// 4. If one edge is already horizontal, fill directly as a flat-bottom or
///    flat-top triangle
/// 5. Otherwise split the A-C edge at the middle vertex's height and fill
///    the flat-top half `{B, cut, C}` followed by the flat-bottom half
///    `{A, B, cut}`
///
/// The order of those steps matters: flooring happens before the
/// drawability checks (it can change which degenerate case triggers), and
/// the flat-case checks are what guarantee the slope divisions below never
/// see a zero denominator.
///
/// # Arguments
///
/// * `tri` - The face to fill
/// * `color` - Fill color; [`Color::Clear`] writes nothing
/// * `frame` - Destination surface
///
/// # Examples
///
/// ```
/// use monoview::core::display::FrameBuffer;
/// use monoview::core::geometry::Point;
/// use monoview::core::graphics::{fill_triangle, Color, Triangle};
///
/// let mut frame = FrameBuffer::new();
/// let tri = Triangle::new(
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 30.0),
///     Point::new(20.0, 30.0),
/// );
/// fill_triangle(&tri, Color::Black, &mut frame);
///
/// assert!(!frame.pixel(10, 10)); // apex
/// assert!(!frame.pixel(0, 30)); // base, left corner
/// assert!(frame.pixel(30, 30)); // outside
/// ```
pub fn fill_triangle(tri: &Triangle, color: Color, frame: &mut FrameBuffer) {
    if matches!(color, Color::Clear) {
        return;
    }

    let mut sorted = sort_by_y(tri);
    floor_vertices(&mut sorted);

    if !is_drawable(&sorted) {
        return;
    }

    log::trace!(
        "fill_triangle: ({}, {}), ({}, {}), ({}, {})",
        sorted.a.x,
        sorted.a.y,
        sorted.b.x,
        sorted.b.y,
        sorted.c.x,
        sorted.c.y,
    );

    if sorted.b.y == sorted.c.y {
        fill_bottom_flat(&sorted, color, frame);
        return;
    }
    if sorted.a.y == sorted.b.y {
        fill_top_flat(&sorted, color, frame);
        return;
    }

    // General case: cut the A-C edge at B's height, then fill the two
    // flat halves either side of the cut.
    let t = (sorted.b.y - sorted.a.y) / (sorted.c.y - sorted.a.y);
    let cut = Point::new(sorted.a.x + t * (sorted.c.x - sorted.a.x), sorted.b.y);

    let top_half = Triangle::new(sorted.b, cut, sorted.c);
    let bottom_half = Triangle::new(sorted.a, sorted.b, cut);

    fill_top_flat(&top_half, color, frame);
    fill_bottom_flat(&bottom_half, color, frame);
}

/// Fill a triangle whose bottom edge is horizontal
///
/// The apex is `a`; `b` and `c` share the base row. Scanlines sweep from
/// the apex down to the base, both edge positions advancing by their
/// inverse slope per row.
fn fill_bottom_flat(tri: &Triangle, color: Color, frame: &mut FrameBuffer) {
    let top = tri.a;
    let mut left = tri.b;
    let mut right = tri.c;

    if left.x > right.x {
        std::mem::swap(&mut left.x, &mut right.x);
    }

    let inv_slope_left = (left.x - top.x) / (left.y - top.y);
    let inv_slope_right = (right.x - top.x) / (right.y - top.y);

    let mut x1 = top.x;
    let mut x2 = top.x;

    for y in (top.y as i32)..=(left.y as i32) {
        if (0..DISPLAY_HEIGHT as i32).contains(&y) {
            edge_span(x1, x2, y, color, frame);
        }
        x1 += inv_slope_left;
        x2 += inv_slope_right;
    }
}

/// Fill a triangle whose top edge is horizontal
///
/// The base runs from `a` to `b`; `c` is the bottom apex. Scanlines sweep
/// upward
/// from the apex to the base, both edge positions retreating by their
/// inverse slope per row.
fn fill_top_flat(tri: &Triangle, color: Color, frame: &mut FrameBuffer) {
    let bottom = tri.c;
    let mut left = tri.a;
    let mut right = tri.b;

    if left.x > right.x {
        std::mem::swap(&mut left.x, &mut right.x);
    }

    let inv_slope_left = (bottom.x - left.x) / (bottom.y - left.y);
    let inv_slope_right = (bottom.x - right.x) / (bottom.y - right.y);

    let mut x1 = bottom.x;
    let mut x2 = bottom.x;

    for y in ((left.y as i32)..=(bottom.y as i32)).rev() {
        if (0..DISPLAY_HEIGHT as i32).contains(&y) {
            edge_span(x1, x2, y, color, frame);
        }
        x1 -= inv_slope_left;
        x2 -= inv_slope_right;
    }
}

/// Hand one scanline's edge positions to the span writer
///
/// Reorders inverted endpoints, discards spans entirely off the display
/// horizontally, and truncates to integer columns.
fn edge_span(x1: f32, x2: f32, y: i32, color: Color, frame: &mut FrameBuffer) {
    let (x1, x2) = if x1 > x2 { (x2, x1) } else { (x1, x2) };
    if x2 < 0.0 || x1 as i32 >= DISPLAY_WIDTH as i32 {
        return;
    }
    draw_span(x1 as i32, x2 as i32, y, color, frame);
}
