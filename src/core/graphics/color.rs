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

//! Colors and ordered-dither patterns
//!
//! A monochrome display only knows black and white, so intermediate gray
//! levels are approximated with an 8×8 repeating bit pattern selected by a
//! Bayer threshold matrix. The [`Color`] type is a tagged union over the
//! solid values, a no-op clear sentinel, and a pattern paired with a draw
//! mask; the scanline writer dispatches on the tag.
//!
//! # References
//!
//! - [Ordered dithering](https://en.wikipedia.org/wiki/Ordered_dithering)

/// An 8×8 repeating tile, one byte per row
///
/// Bit `c` of row byte `r` (`1 << c`) covers every pixel whose coordinates
/// satisfy `x % 8 == c` and `y % 8 == r`. A set bit is a white pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitPattern(pub [u8; 8]);

/// A pattern mask whose bits are all opaque: every pattern bit is drawn
pub const PATTERN_MASK_ALWAYS_DRAW: BitPattern = BitPattern([0xFF; 8]);

/// A pattern mask whose bits are all transparent: nothing is drawn
pub const PATTERN_MASK_NEVER_DRAW: BitPattern = BitPattern([0x00; 8]);

/// The classic 8×8 Bayer threshold matrix, values 0-63
const BAYER_MATRIX: [[u8; 8]; 8] = [
    [0, 32, 8, 40, 2, 34, 10, 42],
    [48, 16, 56, 24, 50, 18, 58, 26],
    [12, 44, 4, 36, 14, 46, 6, 38],
    [60, 28, 52, 20, 62, 30, 54, 22],
    [3, 35, 11, 43, 1, 33, 9, 41],
    [51, 19, 59, 27, 49, 17, 57, 25],
    [15, 47, 7, 39, 13, 45, 5, 37],
    [63, 31, 55, 23, 61, 29, 53, 21],
];

/// A drawable color
///
/// `Clear` is a fast-path sentinel: every fill routine returns before
/// touching the frame buffer when asked to draw with it. `Pattern` carries
/// the 8×8 tile inline together with a draw mask; mask bits that are clear
/// leave the underlying frame-buffer pixel untouched.
///
/// # Examples
///
/// ```
/// use monoview::core::graphics::Color;
///
/// // A 50% gray approximation as a repeating bit pattern
/// let gray = Color::dithered(0.5);
/// assert!(matches!(gray, Color::Pattern { .. }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    /// Solid black
    Black,
    /// Solid white
    White,
    /// Draw nothing
    Clear,
    /// An 8×8 repeating bit pattern with a draw mask
    Pattern {
        /// The tile to repeat; set bits are white
        pattern: BitPattern,
        /// Which tile bits are opaque
        mask: BitPattern,
    },
}

impl Color {
    /// Generate the Bayer pattern approximating the given lightness
    ///
    /// Lightness runs from 0.0 (black) to 1.0 (white). The threshold is
    /// `(1 - lightness) × 64` truncated to an 8-bit value, and a tile bit is
    /// set exactly when its matrix cell is at or above the threshold. Full
    /// lightness therefore yields the all-set (solid white) tile and zero
    /// lightness the all-clear (solid black) tile.
    ///
    /// The result is deterministic: equal inputs produce bit-identical
    /// patterns.
    ///
    /// # Arguments
    ///
    /// * `lightness` - Gray level in `[0, 1]`
    ///
    /// # Examples
    ///
    /// ```
    /// use monoview::core::graphics::{Color, PATTERN_MASK_ALWAYS_DRAW};
    ///
    /// let Color::Pattern { pattern, mask } = Color::dithered(1.0) else {
    ///     unreachable!();
    /// };
    /// assert_eq!(pattern.0, [0xFF; 8]);
    /// assert_eq!(mask, PATTERN_MASK_ALWAYS_DRAW);
    /// ```
    pub fn dithered(lightness: f32) -> Self {
        let mut pattern = [0u8; 8];
        let threshold = ((1.0 - lightness) * 64.0) as u8;
        for (row, matrix_row) in BAYER_MATRIX.iter().enumerate() {
            for (col, cell) in matrix_row.iter().enumerate() {
                if *cell >= threshold {
                    pattern[row] |= 1 << col;
                } else {
                    pattern[row] &= !(1 << col);
                }
            }
        }

        Color::Pattern {
            pattern: BitPattern(pattern),
            mask: PATTERN_MASK_ALWAYS_DRAW,
        }
    }
}
