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

//! Precomputed dither pattern cache
//!
//! Generating a Bayer pattern walks all 64 matrix cells; widgets that shade
//! by brightness every frame would otherwise recompute the same tiles over
//! and over. The cache computes all 256 patterns once, one per 8-bit
//! brightness level, and answers lookups from the table. It is immutable
//! after construction and safe to share between any number of readers.

use crate::core::graphics::color::{Color, BitPattern, PATTERN_MASK_ALWAYS_DRAW};

/// A read-only cache of Bayer patterns for brightness levels 0-255
///
/// Each entry is a pure function of its index: entry `i` holds the pattern
/// of [`Color::dithered`]`(i / 255.0)`, so rebuilding the cache always
/// reproduces bit-identical tiles.
///
/// # Examples
///
/// ```
/// use monoview::core::graphics::{Color, PatternCache};
///
/// let cache = PatternCache::new();
///
/// // Equivalent to Color::dithered(0.5), without recomputing the tile
/// let gray = cache.nearest(0.5);
/// assert_eq!(gray, cache.get(128));
/// ```
pub struct PatternCache {
    patterns: Vec<BitPattern>,
}

impl PatternCache {
    /// Number of cached brightness levels
    pub const LEVELS: usize = 256;

    /// Build the cache by generating every brightness level
    ///
    /// # Panics
    ///
    /// Panics if a generated color fails to decompose into a pattern. The
    /// generator returns a pattern for every input, so this is a contract
    /// violation and not a reachable runtime condition; a fatal-class log
    /// record is emitted before the panic.
    pub fn new() -> Self {
        let mut patterns = Vec::with_capacity(Self::LEVELS);
        for value in 0..Self::LEVELS {
            let lightness = value as f32 / 255.0;
            let Color::Pattern { pattern, .. } = Color::dithered(lightness) else {
                log::error!("dither generator returned a non-pattern color for level {value}");
                panic!("dither generator returned a non-pattern color");
            };
            patterns.push(pattern);
        }
        Self { patterns }
    }

    /// Look up the pattern at a brightness level, as a drawable color
    ///
    /// The stored tile is wrapped back into [`Color::Pattern`] with the
    /// always-draw mask.
    pub fn get(&self, index: u8) -> Color {
        Color::Pattern {
            pattern: self.patterns[index as usize],
            mask: PATTERN_MASK_ALWAYS_DRAW,
        }
    }

    /// Look up the pattern nearest a fractional brightness
    ///
    /// Brightness values from 0.0 to 1.0 map onto the 256 levels: the input
    /// is scaled by 255, rounded to the nearest integer with ties away from
    /// zero, and clamped into range, so out-of-range inputs saturate at the
    /// solid tiles.
    ///
    /// # Arguments
    ///
    /// * `brightness` - Gray level, nominally in `[0, 1]`
    pub fn nearest(&self, brightness: f32) -> Color {
        let mut level = brightness * 255.0;
        level = level.round();
        level = level.max(0.0);
        level = level.min(255.0);
        self.get(level as u8)
    }

    /// Iterate over all cached levels in brightness order
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.patterns.iter().map(|pattern| Color::Pattern {
            pattern: *pattern,
            mask: PATTERN_MASK_ALWAYS_DRAW,
        })
    }

    /// Number of cached entries
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the cache holds no entries
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
