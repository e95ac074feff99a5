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

//! PNG export
//!
//! Expands the packed 1-bit frame buffer into an 8-bit grayscale image so
//! rendered frames can be inspected off-device.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::core::display::{DISPLAY_HEIGHT, DISPLAY_WIDTH, FrameBuffer};
use crate::core::error::Result;

/// Write the frame buffer to a PNG file
///
/// White pixels become 255, black pixels 0. The output format follows the
/// file extension; use `.png`.
pub fn write_png(frame: &FrameBuffer, path: &Path) -> Result<()> {
    let mut img = GrayImage::new(DISPLAY_WIDTH as u32, DISPLAY_HEIGHT as u32);
    for y in 0..DISPLAY_HEIGHT {
        for x in 0..DISPLAY_WIDTH {
            let value = if frame.pixel(x, y) { 255 } else { 0 };
            img.put_pixel(x as u32, y as u32, Luma([value]));
        }
    }
    img.save(path)?;

    log::debug!("wrote frame to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Rect;
    use crate::core::graphics::{fill_rect, Color};

    #[test]
    fn test_written_png_round_trips() {
        let mut frame = FrameBuffer::new();
        fill_rect(&Rect::new(0.0, 0.0, 10.0, 10.0), Color::Black, &mut frame);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("frame.png");
        write_png(&frame, &path).unwrap();

        let reloaded = image::open(&path).unwrap().to_luma8();
        assert_eq!(reloaded.width(), DISPLAY_WIDTH as u32);
        assert_eq!(reloaded.height(), DISPLAY_HEIGHT as u32);
        assert_eq!(reloaded.get_pixel(5, 5), &Luma([0u8]));
        assert_eq!(reloaded.get_pixel(50, 50), &Luma([255u8]));
    }

    #[test]
    fn test_unwritable_path_is_an_error() {
        let frame = FrameBuffer::new();
        let result = write_png(&frame, Path::new("/nonexistent/dir/frame.png"));
        assert!(result.is_err());
    }
}
