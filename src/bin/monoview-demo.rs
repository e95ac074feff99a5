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

//! monoview demo entry point
//!
//! Renders one of the built-in scenes for a number of frame-synchronous
//! updates and writes each rendered frame as a PNG.

use std::path::PathBuf;

use clap::Parser;

use monoview::core::display::FrameBuffer;
use monoview::core::view::{Buttons, Input};
use monoview::demo::{export, scenes, DemoConfig};

/// Render a monoview demo scene to PNG frames
#[derive(Parser)]
#[command(name = "monoview-demo", version, about)]
struct Args {
    /// Scene to render (gallery, dither, fan)
    #[arg(long)]
    scene: Option<String>,

    /// Number of frames to run
    #[arg(long)]
    frames: Option<u32>,

    /// Directory PNG frames are written into
    #[arg(long)]
    output: Option<PathBuf>,

    /// TOML config file; command-line flags take precedence
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> monoview::Result<()> {
    // Initialize logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => DemoConfig::from_file(path)?,
        None => DemoConfig::default(),
    };
    if let Some(scene) = args.scene {
        config.scene = scene;
    }
    if let Some(frames) = args.frames {
        config.frames = frames;
    }
    if let Some(output) = args.output {
        config.output = output;
    }

    log::info!(
        "rendering scene '{}' for {} frame(s) into {}",
        config.scene,
        config.frames,
        config.output.display()
    );

    std::fs::create_dir_all(&config.output)?;

    let mut screen = scenes::build(&config.scene)?;
    let mut frame = FrameBuffer::new();

    let mut written = 0u32;
    for index in 0..config.frames {
        // Nudge whatever widget holds focus so static scenes still move
        let input = if index % 2 == 0 {
            Input::press(Buttons::RIGHT)
        } else {
            Input::idle()
        };

        if screen.update(&input, &mut frame) {
            let path = config.output.join(format!("frame-{index:04}.png"));
            export::write_png(&frame, &path)?;
            written += 1;
        }
    }

    log::info!("done, wrote {written} frame(s)");
    Ok(())
}
