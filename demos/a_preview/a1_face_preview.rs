#![allow(missing_docs)]
//! Face Preview - write PNG previews of every language to a directory
//!
//! Renders 10:47 as a still frame and the 00:20 typewriter reveal as an animated PNG.
//! Usage: `cargo run --features host --bin demo_a1_face_preview -- [output_dir]`

use std::error::Error;
use std::path::PathBuf;

use embassy_futures::block_on;
use embedded_hal_async::delay::DelayNs;
use wordclock_kit::config::WordClockConfig;
use wordclock_kit::language::Language;
use wordclock_kit::render::{Palette, Renderer, RevealMode};
use wordclock_kit::to_png::{FrameRecorder, write_face_apng, write_face_png};
use wordclock_kit::wiring::WiringScheme;

struct NoDelay;

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

fn main() -> Result<(), Box<dyn Error>> {
    let output_dir = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from("target/wordclock_preview"), PathBuf::from);
    let palette = Palette::default();

    for language in Language::ALL {
        let scheme = if language == Language::Mark {
            WiringScheme::Mark
        } else {
            WiringScheme::Bernd
        };
        let settings = WordClockConfig::new(scheme.name(), language.name())?.resolve();
        let wiring = settings.wiring()?;

        let still = Renderer::new(wiring, RevealMode::Instant);
        let frame = still.compose(&language.translate(10, 47), 47, &palette)?;
        write_face_png(
            &frame,
            &wiring,
            output_dir.join(format!("{}_1047.png", language.name())),
            440,
        )?;

        let reveal = Renderer::new(wiring, settings.reveal);
        let mut recorder = FrameRecorder::default();
        block_on(reveal.render(
            &mut recorder,
            &mut NoDelay,
            &language.translate(0, 20),
            20,
            &palette,
        ))?;
        write_face_apng(
            &recorder.frames,
            &wiring,
            output_dir.join(format!("{}_0020.png", language.name())),
            440,
            200,
        )?;
    }
    Ok(())
}
