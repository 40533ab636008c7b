//! Turn a [`Phrase`] into strip frames and push them to a [`DisplaySink`].
//!
//! A render pass always starts from a frame filled with the background color (minute
//! LEDs included), paints the phrase cells in the word color, and finally paints minute
//! slots `1..=minute % 5` in the minute color.
//!
//! With [`RevealMode::Typewriter`] and a minute on a five-minute boundary the phrase is
//! revealed one cell at a time: one flush per cell, a fixed interval after each, and a
//! last flush once the minute slots are set. Other minutes always render instantly.

use core::ops::Deref;

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;
use smart_leds::RGB8;

use crate::display::DisplaySink;
use crate::geometry::{LogicalIndex, MAX_LED_COUNT, MinuteSlot, PhysicalIndex};
use crate::language::Phrase;
use crate::wiring::Wiring;
use crate::{Error, Result};

/// Predefined RGB colors from `smart_leds`.
#[doc(inline)]
pub use smart_leds::colors;

/// The default word and minute color.
pub const WARM_WHITE: RGB8 = RGB8::new(255, 180, 100);

/// One RGB value per LED, in strip order.
///
/// Capacity is [`MAX_LED_COUNT`]; the length is fixed to the geometry's `led_count` when
/// the frame is created.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StripFrame(Vec<RGB8, MAX_LED_COUNT>);

impl StripFrame {
    /// A frame of `led_count` LEDs, all set to `color`.
    ///
    /// # Errors
    ///
    /// [`Error::FrameTooLarge`] if `led_count` exceeds [`MAX_LED_COUNT`].
    pub fn filled(led_count: usize, color: RGB8) -> Result<Self> {
        let mut pixels = Vec::new();
        pixels
            .resize(led_count, color)
            .map_err(|()| Error::FrameTooLarge {
                led_count,
                capacity: MAX_LED_COUNT,
            })?;
        Ok(Self(pixels))
    }

    /// Set every LED, minute slots included.
    pub fn fill(&mut self, color: RGB8) {
        self.0.fill(color);
    }

    /// Set one LED.
    ///
    /// # Errors
    ///
    /// [`Error::PhysicalIndexOutOfRange`] if `index` is past the end of the strip.
    pub fn set_pixel(&mut self, index: PhysicalIndex, color: RGB8) -> Result<()> {
        let pixel = self
            .0
            .get_mut(usize::from(index))
            .ok_or(Error::PhysicalIndexOutOfRange { index })?;
        *pixel = color;
        Ok(())
    }

    /// Color of one LED.
    #[must_use]
    pub fn pixel(&self, index: PhysicalIndex) -> Option<RGB8> {
        self.0.get(usize::from(index)).copied()
    }
}

impl Deref for StripFrame {
    type Target = [RGB8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Colors for one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    /// Every LED not otherwise lit.
    pub background: RGB8,
    /// Phrase cells.
    pub word: RGB8,
    /// Lit minute slots.
    pub minute: RGB8,
}

impl Palette {
    /// Palette with one color for words and minutes.
    #[must_use]
    pub const fn new(background: RGB8, foreground: RGB8) -> Self {
        Self {
            background,
            word: foreground,
            minute: foreground,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        COLOR_MODES[0]
    }
}

/// Palettes cycled by the next-mode button, starting with the default.
pub const COLOR_MODES: [Palette; 7] = [
    Palette::new(colors::BLACK, WARM_WHITE),
    Palette::new(colors::BLACK, colors::WHITE),
    Palette::new(colors::BLACK, colors::RED),
    Palette::new(colors::BLACK, colors::ORANGE),
    Palette::new(colors::BLACK, colors::GREEN),
    Palette::new(colors::BLACK, colors::BLUE),
    Palette {
        background: colors::BLACK,
        word: WARM_WHITE,
        minute: colors::RED,
    },
];

/// How a phrase appears on a five-minute boundary.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealMode {
    /// Everything in one flush.
    #[default]
    Instant,
    /// One cell per flush, `interval` apart.
    Typewriter {
        /// Pause after each intermediate flush.
        interval: Duration,
    },
}

impl RevealMode {
    /// Typewriter reveal at `cells_per_second`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidRevealRate`] if `cells_per_second` is zero.
    pub fn typewriter(cells_per_second: u32) -> Result<Self> {
        if cells_per_second == 0 {
            return Err(Error::InvalidRevealRate);
        }
        Ok(Self::Typewriter {
            interval: Duration::from_hz(u64::from(cells_per_second)),
        })
    }
}

/// Paints phrases onto strip frames through one [`Wiring`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Renderer {
    wiring: Wiring,
    reveal: RevealMode,
}

impl Renderer {
    /// Create a renderer.
    #[must_use]
    pub const fn new(wiring: Wiring, reveal: RevealMode) -> Self {
        Self { wiring, reveal }
    }

    /// The wiring frames are laid out for.
    #[must_use]
    pub const fn wiring(&self) -> &Wiring {
        &self.wiring
    }

    /// The reveal mode used on five-minute boundaries.
    #[must_use]
    pub const fn reveal(&self) -> RevealMode {
        self.reveal
    }

    /// Build the final frame for `cells` at `minute` without touching a sink.
    ///
    /// # Errors
    ///
    /// [`Error::FrameTooLarge`] if the wiring's LED count does not fit a [`StripFrame`].
    pub fn compose(&self, cells: &[LogicalIndex], minute: u8, palette: &Palette) -> Result<StripFrame> {
        let mut frame = StripFrame::filled(self.wiring.geometry().led_count(), palette.background)?;
        for &cell in cells {
            self.paint_cell(&mut frame, cell, palette.word);
        }
        self.paint_minutes(&mut frame, minute, palette.minute);
        Ok(frame)
    }

    /// Render `phrase` for `minute` and flush it to `sink`.
    ///
    /// Returns after the last flush; a typewriter reveal always runs to completion.
    ///
    /// # Errors
    ///
    /// Any error from the sink, or [`Error::FrameTooLarge`] as for [`Self::compose`].
    pub async fn render<S, D>(
        &self,
        sink: &mut S,
        delay: &mut D,
        phrase: &Phrase,
        minute: u8,
        palette: &Palette,
    ) -> Result<()>
    where
        S: DisplaySink,
        D: DelayNs,
    {
        match self.reveal {
            RevealMode::Typewriter { interval } if minute % 5 == 0 => {
                self.render_typewriter(sink, delay, phrase, minute, palette, interval)
                    .await
            }
            _ => {
                let frame = self.compose(phrase, minute, palette)?;
                sink.flush(&frame).await
            }
        }
    }

    async fn render_typewriter<S, D>(
        &self,
        sink: &mut S,
        delay: &mut D,
        phrase: &Phrase,
        minute: u8,
        palette: &Palette,
        interval: Duration,
    ) -> Result<()>
    where
        S: DisplaySink,
        D: DelayNs,
    {
        let interval_us = u32::try_from(interval.as_micros()).unwrap_or(u32::MAX);
        let mut frame = StripFrame::filled(self.wiring.geometry().led_count(), palette.background)?;
        for &cell in phrase.iter() {
            self.paint_cell(&mut frame, cell, palette.word);
            trace!("render: typewriter cell {}", cell);
            sink.flush(&frame).await?;
            delay.delay_us(interval_us).await;
        }
        self.paint_minutes(&mut frame, minute, palette.minute);
        sink.flush(&frame).await
    }

    fn paint_cell(&self, frame: &mut StripFrame, cell: LogicalIndex, color: RGB8) {
        match self.wiring.try_strip_index_of(cell) {
            Ok(index) => {
                if frame.set_pixel(index, color).is_err() {
                    warn!("render: strip index {} outside frame", index);
                }
            }
            Err(Error::DeadCell { x, y }) => trace!("render: skipping dead cell ({}, {})", x, y),
            Err(_) => warn!("render: skipping cell {} outside the grid", cell),
        }
    }

    fn paint_minutes(&self, frame: &mut StripFrame, minute: u8, color: RGB8) {
        for slot in MinuteSlot::lit_for_minute(minute) {
            let index = self.wiring.minute_slot_index(slot);
            if frame.set_pixel(index, color).is_err() {
                warn!("render: minute slot {} outside frame", slot.get());
            }
        }
    }
}
