//! The hardware edge: [`DisplaySink`] takes finished frames, [`SmartLedsSink`] feeds them
//! to any `smart_leds` driver.
//!
//! Brightness and gamma belong to the sink, not the renderer. [`SmartLedsSink`] folds both
//! into one 256-entry lookup table built once at construction.

use smart_leds::{RGB8, SmartLedsWrite};

use crate::render::StripFrame;
use crate::{Error, Result};

/// Accepts one complete frame per display update.
pub trait DisplaySink {
    /// Send `frame` to the LEDs. Returns once the frame is latched.
    ///
    /// # Errors
    ///
    /// [`Error::DisplayWrite`] (or an implementation-specific error) if the hardware
    /// rejected the frame. Callers do not retry.
    async fn flush(&mut self, frame: &StripFrame) -> Result<()>;
}

impl<T: DisplaySink> DisplaySink for &mut T {
    async fn flush(&mut self, frame: &StripFrame) -> Result<()> {
        (**self).flush(frame).await
    }
}

/// Gamma correction applied by [`SmartLedsSink`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Gamma {
    /// No correction.
    Linear,
    /// Standard 2.2 curve for perceived brightness.
    #[default]
    Gamma2_2,
}

/// Pre-computed `(value/255)^2.2 * 255`.
const GAMMA_2_2_TABLE: [u8; 256] = [
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 2, 2, 2,
    3, 3, 3, 3, 3, 4, 4, 4, 4, 5, 5, 5, 5, 6, 6, 6, 6, 7, 7, 7, 8, 8, 8, 9, 9, 9, 10, 10, 11, 11,
    11, 12, 12, 13, 13, 13, 14, 14, 15, 15, 16, 16, 17, 17, 18, 18, 19, 19, 20, 20, 21, 22, 22, 23,
    23, 24, 25, 25, 26, 26, 27, 28, 28, 29, 30, 30, 31, 32, 33, 33, 34, 35, 35, 36, 37, 38, 39, 39,
    40, 41, 42, 43, 43, 44, 45, 46, 47, 48, 49, 49, 50, 51, 52, 53, 54, 55, 56, 57, 58, 59, 60, 61,
    62, 63, 64, 65, 66, 67, 68, 69, 70, 71, 73, 74, 75, 76, 77, 78, 79, 81, 82, 83, 84, 85, 87, 88,
    89, 90, 91, 93, 94, 95, 97, 98, 99, 100, 102, 103, 105, 106, 107, 109, 110, 111, 113, 114, 116,
    117, 119, 120, 121, 123, 124, 126, 127, 129, 130, 132, 133, 135, 137, 138, 140, 141, 143, 145,
    146, 148, 149, 151, 153, 154, 156, 158, 159, 161, 163, 165, 166, 168, 170, 172, 173, 175, 177,
    179, 181, 182, 184, 186, 188, 190, 192, 194, 196, 197, 199, 201, 203, 205, 207, 209, 211, 213,
    215, 217, 219, 221, 223, 225, 227, 229, 231, 234, 236, 238, 240, 242, 244, 246, 248, 251, 253,
    255,
];

/// Combined gamma correction and brightness scaling.
///
/// `table[value]` is the corrected channel value, scaled by `brightness / 255`.
#[must_use]
pub const fn generate_combo_table(gamma: Gamma, brightness: u8) -> [u8; 256] {
    let mut result = [0u8; 256];
    let mut index = 0;
    while index < 256 {
        let corrected = match gamma {
            Gamma::Linear => index as u8,
            Gamma::Gamma2_2 => GAMMA_2_2_TABLE[index],
        };
        result[index] = ((corrected as u16 * brightness as u16) / 255) as u8;
        index += 1;
    }
    result
}

/// [`DisplaySink`] over a blocking `smart_leds` driver (WS2812, WS2801, APA102, ...).
pub struct SmartLedsSink<W> {
    writer: W,
    combo_table: [u8; 256],
}

impl<W> SmartLedsSink<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    /// Wrap `writer`, correcting every frame with `gamma` and scaling to `brightness`.
    #[must_use]
    pub const fn new(writer: W, gamma: Gamma, brightness: u8) -> Self {
        Self {
            writer,
            combo_table: generate_combo_table(gamma, brightness),
        }
    }

    /// Change gamma and brightness for subsequent frames.
    pub fn set_correction(&mut self, gamma: Gamma, brightness: u8) {
        self.combo_table = generate_combo_table(gamma, brightness);
    }

    /// The wrapped driver.
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the driver.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> DisplaySink for SmartLedsSink<W>
where
    W: SmartLedsWrite,
    W::Color: From<RGB8>,
{
    async fn flush(&mut self, frame: &StripFrame) -> Result<()> {
        let combo_table = self.combo_table;
        let corrected = frame
            .iter()
            .map(move |&color| apply_correction(color, &combo_table));
        self.writer.write(corrected).map_err(|_| {
            warn!("display: LED driver rejected a frame of {} LEDs", frame.len());
            Error::DisplayWrite
        })
    }
}

fn apply_correction(color: RGB8, combo_table: &[u8; 256]) -> RGB8 {
    let channel = |value: u8| combo_table.get(usize::from(value)).copied().unwrap_or(value);
    RGB8::new(channel(color.r), channel(color.g), channel(color.b))
}
