//! Grid dimensions and the index types shared by wiring, translation, and rendering.
//!
//! Coordinates use a screen-style convention: `(0, 0)` is the top-left letter,
//! `x` increases to the right, and `y` increases downward.

use crate::{Error, Result};

/// Row-major index of one letter cell: `y * width + x`.
pub type LogicalIndex = u16;

/// Position of one LED on the serial strip, counted from the data input.
pub type PhysicalIndex = u16;

/// Capacity of [`StripFrame`](crate::render::StripFrame) and the largest supported `led_count`.
pub const MAX_LED_COUNT: usize = 256;

/// Width, height, and strip length of one word clock.
///
/// For regular cabling `led_count` is at least `width * height`; the spare LEDs carry the
/// minute slots (and, for some cabling, LEDs hidden behind a phantom row). A hand-wired
/// strip built with [`Self::new_sparse`] may have fewer LEDs than cells.
///
/// ```rust
/// use wordclock_kit::geometry::GridGeometry;
///
/// let geometry = GridGeometry::new(11, 10, 114)?;
/// assert_eq!(geometry.cell_count(), 110);
/// assert_eq!(geometry.xy(47)?, (3, 4));
/// assert_eq!(geometry.index(3, 4)?, 47);
/// # Ok::<(), wordclock_kit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GridGeometry {
    width: u16,
    height: u16,
    led_count: u16,
}

impl GridGeometry {
    /// Create a geometry, checking that the strip can hold every cell.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] if a dimension is zero or `led_count < width * height`;
    /// [`Error::FrameTooLarge`] if `led_count` exceeds [`MAX_LED_COUNT`].
    pub fn new(width: u16, height: u16, led_count: usize) -> Result<Self> {
        let invalid = Error::InvalidGeometry {
            width,
            height,
            led_count,
        };
        if width == 0 || height == 0 || led_count == 0 {
            return Err(invalid);
        }
        let cell_count = usize::from(width) * usize::from(height);
        if led_count < cell_count {
            return Err(invalid);
        }
        if led_count > MAX_LED_COUNT {
            return Err(Error::FrameTooLarge {
                led_count,
                capacity: MAX_LED_COUNT,
            });
        }
        let led_count = u16::try_from(led_count).map_err(|_| invalid)?;
        Ok(Self {
            width,
            height,
            led_count,
        })
    }

    /// Create a geometry for a hand-wired strip that has fewer LEDs than cells.
    ///
    /// Letterless cells share one LED, so only the grid itself must stay within
    /// [`MAX_LED_COUNT`] cells. The caller checks that its table fits `led_count`.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidGeometry`] if a dimension or `led_count` is zero, or the grid has
    /// more than [`MAX_LED_COUNT`] cells; [`Error::FrameTooLarge`] if `led_count` exceeds
    /// [`MAX_LED_COUNT`].
    pub fn new_sparse(width: u16, height: u16, led_count: usize) -> Result<Self> {
        let invalid = Error::InvalidGeometry {
            width,
            height,
            led_count,
        };
        if width == 0 || height == 0 || led_count == 0 {
            return Err(invalid);
        }
        if usize::from(width) * usize::from(height) > MAX_LED_COUNT {
            return Err(invalid);
        }
        if led_count > MAX_LED_COUNT {
            return Err(Error::FrameTooLarge {
                led_count,
                capacity: MAX_LED_COUNT,
            });
        }
        let led_count = u16::try_from(led_count).map_err(|_| invalid)?;
        Ok(Self {
            width,
            height,
            led_count,
        })
    }

    /// Number of columns.
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Number of LEDs on the strip, minute slots included.
    #[must_use]
    pub const fn led_count(&self) -> usize {
        self.led_count as usize
    }

    /// Number of letter cells, `width * height`.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Whether `(x, y)` lies on the grid.
    #[must_use]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x < self.width && y < self.height
    }

    /// Row-major index of `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::CellOutOfRange`] if `(x, y)` is off the grid.
    pub const fn index(&self, x: u16, y: u16) -> Result<LogicalIndex> {
        if !self.contains(x, y) {
            return Err(Error::CellOutOfRange { x, y });
        }
        // Fits: cell_count <= MAX_LED_COUNT.
        Ok(y * self.width + x)
    }

    /// Inverse of [`Self::index`].
    ///
    /// # Errors
    ///
    /// [`Error::LogicalIndexOutOfRange`] if `index >= width * height`.
    pub const fn xy(&self, index: LogicalIndex) -> Result<(u16, u16)> {
        if index as usize >= self.cell_count() {
            return Err(Error::LogicalIndexOutOfRange { index });
        }
        Ok((index % self.width, index / self.width))
    }
}

/// One of the four minute-indicator LEDs, numbered `1..=4`.
///
/// Slot `n` is lit when `minute % 5 >= n`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MinuteSlot(u8);

impl MinuteSlot {
    /// All four slots in order.
    pub const ALL: [Self; 4] = [Self(1), Self(2), Self(3), Self(4)];

    /// Slot number, `1..=4`.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The slots to light for `minute`, i.e. `1..=minute % 5`.
    pub fn lit_for_minute(minute: u8) -> impl Iterator<Item = Self> {
        let remainder = minute % 5;
        Self::ALL.into_iter().filter(move |slot| slot.0 <= remainder)
    }
}

impl TryFrom<u8> for MinuteSlot {
    type Error = Error;

    fn try_from(slot: u8) -> Result<Self> {
        match slot {
            1..=4 => Ok(Self(slot)),
            _ => Err(Error::MinuteSlotOutOfRange { slot }),
        }
    }
}
