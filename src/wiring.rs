//! Cabling layouts: where each letter cell and minute slot sits on the LED strip.
//!
//! See [`WiringScheme`] for the supported layouts and [`Wiring`] for the mapping itself.

use crate::geometry::{GridGeometry, LogicalIndex, MinuteSlot, PhysicalIndex};
use crate::{Error, Result};

/// Strip index returned by the fail-soft lookups when the input is out of range.
pub const FALLBACK_INDEX: PhysicalIndex = 0;

/// One cabling layout, selected once from configuration by name.
///
/// Each scheme snakes the strip through the grid differently and parks the four minute
/// LEDs in a different place. Strip indices for a 3×2 grid:
///
/// ```text
/// Bernd            Christian        Timo             Mini
///   6  5  2          3  4  5          2  5  6          11  7  5
///   7  4  3          2  1  0          3  4  7          10  8  4
///   minutes 9 1 8 0  minutes 6 7 8 9  minutes 1 9 8 0  minutes 0 1 2 3
/// ```
///
/// The irregular `Mark` scheme is a fixed 11×11 hand-wired table; see [`Wiring`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WiringScheme {
    /// Column-major serpentine starting at the rightmost column; even columns run
    /// top-to-bottom. Minute LEDs are split between the head and the tail of the strip.
    #[default]
    Bernd,
    /// Row-major serpentine starting at the bottom row; even rows run left-to-right.
    /// Minute LEDs are the last four on the strip.
    Christian,
    /// Column-major serpentine starting at the leftmost column; even columns run
    /// top-to-bottom. Minute LEDs are split between the head and the tail of the strip.
    Timo,
    /// Column-major serpentine over `height + 1` rows (one LED per column sits behind no
    /// letter). Minute LEDs are the first four on the strip.
    Mini,
    /// Hand-wired 11×11 grid with 100 LEDs and a fixed lookup table.
    Mark,
}

impl WiringScheme {
    /// Every scheme, in configuration order.
    pub const ALL: [Self; 5] = [Self::Bernd, Self::Christian, Self::Timo, Self::Mini, Self::Mark];

    /// Name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bernd => "bernds_wiring",
            Self::Christian => "christians_wiring",
            Self::Timo => "timos_wiring",
            Self::Mini => "mini_wiring",
            Self::Mark => "marks_wiring",
        }
    }

    /// Look up a scheme by its configuration name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownWiring`] if no scheme has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.name() == name)
            .ok_or(Error::UnknownWiring)
    }

    /// Look up a scheme by name, falling back to [`WiringScheme::Bernd`] with a warning.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|_| {
            warn!(
                "wiring: no valid wiring layout '{}', falling back to {}",
                name,
                Self::default().name()
            );
            Self::default()
        })
    }

    /// Strip length this scheme needs for a `width` × `height` letter grid.
    #[must_use]
    pub const fn led_count(self, width: u16, height: u16) -> usize {
        let width = width as usize;
        let height = height as usize;
        match self {
            Self::Bernd | Self::Christian | Self::Timo => width * height + 4,
            Self::Mini => width * (height + 1) + 4,
            Self::Mark => MARK_LED_COUNT,
        }
    }
}

/// A [`WiringScheme`] bound to the grid it drives.
///
/// All lookups are pure. Each has a strict `try_*` form and a fail-soft form that logs a
/// warning and returns [`FALLBACK_INDEX`], so a single bad call never stops the render loop.
///
/// # The hand-wired `Mark` table
///
/// The `Mark` clock has LEDs only behind letters that words use. Every other cell maps to
/// LED 71, which is dead on that strip, so writes to it are harmless. The letter cell that
/// LED 71 should have lit is rerouted to the spare LED 99 at the end of the strip. The
/// strict lookups report dead cells as [`Error::DeadCell`].
///
/// ```rust
/// use wordclock_kit::wiring::{Wiring, WiringScheme};
///
/// let wiring = Wiring::new(WiringScheme::Christian, 11, 10)?;
/// assert_eq!(wiring.geometry().led_count(), 114);
/// assert_eq!(wiring.try_strip_index(10, 9)?, 0); // bottom row starts the strip
/// assert_eq!(wiring.try_minute_index(4)?, 113);
/// # Ok::<(), wordclock_kit::Error>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Wiring {
    scheme: WiringScheme,
    geometry: GridGeometry,
}

impl Wiring {
    /// Bind `scheme` to a `width` × `height` letter grid.
    ///
    /// # Errors
    ///
    /// [`Error::GeometryMismatch`] if `scheme` is [`WiringScheme::Mark`] and the grid is not
    /// 11×11; otherwise any error from [`GridGeometry::new`], or from
    /// [`GridGeometry::new_sparse`] for `Mark`, whose 100 LEDs are fewer than its cells.
    pub fn new(scheme: WiringScheme, width: u16, height: u16) -> Result<Self> {
        if scheme == WiringScheme::Mark && (width, height) != (MARK_WIDTH, MARK_HEIGHT) {
            return Err(Error::GeometryMismatch {
                expected_width: MARK_WIDTH,
                expected_height: MARK_HEIGHT,
                width,
                height,
            });
        }
        let led_count = scheme.led_count(width, height);
        let geometry = if scheme == WiringScheme::Mark {
            if !mark_table_fits(led_count) {
                return Err(Error::InvalidGeometry {
                    width,
                    height,
                    led_count,
                });
            }
            GridGeometry::new_sparse(width, height, led_count)?
        } else {
            GridGeometry::new(width, height, led_count)?
        };
        info!(
            "wiring: {} for {}x{} grid, {} LEDs",
            scheme.name(),
            width,
            height,
            geometry.led_count()
        );
        Ok(Self { scheme, geometry })
    }

    /// The cabling layout.
    #[must_use]
    pub const fn scheme(&self) -> WiringScheme {
        self.scheme
    }

    /// Grid size and strip length.
    #[must_use]
    pub const fn geometry(&self) -> GridGeometry {
        self.geometry
    }

    /// Whether a real LED sits behind `(x, y)`. Always true on the grid except for `Mark`.
    #[must_use]
    pub fn is_live(&self, x: u16, y: u16) -> bool {
        self.try_strip_index(x, y).is_ok()
    }

    /// Strip index of the LED behind `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::CellOutOfRange`] if `(x, y)` is off the grid; [`Error::DeadCell`] if the
    /// `Mark` table has no LED there.
    pub fn try_strip_index(&self, x: u16, y: u16) -> Result<PhysicalIndex> {
        if !self.geometry.contains(x, y) {
            return Err(Error::CellOutOfRange { x, y });
        }

        let width = u32::from(self.geometry.width());
        let height = u32::from(self.geometry.height());
        let (x32, y32) = (u32::from(x), u32::from(y));
        let strip_index = match self.scheme {
            WiringScheme::Bernd => {
                if x32 % 2 == 0 {
                    (width - x32 - 1) * height + y32 + 2
                } else {
                    (width - x32) * height + 1 - y32
                }
            }
            WiringScheme::Christian => {
                if y32 % 2 == 0 {
                    (height - y32 - 1) * width + x32
                } else {
                    (height - y32) * width - x32 - 1
                }
            }
            WiringScheme::Timo => {
                if x32 % 2 == 0 {
                    x32 * height + y32 + 2
                } else {
                    (x32 + 1) * height + 1 - y32
                }
            }
            WiringScheme::Mini => {
                // One LED per column hides behind the phantom row.
                let column_len = height + 1;
                if x32 % 2 == 0 {
                    (width - x32) * column_len + 2 - y32
                } else {
                    (width - x32 - 1) * column_len + y32 + 4
                }
            }
            WiringScheme::Mark => return mark_strip_index(x, y),
        };
        // Fits: every formula stays below led_count <= MAX_LED_COUNT.
        PhysicalIndex::try_from(strip_index).map_err(|_| Error::CellOutOfRange { x, y })
    }

    /// Strip index of the LED behind `(x, y)`, or [`FALLBACK_INDEX`] with a warning.
    ///
    /// Dead `Mark` cells return the dead LED itself, which is safe to write.
    #[must_use]
    pub fn strip_index(&self, x: u16, y: u16) -> PhysicalIndex {
        match self.try_strip_index(x, y) {
            Ok(strip_index) => strip_index,
            Err(Error::DeadCell { .. }) => PhysicalIndex::from(MARK_DEAD_LED),
            Err(_) => {
                warn!("wiring: cell ({}, {}) out of range", x, y);
                FALLBACK_INDEX
            }
        }
    }

    /// Strip index of the LED behind a row-major cell index.
    ///
    /// # Errors
    ///
    /// [`Error::LogicalIndexOutOfRange`] if `index` is off the grid, plus the errors of
    /// [`Self::try_strip_index`].
    pub fn try_strip_index_of(&self, index: LogicalIndex) -> Result<PhysicalIndex> {
        let (x, y) = self.geometry.xy(index)?;
        self.try_strip_index(x, y)
    }

    /// Strip index of the LED behind a row-major cell index, or [`FALLBACK_INDEX`] with a
    /// warning.
    #[must_use]
    pub fn strip_index_of(&self, index: LogicalIndex) -> PhysicalIndex {
        match self.geometry.xy(index) {
            Ok((x, y)) => self.strip_index(x, y),
            Err(_) => {
                warn!("wiring: logical index {} out of range", index);
                FALLBACK_INDEX
            }
        }
    }

    /// Strip index of a validated minute slot.
    #[must_use]
    pub fn minute_slot_index(&self, slot: MinuteSlot) -> PhysicalIndex {
        let last = self.last_index();
        match (self.scheme, slot.get()) {
            (WiringScheme::Bernd | WiringScheme::Timo, 4) | (WiringScheme::Mini, 1) => 0,
            (WiringScheme::Mini, 2) => 1,
            (WiringScheme::Mini, 3) => 2,
            (WiringScheme::Mini, _) => 3,
            (WiringScheme::Bernd, 1) | (WiringScheme::Timo, 2) => last,
            (WiringScheme::Bernd, 2) | (WiringScheme::Timo, 1) => 1,
            (WiringScheme::Bernd | WiringScheme::Timo, _) => last.saturating_sub(1),
            (WiringScheme::Christian, slot) => last.saturating_sub(4 - PhysicalIndex::from(slot)),
            (WiringScheme::Mark, slot) => MARK_FIRST_MINUTE_LED + PhysicalIndex::from(slot) - 1,
        }
    }

    /// Strip index of minute slot `slot` (`1..=4`).
    ///
    /// # Errors
    ///
    /// [`Error::MinuteSlotOutOfRange`] for any other slot number.
    pub fn try_minute_index(&self, slot: u8) -> Result<PhysicalIndex> {
        MinuteSlot::try_from(slot).map(|slot| self.minute_slot_index(slot))
    }

    /// Strip index of minute slot `slot`, or [`FALLBACK_INDEX`] with a warning.
    #[must_use]
    pub fn minute_index(&self, slot: u8) -> PhysicalIndex {
        self.try_minute_index(slot).unwrap_or_else(|_| {
            warn!("wiring: out of range when mapping minute slot {}", slot);
            FALLBACK_INDEX
        })
    }

    fn last_index(&self) -> PhysicalIndex {
        // led_count >= 1 and <= MAX_LED_COUNT, checked by GridGeometry::new.
        PhysicalIndex::try_from(self.geometry.led_count().saturating_sub(1))
            .unwrap_or(PhysicalIndex::MAX)
    }
}

// ============================================================================
// Mark's hand-wired table
// ============================================================================

const MARK_WIDTH: u16 = 11;
const MARK_HEIGHT: u16 = 11;
const MARK_LED_COUNT: usize = 100;
const MARK_FIRST_MINUTE_LED: PhysicalIndex = 95;

/// Broken LED on the `Mark` strip; cells with no letter LED alias onto it.
pub const MARK_DEAD_LED: u8 = 71;

/// Spare LED at the end of the `Mark` strip that lights the cell LED 71 should have lit.
pub const MARK_REROUTED_LED: u8 = 99;

const XX: u8 = MARK_DEAD_LED;
const RR: u8 = MARK_REROUTED_LED;

#[rustfmt::skip]
const MARK_TABLE: [[u8; MARK_WIDTH as usize]; MARK_HEIGHT as usize] = [
    [ 9,  8,  7, XX,  6,  5,  4,  3,  2,  1,  0],
    [XX, XX, 10, 11, 12, 13, 14, 15, XX, XX, XX],
    [23, 22, 21, 20, 19, 18, 17, XX, 16, XX, XX],
    [XX, 24, 25, 26, XX, 27, XX, 28, 29, XX, XX],
    [39, 38, 37, 36, 35, 34, 33, 32, 31, 30, XX],
    [40, 41, 42, 43, 44, 45, XX, 46, 47, XX, XX],
    [58, 57, 56, 55, 54, 53, 52, 51, 50, 49, 48],
    [59, 60, 61, 62, 63, 64, 65, 66, 67, 68, 69],
    [XX, 77, 76, 75, 74, 73, 72, RR, 70, XX, XX],
    [78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88],
    [XX, XX, XX, 94, 93, 92, 91, 90, 89, XX, XX],
];

/// Every table LED and all four minute LEDs lie on a strip of `led_count` LEDs.
const fn mark_table_fits(led_count: usize) -> bool {
    let mut max_led = MARK_FIRST_MINUTE_LED as usize + 3;
    let mut y = 0;
    while y < MARK_TABLE.len() {
        let mut x = 0;
        while x < MARK_TABLE[y].len() {
            if MARK_TABLE[y][x] as usize > max_led {
                max_led = MARK_TABLE[y][x] as usize;
            }
            x += 1;
        }
        y += 1;
    }
    max_led < led_count
}

fn mark_strip_index(x: u16, y: u16) -> Result<PhysicalIndex> {
    let led = MARK_TABLE
        .get(usize::from(y))
        .and_then(|row| row.get(usize::from(x)))
        .copied()
        .ok_or(Error::CellOutOfRange { x, y })?;
    if led == MARK_DEAD_LED {
        return Err(Error::DeadCell { x, y });
    }
    Ok(PhysicalIndex::from(led))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bernd_corners_on_11x10() {
        let wiring = Wiring::new(WiringScheme::Bernd, 11, 10).expect("valid wiring");
        assert_eq!(wiring.try_strip_index(10, 0), Ok(2));
        assert_eq!(wiring.try_strip_index(10, 9), Ok(11));
        assert_eq!(wiring.try_strip_index(9, 9), Ok(12));
        assert_eq!(wiring.try_strip_index(0, 0), Ok(102));
        assert_eq!(wiring.try_strip_index(0, 9), Ok(111));
        assert_eq!(wiring.try_minute_index(1), Ok(113));
        assert_eq!(wiring.try_minute_index(2), Ok(1));
        assert_eq!(wiring.try_minute_index(3), Ok(112));
        assert_eq!(wiring.try_minute_index(4), Ok(0));
    }

    #[test]
    fn timo_starts_left_after_two_minute_leds() {
        let wiring = Wiring::new(WiringScheme::Timo, 11, 10).expect("valid wiring");
        assert_eq!(wiring.try_strip_index(0, 0), Ok(2));
        assert_eq!(wiring.try_strip_index(1, 9), Ok(12));
        assert_eq!(wiring.try_strip_index(1, 0), Ok(21));
        assert_eq!(wiring.try_minute_index(1), Ok(1));
        assert_eq!(wiring.try_minute_index(2), Ok(113));
    }

    #[test]
    fn mini_skips_phantom_row() {
        let wiring = Wiring::new(WiringScheme::Mini, 11, 10).expect("valid wiring");
        assert_eq!(wiring.geometry().led_count(), 125);
        assert_eq!(wiring.try_strip_index(10, 9), Ok(4));
        assert_eq!(wiring.try_strip_index(10, 0), Ok(13));
        assert_eq!(wiring.try_strip_index(9, 0), Ok(15));
        assert_eq!(wiring.try_strip_index(0, 0), Ok(123));
    }

    #[test]
    fn mark_dead_and_rerouted_cells() {
        let wiring = Wiring::new(WiringScheme::Mark, 11, 11).expect("valid wiring");
        assert_eq!(wiring.try_strip_index(3, 0), Err(Error::DeadCell { x: 3, y: 0 }));
        assert_eq!(wiring.strip_index(3, 0), PhysicalIndex::from(MARK_DEAD_LED));
        assert_eq!(wiring.try_strip_index(7, 8), Ok(99));
        assert!(!wiring.is_live(0, 1));
        assert!(wiring.is_live(0, 0));
    }

    #[test]
    fn mark_table_fits_its_hundred_leds() {
        let wiring = Wiring::new(WiringScheme::Mark, 11, 11).expect("valid wiring");
        assert_eq!(wiring.geometry().led_count(), 100);
        assert_eq!(wiring.geometry().cell_count(), 121);
        assert!(mark_table_fits(MARK_LED_COUNT));
        assert!(!mark_table_fits(99));
    }

    #[test]
    fn mark_requires_its_own_grid() {
        assert_eq!(
            Wiring::new(WiringScheme::Mark, 11, 10),
            Err(Error::GeometryMismatch {
                expected_width: 11,
                expected_height: 11,
                width: 11,
                height: 10
            })
        );
    }

    #[test]
    fn fail_soft_lookups_return_fallback() {
        let wiring = Wiring::new(WiringScheme::Christian, 11, 10).expect("valid wiring");
        assert_eq!(wiring.minute_index(0), FALLBACK_INDEX);
        assert_eq!(wiring.minute_index(5), FALLBACK_INDEX);
        assert_eq!(wiring.strip_index(11, 0), FALLBACK_INDEX);
        assert_eq!(wiring.strip_index_of(110), FALLBACK_INDEX);
    }

    #[test]
    fn names_round_trip() {
        for scheme in WiringScheme::ALL {
            assert_eq!(WiringScheme::from_name(scheme.name()), Ok(scheme));
        }
        assert_eq!(WiringScheme::from_name("ikea_wiring"), Err(Error::UnknownWiring));
        assert_eq!(WiringScheme::from_name_or_default("ikea_wiring"), WiringScheme::Bernd);
    }
}
