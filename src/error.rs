/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced by wiring, translation, configuration, and rendering.
///
/// Most callers never see these directly: the fail-soft entry points
/// ([`Wiring::strip_index`](crate::wiring::Wiring::strip_index),
/// [`WiringScheme::from_name_or_default`](crate::wiring::WiringScheme::from_name_or_default),
/// [`WordClockConfig::resolve`](crate::config::WordClockConfig::resolve)) log a warning and
/// degrade instead.
#[derive(Debug, derive_more::Display, derive_more::Error, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration named a wiring scheme this crate does not know.
    #[display("unknown wiring scheme")]
    UnknownWiring,

    /// Configuration named a language this crate does not know.
    #[display("unknown language")]
    UnknownLanguage,

    /// Width, height, or LED count is zero, or the LED count cannot hold the grid.
    #[display("invalid grid geometry {width}x{height} with {led_count} LEDs")]
    InvalidGeometry {
        /// Requested grid width.
        width: u16,
        /// Requested grid height.
        height: u16,
        /// Requested LED count.
        led_count: usize,
    },

    /// A fixed-size wiring scheme was paired with a stencil of another size.
    #[display("wiring expects a {expected_width}x{expected_height} grid, got {width}x{height}")]
    GeometryMismatch {
        /// Grid width the wiring is built for.
        expected_width: u16,
        /// Grid height the wiring is built for.
        expected_height: u16,
        /// Grid width supplied.
        width: u16,
        /// Grid height supplied.
        height: u16,
    },

    /// An `(x, y)` coordinate lies outside the grid.
    #[display("cell ({x}, {y}) is outside the grid")]
    CellOutOfRange {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },

    /// A row-major cell index lies outside the grid.
    #[display("logical index {index} is outside the grid")]
    LogicalIndexOutOfRange {
        /// Offending index.
        index: u16,
    },

    /// A strip position lies past the end of the frame.
    #[display("strip index {index} is outside the frame")]
    PhysicalIndexOutOfRange {
        /// Offending index.
        index: u16,
    },

    /// The cell has no LED behind it.
    #[display("cell ({x}, {y}) has no LED")]
    DeadCell {
        /// Column.
        x: u16,
        /// Row.
        y: u16,
    },

    /// Minute slots are numbered 1 through 4.
    #[display("minute slot {slot} is outside 1..=4")]
    MinuteSlotOutOfRange {
        /// Offending slot.
        slot: u8,
    },

    /// The typewriter reveal rate must be at least one cell per second.
    #[display("typewriter speed must be positive")]
    InvalidRevealRate,

    /// The LED count exceeds the frame buffer capacity.
    #[display("{led_count} LEDs exceed the frame capacity of {capacity}")]
    FrameTooLarge {
        /// Requested LED count.
        led_count: usize,
        /// Fixed capacity of [`StripFrame`](crate::render::StripFrame).
        capacity: usize,
    },

    /// The LED driver rejected a frame.
    #[display("display write failed")]
    DisplayWrite,

    /// Stored configuration bytes could not be encoded or decoded.
    #[display("configuration format error")]
    FormatError,
}
