//! Startup configuration for a word clock.
//!
//! [`WordClockConfig`] is what the application reads from its config file or flash: every
//! field optional, names as plain strings. [`WordClockConfig::resolve`] turns it into
//! [`ClockSettings`] without ever failing. Missing values get their defaults, unknown
//! names fall back with a warning, and a wiring that cannot fit the language's stencil
//! falls back to the default wiring.
//!
//! ```rust
//! use wordclock_kit::config::WordClockConfig;
//! use wordclock_kit::language::Language;
//! use wordclock_kit::wiring::WiringScheme;
//!
//! let mut config = WordClockConfig::new("timos_wiring", "english")?;
//! config.typewriter = Some(false);
//!
//! let settings = config.resolve();
//! assert_eq!(settings.scheme, WiringScheme::Timo);
//! assert_eq!(settings.language, Language::English);
//! assert_eq!(settings.brightness, 255);
//!
//! let mut buffer = [0u8; 64];
//! let stored = config.save(&mut buffer)?;
//! assert_eq!(WordClockConfig::load(stored)?, config);
//! # Ok::<(), wordclock_kit::Error>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::render::RevealMode;
use crate::wiring::{Wiring, WiringScheme};
use crate::{Error, Result};

/// Longest wiring or language name a config can hold.
pub const NAME_CAPACITY: usize = 24;

/// A wiring or language name as stored in a config.
pub type Name = heapless::String<NAME_CAPACITY>;

/// Typewriter reveal on when not configured.
pub const DEFAULT_TYPEWRITER: bool = true;

/// Typewriter cells per second when not configured.
pub const DEFAULT_TYPEWRITER_SPEED: u32 = 5;

/// Full brightness when not configured.
pub const DEFAULT_BRIGHTNESS: u8 = 255;

/// Raw, possibly incomplete configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordClockConfig {
    /// Wiring scheme name, e.g. `"bernds_wiring"`.
    pub wiring: Option<Name>,
    /// Language name, e.g. `"german"`.
    pub language: Option<Name>,
    /// Reveal the phrase letter by letter on five-minute boundaries.
    pub typewriter: Option<bool>,
    /// Typewriter cells per second; must be positive.
    pub typewriter_speed: Option<u32>,
    /// LED brightness, 0..=255.
    pub brightness: Option<u8>,
}

/// Fully resolved settings the clock runs with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockSettings {
    /// Wiring scheme; always compatible with `language`'s stencil.
    pub scheme: WiringScheme,
    /// Spoken language and stencil.
    pub language: Language,
    /// Reveal mode on five-minute boundaries.
    pub reveal: RevealMode,
    /// LED brightness handed to the display sink.
    pub brightness: u8,
}

impl Default for ClockSettings {
    fn default() -> Self {
        WordClockConfig::default().resolve()
    }
}

impl ClockSettings {
    /// Build the wiring for this language's stencil.
    ///
    /// # Errors
    ///
    /// Whatever [`Wiring::new`] reports; a resolved config never trips this.
    pub fn wiring(&self) -> Result<Wiring> {
        let (width, height) = self.language.stencil_size();
        Wiring::new(self.scheme, width, height)
    }
}

impl WordClockConfig {
    /// A config naming a wiring and a language, everything else left to defaults.
    ///
    /// # Errors
    ///
    /// [`Error::FormatError`] if a name exceeds [`NAME_CAPACITY`] bytes.
    pub fn new(wiring: &str, language: &str) -> Result<Self> {
        Ok(Self {
            wiring: Some(to_name(wiring)?),
            language: Some(to_name(language)?),
            ..Self::default()
        })
    }

    /// Apply defaults and fallbacks.
    #[must_use]
    pub fn resolve(&self) -> ClockSettings {
        let language = self.language.as_deref().map_or_else(
            || {
                info!(
                    "config: no language set, choosing default {}",
                    Language::default().name()
                );
                Language::default()
            },
            Language::from_name_or_default,
        );

        let scheme = self.wiring.as_deref().map_or_else(
            || {
                info!(
                    "config: no wiring set, choosing default {}",
                    WiringScheme::default().name()
                );
                WiringScheme::default()
            },
            WiringScheme::from_name_or_default,
        );
        let (width, height) = language.stencil_size();
        let scheme = if Wiring::new(scheme, width, height).is_ok() {
            scheme
        } else {
            warn!(
                "config: {} does not fit the {} stencil, choosing default {}",
                scheme.name(),
                language.name(),
                WiringScheme::default().name()
            );
            WiringScheme::default()
        };

        let typewriter = self.typewriter.unwrap_or_else(|| {
            info!("config: no typewriter flag set, typewriter animation will be used");
            DEFAULT_TYPEWRITER
        });
        let speed = match self.typewriter_speed {
            Some(0) => {
                warn!(
                    "config: typewriter_speed must be positive, defaulting to {}",
                    DEFAULT_TYPEWRITER_SPEED
                );
                DEFAULT_TYPEWRITER_SPEED
            }
            Some(speed) => speed,
            None => {
                info!(
                    "config: no typewriter_speed set, defaulting to {}",
                    DEFAULT_TYPEWRITER_SPEED
                );
                DEFAULT_TYPEWRITER_SPEED
            }
        };
        let reveal = if typewriter {
            RevealMode::typewriter(speed).unwrap_or_default()
        } else {
            RevealMode::Instant
        };

        let brightness = self.brightness.unwrap_or_else(|| {
            warn!(
                "config: brightness not set, defaulting to {}",
                DEFAULT_BRIGHTNESS
            );
            DEFAULT_BRIGHTNESS
        });

        ClockSettings {
            scheme,
            language,
            reveal,
            brightness,
        }
    }

    /// Encode into `buffer` with postcard, returning the used prefix.
    ///
    /// # Errors
    ///
    /// [`Error::FormatError`] if `buffer` is too small.
    pub fn save<'b>(&self, buffer: &'b mut [u8]) -> Result<&'b mut [u8]> {
        let capacity = buffer.len();
        postcard::to_slice(self, buffer).map_err(|_| {
            error!("config: serialization failed (buffer of {} bytes)", capacity);
            Error::FormatError
        })
    }

    /// Decode a config written by [`Self::save`].
    ///
    /// # Errors
    ///
    /// [`Error::FormatError`] if `bytes` is not a valid encoding.
    pub fn load(bytes: &[u8]) -> Result<Self> {
        postcard::from_bytes(bytes).map_err(|_| {
            error!("config: deserialization failed ({} bytes)", bytes.len());
            Error::FormatError
        })
    }
}

fn to_name(name: &str) -> Result<Name> {
    Name::try_from(name).map_err(|()| {
        warn!("config: name longer than {} bytes", NAME_CAPACITY);
        Error::FormatError
    })
}
