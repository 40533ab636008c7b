//! Spoken-time translation: wall-clock time to the letter cells that spell it.
//!
//! Every language shares one shape: an optional prefix ("IT IS"), a phrase for the
//! five-minute bucket, the hour word, and a full-hour suffix ("O'CLOCK") on the hour.
//! Past the half hour the clock speaks of the next hour, so "twenty to eleven" lights
//! ELEVEN at 10:40.
//!
//! The minute remainder (`minute % 5`) is not part of the phrase. It lights the minute
//! slots; see [`MinuteSlot`](crate::geometry::MinuteSlot).
//!
//! # Example
//!
//! ```rust
//! use wordclock_kit::language::Language;
//!
//! let language = Language::English;
//! assert_eq!(language.minute_bucket(47), 9); // "QUARTER TO"
//! assert_eq!(language.hour_word_index(10, 47), 11); // "ELEVEN"
//!
//! // Translation is constant within a five-minute bucket.
//! assert_eq!(language.translate(10, 45), language.translate(10, 49));
//! ```

mod english;
mod german;
mod mark;

use core::ops::Deref;

use heapless::Vec;

use crate::geometry::LogicalIndex;
use crate::{Error, Result};

/// Most cells any phrase lights.
pub const MAX_PHRASE_LEN: usize = 32;

/// A run of consecutive cells in one stencil row, `start..end` in row-major order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Word {
    start: LogicalIndex,
    end: LogicalIndex,
}

impl Word {
    /// Cells `start..end`.
    #[must_use]
    pub const fn span(start: LogicalIndex, end: LogicalIndex) -> Self {
        assert!(start < end, "a word needs at least one cell");
        Self { start, end }
    }

    /// The cells of this word, left to right.
    pub fn cells(self) -> impl Iterator<Item = LogicalIndex> {
        self.start..self.end
    }

    /// Number of cells.
    #[must_use]
    pub const fn len(self) -> usize {
        (self.end - self.start) as usize
    }

    /// Always false; words have at least one cell.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start >= self.end
    }
}

/// Ordered cells to light for one time, in reveal order.
///
/// Derefs to `[LogicalIndex]`. A cell may appear twice when two words share a letter
/// (the Mark Easter egg crosses itself).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Phrase(Vec<LogicalIndex, MAX_PHRASE_LEN>);

impl Phrase {
    /// An empty phrase.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// A phrase made of literal cells. Cells beyond [`MAX_PHRASE_LEN`] are dropped with a
    /// warning.
    #[must_use]
    pub fn from_cells(cells: &[LogicalIndex]) -> Self {
        let mut phrase = Self::new();
        for &cell in cells {
            phrase.push(cell);
        }
        phrase
    }

    /// Append every cell of `words`.
    pub fn extend_words(&mut self, words: &[Word]) {
        for cell in words.iter().flat_map(|word| word.cells()) {
            self.push(cell);
        }
    }

    fn push(&mut self, cell: LogicalIndex) {
        if self.0.push(cell).is_err() {
            warn!("language: phrase full, dropping cell {}", cell);
        }
    }
}

impl Deref for Phrase {
    type Target = [LogicalIndex];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Literal cells that replace the whole phrase at one time of day.
#[derive(Clone, Copy, Debug)]
struct EasterEgg {
    hour: u8,
    minute: u8,
    cells: &'static [LogicalIndex],
}

/// Hand-authored word layout of one stencil.
#[derive(Clone, Copy, Debug)]
struct LanguageTable {
    /// Letter rows of the clock face; every row has the same number of letters.
    stencil: &'static [&'static str],
    prefix: &'static [Word],
    /// Indexed by minute bucket; entry 0 (the full hour) is empty.
    minutes: [&'static [Word]; 12],
    /// Indexed by hour word; entry 12 repeats entry 0 for the rollover past 11.
    hours: [&'static [Word]; 13],
    full_hour: &'static [Word],
    /// Hour words that change shape on the full hour, e.g. German "EIN UHR".
    full_hour_hours: &'static [(u8, &'static [Word])],
    /// First minute bucket that names the next hour.
    next_hour_bucket: u8,
    easter_egg: Option<EasterEgg>,
}

/// One spoken language and the stencil it is printed on. Selected once at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Language {
    /// English 11×10 stencil: "IT IS TWENTY FIVE PAST NINE".
    English,
    /// German 11×10 stencil: "ES IST FÜNF VOR HALB ZEHN".
    #[default]
    German,
    /// English 11×11 stencil with overlapping words and an Easter egg at 00:20/12:20.
    Mark,
}

impl Language {
    /// Every language, in configuration order.
    pub const ALL: [Self; 3] = [Self::English, Self::German, Self::Mark];

    /// Name used in configuration files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::German => "german",
            Self::Mark => "mark",
        }
    }

    /// Look up a language by its configuration name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownLanguage`] if no language has that name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|language| language.name() == name)
            .ok_or(Error::UnknownLanguage)
    }

    /// Look up a language by name, falling back to [`Language::German`] with a warning.
    #[must_use]
    pub fn from_name_or_default(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|_| {
            warn!(
                "language: could not detect language '{}', choosing default {}",
                name,
                Self::default().name()
            );
            Self::default()
        })
    }

    const fn table(self) -> &'static LanguageTable {
        match self {
            Self::English => &english::TABLE,
            Self::German => &german::TABLE,
            Self::Mark => &mark::TABLE,
        }
    }

    /// Letter rows of this language's clock face.
    #[must_use]
    pub const fn stencil(self) -> &'static [&'static str] {
        self.table().stencil
    }

    /// Grid `(width, height)` derived from the stencil.
    #[must_use]
    pub fn stencil_size(self) -> (u16, u16) {
        let stencil = self.stencil();
        let width = stencil.first().map_or(0, |row| row.chars().count());
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(stencil.len()).unwrap_or(u16::MAX),
        )
    }

    /// Letter at row-major `index` on the stencil.
    #[must_use]
    pub fn letter(self, index: LogicalIndex) -> Option<char> {
        let (width, _) = self.stencil_size();
        if width == 0 {
            return None;
        }
        self.stencil()
            .get(usize::from(index / width))
            .and_then(|row| row.chars().nth(usize::from(index % width)))
    }

    /// Five-minute bucket of `minute`, `0..=11` for a valid minute.
    #[must_use]
    pub const fn minute_bucket(self, minute: u8) -> u8 {
        minute / 5
    }

    /// Index into the hour words for `hour:minute`, `0..=12`.
    ///
    /// `hour % 12`, plus one once the minute phrase names the next hour.
    #[must_use]
    pub const fn hour_word_index(self, hour: u8, minute: u8) -> u8 {
        let hour_index = hour % 12;
        if self.minute_bucket(minute) >= self.table().next_hour_bucket {
            hour_index + 1
        } else {
            hour_index
        }
    }

    /// Words lit for minute `bucket`; empty for bucket 0 and out-of-range buckets.
    #[must_use]
    pub fn minute_words(self, bucket: u8) -> &'static [Word] {
        self.table()
            .minutes
            .get(usize::from(bucket))
            .copied()
            .unwrap_or(&[])
    }

    /// Words lit for hour word `index` (see [`Self::hour_word_index`]).
    #[must_use]
    pub fn hour_words(self, index: u8) -> &'static [Word] {
        self.table()
            .hours
            .get(usize::from(index))
            .copied()
            .unwrap_or(&[])
    }

    /// Words lit only on the full hour ("O'CLOCK", "UHR").
    #[must_use]
    pub const fn full_hour_words(self) -> &'static [Word] {
        self.table().full_hour
    }

    /// Words lit before every phrase ("IT IS").
    #[must_use]
    pub const fn prefix_words(self) -> &'static [Word] {
        self.table().prefix
    }

    /// Cells to light for `hour:minute`, rounded down to five minutes.
    ///
    /// `hour` and `minute` are expected to form a valid wall-clock time; other values do
    /// not panic but produce an unspecified phrase.
    #[must_use]
    pub fn translate(self, hour: u8, minute: u8) -> Phrase {
        let table = self.table();
        if let Some(egg) = table.easter_egg {
            if hour % 12 == egg.hour && minute == egg.minute {
                debug!("language: easter egg at {}:{}", hour, minute);
                return Phrase::from_cells(egg.cells);
            }
        }

        let bucket = self.minute_bucket(minute);
        let hour_index = self.hour_word_index(hour, minute);
        let hour_words = if bucket == 0 {
            table
                .full_hour_hours
                .iter()
                .find(|(index, _)| *index == hour_index)
                .map_or_else(|| self.hour_words(hour_index), |(_, words)| *words)
        } else {
            self.hour_words(hour_index)
        };

        let mut phrase = Phrase::new();
        phrase.extend_words(table.prefix);
        phrase.extend_words(self.minute_words(bucket));
        phrase.extend_words(hour_words);
        if bucket == 0 {
            phrase.extend_words(table.full_hour);
        }
        phrase
    }

    /// [`Self::translate`] for a [`time::Time`].
    #[must_use]
    pub fn translate_time(self, time: time::Time) -> Phrase {
        self.translate(time.hour(), time.minute())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stencils_are_rectangular() {
        for language in Language::ALL {
            let (width, height) = language.stencil_size();
            assert!(width > 0 && height > 0);
            for row in language.stencil() {
                assert_eq!(row.chars().count(), usize::from(width), "{row}");
            }
        }
        assert_eq!(Language::Mark.stencil_size(), (11, 11));
        assert_eq!(Language::English.stencil_size(), (11, 10));
    }

    #[test]
    fn every_phrase_fits() {
        for language in Language::ALL {
            for hour in 0..24 {
                for minute in 0..60 {
                    let phrase = language.translate(hour, minute);
                    assert!(!phrase.is_empty());
                    assert!(phrase.len() < MAX_PHRASE_LEN, "{hour}:{minute}");
                }
            }
        }
    }

    #[test]
    fn words_spell_stencil_letters() {
        let spell = |language: Language, words: &[Word]| -> String {
            words
                .iter()
                .flat_map(|word| word.cells())
                .filter_map(|cell| language.letter(cell))
                .collect()
        };
        assert_eq!(spell(Language::English, Language::English.hour_words(11)), "ELEVEN");
        assert_eq!(spell(Language::German, Language::German.minute_words(5)), "FÜNFVORHALB");
        assert_eq!(spell(Language::Mark, Language::Mark.minute_words(5)), "TWENTYFIVEPAST");
        assert_eq!(spell(Language::Mark, Language::Mark.full_hour_words()), "OCLOCK");
    }

    #[test]
    fn out_of_range_input_does_not_panic() {
        for language in Language::ALL {
            let _ = language.translate(200, 200);
        }
    }
}
