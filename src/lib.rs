//! Building blocks for LED word clocks: wiring schemes, spoken-time translation, and rendering.
//!
//! A word clock is a grid of letters lit from behind by one serial LED strip. The strip is
//! cabled in some serpentine order that has nothing to do with the letter grid, so every
//! frame passes through two pure mappings before it reaches the hardware:
//!
//! ```text
//! time ──► Language::translate ──► Phrase (logical cells)
//!                                     │
//!                                     ▼
//!                    Wiring::try_strip_index ──► StripFrame ──► DisplaySink
//! ```
//!
//! # Glossary
//!
//! - **Grid:** the rectangular array of letters on the clock face. Cells are addressed
//!   row-major, `index = y * width + x`.
//! - **Phrase:** ordered set of grid cells to illuminate for a given time.
//! - **Wiring:** the logical-to-physical LED address mapping for one cabling layout.
//! - **Minute slot:** one of four extra LEDs showing `minute % 5`.
//! - **Typewriter reveal:** timed, word-by-word illumination of a phrase.
//!
//! # Example
//!
//! ```rust
//! use wordclock_kit::{language::Language, wiring::{Wiring, WiringScheme}};
//!
//! let language = Language::English;
//! let (width, height) = language.stencil_size();
//! let wiring = Wiring::new(WiringScheme::Bernd, width, height)?;
//!
//! let phrase = language.translate(10, 47); // "IT IS A QUARTER TO ELEVEN"
//! let first = phrase.first().copied().unwrap_or_default();
//! let strip_index = wiring.try_strip_index_of(first)?;
//! assert!(usize::from(strip_index) < wiring.geometry().led_count());
//! # Ok::<(), wordclock_kit::Error>(())
//! ```
#![cfg_attr(not(any(test, feature = "host")), no_std)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Must come first so the logging macros are visible in every module below.
#[macro_use]
mod fmt;

pub mod config;
pub mod display;
pub mod event;
pub mod geometry;
pub mod language;
pub mod render;
#[cfg(feature = "host")]
pub mod to_png;
pub mod wiring;
pub mod word_clock;

mod error;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
