//! The clock loop: redraw when the minute changes, react to buttons in between.
//!
//! [`WordClock::run`] polls the time every [`POLL_INTERVAL`]. Between polls it waits on
//! the [`EventSource`], so a button press is handled within one poll interval and an idle
//! clock still notices the next minute. A typewriter reveal runs to completion before the
//! next event is read.
//!
//! ```rust
//! use embassy_futures::block_on;
//! use embassy_time::Duration;
//! use embedded_hal_async::delay::DelayNs;
//! use wordclock_kit::config::ClockSettings;
//! use wordclock_kit::display::DisplaySink;
//! use wordclock_kit::event::{ClockEvent, EventSource};
//! use wordclock_kit::render::StripFrame;
//! use wordclock_kit::word_clock::{TimeSource, WordClock};
//!
//! struct Frames(usize);
//! impl DisplaySink for Frames {
//!     async fn flush(&mut self, _frame: &StripFrame) -> wordclock_kit::Result<()> {
//!         self.0 += 1;
//!         Ok(())
//!     }
//! }
//!
//! struct NoDelay;
//! impl DelayNs for NoDelay {
//!     async fn delay_ns(&mut self, _ns: u32) {}
//! }
//!
//! struct Fixed;
//! impl TimeSource for Fixed {
//!     fn now(&mut self) -> time::Time {
//!         time::Time::from_hms(10, 47, 0).unwrap_or(time::Time::MIDNIGHT)
//!     }
//! }
//!
//! struct ReturnAtOnce;
//! impl EventSource for ReturnAtOnce {
//!     async fn wait_for_event(&mut self, _timeout: Duration) -> ClockEvent {
//!         ClockEvent::Return
//!     }
//! }
//!
//! let mut clock = WordClock::new(&ClockSettings::default())?;
//! let mut frames = Frames(0);
//! let exit = block_on(clock.run(&mut frames, NoDelay, Fixed, ReturnAtOnce))?;
//! assert_eq!(exit, ClockEvent::Return);
//! assert_eq!(frames.0, 1); // 10:47 is not a five-minute boundary
//! # Ok::<(), wordclock_kit::Error>(())
//! ```

use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;

use crate::Result;
use crate::config::ClockSettings;
use crate::display::DisplaySink;
use crate::event::{ClockEvent, EventSource};
use crate::language::{Language, Phrase};
use crate::render::{COLOR_MODES, Palette, Renderer};

/// Longest wait for input between two minute checks.
pub const POLL_INTERVAL: Duration = Duration::from_secs(2);

/// Local wall-clock time.
pub trait TimeSource {
    /// The current local time of day.
    fn now(&mut self) -> time::Time;
}

impl<T: TimeSource> TimeSource for &mut T {
    fn now(&mut self) -> time::Time {
        (**self).now()
    }
}

/// State of a running word clock: what is on the LEDs and in which colors.
#[derive(Clone, Debug)]
pub struct WordClock {
    language: Language,
    renderer: Renderer,
    color_mode: usize,
    phrase: Phrase,
    shown: Option<(u8, u8)>,
}

impl WordClock {
    /// A clock that has not drawn anything yet.
    ///
    /// # Errors
    ///
    /// Any error from [`ClockSettings::wiring`].
    pub fn new(settings: &ClockSettings) -> Result<Self> {
        let wiring = settings.wiring()?;
        info!(
            "word_clock: {} on {}",
            settings.language.name(),
            settings.scheme.name()
        );
        Ok(Self {
            language: settings.language,
            renderer: Renderer::new(wiring, settings.reveal),
            color_mode: 0,
            phrase: Phrase::new(),
            shown: None,
        })
    }

    /// The language phrases are translated with.
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// The renderer (and through it, the wiring).
    #[must_use]
    pub const fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// The current palette.
    #[must_use]
    pub fn palette(&self) -> Palette {
        COLOR_MODES.get(self.color_mode).copied().unwrap_or_default()
    }

    /// The phrase currently on the LEDs; empty before the first draw.
    #[must_use]
    pub const fn phrase(&self) -> &Phrase {
        &self.phrase
    }

    /// Run until the user leaves, returning [`ClockEvent::Exit`] or [`ClockEvent::Return`].
    ///
    /// # Errors
    ///
    /// The first error from the display sink. The loop does not retry.
    pub async fn run<S, D, T, E>(
        &mut self,
        mut sink: S,
        mut delay: D,
        mut clock: T,
        mut events: E,
    ) -> Result<ClockEvent>
    where
        S: DisplaySink,
        D: DelayNs,
        T: TimeSource,
        E: EventSource,
    {
        loop {
            self.tick(&mut sink, &mut delay, clock.now()).await?;
            match events.wait_for_event(POLL_INTERVAL).await {
                ClockEvent::NextMode => self.next_mode(&mut sink, &mut delay, clock.now()).await?,
                event if event.ends_loop() => {
                    info!("word_clock: leaving on {}", event.name());
                    return Ok(event);
                }
                _ => {}
            }
        }
    }

    /// Redraw if `now` shows a different minute than the LEDs. Returns whether it drew.
    ///
    /// # Errors
    ///
    /// Any error from the display sink.
    pub async fn tick<S, D>(&mut self, sink: &mut S, delay: &mut D, now: time::Time) -> Result<bool>
    where
        S: DisplaySink,
        D: DelayNs,
    {
        let (hour, minute) = (now.hour(), now.minute());
        if self.shown == Some((hour, minute)) {
            return Ok(false);
        }
        debug!("word_clock: showing {}:{}", hour, minute);
        self.phrase = self.language.translate(hour, minute);
        self.renderer
            .render(sink, delay, &self.phrase, minute, &self.palette())
            .await?;
        self.shown = Some((hour, minute));
        Ok(true)
    }

    /// Switch to the next palette and redraw the shown phrase and minute in it at once.
    ///
    /// Before the first draw this draws `now` instead. A minute that has passed since the
    /// last draw is left to the next [`Self::tick`].
    ///
    /// # Errors
    ///
    /// Any error from the display sink.
    pub async fn next_mode<S, D>(&mut self, sink: &mut S, delay: &mut D, now: time::Time) -> Result<()>
    where
        S: DisplaySink,
        D: DelayNs,
    {
        self.color_mode = self.color_mode.wrapping_add(1) % COLOR_MODES.len();
        debug!("word_clock: color mode {}", self.color_mode);
        let Some((_, minute)) = self.shown else {
            return self.tick(sink, delay, now).await.map(|_| ());
        };
        let frame = self
            .renderer
            .compose(&self.phrase, minute, &self.palette())?;
        sink.flush(&frame).await
    }
}
