#![allow(missing_docs)]
//! The clock loop against scripted time and events.

use std::collections::VecDeque;

use embassy_futures::block_on;
use embassy_time::Duration;
use embedded_hal_async::delay::DelayNs;
use smart_leds::RGB8;
use time::Time;
use wordclock_kit::config::{ClockSettings, WordClockConfig};
use wordclock_kit::display::DisplaySink;
use wordclock_kit::event::{ClockEvent, EventSource};
use wordclock_kit::language::Language;
use wordclock_kit::render::{COLOR_MODES, RevealMode, StripFrame};
use wordclock_kit::word_clock::{POLL_INTERVAL, TimeSource, WordClock};
use wordclock_kit::{Error, Result};

#[derive(Default)]
struct Recorder {
    frames: Vec<StripFrame>,
}

impl DisplaySink for Recorder {
    async fn flush(&mut self, frame: &StripFrame) -> Result<()> {
        self.frames.push(frame.clone());
        Ok(())
    }
}

struct NoDelay;

impl DelayNs for NoDelay {
    async fn delay_ns(&mut self, _ns: u32) {}
}

/// Returns the scripted times in order, repeating the last one.
struct ScriptedClock {
    times: VecDeque<Time>,
}

impl ScriptedClock {
    fn new(times: &[(u8, u8)]) -> Self {
        Self {
            times: times
                .iter()
                .map(|&(hour, minute)| Time::from_hms(hour, minute, 0).expect("valid time"))
                .collect(),
        }
    }
}

impl TimeSource for ScriptedClock {
    fn now(&mut self) -> Time {
        if self.times.len() > 1 {
            self.times.pop_front().expect("non-empty")
        } else {
            self.times.front().copied().expect("non-empty")
        }
    }
}

struct ScriptedEvents {
    events: VecDeque<ClockEvent>,
    timeouts: Vec<Duration>,
}

impl ScriptedEvents {
    fn new(events: &[ClockEvent]) -> Self {
        Self {
            events: events.iter().copied().collect(),
            timeouts: Vec::new(),
        }
    }
}

impl EventSource for ScriptedEvents {
    async fn wait_for_event(&mut self, timeout: Duration) -> ClockEvent {
        self.timeouts.push(timeout);
        self.events.pop_front().unwrap_or(ClockEvent::Exit)
    }
}

fn instant_english() -> ClockSettings {
    ClockSettings {
        language: Language::English,
        reveal: RevealMode::Instant,
        ..ClockSettings::default()
    }
}

#[test]
fn redraws_only_when_the_minute_changes() {
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let mut sink = Recorder::default();
    let times = ScriptedClock::new(&[(10, 47), (10, 47), (10, 47), (10, 48)]);
    let mut events = ScriptedEvents::new(&[ClockEvent::None, ClockEvent::None, ClockEvent::None]);

    let exit = block_on(clock.run(&mut sink, NoDelay, times, &mut events)).expect("run");

    assert_eq!(exit, ClockEvent::Exit);
    assert_eq!(sink.frames.len(), 2);
    assert!(events.timeouts.iter().all(|&timeout| timeout == POLL_INTERVAL));
}

#[test]
fn return_ends_the_loop() {
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let mut sink = Recorder::default();
    let times = ScriptedClock::new(&[(8, 0)]);
    let events = ScriptedEvents::new(&[ClockEvent::None, ClockEvent::Return]);

    let exit = block_on(clock.run(&mut sink, NoDelay, times, events)).expect("run");

    assert_eq!(exit, ClockEvent::Return);
    assert_eq!(sink.frames.len(), 1);
}

#[test]
fn next_mode_redraws_cached_phrase_in_new_colors() {
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let mut sink = Recorder::default();
    let times = ScriptedClock::new(&[(10, 47)]);
    let events = ScriptedEvents::new(&[ClockEvent::NextMode, ClockEvent::None]);

    block_on(clock.run(&mut sink, NoDelay, times, events)).expect("run");

    assert_eq!(sink.frames.len(), 2);
    assert_eq!(clock.palette(), COLOR_MODES[1]);
    let word_cells = |frame: &StripFrame, color: RGB8| frame.iter().filter(|&&pixel| pixel == color).count();
    let phrase_len = clock.phrase().len();
    assert_eq!(word_cells(&sink.frames[0], COLOR_MODES[0].word), phrase_len + 2);
    assert_eq!(word_cells(&sink.frames[1], COLOR_MODES[1].word), phrase_len + 2);
}

#[test]
fn next_mode_keeps_the_shown_minute() {
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let mut sink = Recorder::default();
    let shown = Time::from_hms(10, 47, 0).expect("valid time");
    let later = Time::from_hms(10, 48, 0).expect("valid time");

    block_on(clock.tick(&mut sink, &mut NoDelay, shown)).expect("tick");
    block_on(clock.next_mode(&mut sink, &mut NoDelay, later)).expect("next mode");

    assert_eq!(sink.frames.len(), 2);
    let palette = COLOR_MODES[1];
    let lit = sink.frames[1].iter().filter(|&&pixel| pixel == palette.word).count();
    // Two minute slots for :47, not three for :48.
    assert_eq!(lit, clock.phrase().len() + 2);
}

#[test]
fn next_mode_wraps_around() {
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let mut sink = Recorder::default();
    let now = Time::from_hms(3, 15, 0).expect("valid time");
    for _ in 0..COLOR_MODES.len() {
        block_on(clock.next_mode(&mut sink, &mut NoDelay, now)).expect("next mode");
    }
    assert_eq!(clock.palette(), COLOR_MODES[0]);
    assert_eq!(sink.frames.len(), COLOR_MODES.len());
}

#[test]
fn typewriter_runs_on_the_boundary_minute() {
    let settings = ClockSettings {
        language: Language::English,
        ..ClockSettings::default()
    };
    let mut clock = WordClock::new(&settings).expect("clock");
    let mut sink = Recorder::default();

    let drew = block_on(clock.tick(&mut sink, &mut NoDelay, Time::from_hms(7, 30, 0).expect("valid time")))
        .expect("tick");

    assert!(drew);
    assert_eq!(sink.frames.len(), clock.phrase().len() + 1);
}

#[test]
fn display_errors_end_the_loop() {
    struct Broken;
    impl DisplaySink for Broken {
        async fn flush(&mut self, _frame: &StripFrame) -> Result<()> {
            Err(Error::DisplayWrite)
        }
    }
    let mut clock = WordClock::new(&instant_english()).expect("clock");
    let result = block_on(clock.run(
        Broken,
        NoDelay,
        ScriptedClock::new(&[(1, 2)]),
        ScriptedEvents::new(&[]),
    ));
    assert_eq!(result, Err(Error::DisplayWrite));
}

#[test]
fn clock_from_config_uses_fallbacks() {
    let config = WordClockConfig::new("marks_wiring", "english").expect("short names");
    let settings = config.resolve();
    let clock = WordClock::new(&settings).expect("clock");
    // Mark's 11x11 table cannot drive the 11x10 English stencil.
    assert_eq!(clock.renderer().wiring().geometry().led_count(), 114);
}
