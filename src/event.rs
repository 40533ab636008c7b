//! User input reaching the clock loop.
//!
//! Button drivers (or a network task) push [`ClockEvent`]s into a [`ClockEvents`] channel;
//! the clock loop drains it through [`ChannelEvents`] with a bounded wait so the minute
//! check keeps running when nobody presses anything.
//!
//! ```rust
//! use embassy_futures::block_on;
//! use embassy_time::Duration;
//! use wordclock_kit::event::{ChannelEvents, ClockEvent, ClockEvents, EventSource};
//!
//! static EVENTS: ClockEvents = ClockEvents::new();
//!
//! EVENTS.try_send(ClockEvent::NextMode).ok();
//! let mut events = ChannelEvents::new(&EVENTS);
//! assert_eq!(block_on(events.wait_for_event(Duration::from_secs(2))), ClockEvent::NextMode);
//! ```

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_time::{Duration, with_timeout};

/// Depth of [`ClockEvents`].
pub const EVENT_QUEUE_DEPTH: usize = 4;

/// Channel type for delivering [`ClockEvent`]s.
pub type ClockEvents = Channel<CriticalSectionRawMutex, ClockEvent, EVENT_QUEUE_DEPTH>;

/// Result of one bounded wait for input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockEvent {
    /// The wait timed out.
    #[default]
    None,
    /// Cycle to the next color palette.
    NextMode,
    /// The host is shutting the clock down.
    Exit,
    /// Back to the menu.
    Return,
}

impl ClockEvent {
    /// Whether this event ends the clock loop.
    #[must_use]
    pub const fn ends_loop(self) -> bool {
        matches!(self, Self::Exit | Self::Return)
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::NextMode => "next_mode",
            Self::Exit => "exit",
            Self::Return => "return",
        }
    }
}

/// Source of user input for the clock loop.
pub trait EventSource {
    /// Wait at most `timeout` for the next event, returning [`ClockEvent::None`] on timeout.
    async fn wait_for_event(&mut self, timeout: Duration) -> ClockEvent;
}

impl<T: EventSource> EventSource for &mut T {
    async fn wait_for_event(&mut self, timeout: Duration) -> ClockEvent {
        (**self).wait_for_event(timeout).await
    }
}

/// [`EventSource`] reading from a shared [`ClockEvents`] channel.
pub struct ChannelEvents<'a> {
    events: &'a ClockEvents,
}

impl<'a> ChannelEvents<'a> {
    /// Read events from `events`.
    #[must_use]
    pub const fn new(events: &'a ClockEvents) -> Self {
        Self { events }
    }
}

impl EventSource for ChannelEvents<'_> {
    async fn wait_for_event(&mut self, timeout: Duration) -> ClockEvent {
        match with_timeout(timeout, self.events.receive()).await {
            Ok(event) => {
                debug!("event: received {}", event.name());
                event
            }
            Err(_) => ClockEvent::None,
        }
    }
}
