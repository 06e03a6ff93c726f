//! Tick-driven key gesture classification.
//!
//! Every switch gets one [`Classifier`]: a small state machine that turns a
//! stream of raw level samples into discrete gestures (press, release,
//! double press, long press, continuous hold, and the matching releases).
//! One call to [`Classifier::service`] is one tick; the owner samples the
//! pin and pushes the level in at a fixed period (20-50 ms works well).
//!
//! All thresholds are counted in ticks, so the wall-clock feel scales with
//! the service period. At a 20 ms tick the defaults below mean a 40 ms
//! debounce, a 240 ms double-press window, a 1 s long press and a 3 s
//! continuous hold. Each gesture fires exactly once per press cycle.

use embedded_hal::digital::PinState;
use heapless::Vec;

use crate::Error;

/// Ticks a level change must persist before it is accepted.
pub const DEBOUNCE_TICKS: u8 = 2;

/// Maximum ticks between a release and the next press for a double press.
pub const DOUBLE_GAP_TICKS: u16 = 12;

/// Ticks a key must stay down to classify as a long press.
pub const LONG_TICKS: u16 = 50;

/// Ticks a key must stay down to classify as a continuous hold.
pub const HOLD_TICKS: u16 = 150;

/// Callback attachments per key, the default diagnostic included.
pub const MAX_ATTACHMENTS: usize = 8;

/// A classified key gesture.
///
/// `None` doubles as the "nothing happened" sentinel returned by queries for
/// keys that have never fired, or for names that resolve to no key at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyEvent {
    None,
    Down,
    Up,
    Double,
    Long,
    LongFree,
    Continuous,
    ContinuousFree,
}

impl KeyEvent {
    const fn bit(self) -> u8 {
        match self {
            KeyEvent::None => 0,
            KeyEvent::Down => 1 << 0,
            KeyEvent::Up => 1 << 1,
            KeyEvent::Double => 1 << 2,
            KeyEvent::Long => 1 << 3,
            KeyEvent::LongFree => 1 << 4,
            KeyEvent::Continuous => 1 << 5,
            KeyEvent::ContinuousFree => 1 << 6,
        }
    }
}

/// Where a key currently is in its press cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    /// Released. Also the sentinel for unknown key names.
    Idle,
    /// Down, short so far.
    Pressed,
    /// Down past the long-press threshold.
    Held,
    /// Down past the continuous-hold threshold.
    Repeating,
}

/// Set of gesture kinds a callback subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvents(u8);

impl KeyEvents {
    pub const DOWN: Self = Self(KeyEvent::Down.bit());
    pub const UP: Self = Self(KeyEvent::Up.bit());
    pub const DOUBLE: Self = Self(KeyEvent::Double.bit());
    pub const LONG: Self = Self(KeyEvent::Long.bit());
    pub const LONG_FREE: Self = Self(KeyEvent::LongFree.bit());
    pub const CONTINUOUS: Self = Self(KeyEvent::Continuous.bit());
    pub const CONTINUOUS_FREE: Self = Self(KeyEvent::ContinuousFree.bit());

    /// Every gesture kind.
    pub const ALL: Self = Self(0x7f);

    /// Whether `event` is part of this set.
    pub const fn contains(self, event: KeyEvent) -> bool {
        self.0 & event.bit() != 0
    }
}

impl core::ops::BitOr for KeyEvents {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Callback invoked synchronously from [`Classifier::service`].
///
/// Runs inline in the servicing context; keep it short, a slow callback
/// delays the whole tick.
pub type KeyCallback = fn(name: &'static str, event: KeyEvent);

/// Consecutive-sample level filter.
struct LevelFilter {
    stable: bool,
    run: u8,
}

impl LevelFilter {
    const fn new() -> Self {
        Self {
            stable: false,
            run: 0,
        }
    }

    /// Feed one raw sample; returns the new level once a change has held for
    /// [`DEBOUNCE_TICKS`] consecutive ticks.
    fn update(&mut self, sample: bool) -> Option<bool> {
        if sample == self.stable {
            self.run = 0;
            return None;
        }

        self.run += 1;
        if self.run < DEBOUNCE_TICKS {
            return None;
        }

        self.stable = sample;
        self.run = 0;
        Some(sample)
    }
}

/// Per-switch gesture classifier with bounded callback fan-out.
pub struct Classifier {
    name: &'static str,
    active_level: PinState,
    filter: LevelFilter,
    state: KeyState,
    event: KeyEvent,
    held: u16,
    gap: u16,
    recent_click: bool,
    attachments: Vec<(KeyEvents, KeyCallback), MAX_ATTACHMENTS>,
}

impl Classifier {
    /// Create a classifier for a switch that reads `active_level` when
    /// pressed.
    pub fn new(name: &'static str, active_level: PinState) -> Self {
        Self {
            name,
            active_level,
            filter: LevelFilter::new(),
            state: KeyState::Idle,
            event: KeyEvent::None,
            held: 0,
            gap: 0,
            recent_click: false,
            attachments: Vec::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Current phase of the press cycle.
    pub fn state(&self) -> KeyState {
        self.state
    }

    /// Last classified gesture.
    pub fn last_event(&self) -> KeyEvent {
        self.event
    }

    /// Subscribe `callback` to the gestures in `events`.
    ///
    /// Attachments accumulate: registering twice for the same kind fires the
    /// callback twice, in registration order. Nothing is ever replaced or
    /// removed; the table only empties when the classifier is dropped.
    pub fn attach(&mut self, events: KeyEvents, callback: KeyCallback) -> Result<(), Error> {
        self.attachments
            .push((events, callback))
            .map_err(|_| Error::AttachmentsFull)
    }

    /// Advance the machine by one tick with a fresh level sample.
    ///
    /// Returns the gesture classified on this tick, [`KeyEvent::None`] when
    /// nothing fired. Matching callbacks run inline, in attachment order,
    /// before this returns.
    pub fn service(&mut self, level: PinState) -> KeyEvent {
        let edge = self.filter.update(level == self.active_level);
        let fired = self.step(edge);

        if fired != KeyEvent::None {
            self.event = fired;
            for (events, callback) in &self.attachments {
                if events.contains(fired) {
                    callback(self.name, fired);
                }
            }
        }

        fired
    }

    fn step(&mut self, edge: Option<bool>) -> KeyEvent {
        match self.state {
            KeyState::Idle => {
                self.gap = self.gap.saturating_add(1);
                if edge == Some(true) {
                    self.state = KeyState::Pressed;
                    self.held = 0;
                    if self.recent_click && self.gap <= DOUBLE_GAP_TICKS {
                        self.recent_click = false;
                        return KeyEvent::Double;
                    }
                    self.recent_click = false;
                    return KeyEvent::Down;
                }
            }
            KeyState::Pressed => {
                self.held += 1;
                if edge == Some(false) {
                    self.release(true);
                    return KeyEvent::Up;
                }
                if self.held >= LONG_TICKS {
                    self.state = KeyState::Held;
                    return KeyEvent::Long;
                }
            }
            KeyState::Held => {
                self.held += 1;
                if edge == Some(false) {
                    self.release(false);
                    return KeyEvent::LongFree;
                }
                if self.held >= HOLD_TICKS {
                    self.state = KeyState::Repeating;
                    return KeyEvent::Continuous;
                }
            }
            KeyState::Repeating => {
                if edge == Some(false) {
                    self.release(false);
                    return KeyEvent::ContinuousFree;
                }
            }
        }

        KeyEvent::None
    }

    // Only a short press arms the double-press window.
    fn release(&mut self, short: bool) {
        self.state = KeyState::Idle;
        self.gap = 0;
        self.recent_click = short;
    }
}
