//! Name-indexed registry for the six key switches.
//!
//! Owns one [`Classifier`] per key plus its input pin, resolves the fixed
//! names `"key1"`..`"key6"`, and fans a periodic sampling tick out to every
//! classifier. The key set is fixed at construction; nothing is added or
//! removed at runtime.

use embedded_hal::digital::{InputPin, PinState};

use crate::{
    Error,
    classifier::{Classifier, KeyCallback, KeyEvent, KeyEvents, KeyState},
};

/// Number of key switches on the board.
pub const KEY_COUNT: usize = 6;

/// Fixed key names, in slot order.
pub const KEY_NAMES: [&str; KEY_COUNT] = ["key1", "key2", "key3", "key4", "key5", "key6"];

/// Keys read LOW when pressed (pulled up, switch to ground).
const ACTIVE_LEVEL: PinState = PinState::Low;

struct KeySlot<P> {
    pin: P,
    classifier: Classifier,
}

/// The six-key bank.
///
/// [`process`](Keypad::process) must be driven from a single context at a
/// bounded interval (20-50 ms recommended): the registry has no internal
/// timer and no locking, so cadence and serialisation are the caller's
/// obligation. Missed ticks degrade gesture detection but never corrupt
/// state.
pub struct Keypad<P> {
    slots: [KeySlot<P>; KEY_COUNT],
}

impl<P: InputPin> Keypad<P> {
    /// Build the bank from the six configured pull-up inputs, in
    /// [`KEY_NAMES`] order.
    ///
    /// Every key starts with a diagnostic callback attached to the full
    /// gesture set, so each classified event shows up on the log without
    /// any setup.
    pub fn new(pins: [P; KEY_COUNT]) -> Self {
        let mut index = 0;
        let slots = pins.map(|pin| {
            let mut classifier = Classifier::new(KEY_NAMES[index], ACTIVE_LEVEL);
            index += 1;
            // The table is empty here; the push cannot fail.
            let _ = classifier.attach(KeyEvents::ALL, log_event);
            KeySlot { pin, classifier }
        });
        Self { slots }
    }

    /// Resolve a key by name.
    ///
    /// Exact, case-sensitive match. Unknown or empty names return `None`;
    /// this is a query, not an error.
    pub fn get(&self, name: &str) -> Option<&Classifier> {
        self.slots
            .iter()
            .map(|slot| &slot.classifier)
            .find(|classifier| classifier.name() == name)
    }

    /// Current press-cycle phase of a key, [`KeyState::Idle`] for unknown
    /// names.
    pub fn state(&self, name: &str) -> KeyState {
        self.get(name).map_or(KeyState::Idle, Classifier::state)
    }

    /// Last classified gesture of a key, [`KeyEvent::None`] for unknown
    /// names.
    pub fn last_event(&self, name: &str) -> KeyEvent {
        self.get(name).map_or(KeyEvent::None, Classifier::last_event)
    }

    /// Subscribe `callback` to the gestures in `events` on the named key.
    ///
    /// Attachments accumulate; see [`Classifier::attach`].
    pub fn attach(
        &mut self,
        name: &str,
        events: KeyEvents,
        callback: KeyCallback,
    ) -> Result<(), Error> {
        self.get_mut(name)
            .ok_or(Error::UnknownKey)?
            .attach(events, callback)
    }

    /// Sample every key once and advance its classifier by one tick.
    ///
    /// Callbacks for classified gestures run inline, in attachment order,
    /// before the next key is sampled.
    pub fn process(&mut self) {
        for slot in &mut self.slots {
            // A failed read counts as released.
            let level = if slot.pin.is_low().unwrap_or(false) {
                PinState::Low
            } else {
                PinState::High
            };
            slot.classifier.service(level);
        }
    }

    /// Tear the bank down and hand the pins back.
    ///
    /// All callback attachments are dropped with their classifiers.
    pub fn release(self) -> [P; KEY_COUNT] {
        self.slots.map(|slot| slot.pin)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Classifier> {
        self.slots
            .iter_mut()
            .map(|slot| &mut slot.classifier)
            .find(|classifier| classifier.name() == name)
    }
}

/// Default diagnostic: log every classified gesture.
fn log_event(name: &'static str, event: KeyEvent) {
    #[cfg(feature = "defmt")]
    defmt::info!("key {} event {}", name, event);
    #[cfg(not(feature = "defmt"))]
    let _ = (name, event);
}
