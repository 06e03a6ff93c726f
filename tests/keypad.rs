mod tests {
    use core::convert::Infallible;
    use std::{cell::Cell, rc::Rc, sync::Mutex};

    use embedded_hal::digital::{ErrorType, InputPin, PinState};
    use hexpad::{Error, KEY_COUNT, KEY_NAMES, KeyEvent, KeyEvents, KeyState, Keypad};

    #[derive(Clone)]
    struct FakePin(Rc<Cell<PinState>>);

    impl FakePin {
        fn new() -> Self {
            FakePin(Rc::new(Cell::new(PinState::High)))
        }

        fn set(&self, level: PinState) {
            self.0.set(level);
        }
    }

    impl ErrorType for FakePin {
        type Error = Infallible;
    }

    impl InputPin for FakePin {
        fn is_high(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get() == PinState::High)
        }

        fn is_low(&mut self) -> Result<bool, Infallible> {
            Ok(self.0.get() == PinState::Low)
        }
    }

    fn build() -> (Keypad<FakePin>, [FakePin; KEY_COUNT]) {
        let pins: [FakePin; KEY_COUNT] = core::array::from_fn(|_| FakePin::new());
        let keypad = Keypad::new(pins.clone());
        (keypad, pins)
    }

    #[test]
    fn resolves_fixed_names() {
        let (keypad, _pins) = build();
        for name in KEY_NAMES {
            let classifier = keypad.get(name).unwrap();
            assert_eq!(classifier.name(), name);
        }
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        let (keypad, _pins) = build();
        assert!(keypad.get("key3").is_some());
        assert!(keypad.get("key9").is_none());
        assert!(keypad.get("").is_none());
        assert!(keypad.get("KEY1").is_none());
    }

    #[test]
    fn unknown_names_return_sentinels() {
        let (keypad, _pins) = build();
        assert_eq!(keypad.state("nonexistent"), KeyState::Idle);
        assert_eq!(keypad.last_event("nonexistent"), KeyEvent::None);
    }

    #[test]
    fn attach_requires_known_name() {
        fn noop(_name: &'static str, _event: KeyEvent) {}

        let (mut keypad, _pins) = build();
        assert_eq!(
            keypad.attach("key9", KeyEvents::ALL, noop),
            Err(Error::UnknownKey)
        );
        assert_eq!(keypad.attach("key2", KeyEvents::ALL, noop), Ok(()));
    }

    #[test]
    fn process_classifies_press_and_release() {
        let (mut keypad, pins) = build();

        pins[0].set(PinState::Low);
        keypad.process();
        keypad.process();
        assert_eq!(keypad.state("key1"), KeyState::Pressed);
        assert_eq!(keypad.last_event("key1"), KeyEvent::Down);

        // Untouched keys stay quiet.
        assert_eq!(keypad.state("key2"), KeyState::Idle);
        assert_eq!(keypad.last_event("key2"), KeyEvent::None);

        pins[0].set(PinState::High);
        keypad.process();
        keypad.process();
        assert_eq!(keypad.state("key1"), KeyState::Idle);
        assert_eq!(keypad.last_event("key1"), KeyEvent::Up);
    }

    #[test]
    fn keys_classify_independently() {
        let (mut keypad, pins) = build();

        pins[2].set(PinState::Low);
        pins[5].set(PinState::Low);
        keypad.process();
        keypad.process();

        assert_eq!(keypad.last_event("key3"), KeyEvent::Down);
        assert_eq!(keypad.last_event("key6"), KeyEvent::Down);
        assert_eq!(keypad.last_event("key1"), KeyEvent::None);
    }

    #[test]
    fn attachments_accumulate_in_order() {
        static ORDER: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

        fn first(_name: &'static str, _event: KeyEvent) {
            ORDER.lock().unwrap().push("first");
        }
        fn second(_name: &'static str, _event: KeyEvent) {
            ORDER.lock().unwrap().push("second");
        }

        let (mut keypad, pins) = build();
        keypad.attach("key1", KeyEvents::DOWN, first).unwrap();
        keypad.attach("key1", KeyEvents::DOWN, second).unwrap();

        pins[0].set(PinState::Low);
        keypad.process();
        keypad.process();

        assert_eq!(*ORDER.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn attachment_mask_filters_events() {
        static UPS: Mutex<Vec<&'static str>> = Mutex::new(Vec::new());

        fn on_up(name: &'static str, _event: KeyEvent) {
            UPS.lock().unwrap().push(name);
        }

        let (mut keypad, pins) = build();
        keypad.attach("key4", KeyEvents::UP, on_up).unwrap();

        pins[3].set(PinState::Low);
        keypad.process();
        keypad.process();
        assert!(UPS.lock().unwrap().is_empty());

        pins[3].set(PinState::High);
        keypad.process();
        keypad.process();
        assert_eq!(*UPS.lock().unwrap(), vec!["key4"]);
    }

    #[test]
    fn release_returns_all_pins() {
        let (keypad, _pins) = build();
        let returned = keypad.release();
        assert_eq!(returned.len(), KEY_COUNT);
    }
}
