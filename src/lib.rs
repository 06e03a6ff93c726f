//! # hexpad
//!
//! Hardware support library for the Hexpad six-key RGB macropad.
//!
//! Provides clean abstractions for the two onboard peripherals:
//! - **Indicator**: discrete RGB status LED on three open-drain, active-low
//!   outputs, with binary channels and composite color presets
//! - **Keypad**: six momentary key switches (`"key1"`..`"key6"`) with
//!   tick-driven press/release/double/long/continuous classification and
//!   per-key callback attachment
//!
//! The drivers are generic over `embedded-hal` digital pins, so the whole
//! state model builds and tests on the host. The `esp32s3` feature adds the
//! board layer: pin assignments, a board `init()`, and conversions from
//! resource groups to ready-configured drivers.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! let peripherals = hexpad::init();
//! let resources = hexpad::split_resources!(peripherals);
//!
//! let mut indicator: hexpad::BoardIndicator = resources.indicator.into();
//! let mut keypad: hexpad::BoardKeypad = resources.keys.into();
//!
//! indicator.cyan();
//! keypad.attach("key1", hexpad::KeyEvents::DOUBLE, on_double)?;
//! loop {
//!     keypad.process(); // every 20-50 ms
//! }
//! ```

#![no_std]

pub mod classifier;
pub mod error;
pub mod indicator;
pub mod keypad;

#[cfg(feature = "esp32s3")]
mod board;

#[cfg(feature = "esp32s3")]
pub use board::{
    BoardIndicator,
    BoardKeypad,
    IndicatorResources,
    KeyResources,
    Resources,
    init,
};
pub use classifier::{
    Classifier,
    KeyCallback,
    KeyEvent,
    KeyEvents,
    KeyState,
};
pub use error::Error;
pub use indicator::{
    CHANNEL_COUNT,
    Channel,
    ChannelState,
    RgbIndicator,
    colors,
};
pub use keypad::{
    KEY_COUNT,
    KEY_NAMES,
    Keypad,
};

/// StaticCell helper — allocates a value into a `static` exactly once.
#[cfg(feature = "esp32s3")]
#[macro_export]
macro_rules! mk_static {
    ($t:ty, $val:expr) => {{
        static STATIC_CELL: static_cell::StaticCell<$t> = static_cell::StaticCell::new();
        #[deny(unused_attributes)]
        let x = STATIC_CELL.uninit().write($val);
        x
    }};
}
