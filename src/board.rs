//! ESP32-S3 board wiring: pin assignments and driver construction.

use esp_hal::{
    assign_resources,
    clock::CpuClock,
    gpio::{
        DriveMode,
        Input,
        InputConfig,
        Level,
        Output,
        OutputConfig,
        Pull,
    },
};

use crate::{
    Keypad,
    RgbIndicator,
};

/// The indicator as wired on this board.
pub type BoardIndicator = RgbIndicator<Output<'static>, Output<'static>, Output<'static>>;

/// The keypad as wired on this board.
pub type BoardKeypad = Keypad<Input<'static>>;

// ── Pin / peripheral assignments ────────────────────────────────────────────

assign_resources! {
    pub Resources<'d> {
        indicator: IndicatorResources<'d> {
            red: GPIO4,
            green: GPIO5,
            blue: GPIO6,
        },
        keys: KeyResources<'d> {
            key1: GPIO7,
            key2: GPIO8,
            key3: GPIO9,
            key4: GPIO10,
            key5: GPIO11,
            key6: GPIO12,
        }
    }
}

// ── Board initialisation ────────────────────────────────────────────────────

/// Initialise the board hardware and return the raw peripheral set.
///
/// Call this once at the top of your `main`, then use [`split_resources!`]
/// to break the peripherals into typed resource groups.
#[must_use]
pub fn init() -> esp_hal::peripherals::Peripherals {
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    esp_hal::init(config)
}

// ── Resource → driver conversions ───────────────────────────────────────────

impl From<esp_hal::peripherals::Peripherals> for Resources<'_> {
    fn from(peripherals: esp_hal::peripherals::Peripherals) -> Self {
        split_resources!(peripherals)
    }
}

impl From<IndicatorResources<'static>> for BoardIndicator {
    fn from(res: IndicatorResources<'static>) -> Self {
        // Common-anode LEDs on open-drain outputs: HIGH releases a channel,
        // LOW lights it.
        let config = OutputConfig::default().with_drive_mode(DriveMode::OpenDrain);
        RgbIndicator::new(
            Output::new(res.red, Level::High, config),
            Output::new(res.green, Level::High, config),
            Output::new(res.blue, Level::High, config),
        )
    }
}

impl From<KeyResources<'static>> for BoardKeypad {
    fn from(res: KeyResources<'static>) -> Self {
        let pull_up = InputConfig::default().with_pull(Pull::Up);
        Keypad::new([
            Input::new(res.key1, pull_up),
            Input::new(res.key2, pull_up),
            Input::new(res.key3, pull_up),
            Input::new(res.key4, pull_up),
            Input::new(res.key5, pull_up),
            Input::new(res.key6, pull_up),
        ])
    }
}
