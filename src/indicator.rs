//! Discrete RGB status indicator on three open-drain outputs.
//!
//! The three LED channels share a common anode: a channel is energised by
//! pulling its pin LOW and released by letting it float HIGH. Channels are
//! strictly binary (no PWM dimming), so any nonzero component of a composite
//! color switches its channel fully on.
//!
//! The indicator keeps two pieces of state in lockstep: the per-channel
//! on/off booleans and the composite color as last written. The composite is
//! stored verbatim, not reconstructed from channel state: after
//! `set_color(Srgb::new(10, 0, 0))` a read-back returns exactly
//! `(10, 0, 0)`, even though the red channel is simply "on".

use embedded_hal::digital::OutputPin;
use palette::Srgb;

use crate::Error;

/// Number of indicator channels.
pub const CHANNEL_COUNT: usize = 3;

/// One of the three color channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    Red = 0,
    Green = 1,
    Blue = 2,
}

impl Channel {
    /// Map an ordinal index (red 0, green 1, blue 2) to a channel.
    ///
    /// Out-of-range indices are rejected, never clamped.
    pub const fn from_index(index: usize) -> Result<Self, Error> {
        match index {
            0 => Ok(Channel::Red),
            1 => Ok(Channel::Green),
            2 => Ok(Channel::Blue),
            _ => Err(Error::InvalidChannel),
        }
    }

    /// Ordinal index of this channel.
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Binary state of a single channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelState {
    Off,
    On,
}

impl From<bool> for ChannelState {
    fn from(on: bool) -> Self {
        if on { ChannelState::On } else { ChannelState::Off }
    }
}

/// Composite color presets.
pub mod colors {
    use palette::Srgb;

    pub const BLACK: Srgb<u8> = Srgb::new(0, 0, 0);
    pub const WHITE: Srgb<u8> = Srgb::new(255, 255, 255);
    pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);
    pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);
    pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);
    pub const YELLOW: Srgb<u8> = Srgb::new(255, 255, 0);
    pub const MAGENTA: Srgb<u8> = Srgb::new(255, 0, 255);
    pub const CYAN: Srgb<u8> = Srgb::new(0, 255, 255);
    pub const ORANGE: Srgb<u8> = Srgb::new(255, 165, 0);
    pub const PURPLE: Srgb<u8> = Srgb::new(128, 0, 128);
    pub const PINK: Srgb<u8> = Srgb::new(255, 192, 203);
}

/// Tri-channel RGB indicator driver.
///
/// Generic over any [`OutputPin`] so the state model runs against real GPIO
/// or test doubles. Access is not locked; callers serialise their own use.
pub struct RgbIndicator<R, G, B> {
    red: R,
    green: G,
    blue: B,
    states: [ChannelState; CHANNEL_COUNT],
    color: Srgb<u8>,
}

impl<R, G, B> RgbIndicator<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    /// Take ownership of the three configured channel pins and drive
    /// everything off.
    pub fn new(red: R, green: G, blue: B) -> Self {
        let mut indicator = Self {
            red,
            green,
            blue,
            states: [ChannelState::Off; CHANNEL_COUNT],
            color: colors::BLACK,
        };
        indicator.all_off();
        indicator
    }

    /// Switch a single channel, updating the matching composite component.
    ///
    /// `On` pulls the pin to electrical LOW (the LEDs are wired active low)
    /// and sets the component to 255; `Off` releases the pin HIGH and sets
    /// it to 0. The other two components are left untouched.
    pub fn set_channel(&mut self, channel: Channel, state: ChannelState) {
        self.drive(channel, state);

        let component = if state == ChannelState::On { 255 } else { 0 };
        match channel {
            Channel::Red => self.color.red = component,
            Channel::Green => self.color.green = component,
            Channel::Blue => self.color.blue = component,
        }
    }

    /// Current binary state of a channel.
    pub fn channel_state(&self, channel: Channel) -> ChannelState {
        self.states[channel.index()]
    }

    /// Apply a composite color.
    ///
    /// A nonzero component switches its channel on, zero switches it off.
    /// The stored composite keeps the caller's exact components, so
    /// [`color`](Self::color) reads back the value as written rather than a
    /// saturated reconstruction: `(10, 0, 0)` stays `(10, 0, 0)`.
    pub fn set_color(&mut self, color: Srgb<u8>) {
        self.drive(Channel::Red, ChannelState::from(color.red > 0));
        self.drive(Channel::Green, ChannelState::from(color.green > 0));
        self.drive(Channel::Blue, ChannelState::from(color.blue > 0));
        self.color = color;
    }

    /// Composite color as last written.
    pub fn color(&self) -> Srgb<u8> {
        self.color
    }

    /// Turn every channel off.
    pub fn all_off(&mut self) {
        self.set_color(colors::BLACK);
    }

    /// Turn every channel on (white).
    pub fn all_on(&mut self) {
        self.set_color(colors::WHITE);
    }

    pub fn red(&mut self) {
        self.set_color(colors::RED);
    }

    pub fn green(&mut self) {
        self.set_color(colors::GREEN);
    }

    pub fn blue(&mut self) {
        self.set_color(colors::BLUE);
    }

    pub fn yellow(&mut self) {
        self.set_color(colors::YELLOW);
    }

    pub fn magenta(&mut self) {
        self.set_color(colors::MAGENTA);
    }

    pub fn cyan(&mut self) {
        self.set_color(colors::CYAN);
    }

    /// Shut the indicator down and hand the pins back.
    pub fn release(mut self) -> (R, G, B) {
        self.all_off();
        (self.red, self.green, self.blue)
    }

    fn drive(&mut self, channel: Channel, state: ChannelState) {
        let on = state == ChannelState::On;
        match channel {
            Channel::Red => write(&mut self.red, on),
            Channel::Green => write(&mut self.green, on),
            Channel::Blue => write(&mut self.blue, on),
        }
        self.states[channel.index()] = state;
    }
}

// ON is electrical LOW on this hardware.
fn write<P: OutputPin>(pin: &mut P, on: bool) {
    let _ = if on { pin.set_low() } else { pin.set_high() };
}
