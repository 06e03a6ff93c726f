//! Error type shared by the indicator and keypad drivers.

use core::fmt;

/// Errors returned by fallible driver operations.
///
/// Queries never return these; they report absence through sentinel values
/// (`None`, [`KeyState::Idle`](crate::KeyState::Idle),
/// [`KeyEvent::None`](crate::KeyEvent::None)) instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Channel index outside the red/green/blue range.
    InvalidChannel,
    /// Key name does not match any switch on the board.
    UnknownKey,
    /// The callback table of a key has no room left.
    AttachmentsFull,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidChannel => write!(f, "channel index out of range"),
            Error::UnknownKey => write!(f, "no key with that name"),
            Error::AttachmentsFull => write!(f, "callback table full"),
        }
    }
}
