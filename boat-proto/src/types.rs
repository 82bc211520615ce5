//! Core wire types: RadioCommand and RadioMessage.

/// Size of one frame on the wire, in bytes.
pub const WIRE_SIZE: usize = 4;

/// Command codes carried in the `cmd` field of a frame.
///
/// The `Pa*` variants select the radio power amplifier level (both ends of
/// the link follow the same selection); `Reset` asks the receiver to reboot
/// through its watchdog.
///
/// The values are single distinct bits so that no recognized command is a
/// corruption-distance of one from another.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum RadioCommand {
    /// Minimum transmit power.
    PaMin = 0x01,
    /// Low transmit power.
    PaLow = 0x02,
    /// Maximum transmit power.
    PaMax = 0x04,
    /// Reboot the receiver.
    Reset = 0x08,
}

impl RadioCommand {
    /// Decode a raw command byte.
    ///
    /// Returns `None` for any byte outside the enumerated set; unknown
    /// values are representable in-band and must be handled by the caller.
    #[inline]
    #[must_use]
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0x01 => Some(Self::PaMin),
            0x02 => Some(Self::PaLow),
            0x04 => Some(Self::PaMax),
            0x08 => Some(Self::Reset),
            _ => None,
        }
    }

    /// The raw command byte.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self as u8
    }
}

/// One radio frame: command byte, two signed speed percentages, check byte.
///
/// `left` and `right` are motor speeds in [-100, 100]. `check` must equal
/// the XOR of the other three bytes for the frame to be considered valid.
///
/// A message is constructed fresh per transmission attempt by the sender and
/// consumed by the receiver after one validation/dispatch cycle; nothing is
/// persisted.
///
/// `cmd` is kept as the raw byte so that a received frame with an unknown
/// command can still be represented (and rejected) after checksum
/// validation; use [`RadioMessage::command()`] to decode it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RadioMessage {
    /// Raw command byte (see [`RadioCommand`]).
    pub cmd: u8,
    /// Left motor speed percentage, -100 to 100.
    pub left: i8,
    /// Right motor speed percentage, -100 to 100.
    pub right: i8,
    /// XOR checksum of `cmd`, `left`, `right`.
    pub check: u8,
}

impl RadioMessage {
    /// Create a sealed message: the checksum is assigned on construction.
    #[must_use]
    pub fn new(cmd: RadioCommand, left: i8, right: i8) -> Self {
        let mut msg = Self {
            cmd: cmd.raw(),
            left,
            right,
            check: 0,
        };
        msg.assign_check();
        msg
    }

    /// Decode the command byte, `None` if it is not a recognized command.
    #[inline]
    #[must_use]
    pub const fn command(&self) -> Option<RadioCommand> {
        RadioCommand::from_raw(self.cmd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trip() {
        for cmd in [
            RadioCommand::PaMin,
            RadioCommand::PaLow,
            RadioCommand::PaMax,
            RadioCommand::Reset,
        ] {
            assert_eq!(RadioCommand::from_raw(cmd.raw()), Some(cmd));
        }
    }

    #[test]
    fn test_unknown_command_bytes() {
        assert_eq!(RadioCommand::from_raw(0x00), None);
        assert_eq!(RadioCommand::from_raw(0x03), None);
        assert_eq!(RadioCommand::from_raw(0x10), None);
        assert_eq!(RadioCommand::from_raw(0xFF), None);
    }

    #[test]
    fn test_new_is_sealed() {
        let msg = RadioMessage::new(RadioCommand::PaMax, -100, 100);
        assert!(msg.is_valid());
        assert_eq!(msg.command(), Some(RadioCommand::PaMax));
    }

    #[test]
    fn test_unrecognized_cmd_field() {
        let mut msg = RadioMessage::new(RadioCommand::PaMin, 0, 0);
        msg.cmd = 0x55;
        msg.assign_check();
        assert!(msg.is_valid());
        assert_eq!(msg.command(), None);
    }
}
