//! Frame parser: raw bytes to a validated [`RadioMessage`].

use crate::types::{RadioMessage, WIRE_SIZE};

/// Error type for frame parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ParseError {
    /// Input is not exactly one frame long.
    Length,
    /// Check byte does not match the payload fields.
    Checksum,
}

impl core::fmt::Display for ParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Length => write!(f, "frame is not {} bytes", WIRE_SIZE),
            Self::Checksum => write!(f, "checksum mismatch"),
        }
    }
}

/// Decode four raw bytes into a checksum-validated message.
///
/// The command byte is **not** decoded here: a frame whose checksum is
/// intact but whose `cmd` is outside the recognized set parses fine, and
/// the receiver decides what to do with it via [`RadioMessage::command()`].
///
/// # Errors
///
/// - [`ParseError::Length`] if `bytes` is not exactly [`WIRE_SIZE`] long.
/// - [`ParseError::Checksum`] if the check byte does not match; the frame
///   must be dropped with no motor action taken.
pub fn parse(bytes: &[u8]) -> Result<RadioMessage, ParseError> {
    let &[cmd, left, right, check] = bytes else {
        return Err(ParseError::Length);
    };

    let msg = RadioMessage {
        cmd,
        left: left as i8,
        right: right as i8,
        check,
    };

    if !msg.is_valid() {
        return Err(ParseError::Checksum);
    }

    Ok(msg)
}
