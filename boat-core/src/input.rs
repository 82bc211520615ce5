//! Input-side hardware traits and error types.
//!
//! These traits are the hardware boundary on the sampling side: the ADC
//! channels under the stick, the digital button lines, and the radio's
//! receive path. Implementations live in board crates; tests use mocks.

use crate::types::Buttons;
use boat_proto::WIRE_SIZE;

/// Error type for radio link operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Radio/communication I/O error.
    Io,
    /// Radio busy, frame not accepted.
    Busy,
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io => write!(f, "link I/O error"),
            Self::Busy => write!(f, "link busy"),
        }
    }
}

/// Two analog channels under the stick, each returning a 10-bit sample.
pub trait AnalogAxes {
    /// Sample the X axis (0..=1023).
    fn read_x(&mut self) -> u16;

    /// Sample the Y axis (0..=1023).
    fn read_y(&mut self) -> u16;
}

/// A bank of digital button lines sampled in one pass.
///
/// The bit-combination of the individual lines into a bitmap happens behind
/// this trait, so the edge-tracking logic above it is testable without
/// hardware.
pub trait ButtonBank {
    /// Sample every button line into a bitmap.
    fn read(&mut self) -> Buttons;
}

/// Receive path of the radio transport.
///
/// The transport carries 4-byte frames verbatim, with no framing,
/// addressing, or acknowledgment on top.
pub trait FrameSource {
    /// Poll for a pending frame. Non-blocking; `Ok(None)` means idle.
    fn try_recv(&mut self) -> Result<Option<[u8; WIRE_SIZE]>, LinkError>;
}
