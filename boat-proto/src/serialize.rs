//! Frame serialization: [`RadioMessage`] to raw bytes.
//!
//! The wire layout is the four struct fields verbatim, in order:
//!
//! ```text
//! [cmd, left, right, check]
//! ```
//!
//! # Example
//!
//! ```
//! use boat_proto::{RadioCommand, RadioMessage};
//!
//! let msg = RadioMessage::new(RadioCommand::PaLow, 1, 2);
//! let frame = msg.to_bytes();
//! assert_eq!(frame, [0x02, 0x01, 0x02, 0x02 ^ 0x01 ^ 0x02]);
//! ```

use crate::types::{RadioMessage, WIRE_SIZE};

/// Error type for serialization operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SerializeError {
    /// The output buffer is too small to hold one frame.
    BufferTooSmall,
    /// A write operation failed (for I/O adapters).
    WriteError,
}

impl core::fmt::Display for SerializeError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::BufferTooSmall => write!(f, "buffer too small"),
            Self::WriteError => write!(f, "write error"),
        }
    }
}

impl RadioMessage {
    /// Encode to the 4-byte wire layout.
    #[inline]
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; WIRE_SIZE] {
        [self.cmd, self.left as u8, self.right as u8, self.check]
    }

    /// Write the frame into `buf`, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `buf` holds fewer than
    /// [`WIRE_SIZE`] bytes.
    pub fn write_wire(&self, buf: &mut [u8]) -> Result<usize, SerializeError> {
        let Some(dst) = buf.get_mut(..WIRE_SIZE) else {
            return Err(SerializeError::BufferTooSmall);
        };
        dst.copy_from_slice(&self.to_bytes());
        Ok(WIRE_SIZE)
    }

    /// Encode into a heapless vector.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::BufferTooSmall`] if `N < WIRE_SIZE`.
    #[cfg(feature = "heapless")]
    pub fn to_vec<const N: usize>(&self) -> Result<heapless::Vec<u8, N>, SerializeError> {
        heapless::Vec::from_slice(&self.to_bytes()).map_err(|_| SerializeError::BufferTooSmall)
    }

    /// Write the frame to an [`embedded_io::Write`] peripheral.
    ///
    /// # Errors
    ///
    /// Returns [`SerializeError::WriteError`] if the underlying write fails.
    #[cfg(feature = "embedded-io")]
    pub fn write_io<W: embedded_io::Write>(&self, writer: &mut W) -> Result<usize, SerializeError> {
        writer
            .write_all(&self.to_bytes())
            .map_err(|_| SerializeError::WriteError)?;
        Ok(WIRE_SIZE)
    }
}
