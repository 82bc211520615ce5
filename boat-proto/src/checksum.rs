//! XOR checksum for radio frames.
//!
//! The check byte is the bitwise XOR of `cmd`, `left`, and `right`. It
//! detects any odd number of bit flips per bit position; an even number of
//! flips in the same position cancels out and passes validation. That is
//! the entirety of the integrity guarantee on this link.

use crate::types::RadioMessage;

impl RadioMessage {
    /// Checksum of the payload fields. Pure, no side effects.
    #[inline]
    #[must_use]
    pub const fn compute_check(&self) -> u8 {
        self.cmd ^ (self.left as u8) ^ (self.right as u8)
    }

    /// Seal the message: store the computed checksum in `check`.
    ///
    /// Called by the sender immediately before transmission.
    #[inline]
    pub fn assign_check(&mut self) {
        self.check = self.compute_check();
    }

    /// Whether `check` matches the payload fields.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.check == self.compute_check()
    }
}
