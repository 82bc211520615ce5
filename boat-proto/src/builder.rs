//! Builder pattern API for constructing frames.
//!
//! A thin fluent layer over [`RadioMessage::new`] for call sites that set
//! fields piecemeal.
//!
//! # Example
//!
//! ```
//! use boat_proto::{MessageBuilder, RadioCommand};
//!
//! let msg = MessageBuilder::new()
//!     .command(RadioCommand::PaMax)
//!     .left(75)
//!     .right(-25)
//!     .build();
//! assert!(msg.is_valid());
//! ```

use crate::types::{RadioCommand, RadioMessage, WIRE_SIZE};

/// Fluent builder for [`RadioMessage`].
///
/// Defaults: [`RadioCommand::PaLow`], both speeds 0.
#[derive(Debug, Clone, Copy)]
#[must_use]
pub struct MessageBuilder {
    cmd: RadioCommand,
    left: i8,
    right: i8,
}

impl MessageBuilder {
    /// Start a new builder with default values.
    pub const fn new() -> Self {
        Self {
            cmd: RadioCommand::PaLow,
            left: 0,
            right: 0,
        }
    }

    /// Set the command.
    pub const fn command(mut self, cmd: RadioCommand) -> Self {
        self.cmd = cmd;
        self
    }

    /// Set the left motor speed percentage.
    pub const fn left(mut self, left: i8) -> Self {
        self.left = left;
        self
    }

    /// Set the right motor speed percentage.
    pub const fn right(mut self, right: i8) -> Self {
        self.right = right;
        self
    }

    /// Set both speeds at once.
    pub const fn speeds(mut self, left: i8, right: i8) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    /// Build the sealed message (checksum assigned).
    pub fn build(self) -> RadioMessage {
        RadioMessage::new(self.cmd, self.left, self.right)
    }

    /// Build and encode straight to the wire layout.
    pub fn wire(self) -> [u8; WIRE_SIZE] {
        self.build().to_bytes()
    }
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_builder_defaults() {
        let msg = MessageBuilder::new().build();
        assert_eq!(msg.command(), Some(RadioCommand::PaLow));
        assert_eq!((msg.left, msg.right), (0, 0));
        assert!(msg.is_valid());
    }

    #[test]
    fn test_builder_sets_fields() {
        let msg = MessageBuilder::new()
            .command(RadioCommand::Reset)
            .speeds(-100, 100)
            .build();
        assert_eq!(msg.command(), Some(RadioCommand::Reset));
        assert_eq!((msg.left, msg.right), (-100, 100));
    }

    #[test]
    fn test_builder_wire_parses() {
        let frame = MessageBuilder::new().command(RadioCommand::PaMin).wire();
        let msg = parse(&frame).unwrap();
        assert_eq!(msg.command(), Some(RadioCommand::PaMin));
    }
}
