//! Radio frame types, checksum, parsing, and serialization for the boat link.
//!
//! This crate provides everything needed to work with the boat's radio
//! protocol:
//!
//! - **Types**: Core data structures for the wire frame
//!   - [`RadioCommand`] - Command codes (power amplifier level, reset)
//!   - [`RadioMessage`] - One complete frame
//!
//! - **Checksum**: XOR integrity byte
//!   - [`RadioMessage::compute_check()`] - Pure checksum of the payload fields
//!   - [`RadioMessage::assign_check()`] - Seal a frame before transmission
//!   - [`RadioMessage::is_valid()`] - Receiver-side validation
//!
//! - **Parsing / Serialization**: raw byte conversion
//!   - [`parse()`] - Decode and validate 4 raw bytes
//!   - [`RadioMessage::to_bytes()`] - Encode to the 4-byte wire layout
//!   - [`MessageBuilder`] - Fluent builder API
//!
//! # Wire Format
//!
//! A frame is exactly four bytes, the struct fields verbatim and in order:
//!
//! ```text
//! [cmd, left, right, check]
//! ```
//!
//! - `cmd` - command byte, one of [`RadioCommand`]
//! - `left`, `right` - signed motor speed percentages (-100 to 100), two's
//!   complement
//! - `check` - XOR of the three preceding bytes
//!
//! There is no framing, addressing, sequencing, or acknowledgment; the
//! transport must carry the four bytes verbatim. The XOR check detects any
//! odd number of flipped bits per bit position; two flips of the same bit
//! position in different fields cancel and pass validation.
//!
//! # Examples
//!
//! ```
//! use boat_proto::{parse, ParseError, RadioCommand, RadioMessage};
//!
//! // Sender: one fresh, sealed message per transmission
//! let msg = RadioMessage::new(RadioCommand::PaLow, 60, -40);
//! let frame = msg.to_bytes();
//!
//! // Receiver: validate before acting
//! let decoded = parse(&frame).unwrap();
//! assert_eq!(decoded.command(), Some(RadioCommand::PaLow));
//! assert_eq!((decoded.left, decoded.right), (60, -40));
//!
//! // A corrupted frame is rejected
//! let mut bad = frame;
//! bad[1] ^= 0x01;
//! assert_eq!(parse(&bad), Err(ParseError::Checksum));
//! ```
//!
//! ## Building with the fluent API
//!
//! ```
//! use boat_proto::{MessageBuilder, RadioCommand};
//!
//! let frame = MessageBuilder::new()
//!     .command(RadioCommand::PaMax)
//!     .speeds(100, 100)
//!     .wire();
//! assert_eq!(frame.len(), 4);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//! - **`heapless`**: Enable `to_vec()` for heapless buffers
//! - **`embedded-io`**: Enable `write_io()` for I/O peripherals
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for small microcontrollers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod builder;
pub mod checksum;
pub mod parser;
pub mod serialize;
pub mod types;

// Re-export types at crate root for convenience
pub use builder::MessageBuilder;
pub use parser::{parse, ParseError};
pub use serialize::SerializeError;
pub use types::{RadioCommand, RadioMessage, WIRE_SIZE};
