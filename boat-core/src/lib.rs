//! Platform-agnostic joypad, motor, and control-loop logic for the RC boat.
//!
//! This crate provides the core behavior of both units of the boat without
//! any board-specific dependencies, so it runs in embedded `no_std`
//! environments and on host for testing.
//!
//! # Overview
//!
//! - [`types`]: Core data structures ([`Buttons`], [`Motor`], [`StickPosition`])
//! - [`input`]: Sampling-side hardware traits ([`AnalogAxes`], [`ButtonBank`], [`FrameSource`])
//! - [`output`]: Actuator-side hardware traits ([`MotorOutputs`], [`FrameSink`], [`PowerControl`], [`ResetControl`])
//! - [`joypad`]: Stick calibration and axis/button reading ([`Joypad`])
//! - [`motor`]: Speed-to-drive mapping and the H-bridge driver ([`HBridge`])
//! - [`transmitter`]: Handset polling loop ([`Transmitter`])
//! - [`receiver`]: Boat-side frame dispatch ([`Receiver`])
//!
//! # Control flow
//!
//! On the handset, the [`Transmitter`] samples the joypad, packs the stick
//! position and selected power command into a sealed
//! [`boat_proto::RadioMessage`], and fires it at the link. On the boat, the
//! [`Receiver`] validates each frame's checksum and either drives the two
//! motors or, on a reset command, stops them and pulls the watchdog line.
//! Everything runs synchronously on a single polling loop; the only
//! blocking operation is the joystick calibration hold.
//!
//! # Example
//!
//! ```
//! use boat_core::motor::drive_for_speed;
//!
//! // Forward half speed: direction line low, duty scaled linearly.
//! let drive = drive_for_speed(50);
//! assert!(!drive.reverse);
//! assert_eq!(drive.duty, 127);
//!
//! // Reverse runs the duty complemented against the direction line.
//! let drive = drive_for_speed(-50);
//! assert!(drive.reverse);
//! assert_eq!(drive.duty, 127);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations,
//! making it suitable for small microcontrollers.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod input;
pub mod joypad;
pub mod motor;
pub mod output;
pub mod receiver;
pub mod transmitter;
pub mod types;

// Re-export main types at crate root
pub use input::{AnalogAxes, ButtonBank, FrameSource, LinkError};
pub use joypad::{
    remap, CalibrationBounds, CalibrationOutcome, CalibrationPhase, Joypad, ADC_MAX,
};
pub use motor::{drive_for_speed, HBridge, MotorDrive};
pub use output::{FrameSink, MotorOutputs, PowerControl, PowerLevel, ResetControl};
pub use receiver::{Receiver, ReceiverError};
pub use transmitter::Transmitter;
pub use types::{Buttons, Motor, StickPosition};
