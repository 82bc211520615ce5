//! Output-side hardware traits.
//!
//! The actuator and transmit boundaries: H-bridge lines, the radio's send
//! path and power amplifier setting, and the watchdog-backed reset line.

use crate::input::LinkError;
use crate::types::Motor;
use boat_proto::WIRE_SIZE;

/// Radio power amplifier level, selected over the link itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerLevel {
    Min,
    Low,
    Max,
}

/// H-bridge output lines: one direction line and one PWM line per motor.
pub trait MotorOutputs {
    /// Drive a motor's direction line. `reverse = true` pulls it high.
    fn set_direction(&mut self, motor: Motor, reverse: bool);

    /// Drive a motor's PWM line with an 8-bit duty cycle.
    fn set_duty(&mut self, motor: Motor, duty: u8);
}

/// Transmit path of the radio transport. Fire-and-forget.
pub trait FrameSink {
    /// Send one frame. No retry, sequencing, or acknowledgment.
    fn send(&mut self, frame: &[u8; WIRE_SIZE]) -> Result<(), LinkError>;
}

/// Power amplifier control on the radio chip.
pub trait PowerControl {
    /// Select the transmit power level.
    fn set_power(&mut self, level: PowerLevel);
}

/// Watchdog-backed reset line.
///
/// On hardware, requesting a reset arms the watchdog with a short timeout
/// (order of 15 ms) and spins until it fires, so the call never returns.
/// Mock implementations record the request instead.
pub trait ResetControl {
    /// Halt normal execution and force a full restart.
    fn request_reset(&mut self);
}
