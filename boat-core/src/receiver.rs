//! Receiver dispatch loop: frames in, motor drive out.
//!
//! # Failure policy
//!
//! A frame that fails checksum validation, or that carries an unrecognized
//! command byte, is dropped whole: the error is reported to the caller and
//! the motors hold whatever they were last commanded. The policy is the
//! same for every rejection path so the boat's behavior under a noisy link
//! is predictable. There is no retry, sequencing, or duplicate detection on
//! this link.

use crate::input::{FrameSource, LinkError};
use crate::motor::HBridge;
use crate::output::{MotorOutputs, PowerControl, PowerLevel, ResetControl};
use boat_proto::{parse, ParseError, RadioCommand};

/// Error type for receiver operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReceiverError {
    /// Error from the radio link.
    Link(LinkError),
    /// Frame rejected by the parser (length or checksum).
    Frame(ParseError),
    /// Intact frame carrying a command byte outside the recognized set.
    UnknownCommand(u8),
}

impl From<LinkError> for ReceiverError {
    fn from(err: LinkError) -> Self {
        Self::Link(err)
    }
}

impl From<ParseError> for ReceiverError {
    fn from(err: ParseError) -> Self {
        Self::Frame(err)
    }
}

impl core::fmt::Display for ReceiverError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Link(e) => write!(f, "link error: {}", e),
            Self::Frame(e) => write!(f, "frame rejected: {}", e),
            Self::UnknownCommand(raw) => write!(f, "unknown command byte {:#04x}", raw),
        }
    }
}

/// The boat side: validates incoming frames and drives the motors.
pub struct Receiver<L, M, R> {
    link: L,
    motors: HBridge<M>,
    reset: R,
}

impl<L, M, R> Receiver<L, M, R>
where
    L: FrameSource + PowerControl,
    M: MotorOutputs,
    R: ResetControl,
{
    /// Create a receiver around its link, motor bridge, and reset line.
    pub fn new(link: L, motors: HBridge<M>, reset: R) -> Self {
        Self {
            link,
            motors,
            reset,
        }
    }

    /// One loop iteration: poll the radio and dispatch a pending frame.
    ///
    /// `Ok(())` with no frame pending is an idle cycle.
    ///
    /// # Errors
    ///
    /// Link errors and rejected frames propagate; in both cases no motor
    /// action has been taken.
    pub fn poll(&mut self) -> Result<(), ReceiverError> {
        match self.link.try_recv()? {
            Some(frame) => self.handle_frame(&frame),
            None => Ok(()),
        }
    }

    /// Validate and dispatch one raw frame.
    ///
    /// - power command: apply the level to the radio, then drive the motors
    ///   with the frame's speeds;
    /// - [`RadioCommand::Reset`]: stop the motors, then request the
    ///   watchdog reset — the single deliberately fatal path;
    /// - anything rejected: no motor action, error returned.
    pub fn handle_frame(&mut self, frame: &[u8]) -> Result<(), ReceiverError> {
        let msg = parse(frame)?;

        let Some(cmd) = msg.command() else {
            return Err(ReceiverError::UnknownCommand(msg.cmd));
        };

        let level = match cmd {
            RadioCommand::PaMin => PowerLevel::Min,
            RadioCommand::PaLow => PowerLevel::Low,
            RadioCommand::PaMax => PowerLevel::Max,
            RadioCommand::Reset => {
                self.motors.stop();
                self.reset.request_reset();
                return Ok(());
            }
        };

        self.link.set_power(level);
        self.motors.set_speeds(msg.left, msg.right);
        Ok(())
    }

    /// Stop both motors immediately.
    pub fn stop(&mut self) {
        self.motors.stop();
    }

    /// Get a reference to the motor bridge.
    pub fn motors(&self) -> &HBridge<M> {
        &self.motors
    }

    /// Get a mutable reference to the motor bridge.
    pub fn motors_mut(&mut self) -> &mut HBridge<M> {
        &mut self.motors
    }

    /// Decompose into link, motor bridge, and reset line.
    pub fn into_parts(self) -> (L, HBridge<M>, R) {
        (self.link, self.motors, self.reset)
    }
}
