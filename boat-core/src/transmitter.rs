//! Transmitter polling loop: joypad in, sealed frames out.
//!
//! Button assignments on the handset:
//!
//! - `A` / `B` / `C` - select minimum / low / maximum transmit power
//! - `D` - request a receiver reboot
//! - `K` (stick push) - held to run joystick calibration
//!
//! Transmission is fire-and-forget: one fresh, sealed frame per poll, no
//! retry and no sequencing.

use crate::input::{AnalogAxes, ButtonBank, LinkError};
use crate::joypad::Joypad;
use crate::output::FrameSink;
use crate::types::Buttons;
use boat_proto::{RadioCommand, RadioMessage};

/// Clamp a remapped axis value into the frame's signed percentage domain.
#[inline]
fn clamp_percent(value: i16) -> i8 {
    value.clamp(-100, 100) as i8
}

/// The handset side: reads the joypad and transmits drive frames.
pub struct Transmitter<A, B, S> {
    joypad: Joypad<A, B>,
    link: S,
    power: RadioCommand,
}

impl<A: AnalogAxes, B: ButtonBank, S: FrameSink> Transmitter<A, B, S> {
    /// Create a transmitter. Power starts at [`RadioCommand::PaLow`].
    pub fn new(joypad: Joypad<A, B>, link: S) -> Self {
        Self {
            joypad,
            link,
            power: RadioCommand::PaLow,
        }
    }

    /// The currently selected power command.
    #[must_use]
    pub fn power(&self) -> RadioCommand {
        self.power
    }

    /// One loop iteration: handle button edges, then sample the stick and
    /// send a sealed drive frame.
    ///
    /// A rising edge on `D` sends a [`RadioCommand::Reset`] frame (speeds
    /// zero) instead of a drive frame.
    ///
    /// # Errors
    ///
    /// Propagates [`LinkError`] from the radio. The frame is simply lost;
    /// the next poll sends a fresh one.
    pub fn poll(&mut self) -> Result<(), LinkError> {
        self.joypad.read_buttons();

        if self.joypad.just_pressed(Buttons::A) {
            self.power = RadioCommand::PaMin;
        }
        if self.joypad.just_pressed(Buttons::B) {
            self.power = RadioCommand::PaLow;
        }
        if self.joypad.just_pressed(Buttons::C) {
            self.power = RadioCommand::PaMax;
        }

        if self.joypad.just_pressed(Buttons::D) {
            let msg = RadioMessage::new(RadioCommand::Reset, 0, 0);
            return self.link.send(&msg.to_bytes());
        }

        let pos = self.joypad.read_axes();
        let msg = RadioMessage::new(self.power, clamp_percent(pos.x), clamp_percent(pos.y));
        self.link.send(&msg.to_bytes())
    }

    /// Blocking joystick calibration while the stick push button is held.
    pub fn calibrate(&mut self) {
        self.joypad.calibrate_while_held(Buttons::K);
    }

    /// Get a reference to the joypad.
    pub fn joypad(&self) -> &Joypad<A, B> {
        &self.joypad
    }

    /// Get a mutable reference to the joypad.
    pub fn joypad_mut(&mut self) -> &mut Joypad<A, B> {
        &mut self.joypad
    }
}
