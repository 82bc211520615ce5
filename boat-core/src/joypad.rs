//! Joypad sampling: axis calibration/remapping and button edge tracking.
//!
//! # Calibration
//!
//! Calibration is modeled as an explicit state machine (IDLE -> CALIBRATING
//! -> READY) driven one sample at a time, so an event-driven caller can run
//! it without blocking:
//!
//! ```
//! # use boat_core::joypad::Joypad;
//! # use boat_core::types::Buttons;
//! # use boat_core::input::{AnalogAxes, ButtonBank};
//! # struct A; impl AnalogAxes for A {
//! #     fn read_x(&mut self) -> u16 { 400 }
//! #     fn read_y(&mut self) -> u16 { 400 }
//! # }
//! # struct B; impl ButtonBank for B {
//! #     fn read(&mut self) -> Buttons { Buttons::NONE }
//! # }
//! let mut joypad = Joypad::new(A, B);
//! joypad.begin_calibration();        // captures the minimums once
//! joypad.calibration_sample();       // folds one sample into the maximums
//! joypad.finish_calibration();       // commits the new bounds
//! ```
//!
//! [`Joypad::calibrate_while_held`] wraps the same steps in the traditional
//! blocking form: while the trigger button stays pressed, nothing else runs.
//!
//! # Axis mapping
//!
//! A raw 10-bit sample is offset by a calibration bound, then rescaled with
//! the classic truncating integer `map()` arithmetic into nominal
//! [-100, 100]. The X axis offsets from its calibrated minimum while the Y
//! axis offsets from its calibrated maximum; the asymmetry is kept as-is,
//! matching the hardware this was tuned on.

use crate::input::{AnalogAxes, ButtonBank};
use crate::types::{Buttons, StickPosition};

/// Full scale of a 10-bit analog sample.
pub const ADC_MAX: u16 = (1 << 10) - 1;

/// Integer remap with the classic `map()` arithmetic (truncating division).
#[inline]
#[must_use]
pub const fn remap(value: i32, in_min: i32, in_max: i32, out_min: i32, out_max: i32) -> i32 {
    (value - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Calibrated axis bounds, 10-bit-range integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationBounds {
    pub x_min: i16,
    pub x_max: i16,
    pub y_min: i16,
    pub y_max: i16,
}

impl CalibrationBounds {
    /// Default bounds approximating a centered, full-range stick.
    #[must_use]
    pub const fn centered() -> Self {
        Self {
            x_min: (ADC_MAX >> 1) as i16,
            x_max: ADC_MAX as i16,
            y_min: (ADC_MAX >> 1) as i16,
            y_max: ADC_MAX as i16,
        }
    }
}

impl Default for CalibrationBounds {
    fn default() -> Self {
        Self::centered()
    }
}

/// Calibration state machine phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationPhase {
    /// Never calibrated; default bounds in effect.
    Idle,
    /// Bounds are being gathered; axis reads still use the old bounds.
    Calibrating,
    /// Calibrated bounds committed.
    Ready,
}

/// Outcome of a bounded calibration run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationOutcome {
    /// The trigger was released before the sample limit.
    Completed,
    /// The sample limit was hit first; the bounds gathered so far are
    /// committed anyway so the stick stays usable.
    TimedOut,
}

/// One joystick: two analog axes and up to seven buttons.
///
/// Owns its sampling peripherals. One instance per device, created at
/// startup; calibration bounds change only through the calibration
/// routines and are read continuously afterwards.
pub struct Joypad<A, B> {
    axes: A,
    buttons: B,
    bounds: CalibrationBounds,
    pending: CalibrationBounds,
    phase: CalibrationPhase,
    last: Buttons,
    changed: Buttons,
}

impl<A: AnalogAxes, B: ButtonBank> Joypad<A, B> {
    /// Create a joypad with default centered bounds.
    pub fn new(axes: A, buttons: B) -> Self {
        Self::with_bounds(axes, buttons, CalibrationBounds::centered())
    }

    /// Create a joypad with previously captured bounds (phase starts
    /// `Ready`) unless they equal the defaults.
    ///
    /// The maximums are floored at 1, same as
    /// [`finish_calibration`](Self::finish_calibration), so the remap scale
    /// anchor can never be a zero span whatever bounds are passed in.
    pub fn with_bounds(axes: A, buttons: B, mut bounds: CalibrationBounds) -> Self {
        let phase = if bounds == CalibrationBounds::centered() {
            CalibrationPhase::Idle
        } else {
            CalibrationPhase::Ready
        };
        bounds.x_max = bounds.x_max.max(1);
        bounds.y_max = bounds.y_max.max(1);
        Self {
            axes,
            buttons,
            bounds,
            pending: bounds,
            phase,
            last: Buttons::NONE,
            changed: Buttons::NONE,
        }
    }

    /// Current calibration bounds.
    #[must_use]
    pub fn bounds(&self) -> CalibrationBounds {
        self.bounds
    }

    /// Current calibration phase.
    #[must_use]
    pub fn phase(&self) -> CalibrationPhase {
        self.phase
    }

    /// Start gathering new bounds.
    ///
    /// The current X/Y samples are captured once as the new minimums; the
    /// running maximums start from zero. Axis reads keep using the old
    /// bounds until [`finish_calibration`](Self::finish_calibration).
    pub fn begin_calibration(&mut self) {
        self.pending.x_min = self.axes.read_x() as i16;
        self.pending.y_min = self.axes.read_y() as i16;
        self.pending.x_max = 0;
        self.pending.y_max = 0;
        self.phase = CalibrationPhase::Calibrating;
    }

    /// Fold one X/Y sample into the running maximum magnitudes.
    pub fn calibration_sample(&mut self) {
        let x = self.axes.read_x() as i16;
        let y = self.axes.read_y() as i16;
        self.pending.x_max = self.pending.x_max.max(x);
        self.pending.y_max = self.pending.y_max.max(y);
    }

    /// Commit the gathered bounds and leave the calibrating phase.
    ///
    /// The maximums are floored at 1 so the remap scale anchor can never be
    /// a zero span, even if no sample arrived between begin and finish.
    pub fn finish_calibration(&mut self) {
        self.pending.x_max = self.pending.x_max.max(1);
        self.pending.y_max = self.pending.y_max.max(1);
        self.bounds = self.pending;
        self.phase = CalibrationPhase::Ready;
    }

    /// Blocking calibration: gather bounds while `trigger` stays pressed.
    ///
    /// Busy-polls the button bank; nothing else runs until the trigger is
    /// released. The trigger line is read raw, without touching the
    /// edge-tracking state.
    pub fn calibrate_while_held(&mut self, trigger: Buttons) {
        self.begin_calibration();
        while self.buttons.read().contains(trigger) {
            self.calibration_sample();
        }
        self.finish_calibration();
    }

    /// Like [`calibrate_while_held`](Self::calibrate_while_held) but bails
    /// out after `max_samples` samples if the trigger is still pressed.
    pub fn calibrate_while_held_limited(
        &mut self,
        trigger: Buttons,
        max_samples: u32,
    ) -> CalibrationOutcome {
        self.begin_calibration();
        let mut taken = 0u32;
        let outcome = loop {
            if !self.buttons.read().contains(trigger) {
                break CalibrationOutcome::Completed;
            }
            if taken >= max_samples {
                break CalibrationOutcome::TimedOut;
            }
            self.calibration_sample();
            taken += 1;
        };
        self.finish_calibration();
        outcome
    }

    /// Read both axes and remap them against the calibration bounds.
    ///
    /// Output is nominally [-100, 100] per axis but is not clamped here;
    /// readings outside the calibrated range map proportionally outside it.
    pub fn read_axes(&mut self) -> StickPosition {
        // X offsets from the calibrated minimum, Y from the calibrated
        // maximum. Kept asymmetric on purpose.
        let ax = self.axes.read_x() as i32 - self.bounds.x_min as i32;
        let ay = self.axes.read_y() as i32 - self.bounds.y_max as i32;

        let x_max = self.bounds.x_max as i32;
        let y_max = self.bounds.y_max as i32;

        StickPosition::new(
            remap(ax, -x_max, x_max, -100, 100) as i16,
            remap(ay, -y_max, y_max, -100, 100) as i16,
        )
    }

    /// Sample every button line, update the change bitmap, and return the
    /// new state.
    ///
    /// The change bitmap holds the XOR against the previous read, for
    /// edge-triggered logic via [`changed`](Self::changed).
    pub fn read_buttons(&mut self) -> Buttons {
        let now = self.buttons.read();
        self.changed = Buttons(self.last.raw() ^ now.raw());
        self.last = now;
        now
    }

    /// Buttons that changed state between the two most recent reads.
    #[must_use]
    pub fn changed(&self) -> Buttons {
        self.changed
    }

    /// Test a single button against the most recent read.
    #[must_use]
    pub fn is_pressed(&self, button: Buttons) -> bool {
        self.last.contains(button)
    }

    /// Buttons that just went down: changed and currently pressed.
    #[must_use]
    pub fn just_pressed(&self, button: Buttons) -> bool {
        self.changed.contains(button) && self.last.contains(button)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    /// Analog axes fed from scripted sample sequences (last value repeats).
    struct ScriptedAxes {
        x: Vec<u16>,
        y: Vec<u16>,
        pos: usize,
    }

    impl ScriptedAxes {
        fn new(x: &[u16], y: &[u16]) -> Self {
            Self {
                x: x.to_vec(),
                y: y.to_vec(),
                pos: 0,
            }
        }
    }

    impl AnalogAxes for ScriptedAxes {
        fn read_x(&mut self) -> u16 {
            let v = *self.x.get(self.pos).or(self.x.last()).unwrap();
            v
        }

        fn read_y(&mut self) -> u16 {
            let v = *self.y.get(self.pos).or(self.y.last()).unwrap();
            // Y is sampled after X within one logical read.
            self.pos += 1;
            v
        }
    }

    struct ScriptedButtons {
        reads: Vec<Buttons>,
        pos: usize,
    }

    impl ScriptedButtons {
        fn new(reads: &[Buttons]) -> Self {
            Self {
                reads: reads.to_vec(),
                pos: 0,
            }
        }
    }

    impl ButtonBank for ScriptedButtons {
        fn read(&mut self) -> Buttons {
            let v = *self.reads.get(self.pos).or(self.reads.last()).unwrap();
            self.pos += 1;
            v
        }
    }

    fn no_buttons() -> ScriptedButtons {
        ScriptedButtons::new(&[Buttons::NONE])
    }

    #[test]
    fn test_remap_matches_classic_map() {
        assert_eq!(remap(0, -1023, 1023, -100, 100), 0);
        assert_eq!(remap(1023, -1023, 1023, -100, 100), 100);
        assert_eq!(remap(-1023, -1023, 1023, -100, 100), -100);
        // Truncating division, same as the long arithmetic on AVR.
        assert_eq!(remap(5, 0, 10, 0, 255), 127);
    }

    #[test]
    fn test_default_bounds_center_reads_zero() {
        let axes = ScriptedAxes::new(&[511], &[1023]);
        let mut joypad = Joypad::new(axes, no_buttons());
        assert_eq!(joypad.phase(), CalibrationPhase::Idle);
        let pos = joypad.read_axes();
        // X centered on the default minimum; Y anchored on the default max.
        assert_eq!(pos.x, 0);
        assert_eq!(pos.y, 0);
    }

    #[test]
    fn test_calibration_captures_min_once_and_max_continuously() {
        // begin: x=300/y=300 captured as minimums. Samples 450, 500, 470
        // drive the running maximum to 500.
        let axes = ScriptedAxes::new(&[300, 450, 500, 470, 400], &[300, 450, 500, 470, 400]);
        let mut joypad = Joypad::new(axes, no_buttons());

        joypad.begin_calibration();
        assert_eq!(joypad.phase(), CalibrationPhase::Calibrating);
        joypad.calibration_sample();
        joypad.calibration_sample();
        joypad.calibration_sample();
        joypad.finish_calibration();

        let bounds = joypad.bounds();
        assert_eq!(joypad.phase(), CalibrationPhase::Ready);
        assert_eq!(bounds.x_min, 300);
        assert_eq!(bounds.x_max, 500);
        assert_eq!(bounds.y_min, 300);
        assert_eq!(bounds.y_max, 500);

        // Reading 400 against min 300 / max 500:
        //   x: (400-300) remapped over [-500, 500] -> 20
        //   y: (400-500) remapped over [-500, 500] -> -20
        let pos = joypad.read_axes();
        assert_eq!(pos.x, 20);
        assert_eq!(pos.y, -20);
    }

    #[test]
    fn test_calibrate_while_held_uses_trigger() {
        // Trigger held for two samples, then released.
        let buttons = ScriptedButtons::new(&[Buttons::K, Buttons::K, Buttons::NONE]);
        let axes = ScriptedAxes::new(&[300, 480, 520, 400], &[300, 480, 520, 400]);
        let mut joypad = Joypad::new(axes, buttons);

        joypad.calibrate_while_held(Buttons::K);

        assert_eq!(joypad.phase(), CalibrationPhase::Ready);
        assert_eq!(joypad.bounds().x_min, 300);
        assert_eq!(joypad.bounds().x_max, 520);
    }

    #[test]
    fn test_calibrate_limited_times_out() {
        // Trigger never released.
        let buttons = ScriptedButtons::new(&[Buttons::K]);
        let axes = ScriptedAxes::new(&[300, 480, 520], &[300, 480, 520]);
        let mut joypad = Joypad::new(axes, buttons);

        let outcome = joypad.calibrate_while_held_limited(Buttons::K, 2);
        assert_eq!(outcome, CalibrationOutcome::TimedOut);
        // Bounds gathered before the limit are still committed.
        assert_eq!(joypad.phase(), CalibrationPhase::Ready);
        assert_eq!(joypad.bounds().x_max, 520);
    }

    #[test]
    fn test_instant_release_floors_max_at_one() {
        let buttons = ScriptedButtons::new(&[Buttons::NONE]);
        let axes = ScriptedAxes::new(&[300], &[300]);
        let mut joypad = Joypad::new(axes, buttons);

        joypad.calibrate_while_held(Buttons::K);
        assert_eq!(joypad.bounds().x_max, 1);
        // Axis reads must not divide by a zero span.
        let _ = joypad.read_axes();
    }

    #[test]
    fn test_button_edge_tracking() {
        let buttons = ScriptedButtons::new(&[Buttons::NONE, Buttons::A, Buttons::A, Buttons::NONE]);
        let axes = ScriptedAxes::new(&[511], &[511]);
        let mut joypad = Joypad::new(axes, buttons);

        assert_eq!(joypad.read_buttons(), Buttons::NONE);
        assert_eq!(joypad.changed(), Buttons::NONE);

        // Press lands between two reads: changed exactly once.
        assert_eq!(joypad.read_buttons(), Buttons::A);
        assert!(joypad.changed().contains(Buttons::A));
        assert!(joypad.just_pressed(Buttons::A));
        assert!(joypad.is_pressed(Buttons::A));

        // Held: the delta clears on the next unchanged read.
        assert_eq!(joypad.read_buttons(), Buttons::A);
        assert_eq!(joypad.changed(), Buttons::NONE);
        assert!(!joypad.just_pressed(Buttons::A));

        // Release shows up as a change without a press.
        assert_eq!(joypad.read_buttons(), Buttons::NONE);
        assert!(joypad.changed().contains(Buttons::A));
        assert!(!joypad.just_pressed(Buttons::A));
    }

    #[test]
    fn test_with_bounds_floors_zero_maxes() {
        // Zeroed bounds straight into the constructor must not leave a
        // zero remap span behind the axis reads.
        let bounds = CalibrationBounds {
            x_min: 0,
            x_max: 0,
            y_min: 0,
            y_max: 0,
        };
        let mut joypad =
            Joypad::with_bounds(ScriptedAxes::new(&[0], &[0]), no_buttons(), bounds);
        assert_eq!(joypad.bounds().x_max, 1);
        assert_eq!(joypad.bounds().y_max, 1);
        // X centers on the floored span; Y anchors on the floored max.
        let pos = joypad.read_axes();
        assert_eq!(pos, StickPosition::new(0, -100));
    }

    #[test]
    fn test_with_bounds_restores_ready_phase() {
        let bounds = CalibrationBounds {
            x_min: 290,
            x_max: 730,
            y_min: 310,
            y_max: 710,
        };
        let joypad = Joypad::with_bounds(ScriptedAxes::new(&[0], &[0]), no_buttons(), bounds);
        assert_eq!(joypad.phase(), CalibrationPhase::Ready);
        assert_eq!(joypad.bounds(), bounds);
    }
}
