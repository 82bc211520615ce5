//! Core types: Buttons bitfield, Motor selector, StickPosition.

use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not};

/// Button state represented as a bitfield.
///
/// The joypad carries seven buttons: six general-purpose (`A`-`F`) and the
/// stick push button `K`, used as the calibration trigger. All seven lines
/// are sampled in one pass into this bitmap.
///
/// # Example
///
/// ```
/// use boat_core::Buttons;
///
/// let buttons = Buttons::A | Buttons::K;
/// assert!(buttons.contains(Buttons::A));
/// assert!(!buttons.contains(Buttons::B));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons(pub u8);

impl Buttons {
    pub const A: Self = Self(1 << 0);
    pub const B: Self = Self(1 << 1);
    pub const C: Self = Self(1 << 2);
    pub const D: Self = Self(1 << 3);
    pub const E: Self = Self(1 << 4);
    pub const F: Self = Self(1 << 5);
    /// Stick push button, held to trigger calibration.
    pub const K: Self = Self(1 << 6);

    /// No buttons pressed.
    pub const NONE: Self = Self(0);

    /// Check if the given button(s) are pressed.
    #[inline]
    #[must_use]
    pub const fn contains(self, button: Buttons) -> bool {
        (self.0 & button.0) == button.0
    }

    /// Check if the given button is pressed (alias for contains).
    #[inline]
    #[must_use]
    pub const fn is_pressed(self, button: Buttons) -> bool {
        self.contains(button)
    }

    /// Set or clear button(s).
    #[inline]
    pub fn set(&mut self, button: Buttons, pressed: bool) {
        if pressed {
            self.0 |= button.0;
        } else {
            self.0 &= !button.0;
        }
    }

    /// Get the raw bitmap.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Check if no buttons are pressed.
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Buttons {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Buttons {
    #[inline]
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Buttons {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self::Output {
        Self(self.0 & rhs.0)
    }
}

impl BitAndAssign for Buttons {
    #[inline]
    fn bitand_assign(&mut self, rhs: Self) {
        self.0 &= rhs.0;
    }
}

impl Not for Buttons {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        Self(!self.0)
    }
}

/// Motor selector for the two H-bridge channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motor {
    Left,
    Right,
}

/// Remapped stick position in logical units.
///
/// Nominally [-100, 100] per axis; readings outside the calibrated range
/// map outside those bounds and are clamped by the caller when packed into
/// a frame.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StickPosition {
    pub x: i16,
    pub y: i16,
}

impl StickPosition {
    #[must_use]
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_bitwise_or() {
        let buttons = Buttons::A | Buttons::K;
        assert!(buttons.contains(Buttons::A));
        assert!(buttons.contains(Buttons::K));
        assert!(!buttons.contains(Buttons::B));
    }

    #[test]
    fn test_buttons_set_clear() {
        let mut buttons = Buttons::NONE;
        buttons.set(Buttons::C, true);
        assert!(buttons.is_pressed(Buttons::C));
        buttons.set(Buttons::C, false);
        assert!(!buttons.is_pressed(Buttons::C));
        assert!(buttons.is_empty());
    }

    #[test]
    fn test_buttons_distinct_bits() {
        let all = [
            Buttons::A,
            Buttons::B,
            Buttons::C,
            Buttons::D,
            Buttons::E,
            Buttons::F,
            Buttons::K,
        ];
        let mut seen = Buttons::NONE;
        for b in all {
            assert!(!seen.contains(b));
            seen |= b;
        }
        assert_eq!(seen.raw(), 0x7F);
    }
}
