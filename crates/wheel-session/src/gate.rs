//! Admin access gate.
//!
//! The admin may edit entries, load demo wheels, choose whether winners are
//! removed, and preset the winning slice. Everyone else spins at random and
//! always has winners removed.

use crate::error::{SessionError, SessionResult};

/// Tracks whether the admin PIN has been entered.
#[derive(Debug, Clone)]
pub struct AccessGate {
    pin: String,
    admin: bool,
}

impl AccessGate {
    /// Create a locked gate for `pin`.
    pub fn new(pin: impl Into<String>) -> Self {
        Self {
            pin: pin.into(),
            admin: false,
        }
    }

    /// Create a gate, already unlocked when `admin` is set.
    pub fn with_admin(pin: impl Into<String>, admin: bool) -> Self {
        Self {
            pin: pin.into(),
            admin,
        }
    }

    /// Whether admin controls are unlocked.
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Unlock admin controls with `pin`.
    pub fn login(&mut self, pin: &str) -> SessionResult<()> {
        if pin != self.pin {
            return Err(SessionError::WrongPin);
        }
        self.admin = true;
        Ok(())
    }

    /// Lock admin controls.
    pub fn logout(&mut self) {
        self.admin = false;
    }

    /// Fail unless admin controls are unlocked.
    pub fn require_admin(&self) -> SessionResult<()> {
        if self.admin {
            Ok(())
        } else {
            Err(SessionError::AdminRequired)
        }
    }

    /// The target a spin should use: the preset for the admin, none otherwise.
    pub fn effective_target(&self, preset: Option<usize>) -> Option<usize> {
        if self.admin { preset } else { None }
    }

    /// Whether winners are removed: the admin's choice, always on otherwise.
    pub fn effective_remove_after(&self, remove_after: bool) -> bool {
        !self.admin || remove_after
    }
}

/// Interpret preset text as a slice index.
///
/// Blank or malformed text means no preset. Whole numbers written with a
/// fractional part of zero (`"2.0"`) are accepted. Range is not checked here;
/// a preset past the last slice falls back to a random pick when spinning.
pub fn parse_preset(text: &str) -> Option<usize> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(index) = text.parse::<usize>() {
        return Some(index);
    }
    let value: f64 = text.parse().ok()?;
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= usize::MAX as f64)
        .then_some(value as usize)
}
