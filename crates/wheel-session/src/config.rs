//! Configuration for a wheel session.

use std::path::PathBuf;

use wheel_core::WheelConfig;

/// PIN used when none is configured.
pub const DEFAULT_ADMIN_PIN: &str = "1234";

/// File name used when no state path is configured.
pub const DEFAULT_STATE_FILE: &str = "wheel.json";

/// Configuration for a wheel session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Where entries, settings, and the outcome log are persisted.
    pub state_path: PathBuf,
    /// Shared secret that unlocks admin controls.
    pub admin_pin: String,
    /// Spin engine settings.
    pub wheel: WheelConfig,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_FILE),
            admin_pin: DEFAULT_ADMIN_PIN.to_string(),
            wheel: WheelConfig::default(),
        }
    }
}

impl SessionConfig {
    /// Set the state file path.
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }

    /// Set the admin PIN.
    pub fn with_admin_pin(mut self, pin: impl Into<String>) -> Self {
        self.admin_pin = pin.into();
        self
    }

    /// Set the spin engine settings.
    pub fn with_wheel(mut self, wheel: WheelConfig) -> Self {
        self.wheel = wheel;
        self
    }
}
