pub mod auth;
pub mod clear;
pub mod demo;
pub mod entries;
pub mod export;
pub mod init;
pub mod leaderboard;
pub mod log;
pub mod settings;
pub mod spin;

use wheel_core::WheelConfig;
use wheel_session::{SessionConfig, WheelSession};

use crate::GlobalArgs;

/// Build the session configuration from the global flags.
fn session_config(global: &GlobalArgs, duration_ms: u64, spins: u32) -> SessionConfig {
    let mut wheel = WheelConfig::default()
        .with_duration_ms(duration_ms)
        .with_spins(spins);
    if let Some(seed) = global.seed {
        wheel = wheel.with_seed(seed);
    }
    SessionConfig::default()
        .with_state_path(&global.file)
        .with_admin_pin(global.admin_pin.clone())
        .with_wheel(wheel)
}

/// Open the session in the state file with explicit spin settings.
pub fn open_session(
    global: &GlobalArgs,
    duration_ms: u64,
    spins: u32,
) -> Result<WheelSession, String> {
    WheelSession::open(session_config(global, duration_ms, spins)).map_err(|e| e.to_string())
}

/// Open the session in the state file with default spin settings.
fn load_session(global: &GlobalArgs) -> Result<WheelSession, String> {
    let defaults = WheelConfig::default();
    open_session(global, defaults.duration_ms, defaults.spins)
}

/// Persist the session back to the state file.
fn save_session(session: &WheelSession) -> Result<(), String> {
    session.save().map_err(|e| e.to_string())
}
