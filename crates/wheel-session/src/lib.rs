//! Session layer for the prize wheel.
//!
//! Wraps the spin engine from `wheel-core` with everything a running wheel
//! needs around it: an entry store with demo wheels, an outcome log with a
//! leaderboard, CSV export, an admin PIN gate, and JSON persistence.

pub mod config;
pub mod error;
pub mod export;
pub mod gate;
pub mod log;
pub mod persist;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use error::{SessionError, SessionResult};
pub use export::{to_csv, write_csv};
pub use gate::{AccessGate, parse_preset};
pub use log::{LOG_CAPACITY, OutcomeLog, SpinRecord};
pub use persist::SavedState;
pub use session::{SessionStats, WheelSession};
pub use store::{DemoWheel, EntryStore};
