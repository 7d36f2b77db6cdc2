//! Feedback hooks fired while a wheel spins.
//!
//! A notifier is the seam for sound or any other side effect: ticks while the
//! wheel turns, and a chime when it stops. Hooks are best-effort. The wheel
//! logs and discards their errors, and nothing they do can change where a
//! spin lands.

use crate::wheel::SpinOutcome;

/// Error raised by a notifier backend.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    /// The output device (speaker, terminal) is not available.
    #[error("notification backend unavailable: {0}")]
    Unavailable(String),

    /// Writing the notification failed.
    #[error("notification failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for notifier hooks.
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Receives spin lifecycle notifications.
///
/// Every hook defaults to doing nothing, so a backend only implements the
/// events it cares about.
pub trait SpinNotifier {
    /// A spin has started; ticking begins.
    fn tick_start(&mut self) -> NotifyResult<()> {
        Ok(())
    }

    /// One tick of the spinning wheel.
    fn tick(&mut self) -> NotifyResult<()> {
        Ok(())
    }

    /// The wheel has stopped; ticking ends.
    fn tick_stop(&mut self) -> NotifyResult<()> {
        Ok(())
    }

    /// The spin finished with `outcome`.
    fn complete(&mut self, _outcome: &SpinOutcome) -> NotifyResult<()> {
        Ok(())
    }
}

/// A notifier that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentNotifier;

impl SpinNotifier for SilentNotifier {}

/// Intervals between ticks, slowing down as the wheel loses speed.
///
/// Starts at 80 ms and grows by 4 ms per tick up to a 180 ms ceiling.
#[derive(Debug, Clone)]
pub struct TickCadence {
    next: u64,
}

impl TickCadence {
    /// Interval before the first tick.
    pub const INITIAL_MS: u64 = 80;
    /// Growth of the interval after each tick.
    pub const STEP_MS: u64 = 4;
    /// Longest interval between ticks.
    pub const MAX_MS: u64 = 180;

    /// Start a new cadence.
    pub fn new() -> Self {
        Self {
            next: Self::INITIAL_MS,
        }
    }
}

impl Default for TickCadence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for TickCadence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let interval = self.next;
        self.next = (self.next + Self::STEP_MS).min(Self::MAX_MS);
        Some(interval)
    }
}
