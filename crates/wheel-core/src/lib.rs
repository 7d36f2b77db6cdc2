//! Core spin engine for the prize wheel.
//!
//! This crate owns the geometry that decides where a spin lands and how an
//! orientation maps back to a slice. It is independent of any frontend: the
//! [`Wheel`] state machine is driven by an injected [`Clock`] and reports
//! progress through an optional [`SpinNotifier`].

/// Monotonic time sources used to drive the spin animation.
pub mod clock;
/// Wheel configuration (rotation count, duration, RNG seed).
pub mod config;
/// The ease-out curve that shapes the animated rotation.
pub mod easing;
/// Slice entries and the default slice palette.
pub mod entry;
/// Feedback hooks fired during a spin, and their tick cadence.
pub mod notify;
/// Pure orientation and spin-delta geometry.
pub mod resolver;
/// The Idle/Spinning state machine that owns the wheel orientation.
pub mod wheel;

/// Re-exports of [`clock::Clock`], [`clock::ManualClock`], and [`clock::SystemClock`].
pub use clock::{Clock, ManualClock, SystemClock};
/// Re-export of [`config::WheelConfig`].
pub use config::WheelConfig;
/// Re-exports of [`easing::CubicBezier`] and [`easing::SPIN_EASING`].
pub use easing::{CubicBezier, SPIN_EASING};
/// Re-exports of [`entry::Entry`] and [`entry::PALETTE`].
pub use entry::{Entry, PALETTE};
/// Re-exports of the notification types.
pub use notify::{NotifyError, NotifyResult, SilentNotifier, SpinNotifier, TickCadence};
/// Re-exports of the resolver functions and types.
pub use resolver::{
    POINTER_ANGLE, SpinResolution, index_at_orientation, normalize_degrees, resolve_spin,
    spin_delta,
};
/// Re-exports of [`wheel::Wheel`], [`wheel::WheelState`], [`wheel::SpinOutcome`], and [`wheel::SpinPhase`].
pub use wheel::{SpinOutcome, SpinPhase, Wheel, WheelState};
