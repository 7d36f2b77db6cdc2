//! The spin state machine.
//!
//! A [`Wheel`] is either idle or spinning. [`Wheel::spin`] resolves the
//! winning slice up front and starts the animation; [`Wheel::poll`] reads the
//! clock and, once the full duration has elapsed, commits the new orientation
//! and hands back the outcome. Spin requests made while spinning are dropped.

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::clock::{Clock, SystemClock};
use crate::config::WheelConfig;
use crate::easing::SPIN_EASING;
use crate::entry::Entry;
use crate::notify::{NotifyResult, SilentNotifier, SpinNotifier, TickCadence};
use crate::resolver::{SpinResolution, index_at_orientation, resolve_spin};

/// Orientation and activity of a wheel.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelState {
    /// Accumulated rotation in degrees. Grows with every spin, never reset.
    pub orientation_degrees: f64,
    /// Whether a spin is in progress.
    pub spinning: bool,
}

/// Whether the wheel accepts a new spin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinPhase {
    /// Ready for a spin.
    Idle,
    /// Animating toward a resolved slice.
    Spinning,
}

/// The result of one completed spin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpinOutcome {
    /// Index of the winning slice at the time of the spin.
    pub winning_index: usize,
    /// The winning entry.
    pub entry: Entry,
}

#[derive(Debug)]
struct ActiveSpin {
    outcome: SpinOutcome,
    slice_count: usize,
    from: f64,
    delta: f64,
    started_at: u64,
    duration_ms: u64,
    next_tick_at: u64,
    cadence: TickCadence,
}

impl ActiveSpin {
    fn ends_at(&self) -> u64 {
        self.started_at.saturating_add(self.duration_ms)
    }

    fn progress(&self, now: u64) -> f64 {
        let elapsed = now.saturating_sub(self.started_at);
        (elapsed as f64 / self.duration_ms as f64).min(1.0)
    }
}

/// A prize wheel: owns its orientation, resolves spins, and times them.
pub struct Wheel<C: Clock = SystemClock> {
    state: WheelState,
    config: WheelConfig,
    clock: C,
    rng: StdRng,
    active: Option<ActiveSpin>,
    notifier: Box<dyn SpinNotifier>,
}

impl<C: Clock> std::fmt::Debug for Wheel<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wheel")
            .field("state", &self.state)
            .field("config", &self.config)
            .field("active", &self.active)
            .finish()
    }
}

impl Wheel<SystemClock> {
    /// Create a wheel timed by the system clock.
    pub fn new(config: WheelConfig) -> Self {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> Wheel<C> {
    /// Create a wheel timed by `clock`.
    pub fn with_clock(config: WheelConfig, clock: C) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            state: WheelState::default(),
            config,
            clock,
            rng,
            active: None,
            notifier: Box::new(SilentNotifier),
        }
    }

    /// Replace the notifier, builder style.
    pub fn with_notifier(mut self, notifier: impl SpinNotifier + 'static) -> Self {
        self.set_notifier(notifier);
        self
    }

    /// Replace the notifier.
    pub fn set_notifier(&mut self, notifier: impl SpinNotifier + 'static) {
        self.notifier = Box::new(notifier);
    }

    /// The committed wheel state.
    pub fn state(&self) -> WheelState {
        self.state
    }

    /// The wheel configuration.
    pub fn config(&self) -> &WheelConfig {
        &self.config
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> SpinPhase {
        if self.active.is_some() {
            SpinPhase::Spinning
        } else {
            SpinPhase::Idle
        }
    }

    /// Whether a spin is in progress.
    pub fn is_spinning(&self) -> bool {
        self.active.is_some()
    }

    /// Start a spin over `entries`.
    ///
    /// Returns the resolved slice and rotation, or `None` when the request is
    /// dropped: the wheel is already spinning or `entries` is empty. A
    /// `target` outside the entry range falls back to a random pick.
    pub fn spin(
        &mut self,
        entries: &[Entry],
        target: Option<usize>,
        duration_ms: u64,
    ) -> Option<SpinResolution> {
        if self.active.is_some() {
            debug!("spin request dropped: wheel already spinning");
            return None;
        }
        let n = entries.len();
        let Some(resolution) = resolve_spin(
            n,
            target,
            self.state.orientation_degrees,
            self.config.spins,
            &mut self.rng,
        ) else {
            debug!("spin request dropped: wheel has no entries");
            return None;
        };
        let entry = entries.get(resolution.index)?.clone();

        let now = self.clock.now_ms();
        let mut cadence = TickCadence::new();
        let first_tick = cadence.next().unwrap_or(TickCadence::INITIAL_MS);
        self.active = Some(ActiveSpin {
            outcome: SpinOutcome {
                winning_index: resolution.index,
                entry,
            },
            slice_count: n,
            from: self.state.orientation_degrees,
            delta: resolution.delta,
            started_at: now,
            duration_ms: duration_ms.max(1),
            next_tick_at: now.saturating_add(first_tick),
            cadence,
        });
        self.state.spinning = true;
        swallow("tick_start", self.notifier.tick_start());

        debug!(
            slices = n,
            index = resolution.index,
            delta = resolution.delta,
            targeted = target.is_some_and(|t| t < n),
            "spin started"
        );
        Some(resolution)
    }

    /// Advance the spin against the clock.
    ///
    /// Fires at most one tick per call. Once the full duration has elapsed,
    /// commits the final orientation, returns to idle, and returns the
    /// outcome. Each spin's outcome is returned exactly once.
    pub fn poll(&mut self) -> Option<SpinOutcome> {
        let now = self.clock.now_ms();
        let active = self.active.as_mut()?;

        if active.next_tick_at <= now && active.next_tick_at < active.ends_at() {
            swallow("tick", self.notifier.tick());
            while active.next_tick_at <= now && active.next_tick_at < u64::MAX {
                let step = active.cadence.next().unwrap_or(TickCadence::MAX_MS);
                active.next_tick_at = active.next_tick_at.saturating_add(step);
            }
        }

        if now < active.ends_at() {
            return None;
        }

        let finished = self.active.take()?;
        self.state.orientation_degrees = finished.from + finished.delta;
        self.state.spinning = false;
        swallow("tick_stop", self.notifier.tick_stop());
        swallow("complete", self.notifier.complete(&finished.outcome));

        info!(
            index = finished.outcome.winning_index,
            label = %finished.outcome.entry.label,
            orientation = self.state.orientation_degrees,
            "spin complete"
        );
        Some(finished.outcome)
    }

    /// Fraction of the running spin's duration that has elapsed.
    pub fn progress(&self) -> Option<f64> {
        let now = self.clock.now_ms();
        self.active.as_ref().map(|a| a.progress(now))
    }

    /// Milliseconds until the running spin completes.
    pub fn remaining_ms(&self) -> Option<u64> {
        let now = self.clock.now_ms();
        self.active
            .as_ref()
            .map(|a| a.ends_at().saturating_sub(now))
    }

    /// The orientation to draw right now, following the easing curve while
    /// spinning.
    pub fn current_orientation(&self) -> f64 {
        match &self.active {
            Some(active) => {
                let t = active.progress(self.clock.now_ms());
                active.from + active.delta * SPIN_EASING.ease(t)
            }
            None => self.state.orientation_degrees,
        }
    }

    /// The slice under the pointer right now.
    ///
    /// While spinning this uses the slice count captured at spin time;
    /// otherwise it uses `n`.
    pub fn live_index(&self, n: usize) -> Option<usize> {
        let n = self.active.as_ref().map_or(n, |a| a.slice_count);
        index_at_orientation(self.current_orientation(), n)
    }
}

fn swallow(event: &'static str, result: NotifyResult<()>) {
    if let Err(e) = result {
        debug!(event, error = %e, "notifier failed; ignoring");
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::clock::ManualClock;
    use crate::notify::NotifyError;
    use crate::resolver::normalize_degrees;

    fn entries(labels: &[&str]) -> Vec<Entry> {
        labels.iter().map(|l| Entry::new(*l)).collect()
    }

    fn wheel(seed: u64) -> (Wheel<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = WheelConfig::default().with_seed(seed);
        (Wheel::with_clock(config, clock.clone()), clock)
    }

    #[derive(Clone, Default)]
    struct Recorder {
        events: Rc<RefCell<Vec<String>>>,
    }

    impl SpinNotifier for Recorder {
        fn tick_start(&mut self) -> NotifyResult<()> {
            self.events.borrow_mut().push("start".into());
            Ok(())
        }
        fn tick(&mut self) -> NotifyResult<()> {
            self.events.borrow_mut().push("tick".into());
            Ok(())
        }
        fn tick_stop(&mut self) -> NotifyResult<()> {
            self.events.borrow_mut().push("stop".into());
            Ok(())
        }
        fn complete(&mut self, outcome: &SpinOutcome) -> NotifyResult<()> {
            self.events
                .borrow_mut()
                .push(format!("complete:{}", outcome.entry.label));
            Ok(())
        }
    }

    struct Broken;

    impl SpinNotifier for Broken {
        fn tick_start(&mut self) -> NotifyResult<()> {
            Err(NotifyError::Unavailable("no audio".into()))
        }
        fn tick(&mut self) -> NotifyResult<()> {
            Err(NotifyError::Unavailable("no audio".into()))
        }
        fn complete(&mut self, _outcome: &SpinOutcome) -> NotifyResult<()> {
            Err(NotifyError::Unavailable("no audio".into()))
        }
    }

    #[test]
    fn outcome_fires_once_after_duration() {
        let (mut w, clock) = wheel(1);
        let list = entries(&["A", "B", "C", "D"]);

        let r = w.spin(&list, Some(2), 1000).unwrap();
        assert_eq!(r.index, 2);
        assert!((r.delta - 2385.0).abs() < 1e-9);
        assert_eq!(w.phase(), SpinPhase::Spinning);
        assert!(w.state().spinning);

        assert_eq!(w.poll(), None);
        clock.advance(999);
        assert_eq!(w.poll(), None);
        assert_eq!(w.remaining_ms(), Some(1));

        clock.advance(1);
        let outcome = w.poll().unwrap();
        assert_eq!(outcome.winning_index, 2);
        assert_eq!(outcome.entry.label, "C");
        assert_eq!(w.phase(), SpinPhase::Idle);
        assert!(!w.state().spinning);
        assert!((w.state().orientation_degrees - 2385.0).abs() < 1e-9);

        clock.advance(5000);
        assert_eq!(w.poll(), None);
    }

    #[test]
    fn huge_duration_never_completes_early() {
        let (mut w, clock) = wheel(4);
        let list = entries(&["A", "B", "C"]);
        clock.advance(10);

        w.spin(&list, None, u64::MAX).unwrap();
        assert_eq!(w.poll(), None);
        clock.advance(1_000_000);
        assert_eq!(w.poll(), None);
        assert!(w.is_spinning());
        assert_eq!(w.remaining_ms(), Some(u64::MAX - 1_000_010));
    }

    #[test]
    fn spin_while_spinning_is_dropped() {
        let (mut w, clock) = wheel(1);
        let list = entries(&["A", "B", "C"]);
        w.spin(&list, Some(0), 500).unwrap();
        assert_eq!(w.spin(&list, Some(1), 500), None);

        clock.advance(500);
        let outcome = w.poll().unwrap();
        assert_eq!(outcome.winning_index, 0);
        assert_eq!(w.poll(), None);
    }

    #[test]
    fn empty_wheel_is_inert() {
        let (mut w, clock) = wheel(1);
        assert_eq!(w.spin(&[], Some(0), 500), None);
        assert_eq!(w.phase(), SpinPhase::Idle);
        assert_eq!(w.state(), WheelState::default());
        clock.advance(1000);
        assert_eq!(w.poll(), None);
        assert_eq!(w.live_index(0), None);
    }

    #[test]
    fn orientation_accumulates_across_spins() {
        let (mut w, clock) = wheel(5);
        let list = entries(&["A", "B", "C", "D", "E"]);

        w.spin(&list, Some(1), 100).unwrap();
        clock.advance(100);
        w.poll().unwrap();
        let first = w.state().orientation_degrees;
        assert_eq!(w.live_index(list.len()), Some(1));

        w.spin(&list, Some(4), 100).unwrap();
        clock.advance(100);
        w.poll().unwrap();
        let second = w.state().orientation_degrees;
        assert!(second >= first + 6.0 * 360.0);
        assert_eq!(w.live_index(list.len()), Some(4));
    }

    #[test]
    fn next_spin_uses_new_entry_count() {
        let (mut w, clock) = wheel(5);
        let mut list = entries(&["A", "B", "C", "D"]);
        w.spin(&list, Some(3), 100).unwrap();
        clock.advance(100);
        w.poll().unwrap();

        list.remove(3);
        let r = w.spin(&list, Some(3), 100).unwrap();
        assert!(r.index < 3);
        clock.advance(100);
        let outcome = w.poll().unwrap();
        assert_eq!(
            index_at_orientation(w.state().orientation_degrees, 3),
            Some(outcome.winning_index)
        );
    }

    #[test]
    fn animation_follows_easing() {
        let (mut w, clock) = wheel(1);
        let list = entries(&["A", "B", "C", "D"]);
        let r = w.spin(&list, Some(2), 1000).unwrap();

        assert_eq!(w.current_orientation(), 0.0);
        clock.advance(500);
        let mid = w.current_orientation();
        assert!(mid > r.delta / 2.0 && mid < r.delta);
        assert_eq!(w.progress(), Some(0.5));

        clock.advance(500);
        assert!((w.current_orientation() - r.delta).abs() < 1e-9);
        w.poll().unwrap();
        assert_eq!(normalize_degrees(w.current_orientation()), 225.0);
    }

    #[test]
    fn notifier_sees_lifecycle_in_order() {
        let recorder = Recorder::default();
        let events = recorder.events.clone();
        let (w, clock) = wheel(1);
        let mut w = w.with_notifier(recorder);
        let list = entries(&["A", "B"]);

        w.spin(&list, Some(1), 1000).unwrap();
        while w.poll().is_none() {
            clock.advance(20);
        }

        let events = events.borrow();
        assert_eq!(events.first().map(String::as_str), Some("start"));
        let ticks = events.iter().filter(|e| *e == "tick").count();
        assert!(ticks >= 5, "expected several ticks, got {ticks}");
        assert_eq!(&events[events.len() - 2..], ["stop", "complete:B"]);
    }

    #[test]
    fn broken_notifier_does_not_affect_outcome() {
        let (w, clock) = wheel(1);
        let mut w = w.with_notifier(Broken);
        let list = entries(&["A", "B", "C"]);
        w.spin(&list, Some(2), 300).unwrap();
        clock.advance(100);
        assert_eq!(w.poll(), None);
        clock.advance(200);
        assert_eq!(w.poll().unwrap().winning_index, 2);
    }

    #[test]
    fn seeded_wheels_agree() {
        let list = entries(&["A", "B", "C", "D", "E", "F", "G", "H"]);
        let (mut a, ca) = wheel(77);
        let (mut b, cb) = wheel(77);
        for _ in 0..10 {
            let ra = a.spin(&list, None, 10).unwrap();
            let rb = b.spin(&list, None, 10).unwrap();
            assert_eq!(ra, rb);
            ca.advance(10);
            cb.advance(10);
            a.poll().unwrap();
            b.poll().unwrap();
        }
    }
}
