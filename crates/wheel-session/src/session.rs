//! Wheel session management.
//!
//! `WheelSession` ties a [`Wheel`] to the collaborators around it: the entry
//! store it spins over, the outcome log it feeds, and the access gate that
//! decides whether a preset target and the remove-winner setting apply.

use wheel_core::{
    Clock, Entry, SpinNotifier, SpinOutcome, SpinResolution, SystemClock, Wheel,
};

use crate::config::SessionConfig;
use crate::error::{SessionError, SessionResult};
use crate::gate::{AccessGate, parse_preset};
use crate::log::{OutcomeLog, SpinRecord};
use crate::persist::SavedState;
use crate::store::{DemoWheel, EntryStore};

/// Headline numbers for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStats {
    /// Entries currently on the wheel.
    pub entries: usize,
    /// Spins in the log.
    pub total_spins: usize,
    /// Label of the most recent winner.
    pub last_winner: Option<String>,
}

/// An interactive wheel session.
pub struct WheelSession<C: Clock = SystemClock> {
    config: SessionConfig,
    wheel: Wheel<C>,
    store: EntryStore,
    log: OutcomeLog,
    gate: AccessGate,
    remove_after_spin: bool,
    preset: Option<usize>,
    last_winner: Option<SpinOutcome>,
}

impl<C: Clock> std::fmt::Debug for WheelSession<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WheelSession")
            .field("entries", &self.store.len())
            .field("records", &self.log.len())
            .field("admin", &self.gate.is_admin())
            .field("spinning", &self.wheel.is_spinning())
            .finish()
    }
}

impl WheelSession<SystemClock> {
    /// Open the session stored at the configured path, timed by the system clock.
    pub fn open(config: SessionConfig) -> SessionResult<Self> {
        Self::open_with_clock(config, SystemClock::new())
    }
}

impl<C: Clock> WheelSession<C> {
    /// Open the session stored at the configured path.
    pub fn open_with_clock(config: SessionConfig, clock: C) -> SessionResult<Self> {
        let state = SavedState::load(&config.state_path)?;
        Ok(Self::from_state(config, state, clock))
    }

    /// Build a session from already-loaded state.
    pub fn from_state(config: SessionConfig, state: SavedState, clock: C) -> Self {
        let wheel = Wheel::with_clock(config.wheel.clone(), clock);
        let gate = AccessGate::with_admin(config.admin_pin.clone(), state.admin);
        Self {
            config,
            wheel,
            store: state.entries,
            log: state.log,
            gate,
            remove_after_spin: state.remove_after_spin,
            preset: None,
            last_winner: None,
        }
    }

    /// Snapshot of the persistent parts of the session.
    pub fn to_state(&self) -> SavedState {
        SavedState {
            entries: self.store.clone(),
            remove_after_spin: self.remove_after_spin,
            log: self.log.clone(),
            admin: self.gate.is_admin(),
        }
    }

    /// Persist the session to the configured path.
    pub fn save(&self) -> SessionResult<()> {
        self.to_state().save(&self.config.state_path)
    }

    /// Replace the spin notifier.
    pub fn set_notifier(&mut self, notifier: impl SpinNotifier + 'static) {
        self.wheel.set_notifier(notifier);
    }

    /// The session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying wheel.
    pub fn wheel(&self) -> &Wheel<C> {
        &self.wheel
    }

    /// Entries in slice order.
    pub fn entries(&self) -> &[Entry] {
        self.store.entries()
    }

    /// The outcome log.
    pub fn log(&self) -> &OutcomeLog {
        &self.log
    }

    /// Whether admin controls are unlocked.
    pub fn is_admin(&self) -> bool {
        self.gate.is_admin()
    }

    /// The admin's remove-winner setting, ignoring the viewer override.
    pub fn remove_after_spin(&self) -> bool {
        self.remove_after_spin
    }

    /// Whether the next winner will actually be removed.
    pub fn effective_remove_after(&self) -> bool {
        self.gate.effective_remove_after(self.remove_after_spin)
    }

    /// The admin's preset target.
    pub fn preset(&self) -> Option<usize> {
        self.preset
    }

    /// The outcome of the last spin completed in this process.
    pub fn last_winner(&self) -> Option<&SpinOutcome> {
        self.last_winner.as_ref()
    }

    /// Whether a spin request would be accepted right now.
    pub fn can_spin(&self) -> bool {
        !self.store.is_empty() && !self.wheel.is_spinning()
    }

    /// Headline numbers.
    pub fn stats(&self) -> SessionStats {
        let last_winner = self
            .last_winner
            .as_ref()
            .map(|o| o.entry.label.clone())
            .or_else(|| self.log.latest().map(|r| r.label.clone()));
        SessionStats {
            entries: self.store.len(),
            total_spins: self.log.len(),
            last_winner,
        }
    }

    /// Unlock admin controls.
    pub fn login(&mut self, pin: &str) -> SessionResult<()> {
        self.gate.login(pin)?;
        tracing::info!("admin unlocked");
        Ok(())
    }

    /// Lock admin controls.
    pub fn logout(&mut self) {
        self.gate.logout();
        self.preset = None;
    }

    /// Admin edits are refused mid-spin: the spin captured the slice count
    /// and winning index, and the winner is removed by position.
    fn require_editable(&self) -> SessionResult<()> {
        self.gate.require_admin()?;
        if self.wheel.is_spinning() {
            return Err(SessionError::Spinning);
        }
        Ok(())
    }

    /// Add an entry (admin only).
    pub fn add_entry(&mut self, entry: Entry) -> SessionResult<()> {
        self.require_editable()?;
        self.store.add(entry)
    }

    /// Remove the entry at `index` (admin only).
    pub fn remove_entry(&mut self, index: usize) -> SessionResult<Entry> {
        self.require_editable()?;
        self.store.remove_at(index)
    }

    /// Replace the entries with a demo wheel (admin only).
    pub fn load_demo(&mut self, demo: DemoWheel) -> SessionResult<()> {
        self.require_editable()?;
        self.store.load_demo(demo);
        self.preset = None;
        Ok(())
    }

    /// Choose whether winners are removed (admin only).
    pub fn set_remove_after(&mut self, remove: bool) -> SessionResult<()> {
        self.require_editable()?;
        self.remove_after_spin = remove;
        Ok(())
    }

    /// Preset the winning slice for upcoming spins (admin only).
    pub fn set_preset(&mut self, preset: Option<usize>) -> SessionResult<()> {
        self.require_editable()?;
        self.preset = preset;
        Ok(())
    }

    /// Preset the winning slice from text; blank or malformed text clears it.
    pub fn set_preset_text(&mut self, text: &str) -> SessionResult<()> {
        self.set_preset(parse_preset(text))
    }

    /// Clear the outcome log.
    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    /// Start a spin. Returns `None` when the wheel is empty or already spinning.
    pub fn spin(&mut self) -> Option<SpinResolution> {
        let target = self.gate.effective_target(self.preset);
        self.wheel
            .spin(self.store.entries(), target, self.config.wheel.duration_ms)
    }

    /// Drive the running spin. When it completes, the winner is logged,
    /// removed if the remove-winner policy applies, and returned.
    pub fn poll(&mut self) -> Option<SpinOutcome> {
        let outcome = self.wheel.poll()?;
        self.log.record(SpinRecord::now(outcome.entry.label.clone()));
        if self.effective_remove_after() && outcome.winning_index < self.store.len() {
            self.store.remove_at(outcome.winning_index).ok();
            self.preset = None;
        }
        self.last_winner = Some(outcome.clone());
        Some(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::DEFAULT_LABELS;
    use tempfile::TempDir;
    use wheel_core::{ManualClock, WheelConfig};

    fn session(admin: bool) -> (WheelSession<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let config = SessionConfig::default()
            .with_wheel(WheelConfig::default().with_seed(11).with_duration_ms(100));
        let state = SavedState {
            entries: EntryStore::from_labels(&["A", "B", "C", "D"]),
            admin,
            ..SavedState::default()
        };
        (WheelSession::from_state(config, state, clock.clone()), clock)
    }

    fn run_spin(s: &mut WheelSession<ManualClock>, clock: &ManualClock) -> SpinOutcome {
        s.spin().unwrap();
        clock.advance(100);
        s.poll().unwrap()
    }

    #[test]
    fn viewer_spin_is_random_and_removes_winner() {
        let (mut s, clock) = session(false);
        assert!(matches!(
            s.set_preset(Some(1)),
            Err(SessionError::AdminRequired)
        ));
        let outcome = run_spin(&mut s, &clock);
        assert_eq!(s.entries().len(), 3);
        assert!(s.entries().iter().all(|e| e.label != outcome.entry.label));
        assert_eq!(s.log().len(), 1);
        assert_eq!(s.log().latest().unwrap().label, outcome.entry.label);
    }

    #[test]
    fn admin_preset_decides_winner() {
        let (mut s, clock) = session(true);
        s.set_remove_after(false).unwrap();
        s.set_preset(Some(2)).unwrap();
        for _ in 0..3 {
            let outcome = run_spin(&mut s, &clock);
            assert_eq!(outcome.winning_index, 2);
            assert_eq!(outcome.entry.label, "C");
        }
        assert_eq!(s.entries().len(), 4);
        assert_eq!(s.log().leaderboard(), vec![("C".to_string(), 3)]);
    }

    #[test]
    fn removal_clears_preset() {
        let (mut s, clock) = session(true);
        s.set_preset_text("1").unwrap();
        let outcome = run_spin(&mut s, &clock);
        assert_eq!(outcome.entry.label, "B");
        assert_eq!(s.preset(), None);
        let labels: Vec<&str> = s.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "C", "D"]);
    }

    #[test]
    fn preset_ignored_after_logout() {
        let (mut s, _clock) = session(true);
        s.set_preset(Some(3)).unwrap();
        s.logout();
        assert_eq!(s.preset(), None);
        assert!(!s.is_admin());
        assert!(s.effective_remove_after());
    }

    #[test]
    fn empty_wheel_cannot_spin() {
        let (mut s, clock) = session(true);
        s.set_remove_after(true).unwrap();
        for _ in 0..4 {
            run_spin(&mut s, &clock);
        }
        assert!(s.entries().is_empty());
        assert!(!s.can_spin());
        assert_eq!(s.spin(), None);
        clock.advance(1000);
        assert_eq!(s.poll(), None);
        assert_eq!(s.log().len(), 4);
    }

    #[test]
    fn spin_while_spinning_is_ignored() {
        let (mut s, clock) = session(false);
        s.spin().unwrap();
        assert!(!s.can_spin());
        assert_eq!(s.spin(), None);
        clock.advance(100);
        assert!(s.poll().is_some());
        assert_eq!(s.poll(), None);
        assert_eq!(s.log().len(), 1);
    }

    #[test]
    fn edits_refused_while_spinning() {
        let (mut s, clock) = session(true);
        s.set_preset(Some(2)).unwrap();
        s.spin().unwrap();

        assert!(matches!(s.remove_entry(0), Err(SessionError::Spinning)));
        assert!(matches!(
            s.add_entry(Entry::new("E")),
            Err(SessionError::Spinning)
        ));
        assert!(matches!(
            s.load_demo(DemoWheel::Teams),
            Err(SessionError::Spinning)
        ));
        assert!(matches!(
            s.set_remove_after(false),
            Err(SessionError::Spinning)
        ));
        assert!(matches!(s.set_preset(None), Err(SessionError::Spinning)));

        clock.advance(100);
        let outcome = s.poll().unwrap();
        assert_eq!(outcome.entry.label, "C");
        let labels: Vec<&str> = s.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["A", "B", "D"]);

        s.remove_entry(0).unwrap();
        assert_eq!(s.entries().len(), 2);
    }

    #[test]
    fn viewer_cannot_edit() {
        let (mut s, _clock) = session(false);
        assert!(s.add_entry(Entry::new("E")).is_err());
        assert!(s.remove_entry(0).is_err());
        assert!(s.load_demo(DemoWheel::Teams).is_err());
        assert!(s.set_remove_after(false).is_err());
        assert_eq!(s.entries().len(), 4);
    }

    #[test]
    fn admin_edits_entries() {
        let (mut s, _clock) = session(true);
        s.add_entry(Entry::new("E")).unwrap();
        assert_eq!(s.remove_entry(0).unwrap().label, "A");
        s.load_demo(DemoWheel::Classroom).unwrap();
        assert_eq!(s.entries().len(), DEFAULT_LABELS.len());
    }

    #[test]
    fn login_flow() {
        let (mut s, _clock) = session(false);
        assert!(matches!(s.login("0000"), Err(SessionError::WrongPin)));
        s.login("1234").unwrap();
        assert!(s.is_admin());
    }

    #[test]
    fn stats_track_last_winner() {
        let (mut s, clock) = session(false);
        assert_eq!(s.stats().last_winner, None);
        let outcome = run_spin(&mut s, &clock);
        let stats = s.stats();
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.total_spins, 1);
        assert_eq!(stats.last_winner, Some(outcome.entry.label));
        s.clear_log();
        assert_eq!(s.stats().total_spins, 0);
    }

    #[test]
    fn open_and_save_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("wheel.json");
        let config = SessionConfig::default().with_state_path(&path);

        let mut s = WheelSession::open_with_clock(config.clone(), ManualClock::new()).unwrap();
        assert_eq!(s.entries().len(), 8);
        s.login("1234").unwrap();
        s.add_entry(Entry::new("Zoe")).unwrap();
        s.save().unwrap();

        let reopened = WheelSession::open_with_clock(config, ManualClock::new()).unwrap();
        assert!(reopened.is_admin());
        assert_eq!(reopened.entries().len(), 9);
        assert_eq!(reopened.entries()[8].label, "Zoe");
    }
}
