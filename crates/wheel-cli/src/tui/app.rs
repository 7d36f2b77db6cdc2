//! State and key handling for the interactive wheel.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use wheel_core::{Clock, SystemClock};
use wheel_session::{DemoWheel, SessionError, WheelSession, parse_preset};

/// The interactive wheel's state.
pub struct WheelApp<C: Clock = SystemClock> {
    /// The session being driven.
    pub session: WheelSession<C>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Whether to show the help popup.
    pub show_help: bool,
    /// Feedback for the status bar.
    pub message: Option<String>,
    /// Digits typed for the preset target.
    pub preset_input: String,
    /// Index into [`DemoWheel::ALL`] of the next demo to load.
    next_demo: usize,
}

impl<C: Clock> WheelApp<C> {
    /// Wrap a session.
    pub fn new(session: WheelSession<C>) -> Self {
        Self {
            session,
            should_quit: false,
            show_help: false,
            message: None,
            preset_input: String::new(),
            next_demo: 0,
        }
    }

    /// Advance the running spin, recording and saving a finished one.
    pub fn tick(&mut self) {
        let Some(outcome) = self.session.poll() else {
            return;
        };
        self.message = Some(format!("Winner: {}", outcome.entry.label));
        if self.session.preset().is_none() {
            self.preset_input.clear();
        }
        if let Err(e) = self.save() {
            self.message = Some(e);
        }
    }

    /// Persist the session.
    pub fn save(&self) -> Result<(), String> {
        self.session
            .save()
            .map_err(|e| format!("could not save: {e}"))
    }

    /// Handle one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char(' ') | KeyCode::Enter => self.spin(),
            KeyCode::Char('c') => {
                self.session.clear_log();
                self.message = Some("Log cleared".to_string());
            }
            KeyCode::Char('r') => {
                let remove = !self.session.remove_after_spin();
                self.admin_action(|s| s.set_remove_after(remove), || {
                    format!("Remove winner: {}", if remove { "on" } else { "off" })
                });
            }
            KeyCode::Char('d') => {
                let demo = DemoWheel::ALL[self.next_demo % DemoWheel::ALL.len()];
                if self.admin_action(|s| s.load_demo(demo), || format!("Loaded {demo} wheel")) {
                    self.next_demo += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let mut text = self.preset_input.clone();
                text.push(c);
                self.edit_preset(text);
            }
            KeyCode::Backspace => {
                let mut text = self.preset_input.clone();
                text.pop();
                self.edit_preset(text);
            }
            _ => {}
        }
    }

    /// Apply typed preset digits, keeping them only if the session accepts.
    fn edit_preset(&mut self, text: String) {
        let applied = self.admin_action(
            |s| s.set_preset_text(&text),
            || match parse_preset(&text) {
                Some(index) => format!("Preset: slice {index}"),
                None => "Preset cleared".to_string(),
            },
        );
        if applied {
            self.preset_input = text;
        }
    }

    fn spin(&mut self) {
        if !self.session.can_spin() {
            if self.session.entries().is_empty() {
                self.message = Some("The wheel has no entries".to_string());
            }
            return;
        }
        if self.session.spin().is_some() {
            self.message = None;
        }
    }

    /// Run an admin-only edit, reporting the result on the status bar.
    /// Edits are refused while the wheel is spinning.
    fn admin_action(
        &mut self,
        action: impl FnOnce(&mut WheelSession<C>) -> Result<(), SessionError>,
        done: impl FnOnce() -> String,
    ) -> bool {
        if self.session.wheel().is_spinning() {
            return false;
        }
        match action(&mut self.session) {
            Ok(()) => {
                self.message = Some(done());
                true
            }
            Err(e) => {
                self.message = Some(e.to_string());
                false
            }
        }
    }
}
