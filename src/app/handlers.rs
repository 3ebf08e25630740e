//! Keyboard handling for the App.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{App, FieldEdit, Screen};

/// What a key press asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    NextField,
    PrevField,
    Input(char),
    Backspace,
    Submit,
    Delete,
    Refresh,
    Confirm,
    Cancel,
    SwitchScreen(Screen),
    None,
}

/// Map a key event to an action.
///
/// While a confirmation dialog is open only the dialog keys and quit are
/// live.
pub fn map_key(key: KeyEvent, confirming: bool) -> Action {
    if key.kind == KeyEventKind::Release {
        return Action::None;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('s') if !confirming => Action::Submit,
            KeyCode::Char('d') if !confirming => Action::Delete,
            KeyCode::Char('r') if !confirming => Action::Refresh,
            _ => Action::None,
        };
    }

    if confirming {
        return match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
            _ => Action::None,
        };
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => Action::NextField,
        KeyCode::BackTab | KeyCode::Up => Action::PrevField,
        KeyCode::Enter => Action::Submit,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::F(1) => Action::SwitchScreen(Screen::Credentials),
        KeyCode::F(2) => Action::SwitchScreen(Screen::Overview),
        KeyCode::Char(c) => Action::Input(c),
        _ => Action::None,
    }
}

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = map_key(key, self.state.pending_delete.is_some());
        self.dispatch(action);
    }

    /// Perform an action.
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchScreen(screen) => self.set_screen(screen),
            Action::Confirm => {
                let effects = self.state.resolve_delete(true);
                self.run_effects(effects);
            }
            Action::Cancel => {
                self.state.resolve_delete(false);
            }
            Action::Refresh => {
                let effects = self.state.refresh();
                self.run_effects(effects);
            }
            // Everything below only applies to the credential form
            _ if self.screen != Screen::Credentials => {}
            Action::NextField => self.focus_next(),
            Action::PrevField => self.focus_prev(),
            Action::Input(c) => {
                if let Some(key) = self.focused_key() {
                    self.state.edit(&key, FieldEdit::Push(c));
                }
            }
            Action::Backspace => {
                if let Some(key) = self.focused_key() {
                    self.state.edit(&key, FieldEdit::Pop);
                }
            }
            Action::Submit => {
                let effects = self.state.submit();
                self.run_effects(effects);
            }
            Action::Delete => {
                if let Some(exchange) = self.focused_exchange() {
                    self.state.request_delete(&exchange);
                }
            }
            Action::None => {}
        }
    }

    /// Handle bracketed paste into the focused field.
    ///
    /// Newlines are dropped so a pasted key never submits the form.
    pub fn handle_paste(&mut self, text: &str) {
        if self.screen != Screen::Credentials || self.state.pending_delete.is_some() {
            return;
        }
        let Some(key) = self.focused_key() else {
            return;
        };
        for c in text.chars().filter(|c| !c.is_control()) {
            self.state.edit(&key, FieldEdit::Push(c));
        }
    }
}
