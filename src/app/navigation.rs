//! Navigation methods for the App.

use super::{App, Screen};

impl App {
    /// Number of focusable fields.
    fn field_count(&self) -> usize {
        self.state.form.exchanges().len() * crate::domain::FieldKind::ALL.len()
    }

    /// Move focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
        }
    }

    /// Move focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
        }
    }

    /// Switch screens, starting or stopping the status reconciler.
    pub fn set_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        tracing::debug!(from = ?self.screen, to = ?screen, "Switching screen");
        self.screen = screen;
        self.activate_screen(screen);
    }

    /// The reconciler only runs while the credential screen is shown.
    pub(super) fn activate_screen(&mut self, screen: Screen) {
        match screen {
            Screen::Credentials => self.reconciler.start(),
            Screen::Overview => self.reconciler.stop(),
        }
    }
}
