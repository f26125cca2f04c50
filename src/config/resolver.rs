use std::sync::Arc;

use crossterm::event::KeyEvent;

use crate::config::actions::{DialogAction, GlobalAction};
use crate::config::keybindings::KeybindingsConfig;

/// Matches incoming key events against the configured bindings.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    // Global actions
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.matches(event),
            GlobalAction::OpenAlert => kb.open_alert.matches(event),
            GlobalAction::OpenConfirm => kb.open_confirm.matches(event),
        }
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => kb.quit.display(),
            GlobalAction::OpenAlert => kb.open_alert.display(),
            GlobalAction::OpenConfirm => kb.open_confirm.display(),
        }
    }

    // Dialog actions
    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Confirm => kb.confirm.matches(event),
            DialogAction::Cancel => kb.cancel.matches(event),
        }
    }

    pub fn display_dialog(&self, action: DialogAction) -> String {
        let kb = &self.keybindings.dialog;
        match action {
            DialogAction::Confirm => kb.confirm.display(),
            DialogAction::Cancel => kb.cancel.display(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn resolver() -> KeyResolver {
        KeyResolver::new(Arc::new(KeybindingsConfig::default()))
    }

    #[test]
    fn test_dialog_defaults() {
        let r = resolver();
        let yes = KeyEvent::new(KeyCode::Char('y'), KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert!(r.matches_dialog(&yes, DialogAction::Confirm));
        assert!(r.matches_dialog(&esc, DialogAction::Cancel));
        assert!(!r.matches_dialog(&esc, DialogAction::Confirm));
    }

    #[test]
    fn test_global_defaults() {
        let r = resolver();
        let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(r.matches_global(&quit, GlobalAction::Quit));
        assert!(!r.matches_global(&quit, GlobalAction::OpenAlert));
    }
}
