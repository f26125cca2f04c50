//! Modal alert/confirm dialog.
//!
//! [`ModalDialog`] is a long-lived widget the host embeds once. Each opening
//! sets a message and a [`DialogKind`], shows the overlay and content box,
//! and ends with exactly one boolean decision on the host's subscription
//! channel:
//!
//! - alert mode: the single ok control and the overlay both acknowledge
//!   with `false`
//! - confirm mode: ok yields `true`; cancel and the overlay yield `false`
//!
//! The decision is enqueued before the widget reports itself hidden, and
//! once hidden the widget ignores input until the host re-opens it, so a
//! late second click cannot produce a second decision.

mod emitter;
mod view;

pub use emitter::Notifier;
pub use view::HitMap;

use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::Frame;
use ratatui::layout::Rect;
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use crate::Theme;
use crate::config::{DialogAction, KeyResolver};
use crate::labels::{LabelKey, LabelLookup};
use crate::ui::{Component, Handled, Result};

/// Button layout of one opening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogKind {
    /// Single acknowledgement control.
    #[default]
    Alert,
    /// Confirm and cancel controls.
    Confirm,
}

impl DialogKind {
    /// Coerce a loose host-supplied mode token.
    ///
    /// Recognizes `"confirm"`; every other value, including the empty
    /// string, is alert mode. Unknown tokens are a default, not an error.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        if token == "confirm" {
            Self::Confirm
        } else {
            Self::Alert
        }
    }
}

/// Named click regions the render surface routes back into the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogRegion {
    /// The acknowledgement/confirm control.
    Ok,
    /// The cancel control (confirm mode only).
    Cancel,
    /// The content box outside any control; shields the overlay beneath it.
    Content,
    /// The backdrop outside the content box.
    Overlay,
}

/// Modal dialog widget.
///
/// The host opens it with [`ModalDialog::alert`] or [`ModalDialog::confirm`]
/// and listens on [`ModalDialog::decisions`]. Closing is always user-input
/// driven; the widget stays open until one of the qualifying inputs occurs.
pub struct ModalDialog {
    visible: bool,
    message: String,
    kind: DialogKind,
    labels: Arc<dyn LabelLookup + Send + Sync>,
    resolver: Arc<KeyResolver>,
    decisions: Notifier<bool>,
    redraws: Notifier<()>,
    hit_map: HitMap,
}

impl ModalDialog {
    pub fn new(labels: Arc<dyn LabelLookup + Send + Sync>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            visible: false,
            message: String::new(),
            kind: DialogKind::Alert,
            labels,
            resolver,
            decisions: Notifier::new(),
            redraws: Notifier::new(),
            hit_map: HitMap::default(),
        }
    }

    /// Open the dialog with the given message and kind.
    ///
    /// A no-op while an opening is in progress: message and kind stay fixed
    /// for the duration of one opening, and re-opening must not create a
    /// second decision.
    pub fn open(&mut self, message: impl Into<String>, kind: DialogKind) {
        if self.visible {
            debug!("dialog already open, ignoring open request");
            return;
        }
        self.message = message.into();
        self.kind = kind;
        self.visible = true;
        debug!(?kind, "dialog opened");
        self.redraws.notify(());
    }

    /// Open in alert mode.
    pub fn alert(&mut self, message: impl Into<String>) {
        self.open(message, DialogKind::Alert);
    }

    /// Open in confirm mode.
    pub fn confirm(&mut self, message: impl Into<String>) {
        self.open(message, DialogKind::Confirm);
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn kind(&self) -> DialogKind {
        self.kind
    }

    /// Subscribe to closing decisions (`true` = confirmed).
    ///
    /// Exactly one decision is delivered per opening, no matter which
    /// qualifying input closed it.
    pub fn decisions(&mut self) -> UnboundedReceiver<bool> {
        self.decisions.subscribe()
    }

    /// Subscribe to re-render requests.
    ///
    /// The dialog never repaints on its own; it only reports that its state
    /// changed (opened or closed) and leaves scheduling to the host.
    pub fn redraws(&mut self) -> UnboundedReceiver<()> {
        self.redraws.subscribe()
    }

    /// Route an input on a named region into the state machine.
    pub fn click(&mut self, region: DialogRegion) -> Handled<()> {
        if !self.visible {
            return Handled::Ignored;
        }
        match region {
            DialogRegion::Ok => self.close(self.kind == DialogKind::Confirm),
            DialogRegion::Cancel | DialogRegion::Overlay => self.close(false),
            DialogRegion::Content => {} // the box shields the overlay
        }
        Handled::Consumed
    }

    // The decision goes out before the dialog stops reporting itself
    // visible, and the hit map is dropped so stale rects cannot route a
    // second click.
    fn close(&mut self, decision: bool) {
        debug!(decision, "dialog closed");
        self.decisions.notify(decision);
        self.visible = false;
        self.hit_map.reset();
        self.redraws.notify(());
    }
}

impl Component for ModalDialog {
    type Output = ();

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<()>> {
        if !self.visible {
            return Ok(Handled::Ignored);
        }
        if self.resolver.matches_dialog(&key, DialogAction::Confirm) {
            return Ok(self.click(DialogRegion::Ok));
        }
        if self.resolver.matches_dialog(&key, DialogAction::Cancel) {
            return Ok(self.click(DialogRegion::Cancel));
        }
        // Consume all other keys to prevent propagation
        Ok(Handled::Consumed)
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> Result<Handled<()>> {
        if !self.visible {
            return Ok(Handled::Ignored);
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(region) = self.hit_map.hit(mouse.column, mouse.row) {
                return Ok(self.click(region));
            }
        }
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        if !self.visible {
            self.hit_map.reset();
            return;
        }
        let ok_label = self.labels.label(LabelKey::Ok);
        let cancel_label = self.labels.label(LabelKey::Cancel);
        self.hit_map = view::render(
            frame,
            area,
            theme,
            self.kind,
            &self.message,
            &ok_label,
            &cancel_label,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LabelsConfig;
    use crate::config::keybindings::KeybindingsConfig;
    use crate::labels::ConfigLabels;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn dialog() -> ModalDialog {
        let labels = Arc::new(ConfigLabels::new(LabelsConfig::default()));
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        ModalDialog::new(labels, resolver)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn left_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_mode_token_coercion() {
        assert_eq!(DialogKind::from_token("confirm"), DialogKind::Confirm);
        assert_eq!(DialogKind::from_token("alert"), DialogKind::Alert);
        assert_eq!(DialogKind::from_token(""), DialogKind::Alert);
        assert_eq!(DialogKind::from_token("CONFIRM"), DialogKind::Alert);
    }

    #[test]
    fn test_confirm_cancel_yields_false() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Delete item?");
        assert!(d.visible());
        assert_eq!(d.message(), "Delete item?");

        assert_eq!(d.click(DialogRegion::Cancel), Handled::Consumed);
        assert_eq!(rx.try_recv().ok(), Some(false));
        assert!(!d.visible());
    }

    #[test]
    fn test_alert_overlay_yields_false() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.alert("Saved.");

        d.click(DialogRegion::Overlay);
        assert_eq!(rx.try_recv().ok(), Some(false));
        assert!(!d.visible());
    }

    #[test]
    fn test_confirm_ok_yields_true() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Proceed?");

        d.click(DialogRegion::Ok);
        assert_eq!(rx.try_recv().ok(), Some(true));
        assert!(!d.visible());
    }

    #[test]
    fn test_alert_ok_yields_false() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.alert("Done.");

        d.click(DialogRegion::Ok);
        assert_eq!(rx.try_recv().ok(), Some(false));
    }

    #[test]
    fn test_confirm_overlay_yields_false() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        d.click(DialogRegion::Overlay);
        assert_eq!(rx.try_recv().ok(), Some(false));
    }

    #[test]
    fn test_exactly_one_decision_per_opening() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        assert_eq!(d.click(DialogRegion::Ok), Handled::Consumed);
        // A late second click hits a closed dialog
        assert_eq!(d.click(DialogRegion::Ok), Handled::Ignored);
        assert_eq!(d.click(DialogRegion::Overlay), Handled::Ignored);

        assert_eq!(rx.try_recv().ok(), Some(true));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_decision_precedes_hidden_state() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");
        d.click(DialogRegion::Ok);

        // By the time the host can observe visible == false, the decision
        // is already in its channel.
        assert!(!d.visible());
        assert_eq!(rx.try_recv().ok(), Some(true));
    }

    #[test]
    fn test_open_while_open_is_a_no_op() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("first");
        d.open("second", DialogKind::Alert);

        assert_eq!(d.message(), "first");
        assert_eq!(d.kind(), DialogKind::Confirm);
        assert!(rx.try_recv().is_err());

        d.click(DialogRegion::Ok);
        assert_eq!(rx.try_recv().ok(), Some(true));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_reopen_after_close_starts_fresh_opening() {
        let mut d = dialog();
        let mut rx = d.decisions();

        d.confirm("one");
        d.click(DialogRegion::Cancel);
        assert_eq!(rx.try_recv().ok(), Some(false));

        d.alert("two");
        assert!(d.visible());
        assert_eq!(d.kind(), DialogKind::Alert);
        d.click(DialogRegion::Ok);
        assert_eq!(rx.try_recv().ok(), Some(false));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_content_click_does_not_close() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        assert_eq!(d.click(DialogRegion::Content), Handled::Consumed);
        assert!(d.visible());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_input_ignored_while_hidden() {
        let mut d = dialog();
        assert_eq!(d.click(DialogRegion::Overlay), Handled::Ignored);
        assert_eq!(d.handle_key(key(KeyCode::Enter)).unwrap(), Handled::Ignored);
        assert_eq!(d.handle_mouse(left_click(0, 0)).unwrap(), Handled::Ignored);
    }

    #[test]
    fn test_confirm_key_follows_mode() {
        let mut d = dialog();
        let mut rx = d.decisions();

        d.confirm("Sure?");
        d.handle_key(key(KeyCode::Char('y'))).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(true));

        d.alert("Saved.");
        d.handle_key(key(KeyCode::Enter)).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(false));
    }

    #[test]
    fn test_cancel_key_declines() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        d.handle_key(key(KeyCode::Esc)).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(false));
        assert!(!d.visible());
    }

    #[test]
    fn test_unbound_keys_are_captured_while_open() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        assert_eq!(
            d.handle_key(key(KeyCode::Char('x'))).unwrap(),
            Handled::Consumed
        );
        assert!(d.visible());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_click_routing_through_rendered_regions() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.confirm("Sure?");

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| d.render(frame, frame.area(), &theme))
            .unwrap();

        let ok = d.hit_map.ok.expect("render must record the ok control");

        // Press on the content box first: consumed, still open
        let content = d.hit_map.content.unwrap();
        d.handle_mouse(left_click(content.x, content.y)).unwrap();
        assert!(d.visible());

        d.handle_mouse(left_click(ok.x, ok.y)).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(true));
        assert!(!d.visible());

        // With the dialog closed the stale position routes nowhere
        assert_eq!(d.handle_mouse(left_click(ok.x, ok.y)).unwrap(), Handled::Ignored);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_overlay_click_through_rendered_regions() {
        let mut d = dialog();
        let mut rx = d.decisions();
        d.alert("Saved.");

        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|frame| d.render(frame, frame.area(), &theme))
            .unwrap();

        assert!(d.hit_map.cancel.is_none(), "alert renders no cancel control");

        d.handle_mouse(left_click(0, 0)).unwrap();
        assert_eq!(rx.try_recv().ok(), Some(false));
        assert!(!d.visible());
    }

    #[test]
    fn test_redraw_notifications_on_open_and_close() {
        let mut d = dialog();
        let mut redraws = d.redraws();

        d.confirm("Sure?");
        assert_eq!(redraws.try_recv().ok(), Some(()));

        d.click(DialogRegion::Ok);
        assert_eq!(redraws.try_recv().ok(), Some(()));
        assert!(redraws.try_recv().is_err());
    }
}
