//! Layout, painting, and click routing for the modal dialog.
//!
//! Everything here is render-surface work: where the overlay, content box,
//! and controls sit, how they are painted, and which named region a raw
//! click position belongs to. No closing decision is made here.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::Theme;

use super::{DialogKind, DialogRegion};

// Key hints shown next to the button captions; they mirror the default
// dialog keybindings.
const OK_HINT_CONFIRM: &str = "y";
const OK_HINT_ALERT: &str = "Enter";
const CANCEL_HINT: &str = "n";

/// Gap between the two buttons of a confirm dialog, in cells.
const BUTTON_GAP: u16 = 4;

/// Rects recorded at the last render, used to route raw clicks to named
/// regions. Controls shadow the content box, the content box shadows the
/// overlay.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub(super) overlay: Option<Rect>,
    pub(super) content: Option<Rect>,
    pub(super) ok: Option<Rect>,
    pub(super) cancel: Option<Rect>,
}

impl HitMap {
    /// Forget all regions; a hidden dialog routes nothing.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Region under the given screen position, if any.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<DialogRegion> {
        let pos = Position::new(column, row);
        if self.ok.is_some_and(|r| r.contains(pos)) {
            return Some(DialogRegion::Ok);
        }
        if self.cancel.is_some_and(|r| r.contains(pos)) {
            return Some(DialogRegion::Cancel);
        }
        if self.content.is_some_and(|r| r.contains(pos)) {
            return Some(DialogRegion::Content);
        }
        if self.overlay.is_some_and(|r| r.contains(pos)) {
            return Some(DialogRegion::Overlay);
        }
        None
    }
}

struct DialogLayout {
    content: Rect,
    message: Rect,
    ok: Rect,
    cancel: Option<Rect>,
}

fn button_text(hint: &str, label: &str) -> String {
    format!("[{hint}] {label}")
}

fn text_width(text: &str) -> u16 {
    u16::try_from(text.chars().count()).unwrap_or(u16::MAX)
}

fn layout(area: Rect, kind: DialogKind, ok_label: &str, cancel_label: &str) -> DialogLayout {
    let content = area.centered(Constraint::Percentage(50), Constraint::Length(8));

    // Rows inside the border: blank, message (2), blank, buttons, blank
    let inner = Rect {
        x: content.x.saturating_add(1),
        y: content.y.saturating_add(1),
        width: content.width.saturating_sub(2),
        height: content.height.saturating_sub(2),
    };
    let rows = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(2),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(inner);
    let message = rows[1];
    let button_row = rows[3];

    let ok_hint = match kind {
        DialogKind::Alert => OK_HINT_ALERT,
        DialogKind::Confirm => OK_HINT_CONFIRM,
    };
    let ok_width = text_width(&button_text(ok_hint, ok_label)).min(button_row.width);

    let (ok, cancel) = match kind {
        DialogKind::Alert => {
            let x = button_row.x + button_row.width.saturating_sub(ok_width) / 2;
            (Rect::new(x, button_row.y, ok_width, 1), None)
        }
        DialogKind::Confirm => {
            let cancel_width =
                text_width(&button_text(CANCEL_HINT, cancel_label)).min(button_row.width);
            let total = ok_width
                .saturating_add(BUTTON_GAP)
                .saturating_add(cancel_width);
            let x = button_row.x + button_row.width.saturating_sub(total) / 2;
            let ok = Rect::new(x, button_row.y, ok_width, 1);
            let cancel_x = x.saturating_add(ok_width).saturating_add(BUTTON_GAP);
            let cancel = Rect::new(cancel_x, button_row.y, cancel_width, 1).intersection(button_row);
            (ok, Some(cancel))
        }
    };

    DialogLayout {
        content,
        message,
        ok,
        cancel,
    }
}

/// Paint the overlay, content box, message, and controls; returns the hit
/// map of the regions just drawn.
pub(super) fn render(
    frame: &mut Frame,
    area: Rect,
    theme: &Theme,
    kind: DialogKind,
    message: &str,
    ok_label: &str,
    cancel_label: &str,
) -> HitMap {
    let dialog = layout(area, kind, ok_label, cancel_label);

    // Overlay scrim over the whole host view
    frame.render_widget(Clear, area);
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.backdrop())),
        area,
    );

    // Content box
    let title = match kind {
        DialogKind::Alert => " Notice ",
        DialogKind::Confirm => " Confirm ",
    };
    let block = Block::default()
        .title(title)
        .title_style(
            Style::default()
                .fg(theme.title())
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.panel()));
    frame.render_widget(Clear, dialog.content);
    frame.render_widget(block, dialog.content);

    let paragraph = Paragraph::new(message.to_string())
        .style(Style::default().fg(theme.text()))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, dialog.message);

    let key_style = Style::default()
        .fg(theme.key_hint())
        .add_modifier(Modifier::BOLD);
    let ok_style = Style::default()
        .fg(match kind {
            DialogKind::Alert => theme.text(),
            DialogKind::Confirm => theme.accept(),
        })
        .add_modifier(Modifier::BOLD);

    let ok_hint = match kind {
        DialogKind::Alert => OK_HINT_ALERT,
        DialogKind::Confirm => OK_HINT_CONFIRM,
    };
    let ok_line = Line::from(vec![
        Span::styled(format!("[{ok_hint}]"), key_style),
        Span::raw(" "),
        Span::styled(ok_label.to_string(), ok_style),
    ]);
    frame.render_widget(Paragraph::new(ok_line), dialog.ok);

    if let Some(cancel_area) = dialog.cancel {
        let cancel_style = Style::default()
            .fg(theme.decline())
            .add_modifier(Modifier::BOLD);
        let cancel_line = Line::from(vec![
            Span::styled(format!("[{CANCEL_HINT}]"), key_style),
            Span::raw(" "),
            Span::styled(cancel_label.to_string(), cancel_style),
        ]);
        frame.render_widget(Paragraph::new(cancel_line), cancel_area);
    }

    HitMap {
        overlay: Some(area),
        content: Some(dialog.content),
        ok: Some(dialog.ok),
        cancel: dialog.cancel,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn contains_rect(outer: Rect, inner: Rect) -> bool {
        inner.intersection(outer) == inner
    }

    #[test]
    fn test_alert_layout_has_single_control() {
        let l = layout(AREA, DialogKind::Alert, "OK", "Cancel");
        assert!(l.cancel.is_none());
        assert!(contains_rect(l.content, l.ok));
        assert!(contains_rect(AREA, l.content));
    }

    #[test]
    fn test_confirm_layout_has_two_controls() {
        let l = layout(AREA, DialogKind::Confirm, "OK", "Cancel");
        let cancel = l.cancel.expect("confirm layout must place a cancel control");
        assert!(contains_rect(l.content, l.ok));
        assert!(contains_rect(l.content, cancel));
        assert!(l.ok.intersection(cancel).is_empty());
        assert!(l.ok.right() <= cancel.left());
    }

    #[test]
    fn test_hit_priority_controls_over_content_over_overlay() {
        let l = layout(AREA, DialogKind::Confirm, "OK", "Cancel");
        let map = HitMap {
            overlay: Some(AREA),
            content: Some(l.content),
            ok: Some(l.ok),
            cancel: l.cancel,
        };

        assert_eq!(map.hit(l.ok.x, l.ok.y), Some(DialogRegion::Ok));
        let cancel = l.cancel.unwrap();
        assert_eq!(map.hit(cancel.x, cancel.y), Some(DialogRegion::Cancel));
        // Top-left corner of the box is neither control
        assert_eq!(
            map.hit(l.content.x, l.content.y),
            Some(DialogRegion::Content)
        );
        assert_eq!(map.hit(0, 0), Some(DialogRegion::Overlay));
        assert_eq!(map.hit(100, 100), None);
    }

    #[test]
    fn test_reset_routes_nothing() {
        let l = layout(AREA, DialogKind::Alert, "OK", "Cancel");
        let mut map = HitMap {
            overlay: Some(AREA),
            content: Some(l.content),
            ok: Some(l.ok),
            cancel: None,
        };
        map.reset();
        assert_eq!(map.hit(0, 0), None);
        assert_eq!(map.hit(l.ok.x, l.ok.y), None);
    }

    #[test]
    fn test_layout_survives_tiny_area() {
        let tiny = Rect {
            x: 0,
            y: 0,
            width: 4,
            height: 2,
        };
        // Must not panic or overflow
        let l = layout(tiny, DialogKind::Confirm, "OK", "Cancel");
        assert!(contains_rect(tiny, l.content));
    }
}
