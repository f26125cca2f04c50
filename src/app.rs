//! Demo host embedding the modal dialog.
//!
//! A minimal backdrop view with two demo prompts. The host never polls the
//! widget: decisions and redraw requests arrive on the channels it
//! subscribed to at startup.

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::debug;

use lazymodal::Theme;
use lazymodal::config::{AppConfig, GlobalAction, KeyResolver};
use lazymodal::dialog::{DialogKind, ModalDialog};
use lazymodal::labels::ConfigLabels;
use lazymodal::tui::{Event, Tui};
use lazymodal::ui::{Component, HandledResultExt};

pub struct App {
    dialog: ModalDialog,
    decisions: UnboundedReceiver<bool>,
    redraws: UnboundedReceiver<()>,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    last_decision: Option<bool>,
    dirty: bool,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig, resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let labels = Arc::new(ConfigLabels::new(config.labels.clone()));
        let mut dialog = ModalDialog::new(labels, Arc::clone(&resolver));
        let decisions = dialog.decisions();
        let redraws = dialog.redraws();
        Self {
            dialog,
            decisions,
            redraws,
            resolver,
            theme,
            last_decision: None,
            dirty: true,
            should_quit: false,
        }
    }

    /// Open a dialog before the event loop starts (`--open`).
    pub fn open_dialog(&mut self, message: impl Into<String>, kind: DialogKind) {
        self.dialog.open(message, kind);
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(60.0, 4.0)?;
        tui.enter()?;

        loop {
            if let Some(event) = tui.next_event().await {
                self.handle_event(event, &mut tui)?;
            }
            while let Ok(decision) = self.decisions.try_recv() {
                debug!(decision, "host received decision");
                self.last_decision = Some(decision);
                self.dirty = true;
            }
            while self.redraws.try_recv().is_ok() {
                self.dirty = true;
            }
            if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        Ok(())
    }

    fn handle_event(&mut self, event: Event, tui: &mut Tui) -> Result<()> {
        match event {
            Event::Quit => self.should_quit = true,
            Event::Init | Event::Resize(_, _) => self.dirty = true,
            Event::Render => self.render(tui)?,
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            Event::Error(message) => debug!("event stream error: {message}"),
            Event::Tick => {}
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        // While a dialog is open it captures the keyboard; its redraw
        // requests arrive on the channel.
        if self.dialog.handle_key(key).process().0 {
            return;
        }

        if self.resolver.matches_global(&key, GlobalAction::Quit) {
            self.should_quit = true;
        } else if self.resolver.matches_global(&key, GlobalAction::OpenAlert) {
            self.dialog.alert("Changes saved.");
        } else if self.resolver.matches_global(&key, GlobalAction::OpenConfirm) {
            self.dialog.confirm("Delete the selected entry?");
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        _ = self.dialog.handle_mouse(mouse).process();
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        self.dirty = false;

        let theme = self.theme;
        let key_style = Style::default()
            .fg(theme.key_hint())
            .add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(theme.text());
        let status = match self.last_decision {
            Some(true) => "confirmed",
            Some(false) => "declined",
            None => "none yet",
        };
        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    self.resolver.display_global(GlobalAction::OpenAlert),
                    key_style,
                ),
                Span::styled("  open an alert", text_style),
            ]),
            Line::from(vec![
                Span::styled(
                    self.resolver.display_global(GlobalAction::OpenConfirm),
                    key_style,
                ),
                Span::styled("  open a confirm prompt", text_style),
            ]),
            Line::from(vec![
                Span::styled(self.resolver.display_global(GlobalAction::Quit), key_style),
                Span::styled("  quit", text_style),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                format!("last decision: {status}"),
                Style::default().fg(theme.hint()),
            )),
        ];

        tui.draw(|frame| {
            let area = frame.area();
            let block = Block::default()
                .title(" lazymodal demo ")
                .title_style(
                    Style::default()
                        .fg(theme.title())
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.border()))
                .style(Style::default().bg(theme.panel()));
            let inner = block.inner(area);
            frame.render_widget(block, area);
            frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);

            self.dialog.render(frame, area, &theme);
        })?;
        Ok(())
    }
}
