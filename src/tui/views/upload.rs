//! Upload page: path picker, drop target and pasted-text area.
//!
//! Terminals deliver a dragged-in file as a bracketed paste of its path, so a
//! single-line paste while the path field is focused counts as a drop. The
//! text area is a multi-line [`TextArea`].

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use ratatui_textarea::TextArea;

use super::super::layout::upload_card;
use super::super::theme;
use crate::core::intake::{self, IntakeSource};
use crate::tui::widgets::input_buffer::InputBuffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadField {
    Path,
    Paste,
}

impl UploadField {
    fn toggle(self) -> Self {
        match self {
            UploadField::Path => UploadField::Paste,
            UploadField::Paste => UploadField::Path,
        }
    }
}

/// Outcome of an input event on the upload page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    /// Not handled; fall through to global keybindings.
    Ignored,
    Consumed,
    /// A contract was submitted.
    Submit(IntakeSource),
}

pub struct UploadState {
    field: UploadField,
    path: InputBuffer,
    paste: TextArea<'static>,
}

impl UploadState {
    pub fn new() -> Self {
        let mut state = Self {
            field: UploadField::Path,
            path: InputBuffer::new(),
            paste: contract_text_area(),
        };
        state.update_focus_styles();
        state
    }

    pub fn field(&self) -> UploadField {
        self.field
    }

    /// Contents of the pasted-text area, lines joined with `\n`.
    pub fn paste_text(&self) -> String {
        self.paste.lines().join("\n")
    }

    /// Clear both inputs and focus the path field.
    pub fn reset(&mut self) {
        self.path.clear();
        self.paste = contract_text_area();
        self.set_field(UploadField::Path);
    }

    fn set_field(&mut self, field: UploadField) {
        self.field = field;
        self.update_focus_styles();
    }

    fn update_focus_styles(&mut self) {
        let focused = self.field == UploadField::Paste;
        self.paste.set_block(theme::panel("Contract text", focused));
        self.paste.set_cursor_style(if focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        });
    }

    fn insert_paste(&mut self, text: &str) {
        self.paste.insert_str(text.replace("\r\n", "\n").replace('\r', "\n"));
    }

    // ── Input ────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event) -> UploadResult {
        match event {
            Event::Paste(payload) => self.handle_paste(payload),
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => self.handle_key(*code, *modifiers),
            _ => UploadResult::Ignored,
        }
    }

    fn handle_paste(&mut self, payload: &str) -> UploadResult {
        if self.field == UploadField::Paste {
            self.insert_paste(payload);
            return UploadResult::Consumed;
        }

        if let Some(source) = IntakeSource::dropped(payload) {
            log::debug!("Drop received on upload page");
            return UploadResult::Submit(source);
        }

        if !payload.trim().is_empty() {
            // Multi-line text dropped on the path field belongs in the text area.
            self.insert_paste(payload);
            self.set_field(UploadField::Paste);
        }
        UploadResult::Consumed
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) -> UploadResult {
        match (modifiers, code) {
            (KeyModifiers::CONTROL, KeyCode::Char('s')) => {
                return match IntakeSource::pasted(&self.paste_text()) {
                    Some(source) => UploadResult::Submit(source),
                    None => UploadResult::Consumed,
                };
            }
            (KeyModifiers::CONTROL, _) => return UploadResult::Ignored,
            _ => {}
        }

        match (self.field, code) {
            (_, KeyCode::Tab | KeyCode::BackTab) => self.set_field(self.field.toggle()),
            (_, KeyCode::Esc | KeyCode::F(_)) => return UploadResult::Ignored,
            (UploadField::Paste, _) => {
                self.paste.input(Event::Key(KeyEvent::new(code, modifiers)));
            }
            (UploadField::Path, KeyCode::Enter) => {
                return match IntakeSource::picked(self.path.text()) {
                    Some(source) => UploadResult::Submit(source),
                    None => UploadResult::Consumed,
                };
            }
            (UploadField::Path, KeyCode::Backspace) => self.path.backspace(),
            (UploadField::Path, KeyCode::Delete) => self.path.delete(),
            (UploadField::Path, KeyCode::Left) => self.path.move_left(),
            (UploadField::Path, KeyCode::Right) => self.path.move_right(),
            (UploadField::Path, KeyCode::Home) => self.path.move_home(),
            (UploadField::Path, KeyCode::End) => self.path.move_end(),
            (UploadField::Path, KeyCode::Char(c))
                if matches!(modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) =>
            {
                self.path.insert_char(c);
            }
            _ => return UploadResult::Ignored,
        }
        UploadResult::Consumed
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let card = upload_card(area);
        let block = Block::default()
            .title(Line::styled(" Legal AI Clause Assistant ", theme::title()))
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::PRIMARY));

        let inner = block.inner(card);
        frame.render_widget(Clear, card);
        frame.render_widget(block, card);

        let rows = Layout::vertical([
            Constraint::Length(2), // Subtitle
            Constraint::Length(3), // Path field
            Constraint::Length(1), // Format hint
            Constraint::Length(1), // OR
            Constraint::Min(3),    // Paste area
            Constraint::Length(1), // Analyze button
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

        frame.render_widget(
            Paragraph::new(Line::styled(
                "Upload your contract or paste text for analysis",
                theme::muted(),
            ))
            .alignment(Alignment::Center),
            rows[0],
        );

        self.render_path_field(frame, rows[1]);
        frame.render_widget(Paragraph::new(self.format_hint()), rows[2]);
        frame.render_widget(
            Paragraph::new(Line::styled("OR", theme::muted())).alignment(Alignment::Center),
            rows[3],
        );
        frame.render_widget(&self.paste, rows[4]);

        let button_style = if self.paste_text().trim().is_empty() {
            Style::default().fg(theme::TEXT_MUTED).bg(theme::BG_SURFACE)
        } else {
            theme::button()
        };
        frame.render_widget(
            Paragraph::new(Line::styled("  Analyze Text (Ctrl+S)  ", button_style))
                .alignment(Alignment::Center),
            rows[5],
        );

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::styled("Tab", theme::highlight()),
                Span::styled(":switch field  ", theme::key_hint()),
                Span::styled("Enter", theme::highlight()),
                Span::styled(":open path  ", theme::key_hint()),
                Span::styled("F1", theme::highlight()),
                Span::styled(":help  ", theme::key_hint()),
                Span::styled("Ctrl+C", theme::highlight()),
                Span::styled(":quit", theme::key_hint()),
            ]))
            .alignment(Alignment::Center),
            rows[6],
        );
    }

    fn render_path_field(&self, frame: &mut Frame, area: Rect) {
        let focused = self.field == UploadField::Path;
        let block = Block::default()
            .title(" Choose File (type a path or drop a file here) ")
            .borders(Borders::ALL)
            .border_style(if focused {
                Style::default().fg(theme::PRIMARY_LIGHT)
            } else {
                Style::default().fg(theme::PRIMARY).add_modifier(Modifier::DIM)
            });
        let line = self.path.to_line(focused, "e.g. ~/contracts/offer.pdf");
        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn format_hint(&self) -> Line<'static> {
        let name = IntakeSource::picked(self.path.text()).map(|s| s.file_name());
        match name {
            Some(name) if !intake::is_accepted(&name) => Line::styled(
                format!(" {name}: unlisted format, it will still be analysed"),
                Style::default().fg(theme::WARNING),
            ),
            _ => Line::styled(" Supported formats: PDF, DOC, DOCX, TXT", theme::dim()),
        }
    }
}

fn contract_text_area() -> TextArea<'static> {
    let mut area = TextArea::default();
    area.set_placeholder_text("Paste your contract text here...");
    area.set_placeholder_style(theme::dim());
    area.set_cursor_line_style(Style::default());
    area
}
