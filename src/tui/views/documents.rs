//! Slide-over document menu: every analysed contract plus "Upload Another File".

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::clauses::scroll_to_show;
use super::super::theme;
use crate::core::analysis::Document;

pub const UPLOAD_ANOTHER_LABEL: &str = "+ Upload Another File";

/// Outcome of an input event while the menu is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuResult {
    Consumed,
    Close,
    Quit,
    Help,
    Switch(usize),
    UploadAnother,
}

/// Menu cursor. Rows `0..documents.len()` are documents; the row after
/// them is the upload entry.
pub struct DocumentMenuState {
    cursor: usize,
}

impl DocumentMenuState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Put the cursor on the current document when the menu opens.
    pub fn open_at(&mut self, current: Option<usize>) {
        self.cursor = current.unwrap_or(0);
    }

    pub fn handle_input(&mut self, event: &Event, documents: &[Document]) -> MenuResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return MenuResult::Consumed;
        };

        let last = documents.len();
        self.cursor = self.cursor.min(last);

        match (*modifiers, *code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => MenuResult::Quit,
            (_, KeyCode::F(1)) => MenuResult::Help,
            (_, KeyCode::Esc) | (_, KeyCode::Char('m')) | (_, KeyCode::Char('q')) => {
                MenuResult::Close
            }
            (_, KeyCode::Char('j')) | (_, KeyCode::Down) => {
                self.cursor = (self.cursor + 1).min(last);
                MenuResult::Consumed
            }
            (_, KeyCode::Char('k')) | (_, KeyCode::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
                MenuResult::Consumed
            }
            (_, KeyCode::Char('u')) => MenuResult::UploadAnother,
            (_, KeyCode::Enter) => {
                if self.cursor == last {
                    MenuResult::UploadAnother
                } else {
                    MenuResult::Switch(self.cursor)
                }
            }
            _ => MenuResult::Consumed,
        }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        documents: &[Document],
        current: Option<usize>,
    ) {
        frame.render_widget(Clear, area);
        let block = theme::panel("Uploaded Files", true)
            .style(Style::default().bg(theme::BG_SURFACE));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::vertical([
            Constraint::Min(1),    // Documents + upload entry
            Constraint::Length(1), // Key hints
        ])
        .split(inner);

        let mut lines = Vec::new();
        if documents.is_empty() {
            lines.push(Line::styled("  No files yet", theme::muted()));
        }

        let mut cursor_range = (0, 0);
        for (index, doc) in documents.iter().enumerate() {
            let is_current = current == Some(index);
            let is_cursor = self.cursor == index;
            if is_cursor {
                cursor_range = (lines.len(), lines.len() + 2);
            }

            let marker = if is_current { "● " } else { "  " };
            let name_style = match (is_cursor, is_current) {
                (true, _) => theme::highlight(),
                (false, true) => Style::default()
                    .fg(theme::PRIMARY_LIGHT)
                    .add_modifier(Modifier::BOLD),
                (false, false) => Style::default().fg(theme::TEXT),
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(theme::PRIMARY_LIGHT)),
                Span::styled(doc.file_name.clone(), name_style),
            ]));

            let mut detail = vec![Span::styled(
                format!("  {} · {} clauses", doc.origin.label(), doc.clauses.len()),
                theme::dim(),
            )];
            if let Some(level) = doc.highest_risk() {
                detail.push(Span::raw("  "));
                detail.push(Span::styled(
                    format!("{} {}", level.icon(), level.as_str()),
                    theme::risk_badge(level),
                ));
            }
            lines.push(Line::from(detail));
            lines.push(Line::raw(""));
        }

        let upload_style = if self.cursor >= documents.len() {
            cursor_range = (lines.len(), lines.len() + 1);
            theme::highlight()
        } else {
            Style::default().fg(theme::PRIMARY_LIGHT)
        };
        lines.push(Line::styled(format!("  {UPLOAD_ANOTHER_LABEL}"), upload_style));

        let visible_height = chunks[0].height as usize;
        let total = lines.len();
        let scroll = scroll_to_show(cursor_range, visible_height, total);
        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(visible_height).collect();
        frame.render_widget(Paragraph::new(visible), chunks[0]);

        if total > visible_height {
            let mut scrollbar_state = ScrollbarState::new(total)
                .position(scroll)
                .viewport_content_length(visible_height);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut scrollbar_state,
            );
        }

        frame.render_widget(
            Paragraph::new(Line::styled(
                "  j/k move · Enter open · Esc close",
                theme::key_hint(),
            )),
            chunks[1],
        );
    }
}
