//! Chat panel: questions about the selected clause and the assistant's replies.

use std::cell::Cell;

use chrono::Local;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::super::theme;
use crate::core::chat::{ChatMessage, Role};
use crate::core::session::Session;
use crate::tui::widgets::input_buffer::InputBuffer;
use crate::tui::widgets::wrap::wrap_text;

const PLACEHOLDER_READY: &str = "Ask about this clause...";
const PLACEHOLDER_DISABLED: &str = "Select a clause first...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatInputMode {
    Normal,
    Insert,
}

pub struct ChatPanelState {
    input: InputBuffer,
    mode: ChatInputMode,
    /// Lines scrolled up from the bottom. 0 follows new messages.
    scroll_from_bottom: usize,
    /// Furthest `scroll_from_bottom` can go, as of the last render.
    max_scroll: Cell<usize>,
}

impl ChatPanelState {
    pub fn new() -> Self {
        Self {
            input: InputBuffer::new(),
            mode: ChatInputMode::Normal,
            scroll_from_bottom: 0,
            max_scroll: Cell::new(0),
        }
    }

    pub fn mode(&self) -> ChatInputMode {
        self.mode
    }

    pub fn is_inserting(&self) -> bool {
        self.mode == ChatInputMode::Insert
    }

    pub fn input_text(&self) -> &str {
        self.input.text()
    }

    /// Enter insert mode. Refused while no clause is selected.
    pub fn focus_input(&mut self, session: &Session) -> bool {
        if session.can_chat() {
            self.mode = ChatInputMode::Insert;
            true
        } else {
            false
        }
    }

    pub fn leave_input(&mut self) {
        self.mode = ChatInputMode::Normal;
    }

    // ── Input ────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, session: &mut Session) -> bool {
        // A document switch can drop the selection under an open input.
        if self.mode == ChatInputMode::Insert && !session.can_chat() {
            self.mode = ChatInputMode::Normal;
        }

        match event {
            Event::Paste(text) if self.mode == ChatInputMode::Insert => {
                self.input.insert_str(text);
                true
            }
            Event::Key(KeyEvent {
                code,
                modifiers,
                kind: KeyEventKind::Press,
                ..
            }) => match self.mode {
                ChatInputMode::Insert => self.handle_insert_input(*code, *modifiers, session),
                ChatInputMode::Normal => self.handle_normal_input(*code, *modifiers, session),
            },
            _ => false,
        }
    }

    fn handle_insert_input(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        session: &mut Session,
    ) -> bool {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }

        match code {
            KeyCode::Esc => self.mode = ChatInputMode::Normal,
            KeyCode::Enter => {
                if session.send_chat(self.input.text()) {
                    self.input.clear();
                    self.scroll_from_bottom = 0;
                }
            }
            KeyCode::Backspace => self.input.backspace(),
            KeyCode::Delete => self.input.delete(),
            KeyCode::Left => self.input.move_left(),
            KeyCode::Right => self.input.move_right(),
            KeyCode::Home => self.input.move_home(),
            KeyCode::End => self.input.move_end(),
            KeyCode::Char(c) => self.input.insert_char(c),
            _ => return false,
        }
        true
    }

    fn handle_normal_input(
        &mut self,
        code: KeyCode,
        modifiers: KeyModifiers,
        session: &Session,
    ) -> bool {
        if !matches!(modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
            return false;
        }

        match code {
            KeyCode::Char('i') | KeyCode::Enter => {
                self.focus_input(session);
            }
            KeyCode::Char('k') | KeyCode::Up => self.scroll_up(1),
            KeyCode::Char('j') | KeyCode::Down => self.scroll_down(1),
            KeyCode::PageUp => self.scroll_up(10),
            KeyCode::PageDown => self.scroll_down(10),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_from_bottom = self.max_scroll.get(),
            KeyCode::Char('G') | KeyCode::End => self.scroll_from_bottom = 0,
            _ => return false,
        }
        true
    }

    // ── Scrolling ────────────────────────────────────────────────────

    fn scroll_up(&mut self, n: usize) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .saturating_add(n)
            .min(self.max_scroll.get());
    }

    fn scroll_down(&mut self, n: usize) {
        self.scroll_from_bottom = self
            .scroll_from_bottom
            .min(self.max_scroll.get())
            .saturating_sub(n);
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let chunks = Layout::vertical([
            Constraint::Min(1),    // Messages
            Constraint::Length(3), // Input
        ])
        .split(area);

        self.render_messages(frame, chunks[0], session, focused);
        self.render_input(frame, chunks[1], session);
    }

    fn render_messages(&self, frame: &mut Frame, area: Rect, session: &Session, focused: bool) {
        let block = theme::panel("AI Legal Assistant", focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let width = inner.width.saturating_sub(1) as usize;
        let context = match session.selected_clause() {
            Some(clause) => Line::from(vec![
                Span::styled("Context: ", theme::muted()),
                Span::styled(
                    format!("Clause {} - {}", clause.id, clause.title),
                    Style::default().fg(theme::risk_color(clause.risk)),
                ),
            ]),
            None => Line::styled("Select a clause to ask about it.", theme::muted()),
        };

        let mut lines = vec![context, Line::raw("")];
        let messages = session.chat().messages();
        if messages.is_empty() {
            let hint = if session.can_chat() {
                "Press i to ask a question about this clause."
            } else {
                "Pick a clause in the list and press Enter."
            };
            for line in wrap_text(hint, width) {
                lines.push(Line::styled(line, theme::dim()));
            }
        }
        for message in messages {
            lines.extend(message_lines(message, width));
        }

        let visible_height = inner.height as usize;
        let total = lines.len();
        let max_scroll = total.saturating_sub(visible_height);
        self.max_scroll.set(max_scroll);
        let scroll = max_scroll.saturating_sub(self.scroll_from_bottom.min(max_scroll));

        let visible: Vec<Line> = lines.into_iter().skip(scroll).take(visible_height).collect();
        frame.render_widget(Paragraph::new(visible), inner);

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
    }

    fn render_input(&self, frame: &mut Frame, area: Rect, session: &Session) {
        let enabled = session.can_chat();
        let inserting = enabled && self.mode == ChatInputMode::Insert;

        let (border, title) = if inserting {
            (Style::default().fg(theme::WARNING), " Message (Enter send, Esc exit) ")
        } else if enabled {
            (theme::border_default(), " Message (i to type) ")
        } else {
            (Style::default().fg(theme::TEXT_DIM), " Message ")
        };
        let placeholder = if enabled {
            PLACEHOLDER_READY
        } else {
            PLACEHOLDER_DISABLED
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title);
        let line = self.input.to_line(inserting, placeholder);
        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}

fn message_lines(message: &ChatMessage, width: usize) -> Vec<Line<'static>> {
    let color = match message.role {
        Role::User => theme::SUCCESS,
        Role::Assistant => theme::PRIMARY_LIGHT,
    };
    let time = message.created_at.with_timezone(&Local).format("%H:%M");

    let mut out = vec![Line::from(vec![
        Span::styled(
            format!("── {} ", message.role.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{time} ──"), theme::dim()),
    ])];
    for line in wrap_text(&message.text, width) {
        out.push(Line::raw(line));
    }
    out.push(Line::raw(""));
    out
}
