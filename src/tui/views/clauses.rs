//! Clause browser: the current document's clauses as risk-colored cards.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use super::super::theme;
use crate::core::analysis::{Clause, ClauseId, Document, RiskLevel};
use crate::tui::widgets::wrap::wrap_text;

/// Outcome of an input event in the clause list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseResult {
    Ignored,
    Consumed,
    /// The highlighted clause was activated ("clicked").
    Activate(ClauseId),
}

pub struct ClauseListState {
    /// Highlighted card index.
    cursor: usize,
}

impl ClauseListState {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the highlight to a clause (used after document switches).
    pub fn focus_clause(&mut self, document: &Document, id: Option<ClauseId>) {
        self.cursor = id.and_then(|id| document.clause_index(id)).unwrap_or(0);
    }

    // ── Input ────────────────────────────────────────────────────────

    pub fn handle_input(&mut self, event: &Event, document: &Document) -> ClauseResult {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = event
        else {
            return ClauseResult::Ignored;
        };
        if !matches!(*modifiers, KeyModifiers::NONE | KeyModifiers::SHIFT) {
            return ClauseResult::Ignored;
        }

        let len = document.clauses.len();
        if len == 0 {
            return ClauseResult::Ignored;
        }
        self.cursor = self.cursor.min(len - 1);

        match code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.cursor = (self.cursor + 1).min(len - 1);
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            KeyCode::Char('g') | KeyCode::Home => self.cursor = 0,
            KeyCode::Char('G') | KeyCode::End => self.cursor = len - 1,
            KeyCode::Enter | KeyCode::Char(' ') => {
                return ClauseResult::Activate(document.clauses[self.cursor].id);
            }
            _ => return ClauseResult::Ignored,
        }
        ClauseResult::Consumed
    }

    // ── Rendering ────────────────────────────────────────────────────

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        document: Option<&Document>,
        selected: Option<ClauseId>,
        focused: bool,
    ) {
        let title = match document {
            Some(doc) => format!("Contract Analysis · {}", doc.file_name),
            None => "Contract Analysis".to_string(),
        };
        let block = theme::panel(&title, focused);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(document) = document else {
            frame.render_widget(
                Paragraph::new(Line::styled("  No document loaded.", theme::muted())),
                inner,
            );
            return;
        };

        let mut lines = vec![summary_line(document), Line::raw("")];
        let mut cursor_range = (0, 0);
        let card_width = inner.width.saturating_sub(3) as usize;

        for (index, clause) in document.clauses.iter().enumerate() {
            let is_cursor = focused && index == self.cursor;
            let is_selected = selected == Some(clause.id);
            let start = lines.len();
            lines.extend(card_lines(clause, card_width, is_cursor, is_selected));
            if index == self.cursor {
                cursor_range = (start, lines.len());
            }
            lines.push(Line::raw(""));
        }

        let visible_height = inner.height as usize;
        let total = lines.len();
        let scroll = scroll_to_show(cursor_range, visible_height, total);

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
}

/// "4 clauses  ✗ 2 High  ⚠ 1 Medium  ✓ 1 Low"
fn summary_line(document: &Document) -> Line<'static> {
    let summary = document.risk_summary();
    let mut spans = vec![Span::styled(
        format!(" {} clauses ", summary.total()),
        theme::heading(),
    )];
    for level in [RiskLevel::High, RiskLevel::Medium, RiskLevel::Low] {
        spans.push(Span::styled(
            format!(" {} {} {} ", level.icon(), summary.count(level), level.as_str()),
            theme::risk_badge(level),
        ));
    }
    Line::from(spans)
}

/// Display lines for one clause card.
///
/// The selected card also shows the advisory text, key points and the
/// suggested alternative.
fn card_lines(
    clause: &Clause,
    width: usize,
    is_cursor: bool,
    is_selected: bool,
) -> Vec<Line<'static>> {
    let risk_color = theme::risk_color(clause.risk);
    let bar = || {
        let glyph = if is_cursor { "▶ " } else { "┃ " };
        Span::styled(glyph, Style::default().fg(risk_color).add_modifier(Modifier::BOLD))
    };
    let body = |text: String, style: Style| Line::from(vec![bar(), Span::styled(text, style)]);

    let mut out = Vec::new();

    // Title row with the risk badge right-aligned when it fits.
    let marker = if is_selected { "◆ " } else { "" };
    let heading = format!("{marker}Clause {} - {}", clause.id, clause.title);
    let badge = format!("{} {}", clause.risk.icon(), clause.risk.label());
    let title_style = if is_selected || is_cursor {
        theme::highlight()
    } else {
        theme::heading()
    };
    let used = heading.chars().count() + badge.chars().count();
    if used < width {
        out.push(Line::from(vec![
            bar(),
            Span::styled(heading, title_style),
            Span::raw(" ".repeat(width - used)),
            Span::styled(badge, theme::risk_badge(clause.risk)),
        ]));
    } else {
        for line in wrap_text(&heading, width) {
            out.push(body(line, title_style));
        }
        out.push(Line::from(vec![
            bar(),
            Span::styled(badge, theme::risk_badge(clause.risk)),
        ]));
    }

    out.push(body(
        format!("{} · score {}/10", clause.category, clause.risk_score),
        theme::muted(),
    ));
    for line in wrap_text(&clause.text, width) {
        out.push(body(line, Style::default().fg(theme::TEXT)));
    }

    if is_selected {
        let section = |title: &str| {
            Line::from(vec![
                bar(),
                Span::styled(title.to_string(), Style::default().fg(theme::PRIMARY_LIGHT)),
            ])
        };

        if !clause.advisory.is_empty() {
            out.push(section("Advice"));
            for line in wrap_text(&clause.advisory, width) {
                out.push(body(line, Style::default().fg(theme::TEXT)));
            }
        }
        if !clause.key_points.is_empty() {
            out.push(section("Key points"));
            for point in &clause.key_points {
                for (i, line) in wrap_text(point, width.saturating_sub(2)).into_iter().enumerate() {
                    let prefix = if i == 0 { "• " } else { "  " };
                    out.push(body(format!("{prefix}{line}"), Style::default().fg(theme::TEXT)));
                }
            }
        }
        if !clause.suggested_alternative.is_empty() {
            out.push(section("Suggested alternative"));
            for line in wrap_text(&clause.suggested_alternative, width) {
                out.push(body(line, Style::default().fg(theme::SUCCESS)));
            }
        }
    }

    out
}

/// Scroll offset that keeps `range` (a half-open line range) on screen.
/// Cards taller than the viewport are shown from their first line.
pub(super) fn scroll_to_show(range: (usize, usize), visible_height: usize, total: usize) -> usize {
    let max_scroll = total.saturating_sub(visible_height);
    let (start, end) = range;
    let scroll = if end <= visible_height {
        0
    } else {
        start.min(end - visible_height)
    };
    scroll.min(max_scroll)
}
