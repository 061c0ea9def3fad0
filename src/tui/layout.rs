//! Layout computation for the upload and analysis pages.

use ratatui::layout::{Constraint, Layout, Rect};

use crate::config::LayoutConfig;
use crate::core::session::MobileView;

/// Maximum width of the centered upload card.
pub const UPLOAD_CARD_WIDTH: u16 = 72;
/// Height of the upload card.
pub const UPLOAD_CARD_HEIGHT: u16 = 24;

/// Whether the analysis page shows both panels or one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Wide,
    Narrow,
}

impl LayoutMode {
    pub fn for_width(width: u16, config: &LayoutConfig) -> Self {
        if width < config.narrow_width {
            LayoutMode::Narrow
        } else {
            LayoutMode::Wide
        }
    }
}

/// Split off the one-row status bar. Returns `(content, status)`.
pub fn split_status(area: Rect) -> (Rect, Rect) {
    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);
    (rows[0], rows[1])
}

/// Computed regions of the analysis page for a single frame.
pub struct AnalysisLayout {
    /// Tab bar (narrow only).
    pub tabs: Option<Rect>,
    /// Clause list (None when hidden on narrow layouts).
    pub clauses: Option<Rect>,
    /// Chat panel (None when hidden on narrow layouts).
    pub chat: Option<Rect>,
}

impl AnalysisLayout {
    pub fn compute(area: Rect, view: MobileView, config: &LayoutConfig) -> (Self, LayoutMode) {
        let mode = LayoutMode::for_width(area.width, config);

        let layout = match mode {
            LayoutMode::Wide => {
                let chat_width = config.chat_width.min(area.width / 2);
                let cols = Layout::horizontal([
                    Constraint::Min(1),
                    Constraint::Length(chat_width),
                ])
                .split(area);
                AnalysisLayout {
                    tabs: None,
                    clauses: Some(cols[0]),
                    chat: Some(cols[1]),
                }
            }
            LayoutMode::Narrow => {
                let rows = Layout::vertical([
                    Constraint::Length(1), // Tab bar
                    Constraint::Min(1),    // Active panel
                ])
                .split(area);
                let (clauses, chat) = match view {
                    MobileView::Clauses => (Some(rows[1]), None),
                    MobileView::Chat => (None, Some(rows[1])),
                };
                AnalysisLayout {
                    tabs: Some(rows[0]),
                    clauses,
                    chat,
                }
            }
        };

        (layout, mode)
    }
}

/// Left-anchored slide-over panel, full height.
pub fn menu_area(area: Rect, menu_width: u16) -> Rect {
    Rect::new(area.x, area.y, menu_width.min(area.width), area.height)
}

/// Centered upload card, shrunk to fit small terminals.
pub fn upload_card(area: Rect) -> Rect {
    let width = UPLOAD_CARD_WIDTH.min(area.width);
    let height = UPLOAD_CARD_HEIGHT.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Calculate a centered rect using percentage of parent area.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .split(area);

    Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .split(popup_layout[1])[1]
}
