//! Centralized color theme for the Clause Assistant TUI.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::core::analysis::RiskLevel;

// ── Primary palette ─────────────────────────────────────────────────────────

/// Blue: primary accent, active items, focused borders.
pub const PRIMARY: Color = Color::Rgb(0x25, 0x63, 0xEB);
/// Light blue: highlights, hints, secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x60, 0xA5, 0xFA);
/// Indigo: subtle backgrounds, selected rows.
pub const PRIMARY_DARK: Color = Color::Rgb(0x1E, 0x1B, 0x4B);

// ── Backgrounds ─────────────────────────────────────────────────────────────

/// Slate: base background.
pub const BG_BASE: Color = Color::Rgb(0x0F, 0x17, 0x2A);
/// Surface: elevated panels, slide-over menu.
pub const BG_SURFACE: Color = Color::Rgb(0x1E, 0x29, 0x3B);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE2, 0xE8, 0xF0);
/// Muted text: secondary labels, borders.
pub const TEXT_MUTED: Color = Color::Rgb(0x94, 0xA3, 0xB8);
/// Dim text: disabled items, faint hints.
pub const TEXT_DIM: Color = Color::Rgb(0x47, 0x55, 0x69);

// ── Semantic ────────────────────────────────────────────────────────────────

pub const ERROR: Color = Color::Rgb(0xEF, 0x44, 0x44);
pub const SUCCESS: Color = Color::Rgb(0x22, 0xC5, 0x5E);
pub const WARNING: Color = Color::Rgb(0xEA, 0xB3, 0x08);
pub const INFO: Color = Color::Rgb(0x38, 0xBD, 0xF8);

// ── Risk ────────────────────────────────────────────────────────────────────

pub fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Low => SUCCESS,
        RiskLevel::Medium => WARNING,
        RiskLevel::High => ERROR,
    }
}

/// Bold risk-colored text for the icon + label badge.
pub fn risk_badge(level: RiskLevel) -> Style {
    Style::default()
        .fg(risk_color(level))
        .add_modifier(Modifier::BOLD)
}

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent-colored bold text (titles, active items).
pub fn title() -> Style {
    Style::default().fg(PRIMARY_LIGHT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn border_focused() -> Style {
    Style::default().fg(PRIMARY_LIGHT)
}

pub fn border_default() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Highlighted/selected item.
pub fn highlight() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(PRIMARY_DARK)
        .add_modifier(Modifier::BOLD)
}

pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Key hint style (e.g., "q:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(PRIMARY_LIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Insert mode badge.
pub fn insert_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(WARNING)
        .add_modifier(Modifier::BOLD)
}

/// Primary call-to-action button.
pub fn button() -> Style {
    Style::default()
        .fg(TEXT)
        .bg(PRIMARY)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block, styled by focus.
pub fn panel(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        border_focused()
    } else {
        border_default()
    };
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(border)
}
